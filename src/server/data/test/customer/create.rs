use super::*;

/// Tests creating a customer.
///
/// Expected: Ok with identifier assigned and no invoices
#[tokio::test]
async fn creates_customer_without_invoices() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Customer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let customer = repo
        .create(CreateCustomerParams {
            first_name: "Jane".to_string(),
            last_name: "Roe".to_string(),
            user_name: "jroe".to_string(),
        })
        .await?;

    assert!(!customer.id.is_empty());
    assert_eq!(customer.user_name, "jroe");
    assert!(customer.invoices.is_empty());

    let stored = Customer::find_by_id(customer.id).one(db).await?.unwrap();
    assert!(stored.invoices.0.is_empty());

    Ok(())
}

/// Tests that a duplicate userName is accepted.
///
/// Expected: Ok with two customers sharing the userName
#[tokio::test]
async fn allows_duplicate_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Customer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let params = CreateCustomerParams {
        first_name: "Jane".to_string(),
        last_name: "Roe".to_string(),
        user_name: "jroe".to_string(),
    };
    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
