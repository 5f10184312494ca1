use super::*;

/// Tests finding a customer by userName.
///
/// Expected: Ok(Some) with seeded invoices
#[tokio::test]
async fn finds_customer_by_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Customer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_customer(db).await?;
    let created = factory::customer::CustomerFactory::new(db)
        .user_name("shopper1")
        .invoice(invoice(20.0, &[("Widget", 10.0, 2)]))
        .build()
        .await?;

    let repo = CustomerRepository::new(db);
    let customer = repo.find_by_user_name("shopper1").await?.unwrap();

    assert_eq!(customer.id, created.id);
    assert_eq!(customer.invoices.len(), 1);
    assert_eq!(customer.invoices[0].line_items[0].name, "Widget");

    Ok(())
}

/// Tests looking up an unknown userName.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Customer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_customer(db).await?;

    let repo = CustomerRepository::new(db);
    let customer = repo.find_by_user_name("nobody").await?;

    assert!(customer.is_none());

    Ok(())
}
