use super::*;

/// Tests appending an invoice to a customer without invoices.
///
/// Verifies that the invoice is persisted with its line items in submitted order.
///
/// Expected: Ok(Some) with exactly that invoice stored
#[tokio::test]
async fn appends_invoice_with_line_items_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Customer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::customer::CustomerFactory::new(db)
        .user_name("shopper1")
        .build()
        .await?;

    let submitted = invoice(35.0, &[("Bolt", 0.5, 10), ("Nut", 0.25, 20), ("Drill", 25.0, 1)]);

    let repo = CustomerRepository::new(db);
    let customer = repo
        .append_invoice("shopper1", submitted.clone())
        .await?
        .unwrap();

    assert_eq!(customer.invoices, vec![submitted.clone()]);

    let stored = Customer::find_by_id(created.id).one(db).await?.unwrap();
    assert_eq!(stored.invoices.0, vec![submitted]);

    Ok(())
}

/// Tests appending to a customer that already has invoices.
///
/// Expected: Ok(Some) with the new invoice last and earlier ones untouched
#[tokio::test]
async fn appends_after_existing_invoices() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Customer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = invoice(10.0, &[("Widget", 10.0, 1)]);
    factory::customer::CustomerFactory::new(db)
        .user_name("shopper2")
        .invoice(existing.clone())
        .build()
        .await?;

    let added = invoice(5.0, &[("Gadget", 5.0, 1)]);

    let repo = CustomerRepository::new(db);
    let customer = repo
        .append_invoice("shopper2", added.clone())
        .await?
        .unwrap();

    assert_eq!(customer.invoices, vec![existing, added]);

    Ok(())
}

/// Tests appending to an unknown userName.
///
/// Expected: Ok(None) and no customer modified
#[tokio::test]
async fn returns_none_for_unknown_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Customer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_customer(db).await?;

    let repo = CustomerRepository::new(db);
    let customer = repo
        .append_invoice("nobody", invoice(1.0, &[]))
        .await?;

    assert!(customer.is_none());

    let stored = Customer::find_by_id(other.id).one(db).await?.unwrap();
    assert!(stored.invoices.0.is_empty());

    Ok(())
}
