use super::*;

/// Tests fetching a person with a dependent.
///
/// Expected: Ok(Some) including the dependent
#[tokio::test]
async fn finds_existing_person() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::person::PersonFactory::new(db)
        .dependent("Sam", "Doe")
        .build()
        .await?;

    let repo = PersonRepository::new(db);
    let person = repo.get_by_id(&created.id).await?.unwrap();

    assert_eq!(person.id, created.id);
    assert_eq!(person.dependents.len(), 1);
    assert_eq!(person.dependents[0].last_name, "Doe");

    Ok(())
}

/// Tests fetching an unknown identifier.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    let person = repo.get_by_id("does-not-exist").await?;

    assert!(person.is_none());

    Ok(())
}
