use super::*;

/// Tests creating a composer.
///
/// Verifies that the repository assigns an identifier and stores the supplied names.
///
/// Expected: Ok with composer persisted under a new identifier
#[tokio::test]
async fn creates_composer_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComposerRepository::new(db);
    let composer = repo
        .create(CreateComposerParams {
            first_name: "Johann".to_string(),
            last_name: "Bach".to_string(),
        })
        .await?;

    assert!(!composer.id.is_empty());
    assert_eq!(composer.first_name, "Johann");
    assert_eq!(composer.last_name, "Bach");

    let stored = Composer::find_by_id(composer.id.clone()).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that two composers with identical names get distinct identifiers.
///
/// Expected: Ok with two documents and two identifiers
#[tokio::test]
async fn creates_distinct_ids_for_identical_composers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComposerRepository::new(db);
    let params = CreateComposerParams {
        first_name: "Clara".to_string(),
        last_name: "Schumann".to_string(),
    };
    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(Composer::find().count(db).await?, 2);

    Ok(())
}
