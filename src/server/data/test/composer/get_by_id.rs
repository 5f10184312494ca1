use super::*;

/// Tests fetching an existing composer.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_composer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::composer::ComposerFactory::new(db)
        .first_name("Hildegard")
        .last_name("von Bingen")
        .build()
        .await?;

    let repo = ComposerRepository::new(db);
    let composer = repo.get_by_id(&created.id).await?.unwrap();

    assert_eq!(composer.id, created.id);
    assert_eq!(composer.first_name, "Hildegard");
    assert_eq!(composer.last_name, "von Bingen");

    Ok(())
}

/// Tests fetching an unknown identifier.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_composer(db).await?;

    let repo = ComposerRepository::new(db);
    let composer = repo.get_by_id("does-not-exist").await?;

    assert!(composer.is_none());

    Ok(())
}
