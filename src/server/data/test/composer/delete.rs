use super::*;

/// Tests deleting a composer by identifier.
///
/// Expected: Ok(true) with only the target removed
#[tokio::test]
async fn deletes_only_target_composer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_composer(db).await?;
    let other = factory::create_composer(db).await?;

    let repo = ComposerRepository::new(db);
    let deleted = repo.delete(&target.id).await?;

    assert!(deleted);
    assert!(Composer::find_by_id(target.id).one(db).await?.is_none());
    assert!(Composer::find_by_id(other.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting an unknown identifier.
///
/// Expected: Ok(false) with the collection unchanged
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_composer(db).await?;

    let repo = ComposerRepository::new(db);
    let deleted = repo.delete("does-not-exist").await?;

    assert!(!deleted);
    assert_eq!(Composer::find().count(db).await?, 1);

    Ok(())
}
