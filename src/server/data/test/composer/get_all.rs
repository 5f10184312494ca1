use super::*;

/// Tests listing composers after several inserts.
///
/// Expected: Ok with every composer returned in insertion order
#[tokio::test]
async fn returns_all_composers_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_composer(db).await?;
    let second = factory::create_composer(db).await?;
    let third = factory::create_composer(db).await?;

    let repo = ComposerRepository::new(db);
    let composers = repo.get_all().await?;

    let ids: Vec<String> = composers.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests listing an empty collection.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_composers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComposerRepository::new(db);
    let composers = repo.get_all().await?;

    assert!(composers.is_empty());

    Ok(())
}
