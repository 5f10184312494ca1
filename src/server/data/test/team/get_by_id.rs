use super::*;

/// Tests fetching an existing team.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::team::TeamFactory::new(db)
        .name("Herons")
        .mascot("Harriet")
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let team = repo.get_by_id(&created.id).await?.unwrap();

    assert_eq!(team.name, "Herons");
    assert_eq!(team.mascot, "Harriet");

    Ok(())
}

/// Tests fetching an unknown identifier.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let team = repo.get_by_id("does-not-exist").await?;

    assert!(team.is_none());

    Ok(())
}
