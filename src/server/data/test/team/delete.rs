use super::*;

/// Tests deleting a team with players.
///
/// Expected: Ok(true) with the team and its roster gone
#[tokio::test]
async fn deletes_team_with_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::team::TeamFactory::new(db)
        .player("Ada", "Lovelace", 1000)
        .build()
        .await?;
    let other = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let deleted = repo.delete(&target.id).await?;

    assert!(deleted);
    assert!(Team::find_by_id(target.id).one(db).await?.is_none());
    assert!(Team::find_by_id(other.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting an unknown identifier.
///
/// Expected: Ok(false) with the collection unchanged
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let deleted = repo.delete("does-not-exist").await?;

    assert!(!deleted);
    assert_eq!(Team::find().count(db).await?, 1);

    Ok(())
}
