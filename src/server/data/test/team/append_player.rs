use super::*;

/// Tests appending a player to a team.
///
/// Verifies that the roster grows by one and the new player is last.
///
/// Expected: Ok(Some) with the player appended
#[tokio::test]
async fn appends_player_last() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::team::TeamFactory::new(db)
        .player("Ada", "Lovelace", 1000)
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .append_player(&created.id, player("Charles", "Babbage", 750))
        .await?
        .unwrap();

    assert_eq!(
        team.players,
        vec![
            player("Ada", "Lovelace", 1000),
            player("Charles", "Babbage", 750),
        ]
    );

    let stored = Team::find_by_id(created.id).one(db).await?.unwrap();
    assert_eq!(stored.players.0.len(), 2);
    assert_eq!(stored.players.0[1], player("Charles", "Babbage", 750));

    Ok(())
}

/// Tests that salary is stored without range validation.
///
/// Expected: Ok(Some) with a negative salary kept as submitted
#[tokio::test]
async fn stores_salary_as_submitted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .append_player(&created.id, player("Negative", "Salary", -5))
        .await?
        .unwrap();

    assert_eq!(team.players[0].salary, Number::from(-5));

    Ok(())
}

/// Tests appending to an unknown team.
///
/// Expected: Ok(None) and no roster modified
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .append_player("does-not-exist", player("Ada", "Lovelace", 1))
        .await?;

    assert!(team.is_none());

    let stored = Team::find_by_id(other.id).one(db).await?.unwrap();
    assert!(stored.players.0.is_empty());

    Ok(())
}
