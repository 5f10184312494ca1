use super::*;

/// Tests creating a team.
///
/// Expected: Ok with identifier assigned and an empty roster
#[tokio::test]
async fn creates_team_with_empty_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParams {
            name: "Otters".to_string(),
            mascot: "Otto".to_string(),
        })
        .await?;

    assert!(!team.id.is_empty());
    assert_eq!(team.name, "Otters");
    assert_eq!(team.mascot, "Otto");
    assert!(team.players.is_empty());

    let stored = Team::find_by_id(team.id).one(db).await?.unwrap();
    assert!(stored.players.0.is_empty());

    Ok(())
}
