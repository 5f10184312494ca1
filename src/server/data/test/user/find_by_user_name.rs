use super::*;

/// Tests finding a user by userName.
///
/// Expected: Ok(Some) with the stored digest
#[tokio::test]
async fn finds_user_by_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    let created = factory::user::UserFactory::new(db)
        .user_name("alice")
        .password("stored-digest")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_user_name("alice").await?.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.password, "stored-digest");

    Ok(())
}

/// Tests that lookup is exact.
///
/// Expected: Ok(None) for a userName differing only in case
#[tokio::test]
async fn returns_none_for_unknown_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_name("alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_user_name("bob").await?.is_none());
    assert!(repo.find_by_user_name("ALICE").await?.is_none());

    Ok(())
}
