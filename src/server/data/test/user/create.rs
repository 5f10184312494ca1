use super::*;

/// Tests inserting a user.
///
/// Verifies that the digest is stored untouched under the `password` column.
///
/// Expected: Ok with the user persisted
#[tokio::test]
async fn creates_user_with_digest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            user_name: "alice".to_string(),
            password_digest: "$argon2id$v=19$m=8,t=1,p=1$c2FsdA$aGFzaA".to_string(),
            email_address: "alice@example.com".to_string(),
        })
        .await?;

    assert!(!user.id.is_empty());

    let stored = User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.user_name, "alice");
    assert_eq!(stored.password, "$argon2id$v=19$m=8,t=1,p=1$c2FsdA$aGFzaA");
    assert_eq!(stored.email_address, "alice@example.com");

    Ok(())
}

/// Tests that the repository itself does not enforce unique userNames.
///
/// Expected: Ok with two users sharing a userName
#[tokio::test]
async fn does_not_enforce_unique_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_name("alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        user_name: "alice".to_string(),
        password_digest: "digest".to_string(),
        email_address: "other@example.com".to_string(),
    })
    .await?;

    assert_eq!(User::find().count(db).await?, 2);

    Ok(())
}
