use super::*;

/// Tests creating a person with roles and dependents.
///
/// Verifies that both nested sequences are stored in the submitted order.
///
/// Expected: Ok with roles and dependents persisted in order
#[tokio::test]
async fn creates_person_with_nested_sequences() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    let person = repo
        .create(CreatePersonParams {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            birth_date: "1906-12-09".to_string(),
            roles: vec![
                Role {
                    text: "Admiral".to_string(),
                },
                Role {
                    text: "Programmer".to_string(),
                },
            ],
            dependents: vec![Dependent {
                first_name: "Ada".to_string(),
                last_name: "Hopper".to_string(),
            }],
        })
        .await?;

    assert!(!person.id.is_empty());

    let stored = Person::find_by_id(person.id).one(db).await?.unwrap();
    assert_eq!(stored.birth_date, "1906-12-09");
    assert_eq!(stored.roles.0.len(), 2);
    assert_eq!(stored.roles.0[0].text, "Admiral");
    assert_eq!(stored.roles.0[1].text, "Programmer");
    assert_eq!(stored.dependents.0.len(), 1);
    assert_eq!(stored.dependents.0[0].first_name, "Ada");

    Ok(())
}

/// Tests creating a person without roles or dependents.
///
/// Expected: Ok with empty nested sequences
#[tokio::test]
async fn creates_person_with_empty_sequences() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    let person = repo
        .create(CreatePersonParams {
            first_name: "Alan".to_string(),
            last_name: "Turing".to_string(),
            birth_date: "1912-06-23".to_string(),
            roles: vec![],
            dependents: vec![],
        })
        .await?;

    assert!(person.roles.is_empty());
    assert!(person.dependents.is_empty());

    Ok(())
}
