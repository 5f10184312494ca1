use super::*;

/// Tests listing persons after several inserts.
///
/// Expected: Ok with every person in insertion order
#[tokio::test]
async fn returns_all_persons() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_person(db).await?;
    let second = factory::person::PersonFactory::new(db)
        .role("Engineer")
        .build()
        .await?;

    let repo = PersonRepository::new(db);
    let persons = repo.get_all().await?;

    assert_eq!(persons.len(), 2);
    assert_eq!(persons[0].id, first.id);
    assert_eq!(persons[1].id, second.id);
    assert_eq!(persons[1].roles[0].text, "Engineer");

    Ok(())
}
