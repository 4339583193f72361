use super::*;

/// Tests creating a new user.
///
/// Expected: Ok with name and email stored and an id assigned
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");

    Ok(())
}

/// Tests the unique index on the email column.
///
/// Expected: Err(DbErr) when creating a second user with the same email
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
    })
    .await?;

    let result = repo
        .create(CreateUserParams {
            name: "Other Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
