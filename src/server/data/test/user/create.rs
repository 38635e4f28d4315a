use super::*;

fn param(username: &str) -> CreateUserParam {
    CreateUserParam {
        username: username.to_string(),
        password_hash: "hash".to_string(),
        role: Role::Mentor,
        email: Some("ada@example.edu".to_string()),
        name: "Ada".to_string(),
    }
}

/// Tests that a created user can be found by username with its role stored by name.
///
/// Expected: Ok(Some) with role "mentor"
#[tokio::test]
async fn creates_and_finds_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(param("ada")).await?;

    let found = repo.find_by_username("ada").await?.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.role, "mentor");
    assert_eq!(found.email.as_deref(), Some("ada@example.edu"));
    assert!(repo.find_by_username("ADA").await?.is_none());

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("ada")).await?;

    let result = repo.create(param("ada")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that replacing the hash leaves other fields untouched.
#[tokio::test]
async fn updates_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(param("ada")).await?;

    repo.update_password(user.id, "new-hash".to_string()).await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "new-hash");
    assert_eq!(stored.username, "ada");

    Ok(())
}

/// Tests that updating a missing user reports RecordNotFound.
#[tokio::test]
async fn update_password_fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update_password(999, "hash".to_string())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
