use super::*;

/// Tests detecting when admin users exist.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db).await?;

    let result = UserRepository::new(db).admin_exists().await?;

    assert!(result);

    Ok(())
}

/// Tests detecting when no users exist at all (first start).
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).admin_exists().await?;

    assert!(!result);

    Ok(())
}

/// Tests that mentor and mentee accounts do not count as admins.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_non_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .role("mentor")
        .build()
        .await?;

    let result = UserRepository::new(db).admin_exists().await?;

    assert!(!result);

    Ok(())
}
