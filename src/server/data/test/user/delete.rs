use super::*;
use sea_orm::EntityTrait;

/// Tests deleting an existing user.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserRepository::new(db).delete(42).await?);

    Ok(())
}

/// Tests that deleting a mentor's account removes the mentor row with it.
#[tokio::test]
async fn cascades_to_mentor_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, mentor) = factory::create_mentor(db).await?;

    UserRepository::new(db).delete(user.id).await?;

    let remaining = entity::prelude::Mentor::find_by_id(mentor.id).one(db).await?;
    assert!(remaining.is_none());

    Ok(())
}
