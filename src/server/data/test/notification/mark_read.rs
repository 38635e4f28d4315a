use super::*;

/// Tests that marking a notification read twice keeps a single read row.
///
/// Expected: Ok on both calls, notification reported read
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::create_mentee(db).await?;
    let repo = NotificationRepository::new(db);
    let notification = repo.create(broadcast(vec![Role::Mentee])).await?;

    repo.mark_read(notification.id, user.id).await?;
    repo.mark_read(notification.id, user.id).await?;

    let read = repo.read_ids(user.id, vec![notification.id]).await?;
    assert!(read.contains(&notification.id));

    Ok(())
}

/// Tests that read state is tracked per user.
///
/// Expected: a second recipient still sees the notification as unread
#[tokio::test]
async fn read_state_is_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (reader, _) = factory::create_mentee(db).await?;
    let (other, _) = factory::create_mentee(db).await?;
    let repo = NotificationRepository::new(db);
    let notification = repo.create(broadcast(vec![Role::Mentee])).await?;

    repo.mark_read(notification.id, reader.id).await?;

    let read = repo.read_ids(other.id, vec![notification.id]).await?;
    assert!(read.is_empty());

    Ok(())
}
