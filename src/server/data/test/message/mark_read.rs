use super::*;

/// Tests that only messages from the given sender to the receiver are marked read.
///
/// Expected: receiver's unread count drops by the sender's messages only
#[tokio::test]
async fn marks_only_that_senders_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor, _) = factory::create_mentor(db).await?;
    let (mentee, _) = factory::create_mentee(db).await?;
    let admin = factory::create_admin(db).await?;
    let repo = MessageRepository::new(db);

    repo.create(mentor.id, mentee.id, "One".to_string()).await?;
    repo.create(mentor.id, mentee.id, "Two".to_string()).await?;
    repo.create(admin.id, mentee.id, "Notice".to_string()).await?;

    let updated = repo.mark_read(mentor.id, mentee.id).await?;

    assert_eq!(updated, 2);
    assert_eq!(repo.unread_count(mentee.id).await?, 1);

    Ok(())
}
