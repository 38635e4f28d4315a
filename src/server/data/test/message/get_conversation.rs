use super::*;

/// Tests that a conversation includes both directions and excludes third parties.
///
/// Expected: the two exchanged messages in send order
#[tokio::test]
async fn returns_both_directions_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor, _) = factory::create_mentor(db).await?;
    let (mentee, _) = factory::create_mentee(db).await?;
    let (outsider, _) = factory::create_mentee(db).await?;
    let repo = MessageRepository::new(db);

    let first = repo.create(mentor.id, mentee.id, "Hi".to_string()).await?;
    repo.create(outsider.id, mentor.id, "Unrelated".to_string())
        .await?;
    let second = repo.create(mentee.id, mentor.id, "Hello".to_string()).await?;

    let conversation = repo.get_conversation(mentee.id, mentor.id, None).await?;

    let ids: Vec<i32> = conversation.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests polling with an `after` cursor.
///
/// Expected: only messages newer than the cursor
#[tokio::test]
async fn after_cursor_skips_seen_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor, _) = factory::create_mentor(db).await?;
    let (mentee, _) = factory::create_mentee(db).await?;
    let repo = MessageRepository::new(db);

    let seen = repo.create(mentor.id, mentee.id, "One".to_string()).await?;
    let fresh = repo.create(mentor.id, mentee.id, "Two".to_string()).await?;

    let conversation = repo
        .get_conversation(mentor.id, mentee.id, Some(seen.id))
        .await?;

    assert_eq!(conversation.len(), 1);
    assert_eq!(conversation[0].id, fresh.id);

    Ok(())
}
