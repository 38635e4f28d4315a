use super::*;

/// Tests that role broadcasts and direct notifications are both visible.
///
/// Expected: mentee sees the mentee broadcast and its direct notification only
#[tokio::test]
async fn returns_role_and_direct_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::create_mentee(db).await?;
    let (other, _) = factory::create_mentee(db).await?;
    let repo = NotificationRepository::new(db);

    let to_mentees = repo.create(broadcast(vec![Role::Mentee])).await?;
    repo.create(broadcast(vec![Role::Mentor])).await?;
    let direct = repo
        .create(NewNotification {
            target_user_id: Some(user.id),
            ..broadcast(Vec::new())
        })
        .await?;
    repo.create(NewNotification {
        target_user_id: Some(other.id),
        ..broadcast(Vec::new())
    })
    .await?;

    let visible = repo.get_visible(user.id, Role::Mentee).await?;
    let mut ids: Vec<i32> = visible.iter().map(|n| n.id).collect();
    ids.sort();

    assert_eq!(ids, vec![to_mentees.id, direct.id]);

    Ok(())
}

/// Tests that a multi-role broadcast reaches every listed role.
#[tokio::test]
async fn multi_role_broadcast_reaches_each_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let (mentor_user, _) = factory::create_mentor(db).await?;
    let repo = NotificationRepository::new(db);

    repo.create(broadcast(vec![Role::Admin, Role::Mentor])).await?;

    assert_eq!(repo.get_visible_ids(admin.id, Role::Admin).await?.len(), 1);
    assert_eq!(
        repo.get_visible_ids(mentor_user.id, Role::Mentor).await?.len(),
        1
    );

    Ok(())
}
