use super::domain_user;
use crate::server::{
    error::{auth::AuthError, AppError},
    model::{notification::CreateNotificationParams, role::Role},
    service::notification::NotificationService,
};
use test_utils::{builder::TestBuilder, factory};

fn params() -> CreateNotificationParams {
    CreateNotificationParams {
        message: "Submit your lab records by Friday".to_string(),
        target_roles: Vec::new(),
        target_user_id: None,
        all_mentees: false,
        urgent: false,
    }
}

/// Tests that a mentor notifying all mentees fans out one row per own mentee.
///
/// Expected: own mentees see it, other mentors' mentees do not
#[tokio::test]
async fn mentor_fan_out_reaches_only_own_mentees() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor_user, mentor) = factory::create_mentor(db).await?;
    let (own_user, _) = factory::create_mentee_for(db, mentor.id).await?;
    factory::create_mentee_for(db, mentor.id).await?;
    let (other_user, _) = factory::create_mentee(db).await?;
    let service = NotificationService::new(db);

    let created = service
        .create(
            &domain_user(mentor_user),
            CreateNotificationParams {
                all_mentees: true,
                ..params()
            },
        )
        .await?;

    assert_eq!(created, 2);
    assert_eq!(service.list_for(&domain_user(own_user)).await?.len(), 1);
    assert!(service.list_for(&domain_user(other_user)).await?.is_empty());

    Ok(())
}

/// Tests that mentors cannot address mentees of other mentors or whole roles.
#[tokio::test]
async fn mentor_cannot_target_outside_own_mentees() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor_user, _) = factory::create_mentor(db).await?;
    let (stranger, _) = factory::create_mentee(db).await?;
    let service = NotificationService::new(db);
    let sender = domain_user(mentor_user);

    let to_stranger = service
        .create(
            &sender,
            CreateNotificationParams {
                target_user_id: Some(stranger.id),
                ..params()
            },
        )
        .await;
    let to_role = service
        .create(
            &sender,
            CreateNotificationParams {
                target_roles: vec![Role::Mentee],
                ..params()
            },
        )
        .await;

    assert!(matches!(
        to_stranger,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));
    assert!(matches!(
        to_role,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));

    Ok(())
}

/// Tests that mentees may not create notifications.
#[tokio::test]
async fn mentee_cannot_create() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _) = factory::create_mentee(db).await?;

    let result = NotificationService::new(db)
        .create(
            &domain_user(user),
            CreateNotificationParams {
                target_roles: vec![Role::Mentee],
                ..params()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));

    Ok(())
}

/// Tests that read state is tracked per user and that unrelated users get 404.
#[tokio::test]
async fn read_state_is_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = domain_user(factory::create_admin(db).await?);
    let first = domain_user(factory::create_mentee(db).await?.0);
    let second = domain_user(factory::create_mentee(db).await?.0);
    let mentor = domain_user(factory::create_mentor(db).await?.0);
    let service = NotificationService::new(db);

    service
        .create(
            &admin,
            CreateNotificationParams {
                target_roles: vec![Role::Mentee],
                urgent: true,
                ..params()
            },
        )
        .await?;
    let notification = service.list_for(&first).await?.remove(0);
    assert!(notification.urgent);

    service.mark_read(&first, notification.id).await?;
    service.mark_read(&first, notification.id).await?;

    assert_eq!(service.unread_count(first.id, Role::Mentee).await?, 0);
    assert_eq!(service.unread_count(second.id, Role::Mentee).await?, 1);
    assert!(service.list_for(&first).await?[0].read);

    let not_visible = service.mark_read(&mentor, notification.id).await;
    assert!(matches!(not_visible, Err(AppError::NotFound(_))));

    Ok(())
}
