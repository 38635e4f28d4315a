use super::domain_user;
use crate::server::{
    error::{auth::AuthError, AppError},
    service::message::MessageService,
};
use test_utils::{builder::TestBuilder, factory};

/// Tests that a mentee cannot message a mentor other than their own.
#[tokio::test]
async fn mentee_cannot_message_other_mentor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, own_mentor) = factory::create_mentor(db).await?;
    let (other_mentor_user, _) = factory::create_mentor(db).await?;
    let (mentee_user, _) = factory::create_mentee_for(db, own_mentor.id).await?;

    let result = MessageService::new(db)
        .send(&domain_user(mentee_user), other_mentor_user.id, "Hello")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));

    Ok(())
}

/// Tests a mentor/mentee exchange and that fetching marks incoming messages read.
#[tokio::test]
async fn conversation_marks_incoming_read() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor_user, mentor) = factory::create_mentor(db).await?;
    let (mentee_user, _) = factory::create_mentee_for(db, mentor.id).await?;
    let mentor_user = domain_user(mentor_user);
    let mentee_user = domain_user(mentee_user);
    let service = MessageService::new(db);

    service
        .send(&mentor_user, mentee_user.id, "Please meet me on Monday")
        .await?;
    service.send(&mentee_user, mentor_user.id, "Sure").await?;
    assert_eq!(service.unread_count(mentee_user.id).await?, 1);

    let conversation = service
        .conversation(&mentee_user, mentor_user.id, None)
        .await?;

    assert_eq!(conversation.len(), 2);
    assert_eq!(service.unread_count(mentee_user.id).await?, 0);
    // the mentor has not opened the conversation yet
    assert_eq!(service.unread_count(mentor_user.id).await?, 1);

    Ok(())
}

/// Tests that admins may message anyone and that blank content is refused.
#[tokio::test]
async fn admin_messages_anyone_but_not_blank() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = domain_user(factory::create_admin(db).await?);
    let (mentee_user, _) = factory::create_mentee(db).await?;
    let service = MessageService::new(db);

    service.send(&admin, mentee_user.id, "Welcome").await?;
    let blank = service.send(&admin, mentee_user.id, "   ").await;

    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    Ok(())
}
