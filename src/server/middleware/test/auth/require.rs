use super::*;

mod require_admin;
mod require_mentor_of;
mod require_role;

/// Tests multiple permissions are all checked.
///
/// A mentor asking for `StaffOrAdmin` and `MentorOf` their own mentee passes both.
///
/// Expected: Ok(User)
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (mentor_user, mentor) = factory::create_mentor(db).await?;
    let (_, mentee) = factory::create_mentee_for(db, mentor.id).await?;

    AuthSession::new(session).set_user_id(mentor_user.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::StaffOrAdmin, Permission::MentorOf(mentee.id)])
        .await?;

    assert_eq!(user.id, mentor_user.id);
    assert_eq!(user.role, Role::Mentor);

    Ok(())
}

/// Tests that if any permission fails, the whole check fails.
///
/// Expected: Err(AuthError::AccessDenied) naming the failed requirement
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (mentor_user, _) = factory::create_mentor(db).await?;
    AuthSession::new(session).set_user_id(mentor_user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Mentor, Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, msg))) => {
            assert_eq!(user_id, mentor_user.id);
            assert!(msg.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests empty permission list grants access.
///
/// Any authenticated user with a valid database record is let through.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.role, Role::Mentee);

    Ok(())
}

/// Tests logout clears the session so the guard rejects the next request.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn cleared_session_is_unauthenticated() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_admin(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    auth_session.clear().await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
