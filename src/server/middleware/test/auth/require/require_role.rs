use super::*;

/// Tests each role permission admits only its own role.
///
/// Expected: Ok for the matching role, AccessDenied for the others
#[tokio::test]
async fn role_permissions_match_only_their_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let mentee = factory::user::UserFactory::new(db)
        .role("mentee")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(mentee.id).await?;

    let guard = AuthGuard::new(db, session);
    assert!(guard.require(&[Permission::Mentee]).await.is_ok());
    assert!(matches!(
        guard.require(&[Permission::Mentor]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests staff permission admits mentors and admins but not mentees.
///
/// Expected: Ok for admin and mentor, AccessDenied for mentee
#[tokio::test]
async fn staff_or_admin_excludes_mentees() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    let mentor = factory::user::UserFactory::new(db)
        .role("mentor")
        .build()
        .await?;
    let mentee = factory::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    for staff in [&admin, &mentor] {
        auth_session.set_user_id(staff.id).await?;
        assert!(guard.require(&[Permission::StaffOrAdmin]).await.is_ok());
    }

    auth_session.set_user_id(mentee.id).await?;
    assert!(matches!(
        guard.require(&[Permission::StaffOrAdmin]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == mentee.id
    ));

    Ok(())
}
