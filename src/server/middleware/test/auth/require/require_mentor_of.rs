use super::*;

/// Tests a mentor is denied access to another mentor's mentee.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_mentor_of_other_mentee() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (mentor_user, _) = factory::create_mentor(db).await?;
    let (_, other_mentor) = factory::create_mentor(db).await?;
    let (_, mentee) = factory::create_mentee_for(db, other_mentor.id).await?;

    AuthSession::new(session).set_user_id(mentor_user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::MentorOf(mentee.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, mentor_user.id);
            assert!(message.contains(&mentee.id.to_string()));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests unassigned mentees belong to no mentor.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_mentor_of_unassigned_mentee() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (mentor_user, _) = factory::create_mentor(db).await?;
    let (_, mentee) = factory::create_mentee(db).await?;

    AuthSession::new(session).set_user_id(mentor_user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::MentorOf(mentee.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests admins bypass the mentor relationship check.
///
/// Expected: Ok(User) even though the admin mentors nobody
#[tokio::test]
async fn admin_bypasses_mentor_check() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    let (_, mentee) = factory::create_mentee(db).await?;

    AuthSession::new(session).set_user_id(admin.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::MentorOf(mentee.id)])
        .await?;

    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests a mentor asking for a mentee that doesn't exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_mentee_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (mentor_user, _) = factory::create_mentor(db).await?;
    AuthSession::new(session).set_user_id(mentor_user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::MentorOf(4242)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
