use crate::server::{
    error::{auth::AuthError, AppError},
    model::role::Role,
    service::auth::AuthService,
};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        helpers::{DEFAULT_PASSWORD, TEST_BCRYPT_COST},
    },
};

/// Tests that valid credentials log in and return the user's role.
#[tokio::test]
async fn login_accepts_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (mentor, _) = factory::create_mentor(db).await?;

    let user = AuthService::new(db, TEST_BCRYPT_COST)
        .login(&mentor.username, DEFAULT_PASSWORD)
        .await?;

    assert_eq!(user.id, mentor.id);
    assert_eq!(user.role, Role::Mentor);

    Ok(())
}

/// Tests that a wrong password and an unknown username fail the same way.
#[tokio::test]
async fn login_rejects_bad_credentials_uniformly() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let service = AuthService::new(db, TEST_BCRYPT_COST);

    let wrong_password = service.login(&admin.username, "not-the-password").await;
    let unknown_user = service.login("nobody", DEFAULT_PASSWORD).await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_user,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that a deactivated mentee cannot log in.
#[tokio::test]
async fn login_rejects_inactive_mentee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _) = factory::mentee::MenteeFactory::new(db)
        .active(false)
        .build()
        .await?;

    let result = AuthService::new(db, TEST_BCRYPT_COST)
        .login(&user.username, DEFAULT_PASSWORD)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountInactive(id))) if id == user.id
    ));

    Ok(())
}

/// Tests the password change rules: current password checked, minimum length enforced.
#[tokio::test]
async fn change_password_checks_current_and_length() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let service = AuthService::new(db, TEST_BCRYPT_COST);

    let too_short = service
        .change_password(admin.id, DEFAULT_PASSWORD, "short")
        .await;
    assert!(matches!(too_short, Err(AppError::BadRequest(_))));

    let wrong_current = service
        .change_password(admin.id, "wrong-password", "a-new-password")
        .await;
    assert!(matches!(
        wrong_current,
        Err(AppError::AuthErr(AuthError::IncorrectPassword(_)))
    ));

    service
        .change_password(admin.id, DEFAULT_PASSWORD, "a-new-password")
        .await?;
    assert!(service.login(&admin.username, "a-new-password").await.is_ok());

    Ok(())
}
