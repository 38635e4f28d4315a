use crate::server::{
    error::AppError, model::mentee::CreateMenteeParams, service::mentee::MenteeService,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::TEST_BCRYPT_COST},
};

fn params(usn: &str, mentor_id: Option<i32>) -> CreateMenteeParams {
    CreateMenteeParams {
        usn: usn.to_string(),
        name: "Priya Rao".to_string(),
        email: None,
        semester: 5,
        section: Some("A".to_string()),
        mentor_id,
        password: None,
    }
}

/// Tests that a mentee created without a mentor goes to the least-loaded one.
#[tokio::test]
async fn create_auto_assigns_least_loaded_mentor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_mentor_with_mentees(db, 1).await?;
    let (_, idle) = factory::create_mentor(db).await?;

    let mentee = MenteeService::new(db)
        .create(params("1AB21CS100", None), TEST_BCRYPT_COST)
        .await?;

    assert_eq!(mentee.mentor_id, Some(idle.id));
    assert!(mentee.mentor_name.is_some());

    Ok(())
}

/// Tests that assignment to an inactive mentor is refused.
#[tokio::test]
async fn assign_mentor_rejects_inactive_mentor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, mentee) = factory::create_mentee(db).await?;
    let (_, inactive) = factory::mentor::MentorFactory::new(db)
        .active(false)
        .build()
        .await?;

    let result = MenteeService::new(db)
        .assign_mentor(mentee.id, Some(inactive.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests bulk assignment of every unassigned active mentee.
///
/// Expected: inactive mentees are skipped and loads stay even
#[tokio::test]
async fn auto_assign_spreads_unassigned_mentees() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::create_mentor(db).await?;
    let (_, second) = factory::create_mentor(db).await?;
    for _ in 0..4 {
        factory::create_mentee(db).await?;
    }
    factory::mentee::MenteeFactory::new(db)
        .active(false)
        .build()
        .await?;

    let service = MenteeService::new(db);
    assert_eq!(service.auto_assign_unassigned().await?, 4);

    assert_eq!(service.get_by_mentor(first.id).await?.len(), 2);
    assert_eq!(service.get_by_mentor(second.id).await?.len(), 2);

    Ok(())
}

/// Tests that a duplicate USN is a conflict.
#[tokio::test]
async fn create_rejects_duplicate_usn() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = MenteeService::new(db);

    service
        .create(params("1AB21CS200", None), TEST_BCRYPT_COST)
        .await?;
    let duplicate = service
        .create(params("1AB21CS200", None), TEST_BCRYPT_COST)
        .await;

    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    Ok(())
}
