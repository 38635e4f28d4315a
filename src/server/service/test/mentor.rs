use crate::server::{
    data::mentee::MenteeRepository,
    error::AppError,
    model::mentor::CreateMentorParams,
    service::mentor::MentorService,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::TEST_BCRYPT_COST},
};

/// Tests that deleting a mentor spreads its mentees over the least-loaded active mentors.
///
/// Expected: the emptier mentor receives mentees until loads level out
#[tokio::test]
async fn delete_reassigns_to_least_loaded_mentor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leaving, _) = factory::helpers::create_mentor_with_mentees(db, 3).await?;
    let (busy, _) = factory::helpers::create_mentor_with_mentees(db, 2).await?;
    let (_, idle) = factory::create_mentor(db).await?;

    let removal = MentorService::new(db)
        .delete(leaving.id)
        .await?
        .expect("mentor exists");

    assert_eq!(removal.reassigned, 3);
    assert_eq!(removal.unassigned, 0);

    let repo = MenteeRepository::new(db);
    // idle goes 0 -> 2, busy 2 -> 3
    assert_eq!(repo.get_by_mentor(idle.id, true).await?.len(), 2);
    assert_eq!(repo.get_by_mentor(busy.id, true).await?.len(), 3);

    Ok(())
}

/// Tests that inactive mentees do not count toward a mentor's load during reassignment.
///
/// Expected: the active mentee goes to the mentor with no active mentees, even though
/// an inactive mentee sorted ahead of it was placed first
#[tokio::test]
async fn delete_ignores_inactive_mentees_in_loads() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (busy, _) = factory::helpers::create_mentor_with_mentees(db, 1).await?;
    let (_, idle) = factory::create_mentor(db).await?;
    let (_, leaving) = factory::create_mentor(db).await?;
    let (_, dormant) = factory::mentee::MenteeFactory::new(db)
        .usn("1AB21ZZ001")
        .mentor_id(Some(leaving.id))
        .active(false)
        .build()
        .await?;
    let (_, current) = factory::mentee::MenteeFactory::new(db)
        .usn("1AB21ZZ002")
        .mentor_id(Some(leaving.id))
        .build()
        .await?;

    let removal = MentorService::new(db)
        .delete(leaving.id)
        .await?
        .expect("mentor exists");

    assert_eq!(removal.reassigned, 2);

    let repo = MenteeRepository::new(db);
    let (moved, _) = repo.find_by_id(current.id).await?.expect("mentee survives");
    assert_eq!(moved.mentor_id, Some(idle.id));
    let (parked, _) = repo.find_by_id(dormant.id).await?.expect("mentee survives");
    assert_eq!(parked.mentor_id, Some(idle.id));

    assert_eq!(repo.get_by_mentor(busy.id, true).await?.len(), 1);
    assert_eq!(repo.get_by_mentor(idle.id, true).await?.len(), 1);

    Ok(())
}

/// Tests that inactive mentors never receive reassigned mentees.
///
/// Expected: mentees left unassigned when the only other mentor is inactive
#[tokio::test]
async fn delete_unassigns_without_active_mentors() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leaving, mentees) = factory::helpers::create_mentor_with_mentees(db, 2).await?;
    factory::mentor::MentorFactory::new(db)
        .active(false)
        .build()
        .await?;

    let removal = MentorService::new(db)
        .delete(leaving.id)
        .await?
        .expect("mentor exists");

    assert_eq!(removal.reassigned, 0);
    assert_eq!(removal.unassigned, 2);

    let (mentee, _) = MenteeRepository::new(db)
        .find_by_id(mentees[0].id)
        .await?
        .expect("mentee survives");
    assert_eq!(mentee.mentor_id, None);

    Ok(())
}

/// Tests that deleting an unknown mentor reports absence instead of failing.
#[tokio::test]
async fn delete_missing_mentor_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(MentorService::new(db).delete(999).await?.is_none());

    Ok(())
}

/// Tests that a second mentor with the same username is rejected.
#[tokio::test]
async fn create_rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = MentorService::new(db);

    let params = CreateMentorParams {
        username: "rkumar".to_string(),
        name: "R Kumar".to_string(),
        email: None,
        password: None,
        department: "CSE".to_string(),
        specialization: None,
    };

    let created = service.create(params.clone(), TEST_BCRYPT_COST).await?;
    assert_eq!(created.mentee_count, 0);

    let duplicate = service.create(params, TEST_BCRYPT_COST).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    Ok(())
}
