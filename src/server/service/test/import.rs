use crate::server::{
    data::mentee::MenteeRepository,
    error::AppError,
    model::mentee::MenteeFilter,
    service::import::{sheet::Sheet, ImportService},
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::TEST_BCRYPT_COST},
};

fn csv(text: &str) -> Sheet {
    Sheet::parse("upload.csv", text.as_bytes().to_vec()).unwrap()
}

/// Tests that re-importing an existing USN updates it rather than duplicating it.
///
/// Expected: one created, one updated, single mentee row with the new values
#[tokio::test]
async fn mentee_import_upserts_existing_usn() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_mentor(db).await?;
    let service = ImportService::new(db, TEST_BCRYPT_COST);

    let first = service
        .import_mentees(&csv("usn,name,semester\n1ab21cs001,Priya,5\n"))
        .await?;
    assert_eq!((first.created, first.updated), (1, 0));

    let second = service
        .import_mentees(&csv(
            "USN,Name,Semester,Section\n1AB21CS001,Priya Rao,6,B\n1AB21CS002,Arjun,6,B\n",
        ))
        .await?;
    assert_eq!((second.created, second.updated, second.failed()), (1, 1, 0));

    let (mentees, total) = MenteeRepository::new(db)
        .get_paginated(MenteeFilter::default(), 0, 10)
        .await?;
    assert_eq!(total, 2);
    let (mentee, user) = &mentees[0];
    assert_eq!(mentee.usn, "1AB21CS001");
    assert_eq!(mentee.semester, 6);
    assert_eq!(user.name, "Priya Rao");

    Ok(())
}

/// Tests that bad rows are reported with their row numbers while good rows succeed.
#[tokio::test]
async fn mentee_import_reports_row_errors() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ImportService::new(db, TEST_BCRYPT_COST);

    let summary = service
        .import_mentees(&csv(
            "usn,name,semester,mentor\n\
             1AB21CS010,Good Row,5,\n\
             1AB21CS011,Bad Semester,12,\n\
             1AB21CS012,Unknown Mentor,5,ghost\n",
        ))
        .await?;

    assert_eq!(summary.total, 3);
    assert_eq!(summary.created, 1);
    let rows: Vec<usize> = summary.errors.iter().map(|e| e.row).collect();
    assert_eq!(rows, vec![3, 4]);
    assert!(summary.errors[1].message.contains("ghost"));

    Ok(())
}

/// Tests that imported mentees without a mentor column are balanced across mentors.
#[tokio::test]
async fn mentee_import_balances_assignment_across_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, first) = factory::create_mentor(db).await?;
    let (_, second) = factory::create_mentor(db).await?;

    ImportService::new(db, TEST_BCRYPT_COST)
        .import_mentees(&csv(
            "usn,name,semester\nA1,One,1\nA2,Two,1\nA3,Three,1\nA4,Four,1\n",
        ))
        .await?;

    let repo = MenteeRepository::new(db);
    assert_eq!(repo.get_by_mentor(first.id, true).await?.len(), 2);
    assert_eq!(repo.get_by_mentor(second.id, true).await?.len(), 2);

    Ok(())
}

/// Tests that moving an inactive mentee to a named mentor leaves that mentor's load alone.
///
/// Expected: the next unassigned row still goes to the lowest-ID mentor
#[tokio::test]
async fn mentee_import_does_not_count_inactive_mentees() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (first_user, first) = factory::create_mentor(db).await?;
    factory::create_mentor(db).await?;
    factory::mentee::MenteeFactory::new(db)
        .usn("1AB21CS300")
        .active(false)
        .build()
        .await?;

    let text = format!(
        "usn,name,semester,mentor\n1AB21CS300,Dormant,5,{}\n1AB21CS301,Fresh,5,\n",
        first_user.username
    );
    let summary = ImportService::new(db, TEST_BCRYPT_COST)
        .import_mentees(&csv(&text))
        .await?;
    assert_eq!((summary.created, summary.updated, summary.failed()), (1, 1, 0));

    let repo = MenteeRepository::new(db);
    let fresh = repo.find_by_usn("1AB21CS301").await?.expect("imported");
    assert_eq!(fresh.mentor_id, Some(first.id));

    Ok(())
}

/// Tests that a row failing after its mentor was chosen does not leave a load behind.
///
/// The out-of-range bcrypt cost fails the new-mentee row at hashing time, after the
/// mentor choice; the following update row needs no hash.
#[tokio::test]
async fn failed_row_does_not_shift_loads() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, first) = factory::create_mentor(db).await?;
    factory::create_mentor(db).await?;
    let (_, waiting) = factory::mentee::MenteeFactory::new(db)
        .usn("1AB21CS400")
        .build()
        .await?;

    let summary = ImportService::new(db, 99)
        .import_mentees(&csv(
            "usn,name,semester\n1AB21CS401,Never Stored,5\n1AB21CS400,Waiting,5\n",
        ))
        .await?;
    assert_eq!((summary.created, summary.updated, summary.failed()), (0, 1, 1));
    assert_eq!(summary.errors[0].row, 2);

    let repo = MenteeRepository::new(db);
    assert!(repo.find_by_usn("1AB21CS401").await?.is_none());
    let waiting = repo.find_by_usn(&waiting.usn).await?.expect("still there");
    assert_eq!(waiting.mentor_id, Some(first.id));

    Ok(())
}

/// Tests that a missing required column rejects the whole file.
#[tokio::test]
async fn mentee_import_requires_columns() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ImportService::new(db, TEST_BCRYPT_COST)
        .import_mentees(&csv("usn,name\nA1,One\n"))
        .await;

    assert!(matches!(result, Err(AppError::ImportErr(_))));

    Ok(())
}

/// Tests mentor import create, update, and refusal to convert a non-mentor account.
#[tokio::test]
async fn mentor_import_creates_updates_and_rejects_other_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let (existing, _) = factory::create_mentor(db).await?;

    let text = format!(
        "username,name,department,specialization\n\
         newmentor,New Mentor,ECE,VLSI\n\
         {},Renamed Mentor,MECH,\n\
         {},Admin As Mentor,CSE,\n",
        existing.username, admin.username
    );
    let summary = ImportService::new(db, TEST_BCRYPT_COST)
        .import_mentors(&csv(&text))
        .await?;

    assert_eq!((summary.created, summary.updated, summary.failed()), (1, 1, 1));
    assert_eq!(summary.errors[0].row, 4);

    Ok(())
}
