use super::*;

fn params(mentee_id: i32, subject_id: i32, attendance: f64) -> UpsertRecordParams {
    UpsertRecordParams {
        mentee_id,
        subject_id,
        cie_marks: 35.0,
        assignment_marks: 7.5,
        attendance,
    }
}

/// Tests that a second upsert for the same pair overwrites the first.
///
/// Expected: one record carrying the latest values
#[tokio::test]
async fn overwrites_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, mentee) = factory::create_mentee(db).await?;
    let subject = factory::create_subject(db).await?;
    let repo = AcademicRecordRepository::new(db);

    let first = repo.upsert(params(mentee.id, subject.id, 70.0)).await?;
    let second = repo.upsert(params(mentee.id, subject.id, 92.0)).await?;

    assert_eq!(first.id, second.id);
    let records = repo.get_by_mentee(mentee.id).await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].attendance, 92.0);
    assert_eq!(records[0].subject_code, subject.code);

    Ok(())
}

/// Tests that different subjects produce separate records.
#[tokio::test]
async fn creates_one_record_per_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, mentee) = factory::create_mentee(db).await?;
    let first = factory::create_subject(db).await?;
    let second = factory::create_subject(db).await?;
    let repo = AcademicRecordRepository::new(db);

    repo.upsert(params(mentee.id, first.id, 80.0)).await?;
    repo.upsert(params(mentee.id, second.id, 90.0)).await?;

    assert_eq!(repo.get_by_mentee(mentee.id).await?.len(), 2);

    Ok(())
}
