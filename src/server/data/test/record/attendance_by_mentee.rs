use super::*;

/// Tests grouping attendance figures by mentee and restricting to given IDs.
///
/// Expected: only the requested mentee, with all of its figures
#[tokio::test]
async fn groups_by_requested_mentee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, wanted) = factory::create_mentee(db).await?;
    let (_, other) = factory::create_mentee(db).await?;
    let first = factory::create_subject(db).await?;
    let second = factory::create_subject(db).await?;
    factory::create_record(db, wanted.id, first.id, 80.0).await?;
    factory::create_record(db, wanted.id, second.id, 60.0).await?;
    factory::create_record(db, other.id, first.id, 99.0).await?;

    let by_mentee = AcademicRecordRepository::new(db)
        .attendance_by_mentee(Some(vec![wanted.id]))
        .await?;

    assert_eq!(by_mentee.len(), 1);
    let mut figures = by_mentee[&wanted.id].clone();
    figures.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(figures, vec![60.0, 80.0]);

    Ok(())
}

/// Tests that an empty ID list returns nothing without querying.
#[tokio::test]
async fn empty_id_list_returns_empty_map() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let by_mentee = AcademicRecordRepository::new(db)
        .attendance_by_mentee(Some(Vec::new()))
        .await?;

    assert!(by_mentee.is_empty());

    Ok(())
}
