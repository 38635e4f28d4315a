use super::*;

/// Tests that mentors without mentees still report a zero load.
///
/// Expected: every active mentor present, ordered by ID
#[tokio::test]
async fn includes_mentors_with_no_mentees() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (busy, _) = factory::helpers::create_mentor_with_mentees(db, 2).await?;
    let (_, idle) = factory::create_mentor(db).await?;

    let loads = MentorRepository::new(db).active_loads(None).await?;

    assert_eq!(loads, vec![(busy.id, 2), (idle.id, 0)]);

    Ok(())
}

/// Tests that inactive mentors and the excluded mentor are left out.
///
/// Expected: only the remaining active mentor
#[tokio::test]
async fn skips_inactive_and_excluded_mentors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, excluded) = factory::create_mentor(db).await?;
    let (_, kept) = factory::create_mentor(db).await?;
    factory::mentor::MentorFactory::new(db)
        .active(false)
        .build()
        .await?;

    let loads = MentorRepository::new(db)
        .active_loads(Some(excluded.id))
        .await?;

    assert_eq!(loads, vec![(kept.id, 0)]);

    Ok(())
}
