use super::*;

/// Tests that inactive mentees do not count towards a mentor's load.
///
/// Expected: count of active mentees only
#[tokio::test]
async fn counts_only_active_mentees() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor, _) = factory::helpers::create_mentor_with_mentees(db, 3).await?;
    factory::mentee::MenteeFactory::new(db)
        .mentor_id(Some(mentor.id))
        .active(false)
        .build()
        .await?;

    let counts = MentorRepository::new(db)
        .mentee_counts(vec![mentor.id])
        .await?;

    assert_eq!(counts.get(&mentor.id), Some(&3));

    Ok(())
}

/// Tests that an empty ID list short-circuits to an empty map.
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let counts = MentorRepository::new(db).mentee_counts(Vec::new()).await?;

    assert!(counts.is_empty());

    Ok(())
}
