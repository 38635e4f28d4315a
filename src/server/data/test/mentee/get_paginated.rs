use super::*;

/// Tests that the search filter matches a USN case-insensitively.
///
/// Expected: only the mentee whose USN contains the search text
#[tokio::test]
async fn searches_by_usn() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::mentee::MenteeFactory::new(db)
        .usn("1AB21CS001")
        .build()
        .await?;
    factory::mentee::MenteeFactory::new(db)
        .usn("1AB21EC002")
        .build()
        .await?;

    let filter = MenteeFilter {
        search: Some("21cs".to_string()),
        ..Default::default()
    };
    let (mentees, total) = MenteeRepository::new(db)
        .get_paginated(filter, 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(mentees[0].0.usn, "1AB21CS001");

    Ok(())
}

/// Tests the unassigned filter together with pagination.
///
/// Expected: total counts all unassigned mentees, page holds `per_page` rows
#[tokio::test]
async fn filters_unassigned_and_paginates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_mentor_with_mentees(db, 2).await?;
    for _ in 0..3 {
        factory::create_mentee(db).await?;
    }

    let filter = MenteeFilter {
        unassigned: true,
        ..Default::default()
    };
    let (mentees, total) = MenteeRepository::new(db)
        .get_paginated(filter, 0, 2)
        .await?;

    assert_eq!(total, 3);
    assert_eq!(mentees.len(), 2);
    assert!(mentees.iter().all(|(mentee, _)| mentee.mentor_id.is_none()));

    Ok(())
}
