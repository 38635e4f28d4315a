use super::*;

/// Tests assigning and then clearing a mentee's mentor.
///
/// Expected: mentor_id follows each call
#[tokio::test]
async fn assigns_and_clears_mentor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, mentor) = factory::create_mentor(db).await?;
    let (_, mentee) = factory::create_mentee(db).await?;
    let repo = MenteeRepository::new(db);

    let assigned = repo.set_mentor(mentee.id, Some(mentor.id)).await?;
    assert_eq!(assigned.mentor_id, Some(mentor.id));

    let cleared = repo.set_mentor(mentee.id, None).await?;
    assert_eq!(cleared.mentor_id, None);

    Ok(())
}
