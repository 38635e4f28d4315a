use std::time::Duration;

use crate::server::{
    error::AppError,
    service::dashboard::{DashboardCache, DashboardService},
};
use test_utils::{builder::TestBuilder, factory};

/// Tests the admin aggregates and that a cached dashboard is reused until invalidated.
#[tokio::test]
async fn admin_dashboard_is_cached_until_invalidated() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, mentor) = factory::create_mentor(db).await?;
    let (_, assigned) = factory::create_mentee_for(db, mentor.id).await?;
    factory::create_mentee(db).await?;
    let subject = factory::create_subject(db).await?;
    factory::create_record(db, assigned.id, subject.id, 50.0).await?;

    let cache = DashboardCache::new(Duration::from_secs(60));
    let service = DashboardService::new(db);

    let first = service.admin(&cache).await?;
    assert_eq!(first.active_mentors, 1);
    assert_eq!(first.active_mentees, 2);
    assert_eq!(first.unassigned_mentees, 1);
    assert_eq!(first.subjects, 1);
    assert_eq!(first.at_risk_mentees, 1);
    assert_eq!(first.mentor_loads.len(), 1);
    assert_eq!(first.mentor_loads[0].mentee_count, 1);

    factory::create_mentor(db).await?;

    let cached = service.admin(&cache).await?;
    assert_eq!(cached.active_mentors, 1);

    cache.invalidate_all().await;

    let fresh = service.admin(&cache).await?;
    assert_eq!(fresh.active_mentors, 2);

    Ok(())
}

/// Tests the mentor dashboard counts only the mentor's own active mentees.
#[tokio::test]
async fn mentor_dashboard_counts_own_mentees() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor_user, mentor) = factory::create_mentor(db).await?;
    let (_, other_mentor) = factory::create_mentor(db).await?;
    let (_, good) = factory::create_mentee_for(db, mentor.id).await?;
    let (_, poor) = factory::create_mentee_for(db, mentor.id).await?;
    let (_, elsewhere) = factory::create_mentee_for(db, other_mentor.id).await?;
    let subject = factory::create_subject(db).await?;

    factory::create_record(db, good.id, subject.id, 100.0).await?;
    factory::create_record(db, poor.id, subject.id, 60.0).await?;
    factory::create_record(db, elsewhere.id, subject.id, 10.0).await?;

    let dashboard = DashboardService::new(db)
        .mentor(mentor.id, mentor_user.id)
        .await?;

    assert_eq!(dashboard.mentee_count, 2);
    assert_eq!(dashboard.at_risk_count, 1);
    assert_eq!(dashboard.average_attendance, Some(80.0));
    assert_eq!(dashboard.unread_messages, 0);
    assert_eq!(dashboard.unread_notifications, 0);

    Ok(())
}
