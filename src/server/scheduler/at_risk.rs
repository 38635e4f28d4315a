use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::mentor::MentorRepository,
    error::AppError,
    model::notification::NewNotification,
    service::{
        dashboard::DashboardCache, notification::NotificationService,
        record::AcademicRecordService,
    },
};

/// Every day at 07:00.
const AT_RISK_SCHEDULE: &str = "0 0 7 * * *";
/// Every five minutes.
const CACHE_PURGE_SCHEDULE: &str = "0 */5 * * * *";

/// Starts the background scheduler.
///
/// Runs two jobs:
/// - A daily alert to each mentor for every at-risk mentee they have
/// - A periodic purge of expired dashboard cache entries
///
/// # Arguments
/// - `db` - Database connection
/// - `cache` - Dashboard cache shared with the request handlers
pub async fn start_scheduler(
    db: DatabaseConnection,
    cache: DashboardCache,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let alert_job = Job::new_async(AT_RISK_SCHEDULE, move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            match notify_mentors_of_at_risk(&db).await {
                Ok(sent) => tracing::info!("Sent {} at-risk alerts", sent),
                Err(e) => tracing::error!("Error sending at-risk alerts: {}", e),
            }
        })
    })?;

    let purge_job = Job::new_async(CACHE_PURGE_SCHEDULE, move |_uuid, _lock| {
        let cache = cache.clone();

        Box::pin(async move {
            let purged = cache.purge_expired().await;
            if purged > 0 {
                tracing::debug!("Purged {} expired cache entries", purged);
            }
        })
    })?;

    scheduler.add(alert_job).await?;
    scheduler.add(purge_job).await?;
    scheduler.start().await?;

    tracing::info!("Scheduler started");

    Ok(())
}

/// Sends one urgent notification per at-risk mentee to that mentee's mentor.
///
/// Unassigned mentees are skipped. Returns the number of notifications sent.
pub(crate) async fn notify_mentors_of_at_risk(
    db: &DatabaseConnection,
) -> Result<usize, AppError> {
    let at_risk = AcademicRecordService::new(db).at_risk(None).await?;

    let mentor_repo = MentorRepository::new(db);
    let notification_service = NotificationService::new(db);
    let mut mentor_users: HashMap<i32, Option<i32>> = HashMap::new();
    let mut sent = 0;

    for entry in at_risk {
        let Some(mentor_id) = entry.mentee.mentor_id else {
            continue;
        };

        let mentor_user_id = match mentor_users.get(&mentor_id) {
            Some(user_id) => *user_id,
            None => {
                let user_id = mentor_repo
                    .find_by_id(mentor_id)
                    .await?
                    .map(|(mentor, _)| mentor.user_id);
                mentor_users.insert(mentor_id, user_id);
                user_id
            }
        };
        let Some(mentor_user_id) = mentor_user_id else {
            continue;
        };

        notification_service
            .notify_system(NewNotification {
                sender_id: None,
                message: format!(
                    "{} ({}) is at risk with {:.1}% average attendance",
                    entry.mentee.name, entry.mentee.usn, entry.average_attendance
                ),
                target_roles: Vec::new(),
                target_user_id: Some(mentor_user_id),
                urgent: true,
            })
            .await?;
        sent += 1;
    }

    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{data::notification::NotificationRepository, model::role::Role};
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn alerts_the_mentor_of_each_at_risk_mentee() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (mentor_user, mentor) = factory::create_mentor(db).await?;
        let subject = factory::create_subject(db).await?;

        let (_, struggling) = factory::mentee::MenteeFactory::new(db)
            .name("Struggling Student")
            .mentor_id(Some(mentor.id))
            .build()
            .await?;
        let (_, fine) = factory::create_mentee_for(db, mentor.id).await?;
        let (_, unassigned) = factory::create_mentee(db).await?;

        factory::create_record(db, struggling.id, subject.id, 60.0).await?;
        factory::create_record(db, fine.id, subject.id, 95.0).await?;
        factory::create_record(db, unassigned.id, subject.id, 40.0).await?;

        let sent = notify_mentors_of_at_risk(db).await?;
        assert_eq!(sent, 1);

        let visible = NotificationRepository::new(db)
            .get_visible(mentor_user.id, Role::Mentor)
            .await?;
        assert_eq!(visible.len(), 1);
        assert!(visible[0].urgent);
        assert!(visible[0].sender_id.is_none());
        assert!(visible[0].message.contains("Struggling Student"));
        assert!(visible[0].message.contains("60.0%"));

        Ok(())
    }
}
