//! Per-role dashboard aggregates.

use sea_orm::DatabaseConnection;

use crate::server::{
    cache::TtlCache,
    data::{
        mentee::MenteeRepository, mentor::MentorRepository, record::AcademicRecordRepository,
        subject::SubjectRepository,
    },
    error::AppError,
    model::{
        dashboard::{AdminDashboard, MenteeDashboard, MentorDashboard},
        mentee::Mentee,
        record::{average_attendance, is_at_risk},
        role::Role,
    },
    service::{
        mentor::MentorService, message::MessageService, notification::NotificationService,
        record::AcademicRecordService,
    },
};

/// Cache key of the admin dashboard.
pub const ADMIN_DASHBOARD_KEY: &str = "admin";

pub type DashboardCache = TtlCache<&'static str, AdminDashboard>;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets institution-wide counts, served from `cache` while fresh.
    pub async fn admin(&self, cache: &DashboardCache) -> Result<AdminDashboard, AppError> {
        if let Some(dashboard) = cache.get(&ADMIN_DASHBOARD_KEY).await {
            return Ok(dashboard);
        }

        let mentee_repo = MenteeRepository::new(self.db);
        let dashboard = AdminDashboard {
            active_mentors: MentorRepository::new(self.db).count_active().await?,
            active_mentees: mentee_repo.count_active().await?,
            subjects: SubjectRepository::new(self.db).count().await?,
            unassigned_mentees: mentee_repo.count_unassigned().await?,
            at_risk_mentees: AcademicRecordService::new(self.db)
                .at_risk(None)
                .await?
                .len() as u64,
            mentor_loads: MentorService::new(self.db).get_all().await?,
        };

        cache.insert(ADMIN_DASHBOARD_KEY, dashboard.clone()).await;

        Ok(dashboard)
    }

    /// Gets a mentor's mentee counts, attendance and unread counts.
    ///
    /// # Arguments
    /// - `mentor_id` - Mentor row ID
    /// - `user_id` - The mentor's user ID, for unread counts
    pub async fn mentor(&self, mentor_id: i32, user_id: i32) -> Result<MentorDashboard, AppError> {
        let mentee_ids: Vec<i32> = MenteeRepository::new(self.db)
            .get_by_mentor(mentor_id, true)
            .await?
            .into_iter()
            .map(|(mentee, _)| mentee.id)
            .collect();
        let mentee_count = mentee_ids.len() as u64;

        let attendance = AcademicRecordRepository::new(self.db)
            .attendance_by_mentee(Some(mentee_ids))
            .await?;
        let at_risk_count = attendance
            .values()
            .filter(|figures| is_at_risk(average_attendance(figures)))
            .count() as u64;
        let all: Vec<f64> = attendance.into_values().flatten().collect();

        Ok(MentorDashboard {
            mentee_count,
            at_risk_count,
            average_attendance: average_attendance(&all),
            unread_messages: MessageService::new(self.db).unread_count(user_id).await?,
            unread_notifications: NotificationService::new(self.db)
                .unread_count(user_id, Role::Mentor)
                .await?,
        })
    }

    /// Gets a mentee's profile, mentor, at-risk flag and unread counts.
    pub async fn mentee(&self, mentee: Mentee) -> Result<MenteeDashboard, AppError> {
        let mentor = match mentee.mentor_id {
            Some(mentor_id) => MentorService::new(self.db).get_by_id(mentor_id).await?,
            None => None,
        };

        let attendance = AcademicRecordRepository::new(self.db)
            .attendance_by_mentee(Some(vec![mentee.id]))
            .await?;
        let average = attendance
            .get(&mentee.id)
            .and_then(|figures| average_attendance(figures));

        Ok(MenteeDashboard {
            unread_notifications: NotificationService::new(self.db)
                .unread_count(mentee.user_id, Role::Mentee)
                .await?,
            unread_messages: MessageService::new(self.db)
                .unread_count(mentee.user_id)
                .await?,
            average_attendance: average,
            at_risk: is_at_risk(average),
            mentor,
            mentee,
        })
    }
}
