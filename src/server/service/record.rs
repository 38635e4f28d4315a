//! Academic records, mentee progress and at-risk detection.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{record::AcademicRecordRepository, subject::SubjectRepository},
    error::AppError,
    model::record::{
        average_attendance, is_at_risk, AcademicRecord, AtRiskMentee, Progress,
        UpsertRecordParams,
    },
    service::mentee::MenteeService,
};

pub struct AcademicRecordService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AcademicRecordService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or replaces a mentee's record for one subject.
    ///
    /// Callers are expected to have checked that the acting mentor owns the mentee.
    ///
    /// # Returns
    /// - `Ok(AcademicRecord)` - Stored record joined with its subject
    /// - `Err(AppError::NotFound)` - Mentee does not exist
    /// - `Err(AppError::BadRequest)` - Subject does not exist
    pub async fn upsert(&self, params: UpsertRecordParams) -> Result<AcademicRecord, AppError> {
        if MenteeService::new(self.db)
            .get_by_id(params.mentee_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Mentee not found".to_string()));
        }

        let Some(subject) = SubjectRepository::new(self.db)
            .find_by_id(params.subject_id)
            .await?
        else {
            return Err(AppError::BadRequest(format!(
                "Subject {} does not exist",
                params.subject_id
            )));
        };

        let record = AcademicRecordRepository::new(self.db).upsert(params).await?;

        let mut record = AcademicRecord::from_entity(record, None);
        record.subject_code = subject.code;
        record.subject_name = subject.name;

        Ok(record)
    }

    /// Gets a mentee's records with average attendance, total CIE and at-risk flag.
    ///
    /// # Returns
    /// - `Ok(Some(Progress))` - Mentee found
    /// - `Ok(None)` - No mentee with that ID
    pub async fn progress(&self, mentee_id: i32) -> Result<Option<Progress>, AppError> {
        let Some(mentee) = MenteeService::new(self.db).get_by_id(mentee_id).await? else {
            return Ok(None);
        };

        let records = AcademicRecordRepository::new(self.db)
            .get_by_mentee(mentee_id)
            .await?;

        Ok(Some(Progress::new(mentee, records)))
    }

    /// Lists active mentees whose average attendance is below the threshold.
    ///
    /// # Arguments
    /// - `mentor_id` - Limit to this mentor's mentees; `None` checks every active mentee
    ///
    /// # Returns
    /// - `Ok(Vec<AtRiskMentee>)` - At-risk mentees, lowest attendance first
    pub async fn at_risk(&self, mentor_id: Option<i32>) -> Result<Vec<AtRiskMentee>, AppError> {
        let mentee_service = MenteeService::new(self.db);
        let mentees = match mentor_id {
            Some(mentor_id) => mentee_service
                .get_by_mentor(mentor_id)
                .await?
                .into_iter()
                .filter(|m| m.active)
                .collect(),
            None => mentee_service.get_all_active().await?,
        };

        let ids = mentees.iter().map(|m| m.id).collect();
        let attendance = AcademicRecordRepository::new(self.db)
            .attendance_by_mentee(Some(ids))
            .await?;

        let mut at_risk: Vec<AtRiskMentee> = mentees
            .into_iter()
            .filter_map(|mentee| {
                let average = average_attendance(attendance.get(&mentee.id)?)?;
                is_at_risk(Some(average)).then_some(AtRiskMentee {
                    mentee,
                    average_attendance: average,
                })
            })
            .collect();
        at_risk.sort_by(|a, b| a.average_attendance.total_cmp(&b.average_attendance));

        Ok(at_risk)
    }
}
