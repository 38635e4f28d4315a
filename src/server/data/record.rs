//! Academic record data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::record::{AcademicRecord, UpsertRecordParams};

pub struct AcademicRecordRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AcademicRecordRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the record for a (mentee, subject) pair or overwrites the existing one.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored record
    /// - `Err(DbErr)` - Database error during lookup or write
    pub async fn upsert(
        &self,
        params: UpsertRecordParams,
    ) -> Result<entity::academic_record::Model, DbErr> {
        let existing = entity::prelude::AcademicRecord::find()
            .filter(entity::academic_record::Column::MenteeId.eq(params.mentee_id))
            .filter(entity::academic_record::Column::SubjectId.eq(params.subject_id))
            .one(self.db)
            .await?;

        match existing {
            Some(record) => {
                let mut active = record.into_active_model();
                active.cie_marks = ActiveValue::Set(params.cie_marks);
                active.assignment_marks = ActiveValue::Set(params.assignment_marks);
                active.attendance = ActiveValue::Set(params.attendance);
                active.updated_at = ActiveValue::Set(Utc::now());
                active.update(self.db).await
            }
            None => {
                entity::academic_record::ActiveModel {
                    mentee_id: ActiveValue::Set(params.mentee_id),
                    subject_id: ActiveValue::Set(params.subject_id),
                    cie_marks: ActiveValue::Set(params.cie_marks),
                    assignment_marks: ActiveValue::Set(params.assignment_marks),
                    attendance: ActiveValue::Set(params.attendance),
                    updated_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Gets a mentee's records joined with their subjects, ordered by subject ID.
    pub async fn get_by_mentee(&self, mentee_id: i32) -> Result<Vec<AcademicRecord>, DbErr> {
        let rows = entity::prelude::AcademicRecord::find()
            .find_also_related(entity::prelude::Subject)
            .filter(entity::academic_record::Column::MenteeId.eq(mentee_id))
            .order_by_asc(entity::academic_record::Column::SubjectId)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(record, subject)| AcademicRecord::from_entity(record, subject))
            .collect())
    }

    /// Collects attendance figures per mentee.
    ///
    /// # Arguments
    /// - `mentee_ids` - Restrict to these mentees; `None` loads every record
    ///
    /// # Returns
    /// - `Ok(HashMap<mentee_id, attendances>)` - Mentees without records are absent
    /// - `Err(DbErr)` - Database error during query
    pub async fn attendance_by_mentee(
        &self,
        mentee_ids: Option<Vec<i32>>,
    ) -> Result<HashMap<i32, Vec<f64>>, DbErr> {
        let mut query = entity::prelude::AcademicRecord::find()
            .select_only()
            .column(entity::academic_record::Column::MenteeId)
            .column(entity::academic_record::Column::Attendance);

        if let Some(ids) = mentee_ids {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }
            query = query.filter(entity::academic_record::Column::MenteeId.is_in(ids));
        }

        let rows: Vec<(i32, f64)> = query.into_tuple().all(self.db).await?;

        let mut by_mentee: HashMap<i32, Vec<f64>> = HashMap::new();
        for (mentee_id, attendance) in rows {
            by_mentee.entry(mentee_id).or_default().push(attendance);
        }

        Ok(by_mentee)
    }
}
