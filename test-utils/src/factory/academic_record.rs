//! Academic record factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an academic record for a mentee and subject.
///
/// # Arguments
/// - `db` - Database connection
/// - `mentee_id` - ID of the mentee row
/// - `subject_id` - ID of the subject row
/// - `attendance` - Attendance percentage (0-100)
///
/// # Returns
/// - `Ok(entity::academic_record::Model)` - Created record with 40 CIE and 8 assignment marks
/// - `Err(DbErr)` - Database error during insert
pub async fn create_record(
    db: &DatabaseConnection,
    mentee_id: i32,
    subject_id: i32,
    attendance: f64,
) -> Result<entity::academic_record::Model, DbErr> {
    entity::academic_record::ActiveModel {
        mentee_id: ActiveValue::Set(mentee_id),
        subject_id: ActiveValue::Set(subject_id),
        cie_marks: ActiveValue::Set(40.0),
        assignment_marks: ActiveValue::Set(8.0),
        attendance: ActiveValue::Set(attendance),
        updated_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
