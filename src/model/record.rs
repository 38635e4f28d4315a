use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::mentee::MenteeDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AcademicRecordDto {
    pub id: i32,
    pub subject_id: i32,
    pub subject_code: String,
    pub subject_name: String,
    pub cie_marks: f64,
    pub assignment_marks: f64,
    pub attendance: f64,
    /// Attendance for this subject is below the at-risk threshold.
    pub at_risk: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpsertRecordDto {
    pub subject_id: i32,
    /// 0 to 50
    pub cie_marks: f64,
    /// 0 to 10
    pub assignment_marks: f64,
    /// Percentage, 0 to 100
    pub attendance: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProgressDto {
    pub mentee: MenteeDto,
    pub records: Vec<AcademicRecordDto>,
    /// `null` when no records exist yet.
    pub average_attendance: Option<f64>,
    pub total_cie: f64,
    pub at_risk: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AtRiskMenteeDto {
    pub mentee: MenteeDto,
    pub average_attendance: f64,
}
