//! Academic record domain models, validation limits and at-risk rules.
//!
//! A record holds one mentee's CIE marks, assignment marks and attendance for one
//! subject. A mentee is at risk when the mean attendance over all recorded subjects
//! drops below [`AT_RISK_ATTENDANCE`].

use chrono::{DateTime, Utc};

use crate::{
    model::record::{AcademicRecordDto, AtRiskMenteeDto, ProgressDto, UpsertRecordDto},
    server::{error::AppError, model::mentee::Mentee},
};

/// Attendance percentage below which a mentee is flagged at risk.
pub const AT_RISK_ATTENDANCE: f64 = 85.0;
pub const MAX_CIE_MARKS: f64 = 50.0;
pub const MAX_ASSIGNMENT_MARKS: f64 = 10.0;
pub const MAX_ATTENDANCE: f64 = 100.0;

/// Record joined with its subject's code and name.
#[derive(Debug, Clone, PartialEq)]
pub struct AcademicRecord {
    pub id: i32,
    pub mentee_id: i32,
    pub subject_id: i32,
    pub subject_code: String,
    pub subject_name: String,
    pub cie_marks: f64,
    pub assignment_marks: f64,
    pub attendance: f64,
    pub updated_at: DateTime<Utc>,
}

impl AcademicRecord {
    pub fn from_entity(
        record: entity::academic_record::Model,
        subject: Option<entity::subject::Model>,
    ) -> Self {
        let (subject_code, subject_name) = subject
            .map(|s| (s.code, s.name))
            .unwrap_or_default();

        Self {
            id: record.id,
            mentee_id: record.mentee_id,
            subject_id: record.subject_id,
            subject_code,
            subject_name,
            cie_marks: record.cie_marks,
            assignment_marks: record.assignment_marks,
            attendance: record.attendance,
            updated_at: record.updated_at,
        }
    }

    /// Attendance in this single subject is below the threshold.
    pub fn at_risk(&self) -> bool {
        self.attendance < AT_RISK_ATTENDANCE
    }

    pub fn into_dto(self) -> AcademicRecordDto {
        AcademicRecordDto {
            at_risk: self.at_risk(),
            id: self.id,
            subject_id: self.subject_id,
            subject_code: self.subject_code,
            subject_name: self.subject_name,
            cie_marks: self.cie_marks,
            assignment_marks: self.assignment_marks,
            attendance: self.attendance,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating or replacing the record of one mentee in one subject.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertRecordParams {
    pub mentee_id: i32,
    pub subject_id: i32,
    pub cie_marks: f64,
    pub assignment_marks: f64,
    pub attendance: f64,
}

impl UpsertRecordParams {
    /// Converts and range-checks an upsert request.
    ///
    /// # Returns
    /// - `Ok(UpsertRecordParams)` - Every value is finite and within its range
    /// - `Err(AppError::BadRequest)` - A value is out of range or not a number
    pub fn from_dto(mentee_id: i32, dto: UpsertRecordDto) -> Result<Self, AppError> {
        check_range("CIE marks", dto.cie_marks, MAX_CIE_MARKS)?;
        check_range("Assignment marks", dto.assignment_marks, MAX_ASSIGNMENT_MARKS)?;
        check_range("Attendance", dto.attendance, MAX_ATTENDANCE)?;

        Ok(Self {
            mentee_id,
            subject_id: dto.subject_id,
            cie_marks: dto.cie_marks,
            assignment_marks: dto.assignment_marks,
            attendance: dto.attendance,
        })
    }
}

fn check_range(field: &str, value: f64, max: f64) -> Result<(), AppError> {
    if !value.is_finite() || !(0.0..=max).contains(&value) {
        return Err(AppError::BadRequest(format!(
            "{} must be between 0 and {}",
            field, max
        )));
    }
    Ok(())
}

/// Mean attendance over the given subject attendances, `None` when empty.
pub fn average_attendance(attendances: &[f64]) -> Option<f64> {
    if attendances.is_empty() {
        return None;
    }
    Some(attendances.iter().sum::<f64>() / attendances.len() as f64)
}

/// A mentee with no records yet is never at risk.
pub fn is_at_risk(average: Option<f64>) -> bool {
    average.is_some_and(|avg| avg < AT_RISK_ATTENDANCE)
}

/// A mentee's full academic picture.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub mentee: Mentee,
    pub records: Vec<AcademicRecord>,
    pub average_attendance: Option<f64>,
    pub total_cie: f64,
    pub at_risk: bool,
}

impl Progress {
    pub fn new(mentee: Mentee, records: Vec<AcademicRecord>) -> Self {
        let attendances: Vec<f64> = records.iter().map(|r| r.attendance).collect();
        let average = average_attendance(&attendances);

        Self {
            total_cie: records.iter().map(|r| r.cie_marks).sum(),
            at_risk: is_at_risk(average),
            average_attendance: average,
            mentee,
            records,
        }
    }

    pub fn into_dto(self) -> ProgressDto {
        ProgressDto {
            mentee: self.mentee.into_dto(),
            records: self
                .records
                .into_iter()
                .map(AcademicRecord::into_dto)
                .collect(),
            average_attendance: self.average_attendance,
            total_cie: self.total_cie,
            at_risk: self.at_risk,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AtRiskMentee {
    pub mentee: Mentee,
    pub average_attendance: f64,
}

impl AtRiskMentee {
    pub fn into_dto(self) -> AtRiskMenteeDto {
        AtRiskMenteeDto {
            mentee: self.mentee.into_dto(),
            average_attendance: self.average_attendance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(cie: f64, assignment: f64, attendance: f64) -> UpsertRecordDto {
        UpsertRecordDto {
            subject_id: 1,
            cie_marks: cie,
            assignment_marks: assignment,
            attendance,
        }
    }

    #[test]
    fn averages_attendance() {
        assert_eq!(average_attendance(&[]), None);
        assert_eq!(average_attendance(&[80.0, 90.0]), Some(85.0));
    }

    #[test]
    fn flags_below_threshold_only() {
        assert!(!is_at_risk(None));
        assert!(!is_at_risk(Some(85.0)));
        assert!(is_at_risk(Some(84.9)));
    }

    #[test]
    fn accepts_boundary_values() {
        assert!(UpsertRecordParams::from_dto(1, dto(0.0, 0.0, 0.0)).is_ok());
        assert!(UpsertRecordParams::from_dto(1, dto(50.0, 10.0, 100.0)).is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(UpsertRecordParams::from_dto(1, dto(50.5, 5.0, 90.0)).is_err());
        assert!(UpsertRecordParams::from_dto(1, dto(40.0, 11.0, 90.0)).is_err());
        assert!(UpsertRecordParams::from_dto(1, dto(40.0, 5.0, 100.1)).is_err());
        assert!(UpsertRecordParams::from_dto(1, dto(-1.0, 5.0, 90.0)).is_err());
        assert!(UpsertRecordParams::from_dto(1, dto(f64::NAN, 5.0, 90.0)).is_err());
    }
}
