//! Mentee domain models and parameters.
//!
//! Mentees are students identified by their USN. Each mentee has one user account
//! (username defaults to the USN) and at most one mentor.

use crate::{
    model::mentee::{CreateMenteeDto, MenteeDto, PaginatedMenteesDto, UpdateMenteeDto},
    server::{
        error::AppError,
        util::text::{optional, required},
    },
};

/// Mentee joined with its user row and the name of its mentor.
#[derive(Debug, Clone, PartialEq)]
pub struct Mentee {
    pub id: i32,
    pub user_id: i32,
    pub usn: String,
    pub name: String,
    pub email: Option<String>,
    pub semester: i32,
    pub section: Option<String>,
    pub mentor_id: Option<i32>,
    pub mentor_name: Option<String>,
    pub active: bool,
}

impl Mentee {
    /// Builds the domain model from a mentee row and its user row.
    ///
    /// # Arguments
    /// - `mentee` - Mentee entity
    /// - `user` - The mentee's own user entity
    /// - `mentor_name` - Display name of the assigned mentor, if any
    pub fn from_entity(
        mentee: entity::mentee::Model,
        user: entity::user::Model,
        mentor_name: Option<String>,
    ) -> Self {
        Self {
            id: mentee.id,
            user_id: mentee.user_id,
            usn: mentee.usn,
            name: user.name,
            email: user.email,
            semester: mentee.semester,
            section: mentee.section,
            mentor_id: mentee.mentor_id,
            mentor_name,
            active: mentee.active,
        }
    }

    pub fn into_dto(self) -> MenteeDto {
        MenteeDto {
            id: self.id,
            user_id: self.user_id,
            usn: self.usn,
            name: self.name,
            email: self.email,
            semester: self.semester,
            section: self.section,
            mentor_id: self.mentor_id,
            mentor_name: self.mentor_name,
            active: self.active,
        }
    }
}

/// Parameters for creating a mentee together with its user account.
#[derive(Debug, Clone)]
pub struct CreateMenteeParams {
    pub usn: String,
    pub name: String,
    pub email: Option<String>,
    pub semester: i32,
    pub section: Option<String>,
    /// Explicit mentor; auto-assigned when `None`.
    pub mentor_id: Option<i32>,
    /// Initial password; the USN is used when absent.
    pub password: Option<String>,
}

impl CreateMenteeParams {
    /// Converts and validates a create request.
    ///
    /// USNs are stored upper-cased so lookups during import are stable.
    pub fn from_dto(dto: CreateMenteeDto) -> Result<Self, AppError> {
        Ok(Self {
            usn: normalize_usn(&required(dto.usn, "USN")?),
            name: required(dto.name, "Name")?,
            email: optional(dto.email),
            semester: validate_semester(dto.semester)?,
            section: optional(dto.section),
            mentor_id: dto.mentor_id,
            password: dto.password,
        })
    }
}

/// Parameters for updating a mentee's profile and active flag.
#[derive(Debug, Clone)]
pub struct UpdateMenteeParams {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub semester: i32,
    pub section: Option<String>,
    pub active: bool,
}

impl UpdateMenteeParams {
    pub fn from_dto(id: i32, dto: UpdateMenteeDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: required(dto.name, "Name")?,
            email: optional(dto.email),
            semester: validate_semester(dto.semester)?,
            section: optional(dto.section),
            active: dto.active,
        })
    }
}

/// Filters for the admin mentee list.
#[derive(Debug, Clone, Default)]
pub struct MenteeFilter {
    pub semester: Option<i32>,
    pub section: Option<String>,
    pub mentor_id: Option<i32>,
    /// Only mentees without a mentor.
    pub unassigned: bool,
    /// Substring match on name or USN.
    pub search: Option<String>,
}

/// Paginated collection of mentees with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedMentees {
    pub mentees: Vec<Mentee>,
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedMentees {
    pub fn into_dto(self) -> PaginatedMenteesDto {
        PaginatedMenteesDto {
            mentees: self.mentees.into_iter().map(Mentee::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Canonical form of a USN: trimmed and upper-cased.
pub fn normalize_usn(usn: &str) -> String {
    usn.trim().to_uppercase()
}

/// Semesters run from 1 to 8.
pub fn validate_semester(semester: i32) -> Result<i32, AppError> {
    if !(1..=8).contains(&semester) {
        return Err(AppError::BadRequest(format!(
            "Semester must be between 1 and 8, got {}",
            semester
        )));
    }
    Ok(semester)
}
