//! Mentor domain models and parameters.

use crate::{
    model::{
        dashboard::MentorContactDto,
        mentor::{CreateMentorDto, MentorDto, PaginatedMentorsDto, UpdateMentorDto},
    },
    server::{
        error::AppError,
        util::text::{optional, required},
    },
};

/// Mentor joined with its user row and current active-mentee count.
#[derive(Debug, Clone, PartialEq)]
pub struct Mentor {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    pub department: String,
    pub specialization: Option<String>,
    pub active: bool,
    pub mentee_count: u64,
}

impl Mentor {
    /// Builds the domain model from a mentor row, its user row and its load.
    pub fn from_entity(
        mentor: entity::mentor::Model,
        user: entity::user::Model,
        mentee_count: u64,
    ) -> Self {
        Self {
            id: mentor.id,
            user_id: mentor.user_id,
            username: user.username,
            name: user.name,
            email: user.email,
            department: mentor.department,
            specialization: mentor.specialization,
            active: mentor.active,
            mentee_count,
        }
    }

    pub fn into_dto(self) -> MentorDto {
        MentorDto {
            id: self.id,
            user_id: self.user_id,
            username: self.username,
            name: self.name,
            email: self.email,
            department: self.department,
            specialization: self.specialization,
            active: self.active,
            mentee_count: self.mentee_count,
        }
    }

    /// Reduced view shown to the mentor's mentees.
    pub fn into_contact_dto(self) -> MentorContactDto {
        MentorContactDto {
            mentor_id: self.id,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            department: self.department,
        }
    }
}

/// Parameters for creating a mentor together with its user account.
#[derive(Debug, Clone)]
pub struct CreateMentorParams {
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    /// Initial password; the username is used when absent.
    pub password: Option<String>,
    pub department: String,
    pub specialization: Option<String>,
}

impl CreateMentorParams {
    /// Converts and validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateMentorParams)` - Trimmed parameters
    /// - `Err(AppError::BadRequest)` - Username, name or department is blank
    pub fn from_dto(dto: CreateMentorDto) -> Result<Self, AppError> {
        let username = required(dto.username, "Username")?;
        let name = required(dto.name, "Name")?;
        let department = required(dto.department, "Department")?;

        Ok(Self {
            username,
            name,
            email: optional(dto.email),
            password: dto.password,
            department,
            specialization: optional(dto.specialization),
        })
    }
}

/// Parameters for updating a mentor's profile and active flag.
#[derive(Debug, Clone)]
pub struct UpdateMentorParams {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub department: String,
    pub specialization: Option<String>,
    pub active: bool,
}

impl UpdateMentorParams {
    pub fn from_dto(id: i32, dto: UpdateMentorDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: required(dto.name, "Name")?,
            email: optional(dto.email),
            department: required(dto.department, "Department")?,
            specialization: optional(dto.specialization),
            active: dto.active,
        })
    }
}

/// Paginated collection of mentors with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedMentors {
    pub mentors: Vec<Mentor>,
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedMentors {
    pub fn into_dto(self) -> PaginatedMentorsDto {
        PaginatedMentorsDto {
            mentors: self.mentors.into_iter().map(Mentor::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// What happened to a deleted mentor's mentees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MentorRemoval {
    pub reassigned: u64,
    pub unassigned: u64,
}
