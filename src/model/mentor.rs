use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MentorDto {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    pub department: String,
    pub specialization: Option<String>,
    pub active: bool,
    /// Number of active mentees currently assigned.
    pub mentee_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMentorDto {
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    /// Initial password; defaults to the username when omitted.
    pub password: Option<String>,
    pub department: String,
    pub specialization: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateMentorDto {
    pub name: String,
    pub email: Option<String>,
    pub department: String,
    pub specialization: Option<String>,
    pub active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedMentorsDto {
    pub mentors: Vec<MentorDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Result of deleting a mentor.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DeleteMentorDto {
    /// Mentees moved to another active mentor.
    pub reassigned: u64,
    /// Mentees left without a mentor because no active mentor remained.
    pub unassigned: u64,
}
