use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MenteeDto {
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

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMenteeDto {
    pub usn: String,
    pub name: String,
    pub email: Option<String>,
    pub semester: i32,
    pub section: Option<String>,
    /// Explicit mentor; the least-loaded active mentor is chosen when omitted.
    pub mentor_id: Option<i32>,
    /// Initial password; defaults to the USN when omitted.
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateMenteeDto {
    pub name: String,
    pub email: Option<String>,
    pub semester: i32,
    pub section: Option<String>,
    pub active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AssignMentorDto {
    /// Mentor to assign, or `null` to unassign.
    pub mentor_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AutoAssignResultDto {
    pub assigned: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedMenteesDto {
    pub mentees: Vec<MenteeDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
