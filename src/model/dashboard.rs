use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::mentee::MenteeDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MentorLoadDto {
    pub mentor_id: i32,
    pub name: String,
    pub department: String,
    pub active: bool,
    pub mentee_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AdminDashboardDto {
    pub active_mentors: u64,
    pub active_mentees: u64,
    pub subjects: u64,
    pub unassigned_mentees: u64,
    pub at_risk_mentees: u64,
    pub mentor_loads: Vec<MentorLoadDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MentorDashboardDto {
    pub mentee_count: u64,
    pub at_risk_count: u64,
    pub average_attendance: Option<f64>,
    pub unread_messages: u64,
    pub unread_notifications: u64,
}

/// Contact details of a mentee's mentor.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MentorContactDto {
    pub mentor_id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub department: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MenteeDashboardDto {
    pub mentee: MenteeDto,
    pub mentor: Option<MentorContactDto>,
    pub average_attendance: Option<f64>,
    pub at_risk: bool,
    pub unread_notifications: u64,
    pub unread_messages: u64,
}
