use crate::{
    model::dashboard::{AdminDashboardDto, MenteeDashboardDto, MentorDashboardDto, MentorLoadDto},
    server::model::{mentee::Mentee, mentor::Mentor},
};

/// Institution-wide aggregates shown to admins. Cached between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboard {
    pub active_mentors: u64,
    pub active_mentees: u64,
    pub subjects: u64,
    pub unassigned_mentees: u64,
    pub at_risk_mentees: u64,
    pub mentor_loads: Vec<Mentor>,
}

impl AdminDashboard {
    pub fn into_dto(self) -> AdminDashboardDto {
        AdminDashboardDto {
            active_mentors: self.active_mentors,
            active_mentees: self.active_mentees,
            subjects: self.subjects,
            unassigned_mentees: self.unassigned_mentees,
            at_risk_mentees: self.at_risk_mentees,
            mentor_loads: self
                .mentor_loads
                .into_iter()
                .map(|m| MentorLoadDto {
                    mentor_id: m.id,
                    name: m.name,
                    department: m.department,
                    active: m.active,
                    mentee_count: m.mentee_count,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MentorDashboard {
    pub mentee_count: u64,
    pub at_risk_count: u64,
    pub average_attendance: Option<f64>,
    pub unread_messages: u64,
    pub unread_notifications: u64,
}

impl MentorDashboard {
    pub fn into_dto(self) -> MentorDashboardDto {
        MentorDashboardDto {
            mentee_count: self.mentee_count,
            at_risk_count: self.at_risk_count,
            average_attendance: self.average_attendance,
            unread_messages: self.unread_messages,
            unread_notifications: self.unread_notifications,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenteeDashboard {
    pub mentee: Mentee,
    pub mentor: Option<Mentor>,
    pub average_attendance: Option<f64>,
    pub at_risk: bool,
    pub unread_notifications: u64,
    pub unread_messages: u64,
}

impl MenteeDashboard {
    pub fn into_dto(self) -> MenteeDashboardDto {
        MenteeDashboardDto {
            mentee: self.mentee.into_dto(),
            mentor: self.mentor.map(Mentor::into_contact_dto),
            average_attendance: self.average_attendance,
            at_risk: self.at_risk,
            unread_notifications: self.unread_notifications,
            unread_messages: self.unread_messages,
        }
    }
}
