use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SubjectDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub semester: i32,
}

/// Payload for both creating and updating a subject.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SaveSubjectDto {
    pub code: String,
    pub name: String,
    pub semester: i32,
}
