use crate::{
    model::subject::{SaveSubjectDto, SubjectDto},
    server::{error::AppError, model::mentee::validate_semester, util::text::required},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub semester: i32,
}

impl Subject {
    pub fn from_entity(entity: entity::subject::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            semester: entity.semester,
        }
    }

    pub fn into_dto(self) -> SubjectDto {
        SubjectDto {
            id: self.id,
            code: self.code,
            name: self.name,
            semester: self.semester,
        }
    }
}

/// Fields written on subject create and update. Codes are stored upper-cased.
#[derive(Debug, Clone)]
pub struct SaveSubjectParams {
    pub code: String,
    pub name: String,
    pub semester: i32,
}

impl SaveSubjectParams {
    pub fn from_dto(dto: SaveSubjectDto) -> Result<Self, AppError> {
        Ok(Self {
            code: required(dto.code, "Subject code")?.to_uppercase(),
            name: required(dto.name, "Subject name")?,
            semester: validate_semester(dto.semester)?,
        })
    }
}
