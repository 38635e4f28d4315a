//! Subject factory for creating test subject entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subjects with customizable fields.
pub struct SubjectFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    name: String,
    semester: i32,
}

impl<'a> SubjectFactory<'a> {
    /// Creates a new SubjectFactory with default values.
    ///
    /// Defaults:
    /// - code: `"SUB{id}"`
    /// - name: `"Subject {id}"`
    /// - semester: `5`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("SUB{}", id),
            name: format!("Subject {}", id),
            semester: 5,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn semester(mut self, semester: i32) -> Self {
        self.semester = semester;
        self
    }

    pub async fn build(self) -> Result<entity::subject::Model, DbErr> {
        entity::subject::ActiveModel {
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            semester: ActiveValue::Set(self.semester),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subject with default values.
pub async fn create_subject(db: &DatabaseConnection) -> Result<entity::subject::Model, DbErr> {
    SubjectFactory::new(db).build().await
}
