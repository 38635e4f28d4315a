use sea_orm::DatabaseConnection;

use crate::server::{
    data::subject::SubjectRepository,
    error::AppError,
    model::subject::{SaveSubjectParams, Subject},
};

pub struct SubjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, semester: Option<i32>) -> Result<Vec<Subject>, AppError> {
        Ok(SubjectRepository::new(self.db).get_all(semester).await?)
    }

    /// Creates a subject.
    ///
    /// # Returns
    /// - `Ok(Subject)` - Created subject
    /// - `Err(AppError::Conflict)` - Another subject already uses the code
    pub async fn create(&self, params: SaveSubjectParams) -> Result<Subject, AppError> {
        let repo = SubjectRepository::new(self.db);

        if repo.find_by_code(&params.code).await?.is_some() {
            return Err(duplicate_code(&params.code));
        }

        Ok(repo.create(params).await?)
    }

    /// Updates a subject.
    ///
    /// # Returns
    /// - `Ok(Some(Subject))` - Updated subject
    /// - `Ok(None)` - No subject with that ID
    /// - `Err(AppError::Conflict)` - Another subject already uses the new code
    pub async fn update(
        &self,
        id: i32,
        params: SaveSubjectParams,
    ) -> Result<Option<Subject>, AppError> {
        let repo = SubjectRepository::new(self.db);

        if let Some(existing) = repo.find_by_code(&params.code).await? {
            if existing.id != id {
                return Err(duplicate_code(&params.code));
            }
        }

        Ok(repo.update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(SubjectRepository::new(self.db).delete(id).await?)
    }
}

fn duplicate_code(code: &str) -> AppError {
    AppError::Conflict(format!("Subject code '{}' already exists", code))
}
