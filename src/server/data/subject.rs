use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::subject::{SaveSubjectParams, Subject};

pub struct SubjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubjectRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists subjects ordered by semester then code.
    ///
    /// # Arguments
    /// - `semester` - Only return subjects of this semester
    pub async fn get_all(&self, semester: Option<i32>) -> Result<Vec<Subject>, DbErr> {
        let mut query = entity::prelude::Subject::find()
            .order_by_asc(entity::subject::Column::Semester)
            .order_by_asc(entity::subject::Column::Code);

        if let Some(semester) = semester {
            query = query.filter(entity::subject::Column::Semester.eq(semester));
        }

        let subjects = query.all(self.db).await?;

        Ok(subjects.into_iter().map(Subject::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Subject>, DbErr> {
        let subject = entity::prelude::Subject::find_by_id(id).one(self.db).await?;

        Ok(subject.map(Subject::from_entity))
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Subject>, DbErr> {
        let subject = entity::prelude::Subject::find()
            .filter(entity::subject::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(subject.map(Subject::from_entity))
    }

    pub async fn create(&self, params: SaveSubjectParams) -> Result<Subject, DbErr> {
        let subject = entity::subject::ActiveModel {
            code: ActiveValue::Set(params.code),
            name: ActiveValue::Set(params.name),
            semester: ActiveValue::Set(params.semester),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Subject::from_entity(subject))
    }

    /// Overwrites a subject's code, name and semester.
    ///
    /// # Returns
    /// - `Ok(Some(Subject))` - Updated subject
    /// - `Ok(None)` - No subject with that ID
    pub async fn update(
        &self,
        id: i32,
        params: SaveSubjectParams,
    ) -> Result<Option<Subject>, DbErr> {
        let Some(subject) = entity::prelude::Subject::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = subject.into_active_model();
        active.code = ActiveValue::Set(params.code);
        active.name = ActiveValue::Set(params.name);
        active.semester = ActiveValue::Set(params.semester);
        let updated = active.update(self.db).await?;

        Ok(Some(Subject::from_entity(updated)))
    }

    /// Deletes a subject; its academic records cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Subject::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Subject::find().count(self.db).await
    }
}
