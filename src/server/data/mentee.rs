//! Mentee data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::mentee::MenteeFilter;

/// Mentee row paired with its user row.
pub type MenteeWithUser = (entity::mentee::Model, entity::user::Model);

/// Columns of a new mentee row.
#[derive(Debug, Clone)]
pub struct NewMentee {
    pub user_id: i32,
    pub usn: String,
    pub semester: i32,
    pub section: Option<String>,
    pub mentor_id: Option<i32>,
}

pub struct MenteeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenteeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an active mentee row for an existing user.
    pub async fn create(&self, mentee: NewMentee) -> Result<entity::mentee::Model, DbErr> {
        entity::mentee::ActiveModel {
            user_id: ActiveValue::Set(mentee.user_id),
            usn: ActiveValue::Set(mentee.usn),
            semester: ActiveValue::Set(mentee.semester),
            section: ActiveValue::Set(mentee.section),
            mentor_id: ActiveValue::Set(mentee.mentor_id),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a mentee by ID together with its user.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<MenteeWithUser>, DbErr> {
        let result = entity::prelude::Mentee::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(mentee, user)| user.map(|u| (mentee, u))))
    }

    /// Gets the mentee row owned by a user.
    pub async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::mentee::Model>, DbErr> {
        entity::prelude::Mentee::find()
            .filter(entity::mentee::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets a mentee by its (already normalized) USN.
    pub async fn find_by_usn(&self, usn: &str) -> Result<Option<entity::mentee::Model>, DbErr> {
        entity::prelude::Mentee::find()
            .filter(entity::mentee::Column::Usn.eq(usn))
            .one(self.db)
            .await
    }

    /// Gets a filtered page of mentees ordered by USN.
    ///
    /// # Arguments
    /// - `filter` - Semester, section, mentor, unassigned and text search filters
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of mentees per page
    ///
    /// # Returns
    /// - `Ok((mentees, total))` - Page of mentees and total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: MenteeFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<MenteeWithUser>, u64), DbErr> {
        let mut query = entity::prelude::Mentee::find()
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::mentee::Column::Usn);

        if let Some(semester) = filter.semester {
            query = query.filter(entity::mentee::Column::Semester.eq(semester));
        }
        if let Some(section) = filter.section {
            query = query.filter(entity::mentee::Column::Section.eq(section));
        }
        if let Some(mentor_id) = filter.mentor_id {
            query = query.filter(entity::mentee::Column::MentorId.eq(mentor_id));
        }
        if filter.unassigned {
            query = query.filter(entity::mentee::Column::MentorId.is_null());
        }
        if let Some(search) = filter.search.filter(|s| !s.trim().is_empty()) {
            let search = search.trim();
            query = query.filter(
                Condition::any()
                    .add(entity::mentee::Column::Usn.contains(search.to_uppercase()))
                    .add(entity::user::Column::Name.contains(search)),
            );
        }

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        let mentees = rows
            .into_iter()
            .filter_map(|(mentee, user)| user.map(|u| (mentee, u)))
            .collect();

        Ok((mentees, total))
    }

    /// Gets every mentee assigned to a mentor, ordered by USN.
    ///
    /// # Arguments
    /// - `mentor_id` - Mentor row ID
    /// - `active_only` - Skip deactivated mentees
    pub async fn get_by_mentor(
        &self,
        mentor_id: i32,
        active_only: bool,
    ) -> Result<Vec<MenteeWithUser>, DbErr> {
        let mut query = entity::prelude::Mentee::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::mentee::Column::MentorId.eq(mentor_id))
            .order_by_asc(entity::mentee::Column::Usn);

        if active_only {
            query = query.filter(entity::mentee::Column::Active.eq(true));
        }

        let rows = query.all(self.db).await?;

        Ok(rows
            .into_iter()
            .filter_map(|(mentee, user)| user.map(|u| (mentee, u)))
            .collect())
    }

    /// Gets active mentees without a mentor, ordered by ID.
    pub async fn get_unassigned_active(&self) -> Result<Vec<entity::mentee::Model>, DbErr> {
        entity::prelude::Mentee::find()
            .filter(entity::mentee::Column::MentorId.is_null())
            .filter(entity::mentee::Column::Active.eq(true))
            .order_by_asc(entity::mentee::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every active mentee with its user.
    pub async fn get_all_active(&self) -> Result<Vec<MenteeWithUser>, DbErr> {
        let rows = entity::prelude::Mentee::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::mentee::Column::Active.eq(true))
            .order_by_asc(entity::mentee::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(mentee, user)| user.map(|u| (mentee, u)))
            .collect())
    }

    /// Updates a mentee's semester, section and active flag.
    pub async fn update(
        &self,
        id: i32,
        semester: i32,
        section: Option<String>,
        active: bool,
    ) -> Result<entity::mentee::Model, DbErr> {
        let mentee = self.get_row(id).await?;

        let mut active_model = mentee.into_active_model();
        active_model.semester = ActiveValue::Set(semester);
        active_model.section = ActiveValue::Set(section);
        active_model.active = ActiveValue::Set(active);
        active_model.update(self.db).await
    }

    /// Sets or clears a mentee's mentor.
    pub async fn set_mentor(
        &self,
        id: i32,
        mentor_id: Option<i32>,
    ) -> Result<entity::mentee::Model, DbErr> {
        let mentee = self.get_row(id).await?;

        let mut active_model = mentee.into_active_model();
        active_model.mentor_id = ActiveValue::Set(mentor_id);
        active_model.update(self.db).await
    }

    /// Counts active mentees.
    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::Mentee::find()
            .filter(entity::mentee::Column::Active.eq(true))
            .count(self.db)
            .await
    }

    /// Counts active mentees without a mentor.
    pub async fn count_unassigned(&self) -> Result<u64, DbErr> {
        entity::prelude::Mentee::find()
            .filter(entity::mentee::Column::Active.eq(true))
            .filter(entity::mentee::Column::MentorId.is_null())
            .count(self.db)
            .await
    }

    async fn get_row(&self, id: i32) -> Result<entity::mentee::Model, DbErr> {
        entity::prelude::Mentee::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Mentee with id {} not found", id)))
    }
}
