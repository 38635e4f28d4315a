//! Mentor data repository.
//!
//! Mentor rows are always read together with their user row. Load figures count
//! only active mentees, matching what the assignment balancer sees.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

/// Mentor row paired with its user row.
pub type MentorWithUser = (entity::mentor::Model, entity::user::Model);

pub struct MentorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MentorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a mentor row for an existing user.
    pub async fn create(
        &self,
        user_id: i32,
        department: String,
        specialization: Option<String>,
    ) -> Result<entity::mentor::Model, DbErr> {
        entity::mentor::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            department: ActiveValue::Set(department),
            specialization: ActiveValue::Set(specialization),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a mentor by ID together with its user.
    ///
    /// # Returns
    /// - `Ok(Some((mentor, user)))` - Mentor found
    /// - `Ok(None)` - No mentor with that ID, or its user row is gone
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<MentorWithUser>, DbErr> {
        let result = entity::prelude::Mentor::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(mentor, user)| user.map(|u| (mentor, u))))
    }

    /// Gets the mentor row owned by a user.
    pub async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::mentor::Model>, DbErr> {
        entity::prelude::Mentor::find()
            .filter(entity::mentor::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets a page of mentors ordered by ID, optionally filtered by department.
    ///
    /// # Arguments
    /// - `department` - Exact department to filter on
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of mentors per page
    ///
    /// # Returns
    /// - `Ok((mentors, total))` - Page of mentors and total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        department: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<MentorWithUser>, u64), DbErr> {
        let mut query = entity::prelude::Mentor::find()
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::mentor::Column::Id);

        if let Some(department) = department {
            query = query.filter(entity::mentor::Column::Department.eq(department));
        }

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        let mentors = rows
            .into_iter()
            .filter_map(|(mentor, user)| user.map(|u| (mentor, u)))
            .collect();

        Ok((mentors, total))
    }

    /// Gets every mentor with its user, ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<MentorWithUser>, DbErr> {
        let rows = entity::prelude::Mentor::find()
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::mentor::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(mentor, user)| user.map(|u| (mentor, u)))
            .collect())
    }

    /// Updates a mentor's department, specialization and active flag.
    pub async fn update(
        &self,
        id: i32,
        department: String,
        specialization: Option<String>,
        active: bool,
    ) -> Result<entity::mentor::Model, DbErr> {
        let mentor = entity::prelude::Mentor::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Mentor with id {} not found", id)))?;

        let mut active_model = mentor.into_active_model();
        active_model.department = ActiveValue::Set(department);
        active_model.specialization = ActiveValue::Set(specialization);
        active_model.active = ActiveValue::Set(active);
        active_model.update(self.db).await
    }

    /// Maps mentor IDs to their users' display names.
    pub async fn names_by_ids(&self, mentor_ids: Vec<i32>) -> Result<HashMap<i32, String>, DbErr> {
        if mentor_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String)> = entity::prelude::Mentor::find()
            .select_only()
            .column(entity::mentor::Column::Id)
            .column(entity::user::Column::Name)
            .inner_join(entity::prelude::User)
            .filter(entity::mentor::Column::Id.is_in(mentor_ids))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// Counts active mentees per mentor for the given mentor IDs.
    ///
    /// Mentors without mentees are absent from the returned map.
    pub async fn mentee_counts(&self, mentor_ids: Vec<i32>) -> Result<HashMap<i32, u64>, DbErr> {
        if mentor_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let assigned: Vec<Option<i32>> = entity::prelude::Mentee::find()
            .select_only()
            .column(entity::mentee::Column::MentorId)
            .filter(entity::mentee::Column::MentorId.is_in(mentor_ids))
            .filter(entity::mentee::Column::Active.eq(true))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for mentor_id in assigned.into_iter().flatten() {
            *counts.entry(mentor_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Active-mentee load of every active mentor, optionally excluding one mentor.
    ///
    /// # Returns
    /// - `Ok(Vec<(mentor_id, count)>)` - Every active mentor, including those with zero mentees
    /// - `Err(DbErr)` - Database error during query
    pub async fn active_loads(&self, exclude: Option<i32>) -> Result<Vec<(i32, u64)>, DbErr> {
        let mut query = entity::prelude::Mentor::find()
            .select_only()
            .column(entity::mentor::Column::Id)
            .filter(entity::mentor::Column::Active.eq(true))
            .order_by_asc(entity::mentor::Column::Id);

        if let Some(excluded) = exclude {
            query = query.filter(entity::mentor::Column::Id.ne(excluded));
        }

        let mentor_ids: Vec<i32> = query.into_tuple().all(self.db).await?;
        let counts = self.mentee_counts(mentor_ids.clone()).await?;

        Ok(mentor_ids
            .into_iter()
            .map(|id| (id, counts.get(&id).copied().unwrap_or(0)))
            .collect())
    }

    /// Counts active mentors.
    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::Mentor::find()
            .filter(entity::mentor::Column::Active.eq(true))
            .count(self.db)
            .await
    }
}
