//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user rows. It returns raw
//! entity models because the auth service needs the stored password hash; callers
//! convert to the `User` domain model once the hash is no longer needed.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};

use crate::server::model::{role::Role, user::CreateUserParam};

/// Repository providing database operations for user management.
///
/// Generic over the connection so the same queries run on the pool or inside a
/// transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on username
    pub async fn create(&self, param: CreateUserParam) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by exact username.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Fetches every user with the given ids, in no particular order.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::user::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Updates a user's display name and email.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that id
    pub async fn update_profile(
        &self,
        id: i32,
        name: String,
        email: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("User with id {} not found", id)))?;

        let mut active = user.into_active_model();
        active.name = ActiveValue::Set(name);
        active.email = ActiveValue::Set(email);
        active.update(self.db).await
    }

    /// Replaces a user's password hash.
    pub async fn update_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("User with id {} not found", id)))?;

        let mut active = user.into_active_model();
        active.password_hash = ActiveValue::Set(password_hash);
        active.update(self.db).await?;

        Ok(())
    }

    /// Deletes a user; role rows, messages and read markers cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether a bootstrap admin account must be created.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
