//! User domain models and parameters.
//!
//! Provides the authenticated user model shared by every role, plus the parameter
//! type used when inserting a user row for a new admin, mentor or mentee.

use chrono::{DateTime, Utc};

use crate::{
    model::user::UserDto,
    server::{
        error::{internal::InternalError, AppError},
        model::role::Role,
    },
};

/// Account with login identity and role.
///
/// The password hash never leaves the data layer; this model is what the auth guard
/// hands to controllers.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            name: self.name,
            email: self.email,
            role: self.role.as_str().to_string(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownRole))` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::from_name(&entity.role).ok_or_else(|| InternalError::UnknownRole {
            user_id: entity.id,
            role: entity.role.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            name: entity.name,
            email: entity.email,
            role,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    /// bcrypt hash of the initial password.
    pub password_hash: String,
    pub role: Role,
    pub email: Option<String>,
    pub name: String,
}
