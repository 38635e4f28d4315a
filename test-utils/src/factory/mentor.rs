//! Mentor factory for creating a mentor user and its mentor row in one step.

use crate::factory::user::UserFactory;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test mentors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let (user, mentor) = MentorFactory::new(&db)
///     .department("ECE")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct MentorFactory<'a> {
    db: &'a DatabaseConnection,
    user: UserFactory<'a>,
    department: String,
    specialization: Option<String>,
    active: bool,
}

impl<'a> MentorFactory<'a> {
    /// Creates a new MentorFactory with default values.
    ///
    /// Defaults:
    /// - user: a `mentor`-role user from [`UserFactory`] defaults
    /// - department: `"CSE"`
    /// - specialization: `None`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user: UserFactory::new(db).role("mentor"),
            department: "CSE".to_string(),
            specialization: None,
            active: true,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.user = self.user.username(username);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.user = self.user.name(name);
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn specialization(mut self, specialization: Option<String>) -> Self {
        self.specialization = specialization;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the user and mentor rows.
    ///
    /// # Returns
    /// - `Ok((user, mentor))` - Created user and mentor entities
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<(entity::user::Model, entity::mentor::Model), DbErr> {
        let user = self.user.build().await?;

        let mentor = entity::mentor::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            department: ActiveValue::Set(self.department),
            specialization: ActiveValue::Set(self.specialization),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((user, mentor))
    }
}

/// Creates an active mentor with default values.
pub async fn create_mentor(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::mentor::Model), DbErr> {
    MentorFactory::new(db).build().await
}
