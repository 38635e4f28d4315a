//! Mentee factory for creating a mentee user and its mentee row in one step.

use crate::factory::{helpers::next_id, user::UserFactory};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test mentees with customizable fields.
///
/// The user's username defaults to the mentee's USN, mirroring how imported
/// mentees are provisioned.
pub struct MenteeFactory<'a> {
    db: &'a DatabaseConnection,
    usn: String,
    name: Option<String>,
    semester: i32,
    section: Option<String>,
    mentor_id: Option<i32>,
    active: bool,
}

impl<'a> MenteeFactory<'a> {
    /// Creates a new MenteeFactory with default values.
    ///
    /// Defaults:
    /// - usn: `"1XX{id}"` where id is auto-incremented
    /// - semester: `5`
    /// - section: `Some("A")`
    /// - mentor_id: `None`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            usn: format!("1XX{:05}", next_id()),
            name: None,
            semester: 5,
            section: Some("A".to_string()),
            mentor_id: None,
            active: true,
        }
    }

    pub fn usn(mut self, usn: impl Into<String>) -> Self {
        self.usn = usn.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn semester(mut self, semester: i32) -> Self {
        self.semester = semester;
        self
    }

    pub fn section(mut self, section: Option<String>) -> Self {
        self.section = section;
        self
    }

    pub fn mentor_id(mut self, mentor_id: Option<i32>) -> Self {
        self.mentor_id = mentor_id;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the user and mentee rows.
    ///
    /// # Returns
    /// - `Ok((user, mentee))` - Created user and mentee entities
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<(entity::user::Model, entity::mentee::Model), DbErr> {
        let mut user = UserFactory::new(self.db)
            .username(self.usn.clone())
            .role("mentee");
        if let Some(name) = self.name {
            user = user.name(name);
        }
        let user = user.build().await?;

        let mentee = entity::mentee::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            usn: ActiveValue::Set(self.usn),
            semester: ActiveValue::Set(self.semester),
            section: ActiveValue::Set(self.section),
            mentor_id: ActiveValue::Set(self.mentor_id),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((user, mentee))
    }
}

/// Creates an unassigned mentee with default values.
pub async fn create_mentee(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::mentee::Model), DbErr> {
    MenteeFactory::new(db).build().await
}

/// Creates a mentee assigned to the given mentor.
pub async fn create_mentee_for(
    db: &DatabaseConnection,
    mentor_id: i32,
) -> Result<(entity::user::Model, entity::mentee::Model), DbErr> {
    MenteeFactory::new(db).mentor_id(Some(mentor_id)).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::mentor::create_mentor};

    #[tokio::test]
    async fn creates_mentee_with_usn_as_username() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, mentee) = MenteeFactory::new(db).usn("1RV21CS001").build().await?;

        assert_eq!(user.username, "1RV21CS001");
        assert_eq!(user.role, "mentee");
        assert_eq!(mentee.usn, "1RV21CS001");
        assert_eq!(mentee.mentor_id, None);

        Ok(())
    }

    #[tokio::test]
    async fn creates_mentee_assigned_to_mentor() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, mentor) = create_mentor(db).await?;
        let (_, mentee) = create_mentee_for(db, mentor.id).await?;

        assert_eq!(mentee.mentor_id, Some(mentor.id));

        Ok(())
    }
}
