//! Notification creation, listing and per-user read state.
//!
//! Admins may address any roles or any single user. Mentors may only address their own
//! mentees, either one mentee or all of them; the latter fans out into one row per
//! mentee. Mentees cannot create notifications.

use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::server::{
    data::{
        mentee::MenteeRepository, mentor::MentorRepository,
        notification::NotificationRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        notification::{CreateNotificationParams, NewNotification, Notification},
        role::Role,
        user::User,
    },
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates one or more notifications on behalf of `sender`.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of notification rows created
    /// - `Err(AppError::AuthErr(AccessDenied))` - Sender is a mentee, or a mentor
    ///   addressing roles or someone other than their own mentees
    /// - `Err(AppError::NotFound)` - Target user does not exist
    pub async fn create(
        &self,
        sender: &User,
        params: CreateNotificationParams,
    ) -> Result<usize, AppError> {
        match sender.role {
            Role::Admin => self.create_as_admin(sender, params).await,
            Role::Mentor => self.create_as_mentor(sender, params).await,
            Role::Mentee => Err(AuthError::AccessDenied(
                sender.id,
                "mentees cannot send notifications".to_string(),
            )
            .into()),
        }
    }

    async fn create_as_admin(
        &self,
        sender: &User,
        params: CreateNotificationParams,
    ) -> Result<usize, AppError> {
        if let Some(target) = params.target_user_id {
            if UserRepository::new(self.db).find_by_id(target).await?.is_none() {
                return Err(AppError::NotFound("Target user not found".to_string()));
            }
        }

        let mut target_roles = params.target_roles;
        if params.all_mentees && !target_roles.contains(&Role::Mentee) {
            target_roles.push(Role::Mentee);
        }

        NotificationRepository::new(self.db)
            .create(NewNotification {
                sender_id: Some(sender.id),
                message: params.message,
                target_roles,
                target_user_id: params.target_user_id,
                urgent: params.urgent,
            })
            .await?;

        Ok(1)
    }

    async fn create_as_mentor(
        &self,
        sender: &User,
        params: CreateNotificationParams,
    ) -> Result<usize, AppError> {
        if !params.target_roles.is_empty() {
            return Err(AuthError::AccessDenied(
                sender.id,
                "mentors cannot broadcast to roles".to_string(),
            )
            .into());
        }

        let mentor = MentorRepository::new(self.db)
            .find_by_user_id(sender.id)
            .await?
            .ok_or(AuthError::AccessDenied(
                sender.id,
                "user has no mentor profile".to_string(),
            ))?;

        let recipients: Vec<i32> = if params.all_mentees {
            MenteeRepository::new(self.db)
                .get_by_mentor(mentor.id, true)
                .await?
                .into_iter()
                .map(|(_, user)| user.id)
                .collect()
        } else {
            let target = params
                .target_user_id
                .ok_or_else(|| AppError::BadRequest("Target mentee is required".to_string()))?;
            let owns = MenteeRepository::new(self.db)
                .find_by_user_id(target)
                .await?
                .is_some_and(|mentee| mentee.mentor_id == Some(mentor.id));
            if !owns {
                return Err(AuthError::AccessDenied(
                    sender.id,
                    format!("user {} is not one of their mentees", target),
                )
                .into());
            }
            vec![target]
        };

        let txn = self.db.begin().await?;
        let repo = NotificationRepository::new(&txn);
        for recipient in &recipients {
            repo.create(NewNotification {
                sender_id: Some(sender.id),
                message: params.message.clone(),
                target_roles: Vec::new(),
                target_user_id: Some(*recipient),
                urgent: params.urgent,
            })
            .await?;
        }
        txn.commit().await?;

        Ok(recipients.len())
    }

    /// Creates a notification with no sender, used by scheduled jobs.
    pub async fn notify_system(&self, notification: NewNotification) -> Result<(), AppError> {
        NotificationRepository::new(self.db)
            .create(notification)
            .await?;

        Ok(())
    }

    /// Lists notifications visible to a user, newest first, with the user's read flag.
    pub async fn list_for(&self, user: &User) -> Result<Vec<Notification>, AppError> {
        let repo = NotificationRepository::new(self.db);

        let rows = repo.get_visible(user.id, user.role).await?;
        let read = repo
            .read_ids(user.id, rows.iter().map(|n| n.id).collect())
            .await?;

        let mut sender_ids: Vec<i32> = rows.iter().filter_map(|n| n.sender_id).collect();
        sender_ids.sort_unstable();
        sender_ids.dedup();
        let senders: HashMap<i32, String> = UserRepository::new(self.db)
            .find_by_ids(sender_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        rows.into_iter()
            .map(|row| {
                let sender_name = row.sender_id.and_then(|id| senders.get(&id).cloned());
                let is_read = read.contains(&row.id);
                Notification::from_entity(row, sender_name, is_read)
            })
            .collect()
    }

    /// Counts visible notifications the user has not read.
    pub async fn unread_count(&self, user_id: i32, role: Role) -> Result<u64, AppError> {
        let repo = NotificationRepository::new(self.db);

        let visible = repo.get_visible_ids(user_id, role).await?;
        let total = visible.len();
        let read = repo.read_ids(user_id, visible).await?;

        Ok((total - read.len()) as u64)
    }

    /// Marks a notification read for a user.
    ///
    /// # Returns
    /// - `Ok(())` - Marked, or already read
    /// - `Err(AppError::NotFound)` - Notification missing or not addressed to the user
    pub async fn mark_read(&self, user: &User, notification_id: i32) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);

        let notification = repo
            .find_by_id(notification_id)
            .await?
            .map(|row| Notification::from_entity(row, None, false))
            .transpose()?
            .filter(|n| n.is_visible_to(user.id, user.role))
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

        repo.mark_read(notification.id, user.id).await?;

        Ok(())
    }
}
