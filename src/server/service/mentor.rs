//! Mentor administration.
//!
//! Creating, updating and deleting a mentor touches both the user and the mentor rows,
//! so each of those runs in one transaction. Every query inside a transaction goes
//! through the transaction handle.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        mentee::MenteeRepository,
        mentor::{MentorRepository, MentorWithUser},
        user::UserRepository,
    },
    error::AppError,
    model::{
        mentor::{
            CreateMentorParams, Mentor, MentorRemoval, PaginatedMentors, UpdateMentorParams,
        },
        role::Role,
        total_pages,
        user::CreateUserParam,
    },
    service::assignment::MentorLoads,
    util::password::hash_password,
};

pub struct MentorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MentorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a mentor and its user account.
    ///
    /// The initial password defaults to the username when none is given.
    ///
    /// # Returns
    /// - `Ok(Mentor)` - Created mentor with zero mentees
    /// - `Err(AppError::Conflict)` - Username already taken
    pub async fn create(
        &self,
        params: CreateMentorParams,
        bcrypt_cost: u32,
    ) -> Result<Mentor, AppError> {
        let password = params
            .password
            .clone()
            .unwrap_or_else(|| params.username.clone());
        let password_hash = hash_password(&password, bcrypt_cost)?;

        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        if user_repo.find_by_username(&params.username).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Username '{}' is already taken",
                params.username
            )));
        }

        let user = user_repo
            .create(CreateUserParam {
                username: params.username,
                password_hash,
                role: Role::Mentor,
                email: params.email,
                name: params.name,
            })
            .await?;
        let mentor = MentorRepository::new(&txn)
            .create(user.id, params.department, params.specialization)
            .await?;

        txn.commit().await?;

        tracing::info!("Created mentor {} ({})", mentor.id, user.username);

        Ok(Mentor::from_entity(mentor, user, 0))
    }

    /// Gets a mentor with its current active-mentee count.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Mentor>, AppError> {
        let repo = MentorRepository::new(self.db);

        let Some((mentor, user)) = repo.find_by_id(id).await? else {
            return Ok(None);
        };
        let count = repo
            .mentee_counts(vec![mentor.id])
            .await?
            .get(&mentor.id)
            .copied()
            .unwrap_or(0);

        Ok(Some(Mentor::from_entity(mentor, user, count)))
    }

    /// Gets the mentor profile owned by a user, if the user is a mentor.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Option<Mentor>, AppError> {
        let Some(mentor) = MentorRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
        else {
            return Ok(None);
        };

        self.get_by_id(mentor.id).await
    }

    /// Gets a page of mentors with their loads.
    pub async fn get_paginated(
        &self,
        department: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedMentors, AppError> {
        let repo = MentorRepository::new(self.db);

        let (rows, total) = repo.get_paginated(department, page, per_page).await?;
        let mentors = self.with_counts(rows).await?;

        Ok(PaginatedMentors {
            mentors,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Gets every mentor with its load, ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Mentor>, AppError> {
        let rows = MentorRepository::new(self.db).get_all().await?;

        self.with_counts(rows).await
    }

    /// Updates a mentor's profile and active flag.
    ///
    /// Deactivation leaves existing mentees in place.
    ///
    /// # Returns
    /// - `Ok(Some(Mentor))` - Updated mentor
    /// - `Ok(None)` - No mentor with that ID
    pub async fn update(&self, params: UpdateMentorParams) -> Result<Option<Mentor>, AppError> {
        let txn = self.db.begin().await?;

        let mentor_repo = MentorRepository::new(&txn);
        let Some((mentor, _)) = mentor_repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        UserRepository::new(&txn)
            .update_profile(mentor.user_id, params.name, params.email)
            .await?;
        mentor_repo
            .update(
                params.id,
                params.department,
                params.specialization,
                params.active,
            )
            .await?;

        txn.commit().await?;

        self.get_by_id(params.id).await
    }

    /// Deletes a mentor after moving its mentees to the least-loaded active mentors.
    ///
    /// Only active mentees count toward a mentor's load; inactive ones follow the
    /// current least-loaded mentor without shifting it. Mentees become unassigned
    /// when no other active mentor exists. Deleting the mentor's user cascades to the
    /// mentor row.
    ///
    /// # Returns
    /// - `Ok(Some(MentorRemoval))` - Counts of reassigned and unassigned mentees
    /// - `Ok(None)` - No mentor with that ID
    pub async fn delete(&self, id: i32) -> Result<Option<MentorRemoval>, AppError> {
        let txn = self.db.begin().await?;

        let Some((mentor, _)) = MentorRepository::new(&txn).find_by_id(id).await? else {
            return Ok(None);
        };

        let mentee_repo = MenteeRepository::new(&txn);
        let mentees = mentee_repo.get_by_mentor(id, false).await?;
        let mut loads = MentorLoads::load(&txn, Some(id)).await?;

        let mut removal = MentorRemoval {
            reassigned: 0,
            unassigned: 0,
        };
        for (mentee, _) in mentees {
            let target = if mentee.active {
                loads.pick()
            } else {
                loads.peek()
            };
            mentee_repo.set_mentor(mentee.id, target).await?;
            match target {
                Some(_) => removal.reassigned += 1,
                None => removal.unassigned += 1,
            }
        }

        UserRepository::new(&txn).delete(mentor.user_id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted mentor {}: {} mentees reassigned, {} unassigned",
            id,
            removal.reassigned,
            removal.unassigned
        );

        Ok(Some(removal))
    }

    async fn with_counts(&self, rows: Vec<MentorWithUser>) -> Result<Vec<Mentor>, AppError> {
        let ids = rows.iter().map(|(mentor, _)| mentor.id).collect();
        let counts = MentorRepository::new(self.db).mentee_counts(ids).await?;

        Ok(rows
            .into_iter()
            .map(|(mentor, user)| {
                let count = counts.get(&mentor.id).copied().unwrap_or(0);
                Mentor::from_entity(mentor, user, count)
            })
            .collect())
    }
}
