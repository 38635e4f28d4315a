//! Mentee administration and mentor assignment.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        mentee::{MenteeRepository, MenteeWithUser, NewMentee},
        mentor::MentorRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        mentee::{CreateMenteeParams, Mentee, MenteeFilter, PaginatedMentees, UpdateMenteeParams},
        role::Role,
        total_pages,
        user::CreateUserParam,
    },
    service::assignment::MentorLoads,
    util::password::hash_password,
};

pub struct MenteeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenteeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a mentee and its user account.
    ///
    /// The username is the USN and the initial password defaults to the USN. Without an
    /// explicit mentor the mentee goes to the least-loaded active mentor.
    ///
    /// # Returns
    /// - `Ok(Mentee)` - Created mentee
    /// - `Err(AppError::Conflict)` - USN already registered
    /// - `Err(AppError::BadRequest)` - Given mentor does not exist or is inactive
    pub async fn create(
        &self,
        params: CreateMenteeParams,
        bcrypt_cost: u32,
    ) -> Result<Mentee, AppError> {
        let password = params.password.clone().unwrap_or_else(|| params.usn.clone());
        let password_hash = hash_password(&password, bcrypt_cost)?;

        let txn = self.db.begin().await?;

        let mentee_repo = MenteeRepository::new(&txn);
        let user_repo = UserRepository::new(&txn);
        if mentee_repo.find_by_usn(&params.usn).await?.is_some()
            || user_repo.find_by_username(&params.usn).await?.is_some()
        {
            return Err(AppError::Conflict(format!(
                "USN '{}' is already registered",
                params.usn
            )));
        }

        let mentor_id = match params.mentor_id {
            Some(mentor_id) => {
                ensure_active_mentor(&txn, mentor_id).await?;
                Some(mentor_id)
            }
            None => MentorLoads::load(&txn, None).await?.pick(),
        };

        let user = user_repo
            .create(CreateUserParam {
                username: params.usn.clone(),
                password_hash,
                role: Role::Mentee,
                email: params.email,
                name: params.name,
            })
            .await?;
        let mentee = mentee_repo
            .create(NewMentee {
                user_id: user.id,
                usn: params.usn,
                semester: params.semester,
                section: params.section,
                mentor_id,
            })
            .await?;

        txn.commit().await?;

        tracing::info!("Created mentee {} ({})", mentee.id, mentee.usn);

        let mentor_name = self.mentor_name(mentee.mentor_id).await?;
        Ok(Mentee::from_entity(mentee, user, mentor_name))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Mentee>, AppError> {
        let Some((mentee, user)) = MenteeRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };
        let mentor_name = self.mentor_name(mentee.mentor_id).await?;

        Ok(Some(Mentee::from_entity(mentee, user, mentor_name)))
    }

    /// Gets the mentee profile owned by a user, if the user is a mentee.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Option<Mentee>, AppError> {
        let Some(mentee) = MenteeRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
        else {
            return Ok(None);
        };

        self.get_by_id(mentee.id).await
    }

    pub async fn get_paginated(
        &self,
        filter: MenteeFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedMentees, AppError> {
        let (rows, total) = MenteeRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;
        let mentees = self.with_mentor_names(rows).await?;

        Ok(PaginatedMentees {
            mentees,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Gets the mentees currently assigned to a mentor, including inactive ones.
    pub async fn get_by_mentor(&self, mentor_id: i32) -> Result<Vec<Mentee>, AppError> {
        let rows = MenteeRepository::new(self.db)
            .get_by_mentor(mentor_id, false)
            .await?;

        self.with_mentor_names(rows).await
    }

    /// Gets every active mentee, ordered by ID.
    pub async fn get_all_active(&self) -> Result<Vec<Mentee>, AppError> {
        let rows = MenteeRepository::new(self.db).get_all_active().await?;

        self.with_mentor_names(rows).await
    }

    /// Updates a mentee's profile and active flag.
    ///
    /// # Returns
    /// - `Ok(Some(Mentee))` - Updated mentee
    /// - `Ok(None)` - No mentee with that ID
    pub async fn update(&self, params: UpdateMenteeParams) -> Result<Option<Mentee>, AppError> {
        let txn = self.db.begin().await?;

        let mentee_repo = MenteeRepository::new(&txn);
        let Some((mentee, _)) = mentee_repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        UserRepository::new(&txn)
            .update_profile(mentee.user_id, params.name, params.email)
            .await?;
        mentee_repo
            .update(params.id, params.semester, params.section, params.active)
            .await?;

        txn.commit().await?;

        self.get_by_id(params.id).await
    }

    /// Deletes a mentee by deleting its user; records and messages cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let Some((mentee, _)) = MenteeRepository::new(self.db).find_by_id(id).await? else {
            return Ok(false);
        };

        Ok(UserRepository::new(self.db).delete(mentee.user_id).await?)
    }

    /// Assigns a mentee to a mentor, or unassigns it when `mentor_id` is `None`.
    ///
    /// # Returns
    /// - `Ok(Some(Mentee))` - Updated mentee
    /// - `Ok(None)` - No mentee with that ID
    /// - `Err(AppError::BadRequest)` - Mentor does not exist or is inactive
    pub async fn assign_mentor(
        &self,
        id: i32,
        mentor_id: Option<i32>,
    ) -> Result<Option<Mentee>, AppError> {
        let repo = MenteeRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        if let Some(mentor_id) = mentor_id {
            ensure_active_mentor(self.db, mentor_id).await?;
        }
        repo.set_mentor(id, mentor_id).await?;

        self.get_by_id(id).await
    }

    /// Assigns every active unassigned mentee with the least-loaded rule.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of mentees assigned; zero when no active mentor exists
    pub async fn auto_assign_unassigned(&self) -> Result<usize, AppError> {
        let txn = self.db.begin().await?;

        let repo = MenteeRepository::new(&txn);
        let unassigned = repo.get_unassigned_active().await?;
        let mut loads = MentorLoads::load(&txn, None).await?;

        let mut assigned = 0;
        for mentee in unassigned {
            let Some(mentor_id) = loads.pick() else {
                break;
            };
            repo.set_mentor(mentee.id, Some(mentor_id)).await?;
            assigned += 1;
        }

        txn.commit().await?;

        tracing::info!("Auto-assigned {} mentees", assigned);

        Ok(assigned)
    }

    async fn mentor_name(&self, mentor_id: Option<i32>) -> Result<Option<String>, AppError> {
        let Some(mentor_id) = mentor_id else {
            return Ok(None);
        };
        let mut names = MentorRepository::new(self.db)
            .names_by_ids(vec![mentor_id])
            .await?;

        Ok(names.remove(&mentor_id))
    }

    async fn with_mentor_names(&self, rows: Vec<MenteeWithUser>) -> Result<Vec<Mentee>, AppError> {
        let mut mentor_ids: Vec<i32> = rows.iter().filter_map(|(m, _)| m.mentor_id).collect();
        mentor_ids.sort_unstable();
        mentor_ids.dedup();
        let names = MentorRepository::new(self.db)
            .names_by_ids(mentor_ids)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(mentee, user)| {
                let mentor_name = mentee.mentor_id.and_then(|id| names.get(&id).cloned());
                Mentee::from_entity(mentee, user, mentor_name)
            })
            .collect())
    }
}

/// Fails with 400 unless `mentor_id` names an active mentor.
pub(crate) async fn ensure_active_mentor<C: ConnectionTrait>(
    db: &C,
    mentor_id: i32,
) -> Result<(), AppError> {
    match MentorRepository::new(db).find_by_id(mentor_id).await? {
        Some((mentor, _)) if mentor.active => Ok(()),
        Some(_) => Err(AppError::BadRequest(format!(
            "Mentor {} is inactive",
            mentor_id
        ))),
        None => Err(AppError::BadRequest(format!(
            "Mentor {} does not exist",
            mentor_id
        ))),
    }
}
