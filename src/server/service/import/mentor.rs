//! Mentor import: `username`, `name`, `department` required; `email` and
//! `specialization` optional.
//!
//! An existing mentor username updates that mentor. A new username creates a mentor
//! whose initial password is the username. A username held by a non-mentor fails.

use sea_orm::TransactionTrait;

use super::{
    row_result,
    sheet::{Sheet, SheetRow},
    ImportService,
};
use crate::server::{
    data::{mentor::MentorRepository, user::UserRepository},
    error::AppError,
    model::{
        import::{ImportSummary, RowOutcome},
        role::Role,
        user::CreateUserParam,
    },
    util::password::hash_password,
};

pub const MENTOR_COLUMNS: [&str; 3] = ["username", "name", "department"];

struct MentorRow {
    username: String,
    name: String,
    department: String,
    email: Option<String>,
    specialization: Option<String>,
}

impl MentorRow {
    fn parse(row: &SheetRow<'_>) -> Result<Self, AppError> {
        let field = |column: &str| {
            row.required(column)
                .map(str::to_string)
                .map_err(AppError::BadRequest)
        };

        Ok(Self {
            username: field("username")?,
            name: field("name")?,
            department: field("department")?,
            email: row.get("email").map(str::to_string),
            specialization: row.get("specialization").map(str::to_string),
        })
    }
}

impl<'a> ImportService<'a> {
    /// Imports mentors from a parsed sheet.
    ///
    /// # Returns
    /// - `Ok(ImportSummary)` - Per-row outcome tally
    /// - `Err(AppError::ImportErr(MissingColumns))` - A required column is absent
    pub async fn import_mentors(&self, sheet: &Sheet) -> Result<ImportSummary, AppError> {
        sheet.require_columns(&MENTOR_COLUMNS)?;

        let mut summary = ImportSummary::default();
        for row in sheet.rows() {
            let result = match MentorRow::parse(&row) {
                Ok(parsed) => self.import_mentor_row(parsed).await,
                Err(err) => Err(err),
            };
            summary.record(row.number, row_result(row.number, result));
        }

        tracing::info!(
            "Mentor import: {} rows, {} created, {} updated, {} failed",
            summary.total,
            summary.created,
            summary.updated,
            summary.failed()
        );

        Ok(summary)
    }

    async fn import_mentor_row(&self, row: MentorRow) -> Result<RowOutcome, AppError> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        let mentor_repo = MentorRepository::new(&txn);

        let outcome = match user_repo.find_by_username(&row.username).await? {
            Some(user) if user.role != Role::Mentor.as_str() => {
                return Err(AppError::BadRequest(format!(
                    "Username '{}' belongs to a {} account",
                    row.username, user.role
                )));
            }
            Some(user) => {
                user_repo
                    .update_profile(user.id, row.name, row.email)
                    .await?;
                match mentor_repo.find_by_user_id(user.id).await? {
                    Some(mentor) => {
                        mentor_repo
                            .update(mentor.id, row.department, row.specialization, mentor.active)
                            .await?;
                    }
                    None => {
                        mentor_repo
                            .create(user.id, row.department, row.specialization)
                            .await?;
                    }
                }

                RowOutcome::Updated
            }
            None => {
                let user = user_repo
                    .create(CreateUserParam {
                        password_hash: hash_password(&row.username, self.bcrypt_cost)?,
                        username: row.username,
                        role: Role::Mentor,
                        email: row.email,
                        name: row.name,
                    })
                    .await?;
                mentor_repo
                    .create(user.id, row.department, row.specialization)
                    .await?;

                RowOutcome::Created
            }
        };

        txn.commit().await?;

        Ok(outcome)
    }
}
