//! Mentee import: `usn`, `name`, `semester` required; `section`, `email` and `mentor`
//! (a mentor's username) optional.
//!
//! Existing USNs are updated in place. New USNs get a user whose username and initial
//! password are the USN. Rows without a mentor go to the least-loaded active mentor,
//! with loads carried from row to row once each row commits.

use sea_orm::{ConnectionTrait, TransactionTrait};

use super::{
    row_result,
    sheet::{Sheet, SheetRow},
    ImportService,
};
use crate::server::{
    data::{
        mentee::{MenteeRepository, NewMentee},
        mentor::MentorRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        import::{ImportSummary, RowOutcome},
        mentee::{normalize_usn, validate_semester},
        role::Role,
        user::CreateUserParam,
    },
    service::assignment::{LoadChange, MentorLoads},
    util::password::hash_password,
};

pub const MENTEE_COLUMNS: [&str; 3] = ["usn", "name", "semester"];

/// One validated mentee row.
struct MenteeRow {
    usn: String,
    name: String,
    semester: i32,
    section: Option<String>,
    email: Option<String>,
    mentor_username: Option<String>,
}

impl MenteeRow {
    fn parse(row: &SheetRow<'_>) -> Result<Self, AppError> {
        let semester = row.required("semester").map_err(AppError::BadRequest)?;
        let semester = semester
            .parse::<i32>()
            .map_err(|_| AppError::BadRequest(format!("Invalid semester '{}'", semester)))?;

        Ok(Self {
            usn: normalize_usn(row.required("usn").map_err(AppError::BadRequest)?),
            name: row.required("name").map_err(AppError::BadRequest)?.to_string(),
            semester: validate_semester(semester)?,
            section: row.get("section").map(str::to_string),
            email: row.get("email").map(str::to_string),
            mentor_username: row.get("mentor").map(str::to_string),
        })
    }
}

impl<'a> ImportService<'a> {
    /// Imports mentees from a parsed sheet.
    ///
    /// # Returns
    /// - `Ok(ImportSummary)` - Per-row outcome tally
    /// - `Err(AppError::ImportErr(MissingColumns))` - A required column is absent
    pub async fn import_mentees(&self, sheet: &Sheet) -> Result<ImportSummary, AppError> {
        sheet.require_columns(&MENTEE_COLUMNS)?;

        let mut loads = MentorLoads::load(self.db, None).await?;
        let mut summary = ImportSummary::default();

        for row in sheet.rows() {
            let result = match MenteeRow::parse(&row) {
                Ok(parsed) => {
                    self.import_mentee_row(parsed, &loads)
                        .await
                        .map(|(outcome, change)| {
                            if let Some(change) = change {
                                loads.apply(change);
                            }
                            outcome
                        })
                }
                Err(err) => Err(err),
            };
            summary.record(row.number, row_result(row.number, result));
        }

        tracing::info!(
            "Mentee import: {} rows, {} created, {} updated, {} failed",
            summary.total,
            summary.created,
            summary.updated,
            summary.failed()
        );

        Ok(summary)
    }

    /// Stores one row in its own transaction.
    ///
    /// The returned [`LoadChange`] is only applied by the caller after the commit, so a
    /// failed row never shifts the loads seen by later rows.
    async fn import_mentee_row(
        &self,
        row: MenteeRow,
        loads: &MentorLoads,
    ) -> Result<(RowOutcome, Option<LoadChange>), AppError> {
        let txn = self.db.begin().await?;

        let explicit_mentor = match &row.mentor_username {
            Some(username) => Some(find_active_mentor(&txn, username).await?),
            None => None,
        };

        let mentee_repo = MenteeRepository::new(&txn);
        let user_repo = UserRepository::new(&txn);

        let (outcome, change) = match mentee_repo.find_by_usn(&row.usn).await? {
            Some(existing) => {
                user_repo
                    .update_profile(existing.user_id, row.name, row.email)
                    .await?;
                mentee_repo
                    .update(existing.id, row.semester, row.section, existing.active)
                    .await?;

                let mentor_id = match explicit_mentor {
                    Some(mentor_id) => Some(mentor_id),
                    None if existing.mentor_id.is_none() && existing.active => loads.peek(),
                    None => existing.mentor_id,
                };
                // inactive mentees never count toward a load
                let change = match mentor_id {
                    Some(to) if existing.active && mentor_id != existing.mentor_id => {
                        Some(LoadChange {
                            from: existing.mentor_id,
                            to,
                        })
                    }
                    _ => None,
                };
                if mentor_id != existing.mentor_id {
                    mentee_repo.set_mentor(existing.id, mentor_id).await?;
                }

                (RowOutcome::Updated, change)
            }
            None => {
                if user_repo.find_by_username(&row.usn).await?.is_some() {
                    return Err(AppError::Conflict(format!(
                        "Username '{}' is already taken by another account",
                        row.usn
                    )));
                }

                let mentor_id = explicit_mentor.or_else(|| loads.peek());

                let user = user_repo
                    .create(CreateUserParam {
                        username: row.usn.clone(),
                        password_hash: hash_password(&row.usn, self.bcrypt_cost)?,
                        role: Role::Mentee,
                        email: row.email,
                        name: row.name,
                    })
                    .await?;
                mentee_repo
                    .create(NewMentee {
                        user_id: user.id,
                        usn: row.usn,
                        semester: row.semester,
                        section: row.section,
                        mentor_id,
                    })
                    .await?;

                let change = mentor_id.map(|to| LoadChange { from: None, to });
                (RowOutcome::Created, change)
            }
        };

        txn.commit().await?;

        Ok((outcome, change))
    }
}

/// Resolves a mentor username to an active mentor's ID.
async fn find_active_mentor<C: ConnectionTrait>(
    db: &C,
    username: &str,
) -> Result<i32, AppError> {
    let unknown = || AppError::BadRequest(format!("Unknown mentor '{}'", username));

    let user = UserRepository::new(db)
        .find_by_username(username)
        .await?
        .filter(|user| user.role == Role::Mentor.as_str())
        .ok_or_else(unknown)?;
    let mentor = MentorRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .ok_or_else(unknown)?;

    if !mentor.active {
        return Err(AppError::BadRequest(format!(
            "Mentor '{}' is inactive",
            username
        )));
    }

    Ok(mentor.id)
}
