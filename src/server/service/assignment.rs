//! Greedy least-loaded mentor assignment.
//!
//! `MentorLoads` holds an in-memory snapshot of active-mentee counts for active mentors.
//! Each pick takes the mentor with the fewest mentees, lowest ID on ties, and bumps the
//! local count so consecutive picks within one operation spread evenly. Only active
//! mentees count; inactive ones are placed with [`MentorLoads::peek`].

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::data::mentor::MentorRepository;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MentorLoads {
    loads: Vec<(i32, u64)>,
}

impl MentorLoads {
    pub fn new(loads: Vec<(i32, u64)>) -> Self {
        Self { loads }
    }

    /// Loads the current counts of every active mentor.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to read from
    /// - `exclude` - Mentor to leave out, e.g. one about to be deleted
    pub async fn load<C: ConnectionTrait>(db: &C, exclude: Option<i32>) -> Result<Self, DbErr> {
        let loads = MentorRepository::new(db).active_loads(exclude).await?;

        Ok(Self::new(loads))
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Least-loaded mentor without counting anything against it.
    pub fn peek(&self) -> Option<i32> {
        self.loads
            .iter()
            .min_by_key(|(id, count)| (*count, *id))
            .map(|(id, _)| *id)
    }

    /// Picks the least-loaded mentor and counts the new mentee against it.
    ///
    /// # Returns
    /// - `Some(mentor_id)` - Chosen mentor
    /// - `None` - No active mentors
    pub fn pick(&mut self) -> Option<i32> {
        let (mentor_id, count) = self
            .loads
            .iter_mut()
            .min_by_key(|(id, count)| (*count, *id))?;
        *count += 1;

        Some(*mentor_id)
    }

    /// Counts a mentee explicitly assigned to `mentor_id` so later picks see it.
    pub fn record(&mut self, mentor_id: i32) {
        if let Some((_, count)) = self.loads.iter_mut().find(|(id, _)| *id == mentor_id) {
            *count += 1;
        }
    }

    /// Takes back a mentee that moved off `mentor_id`.
    pub fn release(&mut self, mentor_id: i32) {
        if let Some((_, count)) = self.loads.iter_mut().find(|(id, _)| *id == mentor_id) {
            *count = count.saturating_sub(1);
        }
    }

    /// Applies a stored move.
    pub fn apply(&mut self, change: LoadChange) {
        if let Some(from) = change.from {
            self.release(from);
        }
        self.record(change.to);
    }
}

/// An active mentee moving onto `to`, counted once the move is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadChange {
    pub from: Option<i32>,
    pub to: i32,
}
