//! Bulk import summary types.

use crate::model::import::{ImportResultDto, ImportRowErrorDto};

/// What an individual import row did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Created,
    Updated,
}

/// Failure of a single row; the remaining rows are still processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based spreadsheet row, the header being row 1.
    pub row: usize,
    pub message: String,
}

/// Tally of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub total: usize,
    pub created: usize,
    pub updated: usize,
    pub errors: Vec<RowError>,
}

impl ImportSummary {
    /// Records the result of processing the row at `row`.
    pub fn record(&mut self, row: usize, result: Result<RowOutcome, String>) {
        self.total += 1;
        match result {
            Ok(RowOutcome::Created) => self.created += 1,
            Ok(RowOutcome::Updated) => self.updated += 1,
            Err(message) => self.errors.push(RowError { row, message }),
        }
    }

    pub fn failed(&self) -> usize {
        self.errors.len()
    }

    pub fn into_dto(self) -> ImportResultDto {
        ImportResultDto {
            failed: self.failed(),
            total: self.total,
            created: self.created,
            updated: self.updated,
            errors: self
                .errors
                .into_iter()
                .map(|e| ImportRowErrorDto {
                    row: e.row,
                    message: e.message,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallies_outcomes() {
        let mut summary = ImportSummary::default();
        summary.record(2, Ok(RowOutcome::Created));
        summary.record(3, Ok(RowOutcome::Updated));
        summary.record(4, Err("Missing USN".to_string()));

        let dto = summary.into_dto();
        assert_eq!(dto.total, 3);
        assert_eq!(dto.created, 1);
        assert_eq!(dto.updated, 1);
        assert_eq!(dto.failed, 1);
        assert_eq!(dto.errors[0].row, 4);
    }
}
