use serde::Serialize;
use std::fmt;

/// Why a single user could not be migrated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFailure {
    /// Reading from the source token store failed
    BackendRead { operation: &'static str, error: String },
    /// Writing to the destination token store failed
    BackendWrite { operation: &'static str, error: String },
    /// Updating the user document after the transfer failed
    Persist { error: String },
}

impl fmt::Display for RecordFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordFailure::BackendRead { operation, error } => write!(f, "got error on {}: {}", operation, error),
            RecordFailure::BackendWrite { operation, error } => write!(f, "got error on {}: {}", operation, error),
            RecordFailure::Persist { error } => write!(f, "got error: {}", error),
        }
    }
}

/// Result of migrating one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Migrated,
    /// Access token expired and no refresh token to renew it; left in place
    Expired,
    Failed(RecordFailure),
}

/// Aggregate counts of one migration run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MigrationResult {
    pub total: usize,
    pub migrated: usize,
    pub expired: usize,
}

impl MigrationResult {
    /// Candidates that were neither migrated nor classified as expired.
    /// Zero for hand-built results whose counts exceed `total`.
    pub fn failed(&self) -> usize {
        self.total.saturating_sub(self.migrated.saturating_add(self.expired))
    }

    fn record(mut self, outcome: &RecordOutcome) -> Self {
        match outcome {
            RecordOutcome::Migrated => self.migrated += 1,
            RecordOutcome::Expired => self.expired += 1,
            RecordOutcome::Failed(_) => {}
        }
        self
    }
}

impl<'a> FromIterator<&'a RecordOutcome> for MigrationResult {
    fn from_iter<I: IntoIterator<Item = &'a RecordOutcome>>(outcomes: I) -> Self {
        outcomes.into_iter().fold(MigrationResult::default(), |acc, outcome| {
            MigrationResult {
                total: acc.total + 1,
                ..acc.record(outcome)
            }
        })
    }
}
