//! Credit score snapshots
//!
//! A snapshot is the row the host persists each time a score is computed.
//! Snapshots are never edited: a changed score is recorded as a new snapshot
//! and history only grows.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::credit::policy::ScoringPolicy;
use crate::models::credit::{CreditScore, CreditScoreFactors, RiskCategory};
use crate::reference::ReferenceError;

#[derive(Debug, Error, PartialEq)]
pub enum CreditError {
    #[error("Snapshot for subject '{actual}' cannot be recorded in history of '{expected}'")]
    SubjectMismatch { expected: String, actual: String },

    #[error("Snapshot {0} already recorded")]
    DuplicateSnapshot(String),

    #[error("Policy fingerprint failed: {0}")]
    Fingerprint(#[from] ReferenceError),
}

/// Immutable record of one computed score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditScoreSnapshot {
    /// Unique snapshot identifier (UUID v4)
    id: String,
    subject_id: String,
    score: u16,
    category: RiskCategory,
    factors: CreditScoreFactors,
    policy_version: String,
    /// SHA-256 of the scoring policy in force
    policy_fingerprint: String,
}

impl CreditScore {
    /// Freeze this score into a snapshot row for `subject_id`
    pub fn snapshot(
        &self,
        subject_id: impl Into<String>,
        policy: &ScoringPolicy,
    ) -> Result<CreditScoreSnapshot, CreditError> {
        Ok(CreditScoreSnapshot {
            id: Uuid::new_v4().to_string(),
            subject_id: subject_id.into(),
            score: self.score(),
            category: self.category(),
            factors: *self.factors(),
            policy_version: policy.version.clone(),
            policy_fingerprint: policy.fingerprint()?,
        })
    }
}

impl CreditScoreSnapshot {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn score(&self) -> u16 {
        self.score
    }

    pub fn category(&self) -> RiskCategory {
        self.category
    }

    pub fn factors(&self) -> &CreditScoreFactors {
        &self.factors
    }

    pub fn policy_version(&self) -> &str {
        &self.policy_version
    }

    pub fn policy_fingerprint(&self) -> &str {
        &self.policy_fingerprint
    }
}

/// Append-only score history for one subject, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreHistory {
    subject_id: String,
    snapshots: Vec<CreditScoreSnapshot>,
}

impl ScoreHistory {
    pub fn new(subject_id: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            snapshots: Vec::new(),
        }
    }

    /// Append a snapshot
    ///
    /// # Errors
    /// `SubjectMismatch` if the snapshot belongs to another subject,
    /// `DuplicateSnapshot` if its id is already present.
    pub fn record(&mut self, snapshot: CreditScoreSnapshot) -> Result<(), CreditError> {
        if snapshot.subject_id != self.subject_id {
            return Err(CreditError::SubjectMismatch {
                expected: self.subject_id.clone(),
                actual: snapshot.subject_id,
            });
        }
        if self.snapshots.iter().any(|s| s.id == snapshot.id) {
            return Err(CreditError::DuplicateSnapshot(snapshot.id));
        }
        self.snapshots.push(snapshot);
        Ok(())
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn snapshots(&self) -> &[CreditScoreSnapshot] {
        &self.snapshots
    }

    pub fn latest(&self) -> Option<&CreditScoreSnapshot> {
        self.snapshots.last()
    }

    /// Score change between the two most recent snapshots
    pub fn delta(&self) -> Option<i32> {
        match self.snapshots.as_slice() {
            [.., previous, latest] => Some(latest.score as i32 - previous.score as i32),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
