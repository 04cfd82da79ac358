//! In-progress transactions and their steps.
//!
//! Status values are whatever the caller supplies. Nothing here enforces a
//! lifecycle, and step `order` values are neither required to be contiguous
//! nor unique. The helpers below only read.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// STATUS ENUMS
// =============================================================================

/// Overall status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Submitted, not yet picked up.
    #[default]
    Pending,
    /// Being worked on.
    Processing,
    /// Finished successfully.
    Completed,
    /// Turned down by the handling office.
    Rejected,
}

impl TransactionStatus {
    /// Serialized identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }

    /// Whether no further progress is expected.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!("Unknown transaction status: {s}")),
        }
    }
}

/// Status of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    /// The step the applicant is waiting on.
    Current,
    #[default]
    Pending,
}

impl StepStatus {
    /// Serialized identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Current => "current",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// One step of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: StepStatus,

    /// Display position, as supplied by the caller.
    pub order: u32,

    /// Where the step takes place.
    pub location: String,

    /// Free-text duration estimate (e.g. "2个工作日").
    pub estimated_time: String,

    #[serde(default)]
    pub required_documents: Vec<String>,
}

/// A government transaction the user has started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TransactionStatus,

    /// Transaction type label (e.g. "身份证").
    #[serde(rename = "type")]
    pub kind: String,

    /// Creation date as recorded by the handling office.
    pub created_at: String,
    pub updated_at: String,

    /// Office handling the transaction.
    pub location: String,
    pub estimated_time: String,

    #[serde(default)]
    pub required_documents: Vec<String>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Transaction {
    /// The first step marked `current`, if any.
    pub fn current_step(&self) -> Option<&Step> {
        self.steps.iter().find(|s| s.status == StepStatus::Current)
    }

    /// Number of completed steps.
    pub fn completed_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::Completed)
            .count()
    }

    /// Fraction of steps completed (0.0 when there are no steps).
    pub fn progress(&self) -> f32 {
        if self.steps.is_empty() {
            return 0.0;
        }
        self.completed_steps() as f32 / self.steps.len() as f32
    }

    /// Steps sorted by `order`. Ties keep their stored order.
    pub fn steps_in_order(&self) -> Vec<&Step> {
        let mut sorted: Vec<&Step> = self.steps.iter().collect();
        sorted.sort_by_key(|s| s.order);
        sorted
    }
}
