//! Log entry types for activity tracking

use super::ids::LogEntryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A log entry recording an applied board operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogEntryId,

    pub timestamp: DateTime<Utc>,

    /// Canonical op string (e.g., "move card")
    pub op: String,

    /// The operation's parameters
    pub input: Value,

    /// Summary of the result, or the error message
    pub output: Value,

    /// Who performed the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    pub duration_ms: u64,
}

impl LogEntry {
    /// Record a successful operation
    pub fn new(
        op: impl Into<String>,
        input: Value,
        output: Value,
        actor: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: LogEntryId::new(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor,
            duration_ms,
        }
    }

    /// Create a log entry for a failed operation
    pub fn failure(
        op: impl Into<String>,
        input: Value,
        error: &str,
        actor: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self::new(
            op,
            input,
            serde_json::json!({ "error": error }),
            actor,
            duration_ms,
        )
    }

    /// Whether the operation was rejected
    pub fn is_failure(&self) -> bool {
        self.output.get("error").is_some()
    }
}
