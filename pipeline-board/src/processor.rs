//! Applies operations and keeps an in-memory activity log.

use crate::config::ActivityConfig;
use crate::error::Result;
use crate::operation::Apply;
use crate::types::{card_count, Column, LogEntry};
use std::collections::VecDeque;
use std::time::Instant;

/// Applies board operations, recording each attempt as a [`LogEntry`].
///
/// Entries are kept newest first, up to `max_entries`; older ones are dropped.
/// Failed operations are logged with the error message and leave the columns
/// untouched.
#[derive(Debug)]
pub struct BoardOperationProcessor {
    actor: Option<String>,
    max_entries: usize,
    activity: VecDeque<LogEntry>,
}

impl Default for BoardOperationProcessor {
    fn default() -> Self {
        Self::with_retention(ActivityConfig::default().max_entries)
    }
}

impl BoardOperationProcessor {
    /// Create a processor with the default retention and no actor
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor that keeps at most `max_entries` log entries
    pub fn with_retention(max_entries: usize) -> Self {
        Self {
            actor: None,
            max_entries: max_entries.max(1),
            activity: VecDeque::new(),
        }
    }

    /// Attribute every logged operation to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self::new().actor_name(actor)
    }

    /// Set the actor on an existing processor
    pub fn actor_name(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// The actor recorded on new entries
    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    /// Activity log, newest first
    pub fn activity(&self) -> &VecDeque<LogEntry> {
        &self.activity
    }

    /// Drop every logged entry
    pub fn clear_activity(&mut self) {
        self.activity.clear();
    }

    /// Apply `op` to `columns` and log the outcome
    pub fn process<O: Apply>(&mut self, op: &O, columns: &[Column]) -> Result<Vec<Column>> {
        let start = Instant::now();
        let input = serde_json::to_value(op).unwrap_or_else(|error| {
            tracing::warn!(op = %op.op_string(), %error, "could not serialize operation input");
            serde_json::Value::Null
        });
        let result = op.apply(columns);
        let duration_ms = start.elapsed().as_millis() as u64;

        let entry = match &result {
            Ok(next) => {
                tracing::info!(op = %op.op_string(), "operation applied");
                LogEntry::new(
                    op.op_string(),
                    input,
                    serde_json::json!({
                        "columns": next.len(),
                        "cards": card_count(next),
                    }),
                    self.actor.clone(),
                    duration_ms,
                )
            }
            Err(error) => {
                tracing::warn!(op = %op.op_string(), %error, "operation rejected");
                LogEntry::failure(
                    op.op_string(),
                    input,
                    &error.to_string(),
                    self.actor.clone(),
                    duration_ms,
                )
            }
        };
        self.activity.push_front(entry);
        self.activity.truncate(self.max_entries);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{AddCard, MoveCard};
    use crate::column::AddColumn;
    use crate::types::Card;
    use crate::BoardError;

    #[test_log::test]
    fn test_process_logs_newest_first() {
        let mut processor = BoardOperationProcessor::with_actor("alice");

        let columns = processor
            .process(&AddColumn::new("Lead", "blue").with_id("lead"), &[])
            .unwrap();
        let columns = processor
            .process(&AddCard::new("lead", Card::new("Acme").with_id("c1")), &columns)
            .unwrap();
        assert_eq!(card_count(&columns), 1);

        let entries = processor.activity();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].op, "add card");
        assert_eq!(entries[1].op, "add column");
        assert_eq!(entries[0].actor.as_deref(), Some("alice"));
        assert_eq!(entries[0].output["cards"], 1);
        assert_eq!(entries[1].input["title"], "Lead");
    }

    #[test_log::test]
    fn test_process_logs_failures() {
        let mut processor = BoardOperationProcessor::new();
        let result = processor.process(&MoveCard::to_column("c1", "won"), &[]);

        assert!(matches!(result, Err(BoardError::ColumnNotFound { .. })));
        let entry = &processor.activity()[0];
        assert!(entry.is_failure());
        assert_eq!(entry.op, "move card");
        assert!(entry.actor.is_none());

        processor.clear_activity();
        assert!(processor.activity().is_empty());
    }

    #[test_log::test]
    fn test_activity_is_capped() {
        let mut processor = BoardOperationProcessor::with_retention(2).actor_name("bob");
        let mut columns = Vec::new();
        for id in ["a", "b", "c"] {
            columns = processor
                .process(&AddColumn::new(id, "blue").with_id(id), &columns)
                .unwrap();
        }

        assert_eq!(columns.len(), 3);
        let entries = processor.activity();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].input["title"], "c");
        assert_eq!(entries[1].input["title"], "b");
        assert_eq!(processor.actor(), Some("bob"));
    }
}
