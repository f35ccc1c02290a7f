//! The operation traits shared by every board command.
//!
//! A command is a struct whose fields are its parameters. `Operation` names
//! it (verb + noun) for logging; `Apply` computes the new column list from a
//! borrowed one without touching the input.

use crate::error::Result;
use crate::types::Column;
use serde::Serialize;

/// Metadata describing a board command
pub trait Operation {
    fn verb(&self) -> &'static str;
    fn noun(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Canonical op string, e.g. "add column"
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// A command that produces a new column list from the current one
pub trait Apply: Operation + Serialize {
    fn apply(&self, columns: &[Column]) -> Result<Vec<Column>>;
}

/// Apply `op`, treating any error as a no-op.
///
/// Returns an unchanged copy of `columns` when the command is rejected. Used by
/// the board-level entry points, where invalid input is silently ignored.
pub fn apply_or_keep<O: Apply>(op: &O, columns: &[Column]) -> Vec<Column> {
    match op.apply(columns) {
        Ok(next) => next,
        Err(error) => {
            tracing::debug!(op = %op.op_string(), %error, "operation ignored");
            columns.to_vec()
        }
    }
}

/// Implement [`Operation`] for a command struct.
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal) => {
        impl $crate::operation::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }
            fn noun(&self) -> &'static str {
                $noun
            }
            fn description(&self) -> &'static str {
                $desc
            }
        }
    };
}

pub(crate) use operation;
