//! Core types for the pipeline board

mod board;
mod card;
mod ids;
mod log;

pub use board::{Board, Column};
pub(crate) use board::{card_count, find_card, find_column};
pub use card::{Assignee, Card, ChecklistItem, Completion, Priority};
pub use ids::{AssigneeId, CardId, ChecklistItemId, ColumnId, LogEntryId};
pub use log::LogEntry;
