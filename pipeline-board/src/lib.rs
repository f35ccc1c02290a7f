//! Sales pipeline kanban board state
//!
//! This crate holds the state behind a CRM pipeline board: an ordered list of
//! columns (pipeline stages), each with an ordered list of cards (leads).
//! Every change is a pure function from the current columns to a new list;
//! nothing is mutated in place and nothing is persisted here. Whoever owns the
//! board supplies the columns and stores the result.
//!
//! ## Overview
//!
//! - **Commands** - `column::*` and `card::*` structs implement [`Apply`] and
//!   report why a change was rejected
//! - **Entry points** - [`add_column`], [`delete_column`], [`edit_column`]
//!   ignore invalid input and hand back the columns unchanged
//! - **Drag and drop** - [`DragController`] runs a two-phase select/commit
//!   protocol; every card stays in exactly one column
//! - **Views** - [`filter_columns_by_assignee`], [`unique_assignees`],
//!   [`ZoomLevel`] and [`responsive_column_width`] derive display data
//!
//! ## Basic Usage
//!
//! ```rust
//! use pipeline_board::{default_pipeline, Card, ColumnId, DragController};
//! use pipeline_board::card::AddCard;
//! use pipeline_board::Apply;
//!
//! # fn main() -> pipeline_board::Result<()> {
//! let board = default_pipeline()?;
//! let columns = AddCard::new("lead", Card::new("Acme renewal").with_id("acme"))
//!     .apply(&board.columns)?;
//!
//! let mut drag = DragController::new();
//! drag.begin_drag(&columns[0].cards[0], "lead");
//! let columns = drag.drop(&ColumnId::from("won"), &columns);
//!
//! assert!(columns[0].cards.is_empty());
//! assert_eq!(columns[4].cards[0].id.as_str(), "acme");
//! # Ok(())
//! # }
//! ```

pub mod auto_color;
pub mod config;
pub mod defaults;
mod error;
mod operation;
mod processor;
mod session;
pub mod types;

// Command modules
pub mod card;
pub mod column;
pub mod drag;
pub mod view;

pub use column::{add_column, delete_column, edit_column};
pub use config::BoardConfig;
pub use defaults::default_pipeline;
pub use drag::{ActiveDrag, DragCommand, DragController};
pub use error::{BoardError, Result};
pub use operation::{apply_or_keep, Apply, Operation};
pub use processor::BoardOperationProcessor;
pub use session::BoardSession;
pub use view::{
    filter_columns_by_assignee, responsive_column_width, unique_assignees, ViewState, ZoomLevel,
};

pub use types::{
    Assignee, AssigneeId, Board, Card, CardId, ChecklistItem, ChecklistItemId, Column, ColumnId,
    Completion, LogEntry, LogEntryId, Priority,
};
