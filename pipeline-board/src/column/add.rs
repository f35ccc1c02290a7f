//! AddColumn command

use crate::auto_color::resolve_color;
use crate::error::{BoardError, Result};
use crate::operation::{operation, Apply};
use crate::types::{find_column, Column, ColumnId};
use serde::{Deserialize, Serialize};

/// Append a new, empty column to the board
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddColumn {
    /// The column display title
    pub title: String,
    /// Display color; blank picks one from the title
    #[serde(default)]
    pub color: String,
    /// Explicit id; a fresh ULID is generated when absent
    #[serde(default)]
    pub id: Option<ColumnId>,
}

operation!(
    AddColumn,
    verb = "add",
    noun = "column",
    description = "Append a new column to the board"
);

impl AddColumn {
    /// Create a new AddColumn command
    pub fn new(title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: color.into(),
            id: None,
        }
    }

    /// Use a fixed id instead of a fresh ULID
    pub fn with_id(mut self, id: impl Into<ColumnId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Apply for AddColumn {
    fn apply(&self, columns: &[Column]) -> Result<Vec<Column>> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(BoardError::missing_field("title"));
        }

        let id = self.id.clone().unwrap_or_default();
        if find_column(columns, &id).is_some() {
            return Err(BoardError::duplicate_id("column", id.to_string()));
        }

        let column = Column::new(title, resolve_color(&self.color, title)).with_id(id);

        let mut next = columns.to_vec();
        next.push(column);
        Ok(next)
    }
}
