//! UpdateColumn command

use crate::error::{BoardError, Result};
use crate::operation::{operation, Apply};
use crate::types::{Column, ColumnId};
use serde::{Deserialize, Serialize};

/// Update a column's title or color. Cards are left alone.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColumn {
    pub id: ColumnId,
    pub title: Option<String>,
    pub color: Option<String>,
}

operation!(
    UpdateColumn,
    verb = "update",
    noun = "column",
    description = "Update a column's title or color"
);

impl UpdateColumn {
    /// Create a new UpdateColumn command that changes nothing yet
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            color: None,
        }
    }

    /// Set the new title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the new color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Apply for UpdateColumn {
    fn apply(&self, columns: &[Column]) -> Result<Vec<Column>> {
        let title = match &self.title {
            Some(t) if t.trim().is_empty() => return Err(BoardError::missing_field("title")),
            Some(t) => Some(t.trim()),
            None => None,
        };

        let mut next = columns.to_vec();
        let column = next
            .iter_mut()
            .find(|c| c.id == self.id)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: self.id.to_string(),
            })?;

        if let Some(title) = title {
            column.title = title.to_string();
        }
        if let Some(color) = &self.color {
            column.color = color.clone();
        }

        Ok(next)
    }
}
