//! DeleteColumn command

use crate::error::{BoardError, Result};
use crate::operation::{operation, Apply};
use crate::types::{find_column, Column, ColumnId};
use serde::{Deserialize, Serialize};

/// Delete a column together with every card it holds
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteColumn {
    pub id: ColumnId,
}

operation!(
    DeleteColumn,
    verb = "delete",
    noun = "column",
    description = "Delete a column and all of its cards"
);

impl DeleteColumn {
    /// Create a new DeleteColumn command
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Apply for DeleteColumn {
    fn apply(&self, columns: &[Column]) -> Result<Vec<Column>> {
        let column = find_column(columns, &self.id).ok_or_else(|| BoardError::ColumnNotFound {
            id: self.id.to_string(),
        })?;

        if !column.cards.is_empty() {
            tracing::debug!(
                column = %self.id,
                cards = column.cards.len(),
                "deleting column with cards"
            );
        }

        Ok(columns
            .iter()
            .filter(|c| c.id != self.id)
            .cloned()
            .collect())
    }
}
