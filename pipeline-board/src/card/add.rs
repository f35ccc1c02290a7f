//! AddCard command

use crate::error::{BoardError, Result};
use crate::operation::{operation, Apply};
use crate::types::{find_card, Card, Column, ColumnId};
use serde::{Deserialize, Serialize};

/// Append a card to the end of a column
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCard {
    /// Column that receives the card
    pub column: ColumnId,
    pub card: Card,
}

operation!(
    AddCard,
    verb = "add",
    noun = "card",
    description = "Append a card to a column"
);

impl AddCard {
    /// Create a new AddCard command
    pub fn new(column: impl Into<ColumnId>, card: Card) -> Self {
        Self {
            column: column.into(),
            card,
        }
    }
}

impl Apply for AddCard {
    fn apply(&self, columns: &[Column]) -> Result<Vec<Column>> {
        self.card.validate()?;

        if find_card(columns, &self.card.id).is_some() {
            return Err(BoardError::duplicate_id("card", self.card.id.to_string()));
        }

        let mut next = columns.to_vec();
        let column = next
            .iter_mut()
            .find(|c| c.id == self.column)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: self.column.to_string(),
            })?;

        column.cards.push(self.card.clone());
        Ok(next)
    }
}
