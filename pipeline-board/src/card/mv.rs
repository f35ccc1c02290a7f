//! MoveCard command

use crate::error::{BoardError, Result};
use crate::operation::{operation, Apply};
use crate::types::{find_column, CardId, Column, ColumnId};
use serde::{Deserialize, Serialize};

/// Move a card to the end of a column.
///
/// The card is removed from its current column and appended to the target.
/// Moving within the same column sends the card to the end.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCard {
    pub id: CardId,
    /// Column the card is expected in; when set and wrong, the move is rejected
    #[serde(default)]
    pub from: Option<ColumnId>,
    pub to: ColumnId,
}

operation!(
    MoveCard,
    verb = "move",
    noun = "card",
    description = "Move a card to the end of a column"
);

impl MoveCard {
    /// Move card `id` into `to`, wherever it currently is
    pub fn to_column(id: impl Into<CardId>, to: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            from: None,
            to: to.into(),
        }
    }

    /// Require the card to currently sit in `from`
    pub fn from_column(mut self, from: impl Into<ColumnId>) -> Self {
        self.from = Some(from.into());
        self
    }
}

impl Apply for MoveCard {
    fn apply(&self, columns: &[Column]) -> Result<Vec<Column>> {
        // Validate the target first so a bad drop never orphans the card.
        if find_column(columns, &self.to).is_none() {
            return Err(BoardError::ColumnNotFound {
                id: self.to.to_string(),
            });
        }

        let source = columns
            .iter()
            .position(|c| c.contains_card(&self.id))
            .ok_or_else(|| BoardError::CardNotFound {
                id: self.id.to_string(),
            })?;

        if let Some(from) = &self.from {
            if &columns[source].id != from {
                return Err(BoardError::CardNotFound {
                    id: self.id.to_string(),
                });
            }
        }

        let mut next = columns.to_vec();
        let index = next[source]
            .cards
            .iter()
            .position(|c| c.id == self.id)
            .ok_or_else(|| BoardError::CardNotFound {
                id: self.id.to_string(),
            })?;
        let card = next[source].cards.remove(index);

        let target = next
            .iter_mut()
            .find(|c| c.id == self.to)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: self.to.to_string(),
            })?;
        target.cards.push(card);

        Ok(next)
    }
}
