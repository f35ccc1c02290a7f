//! DeleteCard command

use crate::error::{BoardError, Result};
use crate::operation::{operation, Apply};
use crate::types::{find_card, CardId, Column};
use serde::{Deserialize, Serialize};

/// Remove a card from whichever column holds it
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCard {
    pub id: CardId,
}

operation!(
    DeleteCard,
    verb = "delete",
    noun = "card",
    description = "Remove a card from the board"
);

impl DeleteCard {
    /// Create a new DeleteCard command
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Apply for DeleteCard {
    fn apply(&self, columns: &[Column]) -> Result<Vec<Column>> {
        if find_card(columns, &self.id).is_none() {
            return Err(BoardError::CardNotFound {
                id: self.id.to_string(),
            });
        }

        let mut next = columns.to_vec();
        for column in &mut next {
            column.cards.retain(|c| c.id != self.id);
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Card;

    #[test]
    fn test_delete_card() {
        let before = vec![Column::new("Lead", "blue").with_id("lead").with_cards(vec![
            Card::new("Acme").with_id("c1"),
            Card::new("Globex").with_id("c2"),
        ])];
        let after = DeleteCard::new("c1").apply(&before).unwrap();
        assert_eq!(after[0].cards.len(), 1);
        assert_eq!(after[0].cards[0].id.as_str(), "c2");
        assert_eq!(before[0].cards.len(), 2);
    }

    #[test]
    fn test_delete_card_not_found() {
        let result = DeleteCard::new("c9").apply(&[Column::new("Lead", "blue")]);
        assert!(matches!(result, Err(BoardError::CardNotFound { .. })));
    }
}
