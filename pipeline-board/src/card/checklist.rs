//! ToggleChecklistItem command

use crate::error::{BoardError, Result};
use crate::operation::{operation, Apply};
use crate::types::{CardId, ChecklistItemId, Column};
use serde::{Deserialize, Serialize};

/// Flip the completed flag of one checklist item
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleChecklistItem {
    pub card: CardId,
    pub item: ChecklistItemId,
}

operation!(
    ToggleChecklistItem,
    verb = "toggle",
    noun = "checklist item",
    description = "Mark a checklist item done or not done"
);

impl ToggleChecklistItem {
    /// Create a new ToggleChecklistItem command
    pub fn new(card: impl Into<CardId>, item: impl Into<ChecklistItemId>) -> Self {
        Self {
            card: card.into(),
            item: item.into(),
        }
    }
}

impl Apply for ToggleChecklistItem {
    fn apply(&self, columns: &[Column]) -> Result<Vec<Column>> {
        let mut next = columns.to_vec();
        let card = next
            .iter_mut()
            .flat_map(|c| c.cards.iter_mut())
            .find(|c| c.id == self.card)
            .ok_or_else(|| BoardError::CardNotFound {
                id: self.card.to_string(),
            })?;

        let item = card
            .checklist
            .iter_mut()
            .find(|i| i.id == self.item)
            .ok_or_else(|| BoardError::not_found("checklist item", self.item.to_string()))?;
        item.completed = !item.completed;

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Card;

    #[test]
    fn test_toggle_checklist_item() {
        let card = Card::new("Onboarding")
            .with_id("c1")
            .with_checklist_item("Send contract");
        let item = card.checklist[0].id.clone();
        let before = vec![Column::new("Won", "green").with_cards(vec![card])];

        let once = ToggleChecklistItem::new("c1", item.clone())
            .apply(&before)
            .unwrap();
        assert!(once[0].cards[0].checklist[0].completed);

        let twice = ToggleChecklistItem::new("c1", item).apply(&once).unwrap();
        assert!(!twice[0].cards[0].checklist[0].completed);
    }

    #[test]
    fn test_toggle_unknown_item() {
        let before = vec![Column::new("Won", "green").with_cards(vec![Card::new("x").with_id("c1")])];
        let result = ToggleChecklistItem::new("c1", "nope").apply(&before);
        assert!(matches!(result, Err(BoardError::NotFound { .. })));
    }
}
