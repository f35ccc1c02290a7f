//! Two-phase drag and drop.
//!
//! A drag is `SelectSource` (the card and the column it was picked up from)
//! followed by `Commit` (the column it was released over) or `Cancel`. The
//! controller is independent of any input device; a pointer handler, a
//! keyboard shortcut or a test all drive it the same way.

use crate::card::MoveCard;
use crate::operation::Apply;
use crate::types::{Card, CardId, Column, ColumnId};
use serde::{Deserialize, Serialize};

/// The card currently held by a drag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveDrag {
    pub card: CardId,
    pub source: ColumnId,
}

/// One step of the drag protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DragCommand {
    SelectSource { card: CardId, column: ColumnId },
    Commit { target: ColumnId },
    Cancel,
}

/// Tracks the active drag and applies drops to a column list
#[derive(Debug, Clone, Default)]
pub struct DragController {
    active: Option<ActiveDrag>,
}

impl DragController {
    /// Create a controller with no drag in progress
    pub fn new() -> Self {
        Self::default()
    }

    /// The card being dragged, for visual feedback
    pub fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    /// Whether a card is held
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Record `card` as picked up from `source`. Replaces any earlier drag.
    pub fn begin_drag(&mut self, card: &Card, source: impl Into<ColumnId>) {
        self.select_source(card.id.clone(), source);
    }

    /// Record the card by id as picked up from `source`
    pub fn select_source(&mut self, card: impl Into<CardId>, source: impl Into<ColumnId>) {
        let drag = ActiveDrag {
            card: card.into(),
            source: source.into(),
        };
        tracing::trace!(card = %drag.card, source = %drag.source, "drag started");
        self.active = Some(drag);
    }

    /// Abandon the drag without touching the board
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Release the active card over `target`.
    ///
    /// With no active drag the columns come back unchanged. Otherwise the card
    /// leaves its source column and is appended to `target`; the input is
    /// never mutated. The drag ends whatever the outcome. A target column that
    /// no longer exists, or a card that is no longer in its recorded source,
    /// leaves the board as it was.
    pub fn drop(&mut self, target: &ColumnId, columns: &[Column]) -> Vec<Column> {
        let Some(drag) = self.active.take() else {
            return columns.to_vec();
        };

        let mv = MoveCard::to_column(drag.card, target).from_column(drag.source);
        match mv.apply(columns) {
            Ok(next) => {
                tracing::debug!(card = %mv.id, to = %target, "card dropped");
                next
            }
            Err(error) => {
                tracing::debug!(card = %mv.id, to = %target, %error, "drop ignored");
                columns.to_vec()
            }
        }
    }

    /// Drive the controller with one protocol step.
    ///
    /// Only `Commit` changes the columns; the other steps return them unchanged.
    pub fn handle(&mut self, command: DragCommand, columns: &[Column]) -> Vec<Column> {
        match command {
            DragCommand::SelectSource { card, column } => {
                self.select_source(card, column);
                columns.to_vec()
            }
            DragCommand::Commit { target } => self.drop(&target, columns),
            DragCommand::Cancel => {
                self.cancel();
                columns.to_vec()
            }
        }
    }
}
