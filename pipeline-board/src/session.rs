//! A board together with its transient UI state.

use crate::config::BoardConfig;
use crate::drag::{DragCommand, DragController};
use crate::error::{BoardError, Result};
use crate::operation::Apply;
use crate::processor::BoardOperationProcessor;
use crate::types::{Board, CardId, Column, ColumnId, LogEntry};
use crate::view::{unique_assignees, ViewState};
use std::collections::VecDeque;

/// Owns one board plus the drag, view and activity state around it.
///
/// The columns are replaced wholesale after every change; callers that need
/// the previous snapshot keep their own clone.
#[derive(Debug)]
pub struct BoardSession {
    board: Board,
    config: BoardConfig,
    drag: DragController,
    view: ViewState,
    processor: BoardOperationProcessor,
}

impl BoardSession {
    /// Open a session over `board` with no drag in progress
    pub fn new(board: Board, config: BoardConfig) -> Self {
        let view = ViewState::new(&config);
        let processor = BoardOperationProcessor::with_retention(config.activity.max_entries);
        Self {
            board,
            config,
            drag: DragController::new(),
            view,
            processor,
        }
    }

    /// Attribute logged operations to `actor`
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.processor = self.processor.actor_name(actor);
        self
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current columns, unfiltered
    pub fn columns(&self) -> &[Column] {
        &self.board.columns
    }

    /// Configuration the session was opened with
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Current view state
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Mutable view state, for filter and expand toggles
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// The drag controller
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Activity log, newest first
    pub fn activity(&self) -> &VecDeque<LogEntry> {
        self.processor.activity()
    }

    /// Replace the columns with ones supplied from upstream
    pub fn replace_columns(&mut self, columns: Vec<Column>) {
        self.board.columns = columns;
    }

    /// Apply a command, keeping the board unchanged when it is rejected
    pub fn apply<O: Apply>(&mut self, op: &O) -> Result<()> {
        let next = self.processor.process(op, &self.board.columns)?;
        self.board.columns = next;
        Ok(())
    }

    /// Pick up a card. The source column is looked up on the board.
    pub fn begin_drag(&mut self, card: &CardId) -> Result<()> {
        let (column, _) = self
            .board
            .find_card(card)
            .ok_or_else(|| BoardError::CardNotFound {
                id: card.to_string(),
            })?;
        let source = column.id.clone();
        self.drag.select_source(card, source);
        Ok(())
    }

    /// Release the active card over `target`
    pub fn drop_on(&mut self, target: &ColumnId) {
        self.board.columns = self.drag.drop(target, &self.board.columns);
    }

    /// Feed one drag protocol step
    pub fn handle_drag(&mut self, command: DragCommand) {
        self.board.columns = self.drag.handle(command, &self.board.columns);
    }

    /// Columns after the view's assignee filter
    pub fn visible_columns(&self) -> Vec<Column> {
        self.view.visible_columns(&self.board.columns)
    }

    /// Distinct assignee names on the board, sorted
    pub fn assignees(&self) -> Vec<String> {
        unique_assignees(&self.board.columns)
    }

    /// Column width for the current view
    pub fn column_width(&self) -> u32 {
        self.view.column_width(&self.board.columns, &self.config)
    }

    /// Step the view zoom up
    pub fn zoom_in(&mut self) {
        self.view.zoom_in(&self.config);
    }

    /// Step the view zoom down
    pub fn zoom_out(&mut self) {
        self.view.zoom_out(&self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::AddCard;
    use crate::column::DeleteColumn;
    use crate::defaults::default_pipeline;
    use crate::types::{Assignee, Card};

    fn session() -> BoardSession {
        let mut session =
            BoardSession::new(default_pipeline().unwrap(), BoardConfig::default()).with_actor("bob");
        session
            .apply(&AddCard::new(
                "lead",
                Card::new("Acme").with_id("c1").with_assignee(Assignee::new("u1", "Bob")),
            ))
            .unwrap();
        session
            .apply(&AddCard::new(
                "proposal",
                Card::new("Globex")
                    .with_id("c2")
                    .with_assignee(Assignee::new("u2", "Alice")),
            ))
            .unwrap();
        session
    }

    #[test]
    fn test_drag_through_session() {
        let mut session = session();
        session.begin_drag(&CardId::from("c1")).unwrap();
        assert_eq!(session.drag().active().unwrap().source.as_str(), "lead");

        session.drop_on(&ColumnId::from("won"));
        let (column, _) = session.board().find_card(&CardId::from("c1")).unwrap();
        assert_eq!(column.id.as_str(), "won");
        assert!(!session.drag().is_dragging());
    }

    #[test]
    fn test_begin_drag_unknown_card() {
        let mut session = session();
        assert!(session.begin_drag(&CardId::from("nope")).is_err());
    }

    #[test]
    fn test_rejected_op_keeps_board() {
        let mut session = session();
        let before = session.board().clone();
        assert!(session.apply(&DeleteColumn::new("missing")).is_err());
        assert_eq!(session.board(), &before);
        assert!(session.activity()[0].is_failure());
        assert_eq!(session.activity().len(), 3);
    }

    #[test]
    fn test_visible_columns_follow_filter() {
        let mut session = session();
        assert_eq!(session.assignees(), vec!["Alice", "Bob"]);

        session.view_mut().set_assignee_filter(Some("Alice"));
        let visible = session.visible_columns();
        assert_eq!(visible.len(), 5);
        assert_eq!(visible.iter().map(|c| c.cards.len()).sum::<usize>(), 1);
        assert_eq!(session.board().card_count(), 2);
    }

    #[test]
    fn test_zoom_changes_width() {
        let mut session = session();
        let before = session.column_width();
        session.zoom_out();
        assert!(session.column_width() < before);
        session.zoom_in();
        assert_eq!(session.column_width(), before);
    }

    #[test]
    fn test_session_uses_configured_retention() {
        let mut config = BoardConfig::default();
        config.activity.max_entries = 1;
        let mut session = BoardSession::new(default_pipeline().unwrap(), config).with_actor("ann");

        session
            .apply(&AddCard::new("lead", Card::new("Acme").with_id("c1")))
            .unwrap();
        session
            .apply(&AddCard::new("lead", Card::new("Globex").with_id("c2")))
            .unwrap();

        assert_eq!(session.activity().len(), 1);
        assert_eq!(session.activity()[0].actor.as_deref(), Some("ann"));
        assert_eq!(session.activity()[0].input["card"]["title"], "Globex");
    }
}
