//! Board-level types: Board, Column

use super::card::Card;
use super::ids::{CardId, ColumnId};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The pipeline board: an ordered list of columns.
///
/// The board is a plain owned value. Operations borrow its columns and hand
/// back a new list; nothing here mutates shared state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// Create a board from ordered columns
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Parse a board snapshot from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Render the board snapshot as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Parse a board snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the board snapshot as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a column by id
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        find_column(&self.columns, id)
    }

    /// Look up a card together with the column holding it
    pub fn find_card(&self, id: &CardId) -> Option<(&Column, &Card)> {
        find_card(&self.columns, id)
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        card_count(&self.columns)
    }
}

/// A column is a pipeline stage holding cards in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub color: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    /// Create an empty column with a fresh id
    pub fn new(title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
            color: color.into(),
            cards: Vec::new(),
        }
    }

    /// Use a fixed id instead of a fresh ULID
    pub fn with_id(mut self, id: impl Into<ColumnId>) -> Self {
        self.id = id.into();
        self
    }

    /// Replace the column's cards
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    /// Look up a card in this column
    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Whether the card sits in this column
    pub fn contains_card(&self, id: &CardId) -> bool {
        self.find_card(id).is_some()
    }
}

pub(crate) fn find_column<'a>(columns: &'a [Column], id: &ColumnId) -> Option<&'a Column> {
    columns.iter().find(|c| &c.id == id)
}

pub(crate) fn find_card<'a>(columns: &'a [Column], id: &CardId) -> Option<(&'a Column, &'a Card)> {
    columns
        .iter()
        .find_map(|col| col.find_card(id).map(|card| (col, card)))
}

pub(crate) fn card_count(columns: &[Column]) -> usize {
    columns.iter().map(|c| c.cards.len()).sum()
}
