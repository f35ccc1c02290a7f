//! Card types: Card, Assignee, Priority, Completion, ChecklistItem

use super::ids::{AssigneeId, CardId, ChecklistItemId};
use crate::error::{BoardError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A card (lead or unit of work) on the pipeline board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Client (company or contact) the card is about
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Assignee>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completion: Completion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<ChecklistItem>,
}

impl Card {
    /// Create a new card with a fresh id and default metadata
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
            description: None,
            client: None,
            assigned_to: None,
            priority: Priority::default(),
            completion: Completion::default(),
            start_date: None,
            end_date: None,
            checklist: Vec::new(),
        }
    }

    /// Use a fixed id instead of a fresh ULID
    pub fn with_id(mut self, id: impl Into<CardId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the client
    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    /// Assign the card
    pub fn with_assignee(mut self, assignee: Assignee) -> Self {
        self.assigned_to = Some(assignee);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the completion percentage
    pub fn with_completion(mut self, completion: Completion) -> Self {
        self.completion = completion;
        self
    }

    /// Set the schedule dates
    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Append an unchecked checklist item
    pub fn with_checklist_item(mut self, text: impl Into<String>) -> Self {
        self.checklist.push(ChecklistItem::new(text));
        self
    }

    /// Name of the assignee, if any
    pub fn assignee_name(&self) -> Option<&str> {
        self.assigned_to.as_ref().map(|a| a.name.as_str())
    }

    /// Fraction of completed checklist items, 0.0 when the checklist is empty.
    pub fn checklist_progress(&self) -> f64 {
        if self.checklist.is_empty() {
            return 0.0;
        }
        let done = self.checklist.iter().filter(|i| i.completed).count();
        done as f64 / self.checklist.len() as f64
    }

    /// Inclusive number of days between start and end, when both are set.
    pub fn duration_days(&self) -> Option<i64> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((end - start).num_days() + 1),
            _ => None,
        }
    }

    /// Reject cards whose metadata breaks the model's invariants
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(BoardError::missing_field("title"));
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(BoardError::invalid_value(
                    "endDate",
                    format!("{end} is before start date {start}"),
                ));
            }
        }
        Ok(())
    }
}

/// The person a card is assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: AssigneeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Assignee {
    /// Create a new Assignee
    pub fn new(id: impl Into<AssigneeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: None,
        }
    }

    /// Set the avatar URL
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Card priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        f.write_str(s)
    }
}

/// Completion percentage, always within 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Completion(u8);

impl Completion {
    pub const MAX: u8 = 100;

    /// Create a completion, rejecting values above 100
    pub fn new(percent: u8) -> Result<Self> {
        if percent > Self::MAX {
            return Err(BoardError::invalid_value(
                "completion",
                format!("{percent} is above {}", Self::MAX),
            ));
        }
        Ok(Self(percent))
    }

    /// The completion in whole percent
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Whether the work is at 100%
    pub fn is_complete(self) -> bool {
        self.0 == Self::MAX
    }
}

impl TryFrom<u8> for Completion {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Completion> for u8 {
    fn from(value: Completion) -> Self {
        value.0
    }
}

/// A checklist entry on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: ChecklistItemId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl ChecklistItem {
    /// Create an unchecked item
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ChecklistItemId::new(),
            text: text.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_completion_bounds() {
        assert_eq!(Completion::new(100).unwrap().percent(), 100);
        assert!(Completion::new(101).is_err());
        assert!(Completion::new(100).unwrap().is_complete());
    }

    #[test]
    fn test_completion_rejected_on_deserialize() {
        let json = r#"{"id":"c1","title":"Deal","completion":150}"#;
        assert!(serde_json::from_str::<Card>(json).is_err());
    }

    #[test]
    fn test_card_json_shape() {
        let card = Card::new("Renewal")
            .with_id("c1")
            .with_assignee(Assignee::new("u1", "Bob"))
            .with_priority(Priority::High);
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["assignedTo"]["name"], "Bob");
        assert_eq!(value["priority"], "high");
        assert_eq!(value["completion"], 0);
        assert!(value.get("checklist").is_none());
    }

    #[test]
    fn test_minimal_card_deserializes_with_defaults() {
        let card: Card = serde_json::from_str(r#"{"id":"c1","title":"Deal"}"#).unwrap();
        assert_eq!(card.priority, Priority::Medium);
        assert_eq!(card.completion.percent(), 0);
        assert!(card.assigned_to.is_none());
    }

    #[test]
    fn test_checklist_progress() {
        let mut card = Card::new("Onboarding")
            .with_checklist_item("Send contract")
            .with_checklist_item("Kickoff call");
        assert_eq!(card.checklist_progress(), 0.0);
        card.checklist[0].completed = true;
        assert_eq!(card.checklist_progress(), 0.5);
    }

    #[test]
    fn test_duration_days() {
        let card = Card::new("Pilot").with_dates(Some(date(2024, 3, 1)), Some(date(2024, 3, 10)));
        assert_eq!(card.duration_days(), Some(10));
        assert_eq!(Card::new("Open").duration_days(), None);
    }

    #[test]
    fn test_validate_rejects_inverted_dates() {
        let card = Card::new("Pilot").with_dates(Some(date(2024, 3, 10)), Some(date(2024, 3, 1)));
        assert!(matches!(
            card.validate(),
            Err(BoardError::InvalidValue { ref field, .. }) if field == "endDate"
        ));
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        assert!(matches!(
            Card::new("   ").validate(),
            Err(BoardError::MissingField { .. })
        ));
    }
}
