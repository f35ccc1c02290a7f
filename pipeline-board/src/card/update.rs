//! UpdateCard command

use crate::error::{BoardError, Result};
use crate::operation::{operation, Apply};
use crate::types::{Assignee, CardId, Column, Completion, Priority};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Edit a card in place. The card keeps its column and position.
///
/// Optional fields that are themselves optional on the card use a nested
/// `Option`: `Some(None)` clears the value, `None` leaves it alone. In JSON an
/// explicit `null` clears and a missing key leaves the value alone.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCard {
    pub id: CardId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub client: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub assigned_to: Option<Option<Assignee>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion: Option<Completion>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub end_date: Option<Option<NaiveDate>>,
}

/// A key that is present (even as `null`) becomes `Some(..)`; absent keys
/// fall back to `default`, i.e. `None`.
fn present<'de, T, D>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

operation!(
    UpdateCard,
    verb = "update",
    noun = "card",
    description = "Edit a card's metadata"
);

impl UpdateCard {
    /// Create a new UpdateCard command that changes nothing yet
    pub fn new(id: impl Into<CardId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the new title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set or clear the description
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Set or clear the client
    pub fn with_client(mut self, client: Option<String>) -> Self {
        self.client = Some(client);
        self
    }

    /// Assign the card, or unassign it with `None`
    pub fn with_assignee(mut self, assignee: Option<Assignee>) -> Self {
        self.assigned_to = Some(assignee);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the completion percentage
    pub fn with_completion(mut self, completion: Completion) -> Self {
        self.completion = Some(completion);
        self
    }

    /// Set or clear both schedule dates
    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }
}

impl Apply for UpdateCard {
    fn apply(&self, columns: &[Column]) -> Result<Vec<Column>> {
        let mut next = columns.to_vec();
        let card = next
            .iter_mut()
            .flat_map(|c| c.cards.iter_mut())
            .find(|c| c.id == self.id)
            .ok_or_else(|| BoardError::CardNotFound {
                id: self.id.to_string(),
            })?;

        if let Some(title) = &self.title {
            card.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            card.description = description.clone();
        }
        if let Some(client) = &self.client {
            card.client = client.clone();
        }
        if let Some(assignee) = &self.assigned_to {
            card.assigned_to = assignee.clone();
        }
        if let Some(priority) = self.priority {
            card.priority = priority;
        }
        if let Some(completion) = self.completion {
            card.completion = completion;
        }
        if let Some(start) = self.start_date {
            card.start_date = start;
        }
        if let Some(end) = self.end_date {
            card.end_date = end;
        }

        card.validate()?;
        Ok(next)
    }
}
