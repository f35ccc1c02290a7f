//! Assignee filtering

use crate::types::Column;
use std::collections::BTreeSet;

/// Distinct assignee names across all cards, sorted.
///
/// Cards without an assignee contribute nothing.
pub fn unique_assignees(columns: &[Column]) -> Vec<String> {
    columns
        .iter()
        .flat_map(|c| c.cards.iter())
        .filter_map(|card| card.assignee_name())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Restrict every column to the cards assigned to `name`.
///
/// `None` returns the columns as they are. Columns are kept even when none of
/// their cards match.
pub fn filter_columns_by_assignee(columns: &[Column], name: Option<&str>) -> Vec<Column> {
    let Some(name) = name else {
        return columns.to_vec();
    };

    columns
        .iter()
        .map(|column| Column {
            id: column.id.clone(),
            title: column.title.clone(),
            color: column.color.clone(),
            cards: column
                .cards
                .iter()
                .filter(|card| card.assignee_name() == Some(name))
                .cloned()
                .collect(),
        })
        .collect()
}
