//! Derived views of the board: assignee filter, zoom and column width.
//!
//! Nothing in here changes the board. A view borrows the columns and returns
//! a filtered copy or a number.

mod filter;
mod layout;
mod zoom;

pub use filter::{filter_columns_by_assignee, unique_assignees};
pub use layout::responsive_column_width;
pub use zoom::ZoomLevel;

use crate::config::BoardConfig;
use crate::types::Column;
use serde::{Deserialize, Serialize};

/// Ephemeral display state layered over the board
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub zoom: ZoomLevel,
    pub expanded: bool,
    /// Only show cards assigned to this name
    pub assignee_filter: Option<String>,
}

impl ViewState {
    /// View at the configured starting zoom, collapsed and unfiltered
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            zoom: ZoomLevel::initial(&config.zoom),
            expanded: false,
            assignee_filter: None,
        }
    }

    /// Step the zoom up
    pub fn zoom_in(&mut self, config: &BoardConfig) {
        self.zoom = self.zoom.zoom_in(&config.zoom);
    }

    /// Step the zoom down
    pub fn zoom_out(&mut self, config: &BoardConfig) {
        self.zoom = self.zoom.zoom_out(&config.zoom);
    }

    /// Back to the starting zoom
    pub fn reset_zoom(&mut self, config: &BoardConfig) {
        self.zoom = self.zoom.reset(&config.zoom);
    }

    /// Switch between the normal and expanded column width
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Filter by assignee name, or show everyone with `None`
    pub fn set_assignee_filter(&mut self, name: Option<impl Into<String>>) {
        self.assignee_filter = name.map(Into::into);
    }

    /// The columns as they should be rendered
    pub fn visible_columns(&self, columns: &[Column]) -> Vec<Column> {
        filter_columns_by_assignee(columns, self.assignee_filter.as_deref())
    }

    /// Width of each column at the current zoom, in pixels
    pub fn column_width(&self, columns: &[Column], config: &BoardConfig) -> u32 {
        let zoom = self.zoom.clamp_to(&config.zoom);
        responsive_column_width(columns, zoom, self.expanded, &config.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Assignee, Card};

    #[test]
    fn test_view_state_filter_and_width() {
        let config = BoardConfig::default();
        let columns = vec![Column::new("A", "blue").with_cards(vec![
            Card::new("one").with_assignee(Assignee::new("u1", "Bob")),
            Card::new("two"),
        ])];

        let mut view = ViewState::new(&config);
        assert_eq!(view.visible_columns(&columns), columns);

        view.set_assignee_filter(Some("Bob"));
        assert_eq!(view.visible_columns(&columns)[0].cards.len(), 1);

        view.set_assignee_filter(None::<String>);
        assert_eq!(view.visible_columns(&columns)[0].cards.len(), 2);

        let narrow = view.column_width(&columns, &config);
        view.toggle_expanded();
        view.zoom_in(&config);
        assert!(view.column_width(&columns, &config) > narrow);

        view.reset_zoom(&config);
        assert_eq!(view.zoom.percent(), config.zoom.default_percent);
    }

    #[test]
    fn test_view_state_with_out_of_range_zoom_recovers() {
        let config = BoardConfig::default();
        let mut view: ViewState =
            serde_json::from_str(r#"{"zoom":5,"expanded":false,"assigneeFilter":null}"#).unwrap();
        assert_eq!(view.zoom.percent(), 5);

        let mut smallest = ViewState::new(&config);
        for _ in 0..10 {
            smallest.zoom_out(&config);
        }
        let columns = vec![Column::new("A", "blue")];
        assert_eq!(
            view.column_width(&columns, &config),
            smallest.column_width(&columns, &config)
        );

        view.zoom_in(&config);
        assert!(view.zoom.percent() >= config.zoom.min_percent);
        for _ in 0..20 {
            view.zoom_in(&config);
        }
        assert_eq!(view.zoom.percent(), config.zoom.max_percent);
    }

    #[test]
    fn test_view_state_serializes_camel_case() {
        let mut view = ViewState::new(&BoardConfig::default());
        view.set_assignee_filter(Some("Bob"));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["assigneeFilter"], "Bob");
        assert_eq!(json["zoom"], 100);
    }
}
