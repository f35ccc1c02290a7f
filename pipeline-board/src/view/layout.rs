//! Responsive column width

use super::zoom::ZoomLevel;
use crate::config::LayoutConfig;
use crate::types::Column;

/// Display width of one column, in pixels.
///
/// Starts from the base (or expanded) width. Boards with more than
/// `comfortable_columns` columns shrink proportionally, never below
/// `min_shrink`. The zoom factor is applied last and the result is clamped to
/// `[min_width, max_width]`.
pub fn responsive_column_width(
    columns: &[Column],
    zoom: ZoomLevel,
    expanded: bool,
    layout: &LayoutConfig,
) -> u32 {
    let base = if expanded {
        layout.expanded_width
    } else {
        layout.base_width
    };

    let count = columns.len() as f64;
    let comfortable = f64::from(layout.comfortable_columns);
    let crowding = if count <= comfortable {
        1.0
    } else {
        (comfortable / count).max(layout.min_shrink)
    };

    let width = (f64::from(base) * crowding * zoom.factor()).round() as u32;
    width.clamp(layout.min_width, layout.max_width)
}
