//! Column commands
//!
//! The command structs report why a change was rejected. The free functions
//! below are the board's entry points and ignore rejected input, returning
//! the columns unchanged.

mod add;
mod delete;
mod update;

pub use add::AddColumn;
pub use delete::DeleteColumn;
pub use update::UpdateColumn;

use crate::operation::apply_or_keep;
use crate::types::{Column, ColumnId};

/// Append a new empty column. A blank title leaves the board unchanged.
pub fn add_column(title: &str, color: &str, columns: &[Column]) -> Vec<Column> {
    apply_or_keep(&AddColumn::new(title, color), columns)
}

/// Remove a column and all of its cards.
pub fn delete_column(id: &ColumnId, columns: &[Column]) -> Vec<Column> {
    apply_or_keep(&DeleteColumn::new(id), columns)
}

/// Replace a column's title and color.
pub fn edit_column(id: &ColumnId, title: &str, color: &str, columns: &[Column]) -> Vec<Column> {
    apply_or_keep(
        &UpdateColumn::new(id).with_title(title).with_color(color),
        columns,
    )
}
