//! Built-in board definitions.

use crate::error::Result;
use crate::types::Board;

const PIPELINE_YAML: &str = include_str!("builtin/pipeline.yaml");

/// The stock sales pipeline: Lead, Contacted, Proposal, Negotiation, Won.
///
/// Columns start empty.
pub fn default_pipeline() -> Result<Board> {
    Board::from_yaml(PIPELINE_YAML)
}
