use thiserror::Error;

use crate::types::Position;

/// Reasons a raw map cannot become a playable world.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("Map has no rows or no columns")]
    Empty,
    #[error("Row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unknown glyph {glyph:?} at row {row}, col {col}")]
    UnknownGlyph { row: usize, col: usize, glyph: char },
    #[error("Map has no start marker")]
    NoStartMarker,
    #[error("Map has more than one start marker ({first:?} and {second:?})")]
    MultipleStartMarkers { first: Position, second: Position },
}
