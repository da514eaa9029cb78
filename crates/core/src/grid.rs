//! Grid module - fixed terrain of the map
//!
//! The grid is a rectangle of [`Cell`]s stored as a flat vector in row-major order
//! (`row * width + col`). Dimensions are fixed when the map is loaded.
//! The player is tracked by [`crate::World`], never written into the grid.

use crate::error::MapError;
use crate::types::{Cell, Position, PLAYER_GLYPH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order
    cells: Vec<Cell>,
}

impl Grid {
    /// Calculate flat index from signed `(row, col)` coordinates.
    ///
    /// The bounds check runs before any indexing.
    #[inline(always)]
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at `(row, col)`. Returns `None` if out of bounds.
    pub fn get(&self, row: isize, col: isize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Get cell at `pos`. Returns `None` if out of bounds.
    pub fn at(&self, pos: Position) -> Option<Cell> {
        self.get(pos.row as isize, pos.col as isize)
    }

    /// Check whether a player may stand at `(row, col)`.
    ///
    /// Out-of-bounds coordinates are never walkable; otherwise only floor and treasure are.
    pub fn is_walkable(&self, row: isize, col: isize) -> bool {
        self.get(row, col).is_some_and(|cell| cell.is_walkable())
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Number of cells with the given terrain.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

/// Parse raw map rows into a grid plus the player start position.
///
/// Exactly one start marker is required; its square becomes floor.
pub fn initialize<S: AsRef<str>>(raw: &[S]) -> Result<(Grid, Position), MapError> {
    let height = raw.len();
    let width = raw.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
    if height == 0 || width == 0 {
        return Err(MapError::Empty);
    }

    let mut cells = Vec::with_capacity(width * height);
    let mut start: Option<Position> = None;

    for (row, line) in raw.iter().enumerate() {
        let line = line.as_ref();
        let found = line.chars().count();
        if found != width {
            return Err(MapError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }

        for (col, glyph) in line.chars().enumerate() {
            let cell = if glyph == PLAYER_GLYPH {
                let here = Position::new(row, col);
                if let Some(first) = start {
                    return Err(MapError::MultipleStartMarkers {
                        first,
                        second: here,
                    });
                }
                start = Some(here);
                Cell::Floor
            } else {
                Cell::from_glyph(glyph).ok_or(MapError::UnknownGlyph { row, col, glyph })?
            };
            cells.push(cell);
        }
    }

    let start = start.ok_or(MapError::NoStartMarker)?;
    Ok((
        Grid {
            width,
            height,
            cells,
        },
        start,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_MAP;

    #[test]
    fn default_map_dimensions_and_start() {
        let (grid, start) = initialize(&DEFAULT_MAP).unwrap();
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.width(), 11);
        assert_eq!(start, Position::new(2, 5));
        assert_eq!(grid.at(start), Some(Cell::Floor));
        assert_eq!(grid.get(3, 5), Some(Cell::Treasure));
    }

    #[test]
    fn index_rejects_negative_and_overflowing_coords() {
        let (grid, _) = initialize(&DEFAULT_MAP).unwrap();
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(5, 0), None);
        assert_eq!(grid.get(0, 11), None);
        assert_eq!(grid.get(isize::MIN, isize::MAX), None);
    }

    #[test]
    fn rows_cover_every_cell() {
        let (grid, _) = initialize(&DEFAULT_MAP).unwrap();
        let rows: Vec<&[Cell]> = grid.rows().collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.len() == 11));
        assert!(rows[0].iter().all(|&c| c == Cell::Wall));
    }

    #[test]
    fn at_matches_get_and_rejects_out_of_bounds() {
        let (grid, start) = initialize(&DEFAULT_MAP).unwrap();
        assert_eq!(grid.at(start), grid.get(2, 5));
        assert_eq!(grid.at(Position::new(4, 10)), Some(Cell::Wall));
        assert_eq!(grid.at(Position::new(5, 0)), None);
        assert_eq!(grid.at(Position::new(0, 11)), None);
    }

    #[test]
    fn count_by_terrain() {
        let (grid, _) = initialize(&DEFAULT_MAP).unwrap();
        assert_eq!(grid.count(Cell::Treasure), 1);
        assert_eq!(grid.count(Cell::Wall), 2 * 11 + 2 * 3);
        assert_eq!(grid.count(Cell::Floor), 3 * 9 - 1);
    }

    #[test]
    fn missing_start_marker_is_an_error() {
        let err = initialize(&["###", "#.#", "###"]).unwrap_err();
        assert_eq!(err, MapError::NoStartMarker);
    }

    #[test]
    fn second_start_marker_is_an_error() {
        let err = initialize(&["#@@#"]).unwrap_err();
        assert_eq!(
            err,
            MapError::MultipleStartMarkers {
                first: Position::new(0, 1),
                second: Position::new(0, 2),
            }
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = initialize(&["####", "#@#", "####"]).unwrap_err();
        assert_eq!(
            err,
            MapError::RaggedRow {
                row: 1,
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn unknown_glyph_is_rejected() {
        let err = initialize(&["#@x#"]).unwrap_err();
        assert_eq!(
            err,
            MapError::UnknownGlyph {
                row: 0,
                col: 2,
                glyph: 'x'
            }
        );
    }

    #[test]
    fn empty_maps_are_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(initialize(&none).unwrap_err(), MapError::Empty);
        assert_eq!(initialize(&[""]).unwrap_err(), MapError::Empty);
    }

    #[test]
    fn owned_rows_are_accepted() {
        let rows = vec![String::from("#@$#")];
        let (grid, start) = initialize(&rows).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(start, Position::new(0, 1));
    }
}
