//! World module - the grid plus the player standing on it
//!
//! [`World`] is the single owner of the mutable game state. All spatial rules
//! (bounds, walkability, treasure detection) are answered here, with no knowledge
//! of rendering or input devices.

use crate::error::MapError;
use crate::grid::{initialize, Grid};
use crate::types::{Cell, Direction, Position, DEFAULT_MAP, PLAYER_GLYPH};

/// Result of one movement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Moved { stepped_on_treasure: bool },
    Blocked,
}

impl MoveResult {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveResult::Moved { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    grid: Grid,
    player: Position,
    moves: u32,
}

impl World {
    /// Build a world from raw map rows.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let (grid, player) = initialize(rows)?;
        log::info!(
            "map loaded: {}x{}, player at ({}, {})",
            grid.height(),
            grid.width(),
            player.row,
            player.col
        );
        Ok(Self {
            grid,
            player,
            moves: 0,
        })
    }

    /// Build the shipped map.
    pub fn shipped() -> Result<Self, MapError> {
        Self::from_rows(&DEFAULT_MAP)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Position {
        self.player
    }

    /// Successful moves so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_walkable(&self, row: isize, col: isize) -> bool {
        self.grid.is_walkable(row, col)
    }

    /// Terrain the player is standing on.
    pub fn terrain_under_player(&self) -> Cell {
        // The player position always lies on a walkable in-bounds cell.
        self.grid.at(self.player).unwrap_or(Cell::Floor)
    }

    /// Glyph shown at `(row, col)`: the player if standing there, else the terrain.
    pub fn glyph_at(&self, row: usize, col: usize) -> Option<char> {
        if self.player == Position::new(row, col) {
            return Some(PLAYER_GLYPH);
        }
        self.grid.get(row as isize, col as isize).map(|c| c.glyph())
    }

    /// Try to step one cell in `dir`.
    ///
    /// A blocked move leaves the world untouched.
    pub fn try_move(&mut self, dir: Direction) -> MoveResult {
        let (row, col) = self.player.offset(dir);
        if !self.grid.is_walkable(row, col) {
            log::trace!("move {} blocked at ({}, {})", dir.as_str(), row, col);
            return MoveResult::Blocked;
        }

        self.player = Position::new(row as usize, col as usize);
        self.moves = self.moves.saturating_add(1);
        MoveResult::Moved {
            stepped_on_treasure: self.terrain_under_player() == Cell::Treasure,
        }
    }
}
