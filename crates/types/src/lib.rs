//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the world model, the input layer and the
//! terminal renderer. Everything here is plain data with no external dependencies.
//!
//! # Map Glyphs
//!
//! The map is written as rows of characters:
//!
//! | Glyph | Meaning |
//! |-------|---------|
//! | `#` | Wall |
//! | `.` | Floor |
//! | `$` | Treasure |
//! | `@` | Player start (replaced by floor once read) |
//!
//! # Coordinates
//!
//! Positions are `(row, col)` with row 0 at the top and col 0 at the left.
//!
//! # Examples
//!
//! ```
//! use tiny_adventure_types::{Cell, Direction, Intent, Key};
//!
//! assert_eq!(Cell::from_glyph('#'), Some(Cell::Wall));
//! assert_eq!(Direction::Up.delta(), (-1, 0));
//!
//! // Letter keys are case-insensitive.
//! assert_eq!(Intent::from_key(Key::Char('W')), Some(Intent::Move(Direction::Up)));
//! assert_eq!(Intent::from_key(Key::Char('x')), None);
//! ```

/// Wall glyph.
pub const WALL_GLYPH: char = '#';

/// Floor glyph.
pub const FLOOR_GLYPH: char = '.';

/// Treasure glyph.
pub const TREASURE_GLYPH: char = '$';

/// Player glyph. Doubles as the start marker in raw map data.
pub const PLAYER_GLYPH: char = '@';

/// The shipped map: 5 rows x 11 columns, walled on every border.
pub const DEFAULT_MAP: [&str; 5] = [
    "###########",
    "#.........#",
    "#....@....#",
    "#....$....#",
    "###########",
];

/// Title screen lines.
pub const TITLE_LINES: [&str; 3] = [
    "Welcome to the Tiny Adventure!",
    "Find the treasure '$' to win.",
    "Press any key to start...",
];

/// Help line drawn beneath the map while playing.
pub const STATUS_HELP: &str = "Use arrow keys or WASD to move. Press 'q' to quit.";

/// Closing screen after the treasure is found.
pub const WON_LINES: [&str; 3] = [
    "You found the treasure!",
    "Thanks for playing!",
    "Press any key to quit.",
];

/// Closing screen after quitting.
pub const QUIT_LINES: [&str; 2] = ["Thanks for playing!", "Press any key to quit."];

/// Terrain of a single grid square.
///
/// The player is never stored in the grid; it is tracked separately by the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Floor,
    Treasure,
}

impl Cell {
    /// Parse terrain from a map glyph.
    ///
    /// The start marker is not terrain and yields `None`, as does any unknown glyph.
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            WALL_GLYPH => Some(Cell::Wall),
            FLOOR_GLYPH => Some(Cell::Floor),
            TREASURE_GLYPH => Some(Cell::Treasure),
            _ => None,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Cell::Wall => WALL_GLYPH,
            Cell::Floor => FLOOR_GLYPH,
            Cell::Treasure => TREASURE_GLYPH,
        }
    }

    /// Whether a player may stand on this terrain.
    pub fn is_walkable(&self) -> bool {
        matches!(self, Cell::Floor | Cell::Treasure)
    }
}

/// A `(row, col)` grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring coordinate one step in `dir`, in signed space.
    ///
    /// The result may lie outside the grid; callers bounds-check it.
    pub fn offset(&self, dir: Direction) -> (isize, isize) {
        let (d_row, d_col) = dir.delta();
        (self.row as isize + d_row, self.col as isize + d_col)
    }
}

/// The four axis-aligned movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit `(d_row, d_col)` step.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A logical key event, independent of any terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Char(char),
    /// Ctrl-C. Raw mode swallows the signal, so it arrives as a key.
    Interrupt,
    /// Anything else (function keys, Enter, Esc, ...).
    Other,
}

/// The normalized result of classifying one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Move(Direction),
    Quit,
}

impl Intent {
    /// Classify a key. `None` means unrecognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiny_adventure_types::{Direction, Intent, Key};
    ///
    /// assert_eq!(Intent::from_key(Key::Left), Some(Intent::Move(Direction::Left)));
    /// assert_eq!(Intent::from_key(Key::Char('Q')), Some(Intent::Quit));
    /// assert_eq!(Intent::from_key(Key::Other), None);
    /// ```
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Up | Key::Char('w') | Key::Char('W') => Some(Intent::Move(Direction::Up)),
            Key::Down | Key::Char('s') | Key::Char('S') => Some(Intent::Move(Direction::Down)),
            Key::Left | Key::Char('a') | Key::Char('A') => Some(Intent::Move(Direction::Left)),
            Key::Right | Key::Char('d') | Key::Char('D') => Some(Intent::Move(Direction::Right)),
            Key::Char('q') | Key::Char('Q') | Key::Interrupt => Some(Intent::Quit),
            _ => None,
        }
    }
}

/// Classification of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Quit,
}

impl Outcome {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
