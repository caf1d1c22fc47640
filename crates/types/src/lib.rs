//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the engine and by whatever
//! presentation layer reads its state. All types are plain data with no behavior
//! beyond parsing and conversion.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (configurable per engine):
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Spawn position**: horizontally centered on the top row
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LINE_CLEAR_POINTS` | 100 | Points per cleared line (or per clear event) |
//! | `LEVEL_SCORE_STEP` | 100 | Score boundary that advances the level by one |
//! | `START_LEVEL` | 1 | Level of a freshly initialized game |
//!
//! # Color Tags
//!
//! Every piece kind carries a distinct nonzero color tag. Tag `0` means "empty"
//! in shape matrices and in exported grids.
//!
//! | Kind | Tag |
//! |------|-----|
//! | I | 1 |
//! | L | 2 |
//! | J | 3 |
//! | O | 4 |
//! | S | 5 |
//! | T | 6 |
//! | Z | 7 |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, GameAction, DEFAULT_ROWS, DEFAULT_COLUMNS};
//!
//! // Parse from string (case-insensitive)
//! let piece = PieceKind::from_str("o").unwrap();
//! assert_eq!(piece, PieceKind::O);
//! assert_eq!(piece.color_tag(), 4);
//!
//! // Parse game action
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(DEFAULT_ROWS, 20);
//! assert_eq!(DEFAULT_COLUMNS, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Default board height in rows (20)
pub const DEFAULT_ROWS: u16 = 20;

/// Default board width in columns (10)
pub const DEFAULT_COLUMNS: u16 = 10;

/// Largest accepted board dimension on either axis.
///
/// Coordinates are stored as `i16`, so this leaves headroom for origin offsets.
pub const MAX_DIMENSION: u16 = 1024;

/// Points awarded per cleared line
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Every time the score crosses a multiple of this value the level goes up by one
pub const LEVEL_SCORE_STEP: u32 = 100;

/// Level of a freshly initialized game
pub const START_LEVEL: u32 = 1;

/// Gravity interval per level (milliseconds per row)
///
/// Index 0 = Level 1, Index 8 = Level 9+
pub const DROP_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Gravity interval used once the table is exhausted (120ms)
pub const DROP_INTERVAL_FLOOR_MS: u32 = 120;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color tag:
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("T"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Nonzero color tag written into shape matrices and board grids
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::L.color_tag(), 2);
    /// assert_eq!(PieceKind::O.color_tag(), 4);
    /// ```
    pub fn color_tag(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::L => 2,
            PieceKind::J => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`color_tag`](Self::color_tag); `0` and unknown tags map to `None`
    pub fn from_color_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::L),
            3 => Some(PieceKind::J),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Game actions a presentation layer can forward to the engine
///
/// Input wiring lives outside the engine; these are the discrete commands it
/// understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece one cell down, freezing it if blocked
    SoftDrop,
    /// Drop piece to the lowest valid row and freeze it
    HardDrop,
    /// Reinitialize the game and start playing
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" | "rotatecw" => Some(GameAction::Rotate),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Occupied, colored by the piece that was frozen there
pub type Cell = Option<PieceKind>;

/// Color tag of a cell (`0` when empty)
pub fn cell_tag(cell: Cell) -> u8 {
    cell.map_or(0, |kind| kind.color_tag())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_tags_are_distinct_and_nonzero() {
        let mut seen = Vec::new();
        for kind in PieceKind::ALL {
            let tag = kind.color_tag();
            assert_ne!(tag, 0);
            assert!(!seen.contains(&tag), "duplicate tag {}", tag);
            seen.push(tag);
        }
    }

    #[test]
    fn color_tag_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_color_tag(kind.color_tag()), Some(kind));
        }
        assert_eq!(PieceKind::from_color_tag(0), None);
        assert_eq!(PieceKind::from_color_tag(8), None);
    }

    #[test]
    fn cell_tag_of_empty_is_zero() {
        assert_eq!(cell_tag(None), 0);
        assert_eq!(cell_tag(Some(PieceKind::Z)), 7);
    }

    #[test]
    fn scoring_defaults() {
        assert_eq!(LINE_CLEAR_POINTS, 100);
        assert_eq!(LEVEL_SCORE_STEP, 100);
        assert_eq!(START_LEVEL, 1);
    }

    #[test]
    fn action_strings_parse_back() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::Rotate,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
