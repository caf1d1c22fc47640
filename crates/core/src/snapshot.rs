//! Read-only views of a session for renderers and observers

use serde::{Deserialize, Serialize};

use crate::game_state::Phase;
use crate::pieces::Piece;
use crate::types::{PieceKind, START_LEVEL};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: Option<PieceKind>,
    /// Shape matrix as rows of color tags
    pub shape: Vec<Vec<u8>>,
    pub x: i16,
    pub y: i16,
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind(),
            shape: value.shape.to_rows(),
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub rows: u16,
    pub columns: u16,
    /// Frozen cells as color tags, `board[y][x]`, `0` for empty
    pub board: Vec<Vec<u8>>,
    pub current: Option<PieceSnapshot>,
    pub ghost_y: Option<i16>,
    pub next: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: Phase,
    pub game_over: bool,
    pub episode_id: u32,
    pub pieces_spawned: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.rows = 0;
        self.columns = 0;
        self.board.clear();
        self.current = None;
        self.ghost_y = None;
        self.next = PieceKind::I;
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.phase = Phase::NotStarted;
        self.game_over = false;
        self.episode_id = 0;
        self.pieces_spawned = 0;
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Board with the current piece drawn on top, clipped to the grid
    pub fn composed_grid(&self) -> Vec<Vec<u8>> {
        let mut grid = self.board.clone();
        let Some(piece) = &self.current else {
            return grid;
        };

        for (dy, row) in piece.shape.iter().enumerate() {
            for (dx, &tag) in row.iter().enumerate() {
                if tag == 0 {
                    continue;
                }
                let x = piece.x as i32 + dx as i32;
                let y = piece.y as i32 + dy as i32;
                if x < 0 || y < 0 {
                    continue;
                }
                if let Some(cell) = grid
                    .get_mut(y as usize)
                    .and_then(|r| r.get_mut(x as usize))
                {
                    *cell = tag;
                }
            }
        }
        grid
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            columns: 0,
            board: Vec::new(),
            current: None,
            ghost_y: None,
            next: PieceKind::I,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            phase: Phase::NotStarted,
            game_over: false,
            episode_id: 0,
            pieces_spawned: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GameSnapshot {
        GameSnapshot {
            rows: 3,
            columns: 3,
            board: vec![vec![0, 0, 0], vec![0, 0, 0], vec![1, 1, 0]],
            current: Some(PieceSnapshot {
                kind: Some(PieceKind::O),
                shape: vec![vec![4, 4], vec![4, 4]],
                x: 2,
                y: 0,
            }),
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn test_composed_grid_clips_piece() {
        let grid = sample().composed_grid();
        assert_eq!(grid, vec![vec![0, 0, 4], vec![0, 0, 4], vec![1, 1, 0]]);
    }

    #[test]
    fn test_composed_grid_without_piece() {
        let mut snap = sample();
        snap.current = None;
        assert_eq!(snap.composed_grid(), snap.board);
    }

    #[test]
    fn test_json_field_names() {
        let json = sample().to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["phase"], "not_started");
        assert_eq!(v["gameOver"], false);
        assert_eq!(v["current"]["kind"], "o");
        assert_eq!(v["board"][2][0], 1);
    }

    #[test]
    fn test_clear_resets() {
        let mut snap = sample();
        snap.score = 500;
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }
}
