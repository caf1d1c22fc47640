//! Game state module - the engine that owns a session
//!
//! This module ties together the board, the piece catalog, the randomizer and
//! scoring. Every operation runs to completion on the caller's thread; rejected
//! moves and rotations are reported as `false` and leave the state untouched.
//!
//! Lifecycle: `NotStarted` → `Playing` → `GameOver`. Game over is terminal until
//! [`GameEngine::initialize_game`] or [`GameEngine::restart`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::pieces::{try_rotate, Piece};
use crate::rng::PieceQueue;
use crate::scoring::{award, drop_interval_ms};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{GameAction, PieceKind, START_LEVEL};

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    NotStarted,
    Playing,
    GameOver,
}

/// Result of a single tick / drop step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened (not playing, or no current piece)
    Idle,
    /// The piece moved down one row
    Moved,
    /// The piece could not move and was frozen
    Frozen,
}

/// Result of one `clear_lines` pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClearResult {
    /// Cleared row indices before compaction, top to bottom
    pub rows: Vec<i16>,
    pub points: u32,
    pub levels_gained: u32,
}

impl ClearResult {
    pub fn lines(&self) -> u32 {
        self.rows.len() as u32
    }
}

/// Event emitted after a piece freezes (consumed by observers)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezeEvent {
    /// Board cells written by the frozen piece
    pub cells_written: u32,
    pub lines_cleared: u32,
    pub cleared_rows: Vec<i16>,
    pub points: u32,
    pub score: u32,
    pub level_before: u32,
    pub level_after: u32,
    /// The follow-up spawn collided and ended the game
    pub game_over: bool,
}

/// A single falling-block session
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: EngineConfig,
    board: Board,
    current: Option<Piece>,
    next: PieceKind,
    piece_queue: PieceQueue,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Successful spawns in this episode.
    pieces_spawned: u32,
    /// Last freeze event (consumed by observers).
    last_event: Option<FreezeEvent>,
}

impl GameEngine {
    /// Create a new session on an empty board
    ///
    /// Fails fast on invalid dimensions or an empty piece sequence.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let board = Board::new(config.rows, config.columns)?;
        let piece_queue = PieceQueue::new(config.seed, config.randomizer.clone())?;
        Ok(Self::build(board, config, piece_queue))
    }

    /// Create a session on a prepared board; the board's dimensions win
    pub fn from_board(board: Board, config: EngineConfig) -> Result<Self> {
        let config = EngineConfig {
            rows: board.rows(),
            columns: board.columns(),
            ..config
        };
        config.validate()?;
        let piece_queue = PieceQueue::new(config.seed, config.randomizer.clone())?;
        Ok(Self::build(board, config, piece_queue))
    }

    fn build(board: Board, config: EngineConfig, mut piece_queue: PieceQueue) -> Self {
        let next = piece_queue.draw();

        Self {
            config,
            board,
            current: None,
            next,
            piece_queue,
            phase: Phase::NotStarted,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            episode_id: 0,
            pieces_spawned: 0,
            last_event: None,
        }
    }

    /// Reset to an empty `rows x columns` board, score 0, level 1
    ///
    /// The randomizer is reseeded from the configured seed, so the same config
    /// replays the same piece stream. The session is left `NotStarted`.
    pub fn initialize_game(&mut self, rows: u16, columns: u16) -> Result<()> {
        let config = EngineConfig {
            rows,
            columns,
            ..self.config.clone()
        };
        let fresh = Self::new(config)?;
        let episode_id = self.episode_id;
        *self = fresh;
        self.episode_id = episode_id;
        debug!(rows, columns, "game initialized");
        Ok(())
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        debug!(episode = self.episode_id, "game started");
        self.spawn_piece()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    /// Kind that the next spawn will use
    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    /// Gravity interval the tick driver should use at the current level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Replace the current piece (puzzles, replays, test harnesses)
    ///
    /// Ignored once the game is over. A `NotStarted` session becomes `Playing`.
    pub fn set_current_piece(&mut self, piece: Piece) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.current = Some(piece);
        self.phase = Phase::Playing;
        true
    }

    /// Spawn the next piece at the top of the board
    ///
    /// If the spawn position collides, the game is over: the board is left
    /// untouched and there is no current piece.
    pub fn spawn_piece(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }

        let kind = self.next;
        let piece = Piece::spawn(kind, self.board.columns());

        if !self.board.fits(&piece.shape.offsets(), piece.x, piece.y) {
            self.current = None;
            self.phase = Phase::GameOver;
            info!(
                score = self.score,
                level = self.level,
                lines = self.lines,
                pieces = self.pieces_spawned,
                "game over"
            );
            return false;
        }

        self.current = Some(piece);
        self.next = self.piece_queue.draw();
        self.phase = Phase::Playing;
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        debug!(kind = kind.as_str(), x = piece.x, y = piece.y, next = self.next.as_str(), "spawned piece");

        true
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let Some(active) = self.current else {
            return false;
        };

        let Some(candidate) = active.shifted(dx, dy) else {
            return false;
        };
        if self
            .board
            .fits(&candidate.shape.offsets(), candidate.x, candidate.y)
        {
            self.current = Some(candidate);
            return true;
        }

        false
    }

    /// Shift the current piece horizontally by `delta_x` columns
    pub fn move_piece(&mut self, delta_x: i16) -> bool {
        self.try_move(delta_x, 0)
    }

    /// Check if piece can move in given direction
    pub fn can_move(&self, dx: i16, dy: i16) -> bool {
        let Some(active) = self.current else {
            return false;
        };
        active.shifted(dx, dy).is_some_and(|candidate| {
            self.board
                .fits(&candidate.shape.offsets(), candidate.x, candidate.y)
        })
    }

    /// Rotate the current piece clockwise, keeping its origin
    pub fn rotate_piece(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let Some(active) = self.current else {
            return false;
        };

        match try_rotate(&active, |x, y| self.board.is_valid(x, y)) {
            Some(rotated) => {
                self.current = Some(rotated);
                true
            }
            None => false,
        }
    }

    /// Move the piece down one row, freezing it if it cannot move
    pub fn drop_piece(&mut self) -> TickOutcome {
        if self.phase != Phase::Playing || self.current.is_none() {
            return TickOutcome::Idle;
        }

        if self.try_move(0, 1) {
            TickOutcome::Moved
        } else {
            self.freeze_piece();
            TickOutcome::Frozen
        }
    }

    /// One discrete step of the game loop
    pub fn tick(&mut self) -> TickOutcome {
        self.drop_piece()
    }

    /// Drop the piece to the lowest valid row and freeze it
    pub fn hard_drop(&mut self) -> Option<FreezeEvent> {
        if self.phase != Phase::Playing || self.current.is_none() {
            return None;
        }
        while self.try_move(0, 1) {}
        self.freeze_piece()
    }

    /// Row the current piece would land on
    pub fn ghost_y(&self) -> Option<i16> {
        let active = self.current?;
        let offsets = active.shape.offsets();

        let mut y = active.y;
        while let Some(below) = y.checked_add(1) {
            if !self.board.fits(&offsets, active.x, below) {
                break;
            }
            y = below;
        }
        Some(y)
    }

    /// Write the current piece into the board, clear lines, spawn the next piece
    pub fn freeze_piece(&mut self) -> Option<FreezeEvent> {
        if self.phase == Phase::GameOver {
            return None;
        }
        let active = self.current.take()?;

        let cells_written = self.board.stamp(active.cells()) as u32;
        let level_before = self.level;
        let cleared = self.clear_lines();

        self.spawn_piece();

        let event = FreezeEvent {
            cells_written,
            lines_cleared: cleared.lines(),
            cleared_rows: cleared.rows,
            points: cleared.points,
            score: self.score,
            level_before,
            level_after: self.level,
            game_over: self.phase == Phase::GameOver,
        };
        self.last_event = Some(event.clone());
        Some(event)
    }

    /// Remove full rows and award points for them
    pub fn clear_lines(&mut self) -> ClearResult {
        if self.phase == Phase::GameOver {
            return ClearResult::default();
        }

        let rows = self.board.clear_full_rows();
        if rows.is_empty() {
            return ClearResult::default();
        }

        let result = award(self.score, self.level, rows.len(), self.config.scoring);
        self.score = result.score;
        self.level = result.level;
        self.lines += rows.len() as u32;

        debug!(
            lines = rows.len(),
            points = result.points,
            score = self.score,
            "cleared lines"
        );
        if result.levels_gained > 0 {
            debug!(level = self.level, "level up");
        }

        ClearResult {
            rows,
            points: result.points,
            levels_gained: result.levels_gained,
        }
    }

    /// Take and clear the last freeze event.
    pub fn take_last_event(&mut self) -> Option<FreezeEvent> {
        self.last_event.take()
    }

    pub fn last_event(&self) -> Option<&FreezeEvent> {
        self.last_event.as_ref()
    }

    /// Reinitialize with the same dimensions and a fresh seed, then start
    pub fn restart(&mut self) -> Result<()> {
        let seed = self.piece_queue.seed();
        let next_episode = self.episode_id.wrapping_add(1);
        let config = EngineConfig {
            seed,
            ..self.config.clone()
        };
        *self = Self::new(config)?;
        self.episode_id = next_episode;
        self.start();
        Ok(())
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::Rotate => self.rotate_piece(),
            GameAction::SoftDrop => self.drop_piece() != TickOutcome::Idle,
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::Restart => self.restart().is_ok(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.columns = self.board.columns();
        out.board = self.board.to_tag_grid();
        out.current = self.current.as_ref().map(PieceSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.phase = self.phase;
        out.game_over = self.game_over();
        out.episode_id = self.episode_id;
        out.pieces_spawned = self.pieces_spawned;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::build(Board::default(), EngineConfig::default(), PieceQueue::default())
    }
}

impl TryFrom<EngineConfig> for GameEngine {
    type Error = EngineError;

    fn try_from(config: EngineConfig) -> Result<Self> {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{base_shape, Shape};
    use crate::rng::Randomizer;
    use crate::scoring::ScoringRule;

    fn engine_with(seq: Vec<PieceKind>) -> GameEngine {
        GameEngine::new(EngineConfig::default().randomizer(Randomizer::Sequence(seq))).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let state = GameEngine::new(EngineConfig::default()).unwrap();

        assert_eq!(state.phase, Phase::NotStarted);
        assert!(!state.game_over());
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert_eq!(state.episode_id, 0);
        assert!(state.current.is_none());
        assert_eq!(state.board.rows(), 20);
        assert_eq!(state.board.columns(), 10);
    }

    #[test]
    fn test_default_matches_default_config() {
        let mut a = GameEngine::default();
        let mut b = GameEngine::new(EngineConfig::default()).unwrap();
        assert_eq!(a.config, b.config);
        assert_eq!(a.board, b.board);
        for _ in 0..10 {
            assert_eq!(a.next_piece(), b.next_piece());
            a.spawn_piece();
            b.spawn_piece();
        }
    }

    #[test]
    fn test_invalid_dimensions_fail_fast() {
        let err = GameEngine::new(EngineConfig::with_size(0, 10)).unwrap_err();
        assert_eq!(err, EngineError::InvalidDimensions { rows: 0, columns: 10 });
    }

    #[test]
    fn test_game_start() {
        let mut state = GameEngine::default();
        assert!(state.start());
        assert_eq!(state.phase, Phase::Playing);
        assert!(state.current.is_some());
        assert_eq!(state.pieces_spawned, 1);

        // Starting twice is a no-op.
        assert!(!state.start());
        assert_eq!(state.pieces_spawned, 1);
    }

    #[test]
    fn test_spawn_uses_preview() {
        let mut state = engine_with(vec![PieceKind::T, PieceKind::O, PieceKind::I]);
        assert_eq!(state.next_piece(), PieceKind::T);

        state.start();
        assert_eq!(state.current.unwrap().kind(), Some(PieceKind::T));
        assert_eq!(state.next_piece(), PieceKind::O);
    }

    #[test]
    fn test_try_move() {
        let mut state = engine_with(vec![PieceKind::T]);
        state.start();

        let initial_x = state.current.unwrap().x;

        assert!(state.try_move(1, 0));
        assert_eq!(state.current.unwrap().x, initial_x + 1);

        assert!(state.try_move(-1, 0));
        assert_eq!(state.current.unwrap().x, initial_x);

        // Can't move up
        assert!(!state.try_move(0, -1));
    }

    #[test]
    fn test_try_move_collision() {
        let mut state = engine_with(vec![PieceKind::T]);
        state.start();

        let mut moved = 0;
        for _ in 0..10 {
            if state.move_piece(-1) {
                moved += 1;
            }
        }
        // T spawns at x=3 and is 3 wide.
        assert_eq!(moved, 3);
        assert_eq!(state.current.unwrap().x, 0);
    }

    #[test]
    fn test_move_by_extreme_delta_is_rejected() {
        let mut state = engine_with(vec![PieceKind::T]);
        state.start();
        let before = state.current.unwrap();

        assert!(!state.move_piece(i16::MAX));
        assert_eq!(state.current.unwrap(), before);
        assert!(!state.move_piece(i16::MIN));
        assert_eq!(state.current.unwrap(), before);
        assert!(!state.can_move(i16::MAX, 0));
    }

    #[test]
    fn test_piece_at_coordinate_limit_is_inert() {
        let mut state = GameEngine::default();
        let far = Piece::new(base_shape(PieceKind::T), i16::MAX - 1, i16::MAX - 1);
        assert!(state.set_current_piece(far));

        assert!(!state.move_piece(1));
        assert!(!state.rotate_piece());
        assert_eq!(state.ghost_y(), Some(i16::MAX - 1));
        assert_eq!(state.current.unwrap(), far);

        // Nothing of it lands on the board.
        let ev = state.freeze_piece().unwrap();
        assert_eq!(ev.cells_written, 0);
        assert_eq!(state.board.occupied_count(), 0);
    }

    #[test]
    fn test_rotate_piece() {
        let mut state = engine_with(vec![PieceKind::T]);
        state.start();
        state.try_move(0, 2);

        let original = state.current.unwrap().shape;
        assert!(state.rotate_piece());
        assert_eq!(state.current.unwrap().shape, original.rotate_cw());
    }

    #[test]
    fn test_rotate_rejected_at_floor() {
        let mut state = engine_with(vec![PieceKind::I]);
        state.start();
        while state.try_move(0, 1) {}

        let before = state.current.unwrap();
        assert!(!state.rotate_piece());
        assert_eq!(state.current.unwrap(), before);
    }

    #[test]
    fn test_drop_then_freeze() {
        let mut state = engine_with(vec![PieceKind::O]);
        state.start();

        let mut moves = 0;
        while state.drop_piece() == TickOutcome::Moved {
            moves += 1;
        }
        assert_eq!(moves, 18);

        // O frozen at the bottom in the middle columns.
        assert_eq!(state.board.get(4, 19), Some(Some(PieceKind::O)));
        assert_eq!(state.board.get(5, 18), Some(Some(PieceKind::O)));
        assert_eq!(state.board.occupied_count(), 4);
        assert_eq!(state.pieces_spawned, 2);

        let ev = state.take_last_event().unwrap();
        assert_eq!(ev.cells_written, 4);
        assert_eq!(ev.lines_cleared, 0);
        assert!(!ev.game_over);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_hard_drop_matches_ghost() {
        let mut state = engine_with(vec![PieceKind::I]);
        state.start();

        assert_eq!(state.ghost_y(), Some(19));
        let ev = state.hard_drop().unwrap();
        assert_eq!(ev.cells_written, 4);
        for x in 3..7 {
            assert_eq!(state.board.get(x, 19), Some(Some(PieceKind::I)));
        }
        assert_eq!(state.ghost_y(), Some(18));
    }

    #[test]
    fn test_clear_lines_scores_per_line() {
        let mut board = Board::new(20, 10).unwrap();
        board.fill_line(18, PieceKind::J);
        board.fill_line(19, PieceKind::L);
        let mut state = GameEngine::from_board(board, EngineConfig::default()).unwrap();

        let result = state.clear_lines();
        assert_eq!(result.rows, vec![18, 19]);
        assert_eq!(result.points, 200);
        assert_eq!(state.score, 200);
        assert_eq!(state.level, 3);
        assert_eq!(state.lines, 2);
        assert_eq!(state.board.occupied_count(), 0);
    }

    #[test]
    fn test_clear_lines_flat_rule() {
        let mut board = Board::new(20, 10).unwrap();
        board.fill_line(17, PieceKind::J);
        board.fill_line(18, PieceKind::J);
        board.fill_line(19, PieceKind::J);
        let config = EngineConfig::default().scoring(ScoringRule::PerClear);
        let mut state = GameEngine::from_board(board, config).unwrap();

        let result = state.clear_lines();
        assert_eq!(result.lines(), 3);
        assert_eq!(state.score, 100);
        assert_eq!(state.level, 2);
    }

    #[test]
    fn test_freeze_completing_line_scores() {
        let mut board = Board::new(20, 10).unwrap();
        for x in 0..10 {
            if x != 4 && x != 5 {
                board.set(x, 19, Some(PieceKind::Z));
            }
        }
        let mut state = GameEngine::from_board(board, EngineConfig::default()).unwrap();
        state.set_current_piece(Piece::new(base_shape(PieceKind::O), 4, 18));

        let ev = state.freeze_piece().unwrap();
        assert_eq!(ev.lines_cleared, 1);
        assert_eq!(ev.cleared_rows, vec![19]);
        assert_eq!(ev.points, 100);
        assert_eq!(ev.level_before, 1);
        assert_eq!(ev.level_after, 2);

        // The top half of the O slid down into row 19.
        assert_eq!(state.board.get(4, 19), Some(Some(PieceKind::O)));
        assert_eq!(state.board.get(5, 19), Some(Some(PieceKind::O)));
        assert_eq!(state.board.occupied_count(), 2);
    }

    #[test]
    fn test_game_over_detection() {
        let mut state = engine_with(vec![PieceKind::O]);
        state.start();

        // Block the spawn cells of the next O.
        state.board.set(4, 0, Some(PieceKind::I));
        state.board.set(5, 1, Some(PieceKind::I));
        state.current = Some(Piece::new(base_shape(PieceKind::O), 0, 18));

        let before = state.board.clone();
        let ev = state.freeze_piece().unwrap();
        assert!(ev.game_over);
        assert!(state.game_over());
        assert!(state.current.is_none());

        // Only the frozen piece changed the board; the failed spawn wrote nothing.
        assert_eq!(state.board.occupied_count(), before.occupied_count() + 4);
    }

    #[test]
    fn test_game_over_blocks_operations() {
        let mut state = engine_with(vec![PieceKind::T]);
        state.start();
        state.phase = Phase::GameOver;

        let before = state.current;
        assert!(!state.move_piece(1));
        assert!(!state.rotate_piece());
        assert_eq!(state.tick(), TickOutcome::Idle);
        assert!(state.hard_drop().is_none());
        assert!(state.freeze_piece().is_none());
        assert!(!state.spawn_piece());
        assert!(!state.set_current_piece(Piece::spawn(PieceKind::O, 10)));
        assert_eq!(state.current, before);
    }

    #[test]
    fn test_tick_not_started_is_idle() {
        let mut state = GameEngine::default();
        assert_eq!(state.tick(), TickOutcome::Idle);
        assert!(!state.move_piece(1));
    }

    #[test]
    fn test_apply_action_move() {
        let mut state = engine_with(vec![PieceKind::T]);
        state.start();

        let initial_x = state.current.unwrap().x;

        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.current.unwrap().x, initial_x + 1);

        assert!(state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.current.unwrap().x, initial_x);

        assert!(state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.current.unwrap().y, 1);
    }

    #[test]
    fn test_apply_action_restart() {
        let mut state = GameEngine::default();
        state.start();
        state.apply_action(GameAction::HardDrop);
        state.phase = Phase::GameOver;

        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.episode_id, 1);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.board.occupied_count(), 0);
    }

    #[test]
    fn test_initialize_game_resets_and_resizes() {
        let mut state = GameEngine::default();
        state.start();
        state.hard_drop();
        state.phase = Phase::GameOver;

        state.initialize_game(12, 6).unwrap();
        assert_eq!(state.phase, Phase::NotStarted);
        assert_eq!(state.board.rows(), 12);
        assert_eq!(state.board.columns(), 6);
        assert_eq!(state.board.occupied_count(), 0);
        assert!(state.current.is_none());

        assert!(state.initialize_game(5, 0).is_err());
        // A rejected reinit leaves the previous session intact.
        assert_eq!(state.board.columns(), 6);
    }

    #[test]
    fn test_set_current_piece_arbitrary_shape() {
        let mut state = GameEngine::default();
        let l = Shape::from_rows(&[[2u8, 0], [2, 0], [2, 2]]).unwrap();
        assert!(state.set_current_piece(Piece::new(l, 4, 0)));
        assert_eq!(state.phase, Phase::Playing);

        for _ in 0..4 {
            assert!(state.rotate_piece());
        }
        assert_eq!(state.current.unwrap().shape, l);
    }

    #[test]
    fn test_deterministic_given_seed() {
        let config = EngineConfig::default().seed(99);
        let mut a = GameEngine::new(config.clone()).unwrap();
        let mut b = GameEngine::new(config).unwrap();
        a.start();
        b.start();
        for _ in 0..30 {
            a.hard_drop();
            b.hard_drop();
        }
        assert_eq!(a.board, b.board);
        assert_eq!(a.next_piece(), b.next_piece());
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = engine_with(vec![PieceKind::O, PieceKind::T]);
        state.start();
        let snap = state.snapshot();

        assert_eq!(snap.rows, 20);
        assert_eq!(snap.columns, 10);
        assert_eq!(snap.phase, Phase::Playing);
        assert_eq!(snap.next, PieceKind::T);
        let current = snap.current.unwrap();
        assert_eq!(current.kind, Some(PieceKind::O));
        assert_eq!((current.x, current.y), (4, 0));
        assert_eq!(snap.ghost_y, Some(18));
    }
}
