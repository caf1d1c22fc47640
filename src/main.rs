//! Headless runner (default binary).
//!
//! Plays one game with a deterministic placement policy and prints the final
//! snapshot as JSON. Useful for smoke tests and for comparing seeds.
//!
//! Configuration comes from the engine's `BLOCKFALL_*` variables, plus:
//!
//! - `BLOCKFALL_MAX_PIECES`: stop after this many spawned pieces (default: 500)
//!
//! Log verbosity follows `RUST_LOG` (default: `info`).

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockfall::core::{EngineConfig, GameEngine};
use blockfall::types::GameAction;

const ENV_MAX_PIECES: &str = "BLOCKFALL_MAX_PIECES";
const DEFAULT_MAX_PIECES: u32 = 500;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = EngineConfig::from_env().context("invalid engine configuration")?;
    let max_pieces = match std::env::var(ENV_MAX_PIECES) {
        Ok(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{ENV_MAX_PIECES} must be a number, got {v:?}"))?,
        Err(_) => DEFAULT_MAX_PIECES,
    };

    info!(
        rows = config.rows,
        columns = config.columns,
        seed = config.seed,
        scoring = config.scoring.as_str(),
        "starting headless game"
    );

    let mut game = GameEngine::new(config).context("failed to create engine")?;
    play(&mut game, max_pieces);

    info!(
        score = game.score(),
        level = game.level(),
        lines = game.lines(),
        pieces = game.pieces_spawned(),
        game_over = game.game_over(),
        "finished"
    );

    let json = game
        .snapshot()
        .to_json_pretty()
        .context("failed to serialize snapshot")?;
    println!("{json}");

    Ok(())
}

/// Start the game and place pieces until game over or `max_pieces` have spawned
fn play(game: &mut GameEngine, max_pieces: u32) {
    game.start();
    while !game.game_over() && game.pieces_spawned() < max_pieces {
        let (rotations, x) = choose_placement(game);
        place(game, rotations, x);
    }
}

/// Rotate, shift to column `x`, and hard drop
fn place(game: &mut GameEngine, rotations: usize, x: i16) {
    for _ in 0..rotations {
        game.apply_action(GameAction::Rotate);
    }
    if let Some(piece) = game.current_piece() {
        let dx = x - piece.x;
        let action = if dx < 0 {
            GameAction::MoveLeft
        } else {
            GameAction::MoveRight
        };
        for _ in 0..dx.unsigned_abs() {
            if !game.apply_action(action) {
                break;
            }
        }
    }
    game.apply_action(GameAction::HardDrop);
}

/// Try every rotation and column on a copy of the game; keep the best board
fn choose_placement(game: &GameEngine) -> (usize, i16) {
    let columns = game.board().columns() as i16;
    let mut best = (0, game.current_piece().map_or(0, |p| p.x));
    let mut best_cost = i64::MAX;

    for rotations in 0..4 {
        for x in 0..columns {
            let mut trial = game.clone();
            place(&mut trial, rotations, x);
            let cost = board_cost(&trial);
            if cost < best_cost {
                best_cost = cost;
                best = (rotations, x);
            }
        }
    }
    best
}

/// Lower is better: penalize game over, stack height, and covered holes
fn board_cost(game: &GameEngine) -> i64 {
    if game.game_over() {
        return i64::MAX - 1;
    }
    let grid = game.board().to_tag_grid();
    let rows = grid.len();
    let columns = grid.first().map_or(0, Vec::len);

    let mut height_sum = 0i64;
    let mut holes = 0i64;
    for x in 0..columns {
        let top = (0..rows).find(|&y| grid[y][x] != 0);
        if let Some(top) = top {
            height_sum += (rows - top) as i64;
            holes += (top..rows).filter(|&y| grid[y][x] == 0).count() as i64;
        }
    }

    height_sum + holes * 8 - game.lines() as i64 * 40
}
