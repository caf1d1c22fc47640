//! Scoring module - line-clear rewards and level progression
//!
//! Scoring is deliberately simple:
//! - A freeze that clears lines is worth `LINE_CLEAR_POINTS` per line
//!   ([`ScoringRule::PerLine`]) or a flat `LINE_CLEAR_POINTS` no matter how many lines
//!   went at once ([`ScoringRule::PerClear`]).
//! - There are no drop points, combos or multi-line bonuses, so the score is always a
//!   multiple of `LINE_CLEAR_POINTS`.
//! - The level goes up by one for every `LEVEL_SCORE_STEP` boundary the score crosses.

use crate::types::{DROP_INTERVALS, DROP_INTERVAL_FLOOR_MS, LEVEL_SCORE_STEP, LINE_CLEAR_POINTS, START_LEVEL};

/// How a line-clear event is rewarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringRule {
    /// `LINE_CLEAR_POINTS` for every line cleared by the freeze
    #[default]
    PerLine,
    /// `LINE_CLEAR_POINTS` once per freeze that clears anything
    PerClear,
}

impl ScoringRule {
    /// Parse `per-line` / `per-clear` (case-insensitive, `_` accepted)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "per-line" | "line" => Some(ScoringRule::PerLine),
            "per-clear" | "clear" | "flat" => Some(ScoringRule::PerClear),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringRule::PerLine => "per-line",
            ScoringRule::PerClear => "per-clear",
        }
    }
}

/// Score calculation result for one freeze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub points: u32,
    pub score: u32,
    pub level: u32,
    /// Number of level boundaries crossed by this award
    pub levels_gained: u32,
}

/// Points for clearing `lines` lines in a single freeze
pub fn line_clear_points(lines: usize, rule: ScoringRule) -> u32 {
    if lines == 0 {
        return 0;
    }
    match rule {
        ScoringRule::PerLine => LINE_CLEAR_POINTS.saturating_mul(lines as u32),
        ScoringRule::PerClear => LINE_CLEAR_POINTS,
    }
}

/// Number of `LEVEL_SCORE_STEP` boundaries crossed going from `before` to `after`
pub fn boundaries_crossed(before: u32, after: u32) -> u32 {
    (after / LEVEL_SCORE_STEP).saturating_sub(before / LEVEL_SCORE_STEP)
}

/// Highest reachable score, the largest multiple of `LINE_CLEAR_POINTS` in a `u32`
pub const MAX_SCORE: u32 = u32::MAX - u32::MAX % LINE_CLEAR_POINTS;

/// Apply a line clear to the running score and level
///
/// The score stops at [`MAX_SCORE`]; points past the cap are not awarded.
pub fn award(score: u32, level: u32, lines: usize, rule: ScoringRule) -> ScoreResult {
    let new_score = score
        .saturating_add(line_clear_points(lines, rule))
        .min(MAX_SCORE)
        .max(score);
    let points = new_score - score;
    let levels_gained = boundaries_crossed(score, new_score);

    ScoreResult {
        points,
        score: new_score,
        level: level + levels_gained,
        levels_gained,
    }
}

/// Level implied by a score on a fresh game
pub fn calculate_level(score: u32) -> u32 {
    START_LEVEL + score / LEVEL_SCORE_STEP
}

/// Get drop interval for a level (in milliseconds)
///
/// The engine never schedules anything itself; this is a hint for the tick driver.
pub fn drop_interval_ms(level: u32) -> u32 {
    let idx = level.saturating_sub(START_LEVEL) as usize;
    DROP_INTERVALS
        .get(idx)
        .copied()
        .unwrap_or(DROP_INTERVAL_FLOOR_MS)
}
