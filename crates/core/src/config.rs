//! Engine configuration
//!
//! Defaults describe the classic 20x10 game. A host can override any field in code
//! or through environment variables:
//!
//! - `BLOCKFALL_ROWS`: board height (default: 20)
//! - `BLOCKFALL_COLUMNS`: board width (default: 10)
//! - `BLOCKFALL_SEED`: RNG seed (default: 1)
//! - `BLOCKFALL_RANDOMIZER`: `bag` or `uniform` (default: `bag`)
//! - `BLOCKFALL_SCORING`: `per-line` or `per-clear` (default: `per-line`)

use crate::error::{EngineError, Result};
use crate::rng::Randomizer;
use crate::scoring::ScoringRule;
use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_DIMENSION};

pub const ENV_ROWS: &str = "BLOCKFALL_ROWS";
pub const ENV_COLUMNS: &str = "BLOCKFALL_COLUMNS";
pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_RANDOMIZER: &str = "BLOCKFALL_RANDOMIZER";
pub const ENV_SCORING: &str = "BLOCKFALL_SCORING";

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub rows: u16,
    pub columns: u16,
    pub seed: u32,
    pub randomizer: Randomizer,
    pub scoring: ScoringRule,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            seed: 1,
            randomizer: Randomizer::Bag,
            scoring: ScoringRule::PerLine,
        }
    }
}

impl EngineConfig {
    /// Default configuration with explicit dimensions
    pub fn with_size(rows: u16, columns: u16) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Builder-style seed override
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Builder-style randomizer override
    pub fn randomizer(mut self, randomizer: Randomizer) -> Self {
        self.randomizer = randomizer;
        self
    }

    /// Builder-style scoring override
    pub fn scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup; unset keys keep their defaults
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup(ENV_ROWS) {
            config.rows = parse_var(ENV_ROWS, &v, |s| s.parse().ok())?;
        }
        if let Some(v) = lookup(ENV_COLUMNS) {
            config.columns = parse_var(ENV_COLUMNS, &v, |s| s.parse().ok())?;
        }
        if let Some(v) = lookup(ENV_SEED) {
            config.seed = parse_var(ENV_SEED, &v, |s| s.parse().ok())?;
        }
        if let Some(v) = lookup(ENV_RANDOMIZER) {
            config.randomizer = parse_var(ENV_RANDOMIZER, &v, Randomizer::from_str)?;
        }
        if let Some(v) = lookup(ENV_SCORING) {
            config.scoring = parse_var(ENV_SCORING, &v, ScoringRule::from_str)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check dimensions and piece sequence
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(EngineError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.rows > MAX_DIMENSION || self.columns > MAX_DIMENSION {
            return Err(EngineError::DimensionTooLarge {
                rows: self.rows,
                columns: self.columns,
                max: MAX_DIMENSION,
            });
        }
        if matches!(&self.randomizer, Randomizer::Sequence(seq) if seq.is_empty()) {
            return Err(EngineError::EmptySequence);
        }
        Ok(())
    }
}

fn parse_var<T>(key: &'static str, raw: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
    parse(raw.trim()).ok_or_else(|| EngineError::InvalidEnv {
        key,
        value: raw.to_string(),
    })
}
