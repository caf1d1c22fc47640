//! Error types for engine construction
//!
//! Gameplay never fails: rejected moves and rotations leave the state unchanged and
//! game over is a flag. Errors only come from building an engine with a bad
//! configuration.

use thiserror::Error;

/// Errors that can occur while configuring or constructing an engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Rows or columns were zero
    #[error("Invalid board dimensions: {rows}x{columns} (both must be positive)")]
    InvalidDimensions { rows: u16, columns: u16 },

    /// Rows or columns exceed the supported maximum
    #[error("Board dimensions {rows}x{columns} exceed the maximum of {max}")]
    DimensionTooLarge { rows: u16, columns: u16, max: u16 },

    /// A fixed piece sequence must contain at least one piece
    #[error("Fixed piece sequence is empty")]
    EmptySequence,

    /// An environment variable held a value that could not be parsed
    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
}

/// Result type alias for engine construction
pub type Result<T> = std::result::Result<T, EngineError>;
