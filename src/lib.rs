//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine crates under stable paths so hosts can depend on a single
//! package: `blockfall::core` for the rules and `blockfall::types` for shared data.

pub use blockfall_core as core;
pub use blockfall_types as types;
