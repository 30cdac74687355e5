//! Falling-block puzzle engine with an adversarial next-piece selector.
//!
//! The facade re-exports the two workspace crates: [`types`] holds the shared
//! leaf types and tuning constants, [`core`] the board, placement rules,
//! selector, and session state machine. A typical embedding creates a
//! [`core::Session`], calls `start`, then drives it with `apply` and `tick`
//! and renders from `snapshot_into`.

pub use blockfall_core as core;
pub use blockfall_types as types;
