//! Core game logic: board state, the shape catalog, placement rules,
//! adversarial piece selection, and the session state machine.
//!
//! Everything here is synchronous and deterministic. The crate performs no
//! I/O and, outside of session construction, no allocation; a frontend owns
//! a [`Session`], feeds it intents and elapsed time, and renders from
//! snapshots.

pub mod board;
pub mod piece;
pub mod placement;
pub mod rng;
pub mod selector;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use selector::{next_kind, ClearableLines, HolesAndHeight, ScorePolicy};
pub use session::Session;
pub use snapshot::{ActivePiece, SessionSnapshot};
