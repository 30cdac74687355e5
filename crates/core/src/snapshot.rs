//! Read-only session snapshots for rendering.
//!
//! A snapshot is plain data: a u8 occupancy grid, the active piece's resolved
//! cells, score, and the terminal flag. Renderers own one and refresh it each
//! frame with [`crate::session::Session::snapshot_into`], so the steady-state
//! render loop allocates nothing.

use blockfall_types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// The falling piece as a renderer sees it: kind and orientation for styling,
/// cells already resolved to absolute grid coordinates (some may have a
/// negative row while the piece is still entering the board).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub cells: [(i8, i8); 4],
}

/// Complete visible state of a session at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Locked cells as occupancy tags (0 empty, 1..=7 kind tags), row-major.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// The falling piece, absent between lock and respawn and after game over.
    pub active: Option<ActivePiece>,
    pub score: u32,
    pub game_over: bool,
}

impl SessionSnapshot {
    pub fn new() -> Self {
        Self {
            board: [[0; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            game_over: false,
        }
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
