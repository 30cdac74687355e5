//! Adversarial next-piece selection.
//!
//! After every lock the session asks this module which kind to spawn next.
//! The search is exhaustive and synchronous: every (kind, rotation, column)
//! candidate is hard-dropped against the current board, locked into a board
//! clone without clearing, and the clone is scored by a pluggable policy.
//! The candidate with the strictly highest score wins, so ties resolve to
//! the earliest candidate in iteration order (kind ascending, then rotation,
//! then column). Only the winning kind is carried forward; the session
//! respawns it at the standard spawn cell in spawn orientation.
//!
//! Cost per call is bounded: 7 kinds x 4 rotations x 12 columns, each a
//! straight-down drop plus a full-board scan. That fits comfortably inside
//! one frame, which is why the search runs inline at the lock boundary.

use blockfall_types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_Y};

use crate::board::Board;
use crate::piece::Piece;
use crate::placement;

/// Scores a hypothetical post-lock board. Higher wins the search.
///
/// Chosen once at session construction; both stock policies below are
/// maximized by the same search, they just disagree about whose side the
/// selector is on.
pub trait ScorePolicy {
    fn score(&self, board: &Board) -> i32;
}

/// Rewards placements that leave full rows ready to clear - despite living
/// in an adversarial search, maximizing this favors the player.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearableLines;

impl ScorePolicy for ClearableLines {
    fn score(&self, board: &Board) -> i32 {
        board.clearable_lines() as i32
    }
}

/// Rewards tall stacks and covered holes: the placement that hurts the
/// player the most wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct HolesAndHeight;

impl ScorePolicy for HolesAndHeight {
    fn score(&self, board: &Board) -> i32 {
        let mut holes = 0i32;
        let mut height = 0i32;
        for x in 0..BOARD_WIDTH as i8 {
            let mut block_seen = false;
            for y in 0..BOARD_HEIGHT as i8 {
                if board.is_occupied(x, y) {
                    block_seen = true;
                    height = height.max(BOARD_HEIGHT as i32 - y as i32);
                } else if block_seen {
                    // empty below a block = hole
                    holes += 1;
                }
            }
        }
        height * 5 + holes * 10
    }
}

/// Pick the kind whose best hard-drop outcome scores highest.
///
/// Columns start at -2 so masks whose leftmost occupied column is offset
/// from the anchor can still reach the wall; candidates that never fit on
/// their column are discarded. If nothing on the board is placeable at all,
/// falls back to the first catalog kind.
pub fn next_kind(board: &Board, policy: &dyn ScorePolicy) -> PieceKind {
    let mut best_kind = PieceKind::ALL[0];
    let mut best_score = -1i32;

    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            for x in -2..BOARD_WIDTH as i8 {
                let mut candidate = Piece {
                    kind,
                    rotation,
                    x,
                    y: SPAWN_Y,
                };
                if !placement::settle(board, &mut candidate) {
                    continue;
                }

                let mut probe = board.clone();
                probe.lock(&candidate);

                let score = policy.score(&probe);
                if score > best_score {
                    best_score = score;
                    best_kind = kind;
                }
            }
        }
    }

    best_kind
}
