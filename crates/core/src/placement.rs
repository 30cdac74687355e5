//! Placement rules - collision checks, moves, rotation with wall kicks,
//! and the straight-down drop shared by gravity, hard drops, and the
//! adversarial selector's simulations.

use blockfall_types::{BOARD_HEIGHT, BOARD_WIDTH, KICK_OFFSETS};

use crate::board::Board;
use crate::piece::Piece;

/// True iff every cell of the piece is legal: inside the side walls, above
/// the floor, and either still above the top row or on an empty cell. Rows
/// above the top are never checked against the grid, which is what lets a
/// piece spawn before it has dropped into view.
pub fn can_place(board: &Board, piece: &Piece) -> bool {
    piece.cells().iter().all(|&(x, y)| {
        x >= 0 && x < BOARD_WIDTH as i8 && y < BOARD_HEIGHT as i8 && (y < 0 || !board.is_occupied(x, y))
    })
}

/// Commit a translation if the destination is legal. Illegal moves leave the
/// piece untouched and report false; they are not errors.
pub fn try_move(board: &Board, piece: &mut Piece, dx: i8, dy: i8) -> bool {
    let candidate = piece.translated(dx, dy);
    if can_place(board, &candidate) {
        *piece = candidate;
        return true;
    }
    false
}

/// Rotate with wall kicks.
///
/// A rotated copy is shifted by each kick offset in the fixed priority order
/// and the first placeable candidate replaces the piece. If all five fail the
/// piece is left unmodified.
pub fn try_rotate(board: &Board, piece: &mut Piece, clockwise: bool) -> bool {
    let turned = piece.rotated(clockwise);
    for dx in KICK_OFFSETS {
        let candidate = turned.translated(dx, 0);
        if can_place(board, &candidate) {
            *piece = candidate;
            return true;
        }
    }
    false
}

/// Drop the piece straight down to the last legal row.
///
/// Descends while the current position is placeable, then backs up one row.
/// Reports whether the settled position is legal; a candidate that was never
/// placeable on its column ends up illegal and must be discarded by the
/// caller.
pub fn settle(board: &Board, piece: &mut Piece) -> bool {
    while can_place(board, piece) {
        piece.y += 1;
    }
    piece.y -= 1;
    can_place(board, piece)
}
