//! Piece instances: a kind, a rotation state, and a grid anchor.
//!
//! The anchor is the grid coordinate of the top-left of the piece's 4x4 mask.
//! A negative anchor row is legal while the piece is still above the visible
//! board (spawn position).

use blockfall_types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y};

use crate::shapes;

/// A falling (or candidate) piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A fresh piece at the standard spawn cell, in spawn orientation.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Absolute grid coordinates of the 4 occupied cells.
    pub fn cells(&self) -> [(i8, i8); 4] {
        shapes::cell_offsets(self.kind, self.rotation).map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Translated candidate. No legality check; callers validate with
    /// [`crate::placement::can_place`] before committing.
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Rotated candidate (pure state advance, no kick, no legality check).
    pub fn rotated(&self, clockwise: bool) -> Self {
        let rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
        Self { rotation, ..*self }
    }
}
