//! Shape catalog - static occupancy masks for the 7 piece kinds.
//!
//! Each kind has 4 rotation states encoded as a 4x4 mini-grid flattened into
//! 16 row-major characters ('#' = occupied). The states of a kind differ only
//! by 90-degree rotation of the occupied cells, never by translation, which
//! the kick logic in [`crate::placement`] relies on.

use blockfall_types::{PieceKind, Rotation};

/// One rotation state: 16 chars, row-major.
pub type Mask = &'static str;

const SHAPES: [[Mask; 4]; 7] = [
    // I
    [
        concat!("....", "####", "....", "...."),
        concat!("..#.", "..#.", "..#.", "..#."),
        concat!("....", "....", "####", "...."),
        concat!(".#..", ".#..", ".#..", ".#.."),
    ],
    // J
    [
        concat!("#...", "###.", "....", "...."),
        concat!(".##.", ".#..", ".#..", "...."),
        concat!("....", "###.", "..#.", "...."),
        concat!(".#..", ".#..", "##..", "...."),
    ],
    // L
    [
        concat!("..#.", "###.", "....", "...."),
        concat!(".#..", ".#..", ".##.", "...."),
        concat!("....", "###.", "#...", "...."),
        concat!("##..", ".#..", ".#..", "...."),
    ],
    // O
    [
        concat!(".##.", ".##.", "....", "...."),
        concat!(".##.", ".##.", "....", "...."),
        concat!(".##.", ".##.", "....", "...."),
        concat!(".##.", ".##.", "....", "...."),
    ],
    // S
    [
        concat!(".##.", "##..", "....", "...."),
        concat!(".#..", ".##.", "..#.", "...."),
        concat!("....", ".##.", "##..", "...."),
        concat!("#...", "##..", ".#..", "...."),
    ],
    // T
    [
        concat!(".#..", "###.", "....", "...."),
        concat!(".#..", ".##.", ".#..", "...."),
        concat!("....", "###.", ".#..", "...."),
        concat!(".#..", "##..", ".#..", "...."),
    ],
    // Z
    [
        concat!("##..", ".##.", "....", "...."),
        concat!("..#.", ".##.", ".#..", "...."),
        concat!("....", "##..", ".##.", "...."),
        concat!(".#..", "##..", "#...", "...."),
    ],
];

/// Raw mask for a kind and rotation. Total for all enum inputs.
pub fn mask(kind: PieceKind, rotation: Rotation) -> Mask {
    SHAPES[kind.index()][rotation.index()]
}

/// Mini-grid offsets of the 4 occupied cells, row-major order.
pub fn cell_offsets(kind: PieceKind, rotation: Rotation) -> [(i8, i8); 4] {
    let mut out = [(0i8, 0i8); 4];
    let mut found = 0usize;
    for (idx, byte) in mask(kind, rotation).bytes().enumerate() {
        if byte == b'#' {
            if found < 4 {
                out[found] = ((idx % 4) as i8, (idx / 4) as i8);
            }
            found += 1;
        }
    }
    debug_assert_eq!(found, 4, "catalog mask must occupy exactly 4 cells");
    out
}
