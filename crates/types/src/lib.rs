//! Shared leaf types and tuning constants.
//! Pure data with no external dependencies.

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Number of piece kinds in the catalog
pub const PIECE_KIND_COUNT: usize = 7;

/// Spawn anchor for a fresh piece: the top-left of its 4x4 mask.
/// The spawn row sits above the visible board, so the piece drops into view.
pub const SPAWN_X: i8 = BOARD_WIDTH as i8 / 2 - 2;
pub const SPAWN_Y: i8 = -2;

/// Horizontal offsets tried after a rotation, in priority order.
/// Which near-wall rotations succeed depends on this exact order.
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// Points per cleared-line count; counts above 4 clamp to the last entry.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Gravity cadence (milliseconds): the interval shrinks as score grows,
/// bounded below so high scores never produce a runaway drop rate.
pub const BASE_DROP_MS: u32 = 600;
pub const MIN_DROP_MS: u32 = 400;

/// Piece kinds, in catalog order.
///
/// The ordering is load-bearing: the adversarial selector iterates kinds by
/// ascending index and breaks ties toward the lowest index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Catalog index, 0..7.
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Kind for a catalog index; indices wrap modulo the catalog size so an
    /// out-of-range index cannot occur.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % PIECE_KIND_COUNT]
    }

    /// Occupancy tag written into board cells and snapshots (1..=7; 0 is empty).
    pub fn tag(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All rotations, in index order.
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotation state index, 0..4.
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotate clockwise
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Discrete player commands accepted by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
}

/// Cell on the board (None = empty, Some = locked with the originating kind)
pub type Cell = Option<PieceKind>;
