//! Game session - the state machine tying board, placement, gravity, and the
//! adversarial selector together.
//!
//! A session is driven from outside by two calls: [`Session::apply`] for
//! player intents and [`Session::tick`] for elapsed time. Both are total:
//! illegal intents are ignored rather than reported as errors, and every call
//! after game over is a no-op. The first piece is drawn from a seeded RNG;
//! every later piece comes from the selector, so a session is fully
//! deterministic given its seed and input sequence.

use blockfall_types::{Intent, PieceKind, BASE_DROP_MS, MIN_DROP_MS, PIECE_KIND_COUNT};

use crate::board::Board;
use crate::piece::Piece;
use crate::placement;
use crate::rng::SimpleRng;
use crate::selector::{self, ClearableLines, ScorePolicy};
use crate::snapshot::{ActivePiece, SessionSnapshot};

/// A single game from seed to game over.
pub struct Session {
    board: Board,
    current: Option<Piece>,
    rng: SimpleRng,
    policy: Box<dyn ScorePolicy>,
    drop_timer_ms: u32,
    started: bool,
}

impl Session {
    /// New idle session with the default selection policy. Call
    /// [`Session::start`] to spawn the first piece.
    pub fn new(seed: u32) -> Self {
        Self::with_policy(seed, Box::new(ClearableLines))
    }

    /// New idle session scoring selector candidates with `policy`.
    pub fn with_policy(seed: u32, policy: Box<dyn ScorePolicy>) -> Self {
        Self {
            board: Board::new(),
            current: None,
            rng: SimpleRng::new(seed),
            policy,
            drop_timer_ms: 0,
            started: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups (puzzle starts, tests).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn game_over(&self) -> bool {
        self.board.game_over()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Spawn the first piece. The only randomized draw of the whole session;
    /// repeated calls do nothing.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        let kind = PieceKind::from_index(self.rng.next_range(PIECE_KIND_COUNT as u32) as usize);
        self.spawn(kind);
    }

    /// Current gravity interval. Shrinks linearly with score down to the
    /// fixed floor.
    pub fn drop_interval_ms(&self) -> u32 {
        BASE_DROP_MS
            .saturating_sub(self.board.score() / 2)
            .max(MIN_DROP_MS)
    }

    /// Apply one player intent. Returns whether the piece changed; illegal
    /// intents (blocked moves, failed rotations, intents while no piece is
    /// falling or after game over) are silently ignored.
    pub fn apply(&mut self, intent: Intent) -> bool {
        if self.board.game_over() {
            return false;
        }
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        match intent {
            Intent::MoveLeft => placement::try_move(&self.board, piece, -1, 0),
            Intent::MoveRight => placement::try_move(&self.board, piece, 1, 0),
            Intent::SoftDrop => placement::try_move(&self.board, piece, 0, 1),
            Intent::RotateCw => placement::try_rotate(&self.board, piece, true),
            Intent::RotateCcw => placement::try_rotate(&self.board, piece, false),
            Intent::HardDrop => {
                // The falling piece is always placeable, so the drop cannot
                // fail; locking immediately also restarts the gravity clock.
                placement::settle(&self.board, piece);
                self.lock_and_respawn();
                self.drop_timer_ms = 0;
                true
            }
        }
    }

    /// Advance the gravity clock by `elapsed_ms` and perform at most one
    /// gravity step. A step that cannot descend locks the piece instead.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.board.game_over() || self.current.is_none() {
            return;
        }
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.drop_interval_ms() {
            return;
        }
        self.drop_timer_ms = 0;
        let Some(piece) = self.current.as_mut() else {
            return;
        };
        if !placement::try_move(&self.board, piece, 0, 1) {
            self.lock_and_respawn();
        }
    }

    /// Fill `out` with the current visible state without allocating.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.current.map(|piece| ActivePiece {
            kind: piece.kind,
            rotation: piece.rotation,
            cells: piece.cells(),
        });
        out.score = self.board.score();
        out.game_over = self.board.game_over();
    }

    /// Allocate-and-fill convenience wrapper around `snapshot_into`.
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut out = SessionSnapshot::new();
        self.snapshot_into(&mut out);
        out
    }

    fn spawn(&mut self, kind: PieceKind) {
        let piece = Piece::spawn(kind);
        if placement::can_place(&self.board, &piece) {
            self.current = Some(piece);
        } else {
            self.current = None;
            self.board.mark_game_over();
        }
    }

    /// Commit the falling piece and bring in its successor: lock, clear full
    /// rows, ask the selector for the next kind, spawn it. Locking may itself
    /// end the game (piece never fully entered the board), in which case no
    /// successor spawns.
    fn lock_and_respawn(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };
        self.board.lock(&piece);
        if self.board.game_over() {
            return;
        }
        self.board.clear_lines();
        let kind = selector::next_kind(&self.board, self.policy.as_ref());
        self.spawn(kind);
    }
}
