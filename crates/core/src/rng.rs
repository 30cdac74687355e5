//! RNG module - a small deterministic generator for the session's first
//! piece.
//!
//! Every piece after the first comes from the adversarial selector, so the
//! only randomness in a session is this one draw. The generator is owned by
//! the session and seeded explicitly, which makes whole games replayable in
//! tests.

/// Linear congruential generator with the Numerical Recipes constants.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero seed would yield a fixed sequence start; remap it.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Next value of the sequence: state = state * 1664525 + 1013904223 mod 2^32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform-ish draw in [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}
