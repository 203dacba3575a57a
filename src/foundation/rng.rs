//! Reproducible pseudo-random numbers for seeding automaton grids.
//!
//! The generator is SplitMix64: a Weyl sequence fed through a 64-bit finaliser. It is not
//! cryptographic, but a given seed always yields the same grid on every platform.

/// Weyl increment, `2^64 / φ` rounded to odd.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// `2^-53`, the spacing of the unit samples.
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Seeded SplitMix64 stream.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        mix(self.state)
    }

    /// Uniform sample in `[0, 1)` built from the top 53 bits.
    pub fn next_f64_01(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * UNIT_SCALE
    }

    /// `true` with probability `p`. `p <= 0` never fires and `p >= 1` always does.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64_01() < p
    }
}

fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
