//! Seeded 32-bit PRNG (mulberry32) for reproducible mock data

use rand::{RngCore, SeedableRng};

/// Golden-ratio style increment applied to the accumulator on every draw.
const INCREMENT: u32 = 0x6D2B_79F5;
/// 2^32, maps a u32 onto [0, 1).
const UNIT_SCALE: f64 = 4_294_967_296.0;

/// Counter-based mixing generator over one 32-bit accumulator
///
/// The same seed always yields the same stream, so data generated from it
/// renders identically on every pass.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    seed: u32,
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Mulberry32 { seed, state: seed }
    }

    /// Rewind the stream to its first value
    pub fn restart(&mut self) {
        self.state = self.seed;
    }

    /// Advance the accumulator and return the mixed 32-bit output
    pub fn next_word(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let t = self.state;
        let mut r = (t ^ (t >> 15)).wrapping_mul(1 | t);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(61 | r));
        r ^ (r >> 14)
    }

    /// Next value in [0, 1)
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next_word()) / UNIT_SCALE
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_unit())
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_word());
        let lo = u64::from(self.next_word());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Mulberry32::new(u32::from_le_bytes(seed))
    }
}
