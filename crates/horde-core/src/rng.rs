//! Seeded random draws for idle variety and scenario setup.
//!
//! One generator lives for the whole simulation so a fixed seed replays the
//! same decisions. Not cryptographic.

/// Upper bound of the per-agent idle draw.
pub const ROLL_MAX: i32 = 1000;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform float in `[0, 1)` from the top 24 bits.
    fn next_f32_unit(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform integer in `lo..=hi`; `lo` when the range is empty.
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (i64::from(hi) - i64::from(lo) + 1) as u64;
        let offset = self.next_u64() % span;
        (i64::from(lo) + offset as i64) as i32
    }

    /// Idle-variety draw in `1..=ROLL_MAX`.
    fn roll_1000(&mut self) -> i32 {
        self.next_in_range(1, ROLL_MAX)
    }
}

/// SplitMix64 generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        mix64(self.state)
    }
}

/// SplitMix64 finalizer.
pub fn mix64(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Independent sub-seed for one `(entity, stream)` pair under a run seed.
///
/// The CLI places spawns on a separate stream so adding agents never shifts
/// the draws the decision pass sees.
pub fn derive_seed(seed: u64, entity: u64, stream: u64) -> u64 {
    mix64(seed ^ mix64(entity.wrapping_add(GOLDEN_GAMMA)) ^ mix64(stream))
}
