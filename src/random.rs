use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform integer source used by every question generator
pub trait RandomSource {
    /// Returns a value in `[low, high)`. Callers guarantee `low < high`.
    fn next(&mut self, low: i64, high: i64) -> i64;
}

/// Production source backed by `StdRng`
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible stream, used for `--seed`
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRandom {
    fn next(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..high)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Each value is folded into the requested range, so a script of
/// in-range values comes back verbatim.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<i64>,
    pos: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values, pos: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next(&mut self, low: i64, high: i64) -> i64 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        let span = high - low;
        low + (value - low).rem_euclid(span)
    }
}
