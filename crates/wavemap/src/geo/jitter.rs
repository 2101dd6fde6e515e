//! Pin jitter for same-country projects.
//!
//! The first project of a country sits exactly on its base coordinate.
//! Every subsequent one is pushed off the base by a bounded offset so pins
//! stay individually clickable instead of stacking. The offset magnitude is
//! drawn from a [`JitterSource`], which keeps the randomness swappable: the
//! CLI uses a thread RNG, a seed in the config selects a reproducible RNG,
//! and tests pin the magnitude entirely.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of jitter magnitudes.
pub trait JitterSource: std::fmt::Debug {
    /// Draw a magnitude inside `[min, max]` percent.
    fn magnitude(&mut self, min: f64, max: f64) -> f64;
}

/// Jitter drawn from the thread-local RNG.
#[derive(Debug, Clone)]
pub struct RandomJitter {
    rng: ThreadRng,
}

impl RandomJitter {
    /// Create a jitter source backed by the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for RandomJitter {
    fn magnitude(&mut self, min: f64, max: f64) -> f64 {
        self.rng.random_range(min..=max)
    }
}

/// Reproducible jitter from a fixed seed.
///
/// Two scans with the same seed over the same tree place every pin
/// identically.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    /// Create a seeded jitter source.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl JitterSource for SeededJitter {
    fn magnitude(&mut self, min: f64, max: f64) -> f64 {
        self.rng.random_range(min..=max)
    }
}

/// Jitter at a fixed fraction of the band, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter {
    /// Position inside the band, `0.0` = min, `1.0` = max.
    fraction: f64,
}

impl FixedJitter {
    /// Create a fixed jitter source at the given band fraction.
    ///
    /// The fraction is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
        }
    }
}

impl JitterSource for FixedJitter {
    fn magnitude(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.fraction
    }
}

/// Compute the pin offset for the nth same-country project.
///
/// `occurrence` is how many projects of the same country were already
/// placed this scan. Zero means this is the first one and the offset is
/// exactly `(0, 0)`. After that the x sign flips with the parity of the
/// occurrence and the y sign with the parity of half the occurrence, so
/// successive pins walk the four quadrants around the base instead of
/// drifting along one diagonal.
pub fn fan_offset(
    occurrence: usize,
    min: f64,
    max: f64,
    source: &mut dyn JitterSource,
) -> (f64, f64) {
    if occurrence == 0 {
        return (0.0, 0.0);
    }
    let sign_x = if occurrence % 2 == 1 { 1.0 } else { -1.0 };
    let sign_y = if occurrence.div_ceil(2) % 2 == 1 {
        1.0
    } else {
        -1.0
    };
    (
        sign_x * source.magnitude(min, max),
        sign_y * source.magnitude(min, max),
    )
}
