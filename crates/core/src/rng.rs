//! RNG module - injectable random source for spawn placement
//!
//! The game never reaches for ambient global randomness. A [`RandomSource`] is
//! handed to [`crate::GameManager`] at construction and owned by it from then on.
//!
//! [`SimpleRng`] is the default source: a small LCG that is fully deterministic for
//! a given seed, which keeps replays and tests reproducible.

/// A source of uniformly distributed integers
pub trait RandomSource {
    /// Random value in range `[0, max)`. `max` is never zero.
    fn next_range(&mut self, max: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (usable as a seed to replay from here)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG are weak; take the high half.
        (self.next_u32() >> 16) % max.max(1)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(42);
        for max in [1, 2, 5, 7, 40] {
            for _ in 0..200 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_next_range_covers_small_range() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 5];
        for _ in 0..200 {
            seen[rng.next_range(5) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every value in 0..5 should appear: {seen:?}");
    }

    #[test]
    fn test_borrowed_source_advances_owner() {
        let mut rng = SimpleRng::new(99);
        let before = rng.state();

        fn draw<R: RandomSource>(mut source: R) -> u32 {
            source.next_range(10)
        }
        draw(&mut rng);
        assert_ne!(rng.state(), before);
    }
}
