//! RNG module - seedable piece selection
//!
//! Sessions draw pieces through the [`PieceSource`] trait so that tests can
//! script exact sequences and games can be replayed from a seed.
//! [`SimpleRng`] is the default source: a small LCG picking each of the seven
//! kinds with equal probability.

use crate::types::Tetromino;

/// Supplies the next piece kind to spawn.
pub trait PieceSource {
    fn next_piece(&mut self) -> Tetromino;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_piece(&mut self) -> Tetromino {
        (**self).next_piece()
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

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for SimpleRng {
    fn next_piece(&mut self) -> Tetromino {
        Tetromino::ALL[self.next_range(Tetromino::ALL.len() as u32) as usize]
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
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_every_kind_is_drawn() {
        let mut rng = SimpleRng::new(42);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            let kind = rng.next_piece();
            let i = Tetromino::ALL.iter().position(|&k| k == kind).unwrap();
            counts[i] += 1;
        }
        // Uniform picks: each kind lands near 1000.
        for (i, &count) in counts.iter().enumerate() {
            assert!(
                (700..1300).contains(&count),
                "kind {:?} drawn {} times",
                Tetromino::ALL[i],
                count
            );
        }
    }

    #[test]
    fn test_boxed_source() {
        let mut boxed: Box<dyn PieceSource> = Box::new(SimpleRng::new(3));
        let mut plain = SimpleRng::new(3);
        assert_eq!(boxed.next_piece(), plain.next_piece());
    }
}
