//! `rand`-backed implementation of the [`RandomSource`] port.

use chainbot_domain::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source wrapping any [`rand::Rng`]
#[derive(Debug, Clone)]
pub struct RngRandomSource<R> {
    rng: R,
}

impl RngRandomSource<StdRng> {
    /// Seeded from OS entropy; answers vary from run to run
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed seed; the same questions produce the same answers
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng + Send> RandomSource for RngRandomSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_in_range() {
        let mut rng = RngRandomSource::from_entropy();
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
            assert!(rng.index(7) < 7);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RngRandomSource::seeded(42);
        let mut b = RngRandomSource::seeded(42);
        let left: Vec<usize> = (0..20).map(|_| a.index(100)).collect();
        let right: Vec<usize> = (0..20).map(|_| b.index(100)).collect();
        assert_eq!(left, right);
    }
}
