//! Randomness port.
//!
//! Selection and chain walking draw from a [`RandomSource`] handed in by
//! the caller. Production code uses an `rand`-backed implementation from
//! the infrastructure layer; tests use [`ScriptedRandom`] to pin exact
//! outputs.

/// Source of uniform random numbers
pub trait RandomSource: Send {
    /// Uniform value in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index() called with empty range");
        let i = (self.next_f64() * len as f64) as usize;
        i.min(len.saturating_sub(1))
    }
}

/// Replays a fixed sequence of values in `[0, 1)`, cycling when exhausted
///
/// # Example
///
/// ```
/// use chainbot_domain::random::{RandomSource, ScriptedRandom};
///
/// let mut rng = ScriptedRandom::new(vec![0.0, 0.99]);
/// assert_eq!(rng.index(4), 0);
/// assert_eq!(rng.index(4), 3);
/// assert_eq!(rng.index(4), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Always yields the same value
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_cycles() {
        let mut rng = ScriptedRandom::new(vec![0.25, 0.75]);
        assert_eq!(rng.next_f64(), 0.25);
        assert_eq!(rng.next_f64(), 0.75);
        assert_eq!(rng.next_f64(), 0.25);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_index_stays_in_range() {
        let mut rng = ScriptedRandom::constant(1.0);
        assert_eq!(rng.index(3), 2);
        assert_eq!(rng.index(1), 0);
    }

    #[test]
    fn test_empty_script_yields_zero() {
        let mut rng = ScriptedRandom::new(Vec::new());
        assert_eq!(rng.next_f64(), 0.0);
        assert_eq!(rng.index(5), 0);
    }
}
