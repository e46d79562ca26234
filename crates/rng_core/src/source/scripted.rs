//! Fixed-script source for deterministic tests.

use super::RandomSource;

/// Replays a fixed list of samples, cycling when exhausted.
///
/// Lets tests pin the exact sample fed into the sampling formulas. Values
/// must already lie in [0, 1); an empty script yields `0.0`.
///
/// # Examples
///
/// ```rust
/// use rng_core::source::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(vec![0.1, 0.9]);
/// assert_eq!(source.next_unit(), 0.1);
/// assert_eq!(source.next_unit(), 0.9);
/// assert_eq!(source.next_unit(), 0.1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    values: Vec<f64>,
    index: usize,
}

impl ScriptedSource {
    /// Creates a source replaying `values` in order.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        debug_assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "scripted samples must lie in [0, 1)"
        );
        Self { values, index: 0 }
    }

    /// Number of samples drawn so far.
    #[inline]
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}
