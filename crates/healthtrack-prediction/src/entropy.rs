//! Entropy sources feeding the per-class probability draws.

use rand::rngs::StdRng;
use rand::Rng;

/// Supplies uniform samples in `[0, 1)`.
pub trait EntropySource: Send {
    fn next_unit(&mut self) -> f64;
}

impl EntropySource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
///
/// Samples outside `[0, 1)` are clamped when drawn.
#[derive(Debug, Clone)]
pub struct SequenceEntropy {
    values: Vec<f64>,
    next: usize,
}

impl SequenceEntropy {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }

    /// Every draw returns the same sample.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl EntropySource for SequenceEntropy {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next = self.next.wrapping_add(1);
        value
    }
}
