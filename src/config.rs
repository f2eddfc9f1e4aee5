use crate::error::{BenchError, BenchResult};
use crate::scenario::Scenario;

pub const DEFAULT_SIZES: [usize; 5] = [1_000, 5_000, 10_000, 50_000, 100_000];

/// k = 1..=20 followed by a few larger powers of two.
pub fn default_step_ks() -> Vec<usize> {
    (1..=20).chain([32, 64, 128, 256]).collect()
}

/// How many timed detector runs a trial averages over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationPolicy {
    /// Repeats for lists up to `threshold` nodes.
    pub small: usize,
    /// Repeats for lists above `threshold` nodes.
    pub large: usize,
    pub threshold: usize,
}

impl Default for IterationPolicy {
    fn default() -> Self {
        Self {
            small: 500,
            large: 50,
            threshold: 10_000,
        }
    }
}

impl IterationPolicy {
    pub fn iterations_for(&self, n: usize) -> usize {
        if n > self.threshold {
            self.large
        } else {
            self.small
        }
    }
}

/// The benchmark matrix: every size is combined with every scenario and
/// every step multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub scenarios: Vec<Scenario>,
    pub step_ks: Vec<usize>,
    pub iterations: IterationPolicy,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            scenarios: Scenario::ALL.to_vec(),
            step_ks: default_step_ks(),
            iterations: IterationPolicy::default(),
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> BenchResult<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::EmptyMatrix("sizes"));
        }
        if self.scenarios.is_empty() {
            return Err(BenchError::EmptyMatrix("scenarios"));
        }
        if self.step_ks.is_empty() {
            return Err(BenchError::EmptyMatrix("step multipliers"));
        }
        if let Some(&k) = self
            .step_ks
            .iter()
            .find(|&&k| k == 0 || k.checked_mul(2).is_none())
        {
            return Err(BenchError::InvalidStepK(k));
        }
        if self.iterations.small == 0 || self.iterations.large == 0 {
            return Err(BenchError::ZeroIterations);
        }
        Ok(())
    }

    /// Number of rows a full run emits.
    pub fn trial_count(&self) -> usize {
        self.sizes.len() * self.scenarios.len() * self.step_ks.len()
    }
}
