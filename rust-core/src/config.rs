use serde::{Deserialize, Serialize};

use crate::errors::QPointError;

// Constants

// Tolerances
pub const BASE_VECTOR_TOLERANCE: f64 = 1e-10; // For validation of cell matrices
pub const ANGLE_TOLERANCE: f64 = 1e-10; // Minimum distance of a basis angle from 0 or π
pub const CUBIC_RESIDUAL_TOLERANCE: f64 = 1e-6; // For the prune radius root check
pub const DISTANCE_TOLERANCE: f64 = 1e-10; // Slack when checking returned norms against q_max

// Sampling
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_Q_MAX: f64 = 2.0;

/// Parameters for a single q-point sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QPointConfig {
    /// Maximum norm of the generated q-points.
    pub q_max: f64,
    /// Approximate number of q-points to keep. `None` disables pruning.
    pub target_count: Option<usize>,
    /// Seed of the thinning stream.
    pub seed: u64,
}

impl Default for QPointConfig {
    fn default() -> Self {
        QPointConfig {
            q_max: DEFAULT_Q_MAX,
            target_count: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl QPointConfig {
    pub fn new(q_max: f64) -> Self {
        QPointConfig {
            q_max,
            ..Default::default()
        }
    }

    pub fn with_target_count(mut self, target_count: usize) -> Self {
        self.target_count = Some(target_count);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Map a signed count to the config convention: anything `<= 0` disables pruning.
    pub fn with_signed_target(mut self, target_count: i64) -> Self {
        self.target_count = usize::try_from(target_count).ok().filter(|&n| n > 0);
        self
    }

    pub fn validate(&self) -> Result<(), QPointError> {
        if !(self.q_max.is_finite() && self.q_max > 0.0) {
            return Err(QPointError::InvalidCutoff(self.q_max));
        }
        Ok(())
    }
}
