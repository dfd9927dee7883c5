use anyhow::{ensure, Result};

pub const DEFAULT_EPSILON: f64 = 0.15;
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Parameters of the rank computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankConfig {
    /// Teleportation mass spread uniformly over the corpus.
    pub epsilon: f64,
    /// Iteration stops once consecutive rank vectors are this close.
    pub tolerance: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self { epsilon: DEFAULT_EPSILON, tolerance: DEFAULT_TOLERANCE }
    }
}

impl RankConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.epsilon > 0.0 && self.epsilon <= 1.0,
            "epsilon must be in (0, 1], got {}",
            self.epsilon
        );
        ensure!(self.tolerance > 0.0, "tolerance must be positive, got {}", self.tolerance);
        Ok(())
    }
}
