//! Tabu Search configuration.

use crate::error::ValidationError;

/// What to do when no neighbor is eligible.
///
/// Without an aspiration criterion, every neighbor can be tabu at once
/// (this needs `tenure >= n(n-1)/2`), and a single-job sequence has no
/// neighbors at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StallPolicy {
    /// Keep the current sequence and record nothing. The iteration still
    /// counts against the budget and is marked as stalled in the trace.
    #[default]
    Hold,
    /// Take the first generated neighbor even though its move is tabu.
    FirstNeighbor,
}

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_tardiness::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(50)
///     .with_tabu_tenure(5);
/// assert_eq!(config.max_iterations, 50);
/// assert_eq!(config.tabu_tenure, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TabuConfig {
    /// Number of iterations to run. This is the only termination condition.
    pub max_iterations: usize,
    /// How many of the most recent moves are forbidden.
    pub tabu_tenure: usize,
    /// Behavior when every neighbor is tabu.
    pub stall_policy: StallPolicy,
    /// Whether to score neighbors in parallel using rayon.
    ///
    /// Only effective with the `parallel` feature. Selection order is the
    /// same either way.
    pub parallel: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            tabu_tenure: 3,
            stall_policy: StallPolicy::default(),
            parallel: false,
        }
    }
}

impl TabuConfig {
    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure (capacity of the tabu list).
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the stall policy.
    pub fn with_stall_policy(mut self, policy: StallPolicy) -> Self {
        self.stall_policy = policy;
        self
    }

    /// Enables or disables parallel neighbor scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tabu_tenure == 0 {
            return Err(ValidationError::NonPositiveTenure);
        }
        if self.max_iterations == 0 {
            return Err(ValidationError::NonPositiveIterations);
        }
        Ok(())
    }
}
