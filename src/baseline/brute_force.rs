//! Exhaustive enumeration.

use tracing::info;

use crate::error::{Result, ValidationError};
use crate::problem::{Permutations, ProblemInstance, Sequence};

/// Result of an exhaustive enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BruteForceResult {
    /// Lexicographically first optimal sequence.
    pub best: Sequence,
    /// Optimal objective value.
    pub best_value: u64,
    /// Number of sequences attaining `best_value` (including `best`).
    pub optimal_count: usize,
    /// Number of sequences evaluated (`n!`).
    pub evaluated: usize,
}

/// Evaluates every permutation; ground truth for small instances.
pub struct BruteForce;

impl BruteForce {
    /// Largest instance accepted (10! = 3 628 800 evaluations).
    pub const MAX_JOBS: usize = 10;

    /// Enumerates all sequences in lexicographic order.
    ///
    /// # Errors
    ///
    /// [`ValidationError::TooManyJobs`] above [`BruteForce::MAX_JOBS`].
    pub fn run(instance: &ProblemInstance) -> Result<BruteForceResult> {
        let n = instance.len();
        if n > Self::MAX_JOBS {
            return Err(ValidationError::TooManyJobs {
                jobs: n,
                max: Self::MAX_JOBS,
            }
            .into());
        }

        let mut best = Sequence::identity(n);
        let mut best_value = instance.evaluate(&best);
        let mut optimal_count = 0;
        let mut evaluated = 0;

        for seq in Permutations::new(n) {
            let value = instance.evaluate(&seq);
            evaluated += 1;
            if value < best_value {
                best = seq;
                best_value = value;
                optimal_count = 1;
            } else if value == best_value {
                optimal_count += 1;
            }
        }

        info!(
            event = "brute_force_end",
            evaluated,
            best = best_value,
            optimal_count,
        );

        Ok(BruteForceResult {
            best,
            best_value,
            optimal_count,
            evaluated,
        })
    }
}
