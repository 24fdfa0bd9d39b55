//! Greedy (best-improvement) descent.

use tracing::{debug, info};

use crate::error::{Result, ValidationError};
use crate::neighborhood::{neighbors, scan_best};
use crate::problem::{Permutations, ProblemInstance, Sequence};

use super::brute_force::BruteForce;

/// Result of one descent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyResult {
    /// Final sequence.
    pub best: Sequence,
    /// Its objective value.
    pub best_value: u64,
    /// Number of improving moves applied.
    pub iterations: usize,
    /// Whether the descent stopped on the iteration limit rather than at a
    /// local minimum.
    pub hit_limit: bool,
}

/// Aggregate statistics of descents started from every permutation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedySurvey {
    /// Number of starting sequences (`n!`).
    pub starts: usize,
    /// Descents that ended at a local minimum.
    pub local_minima: usize,
    /// Descents stopped by the iteration limit.
    pub limit_reached: usize,
    /// Mean final value over all starts.
    pub average_value: f64,
    /// Improving moves of descents that reached a local minimum, divided by
    /// all starts.
    pub average_iterations: f64,
}

/// Best-improvement descent over the swap neighborhood, without memory.
pub struct GreedyDescent;

impl GreedyDescent {
    /// Descends from `start` until no neighbor strictly improves or
    /// `max_iterations` improving moves were applied.
    ///
    /// The best neighbor is chosen with the same tie rule as tabu search
    /// ([`scan_best`]).
    ///
    /// # Errors
    ///
    /// A [`ValidationError`] if `max_iterations` is zero or `start` does not
    /// match the instance.
    pub fn run(
        instance: &ProblemInstance,
        start: &Sequence,
        max_iterations: usize,
    ) -> Result<GreedyResult> {
        if max_iterations == 0 {
            return Err(ValidationError::NonPositiveIterations.into());
        }
        instance.check(start)?;
        Ok(Self::descend(instance, start.clone(), max_iterations))
    }

    /// Runs a descent from each of the `n!` sequences.
    ///
    /// # Errors
    ///
    /// As [`GreedyDescent::run`], plus [`ValidationError::TooManyJobs`] above
    /// [`BruteForce::MAX_JOBS`].
    pub fn survey(instance: &ProblemInstance, max_iterations: usize) -> Result<GreedySurvey> {
        if max_iterations == 0 {
            return Err(ValidationError::NonPositiveIterations.into());
        }
        let n = instance.len();
        if n > BruteForce::MAX_JOBS {
            return Err(ValidationError::TooManyJobs {
                jobs: n,
                max: BruteForce::MAX_JOBS,
            }
            .into());
        }

        let mut starts = 0;
        let mut limit_reached = 0;
        let mut value_sum = 0u128;
        let mut iteration_sum = 0usize;

        for start in Permutations::new(n) {
            let result = Self::descend(instance, start, max_iterations);
            starts += 1;
            value_sum += u128::from(result.best_value);
            if result.hit_limit {
                limit_reached += 1;
            } else {
                iteration_sum += result.iterations;
            }
        }

        let survey = GreedySurvey {
            starts,
            local_minima: starts - limit_reached,
            limit_reached,
            average_value: value_sum as f64 / starts as f64,
            average_iterations: iteration_sum as f64 / starts as f64,
        };

        info!(
            event = "greedy_survey_end",
            starts,
            local_minima = survey.local_minima,
            limit_reached,
            average_value = survey.average_value,
        );

        Ok(survey)
    }

    fn descend(instance: &ProblemInstance, start: Sequence, max_iterations: usize) -> GreedyResult {
        let mut best_value = instance.evaluate(&start);
        let mut best = start;
        let mut iterations = 0;

        loop {
            let mut hood = neighbors(&best);
            let Some((idx, value)) =
                scan_best(hood.iter().map(|nb| instance.evaluate(&nb.sequence)))
            else {
                break;
            };
            if value >= best_value {
                break;
            }

            best = hood.swap_remove(idx).sequence;
            best_value = value;
            iterations += 1;
            debug!(event = "descent_step", iterations, value);

            if iterations == max_iterations {
                return GreedyResult {
                    best,
                    best_value,
                    iterations,
                    hit_limit: true,
                };
            }
        }

        GreedyResult {
            best,
            best_value,
            iterations,
            hit_limit: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn reference() -> ProblemInstance {
        ProblemInstance::new(
            vec![6, 4, 8, 2, 10, 3],
            vec![9, 12, 15, 8, 20, 22],
            vec![1; 6],
        )
        .unwrap()
    }

    #[test]
    fn test_greedy_from_identity() {
        let result = GreedyDescent::run(&reference(), &Sequence::identity(6), 10).unwrap();
        assert_eq!(result.best.as_slice(), &[1, 4, 2, 3, 6, 5]);
        assert_eq!(result.best_value, 19);
        assert_eq!(result.iterations, 3);
        assert!(!result.hit_limit);
    }

    #[test]
    fn test_greedy_limit() {
        let result = GreedyDescent::run(&reference(), &Sequence::identity(6), 1).unwrap();
        assert_eq!(result.best_value, 29);
        assert_eq!(result.iterations, 1);
        assert!(result.hit_limit);
    }

    #[test]
    fn test_greedy_single_job() {
        let instance = ProblemInstance::new(vec![2], vec![1], vec![4]).unwrap();
        let result = GreedyDescent::run(&instance, &Sequence::identity(1), 5).unwrap();
        assert_eq!(result.best_value, 4);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_greedy_validation() {
        let err = GreedyDescent::run(&reference(), &Sequence::identity(6), 0).unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::NonPositiveIterations));

        let err = GreedyDescent::run(&reference(), &Sequence::identity(3), 10).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::WrongLength { .. })
        ));
    }

    #[test]
    fn test_greedy_survey_reference() {
        let survey = GreedyDescent::survey(&reference(), 10).unwrap();
        assert_eq!(survey.starts, 720);
        assert_eq!(survey.local_minima, 720);
        assert_eq!(survey.limit_reached, 0);
        assert!((survey.average_value - 19.0).abs() < 1e-12);
        assert!((survey.average_iterations - 2397.0 / 720.0).abs() < 1e-12);
    }

    #[test]
    fn test_greedy_survey_sums_large_values() {
        // Every start ends at the same value, close to u64::MAX; 24 of them
        // only fit in the wide accumulator.
        let heavy = u64::MAX / 10 - 1;
        let instance =
            ProblemInstance::new(vec![1, 2, 3, 4], vec![0; 4], vec![heavy, 0, 0, 0]).unwrap();
        let survey = GreedyDescent::survey(&instance, 10).unwrap();
        assert_eq!(survey.starts, 24);
        assert!((survey.average_value - heavy as f64).abs() / (heavy as f64) < 1e-9);
    }
}
