//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the caller's sequence with an empty tabu list
//! 2. At each iteration:
//!    a. Generate the full swap neighborhood of the current sequence
//!    b. Drop neighbors whose move is tabu (there is no aspiration criterion)
//!    c. Select the lowest-valued survivor with [`scan_best`]
//!    d. Move to it, update the global best on strict improvement
//!    e. Record the move in the tabu list
//! 3. Terminate after the iteration budget
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::fmt;

use tracing::{debug, info, warn};

use super::config::{StallPolicy, TabuConfig};
use super::memory::TabuMemory;
use super::types::IterationRecord;
use crate::error::Result;
use crate::neighborhood::{neighbors, scan_best, Move, Neighbor};
use crate::problem::{ProblemInstance, Sequence};

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Best sequence found.
    pub best: Sequence,
    /// Objective value of the best sequence.
    pub best_value: u64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best sequence was first reached (`0` = start).
    pub best_iteration: usize,
    /// Best value after each iteration.
    pub cost_history: Vec<u64>,
    /// Search trace; entry `0` is the starting state.
    pub trace: Vec<IterationRecord>,
}

impl fmt::Display for TabuResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Best sequence found after {} iterations: {}, with value: {}",
            self.iterations, self.best, self.best_value
        )
    }
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search from `start`.
    ///
    /// Neighbor selection scans eligible neighbors in generation order and
    /// lets any candidate with a value `<=` the running best replace it, so
    /// among equal values the last one generated wins. The global best is
    /// only replaced on strict improvement.
    ///
    /// # Errors
    ///
    /// A [`ValidationError`](crate::error::ValidationError) if the
    /// configuration is invalid or `start` does not match the instance. No
    /// iteration runs in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tardiness::problem::{ProblemInstance, Sequence};
    /// use u_tardiness::tabu::{TabuConfig, TabuRunner};
    ///
    /// let instance = ProblemInstance::new(vec![4, 1, 2], vec![1, 2, 3], vec![1, 1, 1]).unwrap();
    /// let config = TabuConfig::default().with_max_iterations(5).with_tabu_tenure(1);
    /// let result = TabuRunner::run(&instance, &Sequence::identity(3), &config).unwrap();
    /// assert!(result.best_value <= instance.evaluate(&Sequence::identity(3)));
    /// assert_eq!(result.trace.len(), 6);
    /// ```
    pub fn run(
        instance: &ProblemInstance,
        start: &Sequence,
        config: &TabuConfig,
    ) -> Result<TabuResult> {
        config.validate()?;
        instance.check(start)?;

        let mut current = start.clone();
        let mut current_value = instance.evaluate(&current);
        let mut best = current.clone();
        let mut best_value = current_value;
        let mut best_iteration = 0;
        let mut memory = TabuMemory::new(config.tabu_tenure);

        let mut cost_history = Vec::with_capacity(config.max_iterations);
        let mut trace = Vec::with_capacity(config.max_iterations + 1);
        trace.push(IterationRecord {
            iteration: 0,
            sequence: current.clone(),
            value: current_value,
            tabu: memory.snapshot(),
            stalled: false,
        });

        info!(
            event = "search_start",
            jobs = instance.len(),
            tenure = config.tabu_tenure,
            max_iterations = config.max_iterations,
            value = current_value,
        );

        for iteration in 1..=config.max_iterations {
            let hood = neighbors(&current);
            let eligible: Vec<&Neighbor> =
                hood.iter().filter(|nb| !memory.is_tabu(&nb.mv)).collect();

            let scores = score(instance, &eligible, config.parallel);
            let selected = match scan_best(scores) {
                Some((idx, value)) => Some((eligible[idx], value)),
                None => {
                    warn!(
                        event = "no_eligible_move",
                        iteration,
                        neighbors = hood.len(),
                        policy = ?config.stall_policy,
                    );
                    match config.stall_policy {
                        StallPolicy::Hold => None,
                        StallPolicy::FirstNeighbor => hood
                            .first()
                            .map(|nb| (nb, instance.evaluate(&nb.sequence))),
                    }
                }
            };

            let stalled = selected.is_none();
            if let Some((nb, value)) = selected {
                current = nb.sequence.clone();
                current_value = value;
                if current_value < best_value {
                    best = current.clone();
                    best_value = current_value;
                    best_iteration = iteration;
                }
                memory.record(nb.mv);
            }

            debug!(
                event = "iteration",
                iteration,
                sequence = %current,
                value = current_value,
                best = best_value,
                tabu = memory.len(),
                stalled,
            );

            cost_history.push(best_value);
            trace.push(IterationRecord {
                iteration,
                sequence: current.clone(),
                value: current_value,
                tabu: memory.snapshot(),
                stalled,
            });
        }

        info!(
            event = "search_end",
            iterations = cost_history.len(),
            best = best_value,
            best_iteration,
        );

        Ok(TabuResult {
            best,
            best_value,
            iterations: cost_history.len(),
            best_iteration,
            cost_history,
            trace,
        })
    }

    /// Moves selected at each iteration, reconstructed from the trace.
    ///
    /// Stalled iterations contribute no move.
    pub fn moves(result: &TabuResult) -> Vec<Move> {
        result
            .trace
            .iter()
            .filter(|record| record.iteration > 0 && !record.stalled)
            .filter_map(|record| record.tabu.last().copied())
            .collect()
    }
}

/// Objective values of `eligible`, in the same order.
fn score(instance: &ProblemInstance, eligible: &[&Neighbor], parallel: bool) -> Vec<u64> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return eligible
                .par_iter()
                .map(|nb| instance.evaluate(&nb.sequence))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    eligible
        .iter()
        .map(|nb| instance.evaluate(&nb.sequence))
        .collect()
}
