//! Baseline drivers.
//!
//! Reference points for judging tabu search quality. Both are plain
//! consumers of the objective and the swap neighborhood:
//!
//! - [`BruteForce`]: evaluates every permutation (exact, small `n` only).
//! - [`GreedyDescent`]: best-improvement descent with no memory, stopping at
//!   the first local minimum.

mod brute_force;
mod greedy;

pub use brute_force::{BruteForce, BruteForceResult};
pub use greedy::{GreedyDescent, GreedyResult, GreedySurvey};
