//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that forbids recently applied
//! swap moves (the tabu list), preventing immediate cycling and pushing the
//! search out of local optima. This variant has no aspiration criterion and
//! stops only when the iteration budget is spent.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;
mod types;

pub use config::{StallPolicy, TabuConfig};
pub use memory::TabuMemory;
pub use runner::{TabuResult, TabuRunner};
pub use types::IterationRecord;
