//! Single-machine total weighted tardiness sequencing.
//!
//! Given jobs with processing times, due dates and penalty weights, find a
//! processing order that minimizes the sum of weighted tardiness.
//!
//! - **Problem model** ([`problem`]): immutable instance data, validated job
//!   sequences and the objective evaluator.
//! - **Neighborhood** ([`neighborhood`]): pairwise-swap moves keyed by job id.
//! - **Tabu Search** ([`tabu`]): best-admissible-neighbor search with a
//!   fixed-tenure FIFO tabu list and a full per-iteration trace.
//! - **Baselines** ([`baseline`]): exhaustive enumeration and greedy descent.
//!
//! # Example
//!
//! ```
//! use u_tardiness::problem::{ProblemInstance, Sequence};
//! use u_tardiness::tabu::{TabuConfig, TabuRunner};
//!
//! let instance = ProblemInstance::new(
//!     vec![6, 4, 8, 2, 10, 3],
//!     vec![9, 12, 15, 8, 20, 22],
//!     vec![1; 6],
//! )?;
//! let result = TabuRunner::run(&instance, &Sequence::identity(6), &TabuConfig::default())?;
//! assert_eq!(result.best_value, 19);
//! # Ok::<(), u_tardiness::error::Error>(())
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for instances, sequences, configs
//!   and results.
//! - `parallel`: score neighbors with rayon (see [`tabu::TabuConfig::parallel`]).
//! - `cli`: the `u-tardiness` binary.

pub mod baseline;
pub mod error;
pub mod neighborhood;
pub mod problem;
pub mod tabu;

pub use error::{ConfigurationError, Error, Result, ValidationError};
