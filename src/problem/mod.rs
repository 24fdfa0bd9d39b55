//! Problem model: jobs, instances, sequences and the objective.
//!
//! A [`ProblemInstance`] owns the job data for one run. A [`Sequence`] is a
//! complete schedule (a permutation of the job ids). The objective,
//! [`ProblemInstance::evaluate`], is the total weighted tardiness of a
//! sequence.

mod instance;
mod objective;
mod permutations;
mod sequence;

pub use instance::{Job, JobId, ProblemInstance};
pub use permutations::Permutations;
pub use sequence::Sequence;
