//! Error types.
//!
//! Two classes are distinguished:
//!
//! - [`ConfigurationError`]: the problem instance itself is malformed. Raised
//!   while building a [`ProblemInstance`](crate::problem::ProblemInstance).
//! - [`ValidationError`]: a run input (starting sequence, tenure, iteration
//!   budget) is unusable. Raised before any search loop starts.
//!
//! There are no transient failures: every algorithm in this crate is
//! deterministic and performs no I/O.

use thiserror::Error;

use crate::problem::JobId;

/// The problem instance cannot be built from the supplied job data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The per-job attribute lists differ in length.
    #[error(
        "attribute lengths differ: {processing_times} processing times, \
         {due_dates} due dates, {weights} weights"
    )]
    LengthMismatch {
        processing_times: usize,
        due_dates: usize,
        weights: usize,
    },

    /// An instance needs at least one job.
    #[error("problem instance has no jobs")]
    Empty,

    /// A job id lies outside `1..=n`.
    #[error("job id {id} is undefined for an instance of {jobs} jobs")]
    UndefinedJob { id: JobId, jobs: usize },

    /// Two jobs share the same id.
    #[error("job id {0} is defined more than once")]
    DuplicateJob(JobId),

    /// Total processing time times total weight does not fit in `u64`, so
    /// the objective could overflow.
    #[error("total processing time times total weight exceeds u64::MAX")]
    ObjectiveOverflow,
}

/// A run input failed validation; the search was not started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The sequence holds no jobs.
    #[error("sequence is empty")]
    EmptySequence,

    /// The sequence length does not match the instance's job count.
    #[error("sequence has {actual} jobs, instance has {expected}")]
    WrongLength { expected: usize, actual: usize },

    /// The sequence mentions a job id outside `1..=n`.
    #[error("sequence references unknown job id {id} (valid ids are 1..={jobs})")]
    UnknownJob { id: JobId, jobs: usize },

    /// The sequence lists a job more than once.
    #[error("job id {0} appears more than once in the sequence")]
    DuplicateJob(JobId),

    /// The tabu tenure must be positive.
    #[error("tabu tenure must be positive")]
    NonPositiveTenure,

    /// The iteration budget must be positive.
    #[error("iteration budget must be positive")]
    NonPositiveIterations,

    /// Exhaustive enumeration was requested for too many jobs.
    #[error("exhaustive enumeration supports at most {max} jobs, instance has {jobs}")]
    TooManyJobs { jobs: usize, max: usize },
}

/// Any error raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
