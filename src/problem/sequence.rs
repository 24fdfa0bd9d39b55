//! Job sequences (complete schedules).

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ValidationError;

use super::instance::JobId;

/// An ordered permutation of the job ids `1..=n`.
///
/// Sequences are immutable: every transformation returns a new value.
///
/// # Examples
///
/// ```
/// use u_tardiness::problem::Sequence;
///
/// let seq = Sequence::new(vec![2, 3, 1]).unwrap();
/// assert_eq!(seq.as_slice(), &[2, 3, 1]);
/// assert!(Sequence::new(vec![1, 1, 2]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<JobId>", into = "Vec<JobId>")
)]
pub struct Sequence(Vec<JobId>);

impl Sequence {
    /// Validates `jobs` as a permutation of `1..=jobs.len()`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptySequence`], [`ValidationError::UnknownJob`]
    /// or [`ValidationError::DuplicateJob`].
    pub fn new(jobs: Vec<JobId>) -> Result<Self, ValidationError> {
        let n = jobs.len();
        if n == 0 {
            return Err(ValidationError::EmptySequence);
        }

        let mut seen = vec![false; n];
        for &id in &jobs {
            if id == 0 || id > n {
                return Err(ValidationError::UnknownJob { id, jobs: n });
            }
            if std::mem::replace(&mut seen[id - 1], true) {
                return Err(ValidationError::DuplicateJob(id));
            }
        }

        Ok(Self(jobs))
    }

    /// The sequence `1, 2, ..., n`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn identity(n: usize) -> Self {
        assert!(n > 0, "a sequence needs at least one job");
        Self((1..=n).collect())
    }

    /// A uniformly random permutation of `1..=n`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn shuffled<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut seq = Self::identity(n);
        seq.0.shuffle(rng);
        seq
    }

    /// Wraps ids the caller already knows to be a permutation.
    pub(crate) fn from_permutation(jobs: Vec<JobId>) -> Self {
        debug_assert!(Self::new(jobs.clone()).is_ok(), "not a permutation: {jobs:?}");
        Self(jobs)
    }

    /// Returns a copy with positions `i` and `j` exchanged.
    ///
    /// # Panics
    /// Panics if either position is out of bounds.
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut jobs = self.0.clone();
        jobs.swap(i, j);
        Self(jobs)
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a validated sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Job ids in processing order.
    pub fn as_slice(&self) -> &[JobId] {
        &self.0
    }

    /// Iterates job ids in processing order.
    pub fn iter(&self) -> std::slice::Iter<'_, JobId> {
        self.0.iter()
    }

    /// Position of `job` in the sequence, if present.
    pub fn position(&self, job: JobId) -> Option<usize> {
        self.0.iter().position(|&id| id == job)
    }
}

impl TryFrom<Vec<JobId>> for Sequence {
    type Error = ValidationError;

    fn try_from(jobs: Vec<JobId>) -> Result<Self, Self::Error> {
        Self::new(jobs)
    }
}

impl From<Sequence> for Vec<JobId> {
    fn from(seq: Sequence) -> Self {
        seq.0
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a JobId;
    type IntoIter = std::slice::Iter<'a, JobId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, id) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{id}")?;
        }
        f.write_str("]")
    }
}
