//! Static problem data.

use crate::error::{ConfigurationError, ValidationError};

use super::sequence::Sequence;

/// Job identifier. Ids are 1-based: an instance of `n` jobs uses `1..=n`.
pub type JobId = usize;

/// A single job with its fixed attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    /// 1-based identifier.
    pub id: JobId,
    /// Time the machine spends on this job.
    pub processing_time: u64,
    /// Completion time after which the job becomes tardy.
    pub due_date: u64,
    /// Penalty per unit of tardiness.
    pub weight: u64,
}

/// An immutable single-machine weighted tardiness instance.
///
/// Jobs are stored in id order, so `jobs()[id - 1].id == id` always holds.
///
/// # Examples
///
/// ```
/// use u_tardiness::problem::ProblemInstance;
///
/// let instance = ProblemInstance::new(vec![3, 1], vec![2, 4], vec![1, 5]).unwrap();
/// assert_eq!(instance.len(), 2);
/// assert_eq!(instance.job(2).weight, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Job>", into = "Vec<Job>")
)]
pub struct ProblemInstance {
    jobs: Vec<Job>,
}

impl ProblemInstance {
    /// Builds an instance from per-job attribute lists indexed by `id - 1`.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::LengthMismatch`] if the lists differ in length,
    /// [`ConfigurationError::Empty`] if they are empty,
    /// [`ConfigurationError::ObjectiveOverflow`] if the objective could
    /// exceed `u64`.
    pub fn new(
        processing_times: Vec<u64>,
        due_dates: Vec<u64>,
        weights: Vec<u64>,
    ) -> Result<Self, ConfigurationError> {
        let n = processing_times.len();
        if due_dates.len() != n || weights.len() != n {
            return Err(ConfigurationError::LengthMismatch {
                processing_times: n,
                due_dates: due_dates.len(),
                weights: weights.len(),
            });
        }
        if n == 0 {
            return Err(ConfigurationError::Empty);
        }

        let jobs = processing_times
            .into_iter()
            .zip(due_dates)
            .zip(weights)
            .enumerate()
            .map(|(idx, ((processing_time, due_date), weight))| Job {
                id: idx + 1,
                processing_time,
                due_date,
                weight,
            })
            .collect();

        Self::bounded(jobs)
    }

    /// Builds an instance from explicit job records in any order.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::UndefinedJob`] if an id is outside `1..=n`,
    /// [`ConfigurationError::DuplicateJob`] if an id repeats,
    /// [`ConfigurationError::Empty`] if no jobs are given,
    /// [`ConfigurationError::ObjectiveOverflow`] as for [`ProblemInstance::new`].
    pub fn from_jobs(jobs: Vec<Job>) -> Result<Self, ConfigurationError> {
        let n = jobs.len();
        if n == 0 {
            return Err(ConfigurationError::Empty);
        }

        let mut slots: Vec<Option<Job>> = vec![None; n];
        for job in jobs {
            if job.id == 0 || job.id > n {
                return Err(ConfigurationError::UndefinedJob { id: job.id, jobs: n });
            }
            let slot = &mut slots[job.id - 1];
            if slot.is_some() {
                return Err(ConfigurationError::DuplicateJob(job.id));
            }
            *slot = Some(job);
        }

        // n distinct ids in 1..=n fill every slot.
        let jobs = slots.into_iter().flatten().collect();
        Self::bounded(jobs)
    }

    /// Rejects instances whose objective could exceed `u64`.
    ///
    /// Every completion time is at most the total processing time, so the
    /// objective is at most `sum(processing_time) * sum(weight)`.
    fn bounded(jobs: Vec<Job>) -> Result<Self, ConfigurationError> {
        let horizon = jobs
            .iter()
            .try_fold(0u64, |acc, job| acc.checked_add(job.processing_time));
        let total_weight = jobs
            .iter()
            .try_fold(0u64, |acc, job| acc.checked_add(job.weight));
        match (horizon, total_weight) {
            (Some(h), Some(w)) if h.checked_mul(w).is_some() => Ok(Self { jobs }),
            _ => Err(ConfigurationError::ObjectiveOverflow),
        }
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Always `false`; construction rejects empty instances.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// All jobs in id order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Looks up a job by id.
    ///
    /// # Panics
    /// Panics if `id` is not in `1..=len()`. Ids taken from a validated
    /// [`Sequence`] are always in range.
    pub fn job(&self, id: JobId) -> &Job {
        &self.jobs[id - 1]
    }

    /// Checks that `sequence` schedules exactly this instance's jobs.
    ///
    /// A [`Sequence`] is already a permutation of `1..=len`, so only the
    /// length has to agree.
    pub fn check(&self, sequence: &Sequence) -> Result<(), ValidationError> {
        if sequence.len() != self.len() {
            return Err(ValidationError::WrongLength {
                expected: self.len(),
                actual: sequence.len(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<Job>> for ProblemInstance {
    type Error = ConfigurationError;

    fn try_from(jobs: Vec<Job>) -> Result<Self, Self::Error> {
        Self::from_jobs(jobs)
    }
}

impl From<ProblemInstance> for Vec<Job> {
    fn from(instance: ProblemInstance) -> Self {
        instance.jobs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_ids_in_order() {
        let instance = ProblemInstance::new(vec![6, 4, 8], vec![9, 12, 15], vec![1, 2, 3]).unwrap();
        assert_eq!(instance.len(), 3);
        assert!(!instance.is_empty());
        assert_eq!(
            instance.job(2),
            &Job {
                id: 2,
                processing_time: 4,
                due_date: 12,
                weight: 2
            }
        );
        for (idx, job) in instance.jobs().iter().enumerate() {
            assert_eq!(job.id, idx + 1);
        }
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = ProblemInstance::new(vec![1, 2, 3], vec![1, 2], vec![1, 1, 1]).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::LengthMismatch {
                processing_times: 3,
                due_dates: 2,
                weights: 3
            }
        );

        let err = ProblemInstance::new(vec![1], vec![1], vec![]).unwrap_err();
        assert!(matches!(err, ConfigurationError::LengthMismatch { weights: 0, .. }));
    }

    #[test]
    fn test_new_rejects_empty() {
        let err = ProblemInstance::new(vec![], vec![], vec![]).unwrap_err();
        assert_eq!(err, ConfigurationError::Empty);
    }

    #[test]
    fn test_from_jobs_sorts_by_id() {
        let jobs = vec![
            Job {
                id: 2,
                processing_time: 4,
                due_date: 1,
                weight: 1,
            },
            Job {
                id: 1,
                processing_time: 7,
                due_date: 3,
                weight: 2,
            },
        ];
        let instance = ProblemInstance::from_jobs(jobs).unwrap();
        assert_eq!(instance.job(1).processing_time, 7);
        assert_eq!(instance.job(2).processing_time, 4);
    }

    #[test]
    fn test_from_jobs_rejects_undefined_and_duplicate_ids() {
        let job = |id| Job {
            id,
            processing_time: 1,
            due_date: 1,
            weight: 1,
        };

        let err = ProblemInstance::from_jobs(vec![job(1), job(3)]).unwrap_err();
        assert_eq!(err, ConfigurationError::UndefinedJob { id: 3, jobs: 2 });

        let err = ProblemInstance::from_jobs(vec![job(0)]).unwrap_err();
        assert_eq!(err, ConfigurationError::UndefinedJob { id: 0, jobs: 1 });

        let err = ProblemInstance::from_jobs(vec![job(2), job(2)]).unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateJob(2));

        let err = ProblemInstance::from_jobs(vec![]).unwrap_err();
        assert_eq!(err, ConfigurationError::Empty);
    }

    #[test]
    fn test_objective_bound_rejects_overflow() {
        let err = ProblemInstance::new(vec![10, 1], vec![0, 0], vec![u64::MAX / 2, 1]).unwrap_err();
        assert_eq!(err, ConfigurationError::ObjectiveOverflow);

        let err = ProblemInstance::new(vec![u64::MAX / 2, u64::MAX / 2, 5], vec![0; 3], vec![1; 3])
            .unwrap_err();
        assert_eq!(err, ConfigurationError::ObjectiveOverflow);

        let job = |id, weight| Job {
            id,
            processing_time: 2,
            due_date: 0,
            weight,
        };
        let err = ProblemInstance::from_jobs(vec![job(1, u64::MAX / 3), job(2, 1)]).unwrap_err();
        assert_eq!(err, ConfigurationError::ObjectiveOverflow);
    }

    #[test]
    fn test_objective_bound_boundary() {
        // u64::MAX is divisible by 3: 3 * (u64::MAX / 3) fits exactly.
        let heavy = u64::MAX / 3 - 1;
        let instance = ProblemInstance::new(vec![1, 2], vec![0, 0], vec![heavy, 1]).unwrap();
        assert_eq!(instance.evaluate(&Sequence::identity(2)), heavy + 3);
        assert_eq!(
            instance.evaluate(&Sequence::new(vec![2, 1]).unwrap()),
            2 + heavy * 3
        );

        let err = ProblemInstance::new(vec![1, 3], vec![0, 0], vec![heavy, 1]).unwrap_err();
        assert_eq!(err, ConfigurationError::ObjectiveOverflow);
    }

    #[test]
    fn test_check_sequence_length() {
        let instance = ProblemInstance::new(vec![1, 1, 1], vec![0, 0, 0], vec![1, 1, 1]).unwrap();
        assert!(instance.check(&Sequence::identity(3)).is_ok());
        assert_eq!(
            instance.check(&Sequence::identity(4)),
            Err(ValidationError::WrongLength {
                expected: 3,
                actual: 4
            })
        );
    }
}
