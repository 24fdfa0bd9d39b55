//! Total weighted tardiness.

use super::instance::ProblemInstance;
use super::sequence::Sequence;

impl ProblemInstance {
    /// Total weighted tardiness of `sequence`.
    ///
    /// For the job at position `i`, the completion time is the sum of the
    /// processing times at positions `0..=i`; its contribution is
    /// `weight * max(0, completion - due_date)`.
    ///
    /// Completion times are re-summed from the start for every position, so
    /// evaluation is O(n²). Construction bounds the instance so the sum
    /// cannot overflow.
    ///
    /// # Panics
    /// Panics if `sequence` is longer than the instance, and in debug builds
    /// on any length mismatch. Pass a sequence accepted by
    /// [`ProblemInstance::check`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tardiness::problem::{ProblemInstance, Sequence};
    ///
    /// let instance = ProblemInstance::new(
    ///     vec![6, 4, 8, 2, 10, 3],
    ///     vec![9, 12, 15, 8, 20, 22],
    ///     vec![1; 6],
    /// ).unwrap();
    /// assert_eq!(instance.evaluate(&Sequence::identity(6)), 36);
    /// ```
    pub fn evaluate(&self, sequence: &Sequence) -> u64 {
        debug_assert_eq!(
            sequence.len(),
            self.len(),
            "sequence length does not match the instance's job count"
        );
        let jobs = sequence.as_slice();
        let mut total = 0;
        for (i, &id) in jobs.iter().enumerate() {
            let completion: u64 = jobs[..=i]
                .iter()
                .map(|&prev| self.job(prev).processing_time)
                .sum();
            let job = self.job(id);
            total += job.weight * completion.saturating_sub(job.due_date);
        }
        total
    }
}
