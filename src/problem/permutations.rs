//! Lexicographic enumeration of all sequences.

use std::ops::RangeInclusive;

use itertools::Itertools;

use super::sequence::Sequence;

/// Iterator over every permutation of `1..=n` in lexicographic order.
///
/// Yields `n!` sequences, starting with the identity.
///
/// ```
/// use u_tardiness::problem::Permutations;
///
/// let all: Vec<_> = Permutations::new(3).map(|s| s.as_slice().to_vec()).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[1], vec![1, 3, 2]);
/// ```
#[derive(Clone)]
pub struct Permutations {
    inner: Option<itertools::Permutations<RangeInclusive<usize>>>,
}

impl Permutations {
    /// Starts the enumeration at `1, 2, ..., n`. Yields nothing for `n == 0`.
    pub fn new(n: usize) -> Self {
        // itertools yields a single empty permutation for k == 0.
        let inner = (n > 0).then(|| (1..=n).permutations(n));
        Self { inner }
    }
}

impl Iterator for Permutations {
    type Item = Sequence;

    fn next(&mut self) -> Option<Sequence> {
        self.inner
            .as_mut()?
            .next()
            .map(Sequence::from_permutation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(Permutations::new(0).count(), 0);
        assert_eq!(Permutations::new(1).count(), 1);
        assert_eq!(Permutations::new(4).count(), 24);
        assert_eq!(Permutations::new(6).count(), 720);
    }

    #[test]
    fn test_lexicographic_order() {
        let all: Vec<Vec<usize>> = Permutations::new(3)
            .map(|s| s.as_slice().to_vec())
            .collect();
        assert_eq!(
            all,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_sorted_and_distinct() {
        let all: Vec<Vec<usize>> = Permutations::new(5)
            .map(|s| s.as_slice().to_vec())
            .collect();
        assert_eq!(all.len(), 120);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }
}
