//! Pairwise-swap neighborhood.

use crate::problem::Sequence;

use super::types::{Move, Neighbor};

/// All pairwise-swap neighbors of `sequence`.
///
/// Pairs are the 2-combinations of the sequence's values taken in their
/// current left-to-right order: for positions `i < j` the move is
/// `(seq[i], seq[j])` and the candidate has those two jobs exchanged.
/// The output order is significant; selection breaks ties by it.
///
/// Returns `n * (n - 1) / 2` neighbors and never modifies `sequence`.
///
/// # Examples
///
/// ```
/// use u_tardiness::neighborhood::{neighbors, Move};
/// use u_tardiness::problem::Sequence;
///
/// let seq = Sequence::new(vec![3, 1, 2]).unwrap();
/// let hood = neighbors(&seq);
/// assert_eq!(hood.len(), 3);
/// assert_eq!(hood[0].mv, Move::new(3, 1));
/// assert_eq!(hood[0].sequence.as_slice(), &[1, 3, 2]);
/// ```
pub fn neighbors(sequence: &Sequence) -> Vec<Neighbor> {
    let jobs = sequence.as_slice();
    let n = jobs.len();
    let mut result = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for i in 0..n {
        for j in (i + 1)..n {
            result.push(Neighbor {
                sequence: sequence.swapped(i, j),
                mv: Move::new(jobs[i], jobs[j]),
            });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_is_n_choose_two() {
        for n in 1..=7 {
            assert_eq!(neighbors(&Sequence::identity(n)).len(), n * (n - 1) / 2);
        }
    }

    #[test]
    fn test_order_follows_current_values() {
        let seq = Sequence::new(vec![2, 4, 1, 3]).unwrap();
        let moves: Vec<Move> = neighbors(&seq).into_iter().map(|nb| nb.mv).collect();
        assert_eq!(
            moves,
            vec![
                Move::new(2, 4),
                Move::new(2, 1),
                Move::new(2, 3),
                Move::new(4, 1),
                Move::new(4, 3),
                Move::new(1, 3),
            ]
        );
    }

    #[test]
    fn test_swaps_positions_holding_the_jobs() {
        let seq = Sequence::new(vec![2, 4, 1, 3]).unwrap();
        for nb in neighbors(&seq) {
            let a = seq.position(nb.mv.first).unwrap();
            let b = seq.position(nb.mv.second).unwrap();
            assert_eq!(nb.sequence.as_slice()[a], nb.mv.second);
            assert_eq!(nb.sequence.as_slice()[b], nb.mv.first);

            let differing = seq
                .iter()
                .zip(nb.sequence.iter())
                .filter(|(x, y)| x != y)
                .count();
            assert_eq!(differing, 2);
        }
        assert_eq!(seq.as_slice(), &[2, 4, 1, 3]);
    }

    #[test]
    fn test_single_job_has_no_neighbors() {
        assert!(neighbors(&Sequence::identity(1)).is_empty());
    }
}
