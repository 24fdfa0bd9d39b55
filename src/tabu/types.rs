//! Per-iteration search trace.

use std::fmt;

use crate::neighborhood::Move;
use crate::problem::Sequence;

/// Snapshot of the search state at an iteration boundary.
///
/// Iteration `0` is the starting state, before any move is made.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    /// Iteration index (`0` = start).
    pub iteration: usize,
    /// Current sequence after this iteration.
    pub sequence: Sequence,
    /// Objective value of `sequence`.
    pub value: u64,
    /// Tabu list contents after this iteration, oldest first.
    pub tabu: Vec<Move>,
    /// Whether no eligible move was found and the sequence was held.
    pub stalled: bool,
}

impl fmt::Display for IterationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.iteration == 0 {
            write!(
                f,
                "Starting sequence: {} with value: {}. Tabu list: ",
                self.sequence, self.value
            )?;
        } else {
            write!(
                f,
                "Iteration {}: {} with value: {}{}. Tabu list: ",
                self.iteration,
                self.sequence,
                self.value,
                if self.stalled { " (stalled)" } else { "" }
            )?;
        }
        f.write_str("[")?;
        for (idx, mv) in self.tabu.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{mv}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_start_and_iteration() {
        let start = IterationRecord {
            iteration: 0,
            sequence: Sequence::identity(3),
            value: 7,
            tabu: vec![],
            stalled: false,
        };
        assert_eq!(
            start.to_string(),
            "Starting sequence: [1, 2, 3] with value: 7. Tabu list: []"
        );

        let step = IterationRecord {
            iteration: 2,
            sequence: Sequence::new(vec![2, 1, 3]).unwrap(),
            value: 4,
            tabu: vec![Move::new(1, 2), Move::new(2, 3)],
            stalled: false,
        };
        assert_eq!(
            step.to_string(),
            "Iteration 2: [2, 1, 3] with value: 4. Tabu list: [(1, 2), (2, 3)]"
        );
    }
}
