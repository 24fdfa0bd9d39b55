//! Swap moves and the neighbors they produce.

use std::fmt;

use crate::problem::{JobId, Sequence};

/// Exchange of two jobs, identified by job id rather than by position.
///
/// The pair keeps the orientation in which it was generated: `(a, b)` and
/// `(b, a)` describe the same swap but are different tabu keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Job that appeared first (leftmost) when the move was generated.
    pub first: JobId,
    /// Job that appeared second.
    pub second: JobId,
}

impl Move {
    /// Creates a move swapping `first` and `second`.
    ///
    /// # Panics
    /// Panics if both ids are equal.
    pub fn new(first: JobId, second: JobId) -> Self {
        assert_ne!(first, second, "a move needs two distinct jobs");
        Self { first, second }
    }

    /// The same swap with the opposite orientation.
    pub fn reversed(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// A candidate sequence together with the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    /// The resulting sequence.
    pub sequence: Sequence,
    /// The swap applied to the source sequence.
    pub mv: Move,
}
