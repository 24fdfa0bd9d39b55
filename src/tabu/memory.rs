//! Short-term memory of recent moves.

use std::collections::VecDeque;

use crate::neighborhood::Move;

/// Fixed-capacity FIFO list of forbidden moves.
///
/// Holds at most `tenure` moves in recency order (oldest first). Lookups are
/// a linear scan, which is fine for the small tenures tabu search uses.
#[derive(Debug, Clone)]
pub struct TabuMemory {
    moves: VecDeque<Move>,
    tenure: usize,
}

impl TabuMemory {
    /// Creates an empty memory holding up to `tenure` moves.
    pub fn new(tenure: usize) -> Self {
        Self {
            moves: VecDeque::with_capacity(tenure + 1),
            tenure,
        }
    }

    /// Whether `mv` is currently forbidden. Orientation matters.
    pub fn is_tabu(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Appends `mv`, evicting the oldest entry once over capacity.
    pub fn record(&mut self, mv: Move) {
        self.moves.push_back(mv);
        if self.moves.len() > self.tenure {
            self.moves.pop_front();
        }
    }

    /// Current contents, oldest first.
    pub fn snapshot(&self) -> Vec<Move> {
        self.moves.iter().copied().collect()
    }

    /// Number of moves currently held.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether no move is forbidden.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Maximum number of moves held.
    pub fn tenure(&self) -> usize {
        self.tenure
    }
}
