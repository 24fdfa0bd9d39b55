//! Neighborhood generation.
//!
//! The neighborhood of a sequence is every sequence reachable by swapping
//! two jobs. Moves are keyed by the swapped job ids, which is what the tabu
//! memory stores.

mod generator;
mod select;
mod types;

pub use generator::neighbors;
pub use select::scan_best;
pub use types::{Move, Neighbor};
