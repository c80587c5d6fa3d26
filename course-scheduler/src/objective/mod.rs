//! Contains the objective function which counts student time conflicts (minimization).

mod conflicts;
pub use self::conflicts::*;

mod table;
pub use self::table::*;

/// A non-negative objective value, lower is better.
pub type Score = usize;

/// Returns a contribution of one student who attends `count` meetings in the same timeslot.
/// The full occurrence count is used: two meetings at the same time contribute 2, not 1.
#[inline]
pub fn conflict_contribution(count: usize) -> Score {
    if count > 1 { count } else { 0 }
}
