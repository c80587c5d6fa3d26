//! Contains the mutable schedule state: a day/hour/classroom occupancy grid with
//! a reverse index from meetings to their positions.

mod day;
pub use self::day::*;

mod domain;
pub use self::domain::*;

mod grid;
pub use self::grid::*;
