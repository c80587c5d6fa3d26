
pub mod schedule;
