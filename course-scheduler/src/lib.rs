//! This crate contains search algorithms which place course meetings into a weekly
//! day/hour/classroom grid while minimizing the amount of student time conflicts.
//!
//! The building blocks are:
//! - a read only [`models::Registry`] derived from courses, classrooms and students
//! - a mutable [`schedule::Schedule`] which is the unit of mutation for every algorithm
//! - a conflict counting [`objective::ConflictObjective`] with incremental evaluation
//! - a one-move [`neighborhood::Neighborhood`]
//! - hill climbing variants, simulated annealing and a genetic algorithm in [`search`] and [`genetic`]
//!
//! The [`solver::Solver`] type glues them together using fluent interface style.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/integration/strategies_test.rs"]
mod strategies_test;

pub mod genetic;
pub mod models;
pub mod neighborhood;
pub mod objective;
pub mod prelude;
pub mod schedule;
pub mod search;
pub mod solver;
pub mod utils;
