//! This module reimports commonly used types.

pub use crate::models::Classroom;
pub use crate::models::Course;
pub use crate::models::DataConsistencyError;
pub use crate::models::Meeting;
pub use crate::models::Registry;
pub use crate::models::Student;
pub use crate::models::{MeetingId, RoomId, StudentId};

pub use crate::schedule::Day;
pub use crate::schedule::Hour;
pub use crate::schedule::Position;
pub use crate::schedule::Schedule;
pub use crate::schedule::ScheduleDomain;

pub use crate::objective::ConflictObjective;
pub use crate::objective::ConflictTable;
pub use crate::objective::Score;

pub use crate::neighborhood::Move;
pub use crate::neighborhood::Neighborhood;

pub use crate::search::AnnealingConfig;
pub use crate::search::RandomRestart;
pub use crate::search::SearchContext;
pub use crate::search::SearchDetails;
pub use crate::search::SearchResult;
pub use crate::search::SearchStrategy;
pub use crate::search::SidewaysHillClimbing;
pub use crate::search::SimulatedAnnealing;
pub use crate::search::SteepestAscent;
pub use crate::search::StochasticHillClimbing;
pub use crate::search::StopReason;
pub use crate::search::TelemetryMode;

pub use crate::genetic::GeneticAlgorithm;
pub use crate::genetic::GeneticConfig;

pub use crate::solver::Solver;
pub use crate::solver::SolverConfig;
pub use crate::solver::read_config;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::InfoLogger;
pub use crate::utils::{GenericError, GenericResult};
pub use crate::utils::{Random, RandomGen};
