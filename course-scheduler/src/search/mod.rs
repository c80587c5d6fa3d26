//! Contains local search strategies: hill climbing variants and simulated annealing.

#[cfg(test)]
#[path = "../../tests/unit/search/context_test.rs"]
mod context_test;

use crate::models::Registry;
use crate::neighborhood::Neighborhood;
use crate::objective::{ConflictObjective, Score};
use crate::schedule::{Schedule, ScheduleDomain};
use crate::utils::{Environment, GenericResult, InfoLogger, Random};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

mod annealing;
pub use self::annealing::*;

mod hill_climbing;
pub use self::hill_climbing::*;

mod restart;
pub use self::restart::*;

mod telemetry;
pub use self::telemetry::*;

/// Specifies a search algorithm which improves a schedule.
pub trait SearchStrategy {
    /// Returns a strategy name.
    fn name(&self) -> &str;

    /// Runs the search starting from the given schedule.
    fn search_from(&self, context: &SearchContext, initial: Schedule) -> SearchResult;

    /// Runs the search starting from a random schedule.
    fn search(&self, context: &SearchContext) -> SearchResult {
        self.search_from(context, context.random_schedule())
    }
}

/// Keeps everything a search needs: read only registry, schedule domain, objective,
/// neighborhood and environment. Cheap to clone, all parts are shared.
#[derive(Clone)]
pub struct SearchContext {
    /// A registry with meetings and lookup indices.
    pub registry: Arc<Registry>,
    /// Fixed schedule dimensions.
    pub domain: Arc<ScheduleDomain>,
    /// An objective function.
    pub objective: Arc<ConflictObjective>,
    /// A neighbor generator.
    pub neighborhood: Arc<Neighborhood>,
    /// An environment with random and logger.
    pub environment: Arc<Environment>,
    /// Specifies how search progress is reported.
    pub telemetry: TelemetryMode,
}

impl SearchContext {
    /// Creates a context with default weekly domain.
    pub fn new(registry: Arc<Registry>, environment: Arc<Environment>) -> GenericResult<Self> {
        let domain = Arc::new(ScheduleDomain::from_registry(registry.as_ref())?);
        Self::new_with_domain(registry, domain, environment)
    }

    /// Creates a context with given domain. The domain's classrooms must match registry's ones.
    pub fn new_with_domain(
        registry: Arc<Registry>,
        domain: Arc<ScheduleDomain>,
        environment: Arc<Environment>,
    ) -> GenericResult<Self> {
        let registry_rooms = registry.classroom_codes();
        if domain.classrooms() != registry_rooms.as_slice() {
            return Err("schedule domain classrooms must match registry classrooms".into());
        }

        let telemetry = TelemetryMode::OnlyLogging { logger: environment.logger.clone(), log_every: None };

        Ok(Self {
            objective: Arc::new(ConflictObjective::new(registry.clone())),
            neighborhood: Arc::new(Neighborhood::new(registry.clone())),
            registry,
            domain,
            environment,
            telemetry,
        })
    }

    /// Sets telemetry mode.
    pub fn with_telemetry(mut self, telemetry: TelemetryMode) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Returns random generator.
    pub fn random(&self) -> &(dyn Random + Send + Sync) {
        self.environment.random.as_ref()
    }

    /// Returns logger.
    pub fn logger(&self) -> &InfoLogger {
        &self.environment.logger
    }

    /// Creates a new random schedule with all meetings placed.
    pub fn random_schedule(&self) -> Schedule {
        Schedule::random_initial_assignment(self.registry.as_ref(), self.domain.clone(), self.random())
    }

    /// Evaluates the schedule.
    pub fn evaluate(&self, schedule: &Schedule) -> Score {
        self.objective.evaluate(schedule)
    }
}

/// Specifies why the search has stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Iteration limit is reached.
    IterationLimit,
    /// There are no neighbors to explore.
    NoNeighbors,
    /// No neighbor is better than the current schedule.
    LocalOptimum,
    /// A schedule without conflicts is found.
    OptimumFound,
    /// Too many sideways moves in a row.
    ConsecutiveSidewaysLimit,
    /// Too many sideways moves in total.
    TotalSidewaysLimit,
    /// Restart limit is reached.
    RestartLimit,
    /// Generation limit is reached.
    GenerationLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::IterationLimit => "iteration limit reached",
            Self::NoNeighbors => "no neighbors found",
            Self::LocalOptimum => "local optimum reached",
            Self::OptimumFound => "optimal solution found",
            Self::ConsecutiveSidewaysLimit => "max consecutive sideways moves reached",
            Self::TotalSidewaysLimit => "max total sideways moves reached",
            Self::RestartLimit => "restart limit reached",
            Self::GenerationLimit => "generation limit reached",
        };

        write!(f, "{reason}")
    }
}

/// Keeps information about one restart of random restart hill climbing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestartRecord {
    /// Score of the random schedule the restart started from.
    pub initial_score: Score,
    /// Score at the end of the restart.
    pub final_score: Score,
    /// Amount of iterations done.
    pub iterations: usize,
    /// Why the restart has stopped.
    pub stop_reason: StopReason,
}

/// Strategy specific details of the search.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchDetails {
    /// No extra details.
    None,
    /// Sideways move hill climbing details.
    Sideways {
        /// Total amount of accepted sideways moves.
        total_sideways: usize,
    },
    /// Random restart details.
    Restarts(Vec<RestartRecord>),
    /// Simulated annealing details.
    Annealing {
        /// Acceptance probability of each iteration.
        acceptance_history: Vec<f64>,
        /// Amount of stuck events.
        stuck_events: usize,
        /// Temperature at the end.
        final_temperature: f64,
    },
    /// Genetic algorithm details.
    Genetic {
        /// Average population score of each generation, including the initial one.
        average_history: Vec<f64>,
        /// How many times crossover children were replaced by parent copies.
        crossover_fallbacks: usize,
    },
}

/// A search result.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// A strategy name.
    pub strategy: String,
    /// A schedule the search started from.
    pub initial: Schedule,
    /// A score of the initial schedule.
    pub initial_score: Score,
    /// The best found schedule.
    pub best: Schedule,
    /// The best found score.
    pub best_score: Score,
    /// Score history: one entry per step (per restart for random restart, per generation for GA)
    /// including the starting point.
    pub history: Vec<Score>,
    /// Amount of iterations, restarts or generations done.
    pub iterations: usize,
    /// Elapsed time.
    pub duration: Duration,
    /// Why the search has stopped.
    pub stop_reason: StopReason,
    /// Strategy specific details.
    pub details: SearchDetails,
}
