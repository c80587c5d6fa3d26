//! Glues registry, schedule domain, environment and a search strategy together.
//!
//! # Examples
//!
//! ```
//! # use std::sync::Arc;
//! use course_scheduler::prelude::*;
//!
//! let registry = Registry::new(
//!     vec![Course::new("IF1210", 2, 2), Course::new("IF1220", 2, 1)],
//!     vec![Classroom::new("7602", 40)],
//!     vec![Student::new("13521001", &["IF1210", "IF1220"], &[1, 2])],
//! )?;
//!
//! let result = Solver::new(Arc::new(registry))
//!     .with_environment(Arc::new(Environment::new_with_seed(42).silent()))
//!     .with_strategy(Box::new(SteepestAscent::default()))
//!     .solve()?;
//!
//! assert_eq!(result.best_score, 0);
//! # Ok::<(), GenericError>(())
//! ```

mod config;
pub use self::config::*;

use crate::models::Registry;
use crate::schedule::{Schedule, ScheduleDomain};
use crate::search::{SearchContext, SearchResult, SearchStrategy, SteepestAscent, Telemetry, TelemetryMode};
use crate::utils::{Environment, GenericResult};
use std::sync::Arc;

/// A search strategy which can be shared between threads.
pub type BoxedStrategy = Box<dyn SearchStrategy + Send + Sync>;

/// Provides configurable way to run a search.
pub struct Solver {
    registry: Arc<Registry>,
    environment: Arc<Environment>,
    strategy: BoxedStrategy,
    domain: Option<Arc<ScheduleDomain>>,
    initial: Option<Schedule>,
    telemetry: Option<TelemetryMode>,
}

impl Solver {
    /// Creates a new instance of `Solver` with default environment and steepest ascent strategy.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            environment: Arc::new(Environment::default()),
            strategy: Box::<SteepestAscent>::default(),
            domain: None,
            initial: None,
            telemetry: None,
        }
    }

    /// Creates a new instance of `Solver` from configuration.
    pub fn from_config(registry: Arc<Registry>, config: &SolverConfig) -> GenericResult<Self> {
        let environment = Arc::new(create_environment(config));
        let telemetry = create_telemetry_mode(&config.telemetry, &environment);
        let strategy = create_strategy(&config.strategy)?;

        Ok(Self::new(registry).with_environment(environment).with_telemetry(telemetry).with_strategy(strategy))
    }

    /// Sets environment. Default uses entropy seeded random and stdout logging.
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = environment;
        self
    }

    /// Sets search strategy. Default is steepest ascent hill climbing.
    pub fn with_strategy(mut self, strategy: BoxedStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets schedule domain. Default is working days with 7..=17 hours and all registry classrooms.
    pub fn with_domain(mut self, domain: Arc<ScheduleDomain>) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets an initial schedule. Default is a random assignment of all meetings.
    pub fn with_initial(mut self, initial: Schedule) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Sets telemetry mode. Default logs with environment's logger.
    pub fn with_telemetry(mut self, telemetry: TelemetryMode) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Runs the search.
    pub fn solve(self) -> GenericResult<SearchResult> {
        let domain = match self.domain {
            Some(domain) => domain,
            None => Arc::new(ScheduleDomain::from_registry(self.registry.as_ref())?),
        };

        let mut context = SearchContext::new_with_domain(self.registry, domain, self.environment)?;
        if let Some(telemetry) = self.telemetry {
            context = context.with_telemetry(telemetry);
        }

        Telemetry::new(&context.telemetry, "solver", 1).log(&format!(
            "solving {} meetings in {} cells using {}",
            context.registry.meeting_count(),
            context.domain.slot_count(),
            self.strategy.name()
        ));

        match self.initial {
            Some(initial) if initial.domain() != context.domain.as_ref() => {
                Err("initial schedule has different domain".into())
            }
            Some(initial) => Ok(self.strategy.search_from(&context, initial)),
            None => Ok(self.strategy.search(&context)),
        }
    }
}
