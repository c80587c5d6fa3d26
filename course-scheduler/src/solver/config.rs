//! Solver configuration.

#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use super::BoxedStrategy;
use crate::genetic::{GeneticAlgorithm, GeneticConfig};
use crate::search::*;
use crate::utils::{Environment, GenericResult};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A solver configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SolverConfig {
    /// Specifies search strategy.
    pub strategy: StrategyConfig,
    /// Specifies random seed. When not set, results are not repeatable.
    pub seed: Option<u64>,
    /// Specifies whether candidates are evaluated in parallel. Default is true.
    pub parallel: Option<bool>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A search strategy configuration. Every missing field falls back to the strategy's default.
#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "type")]
#[serde(rename_all = "camelCase")]
pub enum StrategyConfig {
    /// Steepest ascent hill climbing.
    #[serde(rename_all = "camelCase")]
    SteepestAscent {
        /// Max iterations. Default is unlimited.
        max_iterations: Option<usize>,
    },

    /// Stochastic hill climbing.
    #[serde(rename_all = "camelCase")]
    Stochastic {
        /// Max iterations. Default is 1000.
        max_iterations: Option<usize>,
    },

    /// Hill climbing with sideways moves.
    #[serde(rename_all = "camelCase")]
    Sideways {
        /// Max iterations. Default is unlimited.
        max_iterations: Option<usize>,
        /// Max sideways moves in a row. Default is 10.
        max_consecutive_sideways: Option<usize>,
        /// Max sideways moves in total. Default is 100.
        max_total_sideways: Option<usize>,
    },

    /// Random restart hill climbing.
    #[serde(rename_all = "camelCase")]
    RandomRestart {
        /// Max restarts. Default is 10.
        max_restarts: Option<usize>,
        /// Max iterations per restart. Default is unlimited.
        max_iterations_per_restart: Option<usize>,
    },

    /// Simulated annealing.
    #[serde(rename_all = "camelCase")]
    SimulatedAnnealing {
        /// Max iterations. Default is 1000.
        max_iterations: Option<usize>,
        /// Initial temperature. Default is 100.
        initial_temperature: Option<f64>,
        /// Cooling rate. Default is 0.99.
        cooling_rate: Option<f64>,
        /// Iterations without improvement counted as stuck event. Default is 50.
        stuck_threshold: Option<usize>,
    },

    /// Genetic algorithm.
    #[serde(rename_all = "camelCase")]
    Genetic {
        /// Population size. Default is 20.
        population_size: Option<usize>,
        /// Max generations. Default is 100.
        max_generations: Option<usize>,
        /// Mutation probability. Default is 0.1.
        mutation_rate: Option<f64>,
        /// Probability to keep a worsening mutation. Default is 0.1.
        worse_acceptance: Option<f64>,
    },
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
    /// Specifies how often progress is logged. Default depends on the strategy.
    pub log_every: Option<usize>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<SolverConfig> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a search strategy from its configuration.
pub fn create_strategy(config: &StrategyConfig) -> GenericResult<BoxedStrategy> {
    Ok(match config {
        StrategyConfig::SteepestAscent { max_iterations } => Box::new(SteepestAscent::new(*max_iterations)),
        StrategyConfig::Stochastic { max_iterations } => {
            Box::new(max_iterations.map_or_else(StochasticHillClimbing::default, StochasticHillClimbing::new))
        }
        StrategyConfig::Sideways { max_iterations, max_consecutive_sideways, max_total_sideways } => {
            Box::new(SidewaysHillClimbing::new(
                *max_iterations,
                max_consecutive_sideways.unwrap_or(10),
                max_total_sideways.unwrap_or(100),
            ))
        }
        StrategyConfig::RandomRestart { max_restarts, max_iterations_per_restart } => {
            Box::new(RandomRestart::new(max_restarts.unwrap_or(10), *max_iterations_per_restart))
        }
        StrategyConfig::SimulatedAnnealing { max_iterations, initial_temperature, cooling_rate, stuck_threshold } => {
            let defaults = AnnealingConfig::default();
            let config = AnnealingConfig {
                max_iterations: max_iterations.unwrap_or(defaults.max_iterations),
                initial_temperature: initial_temperature.unwrap_or(defaults.initial_temperature),
                cooling_rate: cooling_rate.unwrap_or(defaults.cooling_rate),
                stuck_threshold: stuck_threshold.unwrap_or(defaults.stuck_threshold),
            };

            if !config.initial_temperature.is_finite() || config.initial_temperature < 0. {
                let temperature = config.initial_temperature;
                return Err(format!("initial temperature must be finite and non-negative, got: {temperature}").into());
            }
            if !(config.cooling_rate > 0. && config.cooling_rate <= 1.) {
                return Err(format!("cooling rate must be in (0, 1] range, got: {}", config.cooling_rate).into());
            }
            if config.stuck_threshold == 0 {
                return Err("stuck threshold must be positive".into());
            }

            Box::new(SimulatedAnnealing::new(config))
        }
        StrategyConfig::Genetic { population_size, max_generations, mutation_rate, worse_acceptance } => {
            let defaults = GeneticConfig::default();
            let config = GeneticConfig {
                population_size: population_size.unwrap_or(defaults.population_size),
                max_generations: max_generations.unwrap_or(defaults.max_generations),
                mutation_rate: mutation_rate.unwrap_or(defaults.mutation_rate),
                worse_acceptance: worse_acceptance.unwrap_or(defaults.worse_acceptance),
            };

            if config.population_size == 0 {
                return Err("population size must be positive".into());
            }
            check_probability("mutation rate", config.mutation_rate)?;
            check_probability("worse acceptance", config.worse_acceptance)?;

            Box::new(GeneticAlgorithm::new(config))
        }
    })
}

pub(super) fn create_environment(config: &SolverConfig) -> Environment {
    let environment = config.seed.map_or_else(Environment::default, Environment::new_with_seed);

    Environment { is_parallel: config.parallel.unwrap_or(true), ..environment }
}

pub(super) fn create_telemetry_mode(config: &Option<TelemetryConfig>, environment: &Environment) -> TelemetryMode {
    match config {
        Some(TelemetryConfig { enabled: false, .. }) => TelemetryMode::None,
        Some(TelemetryConfig { enabled: true, log_every }) => {
            TelemetryMode::OnlyLogging { logger: environment.logger.clone(), log_every: *log_every }
        }
        None => TelemetryMode::OnlyLogging { logger: environment.logger.clone(), log_every: None },
    }
}

fn check_probability(name: &str, value: f64) -> GenericResult<()> {
    if (0. ..=1.).contains(&value) {
        Ok(())
    } else {
        Err(format!("{name} must be in [0, 1] range, got: {value}").into())
    }
}
