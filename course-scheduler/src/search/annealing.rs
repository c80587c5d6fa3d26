#[cfg(test)]
#[path = "../../tests/unit/search/annealing_test.rs"]
mod annealing_test;

use super::*;
use crate::objective::ConflictTable;

/// Returns a probability to accept a move which changes the score by `delta` at the given temperature:
/// improving moves are always accepted, others with `exp(-delta / temperature)` probability.
pub fn acceptance_probability(delta: i64, temperature: f64) -> f64 {
    if delta < 0 { 1. } else { (-(delta as f64) / (temperature + 1E-8)).exp() }
}

/// Simulated annealing configuration.
#[derive(Clone, Debug)]
pub struct AnnealingConfig {
    /// Amount of iterations.
    pub max_iterations: usize,
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Temperature multiplier applied after each iteration.
    pub cooling_rate: f64,
    /// Amount of iterations without best score improvement which is counted as a stuck event.
    pub stuck_threshold: usize,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self { max_iterations: 1000, initial_temperature: 100., cooling_rate: 0.99, stuck_threshold: 50 }
    }
}

/// Simulated annealing: samples one random neighbor per iteration, always accepts improvements and
/// accepts deteriorations with a probability decreasing with temperature. The best ever schedule is kept.
#[derive(Clone, Debug, Default)]
pub struct SimulatedAnnealing {
    config: AnnealingConfig,
}

impl SimulatedAnnealing {
    /// Creates a new instance of `SimulatedAnnealing`.
    pub fn new(config: AnnealingConfig) -> Self {
        Self { config }
    }
}

impl SearchStrategy for SimulatedAnnealing {
    fn name(&self) -> &str {
        "simulated annealing"
    }

    fn search_from(&self, context: &SearchContext, initial: Schedule) -> SearchResult {
        let telemetry = Telemetry::new(&context.telemetry, self.name(), 100);
        let random = context.random();

        let mut current = initial.clone();
        let mut table = ConflictTable::new(context.objective.as_ref(), &current);
        let mut score = table.score();
        let mut best = current.clone();
        let mut best_score = score;
        let mut temperature = self.config.initial_temperature;

        let mut history = vec![score];
        let mut acceptance_history = Vec::with_capacity(self.config.max_iterations);
        let (mut stuck_events, mut without_improvement) = (0, 0);
        let mut iterations = 0;

        telemetry.on_start(score);

        let stop_reason = loop {
            if best_score == 0 {
                break StopReason::OptimumFound;
            }

            if iterations >= self.config.max_iterations {
                break StopReason::IterationLimit;
            }

            let Some(mv) = context.neighborhood.random_move(&current, random) else {
                break StopReason::NoNeighbors;
            };

            let delta = table.delta(&mv);
            let probability = acceptance_probability(delta, temperature);
            acceptance_history.push(probability);

            if delta < 0 || random.uniform_real(0., 1.) < probability {
                mv.apply(&mut current);
                table.apply(&mv);
                score = table.score();

                if score < best_score {
                    best = current.clone();
                    best_score = score;
                    without_improvement = 0;
                } else {
                    without_improvement += 1;
                }
            } else {
                without_improvement += 1;
            }

            history.push(score);

            if without_improvement >= self.config.stuck_threshold {
                stuck_events += 1;
                without_improvement = 0;
            }

            temperature *= self.config.cooling_rate;

            telemetry.on_step(iterations, || {
                format!(
                    "iteration {iterations}: score {score}, best {best_score}, temperature {temperature:.2}, stuck {stuck_events}"
                )
            });

            iterations += 1;
        };

        telemetry.on_stop(stop_reason, best_score, iterations);
        telemetry.log(&format!("total stuck events: {stuck_events}"));

        SearchResult {
            strategy: self.name().to_string(),
            initial_score: history[0],
            initial,
            best,
            best_score,
            history,
            iterations,
            duration: telemetry.elapsed(),
            stop_reason,
            details: SearchDetails::Annealing { acceptance_history, stuck_events, final_temperature: temperature },
        }
    }
}
