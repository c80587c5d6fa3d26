#[cfg(test)]
#[path = "../../tests/unit/search/restart_test.rs"]
mod restart_test;

use super::*;

/// Random restart hill climbing: runs steepest ascent from fresh random schedules and keeps
/// the best result across restarts.
#[derive(Clone, Debug)]
pub struct RandomRestart {
    max_restarts: usize,
    max_iterations_per_restart: Option<usize>,
}

impl RandomRestart {
    /// Creates a new instance of `RandomRestart`.
    pub fn new(max_restarts: usize, max_iterations_per_restart: Option<usize>) -> Self {
        Self { max_restarts, max_iterations_per_restart }
    }
}

impl Default for RandomRestart {
    fn default() -> Self {
        Self::new(10, None)
    }
}

impl SearchStrategy for RandomRestart {
    fn name(&self) -> &str {
        "random restart hill climbing"
    }

    /// Uses the given schedule as the starting point of the first restart only.
    fn search_from(&self, context: &SearchContext, initial: Schedule) -> SearchResult {
        let telemetry = Telemetry::new(&context.telemetry, self.name(), 10);
        let limits = ClimbLimits { max_iterations: self.max_iterations_per_restart, sideways: None };

        let initial_score = context.evaluate(&initial);
        telemetry.on_start(initial_score);

        let mut best = initial.clone();
        let mut best_score = initial_score;
        let mut history = vec![initial_score];
        let mut records = Vec::with_capacity(self.max_restarts);
        let mut next_start = Some(initial.clone());

        let stop_reason = loop {
            if records.len() >= self.max_restarts {
                break StopReason::RestartLimit;
            }

            let start = next_start.take().unwrap_or_else(|| context.random_schedule());
            let start_score = context.evaluate(&start);
            let outcome = climb(context, start, limits, &telemetry);

            records.push(RestartRecord {
                initial_score: start_score,
                final_score: outcome.score,
                iterations: outcome.iterations,
                stop_reason: outcome.stop_reason,
            });

            if outcome.score < best_score {
                best_score = outcome.score;
                best = outcome.schedule;
            }

            history.push(best_score);
            telemetry.log(&format!(
                "restart {}/{}: {} -> {} ({}), global best: {best_score}",
                records.len(),
                self.max_restarts,
                start_score,
                outcome.score,
                outcome.stop_reason
            ));

            if best_score == 0 {
                break StopReason::OptimumFound;
            }
        };

        telemetry.on_stop(stop_reason, best_score, records.len());

        SearchResult {
            strategy: self.name().to_string(),
            initial,
            initial_score,
            best,
            best_score,
            history,
            iterations: records.len(),
            duration: telemetry.elapsed(),
            stop_reason,
            details: SearchDetails::Restarts(records),
        }
    }
}
