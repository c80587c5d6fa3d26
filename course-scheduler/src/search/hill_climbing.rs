#[cfg(test)]
#[path = "../../tests/unit/search/hill_climbing_test.rs"]
mod hill_climbing_test;

use super::*;
use crate::neighborhood::Move;
use crate::objective::ConflictTable;
use crate::utils::maybe_parallel_collect;

/// Limits of a single climb.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ClimbLimits {
    pub max_iterations: Option<usize>,
    /// Max consecutive and total sideways moves. Sideways moves are not allowed when not set.
    pub sideways: Option<(usize, usize)>,
}

/// A result of a single steepest ascent climb.
pub(crate) struct ClimbOutcome {
    pub schedule: Schedule,
    pub score: Score,
    pub history: Vec<Score>,
    pub iterations: usize,
    pub stop_reason: StopReason,
    pub total_sideways: usize,
}

/// Runs steepest ascent from the given schedule: on each step, all moves are scored and the one
/// with the minimum score is taken if it improves the current one (or equals it, when sideways
/// moves are allowed).
pub(crate) fn climb(
    context: &SearchContext,
    initial: Schedule,
    limits: ClimbLimits,
    telemetry: &Telemetry,
) -> ClimbOutcome {
    let is_parallel = context.environment.is_parallel;
    let allow_ties = limits.sideways.is_some();

    let mut current = initial;
    let mut table = ConflictTable::new(context.objective.as_ref(), &current);
    let mut score = table.score();
    let mut history = vec![score];
    let mut iterations = 0;
    let (mut consecutive, mut total_sideways) = (0, 0);

    let stop_reason = loop {
        if score == 0 {
            break StopReason::OptimumFound;
        }

        if limits.max_iterations.is_some_and(|max| iterations >= max) {
            break StopReason::IterationLimit;
        }

        iterations += 1;

        let moves = context.neighborhood.moves(&current);
        if moves.is_empty() {
            break StopReason::NoNeighbors;
        }

        let scores = maybe_parallel_collect(&moves, is_parallel, |mv| table.score_after(mv));
        let Some((best_idx, best_score)) = select_best(&scores, score, allow_ties) else {
            break StopReason::LocalOptimum;
        };

        if let Some((max_consecutive, max_total)) = limits.sideways {
            if best_score == score {
                // the attempt counts even when it hits the limit and is not taken
                consecutive += 1;
                total_sideways += 1;

                if consecutive >= max_consecutive {
                    break StopReason::ConsecutiveSidewaysLimit;
                }
                if total_sideways >= max_total {
                    break StopReason::TotalSidewaysLimit;
                }
            } else {
                consecutive = 0;
            }
        }

        apply_move(&mut current, &mut table, &moves[best_idx]);
        score = table.score();
        history.push(score);

        telemetry.on_step(iterations, || format!("iteration {iterations}: score {score}"));
    };

    ClimbOutcome { schedule: current, score, history, iterations, stop_reason, total_sideways }
}

/// Returns index and score of the best candidate which beats the current score. With ties allowed,
/// the last of equal minimums is taken, otherwise the first one.
fn select_best(scores: &[Score], current: Score, allow_ties: bool) -> Option<(usize, Score)> {
    scores.iter().enumerate().fold(None, |best, (idx, &candidate)| {
        let threshold = best.map_or(current, |(_, score)| score);
        let is_better = if allow_ties { candidate <= threshold } else { candidate < threshold };

        if is_better { Some((idx, candidate)) } else { best }
    })
}

fn apply_move(schedule: &mut Schedule, table: &mut ConflictTable, mv: &Move) {
    let is_applied = mv.apply(schedule);
    debug_assert!(is_applied, "move {mv:?} is not applicable");
    table.apply(mv);
}

fn create_result(
    name: &str,
    initial: Schedule,
    outcome: ClimbOutcome,
    telemetry: &Telemetry,
    details: SearchDetails,
) -> SearchResult {
    telemetry.on_stop(outcome.stop_reason, outcome.score, outcome.iterations);

    SearchResult {
        strategy: name.to_string(),
        initial_score: outcome.history.first().copied().unwrap_or(outcome.score),
        initial,
        best: outcome.schedule,
        best_score: outcome.score,
        history: outcome.history,
        iterations: outcome.iterations,
        duration: telemetry.elapsed(),
        stop_reason: outcome.stop_reason,
        details,
    }
}

/// Steepest ascent hill climbing: moves to the best neighbor while it strictly improves the score.
#[derive(Clone, Debug, Default)]
pub struct SteepestAscent {
    max_iterations: Option<usize>,
}

impl SteepestAscent {
    /// Creates a new instance of `SteepestAscent`. Runs until local optimum when `max_iterations` is not set.
    pub fn new(max_iterations: Option<usize>) -> Self {
        Self { max_iterations }
    }
}

impl SearchStrategy for SteepestAscent {
    fn name(&self) -> &str {
        "steepest ascent"
    }

    fn search_from(&self, context: &SearchContext, initial: Schedule) -> SearchResult {
        let telemetry = Telemetry::new(&context.telemetry, self.name(), 10);
        telemetry.on_start(context.evaluate(&initial));

        let limits = ClimbLimits { max_iterations: self.max_iterations, sideways: None };
        let outcome = climb(context, initial.clone(), limits, &telemetry);

        create_result(self.name(), initial, outcome, &telemetry, SearchDetails::None)
    }
}

/// Stochastic hill climbing: picks one random neighbor per iteration and takes it only when it
/// strictly improves the score.
#[derive(Clone, Debug)]
pub struct StochasticHillClimbing {
    max_iterations: usize,
}

impl StochasticHillClimbing {
    /// Creates a new instance of `StochasticHillClimbing`.
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }
}

impl Default for StochasticHillClimbing {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl SearchStrategy for StochasticHillClimbing {
    fn name(&self) -> &str {
        "stochastic hill climbing"
    }

    fn search_from(&self, context: &SearchContext, initial: Schedule) -> SearchResult {
        let telemetry = Telemetry::new(&context.telemetry, self.name(), 10);

        let mut current = initial.clone();
        let mut table = ConflictTable::new(context.objective.as_ref(), &current);
        let mut score = table.score();
        let mut history = vec![score];
        let mut iterations = 0;

        telemetry.on_start(score);

        let stop_reason = loop {
            if score == 0 {
                break StopReason::OptimumFound;
            }

            if iterations >= self.max_iterations {
                break StopReason::IterationLimit;
            }

            iterations += 1;

            let Some(mv) = context.neighborhood.random_move(&current, context.random()) else {
                break StopReason::NoNeighbors;
            };

            if table.score_after(&mv) < score {
                apply_move(&mut current, &mut table, &mv);
                score = table.score();
            }

            history.push(score);
            telemetry.on_step(iterations, || format!("iteration {iterations}: score {score}"));
        };

        let outcome = ClimbOutcome { schedule: current, score, history, iterations, stop_reason, total_sideways: 0 };

        create_result(self.name(), initial, outcome, &telemetry, SearchDetails::None)
    }
}

/// Steepest ascent which also accepts moves keeping the score unchanged, within limits on
/// consecutive and total amount of such moves.
#[derive(Clone, Debug)]
pub struct SidewaysHillClimbing {
    max_iterations: Option<usize>,
    max_consecutive_sideways: usize,
    max_total_sideways: usize,
}

impl SidewaysHillClimbing {
    /// Creates a new instance of `SidewaysHillClimbing`.
    pub fn new(max_iterations: Option<usize>, max_consecutive_sideways: usize, max_total_sideways: usize) -> Self {
        Self { max_iterations, max_consecutive_sideways, max_total_sideways }
    }
}

impl Default for SidewaysHillClimbing {
    fn default() -> Self {
        Self::new(None, 10, 100)
    }
}

impl SearchStrategy for SidewaysHillClimbing {
    fn name(&self) -> &str {
        "sideways hill climbing"
    }

    fn search_from(&self, context: &SearchContext, initial: Schedule) -> SearchResult {
        let telemetry = Telemetry::new(&context.telemetry, self.name(), 10);
        telemetry.on_start(context.evaluate(&initial));

        let limits = ClimbLimits {
            max_iterations: self.max_iterations,
            sideways: Some((self.max_consecutive_sideways, self.max_total_sideways)),
        };
        let outcome = climb(context, initial.clone(), limits, &telemetry);
        let details = SearchDetails::Sideways { total_sideways: outcome.total_sideways };

        create_result(self.name(), initial, outcome, &telemetry, details)
    }
}
