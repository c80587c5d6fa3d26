//! A population based search: tournament selection, one-point crossover over courses with
//! repair, and in place mutations with weak acceptance of worse individuals.

#[cfg(test)]
#[path = "../../tests/unit/genetic/genetic_test.rs"]
mod genetic_test;

use crate::objective::Score;
use crate::schedule::Schedule;
use crate::search::{SearchContext, SearchDetails, SearchResult, SearchStrategy, StopReason, Telemetry};
use crate::utils::maybe_parallel_collect;

mod crossover;
pub use self::crossover::*;

mod mutation;
pub use self::mutation::*;

mod selection;
pub use self::selection::*;

/// Genetic algorithm configuration.
#[derive(Clone, Debug)]
pub struct GeneticConfig {
    /// Amount of individuals in each generation.
    pub population_size: usize,
    /// Amount of generations.
    pub max_generations: usize,
    /// Probability to mutate an offspring.
    pub mutation_rate: f64,
    /// Probability to keep a mutation which makes an offspring worse.
    pub worse_acceptance: f64,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self { population_size: 20, max_generations: 100, mutation_rate: 0.1, worse_acceptance: 0.1 }
    }
}

/// A generational genetic algorithm. The whole population is replaced by offspring on each
/// generation, the best ever individual is tracked separately.
#[derive(Clone, Debug, Default)]
pub struct GeneticAlgorithm {
    config: GeneticConfig,
}

impl GeneticAlgorithm {
    /// Creates a new instance of `GeneticAlgorithm`.
    pub fn new(config: GeneticConfig) -> Self {
        Self { config }
    }

    fn create_offspring(
        &self,
        context: &SearchContext,
        population: &[Schedule],
        scores: &[Score],
    ) -> (Vec<Schedule>, usize) {
        let random = context.random();
        let parents = select_parents(scores, population.len(), random);

        parents.chunks(2).fold((Vec::with_capacity(population.len()), 0), |(mut offspring, fallbacks), pair| {
            match *pair {
                [left, right] => {
                    let outcome = crossover(context.registry.as_ref(), &population[left], &population[right], random);
                    let (left_child, right_child) = outcome.children;
                    offspring.push(left_child);
                    offspring.push(right_child);

                    (offspring, fallbacks + usize::from(outcome.is_fallback))
                }
                _ => {
                    offspring.extend(pair.iter().map(|&idx| population[idx].clone()));
                    (offspring, fallbacks)
                }
            }
        })
    }
}

impl SearchStrategy for GeneticAlgorithm {
    fn name(&self) -> &str {
        "genetic algorithm"
    }

    /// Uses the given schedule as the first individual, the rest of the population is random.
    /// The best individual of the initial population is reported as the initial schedule.
    fn search_from(&self, context: &SearchContext, initial: Schedule) -> SearchResult {
        let telemetry = Telemetry::new(&context.telemetry, self.name(), 10);
        let is_parallel = context.environment.is_parallel;
        let population_size = self.config.population_size.max(1);

        let mut population = std::iter::once(initial)
            .chain((1..population_size).map(|_| context.random_schedule()))
            .collect::<Vec<_>>();
        let mut scores = maybe_parallel_collect(&population, is_parallel, |individual| context.evaluate(individual));

        let (best_idx, mut best_score) = get_best(&scores);
        let mut best = population[best_idx].clone();
        let initial = best.clone();
        let initial_score = best_score;

        let mut history = vec![best_score];
        let mut average_history = vec![get_average(&scores)];
        let mut crossover_fallbacks = 0;
        let mut generation = 0;

        telemetry.on_start(best_score);

        let stop_reason = loop {
            if best_score == 0 {
                break StopReason::OptimumFound;
            }

            if generation >= self.config.max_generations {
                break StopReason::GenerationLimit;
            }

            generation += 1;

            let (mut offspring, fallbacks) = self.create_offspring(context, &population, &scores);
            crossover_fallbacks += fallbacks;

            let offspring_scores =
                maybe_parallel_collect(&offspring, is_parallel, |individual| context.evaluate(individual));

            // mutations share one random sequence, so they run in order
            scores = offspring
                .iter_mut()
                .zip(offspring_scores)
                .map(|(individual, score)| {
                    mutate(context.objective.as_ref(), individual, score, &self.config, context.random())
                })
                .collect();
            population = offspring;

            let (generation_best_idx, generation_best_score) = get_best(&scores);
            if generation_best_score < best_score {
                best_score = generation_best_score;
                best = population[generation_best_idx].clone();
            }

            let average = get_average(&scores);
            history.push(best_score);
            average_history.push(average);

            telemetry.on_step(generation, || {
                format!("generation {generation}: best {best_score}, average {average:.2}")
            });
        };

        telemetry.on_stop(stop_reason, best_score, generation);

        SearchResult {
            strategy: self.name().to_string(),
            initial,
            initial_score,
            best,
            best_score,
            history,
            iterations: generation,
            duration: telemetry.elapsed(),
            stop_reason,
            details: SearchDetails::Genetic { average_history, crossover_fallbacks },
        }
    }
}

/// Returns index and score of the first individual with the lowest score.
fn get_best(scores: &[Score]) -> (usize, Score) {
    scores.iter().copied().enumerate().min_by_key(|&(_, score)| score).unwrap_or((0, Score::MAX))
}

fn get_average(scores: &[Score]) -> f64 {
    if scores.is_empty() { 0. } else { scores.iter().sum::<Score>() as f64 / scores.len() as f64 }
}
