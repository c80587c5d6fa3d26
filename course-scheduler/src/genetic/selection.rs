#[cfg(test)]
#[path = "../../tests/unit/genetic/selection_test.rs"]
mod selection_test;

use crate::objective::Score;
use crate::utils::Random;
use rand::seq::index::sample;

/// Returns tournament size which scales with population size.
pub fn tournament_size(population_size: usize) -> usize {
    match population_size {
        0..5 => 1,
        5..10 => 2,
        10..20 => 3,
        _ => 5,
    }
}

/// Runs one tournament: draws distinct candidates uniformly at random and returns index of
/// the one with the lowest score. Ties are resolved in favor of the candidate drawn first.
pub fn tournament_select(scores: &[Score], size: usize, random: &(dyn Random + Send + Sync)) -> usize {
    assert!(!scores.is_empty());

    let amount = size.clamp(1, scores.len());
    let candidates = sample(&mut random.get_rng(), scores.len(), amount);

    candidates.iter().fold(None, |best: Option<usize>, idx| match best {
        Some(best) if scores[best] <= scores[idx] => Some(best),
        _ => Some(idx),
    })
    .unwrap_or(0)
}

/// Selects `amount` parents using tournament selection. Returns indices in the population.
pub fn select_parents(scores: &[Score], amount: usize, random: &(dyn Random + Send + Sync)) -> Vec<usize> {
    let size = tournament_size(scores.len());

    (0..amount).map(|_| tournament_select(scores, size, random)).collect()
}
