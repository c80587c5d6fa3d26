#[cfg(test)]
#[path = "../../tests/unit/genetic/mutation_test.rs"]
mod mutation_test;

use super::GeneticConfig;
use crate::models::{MeetingId, Registry};
use crate::neighborhood::Move;
use crate::objective::{ConflictObjective, Score};
use crate::schedule::{Hour, Position, Schedule};
use crate::utils::{Random, random_index};

/// A mutation which can be applied to a schedule in place and undone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    /// Exchanges positions of two placed meetings.
    Swap(Position, Position),
    /// Moves one meeting to a free position.
    Relocate(Move),
}

impl Mutation {
    /// Applies the mutation.
    pub fn apply(&self, schedule: &mut Schedule) -> bool {
        match self {
            Self::Swap(a, b) => schedule.swap(a, b),
            Self::Relocate(mv) => mv.apply(schedule),
        }
    }

    /// Undoes previously applied mutation.
    pub fn undo(&self, schedule: &mut Schedule) -> bool {
        match self {
            Self::Swap(a, b) => schedule.swap(b, a),
            Self::Relocate(mv) => mv.revert(schedule),
        }
    }
}

/// Proposes one of three mutation kinds chosen uniformly: swap of two meetings, relocation of
/// a meeting into a free legal slot, or a shift of a meeting by one hour. Returns `None` when
/// the chosen kind is not applicable.
pub fn propose_mutation(
    registry: &Registry,
    schedule: &Schedule,
    random: &(dyn Random + Send + Sync),
) -> Option<Mutation> {
    let placed = schedule.iter_assignments().collect::<Vec<_>>();
    if placed.is_empty() {
        return None;
    }

    match random.uniform_int(0, 2) {
        0 => propose_swap(registry, &placed, random),
        1 => propose_relocate(registry, schedule, &placed, random),
        _ => propose_shift(schedule, &placed, random),
    }
}

fn propose_swap(
    registry: &Registry,
    placed: &[(MeetingId, Position)],
    random: &(dyn Random + Send + Sync),
) -> Option<Mutation> {
    if placed.len() < 2 {
        return None;
    }

    let first = random_index(random, placed.len());
    let second = (first + 1 + random_index(random, placed.len() - 1)) % placed.len();

    let ((a_meeting, a), (b_meeting, b)) = (placed[first], placed[second]);

    // both meetings have to fit into each other's classroom
    if registry.is_legal(a_meeting, b.room) && registry.is_legal(b_meeting, a.room) {
        Some(Mutation::Swap(a, b))
    } else {
        None
    }
}

fn propose_relocate(
    registry: &Registry,
    schedule: &Schedule,
    placed: &[(MeetingId, Position)],
    random: &(dyn Random + Send + Sync),
) -> Option<Mutation> {
    let (meeting, from) = placed[random_index(random, placed.len())];

    let targets = schedule
        .all_free_positions()
        .into_iter()
        .filter(|position| registry.is_legal(meeting, position.room))
        .collect::<Vec<_>>();

    if targets.is_empty() {
        None
    } else {
        Some(Mutation::Relocate(Move::new(meeting, from, targets[random_index(random, targets.len())])))
    }
}

fn propose_shift(
    schedule: &Schedule,
    placed: &[(MeetingId, Position)],
    random: &(dyn Random + Send + Sync),
) -> Option<Mutation> {
    let (meeting, from) = placed[random_index(random, placed.len())];

    let hour = if random.is_head_not_tails() { from.hour.checked_add(1) } else { from.hour.checked_sub(1) };
    let hour: Hour = hour.filter(|&hour| schedule.domain().contains_hour(hour))?;

    let to = Position::new(from.day, hour, from.room);

    if schedule.is_empty(&to) { Some(Mutation::Relocate(Move::new(meeting, from, to))) } else { None }
}

/// Mutates the individual in place with `mutation_rate` probability. The mutation is kept when it
/// does not worsen the score or, otherwise, with `worse_acceptance` probability. Returns the new score.
pub fn mutate(
    objective: &ConflictObjective,
    schedule: &mut Schedule,
    score: Score,
    config: &GeneticConfig,
    random: &(dyn Random + Send + Sync),
) -> Score {
    if !random.is_hit(config.mutation_rate) {
        return score;
    }

    let Some(mutation) = propose_mutation(objective.registry(), schedule, random) else {
        return score;
    };

    mutation.apply(schedule);
    let new_score = objective.evaluate(schedule);

    if new_score <= score || random.is_hit(config.worse_acceptance) {
        new_score
    } else {
        mutation.undo(schedule);
        score
    }
}
