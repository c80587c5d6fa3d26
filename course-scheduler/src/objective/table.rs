#[cfg(test)]
#[path = "../../tests/unit/objective/table_test.rs"]
mod table_test;

use super::*;
use crate::models::{MeetingId, Registry, StudentId};
use crate::neighborhood::Move;
use crate::schedule::{Position, Schedule, ScheduleDomain};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Keeps per timeslot student usage of one schedule, so the score change of a single
/// relocation can be computed by touching only two timeslots.
///
/// The table mirrors the schedule it was built from: every move applied to the schedule
/// has to be applied to the table as well.
#[derive(Clone)]
pub struct ConflictTable {
    registry: Arc<Registry>,
    domain: Arc<ScheduleDomain>,
    usage: Vec<FxHashMap<StudentId, usize>>,
    score: Score,
}

impl ConflictTable {
    /// Creates a table for the given schedule.
    pub fn new(objective: &ConflictObjective, schedule: &Schedule) -> Self {
        let registry = objective.shared_registry();
        let usage = objective.tally(schedule);
        let score =
            usage.iter().flat_map(|students| students.values()).map(|&count| conflict_contribution(count)).sum();

        Self { registry, domain: schedule.shared_domain(), usage, score }
    }

    /// Returns current score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns a score change caused by the move without applying it.
    pub fn delta(&self, mv: &Move) -> i64 {
        let (from, to) = (self.timeslot(&mv.from), self.timeslot(&mv.to));
        if from == to {
            return 0;
        }

        self.registry
            .students_of_meeting(mv.meeting)
            .iter()
            .map(|student| {
                let old_count = self.usage[from].get(student).copied().unwrap_or(0);
                let new_count = self.usage[to].get(student).copied().unwrap_or(0);

                contribution_change(old_count, old_count.saturating_sub(1))
                    + contribution_change(new_count, new_count + 1)
            })
            .sum()
    }

    /// Returns a score after the move without applying it.
    pub fn score_after(&self, mv: &Move) -> Score {
        (self.score as i64 + self.delta(mv)).max(0) as Score
    }

    /// Applies the move to the table.
    pub fn apply(&mut self, mv: &Move) {
        let delta = self.delta(mv);
        let (from, to) = (self.timeslot(&mv.from), self.timeslot(&mv.to));

        if from != to {
            self.shift(mv.meeting, from, to);
        }

        self.score = (self.score as i64 + delta).max(0) as Score;
    }

    /// Reverts previously applied move.
    pub fn revert(&mut self, mv: &Move) {
        self.apply(&mv.inverse())
    }

    fn shift(&mut self, meeting: MeetingId, from: usize, to: usize) {
        let registry = self.registry.clone();

        registry.students_of_meeting(meeting).iter().for_each(|&student| {
            if let Some(count) = self.usage[from].get_mut(&student) {
                *count -= 1;
                if *count == 0 {
                    self.usage[from].remove(&student);
                }
            }

            *self.usage[to].entry(student).or_insert(0) += 1;
        });
    }

    fn timeslot(&self, position: &Position) -> usize {
        match self.domain.timeslot_index(position) {
            Ok(timeslot) => timeslot,
            Err(err) => panic!("position {position} is outside of schedule domain: {err}"),
        }
    }
}

fn contribution_change(old_count: usize, new_count: usize) -> i64 {
    conflict_contribution(new_count) as i64 - conflict_contribution(old_count) as i64
}
