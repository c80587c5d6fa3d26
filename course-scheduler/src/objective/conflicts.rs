#[cfg(test)]
#[path = "../../tests/unit/objective/conflicts_test.rs"]
mod conflicts_test;

use super::*;
use crate::models::{Registry, StudentId};
use crate::schedule::{Day, Hour, Schedule};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Evaluates schedule by counting student time conflicts.
#[derive(Clone)]
pub struct ConflictObjective {
    registry: Arc<Registry>,
}

/// Describes conflicts of one student at one timeslot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentConflict {
    /// A day.
    pub day: Day,
    /// An hour.
    pub hour: Hour,
    /// A student.
    pub student: StudentId,
    /// Amount of meetings the student attends at this timeslot.
    pub count: usize,
}

/// Conflict score split per timeslot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConflictBreakdown {
    /// Non-zero timeslot scores ordered by day and hour.
    pub timeslots: Vec<((Day, Hour), Score)>,
    /// Total score.
    pub total: Score,
}

impl ConflictObjective {
    /// Creates a new instance of `ConflictObjective`.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Returns the registry used by the objective.
    pub fn registry(&self) -> &Registry {
        self.registry.as_ref()
    }

    pub(crate) fn shared_registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    /// Returns objective value: for every timeslot, every student who attends more than one
    /// meeting contributes the amount of those meetings.
    pub fn evaluate(&self, schedule: &Schedule) -> Score {
        self.tally(schedule).iter().flat_map(|usage| usage.values()).map(|&count| conflict_contribution(count)).sum()
    }

    /// Returns the score split per timeslot.
    pub fn breakdown(&self, schedule: &Schedule) -> ConflictBreakdown {
        let domain = schedule.domain();
        let hours = domain.hours();

        let timeslots = self
            .tally(schedule)
            .iter()
            .enumerate()
            .map(|(timeslot, usage)| {
                let score = usage.values().map(|&count| conflict_contribution(count)).sum::<Score>();
                let key = (domain.days()[timeslot / hours.len()], hours[timeslot % hours.len()]);
                (key, score)
            })
            .filter(|(_, score)| *score > 0)
            .collect::<Vec<_>>();

        let total = timeslots.iter().map(|(_, score)| score).sum();

        ConflictBreakdown { timeslots, total }
    }

    /// Lists students who attend more than one meeting at the same timeslot.
    pub fn conflicting_students(&self, schedule: &Schedule) -> Vec<StudentConflict> {
        let domain = schedule.domain();
        let hours = domain.hours();

        let mut conflicts = self
            .tally(schedule)
            .iter()
            .enumerate()
            .flat_map(|(timeslot, usage)| {
                let (day, hour) = (domain.days()[timeslot / hours.len()], hours[timeslot % hours.len()]);
                usage
                    .iter()
                    .filter(|(_, count)| **count > 1)
                    .map(move |(&student, &count)| StudentConflict { day, hour, student, count })
            })
            .collect::<Vec<_>>();

        conflicts.sort_by(|a, b| (a.day, a.hour, a.student).cmp(&(b.day, b.hour, b.student)));

        conflicts
    }

    /// Counts meetings per student per timeslot.
    pub(crate) fn tally(&self, schedule: &Schedule) -> Vec<FxHashMap<StudentId, usize>> {
        let domain = schedule.domain();
        let mut usage = vec![FxHashMap::<StudentId, usize>::default(); domain.timeslot_count()];

        schedule.iter_assignments().for_each(|(meeting, position)| {
            // NOTE positions stored in the schedule are always part of its domain
            if let Ok(timeslot) = domain.timeslot_index(&position) {
                let students = &mut usage[timeslot];
                self.registry.students_of_meeting(meeting).iter().for_each(|&student| {
                    *students.entry(student).or_insert(0) += 1;
                });
            }
        });

        usage
    }
}
