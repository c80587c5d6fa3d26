//! Generates schedules reachable from a given one by relocating exactly one meeting.
//!
//! Neighbors are represented as [`Move`] values which are applied to (and reverted on) an
//! owned schedule instead of cloning the whole grid per candidate.

#[cfg(test)]
#[path = "../../tests/unit/neighborhood/neighborhood_test.rs"]
mod neighborhood_test;

use crate::models::{MeetingId, Registry};
use crate::schedule::{Position, Schedule};
use crate::utils::{Random, random_index};
use std::sync::Arc;

/// A relocation of one meeting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    /// A meeting to relocate.
    pub meeting: MeetingId,
    /// Current position of the meeting.
    pub from: Position,
    /// A target position.
    pub to: Position,
}

impl Move {
    /// Creates a new instance of `Move`.
    pub fn new(meeting: MeetingId, from: Position, to: Position) -> Self {
        Self { meeting, from, to }
    }

    /// Returns a move which undoes this one.
    pub fn inverse(&self) -> Self {
        Self { meeting: self.meeting, from: self.to, to: self.from }
    }

    /// Applies the move to the schedule. Returns false if the schedule does not allow it.
    pub fn apply(&self, schedule: &mut Schedule) -> bool {
        schedule.who_at(&self.from) == Some(self.meeting) && schedule.relocate(&self.from, &self.to)
    }

    /// Reverts the move previously applied to the schedule.
    pub fn revert(&self, schedule: &mut Schedule) -> bool {
        self.inverse().apply(schedule)
    }
}

/// Enumerates one-move neighbors of a schedule.
#[derive(Clone)]
pub struct Neighborhood {
    registry: Arc<Registry>,
}

impl Neighborhood {
    /// Creates a new instance of `Neighborhood`.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Returns all moves which relocate one placed meeting into a free legal classroom at some
    /// (day, hour) of the domain where the whole meeting duration fits.
    ///
    /// The order is fixed: placed meetings by id, then days, hours and legal classrooms.
    /// An empty result means the search is in a dead end.
    pub fn moves(&self, schedule: &Schedule) -> Vec<Move> {
        let domain = schedule.domain();
        let max_hour = domain.max_hour() as usize;

        schedule
            .iter_assignments()
            .flat_map(|(meeting, current)| {
                let duration = self.registry.meeting(meeting).map_or(1, |meeting| meeting.duration.max(1));
                let legal_rooms = self.registry.legal_classrooms(meeting);

                domain.days().iter().flat_map(move |&day| {
                    domain.hours().iter().flat_map(move |&hour| {
                        let fits = hour as usize + duration <= max_hour + 1
                            && (0..duration).all(|offset| domain.contains_hour(hour + offset as u8));

                        legal_rooms
                            .iter()
                            .filter(move |_| fits)
                            .map(move |&room| Position::new(day, hour, room))
                            .filter(move |target| *target != current)
                            .filter(move |target| {
                                (0..duration).all(|offset| {
                                    let cell = Position::new(day, target.hour + offset as u8, target.room);
                                    schedule.who_at(&cell).is_none_or(|occupant| occupant == meeting)
                                })
                            })
                            .map(move |target| Move::new(meeting, current, target))
                    })
                })
            })
            .collect()
    }

    /// Returns one uniformly chosen move or `None` when there are no moves.
    pub fn random_move(&self, schedule: &Schedule, random: &(dyn Random + Send + Sync)) -> Option<Move> {
        let moves = self.moves(schedule);

        if moves.is_empty() { None } else { Some(moves[random_index(random, moves.len())]) }
    }

    /// Returns all neighbors as independent schedule copies.
    pub fn neighbors(&self, schedule: &Schedule) -> Vec<Schedule> {
        self.moves(schedule).iter().map(|mv| Self::materialize(schedule, mv)).collect()
    }

    /// Returns one uniformly chosen neighbor as an independent copy.
    pub fn random_neighbor(&self, schedule: &Schedule, random: &(dyn Random + Send + Sync)) -> Option<Schedule> {
        self.random_move(schedule, random).map(|mv| Self::materialize(schedule, &mv))
    }

    /// Creates a copy of the schedule with the move applied.
    pub fn materialize(schedule: &Schedule, mv: &Move) -> Schedule {
        let mut neighbor = schedule.clone();
        mv.apply(&mut neighbor);

        neighbor
    }
}
