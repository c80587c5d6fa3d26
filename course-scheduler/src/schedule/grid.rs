#[cfg(test)]
#[path = "../../tests/unit/schedule/grid_test.rs"]
mod grid_test;

use super::*;
use crate::models::{MeetingId, Registry};
use crate::utils::Random;
use rand::seq::SliceRandom;
use std::sync::Arc;

/// A mutable weekly schedule: an occupancy grid from (day, hour, classroom) to a meeting and
/// a reverse index from a meeting to its position. Both structures are kept in sync by every
/// mutation, so they always form a bijection between placed meetings and occupied cells.
///
/// Operations expect positions from the schedule's domain and panic otherwise: using a foreign
/// position is a contract violation. Use [`Schedule::check`] to validate untrusted input.
#[derive(Clone, Debug)]
pub struct Schedule {
    domain: Arc<ScheduleDomain>,
    occupancy: Vec<Option<MeetingId>>,
    where_is: Vec<Option<Position>>,
    placed: usize,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new(domain: Arc<ScheduleDomain>) -> Self {
        let occupancy = vec![None; domain.slot_count()];
        Self { domain, occupancy, where_is: Vec::new(), placed: 0 }
    }

    /// Creates a schedule where given meetings are paired with randomly shuffled cells.
    /// Classroom legality is ignored, so the result is a noisy starting point for optimization.
    /// When there are more meetings than cells, the rest stays unplaced.
    pub fn new_random<I>(domain: Arc<ScheduleDomain>, meetings: I, random: &(dyn Random + Send + Sync)) -> Self
    where
        I: IntoIterator<Item = MeetingId>,
    {
        let mut schedule = Self::new(domain);

        let mut positions = schedule.all_free_positions();
        positions.shuffle(&mut random.get_rng());

        meetings.into_iter().zip(positions).for_each(|(meeting, position)| {
            schedule.place(meeting, position);
        });

        schedule
    }

    /// Creates a random initial assignment of all registry meetings.
    pub fn random_initial_assignment(
        registry: &Registry,
        domain: Arc<ScheduleDomain>,
        random: &(dyn Random + Send + Sync),
    ) -> Self {
        Self::new_random(domain, 0..registry.meeting_count(), random)
    }

    /// Returns schedule domain.
    pub fn domain(&self) -> &ScheduleDomain {
        self.domain.as_ref()
    }

    /// Returns schedule domain as shared reference.
    pub fn shared_domain(&self) -> Arc<ScheduleDomain> {
        self.domain.clone()
    }

    /// Checks whether the position belongs to the schedule domain.
    pub fn check(&self, position: &Position) -> Result<(), InvalidPosition> {
        self.domain.check(position)
    }

    /// Returns true if there is no meeting at given position.
    pub fn is_empty(&self, position: &Position) -> bool {
        self.occupancy[self.slot(position)].is_none()
    }

    /// Returns a meeting at given position.
    pub fn who_at(&self, position: &Position) -> Option<MeetingId> {
        self.occupancy[self.slot(position)]
    }

    /// Returns a position of the meeting, if it is placed.
    pub fn get_position(&self, meeting: MeetingId) -> Option<Position> {
        self.where_is.get(meeting).copied().flatten()
    }

    /// Places the meeting at given position. Returns false without any change if the position
    /// is occupied. If the meeting is already placed somewhere else, it is moved.
    pub fn place(&mut self, meeting: MeetingId, position: Position) -> bool {
        let slot = self.slot(&position);
        if self.occupancy[slot].is_some() {
            return false;
        }

        match self.get_position(meeting) {
            Some(old) => {
                let old_slot = self.slot(&old);
                self.occupancy[old_slot] = None;
            }
            None => self.placed += 1,
        }

        self.occupancy[slot] = Some(meeting);
        self.set_position(meeting, Some(position));

        true
    }

    /// Removes whatever meeting is at the position and returns it.
    pub fn remove(&mut self, position: &Position) -> Option<MeetingId> {
        let slot = self.slot(position);
        let meeting = self.occupancy[slot].take()?;

        self.set_position(meeting, None);
        self.placed -= 1;

        Some(meeting)
    }

    /// Removes the meeting from the schedule wherever it is. Returns its former position.
    pub fn unplace(&mut self, meeting: MeetingId) -> Option<Position> {
        let position = self.get_position(meeting)?;
        self.remove(&position);

        Some(position)
    }

    /// Moves a meeting from source to destination. Returns false without any change if
    /// the source is empty or destination is occupied.
    pub fn relocate(&mut self, src: &Position, dst: &Position) -> bool {
        let (src_slot, dst_slot) = (self.slot(src), self.slot(dst));

        match (self.occupancy[src_slot], self.occupancy[dst_slot]) {
            (Some(meeting), None) => {
                self.occupancy[src_slot] = None;
                self.occupancy[dst_slot] = Some(meeting);
                self.set_position(meeting, Some(*dst));
                true
            }
            _ => false,
        }
    }

    /// Exchanges occupants of two positions, any of them can be empty. Always succeeds.
    pub fn swap(&mut self, a: &Position, b: &Position) -> bool {
        let (a_slot, b_slot) = (self.slot(a), self.slot(b));

        let a_meeting = self.occupancy[a_slot];
        let b_meeting = self.occupancy[b_slot];

        self.occupancy[a_slot] = b_meeting;
        self.occupancy[b_slot] = a_meeting;

        if let Some(meeting) = a_meeting {
            self.set_position(meeting, Some(*b));
        }

        if let Some(meeting) = b_meeting {
            self.set_position(meeting, Some(*a));
        }

        true
    }

    /// Returns all empty positions ordered by day, hour and classroom.
    pub fn all_free_positions(&self) -> Vec<Position> {
        self.occupancy
            .iter()
            .enumerate()
            .filter(|(_, meeting)| meeting.is_none())
            .map(|(slot, _)| self.domain.position_at(slot))
            .collect()
    }

    /// Returns all assignments ordered by meeting id.
    pub fn iter_assignments(&self) -> impl Iterator<Item = (MeetingId, Position)> + '_ {
        self.where_is.iter().enumerate().filter_map(|(meeting, position)| position.map(|position| (meeting, position)))
    }

    /// Returns amount of placed meetings.
    pub fn placed_count(&self) -> usize {
        self.placed
    }

    /// Returns registry meetings which are not placed.
    pub fn unplaced(&self, registry: &Registry) -> Vec<MeetingId> {
        (0..registry.meeting_count()).filter(|&meeting| self.get_position(meeting).is_none()).collect()
    }

    /// Returns placed meetings which sit in a classroom which cannot host them.
    pub fn capacity_violations(&self, registry: &Registry) -> Vec<MeetingId> {
        self.iter_assignments()
            .filter(|(meeting, position)| !registry.is_legal(*meeting, position.room))
            .map(|(meeting, _)| meeting)
            .collect()
    }

    fn slot(&self, position: &Position) -> usize {
        match self.domain.slot_index(position) {
            Ok(slot) => slot,
            Err(err) => panic!("position {position} is outside of schedule domain: {err}"),
        }
    }

    fn set_position(&mut self, meeting: MeetingId, position: Option<Position>) {
        if meeting >= self.where_is.len() {
            if position.is_none() {
                return;
            }
            self.where_is.resize(meeting + 1, None);
        }

        self.where_is[meeting] = position;
    }
}

impl PartialEq for Schedule {
    fn eq(&self, other: &Self) -> bool {
        // NOTE reverse index is derived from occupancy, so comparing the grid is enough
        (Arc::ptr_eq(&self.domain, &other.domain) || self.domain == other.domain) && self.occupancy == other.occupancy
    }
}

impl Eq for Schedule {}
