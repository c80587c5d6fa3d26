#[cfg(test)]
#[path = "../../tests/unit/schedule/domain_test.rs"]
mod domain_test;

use super::{Day, Hour};
use crate::models::{Registry, RoomId};
use crate::utils::{GenericError, GenericResult};
use rustc_hash::FxHashSet;
use std::fmt;
use std::ops::RangeInclusive;

/// Hours used by the default weekly domain.
pub const DEFAULT_HOURS: RangeInclusive<Hour> = 7..=17;

/// A cell of the schedule grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// A day.
    pub day: Day,
    /// A start hour.
    pub hour: Hour,
    /// A classroom id.
    pub room: RoomId,
}

impl Position {
    /// Creates a new instance of `Position`.
    pub fn new(day: Day, hour: Hour, room: RoomId) -> Self {
        Self { day, hour, room }
    }

    /// Returns true if both positions share the same (day, hour) timeslot.
    pub fn same_timeslot(&self, other: &Position) -> bool {
        self.day == other.day && self.hour == other.hour
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:02}:00, room #{})", self.day, self.hour, self.room)
    }
}

/// An error which is returned when position does not belong to the schedule domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidPosition {
    /// The day is not part of the domain.
    Day(Day),
    /// The hour is not part of the domain.
    Hour(Hour),
    /// The classroom is not part of the domain.
    Classroom(RoomId),
}

impl fmt::Display for InvalidPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(day) => write!(f, "unknown day: {day}"),
            Self::Hour(hour) => write!(f, "unknown hour: {hour}"),
            Self::Classroom(room) => write!(f, "unknown classroom: #{room}"),
        }
    }
}

impl std::error::Error for InvalidPosition {}

impl From<InvalidPosition> for GenericError {
    fn from(value: InvalidPosition) -> Self {
        GenericError::from(value.to_string())
    }
}

/// Fixed dimensions of a schedule: ordered days, ordered hours and classrooms.
/// A domain is immutable and shared by all schedules of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleDomain {
    days: Vec<Day>,
    hours: Vec<Hour>,
    classrooms: Vec<String>,
    day_lookup: [Option<usize>; 7],
    hour_lookup: Vec<Option<usize>>,
}

impl ScheduleDomain {
    /// Creates a new domain. Duplicated days and hours are ignored, all dimensions must be non-empty.
    pub fn new(days: Vec<Day>, hours: Vec<Hour>, classrooms: Vec<String>) -> GenericResult<Self> {
        if days.is_empty() || hours.is_empty() || classrooms.is_empty() {
            return Err("days, hours, and classrooms must be non-empty".into());
        }

        let mut unique_rooms = FxHashSet::default();
        if let Some(code) = classrooms.iter().find(|code| !unique_rooms.insert(code.as_str())) {
            return Err(format!("duplicate classroom in domain: '{code}'").into());
        }

        let mut seen_days = FxHashSet::default();
        let days = days.into_iter().filter(|day| seen_days.insert(*day)).collect::<Vec<_>>();
        let mut seen_hours = FxHashSet::default();
        let hours = hours.into_iter().filter(|hour| seen_hours.insert(*hour)).collect::<Vec<_>>();

        let mut day_lookup = [None; 7];
        days.iter().enumerate().for_each(|(idx, day)| day_lookup[day.ordinal()] = Some(idx));

        let max_hour = hours.iter().copied().max().unwrap_or_default() as usize;
        let mut hour_lookup = vec![None; max_hour + 1];
        hours.iter().enumerate().for_each(|(idx, &hour)| hour_lookup[hour as usize] = Some(idx));

        Ok(Self { days, hours, classrooms, day_lookup, hour_lookup })
    }

    /// Creates a domain with working days, hours from 7 till 17 and given classrooms.
    pub fn weekly(classrooms: Vec<String>) -> GenericResult<Self> {
        Self::new(Day::WEEKDAYS.to_vec(), DEFAULT_HOURS.collect(), classrooms)
    }

    /// Creates a weekly domain with all classrooms of the registry.
    pub fn from_registry(registry: &Registry) -> GenericResult<Self> {
        Self::weekly(registry.classroom_codes())
    }

    /// Returns ordered days.
    pub fn days(&self) -> &[Day] {
        self.days.as_slice()
    }

    /// Returns ordered hours.
    pub fn hours(&self) -> &[Hour] {
        self.hours.as_slice()
    }

    /// Returns classroom codes in `RoomId` order.
    pub fn classrooms(&self) -> &[String] {
        self.classrooms.as_slice()
    }

    /// Returns amount of classrooms.
    pub fn room_count(&self) -> usize {
        self.classrooms.len()
    }

    /// Returns amount of (day, hour) timeslots.
    pub fn timeslot_count(&self) -> usize {
        self.days.len() * self.hours.len()
    }

    /// Returns amount of (day, hour, classroom) cells.
    pub fn slot_count(&self) -> usize {
        self.timeslot_count() * self.room_count()
    }

    /// Returns the latest hour of the domain.
    pub fn max_hour(&self) -> Hour {
        self.hour_lookup.len().saturating_sub(1) as Hour
    }

    /// Checks whether the hour belongs to the domain.
    pub fn contains_hour(&self, hour: Hour) -> bool {
        self.hour_index(hour).is_some()
    }

    /// Returns index of the day inside the domain.
    pub fn day_index(&self, day: Day) -> Option<usize> {
        self.day_lookup[day.ordinal()]
    }

    /// Returns index of the hour inside the domain.
    pub fn hour_index(&self, hour: Hour) -> Option<usize> {
        self.hour_lookup.get(hour as usize).copied().flatten()
    }

    /// Returns a code of the classroom.
    pub fn classroom_code(&self, room: RoomId) -> Option<&str> {
        self.classrooms.get(room).map(|code| code.as_str())
    }

    /// Checks that position belongs to the domain.
    pub fn check(&self, position: &Position) -> Result<(), InvalidPosition> {
        self.timeslot_index(position).and_then(|_| {
            if position.room < self.room_count() { Ok(()) } else { Err(InvalidPosition::Classroom(position.room)) }
        })
    }

    /// Returns a dense index of position's (day, hour) timeslot.
    pub fn timeslot_index(&self, position: &Position) -> Result<usize, InvalidPosition> {
        let day_idx = self.day_index(position.day).ok_or(InvalidPosition::Day(position.day))?;
        let hour_idx = self.hour_index(position.hour).ok_or(InvalidPosition::Hour(position.hour))?;

        Ok(day_idx * self.hours.len() + hour_idx)
    }

    /// Returns a dense index of the position's cell.
    pub fn slot_index(&self, position: &Position) -> Result<usize, InvalidPosition> {
        let timeslot = self.timeslot_index(position)?;

        if position.room < self.room_count() {
            Ok(timeslot * self.room_count() + position.room)
        } else {
            Err(InvalidPosition::Classroom(position.room))
        }
    }

    /// Returns all positions ordered by day, hour and classroom.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.days.iter().flat_map(move |&day| {
            self.hours
                .iter()
                .flat_map(move |&hour| (0..self.room_count()).map(move |room| Position::new(day, hour, room)))
        })
    }

    /// Returns a position of the cell with given dense index.
    pub(crate) fn position_at(&self, slot: usize) -> Position {
        let room = slot % self.room_count();
        let timeslot = slot / self.room_count();

        Position::new(self.days[timeslot / self.hours.len()], self.hours[timeslot % self.hours.len()], room)
    }
}
