use crate::models::{MeetingId, Registry, RoomId};
use crate::schedule::{Day, Hour, Position, Schedule, ScheduleDomain};
use std::sync::Arc;

/// Creates a domain with given days, hours and all registry classrooms.
pub fn create_domain(registry: &Registry, days: &[Day], hours: &[Hour]) -> Arc<ScheduleDomain> {
    Arc::new(ScheduleDomain::new(days.to_vec(), hours.to_vec(), registry.classroom_codes()).expect("invalid domain"))
}

/// Creates a schedule with explicit assignments.
pub fn create_schedule(domain: Arc<ScheduleDomain>, assignments: &[(MeetingId, Day, Hour, RoomId)]) -> Schedule {
    let mut schedule = Schedule::new(domain);

    assignments.iter().for_each(|&(meeting, day, hour, room)| {
        assert!(schedule.place(meeting, Position::new(day, hour, room)), "cannot place meeting {meeting}");
    });

    schedule
}

/// Checks that occupancy grid and reverse index form a bijection.
pub fn assert_schedule_invariants(schedule: &Schedule) {
    let positions = schedule.domain().positions().collect::<Vec<_>>();

    let mut occupied = 0;
    positions.iter().for_each(|position| {
        assert_eq!(schedule.is_empty(position), schedule.who_at(position).is_none());

        if let Some(meeting) = schedule.who_at(position) {
            occupied += 1;
            assert_eq!(schedule.get_position(meeting), Some(*position), "reverse index mismatch for {meeting}");
        }
    });

    schedule.iter_assignments().for_each(|(meeting, position)| {
        assert_eq!(schedule.who_at(&position), Some(meeting), "grid mismatch at {position}");
    });

    assert_eq!(schedule.placed_count(), occupied);
    assert_eq!(schedule.iter_assignments().count(), occupied);
}
