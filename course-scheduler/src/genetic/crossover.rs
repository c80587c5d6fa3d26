#[cfg(test)]
#[path = "../../tests/unit/genetic/crossover_test.rs"]
mod crossover_test;

use crate::models::{MeetingId, Registry};
use crate::schedule::{Position, Schedule};
use crate::utils::{CollectGroupBy, Random};
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

/// A result of one crossover.
pub struct CrossoverOutcome {
    /// Two children.
    pub children: (Schedule, Schedule),
    /// True when children failed validation and were replaced by parent copies.
    pub is_fallback: bool,
}

/// Runs one-point crossover on course groups: courses of both parents are ordered by code,
/// a random split point is chosen and meetings of all courses after the split are taken from
/// the other parent. When the other parent's slot is taken, a free legal slot is searched
/// in random order. Children which lose a meeting are replaced by copies of the parents.
pub fn crossover(
    registry: &Registry,
    left: &Schedule,
    right: &Schedule,
    random: &(dyn Random + Send + Sync),
) -> CrossoverOutcome {
    let mut groups = left
        .iter_assignments()
        .chain(right.iter_assignments())
        .map(|(meeting, _)| meeting)
        .collect::<FxHashSet<_>>()
        .into_iter()
        .filter_map(|meeting| registry.meeting(meeting))
        .collect_group_by_key(|meeting| meeting.course_code.clone())
        .into_iter()
        .map(|(code, meetings)| {
            let mut meetings = meetings.into_iter().map(|meeting| meeting.id).collect::<Vec<_>>();
            meetings.sort_unstable();
            (code, meetings)
        })
        .collect::<Vec<_>>();

    groups.sort_by(|(a, _), (b, _)| a.cmp(b));

    if groups.len() < 2 {
        return CrossoverOutcome { children: (left.clone(), right.clone()), is_fallback: false };
    }

    let split = random.uniform_int(1, groups.len() as i32 - 1) as usize;
    let tail = groups[split..].iter().flat_map(|(_, meetings)| meetings.iter().copied()).collect::<Vec<_>>();

    let mut left_child = left.clone();
    let mut right_child = right.clone();

    tail.iter().for_each(|&meeting| {
        left_child.unplace(meeting);
        right_child.unplace(meeting);
    });

    tail.iter().for_each(|&meeting| {
        place_from(registry, &mut left_child, meeting, right.get_position(meeting), random);
        place_from(registry, &mut right_child, meeting, left.get_position(meeting), random);
    });

    if is_complete(registry, &left_child) && is_complete(registry, &right_child) {
        CrossoverOutcome { children: (left_child, right_child), is_fallback: false }
    } else {
        CrossoverOutcome { children: (left.clone(), right.clone()), is_fallback: true }
    }
}

/// Checks that every course has exactly as many placed meetings as it has credits.
pub fn is_complete(registry: &Registry, schedule: &Schedule) -> bool {
    registry.courses().iter().all(|course| {
        let placed = registry
            .meetings_of_course(course.code.as_str())
            .iter()
            .filter(|&&meeting| schedule.get_position(meeting).is_some())
            .count();

        placed == course.credits
    })
}

fn place_from(
    registry: &Registry,
    child: &mut Schedule,
    meeting: MeetingId,
    position: Option<Position>,
    random: &(dyn Random + Send + Sync),
) -> bool {
    match position {
        Some(position) if child.place(meeting, position) => true,
        _ => find_free_slot(registry, child, meeting, random)
            .is_some_and(|position| child.place(meeting, position)),
    }
}

/// Scans (day, hour, legal classroom) in random order and returns the first free position.
/// Shuffles own copies of the domain lists, the domain itself is never changed.
fn find_free_slot(
    registry: &Registry,
    schedule: &Schedule,
    meeting: MeetingId,
    random: &(dyn Random + Send + Sync),
) -> Option<Position> {
    let mut rng = random.get_rng();
    let domain = schedule.domain();

    let mut days = domain.days().to_vec();
    let mut hours = domain.hours().to_vec();
    let mut rooms = registry.legal_classrooms(meeting).to_vec();

    days.shuffle(&mut rng);
    hours.shuffle(&mut rng);
    rooms.shuffle(&mut rng);

    days.iter()
        .flat_map(|&day| hours.iter().map(move |&hour| (day, hour)))
        .flat_map(|(day, hour)| rooms.iter().map(move |&room| Position::new(day, hour, room)))
        .find(|position| schedule.is_empty(position))
}
