use super::*;
use crate::helpers::models::create_test_registry;
use crate::helpers::schedule::*;
use crate::utils::DefaultRandom;

fn create_small_domain() -> Arc<ScheduleDomain> {
    Arc::new(ScheduleDomain::new(vec![Day::Monday, Day::Tuesday], vec![8, 9], vec!["A".into(), "B".into()]).unwrap())
}

#[test]
fn can_place_and_remove_meeting() {
    let mut schedule = Schedule::new(create_small_domain());
    let position = Position::new(Day::Monday, 9, 1);

    assert!(schedule.place(3, position));
    assert_eq!(schedule.who_at(&position), Some(3));
    assert_eq!(schedule.get_position(3), Some(position));
    assert!(!schedule.is_empty(&position));
    assert_eq!(schedule.placed_count(), 1);

    assert_eq!(schedule.remove(&position), Some(3));
    assert_eq!(schedule, Schedule::new(create_small_domain()));
    assert_eq!(schedule.get_position(3), None);
    assert_eq!(schedule.placed_count(), 0);
    assert_schedule_invariants(&schedule);
}

#[test]
fn can_reject_placement_into_occupied_cell() {
    let position = Position::new(Day::Tuesday, 8, 0);
    let mut schedule = create_schedule(create_small_domain(), &[(0, Day::Tuesday, 8, 0)]);

    assert!(!schedule.place(1, position));
    assert_eq!(schedule.who_at(&position), Some(0));
    assert_eq!(schedule.get_position(1), None);
    assert_schedule_invariants(&schedule);
}

#[test]
fn can_relocate_on_repeated_placement() {
    let mut schedule = create_schedule(create_small_domain(), &[(0, Day::Monday, 8, 0)]);
    let target = Position::new(Day::Tuesday, 9, 1);

    assert!(schedule.place(0, target));

    assert!(schedule.is_empty(&Position::new(Day::Monday, 8, 0)));
    assert_eq!(schedule.get_position(0), Some(target));
    assert_eq!(schedule.placed_count(), 1);
    assert_schedule_invariants(&schedule);
}

#[test]
fn can_return_none_when_removing_from_empty_cell() {
    let mut schedule = Schedule::new(create_small_domain());

    assert_eq!(schedule.remove(&Position::new(Day::Monday, 8, 0)), None);
    assert_eq!(schedule.unplace(2), None);
}

#[test]
fn can_unplace_meeting() {
    let mut schedule = create_schedule(create_small_domain(), &[(0, Day::Monday, 8, 0), (1, Day::Monday, 8, 1)]);

    assert_eq!(schedule.unplace(1), Some(Position::new(Day::Monday, 8, 1)));
    assert_eq!(schedule.iter_assignments().collect::<Vec<_>>(), vec![(0, Position::new(Day::Monday, 8, 0))]);
    assert_schedule_invariants(&schedule);
}

parameterized_test! {can_relocate_meeting, (src, dst, expected), {
    let mut schedule = create_schedule(create_small_domain(), &[(0, Day::Monday, 8, 0), (1, Day::Monday, 9, 0)]);

    assert_eq!(schedule.relocate(&src, &dst), expected);

    if expected {
        assert_eq!(schedule.get_position(0), Some(dst));
        assert!(schedule.is_empty(&src));
    } else {
        assert_eq!(schedule.get_position(0), Some(Position::new(Day::Monday, 8, 0)));
        assert_eq!(schedule.get_position(1), Some(Position::new(Day::Monday, 9, 0)));
    }
    assert_schedule_invariants(&schedule);
}}

can_relocate_meeting! {
    case01_to_free_cell: (Position::new(Day::Monday, 8, 0), Position::new(Day::Tuesday, 8, 1), true),
    case02_to_occupied_cell: (Position::new(Day::Monday, 8, 0), Position::new(Day::Monday, 9, 0), false),
    case03_from_empty_cell: (Position::new(Day::Tuesday, 9, 1), Position::new(Day::Tuesday, 8, 1), false),
}

#[test]
fn can_swap_twice_to_restore_schedule() {
    let original = create_schedule(create_small_domain(), &[(0, Day::Monday, 8, 0), (1, Day::Tuesday, 9, 1)]);
    let (a, b) = (Position::new(Day::Monday, 8, 0), Position::new(Day::Tuesday, 9, 1));
    let mut schedule = original.clone();

    assert!(schedule.swap(&a, &b));
    assert_eq!(schedule.get_position(0), Some(b));
    assert_eq!(schedule.get_position(1), Some(a));
    assert_schedule_invariants(&schedule);

    assert!(schedule.swap(&a, &b));
    assert_eq!(schedule, original);
}

#[test]
fn can_swap_with_empty_cell() {
    let mut schedule = create_schedule(create_small_domain(), &[(0, Day::Monday, 8, 0)]);
    let (a, b) = (Position::new(Day::Monday, 8, 0), Position::new(Day::Monday, 9, 1));

    assert!(schedule.swap(&a, &b));

    assert!(schedule.is_empty(&a));
    assert_eq!(schedule.who_at(&b), Some(0));
    assert_schedule_invariants(&schedule);
}

#[test]
fn can_list_free_positions_in_domain_order() {
    let schedule = create_schedule(create_small_domain(), &[(0, Day::Monday, 8, 0), (1, Day::Tuesday, 9, 1)]);

    let free = schedule.all_free_positions();

    assert_eq!(free.len(), 6);
    assert_eq!(free.first(), Some(&Position::new(Day::Monday, 8, 1)));
    assert_eq!(free.last(), Some(&Position::new(Day::Tuesday, 9, 0)));
}

#[test]
fn can_create_random_assignment_of_all_meetings() {
    let registry = create_test_registry();
    let domain = create_domain(registry.as_ref(), &[Day::Monday, Day::Tuesday], &[8, 9]);
    let random = DefaultRandom::new_repeatable(11);

    let schedule = Schedule::random_initial_assignment(registry.as_ref(), domain.clone(), &random);

    assert_eq!(schedule.placed_count(), registry.meeting_count());
    assert!(schedule.unplaced(registry.as_ref()).is_empty());
    assert_schedule_invariants(&schedule);

    let same = Schedule::random_initial_assignment(registry.as_ref(), domain, &DefaultRandom::new_repeatable(11));
    assert_eq!(schedule, same);
}

#[test]
fn can_leave_extra_meetings_unplaced_when_grid_is_full() {
    let domain = create_small_domain();
    let random = DefaultRandom::new_repeatable(0);

    let schedule = Schedule::new_random(domain, 0..10, &random);

    assert_eq!(schedule.placed_count(), 8);
    assert_eq!(schedule.all_free_positions().len(), 0);
    assert_schedule_invariants(&schedule);
}

#[test]
fn can_detect_capacity_violations() {
    let registry = create_test_registry();
    let domain = create_domain(registry.as_ref(), &[Day::Monday], &[8, 9]);
    // MA1101 (meeting 5) does not fit into the second room
    let schedule = create_schedule(domain, &[(5, Day::Monday, 8, 1), (0, Day::Monday, 9, 1)]);

    assert_eq!(schedule.capacity_violations(registry.as_ref()), vec![5]);
    assert_eq!(schedule.unplaced(registry.as_ref()), vec![1, 2, 3, 4]);
}

#[test]
#[should_panic(expected = "outside of schedule domain")]
fn can_panic_on_position_outside_of_domain() {
    let schedule = Schedule::new(create_small_domain());

    schedule.is_empty(&Position::new(Day::Sunday, 8, 0));
}

#[test]
fn can_check_position_without_panic() {
    let schedule = Schedule::new(create_small_domain());

    assert_eq!(schedule.check(&Position::new(Day::Monday, 8, 5)), Err(InvalidPosition::Classroom(5)));
    assert_eq!(schedule.check(&Position::new(Day::Monday, 8, 1)), Ok(()));
}
