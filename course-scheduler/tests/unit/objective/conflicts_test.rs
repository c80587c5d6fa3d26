use super::*;
use crate::helpers::models::*;
use crate::helpers::schedule::*;

#[test]
fn can_return_zero_for_schedule_without_conflicts() {
    let registry = create_test_registry();
    let domain = create_domain(registry.as_ref(), &[Day::Monday, Day::Tuesday, Day::Wednesday], &[8, 9]);
    let schedule = create_schedule(
        domain,
        &[
            (0, Day::Monday, 8, 0),
            (1, Day::Monday, 9, 0),
            (2, Day::Tuesday, 8, 0),
            (3, Day::Tuesday, 9, 0),
            (4, Day::Wednesday, 8, 0),
            (5, Day::Wednesday, 9, 0),
        ],
    );
    let objective = ConflictObjective::new(registry);

    assert_eq!(objective.evaluate(&schedule), 0);
    assert_eq!(objective.breakdown(&schedule), ConflictBreakdown::default());
    assert!(objective.conflicting_students(&schedule).is_empty());
}

#[test]
fn can_count_full_occurrences_of_conflicting_students() {
    let registry = create_test_registry();
    let domain = create_domain(registry.as_ref(), &[Day::Monday], &[8, 9]);
    // IF1210 and IF1220 share students 13521001 and 13521004
    let schedule = create_schedule(domain, &[(1, Day::Monday, 8, 0), (3, Day::Monday, 8, 1)]);
    let objective = ConflictObjective::new(registry);

    assert_eq!(objective.evaluate(&schedule), 4);
    assert_eq!(
        objective.conflicting_students(&schedule),
        vec![
            StudentConflict { day: Day::Monday, hour: 8, student: 0, count: 2 },
            StudentConflict { day: Day::Monday, hour: 8, student: 3, count: 2 },
        ]
    );
}

#[test]
fn can_ignore_meetings_at_different_timeslots() {
    let registry = create_test_registry();
    let domain = create_domain(registry.as_ref(), &[Day::Monday], &[8, 9]);
    let schedule = create_schedule(domain, &[(1, Day::Monday, 8, 0), (3, Day::Monday, 9, 0)]);

    assert_eq!(ConflictObjective::new(registry).evaluate(&schedule), 0);
}

parameterized_test! {can_scale_with_amount_of_conflicting_students, students, {
    can_scale_with_amount_of_conflicting_students_impl(students);
}}

can_scale_with_amount_of_conflicting_students! {
    case01_one_student: 1,
    case02_three_students: 3,
    case03_ten_students: 10,
}

fn can_scale_with_amount_of_conflicting_students_impl(students: usize) {
    let registry = create_dense_registry(2, students);
    let domain = create_domain(registry.as_ref(), &[Day::Friday], &[10]);
    let schedule = create_schedule(domain, &[(0, Day::Friday, 10, 0), (1, Day::Friday, 10, 1)]);

    assert_eq!(ConflictObjective::new(registry).evaluate(&schedule), 2 * students);
}

#[test]
fn can_break_down_score_per_timeslot() {
    let registry = create_dense_registry(5, 2);
    let domain = create_domain(registry.as_ref(), &[Day::Monday, Day::Tuesday], &[8, 9]);
    let schedule = create_schedule(
        domain,
        &[
            (0, Day::Monday, 9, 0),
            (1, Day::Monday, 9, 1),
            (2, Day::Tuesday, 8, 0),
            (3, Day::Tuesday, 8, 1),
            (4, Day::Tuesday, 9, 0),
        ],
    );
    let objective = ConflictObjective::new(registry);

    let breakdown = objective.breakdown(&schedule);

    assert_eq!(breakdown.timeslots, vec![((Day::Monday, 9), 4), ((Day::Tuesday, 8), 4)]);
    assert_eq!(breakdown.total, 8);
    assert_eq!(breakdown.total, objective.evaluate(&schedule));
}

#[test]
fn can_ignore_unplaced_meetings() {
    let registry = create_dense_registry(3, 4);
    let domain = create_domain(registry.as_ref(), &[Day::Monday], &[8]);

    assert_eq!(ConflictObjective::new(registry).evaluate(&Schedule::new(domain)), 0);
}
