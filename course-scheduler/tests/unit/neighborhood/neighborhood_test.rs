use super::*;
use crate::helpers::models::*;
use crate::helpers::schedule::*;
use crate::helpers::utils::FakeRandom;
use crate::schedule::Day;

#[test]
fn can_enumerate_moves_into_free_legal_cells() {
    let registry = create_test_registry();
    let domain = create_domain(registry.as_ref(), &[Day::Monday], &[8, 9]);
    // MA1101 fits only into room 0
    let schedule = create_schedule(domain, &[(5, Day::Monday, 8, 0), (1, Day::Monday, 9, 0)]);

    let moves = Neighborhood::new(registry).moves(&schedule);

    assert_eq!(
        moves,
        vec![
            Move::new(1, Position::new(Day::Monday, 9, 0), Position::new(Day::Monday, 8, 1)),
            Move::new(1, Position::new(Day::Monday, 9, 0), Position::new(Day::Monday, 9, 1)),
        ]
    );
}

#[test]
fn can_return_no_moves_when_grid_is_full() {
    let registry = create_dense_registry(2, 1);
    let domain = create_domain(registry.as_ref(), &[Day::Monday], &[8]);
    let schedule = create_schedule(domain, &[(0, Day::Monday, 8, 0), (1, Day::Monday, 8, 1)]);
    let neighborhood = Neighborhood::new(registry);

    assert!(neighborhood.moves(&schedule).is_empty());
    assert!(neighborhood.neighbors(&schedule).is_empty());
    assert!(neighborhood.random_move(&schedule, &FakeRandom::new(vec![], vec![])).is_none());
}

#[test]
fn can_return_no_moves_for_meeting_without_legal_classrooms() {
    let registry = create_registry(&[("BIG101", 500, 1)], &[("7602", 60)], &[]);
    let domain = create_domain(registry.as_ref(), &[Day::Monday], &[8, 9, 10]);
    let schedule = create_schedule(domain, &[(0, Day::Monday, 8, 0)]);

    assert!(Neighborhood::new(registry).moves(&schedule).is_empty());
}

#[test]
fn can_create_independent_neighbor_copies() {
    let registry = create_dense_registry(2, 3);
    let domain = create_domain(registry.as_ref(), &[Day::Monday, Day::Tuesday], &[8]);
    let schedule = create_schedule(domain, &[(0, Day::Monday, 8, 0), (1, Day::Monday, 8, 1)]);
    let neighborhood = Neighborhood::new(registry);

    let neighbors = neighborhood.neighbors(&schedule);

    assert_eq!(neighbors.len(), 4);
    neighbors.iter().for_each(|neighbor| {
        assert_schedule_invariants(neighbor);
        assert_eq!(neighbor.placed_count(), 2);
        assert_ne!(neighbor, &schedule);
    });
    assert_eq!(schedule.get_position(0), Some(Position::new(Day::Monday, 8, 0)));
}

#[test]
fn can_pick_random_move_with_given_random() {
    let registry = create_dense_registry(2, 3);
    let domain = create_domain(registry.as_ref(), &[Day::Monday, Day::Tuesday], &[8]);
    let schedule = create_schedule(domain, &[(0, Day::Monday, 8, 0), (1, Day::Monday, 8, 1)]);
    let neighborhood = Neighborhood::new(registry);
    let random = FakeRandom::new(vec![3], vec![]);

    let neighbor = neighborhood.random_neighbor(&schedule, &random).expect("has neighbor");

    assert_eq!(neighbor.get_position(1), Some(Position::new(Day::Tuesday, 8, 1)));
    assert_eq!(neighbor.get_position(0), Some(Position::new(Day::Monday, 8, 0)));
}

#[test]
fn can_apply_and_revert_move() {
    let registry = create_dense_registry(2, 3);
    let domain = create_domain(registry.as_ref(), &[Day::Monday, Day::Tuesday], &[8]);
    let original = create_schedule(domain, &[(0, Day::Monday, 8, 0), (1, Day::Monday, 8, 1)]);
    let mv = Move::new(0, Position::new(Day::Monday, 8, 0), Position::new(Day::Tuesday, 8, 0));
    let mut schedule = original.clone();

    assert!(mv.apply(&mut schedule));
    assert_eq!(schedule.who_at(&mv.to), Some(0));
    assert!(!mv.apply(&mut schedule));

    assert!(mv.revert(&mut schedule));
    assert_eq!(schedule, original);
    assert_eq!(mv.inverse().inverse(), mv);
}
