use super::*;
use crate::helpers::schedule::*;
use crate::helpers::search::*;
use crate::helpers::utils::*;
use crate::schedule::{Day, Position};

fn create_conflicting_start(context: &SearchContext) -> Schedule {
    create_schedule(context.domain.clone(), &[(0, Day::Monday, 8, 0), (1, Day::Monday, 8, 1)])
}

fn create_plateau_start(context: &SearchContext) -> Schedule {
    create_schedule(
        context.domain.clone(),
        &[(0, Day::Monday, 8, 0), (1, Day::Monday, 8, 1), (2, Day::Monday, 9, 0)],
    )
}

parameterized_test! {can_select_best_candidate, (scores, current, allow_ties, expected), {
    assert_eq!(select_best(scores, current, allow_ties), expected);
}}

can_select_best_candidate! {
    case01_strict_first_minimum: (&[3, 1, 1, 2], 2, false, Some((1, 1))),
    case02_ties_last_minimum: (&[3, 1, 1, 2], 2, true, Some((2, 1))),
    case03_strict_no_improvement: (&[3, 1, 1, 2], 1, false, None),
    case04_ties_accept_equal: (&[3, 1, 1, 2], 1, true, Some((2, 1))),
    case05_empty: (&[] as &[Score], 1, true, None),
}

#[test]
fn can_stop_steepest_ascent_immediately_at_zero_score() {
    let context = create_small_context(create_test_environment(0, false), &[Day::Monday], &[8, 9]);
    let initial = create_schedule(context.domain.clone(), &[(0, Day::Monday, 8, 0), (1, Day::Monday, 9, 0)]);

    let result = SteepestAscent::default().search_from(&context, initial.clone());

    assert_eq!(result.stop_reason, StopReason::OptimumFound);
    assert_eq!(result.iterations, 0);
    assert_eq!(result.best_score, 0);
    assert_eq!(result.history, vec![0]);
    assert_eq!(result.best, initial);
}

#[test]
fn can_take_first_best_neighbor_in_steepest_ascent() {
    let context = create_small_context(create_test_environment(0, true), &[Day::Monday], &[8, 9]);
    let initial = create_conflicting_start(&context);

    let result = SteepestAscent::default().search_from(&context, initial.clone());

    assert_eq!(result.initial, initial);
    assert_eq!(result.initial_score, 6);
    assert_eq!(result.best_score, 0);
    assert_eq!(result.history, vec![6, 0]);
    assert_eq!(result.iterations, 1);
    assert_eq!(result.stop_reason, StopReason::OptimumFound);
    assert_eq!(result.best.get_position(0), Some(Position::new(Day::Monday, 9, 0)));
    assert_eq!(result.details, SearchDetails::None);
    assert_schedule_invariants(&result.best);
}

#[test]
fn can_stop_steepest_ascent_at_local_optimum() {
    let context = create_plateau_context(create_test_environment(0, false));
    let initial = create_plateau_start(&context);

    let result = SteepestAscent::default().search_from(&context, initial.clone());

    assert_eq!(result.stop_reason, StopReason::LocalOptimum);
    assert_eq!(result.iterations, 1);
    assert_eq!(result.history, vec![2]);
    assert_eq!(result.best, initial);
}

#[test]
fn can_respect_iteration_limit() {
    let context = create_small_context(create_test_environment(0, false), &[Day::Monday], &[8, 9]);
    let initial = create_conflicting_start(&context);

    let result = SteepestAscent::new(Some(0)).search_from(&context, initial.clone());

    assert_eq!(result.stop_reason, StopReason::IterationLimit);
    assert_eq!(result.iterations, 0);
    assert_eq!(result.best_score, 6);
    assert_eq!(result.best, initial);
}

#[test]
fn can_stop_when_there_are_no_neighbors() {
    let context = create_small_context(create_test_environment(0, false), &[Day::Monday], &[8]);
    let initial = create_conflicting_start(&context);

    let steepest = SteepestAscent::default().search_from(&context, initial.clone());
    let stochastic = StochasticHillClimbing::default().search_from(&context, initial);

    assert_eq!(steepest.stop_reason, StopReason::NoNeighbors);
    assert_eq!(stochastic.stop_reason, StopReason::NoNeighbors);
    assert_eq!(stochastic.best_score, 6);
}

#[test]
fn can_produce_same_result_in_parallel_and_sequential_modes() {
    let run = |is_parallel: bool| {
        let context = create_small_context(
            create_test_environment(3, is_parallel),
            &[Day::Monday, Day::Tuesday, Day::Wednesday],
            &[8, 9, 10],
        );
        SteepestAscent::default().search(&context)
    };

    let (parallel, sequential) = (run(true), run(false));

    assert_eq!(parallel.initial, sequential.initial);
    assert_eq!(parallel.best, sequential.best);
    assert_eq!(parallel.history, sequential.history);
}

#[test]
fn can_keep_history_strictly_decreasing_in_steepest_ascent() {
    let registry = crate::helpers::models::create_dense_registry(8, 4);
    let domain = create_domain(registry.as_ref(), &[Day::Monday, Day::Tuesday], &[8, 9, 10]);
    let context = create_search_context(registry, domain, create_test_environment(17, true));

    let result = SteepestAscent::default().search(&context);

    assert!(result.history.windows(2).all(|pair| pair[1] < pair[0]));
    assert_eq!(result.best_score, context.evaluate(&result.best));
    assert_eq!(result.history.last(), Some(&result.best_score));
    assert_eq!(result.history.len(), result.iterations + usize::from(result.stop_reason == StopReason::OptimumFound));
    assert_schedule_invariants(&result.best);
}

#[test]
fn can_improve_with_stochastic_hill_climbing() {
    let context = create_small_context(create_test_environment(0, false), &[Day::Monday], &[8, 9]);
    let initial = create_conflicting_start(&context);

    let result = StochasticHillClimbing::default().search_from(&context, initial);

    // every available move solves the problem
    assert_eq!(result.best_score, 0);
    assert_eq!(result.history, vec![6, 0]);
    assert_eq!(result.stop_reason, StopReason::OptimumFound);
}

#[test]
fn can_reject_non_improving_moves_in_stochastic_hill_climbing() {
    let context = create_plateau_context(create_test_environment(0, false));
    let initial = create_plateau_start(&context);

    let result = StochasticHillClimbing::new(5).search_from(&context, initial.clone());

    assert_eq!(result.stop_reason, StopReason::IterationLimit);
    assert_eq!(result.iterations, 5);
    assert_eq!(result.history, vec![2; 6]);
    assert_eq!(result.best, initial);
}

#[test]
fn can_pick_moves_using_environment_random() {
    let context = create_small_context(
        create_fake_environment(FakeRandom::new(vec![3], vec![])),
        &[Day::Monday],
        &[8, 9],
    );
    let initial = create_conflicting_start(&context);

    let result = StochasticHillClimbing::default().search_from(&context, initial);

    // moves are ordered by meeting, day, hour and room: the last one moves meeting 1 to (Monday, 9, 1)
    assert_eq!(result.best.get_position(1), Some(Position::new(Day::Monday, 9, 1)));
    assert_eq!(result.best.get_position(0), Some(Position::new(Day::Monday, 8, 0)));
}

parameterized_test! {can_limit_sideways_moves, (max_consecutive, max_total, expected_reason, expected_sideways, expected_accepted), {
    can_limit_sideways_moves_impl(max_consecutive, max_total, expected_reason, expected_sideways, expected_accepted);
}}

can_limit_sideways_moves! {
    case01_consecutive_limit: (3, 100, StopReason::ConsecutiveSidewaysLimit, 3, 2),
    case02_total_limit: (10, 2, StopReason::TotalSidewaysLimit, 2, 1),
    case03_single_consecutive: (1, 100, StopReason::ConsecutiveSidewaysLimit, 1, 0),
    case04_no_consecutive: (0, 100, StopReason::ConsecutiveSidewaysLimit, 1, 0),
    case05_no_total: (10, 0, StopReason::TotalSidewaysLimit, 1, 0),
}

fn can_limit_sideways_moves_impl(
    max_consecutive: usize,
    max_total: usize,
    expected_reason: StopReason,
    expected_sideways: usize,
    expected_accepted: usize,
) {
    let context = create_plateau_context(create_test_environment(0, false));
    let initial = create_plateau_start(&context);

    let result = SidewaysHillClimbing::new(None, max_consecutive, max_total).search_from(&context, initial);

    assert_eq!(result.stop_reason, expected_reason);
    assert_eq!(result.details, SearchDetails::Sideways { total_sideways: expected_sideways });
    assert_eq!(result.iterations, expected_accepted + 1);
    assert_eq!(result.history, vec![2; expected_accepted + 1]);
    assert_schedule_invariants(&result.best);
}

#[test]
fn can_take_last_of_equal_neighbors_in_sideways_move() {
    let context = create_plateau_context(create_test_environment(0, false));
    let initial = create_plateau_start(&context);

    let result = SidewaysHillClimbing::new(Some(1), 10, 100).search_from(&context, initial);

    // the last move relocates meeting 2 to (Monday, 9, 1)
    assert_eq!(result.stop_reason, StopReason::IterationLimit);
    assert_eq!(result.best.get_position(2), Some(Position::new(Day::Monday, 9, 1)));
}
