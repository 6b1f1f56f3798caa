//! Property-based tests for the navigation state machine.
//!
//! Workouts are generated with arbitrary block sizes; invariants must hold
//! under arbitrary action sequences.

use clifit::core::action::{Action, update};
use clifit::core::model::{Block, Catalog, Exercise, Workout};
use clifit::core::state::{NavState, Phase};
use proptest::prelude::*;

/// Build a workout whose blocks have the given (non-zero) exercise counts.
fn workout(name: &str, sizes: &[usize]) -> Workout {
    let blocks = sizes
        .iter()
        .enumerate()
        .map(|(b, &n)| {
            let exercises = (0..n).map(|e| Exercise::named(format!("{name} {b}.{e}"))).collect();
            Block::new(format!("Block {b}"), "", exercises)
        })
        .collect();
    Workout::new(name, blocks)
}

fn sizes_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..6, 1..6)
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(sizes_strategy(), 1..4).prop_map(|all| {
        Catalog::new(
            all.iter()
                .enumerate()
                .map(|(i, sizes)| workout(&format!("W{i}"), sizes))
                .collect(),
        )
    })
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        1 => Just(Action::SelectPrevious),
        1 => Just(Action::SelectNext),
        1 => (0usize..8).prop_map(Action::Select),
        2 => Just(Action::Confirm),
        4 => Just(Action::Advance),
        3 => Just(Action::Retreat),
        2 => Just(Action::SkipBlock),
        1 => Just(Action::ReturnToMenu),
    ]
}

fn started(catalog: &Catalog) -> NavState {
    NavState::menu().confirm_selection(catalog)
}

proptest! {
    #[test]
    fn prop_in_workout_indices_stay_in_bounds(
        catalog in catalog_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..80),
    ) {
        let mut state = NavState::menu();
        for action in actions {
            state = update(&catalog, state, action).0;
            prop_assert!(state.workout_index() < catalog.len());
            if state.phase() == Phase::InWorkout {
                let workout = catalog.get(state.workout_index()).unwrap();
                prop_assert!(state.block_index() < workout.blocks.len());
                let block = &workout.blocks[state.block_index()];
                prop_assert!(state.exercise_index() < block.exercises.len());
            }
        }
    }

    #[test]
    fn prop_advance_total_times_reaches_done(sizes in sizes_strategy()) {
        let catalog = Catalog::single(workout("W", &sizes));
        let total: usize = sizes.iter().sum();
        let mut state = started(&catalog);
        for _ in 0..total - 1 {
            state = state.advance(&catalog);
            prop_assert_eq!(state.phase(), Phase::InWorkout);
        }
        prop_assert_eq!(state.advance(&catalog).phase(), Phase::Done);
    }

    #[test]
    fn prop_advance_then_retreat_is_identity_away_from_end(
        sizes in sizes_strategy(),
        steps in 0usize..30,
    ) {
        let catalog = Catalog::single(workout("W", &sizes));
        let total: usize = sizes.iter().sum();
        let mut state = started(&catalog);
        for _ in 0..steps % total {
            state = state.advance(&catalog);
        }
        let forward = state.advance(&catalog);
        if forward.phase() == Phase::InWorkout {
            prop_assert_eq!(forward.retreat(&catalog), state);
        }
        if state != started(&catalog) {
            prop_assert_eq!(state.retreat(&catalog).advance(&catalog), state);
        }
    }

    #[test]
    fn prop_retreat_at_start_is_idempotent(sizes in sizes_strategy(), n in 1usize..10) {
        let catalog = Catalog::single(workout("W", &sizes));
        let start = started(&catalog);
        let mut state = start;
        for _ in 0..n {
            state = state.retreat(&catalog);
        }
        prop_assert_eq!(state, start);
    }

    #[test]
    fn prop_skip_block_walks_blocks_then_finishes(sizes in sizes_strategy()) {
        let catalog = Catalog::single(workout("W", &sizes));
        let mut state = started(&catalog);
        for _ in 0..sizes.len() - 1 {
            state = state.skip_block(&catalog);
        }
        prop_assert_eq!(state.phase(), Phase::InWorkout);
        prop_assert_eq!(state.block_index(), sizes.len() - 1);
        prop_assert_eq!(state.exercise_index(), 0);
        prop_assert_eq!(state.skip_block(&catalog).phase(), Phase::Done);
    }

    #[test]
    fn prop_confirm_always_starts_at_first_exercise(
        catalog in catalog_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..40),
        target in 0usize..4,
    ) {
        let mut state = NavState::menu();
        for action in actions {
            state = update(&catalog, state, action).0;
        }
        let state = state.return_to_menu().select_workout(&catalog, target).confirm_selection(&catalog);
        prop_assert_eq!(state.phase(), Phase::InWorkout);
        prop_assert_eq!(state.block_index(), 0);
        prop_assert_eq!(state.exercise_index(), 0);
        prop_assert_eq!(state.workout_index(), target.min(catalog.len() - 1));
    }
}
