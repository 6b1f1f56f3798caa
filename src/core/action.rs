//! # Actions
//!
//! Everything the user can do becomes an `Action`.
//! User presses `n`? That's `Action::Advance`.
//! User presses `m` on the completion screen? That's `Action::ReturnToMenu`.
//!
//! The `update()` function takes the catalog, the current state and an
//! action, then returns the new state plus an `Effect` for the event loop.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  (New State, Effect)
//! ```

use log::debug;

use crate::core::model::Catalog;
use crate::core::state::NavState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectPrevious,
    SelectNext,
    Select(usize),
    Confirm,
    Advance,
    Retreat,
    SkipBlock,
    ReturnToMenu,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(catalog: &Catalog, state: NavState, action: Action) -> (NavState, Effect) {
    let next = match action {
        Action::SelectPrevious => state.move_selection_up(catalog),
        Action::SelectNext => state.move_selection_down(catalog),
        Action::Select(index) => state.select_workout(catalog, index),
        Action::Confirm => state.confirm_selection(catalog),
        Action::Advance => state.advance(catalog),
        Action::Retreat => state.retreat(catalog),
        Action::SkipBlock => state.skip_block(catalog),
        Action::ReturnToMenu => state.return_to_menu(),
        Action::Quit => {
            debug!("Quit requested");
            return (state, Effect::Quit);
        }
    };

    if next != state {
        debug!(
            "{:?}: {:?} w{} b{} e{} -> {:?} w{} b{} e{}",
            action,
            state.phase(),
            state.workout_index(),
            state.block_index(),
            state.exercise_index(),
            next.phase(),
            next.workout_index(),
            next.block_index(),
            next.exercise_index()
        );
    }
    (next, Effect::None)
}
