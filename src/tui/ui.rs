use crate::core::model::Catalog;
use crate::core::state::{NavState, Phase};
use crate::core::view;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{StatusBar, ViewPanel};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, catalog: &Catalog, state: &NavState, tui: &TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Min(0), Length(1)]);
    let [main_area, status_area] = layout.areas(frame.area());

    let projected = view::render(catalog, state);
    ViewPanel::new(&projected, &tui.theme).render(frame, main_area);

    StatusBar::new(tui.source_label.clone(), overall_progress(catalog, state))
        .render(frame, status_area);
}

/// Position of the current exercise across the whole workout, 1-based.
fn overall_progress(catalog: &Catalog, state: &NavState) -> Option<(String, usize, usize)> {
    if state.phase() != Phase::InWorkout {
        return None;
    }
    let workout = state.current_workout(catalog)?;
    let before: usize = workout
        .blocks
        .iter()
        .take(state.block_index())
        .map(|b| b.exercises.len())
        .sum();
    Some((
        workout.name.clone(),
        before + state.exercise_index() + 1,
        workout.total_exercises(),
    ))
}
