//! # View Projection
//!
//! Pure mapping from `(Catalog, NavState)` to lines of text, each tagged with
//! a [`StyleTag`]. The TUI decides what a tag looks like; nothing here knows
//! about colours or terminals.

use crate::core::model::Catalog;
use crate::core::state::{NavState, Phase};

pub const APP_TITLE: &str = "CLIFIT";

const MENU_HELP: &str = "[j/k] navigate • [enter] select • [q] quit";
const WORKOUT_HELP: &str = "[enter/n] next • [p] previous • [s] skip block";
const DONE_MESSAGE: &str = "Great workout!";

/// Semantic style of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Title,
    Subtitle,
    Block,
    Exercise,
    Highlight,
    Selected,
    Dim,
    Help,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub text: String,
    pub style: StyleTag,
}

impl ViewLine {
    fn new(text: impl Into<String>, style: StyleTag) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new("", StyleTag::Blank)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub lines: Vec<ViewLine>,
}

impl View {
    fn push(&mut self, text: impl Into<String>, style: StyleTag) {
        self.lines.push(ViewLine::new(text, style));
    }

    fn blank(&mut self) {
        self.lines.push(ViewLine::blank());
    }

    /// All lines joined with `\n`, styles dropped.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn render(catalog: &Catalog, state: &NavState) -> View {
    match state.phase() {
        Phase::Menu => render_menu(catalog, state),
        Phase::InWorkout => render_workout(catalog, state),
        Phase::Done => render_done(catalog, state),
    }
}

fn render_menu(catalog: &Catalog, state: &NavState) -> View {
    let mut view = View::default();
    view.push(APP_TITLE, StyleTag::Title);
    view.push("Select a workout", StyleTag::Subtitle);
    view.blank();

    if catalog.is_empty() {
        view.push("No workouts loaded.", StyleTag::Dim);
    }
    for (i, workout) in catalog.workouts().iter().enumerate() {
        if i == state.workout_index() {
            view.push(format!("> {}", workout.name), StyleTag::Selected);
        } else {
            view.push(format!("  {}", workout.name), StyleTag::Exercise);
        }
    }

    view.blank();
    view.push(MENU_HELP, StyleTag::Help);
    view
}

fn render_workout(catalog: &Catalog, state: &NavState) -> View {
    let mut view = View::default();
    let Some(workout) = state.current_workout(catalog) else {
        view.push(APP_TITLE, StyleTag::Title);
        view.push("No workout selected.", StyleTag::Dim);
        view.blank();
        view.push(quit_help(state), StyleTag::Help);
        return view;
    };
    view.push(workout.name.to_uppercase(), StyleTag::Title);

    let (Some(block), Some(exercise), Some(progress)) = (
        state.current_block(catalog),
        state.current_exercise(catalog),
        state.progress(catalog),
    ) else {
        view.push("This workout has nothing to do.", StyleTag::Dim);
        view.blank();
        view.push(quit_help(state), StyleTag::Help);
        return view;
    };

    if block.has_duration() {
        view.push(format!("{} ({})", block.name, block.duration), StyleTag::Block);
    } else {
        view.push(block.name.clone(), StyleTag::Block);
    }
    view.push(
        format!(
            "Block {}/{} • Exercise {}/{}",
            progress.block, progress.block_total, progress.exercise, progress.exercise_total
        ),
        StyleTag::Dim,
    );
    view.blank();

    view.push(exercise.name.clone(), StyleTag::Highlight);
    if exercise.has_sets() {
        view.push(format!("Sets: {}", exercise.sets), StyleTag::Exercise);
    }
    if exercise.has_tempo() {
        view.push(format!("Tempo: {}", exercise.tempo), StyleTag::Exercise);
    }
    if exercise.has_notes() {
        view.push(exercise.notes.clone(), StyleTag::Dim);
    }

    view.blank();
    let help = if state.has_menu() {
        format!("{WORKOUT_HELP} • [m] menu • [q] quit")
    } else {
        format!("{WORKOUT_HELP} • [q] quit")
    };
    view.push(help, StyleTag::Help);
    view
}

fn render_done(catalog: &Catalog, state: &NavState) -> View {
    let mut view = View::default();
    let title = match state.current_workout(catalog) {
        Some(workout) => format!("{} Complete!", workout.name.to_uppercase()),
        None => "Workout Complete!".to_string(),
    };
    view.push(title, StyleTag::Title);
    view.blank();
    view.push(DONE_MESSAGE, StyleTag::Exercise);
    view.blank();
    view.push(quit_help(state), StyleTag::Help);
    view
}

fn quit_help(state: &NavState) -> &'static str {
    if state.has_menu() {
        "[m] menu • [q] quit"
    } else {
        "[q] quit"
    }
}
