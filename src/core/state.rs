//! # Navigation State
//!
//! Where the user is in a workout, and the pure transitions that move them.
//!
//! ```text
//! NavState
//! ├── phase: Phase           // Menu | InWorkout | Done
//! ├── workout_index: usize   // menu cursor / selected workout
//! ├── block_index: usize     // meaningful in InWorkout
//! ├── exercise_index: usize  // meaningful in InWorkout
//! └── has_menu: bool         // false for the single-workout variant
//! ```
//!
//! `NavState` is `Copy`. Every transition takes the state by value and
//! returns the next one; the event loop replaces its value wholesale.
//! Transitions called in the wrong phase return the state unchanged.
//!
//! While `phase == InWorkout`, `block_index` and `exercise_index` always
//! point at an existing exercise of the selected workout. All lookups go
//! through `get()`, so hand-built degenerate catalogs leave the state
//! untouched instead of panicking.

use crate::core::model::{Block, Catalog, Exercise, Workout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    InWorkout,
    Done,
}

/// 1-based progress through the current workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub block: usize,
    pub block_total: usize,
    pub exercise: usize,
    pub exercise_total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    phase: Phase,
    workout_index: usize,
    block_index: usize,
    exercise_index: usize,
    has_menu: bool,
}

impl NavState {
    /// Start at the workout menu with the first entry highlighted.
    pub fn menu() -> Self {
        Self {
            phase: Phase::Menu,
            workout_index: 0,
            block_index: 0,
            exercise_index: 0,
            has_menu: true,
        }
    }

    /// Start directly in the first workout, with no menu to return to.
    pub fn single() -> Self {
        Self {
            phase: Phase::InWorkout,
            workout_index: 0,
            block_index: 0,
            exercise_index: 0,
            has_menu: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn workout_index(&self) -> usize {
        self.workout_index
    }

    pub fn block_index(&self) -> usize {
        self.block_index
    }

    pub fn exercise_index(&self) -> usize {
        self.exercise_index
    }

    pub fn has_menu(&self) -> bool {
        self.has_menu
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    pub fn current_workout<'c>(&self, catalog: &'c Catalog) -> Option<&'c Workout> {
        catalog.get(self.workout_index)
    }

    pub fn current_block<'c>(&self, catalog: &'c Catalog) -> Option<&'c Block> {
        self.current_workout(catalog)?.blocks.get(self.block_index)
    }

    pub fn current_exercise<'c>(&self, catalog: &'c Catalog) -> Option<&'c Exercise> {
        self.current_block(catalog)?.exercises.get(self.exercise_index)
    }

    pub fn progress(&self, catalog: &Catalog) -> Option<Progress> {
        let workout = self.current_workout(catalog)?;
        let block = workout.blocks.get(self.block_index)?;
        Some(Progress {
            block: self.block_index + 1,
            block_total: workout.blocks.len(),
            exercise: self.exercise_index + 1,
            exercise_total: block.exercises.len(),
        })
    }

    // ========================================================================
    // Menu Transitions
    // ========================================================================

    /// Move the menu cursor to `target`, clamped to the catalog.
    pub fn select_workout(self, catalog: &Catalog, target: usize) -> Self {
        if self.phase != Phase::Menu || catalog.is_empty() {
            return self;
        }
        Self {
            workout_index: target.min(catalog.len() - 1),
            ..self
        }
    }

    pub fn move_selection_up(self, catalog: &Catalog) -> Self {
        self.select_workout(catalog, self.workout_index.saturating_sub(1))
    }

    pub fn move_selection_down(self, catalog: &Catalog) -> Self {
        self.select_workout(catalog, self.workout_index.saturating_add(1))
    }

    /// Enter the highlighted workout at its first exercise.
    pub fn confirm_selection(self, catalog: &Catalog) -> Self {
        if self.phase != Phase::Menu {
            return self;
        }
        let entered = Self {
            phase: Phase::InWorkout,
            block_index: 0,
            exercise_index: 0,
            ..self
        };
        if entered.current_exercise(catalog).is_none() {
            return self;
        }
        entered
    }

    // ========================================================================
    // Workout Transitions
    // ========================================================================

    /// Next exercise, then next block, then `Done`.
    pub fn advance(self, catalog: &Catalog) -> Self {
        if self.phase != Phase::InWorkout {
            return self;
        }
        let Some(workout) = self.current_workout(catalog) else {
            return self;
        };
        let Some(block) = workout.blocks.get(self.block_index) else {
            return self;
        };

        if self.exercise_index + 1 < block.exercises.len() {
            Self {
                exercise_index: self.exercise_index + 1,
                ..self
            }
        } else if self.block_index + 1 < workout.blocks.len() {
            Self {
                block_index: self.block_index + 1,
                exercise_index: 0,
                ..self
            }
        } else {
            Self {
                phase: Phase::Done,
                ..self
            }
        }
    }

    /// Previous exercise, crossing back into the previous block's last
    /// exercise. No-op at the very first exercise.
    pub fn retreat(self, catalog: &Catalog) -> Self {
        if self.phase != Phase::InWorkout {
            return self;
        }
        if self.exercise_index > 0 {
            return Self {
                exercise_index: self.exercise_index - 1,
                ..self
            };
        }
        if self.block_index == 0 {
            return self;
        }
        let Some(previous) = self
            .current_workout(catalog)
            .and_then(|w| w.blocks.get(self.block_index - 1))
        else {
            return self;
        };
        Self {
            block_index: self.block_index - 1,
            exercise_index: previous.exercises.len().saturating_sub(1),
            ..self
        }
    }

    /// Jump to the start of the next block. Skipping the last block finishes
    /// the workout.
    pub fn skip_block(self, catalog: &Catalog) -> Self {
        if self.phase != Phase::InWorkout {
            return self;
        }
        let Some(workout) = self.current_workout(catalog) else {
            return self;
        };
        if workout.blocks.is_empty() {
            return self;
        }

        if self.block_index + 1 < workout.blocks.len() {
            Self {
                block_index: self.block_index + 1,
                exercise_index: 0,
                ..self
            }
        } else {
            Self {
                phase: Phase::Done,
                ..self
            }
        }
    }

    /// Back to the menu, forgetting the in-workout position. The menu cursor
    /// stays on the workout just left.
    pub fn return_to_menu(self) -> Self {
        if !self.has_menu {
            return self;
        }
        Self {
            phase: Phase::Menu,
            block_index: 0,
            exercise_index: 0,
            ..self
        }
    }
}
