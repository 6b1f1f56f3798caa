//! # Entity Model
//!
//! Immutable description of what the user can train.
//!
//! ```text
//! Catalog
//! └── Workout           // "Pull Day"
//!     └── Block         // "Strength Block A" (10-15 min)
//!         └── Exercise  // "DB Rows" | 3 x 10-12 | 2 sec pull | Go heavy
//! ```
//!
//! Built once by the loader, read-only afterwards. Optional text fields are
//! stored as empty strings, never placeholders, so the view can test
//! presence uniformly.

/// A single movement within a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub sets: String,
    pub tempo: String,
    pub notes: String,
}

impl Exercise {
    pub fn new(
        name: impl AsRef<str>,
        sets: impl AsRef<str>,
        tempo: impl AsRef<str>,
        notes: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            sets: sets.as_ref().trim().to_string(),
            tempo: tempo.as_ref().trim().to_string(),
            notes: notes.as_ref().trim().to_string(),
        }
    }

    /// An exercise with only a name.
    pub fn named(name: impl AsRef<str>) -> Self {
        Self::new(name, "", "", "")
    }

    pub fn has_sets(&self) -> bool {
        !self.sets.is_empty()
    }

    pub fn has_tempo(&self) -> bool {
        !self.tempo.is_empty()
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}

/// A named phase of a workout with an optional duration hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub name: String,
    pub duration: String,
    pub exercises: Vec<Exercise>,
}

impl Block {
    pub fn new(name: impl AsRef<str>, duration: impl AsRef<str>, exercises: Vec<Exercise>) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            duration: duration.as_ref().trim().to_string(),
            exercises,
        }
    }

    pub fn has_duration(&self) -> bool {
        !self.duration.is_empty()
    }
}

/// An ordered sequence of blocks completed in one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub name: String,
    pub blocks: Vec<Block>,
}

impl Workout {
    pub fn new(name: impl AsRef<str>, blocks: Vec<Block>) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            blocks,
        }
    }

    /// Number of exercises across every block.
    pub fn total_exercises(&self) -> usize {
        self.blocks.iter().map(|b| b.exercises.len()).sum()
    }
}

/// All loaded workouts, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    workouts: Vec<Workout>,
}

impl Catalog {
    pub fn new(workouts: Vec<Workout>) -> Self {
        Self { workouts }
    }

    /// A catalog holding exactly one workout (menu-less variant).
    pub fn single(workout: Workout) -> Self {
        Self {
            workouts: vec![workout],
        }
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Workout> {
        self.workouts.get(index)
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Look a workout up by name. Exact matches win over case-insensitive ones.
    pub fn find(&self, name: &str) -> Option<&Workout> {
        let name = name.trim();
        self.workouts
            .iter()
            .find(|w| w.name == name)
            .or_else(|| {
                self.workouts
                    .iter()
                    .find(|w| w.name.eq_ignore_ascii_case(name))
            })
    }

    /// Consume the catalog, keeping only the named workout.
    pub fn into_single(self, name: &str) -> Option<Catalog> {
        let workout = self.find(name)?.clone();
        Some(Catalog::single(workout))
    }
}
