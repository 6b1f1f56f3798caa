//! # Definition Loader
//!
//! Turns a YAML workout document into a [`Catalog`].
//!
//! ```yaml
//! Pull Day:
//!   Strength Block A (10-15 min):
//!     - DB Rows | 3 x 10-12 | 2 sec pull | Go heavy
//!     - Dead hangs | 2 x 20-30 sec
//! ```
//!
//! Workouts and blocks keep document order. Definitions the navigator could
//! not walk (no workouts, a workout without blocks, a block without
//! exercises, an unnamed exercise) are rejected here, so the state machine
//! never sees them.

use log::{debug, info};
use serde_yaml::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::model::{Block, Catalog, Exercise, Workout};

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_yaml::Error),
    Invalid(String),
    UnknownWorkout(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            LoadError::Parse(e) => write!(f, "malformed workout document: {e}"),
            LoadError::Invalid(msg) => write!(f, "invalid workout document: {msg}"),
            LoadError::UnknownWorkout(name) => write!(f, "no workout named \"{name}\""),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

// ============================================================================
// Line Parsers
// ============================================================================

/// Split a block label into `(name, duration)`.
///
/// `"Strength Block A (10-15 min)"` becomes `("Strength Block A", "10-15 min")`.
/// Without a trailing parenthesized suffix the whole label is the name.
pub fn parse_block_label(label: &str) -> (String, String) {
    let label = label.trim();
    if let Some(inner) = label.strip_suffix(')') {
        // The duration may not contain ')', so the '(' must follow the last one.
        let floor = inner.rfind(')').map_or(0, |i| i + 1);
        let open = inner[floor..]
            .char_indices()
            .map(|(i, c)| (i + floor, c))
            .find(|&(i, c)| c == '(' && i > 0)
            .map(|(i, _)| i);
        if let Some(open) = open {
            let duration = &inner[open + 1..];
            if !duration.is_empty() {
                return (inner[..open].trim().to_string(), duration.trim().to_string());
            }
        }
    }
    (label.to_string(), String::new())
}

/// Parse `name | sets | tempo | notes`. Missing trailing fields are empty,
/// anything past the fourth field is dropped.
pub fn parse_exercise_line(line: &str) -> Exercise {
    let mut fields = line.split('|');
    let mut next = || fields.next().unwrap_or("");
    let name = next();
    let sets = next();
    let tempo = next();
    let notes = next();
    Exercise::new(name, sets, tempo, notes)
}

// ============================================================================
// Document Loading
// ============================================================================

/// Read and parse a workout document from disk.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&contents)?;
    info!(
        "Loaded {} workout(s) from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Parse a workout document held in memory.
pub fn parse_catalog(source: &str) -> Result<Catalog, LoadError> {
    let root: Value = serde_yaml::from_str(source).map_err(LoadError::Parse)?;
    let root = match root {
        Value::Mapping(m) => m,
        Value::Null => return Err(LoadError::Invalid("document contains no workouts".into())),
        _ => {
            return Err(LoadError::Invalid(
                "top level must map workout names to blocks".into(),
            ));
        }
    };

    let mut workouts = Vec::with_capacity(root.len());
    for (key, body) in &root {
        let name = scalar_text(key)
            .ok_or_else(|| LoadError::Invalid("workout names must be plain text".into()))?;
        workouts.push(parse_workout(&name, body)?);
    }

    if workouts.is_empty() {
        return Err(LoadError::Invalid("document contains no workouts".into()));
    }
    Ok(Catalog::new(workouts))
}

fn parse_workout(name: &str, body: &Value) -> Result<Workout, LoadError> {
    if name.trim().is_empty() {
        return Err(LoadError::Invalid("a workout has an empty name".into()));
    }
    let blocks = match body {
        Value::Mapping(m) => m,
        Value::Null => {
            return Err(LoadError::Invalid(format!("workout \"{name}\" has no blocks")));
        }
        _ => {
            return Err(LoadError::Invalid(format!(
                "workout \"{name}\" must map block labels to exercise lists"
            )));
        }
    };

    let mut parsed = Vec::with_capacity(blocks.len());
    for (label, exercises) in blocks {
        let label = scalar_text(label).ok_or_else(|| {
            LoadError::Invalid(format!("workout \"{name}\" has a non-text block label"))
        })?;
        parsed.push(parse_block(name, &label, exercises)?);
    }

    if parsed.is_empty() {
        return Err(LoadError::Invalid(format!("workout \"{name}\" has no blocks")));
    }
    debug!("Parsed workout \"{}\" with {} block(s)", name, parsed.len());
    Ok(Workout::new(name, parsed))
}

fn parse_block(workout: &str, label: &str, body: &Value) -> Result<Block, LoadError> {
    let (block_name, duration) = parse_block_label(label);
    let lines: &[Value] = match body {
        Value::Sequence(seq) => seq.as_slice(),
        Value::Null => &[],
        _ => {
            return Err(LoadError::Invalid(format!(
                "block \"{block_name}\" in \"{workout}\" must be a list of exercises"
            )));
        }
    };

    let mut exercises = Vec::with_capacity(lines.len());
    for line in lines {
        let text = scalar_text(line).ok_or_else(|| {
            LoadError::Invalid(format!(
                "block \"{block_name}\" in \"{workout}\" has a non-text exercise entry"
            ))
        })?;
        let exercise = parse_exercise_line(&text);
        if exercise.name.is_empty() {
            return Err(LoadError::Invalid(format!(
                "block \"{block_name}\" in \"{workout}\" has an exercise without a name"
            )));
        }
        exercises.push(exercise);
    }

    if exercises.is_empty() {
        return Err(LoadError::Invalid(format!(
            "block \"{block_name}\" in \"{workout}\" has no exercises"
        )));
    }
    Ok(Block::new(block_name, duration, exercises))
}

/// Text of a scalar YAML node. Numbers and booleans are stringified.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
