//! clifit library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

use crate::core::loader::LoadError;
use crate::core::model::Catalog;
use crate::core::state::NavState;

/// Pick the starting state for a loaded catalog.
///
/// With a workout name, the catalog is narrowed to that workout and the
/// session starts inside it with no menu. Without one, it starts at the menu.
pub fn prepare_session(
    catalog: Catalog,
    workout: Option<&str>,
) -> Result<(Catalog, NavState), LoadError> {
    match workout {
        Some(name) => {
            let single = catalog
                .into_single(name)
                .ok_or_else(|| LoadError::UnknownWorkout(name.to_string()))?;
            Ok((single, NavState::single()))
        }
        None => Ok((catalog, NavState::menu())),
    }
}
