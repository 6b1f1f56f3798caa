//! # Input Dispatcher
//!
//! Maps key tokens to actions, gated by the current phase:
//!
//! | Phase     | Keys                                                              |
//! |-----------|-------------------------------------------------------------------|
//! | Menu      | `Up`/`k` up, `Down`/`j` down, `Enter` select, `q` quit            |
//! | InWorkout | `Enter`/space/`n` next, `p`/`b` previous, `s` skip, `m` menu, `q` |
//! | Done      | `m` menu, `q` quit                                                |
//!
//! `Interrupt` (Ctrl+C) quits everywhere. `m` only maps when a menu exists.
//! Letters are case-sensitive; anything else is ignored.

use crate::core::action::Action;
use crate::core::state::{NavState, Phase};

/// A discrete key token, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Char(char),
    Interrupt,
}

pub fn dispatch(state: &NavState, key: Key) -> Option<Action> {
    if matches!(key, Key::Interrupt | Key::Char('q')) {
        return Some(Action::Quit);
    }
    if key == Key::Char('m') {
        return (state.has_menu() && state.phase() != Phase::Menu).then_some(Action::ReturnToMenu);
    }

    match state.phase() {
        Phase::Menu => match key {
            Key::Up | Key::Char('k') => Some(Action::SelectPrevious),
            Key::Down | Key::Char('j') => Some(Action::SelectNext),
            Key::Enter => Some(Action::Confirm),
            _ => None,
        },
        Phase::InWorkout => match key {
            Key::Enter | Key::Char(' ') | Key::Char('n') => Some(Action::Advance),
            Key::Char('p') | Key::Char('b') => Some(Action::Retreat),
            Key::Char('s') => Some(Action::SkipBlock),
            _ => None,
        },
        Phase::Done => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_catalog;

    fn in_workout() -> NavState {
        NavState::menu().confirm_selection(&test_catalog())
    }

    fn done() -> NavState {
        let catalog = test_catalog();
        in_workout().skip_block(&catalog).skip_block(&catalog)
    }

    #[test]
    fn test_menu_keys() {
        let menu = NavState::menu();
        assert_eq!(dispatch(&menu, Key::Up), Some(Action::SelectPrevious));
        assert_eq!(dispatch(&menu, Key::Char('k')), Some(Action::SelectPrevious));
        assert_eq!(dispatch(&menu, Key::Down), Some(Action::SelectNext));
        assert_eq!(dispatch(&menu, Key::Char('j')), Some(Action::SelectNext));
        assert_eq!(dispatch(&menu, Key::Enter), Some(Action::Confirm));
        assert_eq!(dispatch(&menu, Key::Char('n')), None);
        assert_eq!(dispatch(&menu, Key::Char('m')), None);
    }

    #[test]
    fn test_workout_keys() {
        let state = in_workout();
        for key in [Key::Enter, Key::Char(' '), Key::Char('n')] {
            assert_eq!(dispatch(&state, key), Some(Action::Advance));
        }
        assert_eq!(dispatch(&state, Key::Char('p')), Some(Action::Retreat));
        assert_eq!(dispatch(&state, Key::Char('b')), Some(Action::Retreat));
        assert_eq!(dispatch(&state, Key::Char('s')), Some(Action::SkipBlock));
        assert_eq!(dispatch(&state, Key::Char('m')), Some(Action::ReturnToMenu));
        assert_eq!(dispatch(&state, Key::Up), None);
        assert_eq!(dispatch(&state, Key::Char('j')), None);
    }

    #[test]
    fn test_done_keys() {
        let state = done();
        assert_eq!(state.phase(), Phase::Done);
        assert_eq!(dispatch(&state, Key::Char('m')), Some(Action::ReturnToMenu));
        assert_eq!(dispatch(&state, Key::Enter), None);
        assert_eq!(dispatch(&state, Key::Char('n')), None);
    }

    #[test]
    fn test_quit_in_every_phase() {
        for state in [NavState::menu(), in_workout(), done(), NavState::single()] {
            assert_eq!(dispatch(&state, Key::Char('q')), Some(Action::Quit));
            assert_eq!(dispatch(&state, Key::Interrupt), Some(Action::Quit));
        }
    }

    #[test]
    fn test_letters_are_case_sensitive() {
        let state = in_workout();
        assert_eq!(dispatch(&state, Key::Char('N')), None);
        assert_eq!(dispatch(&state, Key::Char('Q')), None);
        assert_eq!(dispatch(&NavState::menu(), Key::Char('J')), None);
    }

    #[test]
    fn test_menu_key_absent_without_menu() {
        let state = NavState::single();
        assert_eq!(dispatch(&state, Key::Char('m')), None);
        assert_eq!(dispatch(&state, Key::Char('n')), Some(Action::Advance));
    }
}
