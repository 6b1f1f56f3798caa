//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the projected
//! view, and translates keyboard events into `core::input::Key` tokens.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Strictly event-driven: the loop blocks on the next terminal event,
//! dispatches it to completion, and redraws only when the state changed or
//! the terminal was resized. There are no timers and no background work.

mod component;
mod components;
mod event;
pub mod theme;
mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Effect, update};
use crate::core::input::dispatch;
use crate::core::model::Catalog;
use crate::core::state::NavState;
use crate::tui::event::{TuiEvent, next_event};
use crate::tui::theme::Theme;

/// TUI-specific presentation state (not part of core navigation)
pub struct TuiState {
    pub theme: Theme,
    /// Shown in the status bar
    pub source_label: String,
}

impl TuiState {
    pub fn new(theme: Theme, source_label: String) -> Self {
        Self {
            theme,
            source_label,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Take over the terminal and run until the user quits.
pub fn run(catalog: &Catalog, initial: NavState, tui: TuiState) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, catalog, initial, &tui));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    catalog: &Catalog,
    initial: NavState,
    tui: &TuiState,
) -> std::io::Result<()> {
    info!(
        "Event loop started in {:?} ({} workout(s))",
        initial.phase(),
        catalog.len()
    );
    let mut state = initial;
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, catalog, &state, tui))?;
            needs_redraw = false;
        }

        let Some(event) = next_event()? else {
            continue;
        };
        let key = match event {
            TuiEvent::Resize => {
                needs_redraw = true;
                continue;
            }
            TuiEvent::Key(key) => key,
        };

        let Some(action) = dispatch(&state, key) else {
            debug!("Ignored {:?} in {:?}", key, state.phase());
            continue;
        };

        let (next, effect) = update(catalog, state, action);
        if effect == Effect::Quit {
            break;
        }
        needs_redraw = next != state;
        state = next;
    }

    info!("Event loop finished in {:?}", state.phase());
    Ok(())
}
