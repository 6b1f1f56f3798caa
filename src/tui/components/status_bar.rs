//! # StatusBar Component
//!
//! Bottom line showing where the workouts came from and overall progress.
//!
//! Purely presentational: all data arrives as props.
//!
//! 1. **In a workout**: `clifit v0.1.0 | workouts.yaml | Pull Day 4/5`
//! 2. **Elsewhere**: `clifit v0.1.0 | workouts.yaml`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct StatusBar {
    /// Display name of the workouts file
    pub source: String,
    /// `(workout name, exercises done or current, total)` while training
    pub progress: Option<(String, usize, usize)>,
}

impl StatusBar {
    pub fn new(source: String, progress: Option<(String, usize, usize)>) -> Self {
        Self { source, progress }
    }

    fn text(&self) -> String {
        let prefix = format!("clifit v{} | {}", env!("CARGO_PKG_VERSION"), self.source);
        match &self.progress {
            Some((name, current, total)) => format!("{prefix} | {name} {current}/{total}"),
            None => prefix,
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().fg(Color::DarkGray));
        frame.render_widget(span, area);
    }
}
