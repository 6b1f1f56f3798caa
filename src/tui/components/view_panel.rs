//! # View Panel
//!
//! Draws a projected [`View`] line by line, styled through the [`Theme`].
//! Created fresh each frame with borrowed props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::view::View;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Horizontal padding (per side) inside the panel.
const CONTENT_PAD_H: u16 = 2;
/// Vertical padding (top and bottom) inside the panel.
const CONTENT_PAD_V: u16 = 1;

pub struct ViewPanel<'a> {
    pub view: &'a View,
    pub theme: &'a Theme,
}

impl<'a> ViewPanel<'a> {
    pub fn new(view: &'a View, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Component for ViewPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self.view.lines.iter().map(|l| self.theme.line(l)).collect();
        let paragraph = Paragraph::new(lines)
            .block(Block::default().padding(Padding::new(
                CONTENT_PAD_H,
                CONTENT_PAD_H,
                CONTENT_PAD_V,
                CONTENT_PAD_V,
            )))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
