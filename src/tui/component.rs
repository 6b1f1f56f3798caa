use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the props pattern:
/// - They receive data via struct fields, borrowed for one frame.
/// - They render to a `Frame` within a given `Rect`.
///
/// They never read `NavState` directly; `ui::draw_ui` hands them what
/// they show.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
