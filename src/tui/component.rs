use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the props pattern:
/// - They receive data via struct fields.
/// - They render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self`; a component may update state it borrows,
/// such as a clamped scroll offset, while drawing.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
