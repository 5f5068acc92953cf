use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// A drawable piece of the search widget.
///
/// Inputs arrive as plain struct fields set by the parent before each
/// frame. `render` is `&mut self` because the input field places the
/// terminal cursor while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// What the component reports upward after an event.
    type Event;

    /// Returns `Some` only when the event changed something the parent
    /// needs to know about.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
