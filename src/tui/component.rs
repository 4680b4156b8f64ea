use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something drawn into a `Rect` of the frame.
///
/// Props arrive as struct fields; persistent state is borrowed (`&'a mut`)
/// from `TuiState` for the duration of one frame.
///
/// `render` takes `&mut self` so a component can write back what it drew,
/// e.g. the click areas used by the next mouse event.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Persistent component state that reacts to terminal input.
pub trait EventHandler {
    /// What the component reports back to the event loop.
    type Event;

    /// Returns `None` when the event was consumed (or ignored) locally.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}

/// Whether the terminal cell `(column, row)` lies inside `rect`.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
