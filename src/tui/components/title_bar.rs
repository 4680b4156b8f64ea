//! # TitleBar Component
//!
//! Top status bar: application name, API endpoint and the latest status.
//!
//! Stateless: it receives all data as props and renders a single line.
//!
//! 1. **Loading**: `"JustStream (api: http://...) | Loaded Action | loading..."`
//! 2. **Status message**: `"JustStream (api: http://...) | Ready"`
//! 3. **Default**: `"JustStream (api: http://...)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Movie API base URL
    pub api_url: String,
    /// Status message (e.g., "Loaded Action", "Ready")
    pub status_message: String,
    /// Whether some rows are still being fetched
    pub is_loading: bool,
}

impl TitleBar {
    pub fn new(api_url: String, status_message: String, is_loading: bool) -> Self {
        Self {
            api_url,
            status_message,
            is_loading,
        }
    }

    fn text(&self) -> String {
        let base = format!("JustStream (api: {})", self.api_url);
        match (self.status_message.is_empty(), self.is_loading) {
            (true, false) => base,
            (true, true) => format!("{base} | loading..."),
            (false, false) => format!("{base} | {}", self.status_message),
            (false, true) => format!("{base} | {} | loading...", self.status_message),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::Black).bg(Color::Yellow);
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}
