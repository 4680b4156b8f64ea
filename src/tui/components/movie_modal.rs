//! # Movie Modal Component
//!
//! Centered overlay with every detail of one movie. Opened with Enter or a
//! click on a card, dismissed with Esc, a click on `[x]`, or a click anywhere
//! outside the overlay.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MovieModalState` lives in `TuiState` (scroll offset, drawn areas)
//! - `MovieModal` is created each frame with borrowed state and details

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::catalog::MovieDetails;
use crate::tui::component::{Component, EventHandler, contains};
use crate::tui::event::TuiEvent;

const CLOSE_LABEL: &str = "[x]";

/// Persistent state for the modal overlay.
#[derive(Default)]
pub struct MovieModalState {
    pub scroll_state: ScrollViewState,
    /// The whole overlay, as drawn on the last frame.
    pub area: Option<Rect>,
    /// Where `[x]` was drawn on the last frame.
    pub close_area: Option<Rect>,
}

impl MovieModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous movie's scroll position.
    pub fn reset(&mut self) {
        self.scroll_state = ScrollViewState::default();
        self.area = None;
        self.close_area = None;
    }
}

/// Events emitted by the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    Close,
}

impl EventHandler for MovieModalState {
    type Event = ModalEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ModalEvent> {
        match event {
            TuiEvent::Escape => Some(ModalEvent::Close),
            TuiEvent::Up | TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::Down | TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                None
            }
            TuiEvent::MouseClick(column, row) => {
                let on_close = self
                    .close_area
                    .is_some_and(|area| contains(area, *column, *row));
                let outside = self
                    .area
                    .is_some_and(|area| !contains(area, *column, *row));
                (on_close || outside).then_some(ModalEvent::Close)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the modal overlay.
pub struct MovieModal<'a> {
    state: &'a mut MovieModalState,
    details: &'a MovieDetails,
    genre: &'a str,
}

impl<'a> MovieModal<'a> {
    pub fn new(state: &'a mut MovieModalState, details: &'a MovieDetails, genre: &'a str) -> Self {
        Self {
            state,
            details,
            genre,
        }
    }
}

/// Wrap every labelled field to `width` columns.
fn detail_lines(details: &MovieDetails, width: usize) -> Vec<Line<'static>> {
    let width = width.max(10);
    let label_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    for (label, value) in details.fields() {
        let value = if value.is_empty() { "-" } else { value };
        let text = format!("{label}: {value}");
        for (i, wrapped) in textwrap::wrap(&text, width).into_iter().enumerate() {
            let wrapped = wrapped.into_owned();
            if i == 0 {
                // Style the label prefix separately from the value.
                let (head, tail) = wrapped.split_at(label.len().min(wrapped.len()));
                lines.push(Line::from(vec![
                    Span::styled(head.to_string(), label_style),
                    Span::raw(tail.to_string()),
                ]));
            } else {
                lines.push(Line::from(wrapped));
            }
        }
    }
    if let Some(url) = &details.image_url {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Poster: {url}"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

impl<'a> Component for MovieModal<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(80, 80, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);
        self.state.area = Some(overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Line::from(vec![
                Span::styled(
                    format!(" {} ", self.details.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("({}) ", self.genre),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Scroll  Esc/click outside Close ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        if overlay.width > CLOSE_LABEL.len() as u16 + 2 {
            let close_area = Rect::new(
                overlay.x + overlay.width - CLOSE_LABEL.len() as u16 - 1,
                overlay.y,
                CLOSE_LABEL.len() as u16,
                1,
            );
            frame.render_widget(
                Span::styled(CLOSE_LABEL, Style::default().fg(Color::Red)),
                close_area,
            );
            self.state.close_area = Some(close_area);
        } else {
            self.state.close_area = None;
        }

        // -1 for scrollbar safe area
        let content_width = inner.width.saturating_sub(1);
        let lines = detail_lines(self.details, content_width as usize);
        let content_height = lines.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, 0, content_width, content_height),
        );
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
