use crate::carousel::Control;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::{Component, contains};
use crate::tui::components::{CarouselRow, MovieModal, ROW_HEIGHT, RowHits, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const HELP_TEXT: &str =
    " ←/→ Browse  ↑/↓ Genre  Enter/click Details  Esc/click outside Close  q Quit ";

/// Click areas of the last frame, per genre row.
#[derive(Debug, Default)]
pub struct HitMap {
    /// Row index into `TuiState::carousels` and what that row recorded.
    pub rows: Vec<(usize, RowHits)>,
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Control { row: usize, control: Control },
    Item { row: usize, slot: usize },
    Row(usize),
}

impl HitMap {
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let (index, hits) = self
            .rows
            .iter()
            .find(|(_, hits)| contains(hits.area, column, row))?;
        if let Some(control) = hits.control_at(column, row) {
            return Some(Hit::Control {
                row: *index,
                control,
            });
        }
        if let Some(slot) = hits.item_at(column, row) {
            return Some(Hit::Item { row: *index, slot });
        }
        Some(Hit::Row(*index))
    }
}

/// First row to draw so that `focused` stays on screen.
fn first_visible_row(focused: usize, capacity: usize) -> usize {
    let capacity = capacity.max(1);
    (focused + 1).saturating_sub(capacity)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, rows_area, help_area] = layout.areas(frame.area());

    TitleBar::new(
        app.api_url.clone(),
        app.status_message.clone(),
        app.is_loading(),
    )
    .render(frame, title_area);

    draw_rows(frame, rows_area, app, tui);

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let (Some(key), Some(details)) = (app.modals.open_key(), app.modals.current()) {
        MovieModal::new(&mut tui.modal, details, &key.genre).render(frame, frame.area());
    }
}

fn draw_rows(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    tui.hits.rows.clear();
    let capacity = (area.height / ROW_HEIGHT) as usize;
    if capacity == 0 {
        return;
    }
    let first = first_visible_row(tui.focused, capacity);

    let rows = tui
        .carousels
        .iter()
        .zip(&app.rows)
        .enumerate()
        .skip(first)
        .take(capacity);
    for (offset, (index, (carousel, genre_row))) in rows.enumerate() {
        let row_area = Rect::new(
            area.x,
            area.y + offset as u16 * ROW_HEIGHT,
            area.width,
            ROW_HEIGHT,
        );
        let mut hits = RowHits::default();
        CarouselRow::new(
            carousel,
            &app.modals,
            &genre_row.status,
            index == tui.focused,
            &mut hits,
        )
        .render(frame, row_area);
        tui.hits.rows.push((index, hits));
    }
}
