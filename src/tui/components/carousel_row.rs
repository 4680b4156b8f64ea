//! # CarouselRow Component
//!
//! Renders one genre carousel: title bar, arrows, the visible window of the
//! track, and the pagination dots.
//!
//! ```text
//! ▸ Sci-Fi                                                   ← title
//!    ┌ 1 ──────┐┌ 2 ──────┐┌ 3 ──────┐┌ 4 ──────┐
//!  ◀ │Inception││Alien    ││Dune     ││Gattaca  │ ▶         ← arrows + track
//!    └─────────┘└─────────┘└─────────┘└─────────┘
//!                      ● ○ ○ ○ ○ ○ ○                        ← pagination
//! ```
//!
//! Follows the persistent state + transient wrapper pattern: the `Carousel`
//! lives in `TuiState`, `CarouselRow` borrows it for one frame and records the
//! areas it drew into `RowHits` for mouse hit testing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::carousel::{Carousel, Control, Part};
use crate::core::modal::{ModalKey, ModalRegistry};
use crate::core::state::RowStatus;
use crate::tui::component::{Component, contains};

/// Rows needed by one carousel: title + bordered cards + pagination.
pub const ROW_HEIGHT: u16 = 7;
const ARROW_WIDTH: u16 = 3;

/// Click areas recorded while rendering a row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowHits {
    pub area: Rect,
    pub controls: Vec<(Rect, Control)>,
    /// Item areas and the slot each one shows.
    pub items: Vec<(Rect, usize)>,
}

impl RowHits {
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        self.controls
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, control)| *control)
    }

    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        self.items
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, slot)| *slot)
    }
}

/// Terminal style for a part's class list, e.g. `"carousel__item carousel__item--active"`.
fn class_style(classes: &str) -> Style {
    let mut names = classes.split_whitespace();
    let base = names.next().unwrap_or_default();
    let active = names.any(|name| name.ends_with("--active"));
    match (base, active) {
        ("title", true) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        ("title", false) => Style::default().fg(Color::Gray),
        ("carousel__item", true) => Style::default().fg(Color::Cyan),
        ("carousel__item", false) => Style::default().fg(Color::DarkGray),
        ("carousel__prev" | "carousel__next", _) => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        ("carousel__pagination__button", true) => Style::default().fg(Color::Yellow),
        ("carousel__pagination__button", false) => Style::default().fg(Color::DarkGray),
        _ => Style::default(),
    }
}

pub struct CarouselRow<'a> {
    carousel: &'a Carousel<ModalKey>,
    modals: &'a ModalRegistry,
    status: &'a RowStatus,
    focused: bool,
    hits: &'a mut RowHits,
}

impl<'a> CarouselRow<'a> {
    pub fn new(
        carousel: &'a Carousel<ModalKey>,
        modals: &'a ModalRegistry,
        status: &'a RowStatus,
        focused: bool,
        hits: &'a mut RowHits,
    ) -> Self {
        Self {
            carousel,
            modals,
            status,
            focused,
            hits,
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let marker = if self.focused { "▸ " } else { "  " };
        let line = Line::from(Span::styled(
            format!("{marker}{}", self.carousel.title()),
            class_style(&Part::Title.class_list(self.focused.then_some("active"))),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_arrows(&mut self, frame: &mut Frame, prev_area: Rect, next_area: Rect) {
        let carousel = self.carousel;
        let Some(arrows) = carousel.navigation() else {
            return;
        };
        let middle = |area: Rect| Rect::new(area.x, area.y + area.height / 2, area.width, 1);

        if !arrows.prev_hidden() {
            let paragraph = Paragraph::new(Span::styled("◀", class_style(&arrows.prev_class())))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, middle(prev_area));
            self.hits.controls.push((prev_area, Control::Prev));
        }
        if !arrows.next_hidden() {
            let paragraph = Paragraph::new(Span::styled("▶", class_style(&arrows.next_class())))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, middle(next_area));
            self.hits.controls.push((next_area, Control::Next));
        }
    }

    fn render_track(&mut self, frame: &mut Frame, area: Rect) {
        let carousel = self.carousel;
        let track = carousel.layout().resolve(area.width);
        let current = carousel.current_item();

        for (index, item) in carousel.items().iter().enumerate() {
            let Some((x, width)) = track.item_span(index) else {
                continue;
            };
            let card_area = Rect::new(area.x + x, area.y, width, area.height);
            let classes = item.class_list(self.focused && index == current);
            self.render_card(frame, card_area, &item.content, &classes);
            self.hits.items.push((card_area, item.content.slot));
        }
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, key: &ModalKey, classes: &str) {
        let style = class_style(classes);
        let block = Block::bordered()
            .title(format!(" {} ", key.slot + 1))
            .border_style(style);
        let inner_width = area.width.saturating_sub(2) as usize;

        let lines: Vec<Line> = match (self.modals.get(key), self.status) {
            (Some(movie), _) => vec![
                Line::from(Span::styled(
                    truncate_to_width(&movie.title, inner_width),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    truncate_to_width(&format!("★ {}", movie.imdb_score), inner_width),
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(Span::styled(
                    truncate_to_width(&movie.duration, inner_width),
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            (None, RowStatus::Loading) => vec![Line::from(Span::styled(
                truncate_to_width("Loading...", inner_width),
                Style::default().fg(Color::DarkGray),
            ))],
            (None, _) => vec![Line::from(Span::styled(
                truncate_to_width("Unavailable", inner_width),
                Style::default().fg(Color::Red),
            ))],
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_pagination(&mut self, frame: &mut Frame, area: Rect) {
        let carousel = self.carousel;
        let Some(dots) = carousel.pagination() else {
            return;
        };
        let count = dots.pages().len() as u16;
        if count == 0 || area.width == 0 {
            return;
        }
        // "● ○ ○": one cell per dot plus a gap between dots.
        let total_width = count * 2 - 1;
        let start = area.x + area.width.saturating_sub(total_width) / 2;

        for page in 0..dots.pages().len() {
            let x = start + page as u16 * 2;
            if x >= area.x + area.width {
                break;
            }
            let symbol = if dots.is_active(page) { "●" } else { "○" };
            let dot_area = Rect::new(x, area.y, 1, 1);
            frame.render_widget(
                Span::styled(symbol, class_style(&dots.button_class(page))),
                dot_area,
            );
            self.hits.controls.push((dot_area, Control::Page(page)));
        }
    }
}

impl<'a> Component for CarouselRow<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        *self.hits = RowHits {
            area,
            ..Default::default()
        };
        if area.height < 3 {
            return;
        }

        let [title_area, body_area, dots_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        let [prev_area, track_area, next_area] = Layout::horizontal([
            Constraint::Length(ARROW_WIDTH),
            Constraint::Min(0),
            Constraint::Length(ARROW_WIDTH),
        ])
        .areas(body_area);

        self.render_title(frame, title_area);
        self.render_track(frame, track_area);
        self.render_arrows(frame, prev_area, next_area);
        self.render_pagination(frame, dots_area);
    }
}

/// Truncate to `max_width` display columns, ending with "…" when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{CarouselOptions, Container};
    use crate::test_support::movie;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn row_carousel(options: CarouselOptions) -> Carousel<ModalKey> {
        let children = (0..7).map(|slot| ModalKey::new("Sci-Fi", slot)).collect();
        Carousel::new(Container::new("Sci-Fi", children), options)
    }

    fn draw(
        carousel: &Carousel<ModalKey>,
        modals: &ModalRegistry,
        status: &RowStatus,
    ) -> (String, RowHits) {
        let backend = TestBackend::new(86, ROW_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut hits = RowHits::default();
        terminal
            .draw(|f| {
                CarouselRow::new(carousel, modals, status, true, &mut hits).render(f, f.area());
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        (text, hits)
    }

    #[test]
    fn test_renders_visible_window_only() {
        let mut carousel = row_carousel(crate::core::config::ROW_OPTIONS);
        let mut modals = ModalRegistry::new();
        for (slot, title) in ["Alien", "Dune", "Gattaca", "Her", "Moon", "Solaris", "Tron"]
            .iter()
            .enumerate()
        {
            modals.insert(ModalKey::new("Sci-Fi", slot), movie(slot as u64, title));
        }
        carousel.goto_item(2);

        let (text, hits) = draw(&carousel, &modals, &RowStatus::Ready);

        assert!(text.contains("Sci-Fi"));
        assert!(text.contains("Gattaca"));
        assert!(text.contains("Solaris"));
        assert!(!text.contains("Dune"));
        assert!(!text.contains("Tron"));
        let slots: Vec<usize> = hits.items.iter().map(|(_, slot)| *slot).collect();
        assert_eq!(slots, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_placeholder_while_loading() {
        let carousel = row_carousel(crate::core::config::ROW_OPTIONS);
        let (text, _) = draw(&carousel, &ModalRegistry::new(), &RowStatus::Loading);
        assert!(text.contains("Loading..."));

        let (text, _) = draw(
            &carousel,
            &ModalRegistry::new(),
            &RowStatus::Failed("boom".to_string()),
        );
        assert!(text.contains("Unavailable"));
    }

    #[test]
    fn test_missing_slot_unavailable_once_row_is_ready() {
        let carousel = row_carousel(crate::core::config::ROW_OPTIONS);
        let mut modals = ModalRegistry::new();
        modals.insert(ModalKey::new("Sci-Fi", 0), movie(0, "Alien"));
        modals.insert(ModalKey::new("Sci-Fi", 2), movie(2, "Gattaca"));

        let (text, _) = draw(&carousel, &modals, &RowStatus::Ready);

        assert!(text.contains("Alien"));
        assert!(text.contains("Gattaca"));
        assert!(text.contains("Unavailable"));
        assert!(!text.contains("Loading..."));
    }

    #[test]
    fn test_controls_recorded_for_hit_testing() {
        let carousel = row_carousel(crate::core::config::ROW_OPTIONS);
        let (text, hits) = draw(&carousel, &ModalRegistry::new(), &RowStatus::Loading);

        assert!(text.contains('◀'));
        assert!(text.contains('▶'));
        let pages = hits
            .controls
            .iter()
            .filter(|(_, c)| matches!(c, Control::Page(_)))
            .count();
        assert_eq!(pages, 7);
        assert!(hits.controls.iter().any(|(_, c)| *c == Control::Prev));

        let (rect, slot) = hits.items[1];
        assert_eq!(hits.item_at(rect.x + 1, rect.y + 1), Some(slot));
    }

    #[test]
    fn test_hidden_prev_arrow_not_clickable() {
        let carousel = row_carousel(CarouselOptions {
            slides_visible: 4,
            ..Default::default()
        });
        let (text, hits) = draw(&carousel, &ModalRegistry::new(), &RowStatus::Loading);

        assert!(!text.contains('◀'));
        assert!(text.contains('▶'));
        assert!(!hits.controls.iter().any(|(_, c)| *c == Control::Prev));
        assert!(carousel.pagination().is_none());
    }

    #[test]
    fn test_class_style_follows_active_modifier() {
        assert_eq!(
            class_style(&Part::Item.class_list(Some("active"))),
            Style::default().fg(Color::Cyan)
        );
        assert_eq!(
            class_style(&Part::Item.class_list(None)),
            Style::default().fg(Color::DarkGray)
        );
        assert_eq!(
            class_style(&Part::Next.class_list(Some("hidden"))),
            class_style(&Part::Next.class_list(None))
        );
        assert_eq!(class_style("unknown"), Style::default());
    }

    #[test]
    fn test_selected_card_and_active_dot_are_highlighted() {
        let carousel = row_carousel(crate::core::config::ROW_OPTIONS);
        let backend = TestBackend::new(86, ROW_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut hits = RowHits::default();
        let modals = ModalRegistry::new();
        terminal
            .draw(|f| {
                CarouselRow::new(&carousel, &modals, &RowStatus::Loading, true, &mut hits)
                    .render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let (first, _) = hits.items[0];
        let (second, _) = hits.items[1];
        assert_eq!(buffer[(first.x, first.y)].fg, Color::Cyan);
        assert_eq!(buffer[(second.x, second.y)].fg, Color::DarkGray);

        let (dot, _) = hits.controls.iter().find(|(_, c)| *c == Control::Page(0)).unwrap();
        assert_eq!(buffer[(dot.x, dot.y)].symbol(), "●");
        assert_eq!(buffer[(dot.x, dot.y)].fg, Color::Yellow);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Inception", 20), "Inception");
        assert_eq!(truncate_to_width("Inception", 5), "Ince…");
        assert_eq!(truncate_to_width("千と千尋の神隠し", 5), "千と…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
