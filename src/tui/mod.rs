//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into carousel moves and
//! core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Viewport
//!
//! Carousels classify the screen as mobile or desktop from a width in
//! pixels. The terminal's reported pixel width is used when available,
//! otherwise `columns × cell_width_px`.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: polls every ~100ms so rows fill in as genres arrive.
//! - **Idle**: sleeps up to 500ms, only redraws on events or background
//!   actions.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::carousel::{Carousel, Container};
use crate::catalog::{HttpCatalog, MovieSource, fetch_genre};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::modal::ModalKey;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ModalEvent, MovieModalState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::{Hit, HitMap};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// One carousel per genre row, in `App::rows` order.
    pub carousels: Vec<Carousel<ModalKey>>,
    /// Row receiving arrow keys and Enter.
    pub focused: usize,
    pub modal: MovieModalState,
    pub hits: HitMap,
    pub cell_width_px: u16,
}

impl TuiState {
    pub fn new(app: &App, config: &ResolvedConfig, viewport_px: u32) -> Self {
        let carousels = app
            .rows
            .iter()
            .map(|row| {
                let label = row.genre.label.clone();
                let children = (0..app.slots_per_genre)
                    .map(|slot| ModalKey::new(label.clone(), slot))
                    .collect();
                Carousel::builder(Container::new(label, children))
                    .options(config.carousel)
                    .mobile_breakpoint(config.mobile_breakpoint)
                    .viewport_width(viewport_px)
                    .build()
            })
            .collect();
        Self {
            carousels,
            focused: 0,
            modal: MovieModalState::new(),
            hits: HitMap::default(),
            cell_width_px: config.cell_width_px,
        }
    }

    /// Forward a new viewport width to every carousel.
    pub fn resize(&mut self, viewport_px: u32) {
        let flipped = self
            .carousels
            .iter_mut()
            .map(|carousel| carousel.on_viewport_resize(viewport_px))
            .filter(|flipped| *flipped)
            .count();
        if flipped > 0 {
            info!("Viewport {}px: {} carousels re-laid out", viewport_px, flipped);
        }
    }

    fn focus(&mut self, row: usize) {
        if row < self.carousels.len() {
            self.focused = row;
        }
    }

    fn focused_carousel(&mut self) -> Option<&mut Carousel<ModalKey>> {
        self.carousels.get_mut(self.focused)
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Pixel width of the viewport: the terminal's own report when it has one.
fn pixel_width(reported: Option<u16>, columns: u16, cell_width_px: u16) -> u32 {
    match reported {
        Some(width) if width > 0 => width as u32,
        _ => columns as u32 * cell_width_px as u32,
    }
}

fn viewport_px(columns: u16, cell_width_px: u16) -> u32 {
    let reported = match crossterm::terminal::window_size() {
        Ok(size) => Some(size.width),
        Err(e) => {
            debug!("Terminal pixel size unavailable: {}", e);
            None
        }
    };
    pixel_width(reported, columns, cell_width_px)
}

/// Open the detail overlay for `key`, starting at the top.
fn open_modal(app: &mut App, tui: &mut TuiState, key: ModalKey) -> Effect {
    tui.modal.reset();
    update(app, Action::OpenModal(key))
}

/// Route one terminal event. Carousel moves stay in the TUI, everything
/// else goes through `core::update`.
pub(crate) fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    // ForceQuit (Ctrl+C) always quits, overlay included
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }
    if let TuiEvent::Resize(columns, _rows) = event {
        tui.resize(viewport_px(columns, tui.cell_width_px));
        return Effect::None;
    }

    // When the overlay is open, route all events to it
    if app.modals.is_open() {
        if let Some(ModalEvent::Close) = tui.modal.handle_event(&event) {
            return update(app, Action::CloseModal);
        }
        return Effect::None;
    }

    match event {
        TuiEvent::Quit => update(app, Action::Quit),
        TuiEvent::Left => {
            if let Some(carousel) = tui.focused_carousel() {
                carousel.prev();
            }
            Effect::None
        }
        TuiEvent::Right => {
            if let Some(carousel) = tui.focused_carousel() {
                carousel.next();
            }
            Effect::None
        }
        TuiEvent::Up | TuiEvent::ScrollUp => {
            tui.focus(tui.focused.saturating_sub(1));
            Effect::None
        }
        TuiEvent::Down | TuiEvent::ScrollDown => {
            tui.focus(tui.focused + 1);
            Effect::None
        }
        TuiEvent::FocusNext | TuiEvent::FocusPrev => {
            let count = tui.carousels.len();
            if count > 0 {
                tui.focused = if event == TuiEvent::FocusNext {
                    (tui.focused + 1) % count
                } else {
                    (tui.focused + count - 1) % count
                };
            }
            Effect::None
        }
        TuiEvent::Submit => {
            let key = tui.focused_carousel().and_then(|carousel| {
                carousel
                    .items()
                    .get(carousel.current_item())
                    .map(|item| item.content.clone())
            });
            match key {
                Some(key) => open_modal(app, tui, key),
                None => Effect::None,
            }
        }
        TuiEvent::MouseClick(column, row) => match tui.hits.hit_test(column, row) {
            Some(Hit::Control { row, control }) => {
                tui.focus(row);
                if let Some(carousel) = tui.carousels.get_mut(row) {
                    carousel.activate(control);
                }
                Effect::None
            }
            Some(Hit::Item { row, slot }) => {
                tui.focus(row);
                let key = tui
                    .carousels
                    .get(row)
                    .map(|carousel| ModalKey::new(carousel.title(), slot));
                match key {
                    Some(key) => open_modal(app, tui, key),
                    None => Effect::None,
                }
            }
            Some(Hit::Row(row)) => {
                tui.focus(row);
                Effect::None
            }
            None => Effect::None,
        },
        _ => Effect::None,
    }
}

/// Fetch every genre row in the background, one task per row.
pub fn spawn_fetches(
    source: Arc<dyn MovieSource>,
    app: &App,
    tx: mpsc::Sender<Action>,
) -> Vec<tokio::task::JoinHandle<()>> {
    app.rows
        .iter()
        .map(|row| {
            let genre = row.genre.clone();
            let slots = app.slots_per_genre;
            let source = source.clone();
            let tx = tx.clone();
            info!("Spawning fetch for genre '{}'", genre.label);
            tokio::spawn(async move {
                let action = match fetch_genre(source.as_ref(), &genre, slots).await {
                    Ok(movies) => Action::GenreLoaded {
                        genre: genre.label.clone(),
                        movies,
                    },
                    Err(e) => Action::GenreFailed {
                        genre: genre.label.clone(),
                        error: e.to_string(),
                    },
                };
                if tx.send(action).is_err() {
                    warn!(
                        "Failed to deliver genre '{}': receiver dropped",
                        genre.label
                    );
                }
            })
        })
        .collect()
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn MovieSource> = Arc::new(HttpCatalog::new(config.api_url.clone()));
    let mut app = App::from_config(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let size = terminal.size()?;
    let mut tui = TuiState::new(
        &app,
        &config,
        viewport_px(size.width, config.cell_width_px),
    );

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    spawn_fetches(source, &app, tx);

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading() {
            std::time::Duration::from_millis(100)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if dispatch(&mut app, &mut tui, event) == Effect::Quit {
                break;
            }
        }

        // Handle background task actions (genre rows)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            update(&mut app, action);
        }

        if app.should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}
