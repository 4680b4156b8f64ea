//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top status bar showing the API endpoint and load status
//!
//! ### Stateful Components
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it for
//! one frame:
//! - `CarouselRow`: one genre carousel, records click areas into `RowHits`
//! - `MovieModal`: detail overlay, state is `MovieModalState` (scroll offset)
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── carousel_row.rs  (Genre carousel)
//! └── movie_modal.rs   (Detail overlay)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod carousel_row;
pub use carousel_row::{CarouselRow, ROW_HEIGHT, RowHits};
pub mod movie_modal;
pub use movie_modal::{ModalEvent, MovieModal, MovieModalState};
