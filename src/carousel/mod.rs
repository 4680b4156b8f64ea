//! # Carousel
//!
//! A paginated, looping-or-saturating slide viewer over an ordered set of items.
//! It knows nothing about movies or terminals: a renderer reads its position,
//! [`TrackLayout`] and sub-views, and forwards user input back to it.
//!
//! ```text
//! Carousel
//! ├── items: Vec<Item<T>>        // fixed at construction
//! ├── current_item: usize        // first item in view
//! ├── is_mobile: bool            // last viewport width < breakpoint
//! ├── options: CarouselOptions   // clamped at construction
//! ├── layout: TrackLayout        // track/item widths, translation
//! ├── hub: EventHub              // move observers
//! ├── navigation: Option<SharedArrows>
//! └── pagination: Option<SharedDots>
//! ```
//!
//! Every position change goes through [`Carousel::goto_item`]. Invalid moves are
//! rejected silently: state is kept and no observer runs.
//!
//! Carousels are single-threaded (`!Send`): sub-views share state with their
//! observers through `Rc<RefCell<_>>`, and all mutation happens on the thread
//! running the UI event loop.

pub mod hub;
pub mod layout;
pub mod navigation;
pub mod options;
pub mod pagination;
pub mod parts;

use std::cell::Ref;
use std::ops::Range;

use log::debug;

pub use hub::{EventHub, Move, MoveCallback, ObserverHandle};
pub use layout::{ResolvedTrack, TrackLayout};
pub use navigation::{NavigationArrows, SharedArrows};
pub use options::{CarouselOptions, CarouselOverrides};
pub use pagination::{PaginationDots, SharedDots};
pub use parts::Part;

/// Viewports narrower than this (in pixels) use the mobile policy.
pub const MOBILE_BREAKPOINT_PX: u32 = 800;

/// What a carousel is built from: a titled, ordered list of children.
#[derive(Debug, Clone, PartialEq)]
pub struct Container<T> {
    pub title: String,
    pub children: Vec<T>,
}

impl<T> Container<T> {
    pub fn new(title: impl Into<String>, children: Vec<T>) -> Self {
        Self {
            title: title.into(),
            children,
        }
    }
}

/// A child wrapped as a carousel item.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<T> {
    pub content: T,
}

impl<T> Item<T> {
    /// `active` marks the item the user has selected.
    pub fn class_list(&self, active: bool) -> String {
        Part::Item.class_list(active.then_some("active"))
    }
}

/// A clickable control inside the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    Next,
    /// Pagination dot by page number (not item index).
    Page(usize),
}

pub struct Carousel<T> {
    title: String,
    items: Vec<Item<T>>,
    current_item: usize,
    is_mobile: bool,
    options: CarouselOptions,
    mobile_breakpoint: u32,
    layout: TrackLayout,
    hub: EventHub,
    navigation: Option<SharedArrows>,
    pagination: Option<SharedDots>,
}

impl<T> std::fmt::Debug for Carousel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("title", &self.title)
            .field("items", &self.items.len())
            .field("current_item", &self.current_item)
            .field("is_mobile", &self.is_mobile)
            .field("options", &self.options)
            .field("layout", &self.layout)
            .finish()
    }
}

/// Builder for [`Carousel`]. Observers added here are registered after the
/// sub-views and therefore receive the initial notification for index 0.
pub struct CarouselBuilder<T> {
    container: Container<T>,
    options: CarouselOptions,
    mobile_breakpoint: u32,
    observers: Vec<MoveCallback>,
    viewport_width: Option<u32>,
}

impl<T> CarouselBuilder<T> {
    pub fn options(mut self, options: CarouselOptions) -> Self {
        self.options = options;
        self
    }

    pub fn mobile_breakpoint(mut self, px: u32) -> Self {
        self.mobile_breakpoint = px;
        self
    }

    pub fn on_move(mut self, callback: MoveCallback) -> Self {
        self.observers.push(callback);
        self
    }

    /// Run the resize handler once with this width right after construction.
    pub fn viewport_width(mut self, px: u32) -> Self {
        self.viewport_width = Some(px);
        self
    }

    pub fn build(self) -> Carousel<T> {
        let options = self.options.clamped();
        let Container { title, children } = self.container;
        let items: Vec<Item<T>> = children
            .into_iter()
            .map(|content| Item { content })
            .collect();

        let mut carousel = Carousel {
            title,
            items,
            current_item: 0,
            is_mobile: false,
            options,
            mobile_breakpoint: self.mobile_breakpoint,
            layout: TrackLayout::default(),
            hub: EventHub::default(),
            navigation: None,
            pagination: None,
        };
        carousel.apply_layout();

        if options.navigation {
            carousel.navigation = Some(NavigationArrows::attach(
                &mut carousel.hub,
                options.looping,
            ));
        }
        if options.pagination {
            carousel.pagination = Some(PaginationDots::attach(
                &mut carousel.hub,
                carousel.items.len(),
                options.slides_to_scroll,
            ));
        }
        for callback in self.observers {
            carousel.hub.subscribe(callback);
        }

        debug!(
            "Carousel '{}' built: {} items, {:?}",
            carousel.title,
            carousel.items.len(),
            options
        );
        carousel.announce();

        if let Some(px) = self.viewport_width {
            carousel.on_viewport_resize(px);
        }
        carousel
    }
}

impl<T> Carousel<T> {
    pub fn builder(container: Container<T>) -> CarouselBuilder<T> {
        CarouselBuilder {
            container,
            options: CarouselOptions::default(),
            mobile_breakpoint: MOBILE_BREAKPOINT_PX,
            observers: Vec::new(),
            viewport_width: None,
        }
    }

    pub fn new(container: Container<T>, options: CarouselOptions) -> Self {
        Self::builder(container).options(options).build()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_item(&self) -> usize {
        self.current_item
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    pub fn navigation(&self) -> Option<Ref<'_, NavigationArrows>> {
        self.navigation.as_ref().map(|n| n.borrow())
    }

    pub fn pagination(&self) -> Option<Ref<'_, PaginationDots>> {
        self.pagination.as_ref().map(|p| p.borrow())
    }

    /// Items moved per step: 1 on mobile, the configured value otherwise.
    pub fn slides_to_scroll(&self) -> usize {
        if self.is_mobile {
            1
        } else {
            self.options.slides_to_scroll
        }
    }

    /// Items in view: 1 on mobile, the configured value otherwise.
    pub fn slides_visible(&self) -> usize {
        if self.is_mobile {
            1
        } else {
            self.options.slides_visible
        }
    }

    /// Indices of the items currently in view.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.current_item + self.slides_visible()).min(self.items.len());
        self.current_item.min(end)..end
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    pub fn on_move(&mut self, callback: MoveCallback) -> ObserverHandle {
        self.hub.subscribe(callback)
    }

    pub fn remove_observer(&mut self, handle: ObserverHandle) -> bool {
        self.hub.unsubscribe(handle)
    }

    fn announce(&mut self) {
        let event = Move {
            index: self.current_item,
            item_count: self.items.len(),
            slides_visible: self.slides_visible(),
        };
        self.hub.notify(&event);
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    fn apply_layout(&mut self) {
        let visible = self.slides_visible();
        self.layout.apply(self.items.len(), visible);
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn next(&mut self) -> bool {
        let target = self.current_item as isize + self.slides_to_scroll() as isize;
        self.goto_item(target)
    }

    pub fn prev(&mut self) -> bool {
        let target = self.current_item as isize - self.slides_to_scroll() as isize;
        self.goto_item(target)
    }

    /// Move to `target`, wrapping or rejecting out-of-range requests.
    ///
    /// Returns `true` if the move was committed (and observers notified).
    pub fn goto_item(&mut self, target: isize) -> bool {
        let len = self.items.len();
        if len == 0 {
            return false;
        }
        let visible = self.slides_visible();

        let index = if target < 0 {
            if !self.options.looping {
                debug!("Carousel '{}': rejected move to {}", self.title, target);
                return false;
            }
            len.saturating_sub(visible)
        } else {
            let target = target as usize;
            let window_exhausted = self.current_item + visible >= len;
            if target >= len || (window_exhausted && target > self.current_item) {
                if !self.options.looping {
                    debug!("Carousel '{}': rejected move to {}", self.title, target);
                    return false;
                }
                0
            } else {
                target
            }
        };

        self.layout.translate_to(index, len);
        self.current_item = index;
        debug!(
            "Carousel '{}': moved to {} (translate {:.2}%)",
            self.title, index, self.layout.translate_x
        );
        self.announce();
        true
    }

    /// Route a click on one of the carousel's controls.
    pub fn activate(&mut self, control: Control) -> bool {
        match control {
            Control::Prev => self.prev(),
            Control::Next => self.next(),
            Control::Page(page) => {
                let start = self.pagination().and_then(|dots| dots.page_start(page));
                match start {
                    Some(start) => self.goto_item(start as isize),
                    None => false,
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Responsive
    // ------------------------------------------------------------------

    /// Feed the current viewport width in pixels.
    ///
    /// Returns `true` if the mobile/desktop classification flipped, in which
    /// case the layout was recomputed and observers were re-notified with the
    /// unchanged index.
    pub fn on_viewport_resize(&mut self, width_px: u32) -> bool {
        let mobile = width_px < self.mobile_breakpoint;
        if mobile == self.is_mobile {
            return false;
        }
        debug!(
            "Carousel '{}': viewport {}px, mobile={}",
            self.title, width_px, mobile
        );
        self.is_mobile = mobile;
        self.apply_layout();
        self.announce();
        true
    }
}
