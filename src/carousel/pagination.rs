//! Pagination dots sub-view.
//!
//! One dot per page start `0, step, 2 * step, ...` below the item count. The
//! step is the *configured* `slides_to_scroll`, fixed at construction, so the
//! dot set does not change when the carousel switches to mobile.

use std::cell::RefCell;
use std::rc::Rc;

use super::hub::{EventHub, Move};
use super::parts::Part;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationDots {
    pages: Vec<usize>,
    step: usize,
    active: Option<usize>,
}

pub type SharedDots = Rc<RefCell<PaginationDots>>;

impl PaginationDots {
    pub fn new(item_count: usize, step: usize) -> Self {
        let step = step.max(1);
        Self {
            pages: (0..item_count).step_by(step).collect(),
            step,
            active: None,
        }
    }

    /// Build the dots and subscribe them to moves.
    pub fn attach(hub: &mut EventHub, item_count: usize, step: usize) -> SharedDots {
        let dots = Rc::new(RefCell::new(Self::new(item_count, step)));
        let view = Rc::clone(&dots);
        hub.subscribe(Box::new(move |mv| view.borrow_mut().on_move(mv)));
        dots
    }

    fn on_move(&mut self, mv: &Move) {
        let page = mv.index / self.step;
        // No dot for this index: leave the current marks alone.
        if page < self.pages.len() {
            self.active = Some(page);
        }
    }

    /// Start index of every page, in order.
    pub fn pages(&self) -> &[usize] {
        &self.pages
    }

    pub fn page_start(&self, page: usize) -> Option<usize> {
        self.pages.get(page).copied()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, page: usize) -> bool {
        self.active == Some(page)
    }

    pub fn button_class(&self, page: usize) -> String {
        Part::PaginationButton.class_list(self.is_active(page).then_some("active"))
    }
}
