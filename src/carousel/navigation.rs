//! Prev/next arrows sub-view.

use std::cell::RefCell;
use std::rc::Rc;

use super::hub::{EventHub, Move};
use super::parts::Part;

/// Visibility of the two arrows. Shared with the move observer that updates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationArrows {
    prev_hidden: bool,
    next_hidden: bool,
}

pub type SharedArrows = Rc<RefCell<NavigationArrows>>;

impl NavigationArrows {
    /// Build the arrows and, unless looping, subscribe them to moves.
    /// When looping both arrows stay visible forever.
    pub fn attach(hub: &mut EventHub, looping: bool) -> SharedArrows {
        let arrows = Rc::new(RefCell::new(Self::default()));
        if !looping {
            let view = Rc::clone(&arrows);
            hub.subscribe(Box::new(move |mv| view.borrow_mut().on_move(mv)));
        }
        arrows
    }

    fn on_move(&mut self, mv: &Move) {
        self.prev_hidden = mv.index == 0;
        self.next_hidden = !mv.has_next_window();
    }

    pub fn prev_hidden(&self) -> bool {
        self.prev_hidden
    }

    pub fn next_hidden(&self) -> bool {
        self.next_hidden
    }

    pub fn prev_class(&self) -> String {
        Part::Prev.class_list(self.prev_hidden.then_some("hidden"))
    }

    pub fn next_class(&self) -> String {
        Part::Next.class_list(self.next_hidden.then_some("hidden"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(index: usize) -> Move {
        Move {
            index,
            item_count: 6,
            slides_visible: 3,
        }
    }

    #[test]
    fn test_arrows_follow_position() {
        let mut hub = EventHub::default();
        let arrows = NavigationArrows::attach(&mut hub, false);

        hub.notify(&mv(0));
        assert!(arrows.borrow().prev_hidden());
        assert!(!arrows.borrow().next_hidden());

        hub.notify(&mv(3));
        assert!(!arrows.borrow().prev_hidden());
        assert!(arrows.borrow().next_hidden());
        assert_eq!(arrows.borrow().next_class(), "carousel__next carousel__next--hidden");
        assert_eq!(arrows.borrow().prev_class(), "carousel__prev");
    }

    #[test]
    fn test_looping_arrows_never_hide() {
        let mut hub = EventHub::default();
        let arrows = NavigationArrows::attach(&mut hub, true);
        assert!(hub.is_empty());

        hub.notify(&mv(0));
        assert!(!arrows.borrow().prev_hidden());
        assert!(!arrows.borrow().next_hidden());
    }
}
