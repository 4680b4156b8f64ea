//! Stable class names for the parts of a carousel a renderer draws.
//!
//! Renderers style parts by these class lists, so the names must not change.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Title,
    Item,
    Next,
    Prev,
    PaginationButton,
}

impl Part {
    pub fn class_name(self) -> &'static str {
        match self {
            Part::Title => "title",
            Part::Item => "carousel__item",
            Part::Next => "carousel__next",
            Part::Prev => "carousel__prev",
            Part::PaginationButton => "carousel__pagination__button",
        }
    }

    /// Class list for a part carrying an optional state modifier,
    /// e.g. `"carousel__next carousel__next--hidden"`.
    pub fn class_list(self, modifier: Option<&str>) -> String {
        match modifier {
            Some(m) => format!("{0} {0}--{1}", self.class_name(), m),
            None => self.class_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_with_modifier() {
        assert_eq!(
            Part::Prev.class_list(Some("hidden")),
            "carousel__prev carousel__prev--hidden"
        );
        assert_eq!(
            Part::PaginationButton.class_list(Some("active")),
            "carousel__pagination__button carousel__pagination__button--active"
        );
        assert_eq!(Part::Title.class_list(None), "title");
    }
}
