//! # Track Layout
//!
//! Percentages describing how the track and its items are sized and shifted.
//!
//! ```text
//!   viewport (100%)
//!   ┌──────────────────────┐
//! ──┼─────┬─────┬─────┬────┼┬─────┬─────┐
//!   │  0  │  1  │  2  │  3 ││  4  │  5  │   track = N / visible * 100%
//! ──┼─────┴─────┴─────┴────┼┴─────┴─────┘
//!   └──────────────────────┘
//!     ◀── translate_x = index * -100 / N (% of track)
//! ```
//!
//! Every item is `100 / N` percent of the track, so exactly `visible` items
//! span the viewport whatever N is.

/// Sizing of the track, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackLayout {
    /// Track width as a percentage of the viewport.
    pub track_width: f64,
    /// Width of every item as a percentage of the track.
    pub item_width: f64,
    /// Horizontal offset of the track as a percentage of its own width.
    pub translate_x: f64,
}

impl TrackLayout {
    /// Recompute the widths for `item_count` items with `slides_visible` in view.
    ///
    /// Returns `false` and leaves the layout untouched when there are no items.
    pub fn apply(&mut self, item_count: usize, slides_visible: usize) -> bool {
        if item_count == 0 || slides_visible == 0 {
            return false;
        }
        let ratio = item_count as f64 / slides_visible as f64;
        self.track_width = ratio * 100.0;
        self.item_width = (100.0 / slides_visible as f64) / ratio;
        true
    }

    /// Shift the track so that `index` is the first item in view.
    pub fn translate_to(&mut self, index: usize, item_count: usize) {
        if item_count == 0 {
            return;
        }
        self.translate_x = index as f64 * -100.0 / item_count as f64;
    }

    /// Resolve the percentages against a concrete viewport width (in cells).
    pub fn resolve(&self, viewport: u16) -> ResolvedTrack {
        let track = viewport as f64 * self.track_width / 100.0;
        ResolvedTrack {
            viewport,
            item_width: track * self.item_width / 100.0,
            offset: track * self.translate_x / 100.0,
        }
    }
}

/// Track geometry in cells for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTrack {
    viewport: u16,
    item_width: f64,
    offset: f64,
}

impl ResolvedTrack {
    /// Column span `(x, width)` of item `index` relative to the viewport,
    /// or `None` when the item is not entirely inside it.
    pub fn item_span(&self, index: usize) -> Option<(u16, u16)> {
        if self.item_width <= 0.0 {
            return None;
        }
        let start = (self.offset + index as f64 * self.item_width).round();
        let end = (self.offset + (index + 1) as f64 * self.item_width).round();
        if start < 0.0 || end > self.viewport as f64 || end <= start {
            return None;
        }
        Some((start as u16, (end - start) as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_scales_with_item_count() {
        let mut layout = TrackLayout::default();
        assert!(layout.apply(10, 4));
        assert_eq!(layout.track_width, 250.0);
        assert_eq!(layout.item_width, 10.0);
    }

    #[test]
    fn test_visible_items_fill_viewport() {
        let mut layout = TrackLayout::default();
        layout.apply(7, 4);
        let per_item = layout.track_width * layout.item_width / 100.0;
        assert!((per_item * 4.0 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_layout_is_noop() {
        let mut layout = TrackLayout::default();
        assert!(!layout.apply(0, 4));
        assert_eq!(layout, TrackLayout::default());
        layout.translate_to(3, 0);
        assert_eq!(layout.translate_x, 0.0);
    }

    #[test]
    fn test_translate_is_fraction_of_track() {
        let mut layout = TrackLayout::default();
        layout.apply(10, 4);
        layout.translate_to(5, 10);
        assert_eq!(layout.translate_x, -50.0);
    }

    #[test]
    fn test_resolved_spans_cover_window() {
        let mut layout = TrackLayout::default();
        layout.apply(8, 4);
        layout.translate_to(2, 8);
        let track = layout.resolve(80);

        assert_eq!(track.item_span(1), None);
        assert_eq!(track.item_span(2), Some((0, 20)));
        assert_eq!(track.item_span(5), Some((60, 20)));
        assert_eq!(track.item_span(6), None);
    }

    #[test]
    fn test_resolved_spans_with_uneven_width() {
        let mut layout = TrackLayout::default();
        layout.apply(7, 3);
        let track = layout.resolve(50);
        let spans: Vec<_> = (0..7).filter_map(|i| track.item_span(i)).collect();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].0, 0);
        let last = spans[2];
        assert_eq!(last.0 + last.1, 50);
    }
}
