//! Carousel configuration: defaults, sparse overrides, and clamping.

use serde::{Deserialize, Serialize};

/// Resolved carousel options. Always valid once produced by [`CarouselOptions::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    /// Items moved per `next()`/`prev()` on desktop.
    pub slides_to_scroll: usize,
    /// Items shown side by side on desktop.
    pub slides_visible: usize,
    /// Wrap past the first/last window instead of stopping.
    pub looping: bool,
    /// Attach the pagination dots sub-view.
    pub pagination: bool,
    /// Attach the prev/next arrows sub-view.
    pub navigation: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            slides_to_scroll: 1,
            slides_visible: 1,
            looping: false,
            pagination: false,
            navigation: true,
        }
    }
}

impl CarouselOptions {
    /// Forces both counts to at least 1.
    pub fn clamped(self) -> Self {
        Self {
            slides_to_scroll: self.slides_to_scroll.max(1),
            slides_visible: self.slides_visible.max(1),
            ..self
        }
    }

    /// Defaults with the given overrides applied on top.
    pub fn from_overrides(overrides: &CarouselOverrides) -> Self {
        overrides.apply_to(Self::default())
    }
}

/// Sparse, caller-supplied options. Anything left `None` falls back to the base.
///
/// Deserializes from the `[carousel]` table of the config file; unknown keys
/// are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CarouselOverrides {
    pub slides_to_scroll: Option<usize>,
    pub slides_visible: Option<usize>,
    #[serde(rename = "loop")]
    pub looping: Option<bool>,
    pub pagination: Option<bool>,
    pub navigation: Option<bool>,
}

impl CarouselOverrides {
    /// Merge onto `base`, then clamp.
    pub fn apply_to(&self, base: CarouselOptions) -> CarouselOptions {
        CarouselOptions {
            slides_to_scroll: self.slides_to_scroll.unwrap_or(base.slides_to_scroll),
            slides_visible: self.slides_visible.unwrap_or(base.slides_visible),
            looping: self.looping.unwrap_or(base.looping),
            pagination: self.pagination.unwrap_or(base.pagination),
            navigation: self.navigation.unwrap_or(base.navigation),
        }
        .clamped()
    }
}
