use alloc::string::String;
use alloc::sync::Arc;

use crate::{AutoplayDirection, Axis, Size, SwiperState};

/// A callback fired with the new index whenever the discrete index changes.
///
/// This tracks the data model, not visual completion: the viewport may still be settling.
pub type OnIndexChangedCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// A callback that receives a snapshot of the engine state (drag begin, momentum end).
pub type OnScrollCallback = Arc<dyn Fn(&SwiperState) + Send + Sync>;

pub const DEFAULT_AUTOPLAY_TIMEOUT_MS: u64 = 2_500;
pub const DEFAULT_LOAD_MINIMAL_SIZE: usize = 1;

/// Options forwarded untouched to the host scroll container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollViewOptions {
    pub shows_horizontal_scroll_indicator: bool,
    pub shows_vertical_scroll_indicator: bool,
    /// Must stay `false` for non-looping swipers: the engine relies on the viewport refusing to
    /// scroll past either end.
    pub bounces: bool,
    pub scrolls_to_top: bool,
    pub remove_clipped_subviews: bool,
    pub automatically_adjust_content_insets: bool,
    pub scroll_enabled: bool,
}

impl Default for ScrollViewOptions {
    fn default() -> Self {
        Self {
            shows_horizontal_scroll_indicator: false,
            shows_vertical_scroll_indicator: false,
            bounces: false,
            scrolls_to_top: false,
            remove_clipped_subviews: true,
            automatically_adjust_content_insets: false,
            scroll_enabled: true,
        }
    }
}

/// Colors for the default dot indicator. `None` keeps the renderer's built-in color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginationStyle {
    pub dot_color: Option<String>,
    pub active_dot_color: Option<String>,
}

/// Prev/next control button configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonOptions {
    /// Makes the "previous" button ignore presses.
    pub disable_prev_button: bool,
}

/// Configuration for [`crate::Swiper`].
///
/// Callbacks are stored in `Arc`s so a host can clone the options on every render, change a few
/// fields, and hand them back via `Swiper::set_options`.
pub struct SwiperOptions {
    /// Lays slides out in a row (`true`) or a column (`false`).
    pub horizontal: bool,
    /// Wraps around at both ends. Ignored (forced off) with fewer than two slides.
    pub loop_enabled: bool,
    pub autoplay: bool,
    /// Delay between autoplay transitions.
    pub autoplay_timeout_ms: u64,
    pub autoplay_direction: AutoplayDirection,
    /// Snap to whole slides. Index math assumes the viewport pages.
    pub paging_enabled: bool,
    /// Index of the initially visible slide.
    pub index: usize,
    /// Explicit viewport width. Falls back to the host window width.
    pub width: Option<f64>,
    /// Explicit viewport height. Falls back to the host window height.
    pub height: Option<f64>,

    pub shows_pagination: bool,
    pub pagination_style: PaginationStyle,
    pub shows_buttons: bool,
    pub buttons: ButtonOptions,

    /// Only mount the slides within `load_minimal_size` of the current one.
    pub load_minimal: bool,
    pub load_minimal_size: usize,

    pub scroll_view: ScrollViewOptions,

    pub on_index_changed: Option<OnIndexChangedCallback>,
    pub on_scroll_begin_drag: Option<OnScrollCallback>,
    pub on_momentum_scroll_end: Option<OnScrollCallback>,
}

impl Default for SwiperOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SwiperOptions {
    fn clone(&self) -> Self {
        Self {
            horizontal: self.horizontal,
            loop_enabled: self.loop_enabled,
            autoplay: self.autoplay,
            autoplay_timeout_ms: self.autoplay_timeout_ms,
            autoplay_direction: self.autoplay_direction,
            paging_enabled: self.paging_enabled,
            index: self.index,
            width: self.width,
            height: self.height,
            shows_pagination: self.shows_pagination,
            pagination_style: self.pagination_style.clone(),
            shows_buttons: self.shows_buttons,
            buttons: self.buttons,
            load_minimal: self.load_minimal,
            load_minimal_size: self.load_minimal_size,
            scroll_view: self.scroll_view,
            on_index_changed: self.on_index_changed.clone(),
            on_scroll_begin_drag: self.on_scroll_begin_drag.clone(),
            on_momentum_scroll_end: self.on_momentum_scroll_end.clone(),
        }
    }
}

impl SwiperOptions {
    /// Creates options with the stock defaults: horizontal, looping, autoplaying forward every
    /// 2.5s, paged, with pagination dots.
    pub fn new() -> Self {
        Self {
            horizontal: true,
            loop_enabled: true,
            autoplay: true,
            autoplay_timeout_ms: DEFAULT_AUTOPLAY_TIMEOUT_MS,
            autoplay_direction: AutoplayDirection::Forward,
            paging_enabled: true,
            index: 0,
            width: None,
            height: None,
            shows_pagination: true,
            pagination_style: PaginationStyle::default(),
            shows_buttons: false,
            buttons: ButtonOptions::default(),
            load_minimal: false,
            load_minimal_size: DEFAULT_LOAD_MINIMAL_SIZE,
            scroll_view: ScrollViewOptions::default(),
            on_index_changed: None,
            on_scroll_begin_drag: None,
            on_momentum_scroll_end: None,
        }
    }

    pub fn axis(&self) -> Axis {
        Axis::from_horizontal(self.horizontal)
    }

    /// Resolves the viewport size from the explicit hints, falling back to `window`.
    ///
    /// Non-positive hints count as unset.
    pub fn resolve_size(&self, window: Size) -> Size {
        Size {
            width: self.width.filter(|w| *w > 0.0).unwrap_or(window.width),
            height: self.height.filter(|h| *h > 0.0).unwrap_or(window.height),
        }
    }

    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn with_loop(mut self, loop_enabled: bool) -> Self {
        self.loop_enabled = loop_enabled;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_autoplay_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.autoplay_timeout_ms = timeout_ms;
        self
    }

    pub fn with_autoplay_direction(mut self, direction: AutoplayDirection) -> Self {
        self.autoplay_direction = direction;
        self
    }

    pub fn with_paging_enabled(mut self, paging_enabled: bool) -> Self {
        self.paging_enabled = paging_enabled;
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn with_size(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_shows_pagination(mut self, shows_pagination: bool) -> Self {
        self.shows_pagination = shows_pagination;
        self
    }

    pub fn with_pagination_style(mut self, style: PaginationStyle) -> Self {
        self.pagination_style = style;
        self
    }

    pub fn with_shows_buttons(mut self, shows_buttons: bool) -> Self {
        self.shows_buttons = shows_buttons;
        self
    }

    pub fn with_buttons(mut self, buttons: ButtonOptions) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_load_minimal(mut self, load_minimal: bool, load_minimal_size: usize) -> Self {
        self.load_minimal = load_minimal;
        self.load_minimal_size = load_minimal_size;
        self
    }

    pub fn with_scroll_view(mut self, scroll_view: ScrollViewOptions) -> Self {
        self.scroll_view = scroll_view;
        self
    }

    pub fn with_on_index_changed(
        mut self,
        on_index_changed: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_index_changed = on_index_changed.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll_begin_drag(
        mut self,
        f: Option<impl Fn(&SwiperState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll_begin_drag = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_momentum_scroll_end(
        mut self,
        f: Option<impl Fn(&SwiperState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_momentum_scroll_end = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for SwiperOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwiperOptions")
            .field("horizontal", &self.horizontal)
            .field("loop_enabled", &self.loop_enabled)
            .field("autoplay", &self.autoplay)
            .field("autoplay_timeout_ms", &self.autoplay_timeout_ms)
            .field("autoplay_direction", &self.autoplay_direction)
            .field("paging_enabled", &self.paging_enabled)
            .field("index", &self.index)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("shows_pagination", &self.shows_pagination)
            .field("shows_buttons", &self.shows_buttons)
            .field("load_minimal", &self.load_minimal)
            .field("load_minimal_size", &self.load_minimal_size)
            .field("scroll_view", &self.scroll_view)
            .finish_non_exhaustive()
    }
}
