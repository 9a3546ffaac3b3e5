use alloc::vec::Vec;

use swiper::Offset;

use crate::{Easing, Tween};

/// The host platform, as far as scroll completion events are concerned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    /// Reports the end of animated programmatic scrolls like a user fling.
    Ios,
    #[default]
    Android,
    Web,
}

impl Platform {
    pub fn emits_programmatic_scroll_end(self) -> bool {
        matches!(self, Self::Ios)
    }
}

/// The host scroll container a [`crate::Controller`] drives.
///
/// Implementations wrap whatever the UI toolkit provides. Drag and momentum events flow the other
/// way: the host forwards them to the controller's `on_*` methods.
pub trait Viewport {
    /// Moves the content to `offset`, animated or immediately.
    fn scroll_to(&mut self, offset: Offset, animated: bool, now_ms: u64);

    /// Whether an animated `scroll_to` is followed by a momentum-end event from the host.
    ///
    /// When this is `false`, the engine synthesizes the event itself.
    fn emits_programmatic_scroll_end(&self) -> bool {
        false
    }

    /// Reports a settled offset, for viewports that animate inside the adapter's frame loop.
    ///
    /// Called from `Controller::tick`. Returning `Some(offset)` is treated as a momentum end.
    fn poll(&mut self, _now_ms: u64) -> Option<Offset> {
        None
    }
}

/// An in-memory viewport that animates with a [`Tween`].
///
/// Useful for tests, demos and headless runs. It records every `scroll_to` it receives, and on
/// [`Platform::Ios`] reports completion of animated scrolls through `poll`.
#[derive(Clone, Debug)]
pub struct SimulatedViewport {
    platform: Platform,
    offset: Offset,
    tween: Option<Tween>,
    duration_ms: u64,
    easing: Easing,
    history: Vec<(Offset, bool)>,
}

impl SimulatedViewport {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            offset: Offset::ZERO,
            tween: None,
            duration_ms: 300,
            easing: Easing::default(),
            history: Vec::new(),
        }
    }

    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The currently displayed offset (mid-animation values included).
    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Every `scroll_to` received so far, as `(offset, animated)`.
    pub fn history(&self) -> &[(Offset, bool)] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Moves the content as a user drag would. Cancels any running animation.
    pub fn drag_to(&mut self, offset: Offset) {
        self.tween = None;
        self.offset = offset;
    }
}

impl Viewport for SimulatedViewport {
    fn scroll_to(&mut self, offset: Offset, animated: bool, now_ms: u64) {
        self.history.push((offset, animated));
        if animated {
            self.tween = Some(Tween::new(
                self.offset,
                offset,
                now_ms,
                self.duration_ms,
                self.easing,
            ));
        } else {
            self.tween = None;
            self.offset = offset;
        }
    }

    fn emits_programmatic_scroll_end(&self) -> bool {
        self.platform.emits_programmatic_scroll_end()
    }

    fn poll(&mut self, now_ms: u64) -> Option<Offset> {
        let tween = self.tween?;
        self.offset = tween.sample(now_ms);
        if !tween.is_done(now_ms) {
            return None;
        }
        self.tween = None;
        self.emits_programmatic_scroll_end().then_some(self.offset)
    }
}
