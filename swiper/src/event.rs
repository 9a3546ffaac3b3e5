use crate::{Offset, Size};

/// Identifies a timer slot. At most one timer per kind is pending at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerKind {
    Autoplay,
    LoopJump,
    ScrollEnd,
}

impl TimerKind {
    pub const ALL: [TimerKind; 3] = [Self::Autoplay, Self::LoopJump, Self::ScrollEnd];
}

/// A deferred callback requested by the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timer {
    /// Advance one slide in the autoplay direction.
    Autoplay,
    /// Silently re-home the offset after a loop wrap.
    LoopJump,
    /// Stand-in for a completion event the viewport will not emit.
    ScrollEnd { offset: Offset },
}

impl Timer {
    pub fn kind(&self) -> TimerKind {
        match self {
            Self::Autoplay => TimerKind::Autoplay,
            Self::LoopJump => TimerKind::LoopJump,
            Self::ScrollEnd { .. } => TimerKind::ScrollEnd,
        }
    }
}

/// Input to [`crate::Swiper::handle`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// The viewport handle became available.
    ///
    /// `emits_scroll_end` tells whether the viewport reports completion of animated
    /// programmatic scrolls on its own.
    Mount { emits_scroll_end: bool },
    /// The viewport handle went away. Cancels every pending timer.
    Unmount,
    /// The container was measured (first layout or resize).
    Layout(Size),
    ScrollBeginDrag,
    ScrollEndDrag(Offset),
    /// The viewport settled (momentum or programmatic animation finished).
    MomentumScrollEnd(Offset),
    /// A previously scheduled timer fired.
    Timer(Timer),
}

/// Output of the engine, to be executed by the adapter in order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Move the viewport.
    ScrollTo { offset: Offset, animated: bool },
    /// Arm `timer` to fire after `delay_ms`, replacing any pending timer of the same kind.
    Schedule { timer: Timer, delay_ms: u64 },
    Cancel(TimerKind),
}

/// Why an imperative scroll request was not issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollSkip {
    /// Another scroll (drag, momentum or programmatic) is still in flight.
    Scrolling,
    /// Fewer than two slides; there is nowhere to scroll.
    NotEnoughSlides,
    /// The viewport is not mounted.
    Detached,
    /// A non-looping swiper is already at the first or last slide in that direction.
    AtEdge,
    /// The control that requested the scroll is disabled.
    Disabled,
}

impl core::fmt::Display for ScrollSkip {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Scrolling => f.write_str("a scroll is already in progress"),
            Self::NotEnoughSlides => f.write_str("fewer than two slides"),
            Self::Detached => f.write_str("viewport is not mounted"),
            Self::AtEdge => f.write_str("already at the edge"),
            Self::Disabled => f.write_str("control is disabled"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScrollSkip {}
