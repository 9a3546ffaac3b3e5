//! A headless carousel (swiper) engine.
//!
//! For a ready-made driver (viewport trait, timer queue, controller), see the `swiper-adapter`
//! crate.
//!
//! This crate holds the index/offset state machine behind a paged carousel: it maps committed
//! scroll offsets to a discrete slide index, fakes an infinite loop with two duplicated
//! boundary slides plus a silent re-home jump, and drives autoplay with a self-rescheduling
//! timer.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - a paged scroll viewport (layout size, drag/momentum events, `scroll_to`)
//! - timers (the engine requests them as [`Effect`]s)
//! - rendering of the slides and the pagination
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod event;
mod options;
mod pagination;
mod slides;
mod state;
mod swiper;
mod types;


pub use event::{Effect, Event, ScrollSkip, Timer, TimerKind};
pub use options::{
    ButtonOptions, DEFAULT_AUTOPLAY_TIMEOUT_MS, DEFAULT_LOAD_MINIMAL_SIZE, OnIndexChangedCallback,
    OnScrollCallback, PaginationStyle, ScrollViewOptions, SwiperOptions,
};
pub use pagination::{Dot, Pagination};
pub use slides::{RenderSlot, Slides, effective_loop, render_len, render_slots, should_load};
pub use state::SwiperState;
pub use swiper::{AutoplayPhase, Swiper};
pub use types::{AutoplayDirection, Axis, Offset, Size, round_half_away_from_zero};
