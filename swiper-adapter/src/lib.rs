//! Adapter utilities for the `swiper` crate.
//!
//! The `swiper` crate is UI-agnostic: it consumes events and queues effects. This crate provides
//! the small, framework-neutral pieces an adapter needs to run it:
//!
//! - A [`Viewport`] trait for the host scroll container
//! - A cancellable [`TimerQueue`] driven by the adapter's own clock
//! - A [`Controller`] that wires engine, viewport and timers together
//! - A tween-driven [`SimulatedViewport`] for tests and headless runs
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod timers;
mod tween;
mod viewport;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use timers::TimerQueue;
pub use tween::{Easing, Tween};
pub use viewport::{Platform, SimulatedViewport, Viewport};
