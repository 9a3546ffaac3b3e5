use alloc::vec::Vec;

use crate::slides::{effective_loop, render_slots, should_load};
use crate::types::round_half_away_from_zero;
use crate::{
    Axis, Effect, Event, Offset, Pagination, RenderSlot, ScrollSkip, Size, SwiperOptions,
    SwiperState, Timer, TimerKind,
};

/// Where the autoplay scheduler currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoplayPhase {
    Idle,
    Scheduled,
    /// A non-looping run reached its terminal slide. Resumes on the next index change.
    Ended,
}

/// A headless swiper engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold the viewport. Your adapter feeds it [`Event`]s and executes the
///   [`Effect`]s it queues (see [`Swiper::drain_effects`]).
/// - Timers are requested, not owned: the adapter arms/cancels them and reports firings back as
///   `Event::Timer`.
///
/// The discrete `index` is the logical slide (`0..total`). When looping, the render sequence is
/// `[last, 0, 1, .., last, 0]` and the slide `i` lives at render position `i + 1`.
///
/// For a ready-made driver with a timer queue, see the `swiper-adapter` crate.
#[derive(Clone, Debug)]
pub struct Swiper {
    options: SwiperOptions,
    total: usize,
    window: Size,
    size: Size,

    index: usize,
    offset: Offset, // last committed offset
    loop_jump: bool,
    is_scrolling: bool,
    autoplay_end: bool,
    autoplay_pending: bool,

    attached: bool,
    emits_scroll_end: bool,
    initial_render: bool,

    effects: Vec<Effect>,
}

impl Swiper {
    /// Creates an engine over `total` slides.
    ///
    /// `window` is the host window size, used for any dimension `options` leave unset. The
    /// initial index is clamped into range.
    pub fn new(options: SwiperOptions, total: usize, window: Size) -> Self {
        let size = options.resolve_size(window);
        let index = options.index.min(total.saturating_sub(1));
        sdebug!(
            total,
            index,
            loop_enabled = options.loop_enabled,
            autoplay = options.autoplay,
            "Swiper::new"
        );
        let mut s = Self {
            options,
            total,
            window,
            size,
            index,
            offset: Offset::ZERO,
            loop_jump: false,
            is_scrolling: false,
            autoplay_end: false,
            autoplay_pending: false,
            attached: false,
            emits_scroll_end: false,
            initial_render: true,
            effects: Vec::new(),
        };
        s.offset = s.home_offset();
        s
    }

    pub fn options(&self) -> &SwiperOptions {
        &self.options
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn axis(&self) -> Axis {
        self.options.axis()
    }

    /// The offset distance of one slide along the active axis.
    pub fn step_size(&self) -> f64 {
        self.size.step(self.axis())
    }

    /// Whether the swiper loops. Always `false` with fewer than two slides.
    pub fn is_loop(&self) -> bool {
        effective_loop(self.options.loop_enabled, self.total)
    }

    /// The last committed scroll offset.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn loop_jump(&self) -> bool {
        self.loop_jump
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn autoplay_end(&self) -> bool {
        self.autoplay_end
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn autoplay_phase(&self) -> AutoplayPhase {
        if self.autoplay_end {
            AutoplayPhase::Ended
        } else if self.autoplay_pending {
            AutoplayPhase::Scheduled
        } else {
            AutoplayPhase::Idle
        }
    }

    pub fn state(&self) -> SwiperState {
        SwiperState {
            index: self.index,
            total: self.total,
            size: self.size,
            offset: self.offset,
            axis: self.axis(),
            loop_jump: self.loop_jump,
            is_scrolling: self.is_scrolling,
            autoplay_end: self.autoplay_end,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.index, self.total, self.options.shows_pagination)
    }

    /// Iterates the render sequence, including the boundary copies when looping.
    pub fn render_slots(&self) -> impl Iterator<Item = RenderSlot> + use<> {
        render_slots(self.total, self.options.loop_enabled)
    }

    /// Whether the slot at `render_index` should mount its content.
    ///
    /// Always `true` unless `load_minimal` is set.
    pub fn should_load(&self, render_index: usize) -> bool {
        if !self.options.load_minimal {
            return true;
        }
        should_load(
            render_index,
            self.index,
            self.total,
            self.options.loop_enabled,
            self.options.load_minimal_size,
        )
    }

    /// The scroll position (active axis) at which logical slide `index` is shown.
    ///
    /// `index` may be one step out of range: `-1` and `total` map to the boundary copies when
    /// looping. Loop wraps and re-home jumps both go through this, so they always agree.
    pub fn render_offset(&self, index: isize) -> f64 {
        let weight = if self.is_loop() { index + 1 } else { index };
        self.step_size() * weight as f64
    }

    /// The offset showing the current slide at its real (non-duplicate) render position.
    pub fn home_offset(&self) -> Offset {
        self.axis().offset(self.render_offset(self.index as isize))
    }

    /// Takes the effects queued since the last drain, in emission order.
    pub fn drain_effects(&mut self) -> alloc::vec::Drain<'_, Effect> {
        self.effects.drain(..)
    }

    pub fn has_pending_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Replaces the options (typically on every host render).
    ///
    /// The initial `index` is only honoured by `new`. A changed size hint overrides only its own
    /// dimension, keeping the measured layout for the other. Toggling looping, the axis or the
    /// step size re-homes the viewport; changing autoplay settings re-evaluates (or cancels) the
    /// autoplay timer.
    pub fn set_options(&mut self, options: SwiperOptions) {
        let was_loop = self.is_loop();
        let prev_axis = self.axis();
        let prev_step = self.step_size();
        let autoplay_changed = self.options.autoplay != options.autoplay
            || self.options.autoplay_timeout_ms != options.autoplay_timeout_ms
            || self.options.autoplay_direction != options.autoplay_direction
            || self.options.loop_enabled != options.loop_enabled;
        let width_changed = self.options.width != options.width;
        let height_changed = self.options.height != options.height;
        self.options = options;
        strace!(
            loop_enabled = self.options.loop_enabled,
            autoplay = self.options.autoplay,
            "Swiper::set_options"
        );

        let hinted = self.options.resolve_size(self.window);
        if width_changed {
            self.size.width = hinted.width;
        }
        if height_changed {
            self.size.height = hinted.height;
        }
        if was_loop != self.is_loop()
            || prev_axis != self.axis()
            || prev_step != self.step_size()
        {
            self.rehome();
        }
        if autoplay_changed {
            self.reevaluate_autoplay();
        }
    }

    /// Updates the slide count (e.g. after the host's child list changed).
    ///
    /// The index is clamped into the new range; looping and autoplay degrade gracefully when
    /// fewer than two slides remain.
    pub fn set_total(&mut self, total: usize) {
        if self.total == total {
            return;
        }
        let was_loop = self.is_loop();
        let could_autoplay = self.total > 1;
        self.total = total;
        sdebug!(total, "Swiper::set_total");

        let index_changed = self.set_index(self.index.min(total.saturating_sub(1)));
        if was_loop != self.is_loop() {
            self.set_loop_jump(false);
        }
        if index_changed || was_loop != self.is_loop() {
            self.rehome();
        }
        if could_autoplay != (total > 1) {
            self.reevaluate_autoplay();
        }
    }

    /// Feeds one host/timer event into the state machine.
    pub fn handle(&mut self, event: Event) {
        strace!(?event, "Swiper::handle");
        match event {
            Event::Mount { emits_scroll_end } => {
                self.attached = true;
                self.emits_scroll_end = emits_scroll_end;
                self.autoplay();
            }
            Event::Unmount => {
                self.attached = false;
                for kind in TimerKind::ALL {
                    self.effects.push(Effect::Cancel(kind));
                }
                self.autoplay_pending = false;
                self.loop_jump = false;
                self.is_scrolling = false;
                self.initial_render = true;
            }
            Event::Layout(size) => self.on_layout(size),
            Event::ScrollBeginDrag => {
                self.is_scrolling = true;
                if let Some(cb) = &self.options.on_scroll_begin_drag {
                    cb(&self.state());
                }
            }
            Event::ScrollEndDrag(offset) => self.on_scroll_end_drag(offset),
            Event::MomentumScrollEnd(offset) => self.on_momentum_scroll_end(offset),
            Event::Timer(timer) => self.on_timer(timer),
        }
    }

    /// Scrolls by `delta` slides.
    ///
    /// Returns the target offset, or why nothing happened: a scroll already in flight, fewer
    /// than two slides, no viewport, or a non-looping swiper already at the requested edge.
    /// Skips are silent no-ops for the engine.
    ///
    /// Targets never leave the render sequence. Without looping they are clamped to the first
    /// and last slide; with looping, jumps further than the boundary copies land directly on
    /// the wrapped slide.
    ///
    /// When `animated` is `false`, or the viewport does not report completion of programmatic
    /// scrolls, a zero-delay `Timer::ScrollEnd` is scheduled to stand in for the missing event.
    pub fn scroll_by(&mut self, delta: isize, animated: bool) -> Result<Offset, ScrollSkip> {
        if self.is_scrolling {
            return Err(ScrollSkip::Scrolling);
        }
        if self.total <= 1 {
            return Err(ScrollSkip::NotEnoughSlides);
        }
        if !self.attached {
            return Err(ScrollSkip::Detached);
        }

        let index = self.index as isize;
        let total = self.total as isize;
        let mut next = index + delta;
        if self.is_loop() {
            if next < -1 || next > total {
                next = next.rem_euclid(total);
            }
        } else {
            next = next.clamp(0, total - 1);
            if next == index && delta != 0 {
                return Err(ScrollSkip::AtEdge);
            }
        }
        let target = self.axis().offset(self.render_offset(next));
        strace!(delta, next, animated, "Swiper::scroll_by");
        self.effects.push(Effect::ScrollTo {
            offset: target,
            animated,
        });
        self.is_scrolling = true;
        self.autoplay_end = false;

        if !animated || !self.emits_scroll_end {
            self.effects.push(Effect::Schedule {
                timer: Timer::ScrollEnd { offset: target },
                delay_ms: 0,
            });
        }
        Ok(target)
    }

    /// Scrolls to logical slide `index`. Equivalent to `scroll_by(index - current, animated)`.
    pub fn scroll_to(&mut self, index: usize, animated: bool) -> Result<Offset, ScrollSkip> {
        let delta = index as isize - self.index as isize;
        self.scroll_by(delta, animated)
    }

    fn on_layout(&mut self, measured: Size) {
        self.correct_initial_offset(measured);
        if self.size == measured {
            return;
        }
        let prev_step = self.step_size();
        self.size = measured;
        if self.loop_jump && self.step_size() != prev_step {
            // The pending re-home was computed for the old step size.
            self.effects.push(Effect::Cancel(TimerKind::LoopJump));
            self.schedule_loop_jump();
        }
    }

    fn correct_initial_offset(&mut self, measured: Size) {
        if self.total <= 1 || !self.initial_render || !self.attached {
            return;
        }
        let weight = if self.is_loop() {
            self.index + 1
        } else {
            self.index
        };
        let target = self.axis().offset(measured.step(self.axis()) * weight as f64);
        sdebug!(index = self.index, weight, "correct_initial_offset");
        self.offset = target;
        self.effects.push(Effect::ScrollTo {
            offset: target,
            animated: false,
        });
        self.initial_render = false;
    }

    fn on_scroll_end_drag(&mut self, offset: Offset) {
        // A drag against a hard edge moves nothing, so no momentum end will follow.
        let axis = self.axis();
        let at_edge = self.index == 0 || self.index == self.total.saturating_sub(1);
        if offset.along(axis) == self.offset.along(axis) && at_edge {
            self.is_scrolling = false;
        }
    }

    fn on_momentum_scroll_end(&mut self, offset: Offset) {
        self.is_scrolling = false;
        self.update_index(offset);
        if let Some(cb) = &self.options.on_momentum_scroll_end {
            cb(&self.state());
        }
    }

    fn update_index(&mut self, current: Offset) {
        let axis = self.axis();
        let delta = current.along(axis) - self.offset.along(axis);
        if delta == 0.0 {
            return;
        }
        let step = self.step_size();
        if step <= 0.0 {
            swarn!(step, "update_index: viewport has no extent, ignoring scroll");
            self.offset = current;
            return;
        }

        let total = self.total as i64;
        let mut candidate = self.index as i64 + round_half_away_from_zero(delta / step);
        let mut wrapped = false;
        self.offset = current;

        if self.is_loop() {
            if candidate <= -1 {
                candidate = total - 1;
                wrapped = true;
            } else if candidate >= total {
                candidate = 0;
                wrapped = true;
            }
            if wrapped {
                let home = self.render_offset(candidate as isize);
                self.offset.set_along(axis, home);
            }
        } else {
            let clamped = candidate.clamp(0, (total - 1).max(0));
            if clamped != candidate {
                // The viewport cannot rest past its ends.
                candidate = clamped;
                let edge = self.render_offset(candidate as isize);
                self.offset.set_along(axis, edge);
            }
        }

        strace!(delta, candidate, wrapped, "update_index");
        self.set_index(candidate as usize);
        self.set_loop_jump(wrapped);
    }

    /// Returns `true` when the index actually changed.
    fn set_index(&mut self, index: usize) -> bool {
        if self.index == index {
            return false;
        }
        self.index = index;
        if let Some(cb) = &self.options.on_index_changed {
            cb(index);
        }
        self.autoplay();
        true
    }

    fn set_loop_jump(&mut self, loop_jump: bool) {
        if loop_jump {
            self.loop_jump = true;
            self.schedule_loop_jump();
        } else if self.loop_jump {
            self.loop_jump = false;
            self.effects.push(Effect::Cancel(TimerKind::LoopJump));
        }
    }

    fn schedule_loop_jump(&mut self) {
        self.effects.push(Effect::Schedule {
            timer: Timer::LoopJump,
            delay_ms: 0,
        });
    }

    fn on_timer(&mut self, timer: Timer) {
        match timer {
            Timer::Autoplay => self.on_autoplay_fired(),
            Timer::LoopJump => {
                if !self.loop_jump {
                    return;
                }
                self.loop_jump = false;
                if !self.attached || !self.is_loop() {
                    return;
                }
                let home = self.home_offset();
                sdebug!(index = self.index, "loop re-home");
                self.effects.push(Effect::ScrollTo {
                    offset: home,
                    animated: false,
                });
            }
            Timer::ScrollEnd { offset } => self.on_momentum_scroll_end(offset),
        }
    }

    fn on_autoplay_fired(&mut self) {
        self.autoplay_pending = false;
        if !self.options.autoplay || self.total <= 1 {
            return;
        }
        let direction = self.options.autoplay_direction;
        if !self.is_loop() && self.index == direction.terminal_index(self.total) {
            sdebug!(index = self.index, "autoplay reached the last slide");
            self.autoplay_end = true;
            return;
        }
        if let Err(_skip) = self.scroll_by(direction.step(), true) {
            strace!(skip = %_skip, "autoplay advance skipped");
        }
    }

    /// Arms the autoplay timer unless autoplay cannot run right now.
    fn autoplay(&mut self) {
        if self.total <= 1 || !self.options.autoplay || self.is_scrolling {
            return;
        }
        self.autoplay_pending = true;
        self.effects.push(Effect::Schedule {
            timer: Timer::Autoplay,
            delay_ms: self.options.autoplay_timeout_ms,
        });
    }

    fn reevaluate_autoplay(&mut self) {
        if self.autoplay_pending {
            self.autoplay_pending = false;
            self.effects.push(Effect::Cancel(TimerKind::Autoplay));
        }
        if self.attached {
            self.autoplay();
        }
    }

    fn rehome(&mut self) {
        self.offset = self.home_offset();
        if self.attached && self.total > 1 {
            self.effects.push(Effect::ScrollTo {
                offset: self.offset,
                animated: false,
            });
        }
    }
}
