use swiper::{
    Effect, Event, Offset, ScrollSkip, Size, Swiper, SwiperOptions, SwiperState, TimerKind,
};

use crate::{TimerQueue, Viewport};

/// A framework-neutral controller that wraps a `swiper::Swiper`, owns the viewport handle and
/// the timer queue, and executes the engine's effects.
///
/// This type does not hold any UI objects beyond the [`Viewport`] you give it. Adapters drive it
/// by calling:
/// - `mount` / `unmount` around the viewport's lifetime
/// - `on_layout` / `on_scroll_begin_drag` / `on_scroll_end_drag` / `on_momentum_scroll_end`
///   when the host reports events
/// - `tick(now_ms)` each frame/timer tick (fires autoplay, loop re-home and synthesized
///   scroll-end timers)
///
/// Every entry point takes the current time, so the controller never reads a clock itself.
#[derive(Clone, Debug)]
pub struct Controller<V> {
    swiper: Swiper,
    viewport: Option<V>,
    timers: TimerQueue,
    now_ms: u64,
}

impl<V: Viewport> Controller<V> {
    pub fn new(options: SwiperOptions, total: usize, window: Size) -> Self {
        Self::from_swiper(Swiper::new(options, total, window))
    }

    pub fn from_swiper(swiper: Swiper) -> Self {
        Self {
            swiper,
            viewport: None,
            timers: TimerQueue::new(),
            now_ms: 0,
        }
    }

    pub fn swiper(&self) -> &Swiper {
        &self.swiper
    }

    pub fn viewport(&self) -> Option<&V> {
        self.viewport.as_ref()
    }

    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.viewport.as_mut()
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn index(&self) -> usize {
        self.swiper.index()
    }

    pub fn state(&self) -> SwiperState {
        self.swiper.state()
    }

    pub fn is_mounted(&self) -> bool {
        self.viewport.is_some()
    }

    /// Attaches the viewport and starts autoplay (if enabled).
    ///
    /// The initial offset is corrected on the first `on_layout` after mounting.
    pub fn mount(&mut self, viewport: V, now_ms: u64) {
        let emits_scroll_end = viewport.emits_programmatic_scroll_end();
        self.viewport = Some(viewport);
        self.dispatch(Event::Mount { emits_scroll_end }, now_ms);
    }

    /// Detaches the viewport and cancels every pending timer.
    pub fn unmount(&mut self, now_ms: u64) -> Option<V> {
        self.dispatch(Event::Unmount, now_ms);
        self.timers.cancel_all();
        self.viewport.take()
    }

    pub fn on_layout(&mut self, size: Size, now_ms: u64) {
        self.dispatch(Event::Layout(size), now_ms);
    }

    pub fn on_scroll_begin_drag(&mut self, now_ms: u64) {
        self.dispatch(Event::ScrollBeginDrag, now_ms);
    }

    pub fn on_scroll_end_drag(&mut self, offset: Offset, now_ms: u64) {
        self.dispatch(Event::ScrollEndDrag(offset), now_ms);
    }

    pub fn on_momentum_scroll_end(&mut self, offset: Offset, now_ms: u64) {
        self.dispatch(Event::MomentumScrollEnd(offset), now_ms);
    }

    /// Scrolls by `delta` slides. See [`Swiper::scroll_by`].
    pub fn scroll_by(
        &mut self,
        delta: isize,
        animated: bool,
        now_ms: u64,
    ) -> Result<Offset, ScrollSkip> {
        let r = self.swiper.scroll_by(delta, animated);
        self.flush(now_ms);
        r
    }

    /// Scrolls to logical slide `index`. See [`Swiper::scroll_to`].
    pub fn scroll_to(
        &mut self,
        index: usize,
        animated: bool,
        now_ms: u64,
    ) -> Result<Offset, ScrollSkip> {
        let r = self.swiper.scroll_to(index, animated);
        self.flush(now_ms);
        r
    }

    /// The "next" control button.
    pub fn scroll_next(&mut self, now_ms: u64) -> Result<Offset, ScrollSkip> {
        self.scroll_by(1, true, now_ms)
    }

    /// The "previous" control button. Honours `ButtonOptions::disable_prev_button`.
    pub fn scroll_prev(&mut self, now_ms: u64) -> Result<Offset, ScrollSkip> {
        if self.swiper.options().buttons.disable_prev_button {
            return Err(ScrollSkip::Disabled);
        }
        self.scroll_by(-1, true, now_ms)
    }

    pub fn set_options(&mut self, options: SwiperOptions, now_ms: u64) {
        self.swiper.set_options(options);
        self.flush(now_ms);
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut SwiperOptions), now_ms: u64) {
        let mut next = self.swiper.options().clone();
        f(&mut next);
        self.set_options(next, now_ms);
    }

    pub fn set_total(&mut self, total: usize, now_ms: u64) {
        self.swiper.set_total(total);
        self.flush(now_ms);
    }

    /// Advances the controller to `now_ms`.
    ///
    /// Polls the viewport for a settled animation first, then fires every timer that is due,
    /// including zero-delay timers scheduled while firing. Returns the number of timers fired.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        self.advance_clock(now_ms);
        let now_ms = self.now_ms;

        if let Some(settled) = self.viewport.as_mut().and_then(|v| v.poll(now_ms)) {
            self.dispatch(Event::MomentumScrollEnd(settled), now_ms);
        }

        let mut fired = 0usize;
        while let Some(timer) = self.timers.pop_due(now_ms) {
            atrace!(?timer, now_ms, "Controller::tick fire");
            self.dispatch(Event::Timer(timer), now_ms);
            fired += 1;
        }
        fired
    }

    /// Whether a timer of `kind` is armed.
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.timers.is_pending(kind)
    }

    fn advance_clock(&mut self, now_ms: u64) {
        if now_ms < self.now_ms {
            awarn!(now_ms, last = self.now_ms, "Controller: clock went backwards");
            return;
        }
        self.now_ms = now_ms;
    }

    fn dispatch(&mut self, event: Event, now_ms: u64) {
        self.swiper.handle(event);
        self.flush(now_ms);
    }

    fn flush(&mut self, now_ms: u64) {
        self.advance_clock(now_ms);
        let now_ms = self.now_ms;
        for effect in self.swiper.drain_effects() {
            match effect {
                Effect::ScrollTo { offset, animated } => match self.viewport.as_mut() {
                    Some(v) => v.scroll_to(offset, animated, now_ms),
                    None => {
                        awarn!(?offset, "Controller: scroll_to without a viewport");
                    }
                },
                Effect::Schedule { timer, delay_ms } => {
                    self.timers.schedule(timer, now_ms, delay_ms);
                }
                Effect::Cancel(kind) => {
                    self.timers.cancel(kind);
                }
            }
        }
    }
}
