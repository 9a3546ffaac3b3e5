use crate::*;

use swiper::{
    AutoplayDirection, AutoplayPhase, ButtonOptions, Offset, ScrollSkip, Size, SwiperOptions,
    Timer, TimerKind,
};

fn mounted(
    options: SwiperOptions,
    total: usize,
    platform: Platform,
) -> Controller<SimulatedViewport> {
    let mut c = Controller::new(options, total, Size::new(100.0, 100.0));
    c.mount(
        SimulatedViewport::new(platform).with_animation(300, Easing::Linear),
        0,
    );
    c.on_layout(Size::new(100.0, 100.0), 0);
    c
}

fn history(c: &Controller<SimulatedViewport>) -> &[(Offset, bool)] {
    c.viewport().unwrap().history()
}

#[test]
fn timer_queue_keeps_one_timer_per_kind() {
    let mut q = TimerQueue::new();
    assert!(!q.schedule(Timer::Autoplay, 0, 2_500));
    assert!(q.schedule(Timer::Autoplay, 100, 2_500));
    q.schedule(Timer::LoopJump, 100, 0);
    assert_eq!(q.len(), 2);
    assert_eq!(q.next_due_ms(), Some(100));

    assert_eq!(q.pop_due(2_599), Some(Timer::LoopJump));
    assert_eq!(q.pop_due(2_599), None);
    assert_eq!(q.pop_due(2_600), Some(Timer::Autoplay));
    assert!(q.is_empty());
}

#[test]
fn timer_queue_fires_equal_deadlines_in_schedule_order() {
    let mut q = TimerQueue::new();
    let end = Timer::ScrollEnd {
        offset: Offset::new(100.0, 0.0),
    };
    q.schedule(end, 10, 0);
    q.schedule(Timer::LoopJump, 10, 0);
    q.schedule(Timer::Autoplay, 5, 5);
    assert_eq!(q.pop_due(10), Some(end));
    assert_eq!(q.pop_due(10), Some(Timer::LoopJump));
    assert_eq!(q.pop_due(10), Some(Timer::Autoplay));

    q.schedule(Timer::Autoplay, 0, 10);
    assert!(q.cancel(TimerKind::Autoplay));
    assert!(!q.cancel(TimerKind::Autoplay));
    assert!(!q.is_pending(TimerKind::Autoplay));
}

#[test]
fn tween_reaches_its_target() {
    let t = Tween::new(
        Offset::new(100.0, 0.0),
        Offset::new(0.0, 0.0),
        1_000,
        200,
        Easing::Linear,
    );
    assert_eq!(t.sample(1_000), Offset::new(100.0, 0.0));
    assert_eq!(t.sample(1_100), Offset::new(50.0, 0.0));
    assert!(!t.is_done(1_199));
    assert_eq!(t.sample(5_000), Offset::new(0.0, 0.0));

    for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
}

#[test]
fn autoplay_walks_to_the_last_slide_and_stops() {
    let options = SwiperOptions::new()
        .with_loop(false)
        .with_autoplay_direction(AutoplayDirection::Forward)
        .with_autoplay_timeout_ms(2_500);
    let mut c = mounted(options, 3, Platform::Android);
    assert!(c.is_pending(TimerKind::Autoplay));

    c.tick(2_500);
    assert_eq!(c.index(), 1);
    c.tick(5_000);
    assert_eq!(c.index(), 2);
    c.tick(7_500);
    assert!(c.state().autoplay_end);
    assert_eq!(c.swiper().autoplay_phase(), AutoplayPhase::Ended);

    assert_eq!(c.tick(60_000), 0);
    assert_eq!(c.index(), 2);

    c.scroll_to(0, true, 60_000).unwrap();
    c.tick(60_000);
    assert_eq!(c.index(), 0);
    assert!(!c.state().autoplay_end);
    assert!(c.is_pending(TimerKind::Autoplay));
}

#[test]
fn ios_loop_wrap_waits_for_the_animation_then_rehomes() {
    let mut c = mounted(SwiperOptions::new().with_autoplay(false), 5, Platform::Ios);
    assert_eq!(history(&c), [(Offset::new(100.0, 0.0), false)]);

    c.scroll_by(-1, true, 0).unwrap();
    assert!(!c.is_pending(TimerKind::ScrollEnd));

    c.tick(150);
    assert_eq!(c.index(), 0);
    assert!(c.swiper().is_scrolling());
    assert_eq!(c.viewport().unwrap().offset(), Offset::new(50.0, 0.0));

    c.tick(300);
    assert_eq!(c.index(), 4);
    assert!(!c.swiper().loop_jump());
    assert_eq!(
        history(&c),
        [
            (Offset::new(100.0, 0.0), false),
            (Offset::new(0.0, 0.0), true),
            (Offset::new(500.0, 0.0), false),
        ]
    );
    assert_eq!(c.viewport().unwrap().offset(), Offset::new(500.0, 0.0));
}

#[test]
fn android_synthesizes_completion_immediately() {
    let mut c = mounted(SwiperOptions::new().with_autoplay(false), 4, Platform::Android);
    c.scroll_by(1, true, 10).unwrap();
    assert!(c.is_pending(TimerKind::ScrollEnd));

    assert_eq!(c.tick(10), 1);
    assert_eq!(c.index(), 1);
    assert!(!c.swiper().is_scrolling());

    // The animation keeps running, but never reports completion by itself.
    assert!(c.viewport().unwrap().is_animating());
    assert_eq!(c.tick(400), 0);
    assert_eq!(c.index(), 1);
}

#[test]
fn non_animated_scrolls_synthesize_completion_on_ios_too() {
    let mut c = mounted(SwiperOptions::new().with_autoplay(false), 4, Platform::Ios);
    c.scroll_to(2, false, 0).unwrap();
    c.tick(0);
    assert_eq!(c.index(), 2);
    assert_eq!(c.viewport().unwrap().offset(), Offset::new(300.0, 0.0));
}

#[test]
fn user_fling_updates_index_and_restarts_autoplay() {
    let options = SwiperOptions::new()
        .with_loop(false)
        .with_autoplay_timeout_ms(1_000);
    let mut c = mounted(options, 4, Platform::Android);

    c.on_scroll_begin_drag(200);
    c.viewport_mut().unwrap().drag_to(Offset::new(180.0, 0.0));
    c.on_scroll_end_drag(Offset::new(180.0, 0.0), 250);
    assert!(c.swiper().is_scrolling());

    // The autoplay firing during the drag is swallowed.
    c.tick(1_000);
    assert_eq!(c.index(), 0);

    c.on_momentum_scroll_end(Offset::new(200.0, 0.0), 1_100);
    assert_eq!(c.index(), 2);
    assert!(c.is_pending(TimerKind::Autoplay));
    c.tick(2_100);
    assert_eq!(c.index(), 3);
}

#[test]
fn zero_movement_drag_at_the_edge_unblocks_scrolling() {
    let options = SwiperOptions::new()
        .with_loop(false)
        .with_autoplay(false)
        .with_index(2);
    let mut c = mounted(options, 3, Platform::Ios);
    let at = c.state().offset;

    c.on_scroll_begin_drag(0);
    assert_eq!(c.scroll_by(-1, true, 0), Err(ScrollSkip::Scrolling));
    c.on_scroll_end_drag(at, 10);
    assert!(!c.swiper().is_scrolling());
    assert!(c.scroll_by(-1, true, 20).is_ok());
}

#[test]
fn prev_button_can_be_disabled() {
    let options = SwiperOptions::new()
        .with_autoplay(false)
        .with_shows_buttons(true)
        .with_buttons(ButtonOptions {
            disable_prev_button: true,
        });
    let mut c = mounted(options, 3, Platform::Android);
    assert_eq!(c.scroll_prev(0), Err(ScrollSkip::Disabled));
    assert!(c.scroll_next(0).is_ok());
    c.tick(0);
    assert_eq!(c.index(), 1);
}

#[test]
fn prev_button_at_the_first_slide_keeps_the_viewport_in_bounds() {
    let options = SwiperOptions::new().with_loop(false).with_autoplay(false);
    let mut c = mounted(options, 3, Platform::Android);
    assert_eq!(c.scroll_prev(0), Err(ScrollSkip::AtEdge));
    assert_eq!(history(&c), [(Offset::new(0.0, 0.0), false)]);
    assert!(!c.is_pending(TimerKind::ScrollEnd));

    c.on_scroll_begin_drag(10);
    c.viewport_mut().unwrap().drag_to(Offset::new(100.0, 0.0));
    c.on_momentum_scroll_end(Offset::new(100.0, 0.0), 20);
    assert_eq!(c.index(), 1);

    assert_eq!(c.scroll_prev(30), Ok(Offset::new(0.0, 0.0)));
    c.tick(30);
    assert_eq!(c.index(), 0);
    assert_eq!(c.state().offset, Offset::new(0.0, 0.0));
    assert_eq!(c.scroll_prev(40), Err(ScrollSkip::AtEdge));
}

#[test]
fn unmount_cancels_timers_and_detaches() {
    let mut c = mounted(SwiperOptions::new(), 3, Platform::Android);
    c.on_momentum_scroll_end(Offset::new(0.0, 0.0), 10);
    assert!(c.is_pending(TimerKind::LoopJump));
    assert!(c.is_pending(TimerKind::Autoplay));

    let viewport = c.unmount(20);
    assert!(viewport.is_some());
    assert!(c.timers().is_empty());
    assert!(!c.is_mounted());
    assert_eq!(c.tick(100_000), 0);
    assert_eq!(c.scroll_by(1, true, 100_000), Err(ScrollSkip::Detached));
}

#[test]
fn update_options_toggles_autoplay() {
    let mut c = mounted(SwiperOptions::new().with_autoplay(false), 3, Platform::Android);
    assert!(!c.is_pending(TimerKind::Autoplay));

    c.update_options(|o| o.autoplay = true, 0);
    assert!(c.is_pending(TimerKind::Autoplay));
    c.tick(2_500);
    assert_eq!(c.index(), 1);

    c.update_options(|o| o.autoplay = false, 2_600);
    assert!(!c.is_pending(TimerKind::Autoplay));
}
