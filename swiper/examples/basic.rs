// Example: drive the engine by hand and execute its effects.
use swiper::{Effect, Event, Size, Swiper, SwiperOptions};

fn main() {
    let options = SwiperOptions::new()
        .with_autoplay(false)
        .with_on_index_changed(Some(|i: usize| println!("index changed -> {i}")));
    let mut s = Swiper::new(options, 3, Size::new(320.0, 480.0));

    s.handle(Event::Mount {
        emits_scroll_end: false,
    });
    s.handle(Event::Layout(Size::new(320.0, 480.0)));
    run(&mut s);

    println!("render slots:");
    for slot in s.render_slots() {
        println!("  {slot:?} load={}", s.should_load(slot.render_index));
    }

    // Going back from the first slide wraps to the last one.
    let target = s.scroll_by(-1, true);
    println!("scroll_by(-1) -> {target:?}");
    run(&mut s);
    println!("state: {:?}", s.state());

    // A user fling that settles two slides further.
    s.handle(Event::ScrollBeginDrag);
    let settled = s.offset().along(s.axis()) + 2.0 * s.step_size();
    let settled = s.axis().offset(settled);
    s.handle(Event::MomentumScrollEnd(settled));
    run(&mut s);

    let dots: Vec<_> = s.pagination().dots().map(|d| d.active).collect();
    println!("dots: {dots:?}");
}

/// Executes queued effects, firing zero-delay timers right away.
fn run(s: &mut Swiper) {
    loop {
        let effects: Vec<Effect> = s.drain_effects().collect();
        if effects.is_empty() {
            return;
        }
        for effect in effects {
            match effect {
                Effect::ScrollTo { offset, animated } => {
                    println!("  scroll_to {offset:?} animated={animated}");
                }
                Effect::Schedule {
                    timer,
                    delay_ms: 0,
                } => s.handle(Event::Timer(timer)),
                Effect::Schedule { timer, delay_ms } => {
                    println!("  schedule {timer:?} in {delay_ms}ms");
                }
                Effect::Cancel(kind) => println!("  cancel {kind:?}"),
            }
        }
    }
}

