use swiper::{Size, SwiperOptions};
use swiper_adapter::{Controller, Easing, Platform, SimulatedViewport};

fn main() {
    // Example: a looping autoplay carousel driven by a simulated 60fps frame loop.
    //
    // On iOS the viewport reports the end of each animated scroll itself; on the other
    // platforms the engine synthesizes it. Either way the index walks 1, 2, 3, 0, 1, ...
    for platform in [Platform::Ios, Platform::Android] {
        let options = SwiperOptions::new()
            .with_autoplay(true)
            .with_autoplay_timeout_ms(1_000);
        let mut c = Controller::new(options, 4, Size::new(320.0, 200.0));
        c.mount(
            SimulatedViewport::new(platform).with_animation(250, Easing::EaseOutCubic),
            0,
        );
        c.on_layout(Size::new(320.0, 200.0), 0);

        println!("{platform:?}:");
        let mut last = c.index();
        let mut now_ms = 0u64;
        while now_ms <= 6_000 {
            c.tick(now_ms);
            if c.index() != last {
                last = c.index();
                let offset = c.viewport().map(|v| v.offset());
                println!("  t={now_ms:>5}ms index={last} offset={offset:?}");
            }
            now_ms += 16;
        }

        let history = c.viewport().map_or(0, |v| v.history().len());
        println!("  {history} scroll commands issued");
        c.unmount(now_ms);
    }
}
