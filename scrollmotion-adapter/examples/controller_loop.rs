// Example: full adapter workflow — coalesced scroll events driving a surface.
use scrollmotion::{ContainerRect, EngineOptions, Smoothing};
use scrollmotion_adapter::{AnimationSurface, Controller};

struct ConsoleSurface;

impl AnimationSurface for ConsoleSurface {
    fn total_frames(&self) -> Option<u32> {
        Some(120)
    }

    fn seek(&mut self, frame: f64) {
        println!("seek({frame:.2})");
    }
}

fn main() {
    let mut c = Controller::single(
        ConsoleSurface,
        EngineOptions::new().with_smoothing(Smoothing::spring(0.2)),
    );

    // Simulate a burst of scroll events followed by 60fps ticks.
    let mut now_ms = 0u64;
    for top in [500.0, 300.0, 100.0, -100.0, -300.0] {
        c.on_scroll(ContainerRect::new(top, 2000.0, 600.0), now_ms);
        now_ms += 16;
        c.tick(now_ms);
    }

    // Scrolling stopped; the in-flight interpolation still finishes.
    while !c.engine().is_settled() {
        now_ms += 16;
        c.tick(now_ms);
    }
    println!("settled at progress {:.3}", c.engine().current());

    c.detach();
}
