// Example: double-buffered surfaces — the visible one is never painted.
use scrollmotion::{ContainerRect, EngineOptions, Smoothing};
use scrollmotion_adapter::{AnimationSurface, Controller};

struct NamedSurface(&'static str);

impl AnimationSurface for NamedSurface {
    fn total_frames(&self) -> Option<u32> {
        Some(120)
    }

    fn seek(&mut self, frame: f64) {
        println!("{}: paint frame {frame:.2}", self.0);
    }

    fn set_visible(&mut self, visible: bool) {
        println!("{}: visible={visible}", self.0);
    }
}

fn main() {
    let mut c = Controller::double_buffered(
        NamedSurface("A"),
        NamedSurface("B"),
        EngineOptions::new().with_smoothing(Smoothing::Direct),
    );

    // Each tick paints the hidden surface; the swap lands next tick.
    for (n, top) in [100.0, -100.0, -300.0, -500.0].into_iter().enumerate() {
        let now_ms = n as u64 * 16;
        c.on_scroll(ContainerRect::new(top, 2000.0, 600.0), now_ms);
        c.tick(now_ms + 8);
    }
}
