// Example: minimal scroll → frame loop with the default smoothing.
use scrollmotion::{ContainerRect, Engine, EngineOptions};

fn main() {
    let mut e = Engine::new(EngineOptions::new());
    e.set_total_frames(Some(120));

    // User lands mid-page in a 2000px container with a 600px viewport.
    e.apply_scroll_event(ContainerRect::new(-100.0, 2000.0, 600.0), 0);
    println!("target={}", e.target());

    // Simulate a 60fps tick loop until the smoother settles.
    let mut now_ms = 0u64;
    while !e.is_settled() {
        now_ms += 16;
        if let Some(frame) = e.tick(now_ms) {
            println!("t={now_ms}ms current={:.4} frame={frame:.2}", e.current());
        }
    }
}
