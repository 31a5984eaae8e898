// Example: compare how each smoothing strategy trails the same scroll input.
use scrollmotion::{Smoothing, SmootherState};

fn main() {
    let strategies = [
        ("direct", Smoothing::Direct),
        ("lerp", Smoothing::fixed_lerp(0.1)),
        ("adaptive", Smoothing::adaptive_lerp()),
        ("spring", Smoothing::spring(0.2)),
    ];

    for (name, smoothing) in strategies {
        let mut state = SmootherState::default();
        let mut ticks = 0usize;
        while !state.is_settled(1.0) && ticks < 1000 {
            smoothing.step(&mut state, 1.0, 0.016);
            ticks += 1;
        }
        println!("{name:>8}: settled on 1.0 in {ticks} ticks");
    }
}
