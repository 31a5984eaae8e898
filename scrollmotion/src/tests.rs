use crate::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use approx::{assert_abs_diff_eq, assert_relative_eq};

fn rect(top: f64, height: f64, viewport: f64) -> ContainerRect {
    ContainerRect::new(top, height, viewport)
}

/// Drives `smoothing` from rest to `target`, asserting the gap never grows.
/// Returns the number of ticks until `current` equals `target` exactly.
fn ticks_to_settle(smoothing: Smoothing, target: f64, dt: f64, max_ticks: usize) -> usize {
    let mut state = SmootherState::default();
    let mut gap = (target - state.current).abs();
    for n in 0..max_ticks {
        smoothing.step(&mut state, target, dt);
        let next_gap = (target - state.current).abs();
        assert!(
            next_gap <= gap + 1e-12,
            "gap grew on tick {n}: {gap} -> {next_gap} ({smoothing:?})"
        );
        gap = next_gap;
        assert!((0.0..=1.0).contains(&state.current));
        if state.current == target {
            return n + 1;
        }
    }
    panic!("{smoothing:?} did not settle on {target} within {max_ticks} ticks (gap {gap})");
}

#[test]
fn raw_progress_maps_container_travel() {
    // Container start edge at the viewport bottom: nothing scrolled yet.
    assert_eq!(raw_progress(rect(600.0, 2000.0, 600.0)), 0.0);
    // Scrolled exactly the full span (1400px): fully through.
    assert_eq!(raw_progress(rect(-800.0, 2000.0, 600.0)), 1.0);
    // Halfway.
    assert_relative_eq!(raw_progress(rect(-100.0, 2000.0, 600.0)), 0.5);
}

#[test]
fn raw_progress_degenerate_span_is_zero_not_nan() {
    // height == viewport: zero scrollable span.
    let p = raw_progress(rect(0.0, 600.0, 600.0));
    assert_eq!(p, 0.0);
    assert!(p.is_finite());
    // Negative span.
    assert_eq!(raw_progress(rect(0.0, 300.0, 600.0)), 0.0);
    // Malformed geometry.
    assert_eq!(raw_progress(rect(f64::NAN, 2000.0, 600.0)), 0.0);
    assert_eq!(raw_progress(rect(0.0, f64::INFINITY, 600.0)), 0.0);
}

#[test]
fn raw_progress_clamps_overscroll() {
    // Scrolled well past the container (e.g. rubber-banding).
    assert_eq!(raw_progress(rect(-10_000.0, 2000.0, 600.0)), 1.0);
    assert_eq!(raw_progress(rect(10_000.0, 2000.0, 600.0)), 0.0);
}

#[test]
fn sampler_reports_first_sample_and_skips_jitter() {
    let mut s = ScrollSampler::new();
    // First sample is always reported, even at progress 0.
    assert_eq!(s.sample(rect(600.0, 2000.0, 600.0), 0, 0.0, 0.001, 100), Some(0.0));
    // Identical geometry: below the movement threshold.
    assert_eq!(s.sample(rect(600.0, 2000.0, 600.0), 16, 0.0, 0.001, 100), None);
    // Sub-threshold wiggle (< 0.001 of the 1400px span).
    assert_eq!(s.sample(rect(599.0, 2000.0, 600.0), 32, 0.0, 0.001, 100), None);
    // Real movement is reported.
    assert!(s.sample(rect(400.0, 2000.0, 600.0), 48, 0.0, 0.001, 100).is_some());
}

#[test]
fn sampler_lookahead_predicts_along_velocity() {
    let mut s = ScrollSampler::new();
    // Scrolling down at a steady rate: 0.1 progress per 100ms = 1.0/s.
    s.sample(rect(600.0, 2000.0, 600.0), 0, 0.1, 0.0, 1000);
    let predicted = s
        .sample(rect(460.0, 2000.0, 600.0), 100, 0.1, 0.0, 1000)
        .unwrap();
    let raw = raw_progress(rect(460.0, 2000.0, 600.0));
    assert!(predicted > raw, "prediction should lead raw progress");
    assert!(predicted <= 1.0);
    assert!(s.velocity() > 0.0);
}

#[test]
fn sampler_stale_gap_resets_velocity() {
    let mut s = ScrollSampler::new();
    s.sample(rect(600.0, 2000.0, 600.0), 0, 0.1, 0.0, 100);
    s.sample(rect(500.0, 2000.0, 600.0), 16, 0.1, 0.0, 100);
    assert!(s.velocity() > 0.0);
    // Tab backgrounded for 10s: the jump must not become a velocity spike.
    s.sample(rect(-1400.0, 2000.0, 600.0), 10_016, 0.1, 0.0, 100);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn direct_strategy_settles_immediately() {
    assert_eq!(ticks_to_settle(Smoothing::Direct, 0.7, 0.016, 1), 1);
}

#[test]
fn fixed_lerp_converges_monotonically() {
    let ticks = ticks_to_settle(Smoothing::fixed_lerp(0.1), 1.0, 0.016, 1000);
    assert!(ticks > 1, "lerp should not settle instantly");
}

#[test]
fn adaptive_lerp_converges_monotonically() {
    ticks_to_settle(Smoothing::adaptive_lerp(), 1.0, 0.016, 1000);
}

#[test]
fn spring_converges_monotonically() {
    ticks_to_settle(Smoothing::spring(0.2), 1.0, 0.016, 1000);
}

#[test]
fn fixed_lerp_rate_above_one_degenerates_to_direct() {
    let mut state = SmootherState::default();
    Smoothing::fixed_lerp(5.0).step(&mut state, 0.6, 0.016);
    assert_eq!(state.current, 0.6);
}

#[test]
fn smoothing_reclamps_pathological_state() {
    // State poisoned from outside: step must bring it back into [0, 1].
    let mut state = SmootherState {
        current: 7.0,
        velocity: 0.0,
    };
    Smoothing::fixed_lerp(0.1).step(&mut state, 0.5, 0.016);
    assert!((0.0..=1.0).contains(&state.current));

    let mut state = SmootherState {
        current: f64::NAN,
        velocity: f64::NAN,
    };
    Smoothing::Direct.step(&mut state, 0.5, 0.016);
    assert_eq!(state.current, 0.5);
}

#[test]
fn spring_overshoot_guard_clamps_to_target() {
    // Pathological: huge inherited velocity and a dt of a full second.
    let mut state = SmootherState {
        current: 0.0,
        velocity: 50.0,
    };
    Smoothing::spring(0.05).step(&mut state, 1.0, 1.0);
    assert_eq!(state.current, 1.0);
    assert_eq!(state.velocity, 0.0);
}

#[test]
fn spring_tolerates_zero_smooth_time() {
    let mut state = SmootherState::default();
    Smoothing::spring(0.0).step(&mut state, 1.0, 0.016);
    assert!(state.current.is_finite());
    assert!((0.0..=1.0).contains(&state.current));
}

#[test]
fn adaptive_bands_switch_rates() {
    // Wide gap (0.2 > 0.1): fast band.
    let mut wide = SmootherState::default();
    Smoothing::adaptive_lerp().step(&mut wide, 0.2, 0.016);
    let fast_step = wide.current;

    // Tiny gap (0.001 < 0.01): slow band.
    let mut tiny = SmootherState::new(0.199);
    Smoothing::adaptive_lerp().step(&mut tiny, 0.2, 0.016);
    let slow_step = tiny.current - 0.199;

    assert_relative_eq!(fast_step, 0.2 * 0.3);
    assert_abs_diff_eq!(slow_step, 0.001 * 0.05, epsilon = 1e-9);
    // Normalized by gap, the two bands behave materially differently.
    assert!(fast_step / 0.2 > slow_step / 0.001 + 0.1);
}

#[test]
fn map_frame_full_range() {
    assert_eq!(
        map_frame(0.0, 120, None, Direction::Forward, 1.0),
        Some(0.0)
    );
    assert_eq!(
        map_frame(0.5, 121, None, Direction::Forward, 1.0),
        Some(60.0)
    );
    assert_eq!(
        map_frame(0.5, 121, None, Direction::Reverse, 1.0),
        Some(60.0)
    );
    assert_eq!(
        map_frame(0.0, 120, None, Direction::Reverse, 1.0),
        Some(119.0)
    );
}

#[test]
fn map_frame_snaps_at_completion() {
    let range = Some(FrameRange::new(10, 90));
    // Exactly 1.0: terminal frame with no residual fraction.
    assert_eq!(map_frame(1.0, 120, range, Direction::Forward, 1.0), Some(90.0));
    assert_eq!(map_frame(1.0, 120, range, Direction::Reverse, 1.0), Some(10.0));
    // Near-complete snaps too, instead of approaching asymptotically.
    assert_eq!(
        map_frame(0.9995, 120, range, Direction::Forward, 1.0),
        Some(90.0)
    );
}

#[test]
fn map_frame_respects_trim_and_exponent() {
    let range = Some(FrameRange::new(20, 60));
    assert_eq!(
        map_frame(0.5, 120, range, Direction::Forward, 1.0),
        Some(40.0)
    );
    // γ = 2 back-loads the animation: progress 0.5 maps a quarter in.
    assert_eq!(
        map_frame(0.5, 120, range, Direction::Forward, 2.0),
        Some(30.0)
    );
    // Bogus exponent falls back to linear.
    assert_eq!(
        map_frame(0.5, 120, range, Direction::Forward, f64::NAN),
        Some(40.0)
    );
}

#[test]
fn map_frame_skips_when_asset_unready() {
    assert_eq!(map_frame(0.5, 0, None, Direction::Forward, 1.0), None);
}

#[test]
fn map_frame_clamps_range_to_asset() {
    // Trim range authored against a longer asset than what loaded.
    let range = Some(FrameRange::new(100, 500));
    assert_eq!(
        map_frame(1.0, 120, range, Direction::Forward, 1.0),
        Some(119.0)
    );
}

#[test]
fn map_frame_defends_against_out_of_range_progress() {
    assert_eq!(
        map_frame(7.0, 120, None, Direction::Forward, 1.0),
        Some(119.0)
    );
    assert_eq!(
        map_frame(f64::NAN, 120, None, Direction::Forward, 1.0),
        Some(0.0)
    );
}

#[test]
fn frame_range_reorders_swapped_bounds() {
    let r = FrameRange::new(90, 10);
    assert_eq!(r.low, 10);
    assert_eq!(r.high, 90);
    assert_eq!(r.span(), 80);
    assert_eq!(FrameRange::full(120), FrameRange::new(0, 119));
}

#[test]
fn engine_target_and_current_stay_clamped() {
    let mut e = Engine::new(EngineOptions::new());
    e.set_target(f64::NAN);
    assert_eq!(e.target(), 0.0);
    e.set_target(42.0);
    assert_eq!(e.target(), 1.0);
    e.set_target(-3.0);
    assert_eq!(e.target(), 0.0);

    e.apply_scroll_event(rect(f64::NAN, f64::NAN, f64::NAN), 0);
    assert!((0.0..=1.0).contains(&e.target()));

    e.set_target(1.0);
    for n in 0..100u64 {
        e.tick(n * 16);
        assert!((0.0..=1.0).contains(&e.current()), "tick {n}");
    }
}

#[test]
fn engine_scroll_event_then_ticks_reach_frame() {
    let mut e = Engine::new(
        EngineOptions::new().with_smoothing(Smoothing::fixed_lerp(0.25)),
    );
    e.set_total_frames(Some(120));
    // Scroll to the halfway point of a 2000px container in a 600px viewport.
    e.apply_scroll_event(rect(-100.0, 2000.0, 600.0), 0);
    assert_relative_eq!(e.target(), 0.5);

    let mut frame = 0.0;
    for n in 1..200u64 {
        if let Some(f) = e.tick(n * 16) {
            frame = f;
        }
        if e.is_settled() {
            break;
        }
    }
    assert!(e.is_settled());
    assert_relative_eq!(e.current(), 0.5);
    assert_relative_eq!(frame, 0.5 * 119.0);
}

#[test]
fn engine_tick_without_asset_returns_none_but_advances() {
    let mut e = Engine::new(EngineOptions::new());
    e.set_target(1.0);
    assert_eq!(e.tick(16), None);
    // Smoothing proceeded even though no frame was produced.
    assert!(e.current() > 0.0);

    // Late asset load: next tick starts producing frames mid-interpolation.
    e.set_total_frames(Some(120));
    assert!(e.tick(32).is_some());
}

#[test]
fn engine_clamps_stale_dt() {
    let opts = EngineOptions::new().with_smoothing(Smoothing::spring(0.3));
    let mut e = Engine::new(opts);
    e.set_total_frames(Some(120));
    e.set_target(1.0);
    e.tick(0);
    let baseline = e.current();

    // A tick after 10s away must behave as if only max_dt_ms (100ms) passed.
    e.tick(10_000);
    let after_gap = e.current();

    let mut reference = Engine::new(
        EngineOptions::new().with_smoothing(Smoothing::spring(0.3)),
    );
    reference.set_total_frames(Some(120));
    reference.set_target(1.0);
    reference.tick(0);
    reference.tick(100);

    assert!(after_gap > baseline);
    assert_abs_diff_eq!(after_gap, reference.current(), epsilon = 1e-12);
}

#[test]
fn engine_disabled_skips_events_and_ticks() {
    let mut e = Engine::new(EngineOptions::new().with_enabled(false));
    e.set_total_frames(Some(120));
    e.apply_scroll_event(rect(-100.0, 2000.0, 600.0), 0);
    assert_eq!(e.target(), 0.0);
    assert_eq!(e.tick(16), None);

    // Re-enabling starts from a clean slate.
    e.set_enabled(true);
    assert_eq!(e.target(), 0.0);
    assert_eq!(e.current(), 0.0);
    e.apply_scroll_event(rect(-100.0, 2000.0, 600.0), 32);
    assert_relative_eq!(e.target(), 0.5);
}

#[test]
fn engine_on_change_batches_notifications() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut e = Engine::new(EngineOptions::new().with_on_change(Some(move |_: &Engine| {
        counter.fetch_add(1, Ordering::SeqCst);
    })));

    calls.store(0, Ordering::SeqCst);
    e.set_target(0.5);
    e.set_total_frames(Some(120));
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    calls.store(0, Ordering::SeqCst);
    e.batch_update(|e| {
        e.set_target(0.8);
        e.set_total_frames(Some(60));
    });
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // No-op setters do not notify.
    calls.store(0, Ordering::SeqCst);
    e.set_target(0.8);
    e.set_total_frames(Some(60));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn engine_state_snapshot_roundtrip() {
    let mut e = Engine::new(EngineOptions::new());
    e.set_total_frames(Some(120));
    e.set_target(0.9);
    e.tick(16);
    let snapshot = e.engine_state();

    let mut restored = Engine::new(EngineOptions::new());
    restored.restore_engine_state(snapshot);
    assert_eq!(restored.engine_state(), snapshot);
    assert_eq!(restored.total_frames(), Some(120));
}

#[test]
fn engine_restore_clamps_hostile_snapshot() {
    let mut e = Engine::new(EngineOptions::new());
    e.restore_progress_state(ProgressState {
        target: 9.0,
        current: f64::NAN,
        velocity: f64::INFINITY,
    });
    assert_eq!(e.target(), 1.0);
    assert_eq!(e.current(), 0.0);
    assert_eq!(e.velocity(), 0.0);
}

#[test]
fn options_builder_applies_fields() {
    let opts = EngineOptions::new()
        .with_smoothing(Smoothing::spring(0.25))
        .with_frame_range(Some(FrameRange::new(5, 50)))
        .with_direction(Direction::Reverse)
        .with_progress_exponent(2.0)
        .with_lookahead_secs(0.08)
        .with_min_delta(0.005)
        .with_max_dt_ms(50)
        .with_enabled(false);
    assert_eq!(opts.smoothing, Smoothing::spring(0.25));
    assert_eq!(opts.frame_range, Some(FrameRange::new(5, 50)));
    assert_eq!(opts.direction, Direction::Reverse);
    assert_eq!(opts.progress_exponent, 2.0);
    assert_eq!(opts.lookahead_secs, 0.08);
    assert_eq!(opts.min_delta, 0.005);
    assert_eq!(opts.max_dt_ms, 50);
    assert!(!opts.enabled);
}

#[test]
fn update_options_notifies_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut e = Engine::new(EngineOptions::new());
    e.set_on_change(Some(move |_: &Engine| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    calls.store(0, Ordering::SeqCst);
    e.update_options(|o| {
        o.smoothing = Smoothing::adaptive_lerp();
        o.direction = Direction::Reverse;
    });
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(e.options().direction, Direction::Reverse);
}
