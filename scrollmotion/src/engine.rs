use core::cell::Cell;
use std::sync::Arc;

use crate::smoothing::clamp01;
use crate::{
    ContainerRect, Direction, EngineOptions, EngineState, FrameRange, ProgressState,
    ScrollSampler, Smoothing, SmootherState, map_frame,
};

/// Assumed elapsed time for the very first tick, in milliseconds.
const NOMINAL_TICK_MS: u64 = 16;

/// A headless scroll → animation-frame synchronization engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects, timers, or event listeners.
/// - Your adapter drives it by forwarding container geometry on scroll/resize
///   events and calling [`Engine::tick`] once per display frame.
/// - The tick returns the frame to display; seeking the render surface is the
///   adapter's side effect.
///
/// Within one tick the data flows strictly target → current → frame: the
/// sampled scroll target is smoothed into `current`, and `current` is mapped
/// to a frame index. Both `target` and `current` stay clamped to `[0, 1]`
/// after every operation, for any input.
///
/// For render-surface plumbing and double buffering, see the
/// `scrollmotion-adapter` crate.
#[derive(Clone, Debug)]
pub struct Engine {
    options: EngineOptions,
    sampler: ScrollSampler,
    smoother: SmootherState,
    target: f64,
    total_frames: Option<u32>,
    last_tick_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        sdebug!(
            smoothing = ?options.smoothing,
            enabled = options.enabled,
            "Engine::new"
        );
        Self {
            options,
            sampler: ScrollSampler::new(),
            smoother: SmootherState::default(),
            target: 0.0,
            total_frames: None,
            last_tick_ms: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    fn reset_progress(&mut self) {
        self.sampler.reset();
        self.smoother = SmootherState::default();
        self.target = 0.0;
        self.last_tick_ms = None;
    }

    pub fn set_options(&mut self, options: EngineOptions) {
        let was_enabled = self.options.enabled;
        self.options = options;

        if !self.options.enabled {
            self.reset_progress();
        } else if !was_enabled {
            self.reset_progress();
        }
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut EngineOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended for adapters: on a typical frame you might apply a scroll
    /// event and a tick together. Without batching, each mutation may trigger
    /// `on_change`, which can be expensive if the callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        self.reset_progress();
        self.notify();
    }

    pub fn set_smoothing(&mut self, smoothing: Smoothing) {
        self.options.smoothing = smoothing;
        self.notify();
    }

    pub fn set_frame_range(&mut self, frame_range: Option<FrameRange>) {
        self.options.frame_range = frame_range;
        self.notify();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.options.direction = direction;
        self.notify();
    }

    pub fn set_progress_exponent(&mut self, progress_exponent: f64) {
        self.options.progress_exponent = progress_exponent;
        self.notify();
    }

    pub fn set_lookahead_secs(&mut self, lookahead_secs: f64) {
        self.options.lookahead_secs = lookahead_secs;
        self.notify();
    }

    pub fn set_min_delta(&mut self, min_delta: f64) {
        self.options.min_delta = min_delta;
        self.notify();
    }

    pub fn set_max_dt_ms(&mut self, max_dt_ms: u64) {
        self.options.max_dt_ms = max_dt_ms;
        self.notify();
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&Engine) + Send + Sync + 'static>) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    /// Reports the loaded asset's authored frame count, or `None` while the
    /// asset is still loading. Ticks return no frame until this is set.
    pub fn set_total_frames(&mut self, total_frames: Option<u32>) {
        if self.total_frames == total_frames {
            return;
        }
        sdebug!(?total_frames, "set_total_frames");
        self.total_frames = total_frames;
        self.notify();
    }

    pub fn total_frames(&self) -> Option<u32> {
        self.total_frames
    }

    /// Applies a scroll/resize event from your UI layer.
    ///
    /// Samples the geometry into a new `target` progress (subject to the
    /// jitter threshold and optional velocity lookahead). The renderer is not
    /// touched here; the next [`Engine::tick`] picks the target up.
    pub fn apply_scroll_event(&mut self, rect: ContainerRect, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        strace!(
            top = rect.top,
            height = rect.height,
            viewport = rect.viewport,
            now_ms,
            "apply_scroll_event"
        );
        let sampled = self.sampler.sample(
            rect,
            now_ms,
            self.options.lookahead_secs,
            self.options.min_delta,
            self.options.max_dt_ms,
        );
        if let Some(target) = sampled {
            self.set_target(target);
        }
    }

    /// Sets `target` progress directly (clamped), bypassing the sampler.
    pub fn set_target(&mut self, target: f64) {
        let target = clamp01(target);
        if self.target == target {
            return;
        }
        self.target = target;
        self.notify();
    }

    /// Advances the engine by one display frame.
    ///
    /// Steps the smoother toward `target` (whether or not the target changed
    /// since the previous tick, so in-flight interpolation finishes after
    /// scrolling stops) and maps the result to a fractional frame index.
    ///
    /// Elapsed time is derived from `now_ms` and clamped to
    /// `options.max_dt_ms`, so a tick arriving after a long gap (backgrounded
    /// tab) cannot produce a single large catch-up jump.
    ///
    /// Returns `None` when the engine is disabled or the asset is unready.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        if !self.options.enabled {
            return None;
        }
        let dt_ms = match self.last_tick_ms {
            Some(last) => now_ms.saturating_sub(last).min(self.options.max_dt_ms),
            None => NOMINAL_TICK_MS.min(self.options.max_dt_ms),
        };
        self.last_tick_ms = Some(now_ms);

        let prev = self.smoother;
        self.options
            .smoothing
            .step(&mut self.smoother, self.target, dt_ms as f64 / 1000.0);
        if self.smoother != prev {
            self.notify();
        }

        let total_frames = self.total_frames?;
        map_frame(
            self.smoother.current,
            total_frames,
            self.options.frame_range,
            self.options.direction,
            self.options.progress_exponent,
        )
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn current(&self) -> f64 {
        self.smoother.current
    }

    pub fn velocity(&self) -> f64 {
        self.smoother.velocity
    }

    /// The sampler's smoothed scroll velocity, in progress units per second.
    pub fn scroll_velocity(&self) -> f64 {
        self.sampler.velocity()
    }

    /// Whether the smoother is at rest on the current target.
    pub fn is_settled(&self) -> bool {
        self.smoother.is_settled(self.target)
    }

    /// Returns a lightweight snapshot of the smoothing state.
    pub fn progress_state(&self) -> ProgressState {
        ProgressState {
            target: self.target,
            current: self.smoother.current,
            velocity: self.smoother.velocity,
        }
    }

    /// Returns a combined snapshot of progress + asset readiness.
    pub fn engine_state(&self) -> EngineState {
        EngineState {
            progress: self.progress_state(),
            total_frames: self.total_frames,
        }
    }

    /// Restores smoothing state from a previously captured snapshot.
    ///
    /// Values are re-clamped; sampler history (velocity, thresholds) is not
    /// part of the snapshot and starts fresh.
    pub fn restore_progress_state(&mut self, progress: ProgressState) {
        self.target = clamp01(progress.target);
        self.smoother = SmootherState {
            current: clamp01(progress.current),
            velocity: if progress.velocity.is_finite() {
                progress.velocity
            } else {
                0.0
            },
        };
        self.sampler.reset();
        self.last_tick_ms = None;
        self.notify();
    }

    /// Restores progress + asset readiness from a previously captured
    /// snapshot.
    pub fn restore_engine_state(&mut self, state: EngineState) {
        self.batch_update(|e| {
            e.restore_progress_state(state.progress);
            e.set_total_frames(state.total_frames);
        });
    }
}
