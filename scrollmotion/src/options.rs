use std::sync::Arc;

use crate::engine::Engine;
use crate::{Direction, FrameRange, Smoothing};

/// A callback fired when an engine state update occurs.
pub type OnChangeCallback = Arc<dyn Fn(&Engine) + Send + Sync>;

/// Configuration for [`crate::Engine`].
///
/// This type is cheap to clone: the only heavy field (`on_change`) is stored
/// in an `Arc`, so adapters can tweak a few fields and call
/// `Engine::set_options` without reallocating closures.
#[derive(Clone)]
pub struct EngineOptions {
    /// How `current` progress trails `target` progress each tick.
    pub smoothing: Smoothing,

    /// Trimmed frame sub-range; `None` maps into the asset's full range.
    pub frame_range: Option<FrameRange>,

    /// Progress → frame mapping direction.
    pub direction: Direction,

    /// Progress-shaping exponent γ (`shaped = progress^γ`). 1.0 is linear;
    /// values above 1 back-load the animation relative to scroll.
    pub progress_exponent: f64,

    /// Velocity lookahead for predictive sampling, in seconds. 0 disables
    /// prediction and reports raw progress.
    pub lookahead_secs: f64,

    /// Minimum progress movement for the sampler to report a new target.
    /// Suppresses spurious updates from sub-pixel scroll jitter.
    pub min_delta: f64,

    /// Upper bound on per-tick elapsed time, in milliseconds. Ticks arriving
    /// after a longer gap (backgrounded tab) are treated as if only this much
    /// time passed, avoiding a single large catch-up jump.
    pub max_dt_ms: u64,

    /// Enables/disables the engine. When disabled, events and ticks no-op.
    pub enabled: bool,

    /// Optional callback fired when the engine's state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl EngineOptions {
    pub fn new() -> Self {
        Self {
            smoothing: Smoothing::default(),
            frame_range: None,
            direction: Direction::Forward,
            progress_exponent: 1.0,
            lookahead_secs: 0.0,
            min_delta: 0.001,
            max_dt_ms: 100,
            enabled: true,
            on_change: None,
        }
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_frame_range(mut self, frame_range: Option<FrameRange>) -> Self {
        self.frame_range = frame_range;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_progress_exponent(mut self, progress_exponent: f64) -> Self {
        self.progress_exponent = progress_exponent;
        self
    }

    pub fn with_lookahead_secs(mut self, lookahead_secs: f64) -> Self {
        self.lookahead_secs = lookahead_secs;
        self
    }

    pub fn with_min_delta(mut self, min_delta: f64) -> Self {
        self.min_delta = min_delta;
        self
    }

    pub fn with_max_dt_ms(mut self, max_dt_ms: u64) -> Self {
        self.max_dt_ms = max_dt_ms;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Engine) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for EngineOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EngineOptions")
            .field("smoothing", &self.smoothing)
            .field("frame_range", &self.frame_range)
            .field("direction", &self.direction)
            .field("progress_exponent", &self.progress_exponent)
            .field("lookahead_secs", &self.lookahead_secs)
            .field("min_delta", &self.min_delta)
            .field("max_dt_ms", &self.max_dt_ms)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
