use crate::ContainerRect;

/// Fraction of a new velocity measurement blended into the smoothed estimate.
const VELOCITY_ALPHA: f64 = 0.4;

/// Converts container geometry into a clamped progress value in `[0, 1]`.
///
/// Progress is 0 while the container's start edge is at or below the bottom of
/// the viewport, and 1 once its end edge reaches the top. Degenerate geometry
/// (non-positive scrollable span, NaN/Infinity anywhere) reports 0 rather than
/// propagating the bad value downstream.
pub fn raw_progress(rect: ContainerRect) -> f64 {
    let span = rect.scrollable_span();
    if !span.is_finite() || span <= 0.0 {
        return 0.0;
    }
    let scrolled = rect.viewport - rect.top;
    if !scrolled.is_finite() {
        return 0.0;
    }
    (scrolled / span).clamp(0.0, 1.0)
}

/// Turns sampled container geometry into `target` progress values.
///
/// The sampler owns the inter-sample state needed for two optional behaviors:
/// - velocity-based lookahead (predict where the user will be shortly)
/// - sub-pixel jitter suppression (skip reports below a movement threshold)
///
/// It never touches the renderer, and it performs no throttling of its own:
/// coalescing native scroll events to at most one geometry read per display
/// frame is the adapter's job.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollSampler {
    last_progress: Option<f64>,
    last_reported: Option<f64>,
    last_sample_ms: Option<u64>,
    velocity: f64, // progress units per second, signed
}

impl ScrollSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The smoothed scroll velocity, in progress units per second.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Forgets all inter-sample state (velocity, thresholds, timestamps).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Samples geometry at `now_ms` and returns the next `target` progress.
    ///
    /// Returns `None` when the movement since the last *reported* sample is
    /// below `min_delta` (the first sample is always reported). With
    /// `lookahead_secs > 0`, the reported value is extrapolated along the
    /// smoothed velocity and re-clamped to `[0, 1]`.
    ///
    /// Gaps of `max_dt_ms` or longer between samples (backgrounded tab) reset
    /// the velocity estimate instead of producing a catch-up spike.
    pub fn sample(
        &mut self,
        rect: ContainerRect,
        now_ms: u64,
        lookahead_secs: f64,
        min_delta: f64,
        max_dt_ms: u64,
    ) -> Option<f64> {
        let progress = raw_progress(rect);

        if let (Some(prev), Some(prev_ms)) = (self.last_progress, self.last_sample_ms) {
            let dt_ms = now_ms.saturating_sub(prev_ms);
            if dt_ms == 0 || dt_ms >= max_dt_ms.max(1) {
                self.velocity = 0.0;
            } else {
                let measured = (progress - prev) / (dt_ms as f64 / 1000.0);
                self.velocity += (measured - self.velocity) * VELOCITY_ALPHA;
            }
        }
        self.last_progress = Some(progress);
        self.last_sample_ms = Some(now_ms);

        let reported = if lookahead_secs > 0.0 {
            (progress + self.velocity * lookahead_secs).clamp(0.0, 1.0)
        } else {
            progress
        };

        if let Some(last) = self.last_reported {
            if (reported - last).abs() < min_delta {
                return None;
            }
        }
        self.last_reported = Some(reported);
        Some(reported)
    }
}
