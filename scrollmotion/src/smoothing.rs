/// Default per-tick rate for [`Smoothing::FixedLerp`].
pub const DEFAULT_LERP_RATE: f64 = 0.1;

/// Floor for [`Smoothing::Spring`]'s `smooth_time`, in seconds.
const MIN_SMOOTH_TIME: f64 = 1e-4;

/// Residual gap below which the smoother snaps onto the target.
const SETTLE_GAP: f64 = 1e-4;

/// Residual velocity below which the smoother may snap onto the target.
const SETTLE_VELOCITY: f64 = 1e-2;

/// Strategy for making `current` progress trail `target` progress.
///
/// The strategy is a configuration choice: every variant consumes the same
/// [`SmootherState`] and is stepped once per animation tick, so callers can
/// switch strategies without restructuring their loop.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Smoothing {
    /// `current := target` every tick. Baseline/fallback.
    Direct,
    /// Fixed-rate exponential interpolation, applied once per tick regardless
    /// of wall-clock time. `rate` is clamped into `(0, 1]`; smaller is
    /// smoother, 1.0 degenerates to `Direct`.
    FixedLerp { rate: f64 },
    /// Gap-graduated interpolation: gaps above `fast_gap` catch up at `fast`,
    /// gaps below `slow_gap` crawl at `slow`, everything between uses `mid`.
    AdaptiveLerp {
        fast: f64,
        mid: f64,
        slow: f64,
        fast_gap: f64,
        slow_gap: f64,
    },
    /// Critically-damped spring ("smooth damp") integrating position and
    /// velocity toward the target over elapsed seconds. Never overshoots:
    /// a step that would carry past the target lands exactly on it.
    Spring { smooth_time: f64 },
}

impl Default for Smoothing {
    fn default() -> Self {
        Self::FixedLerp {
            rate: DEFAULT_LERP_RATE,
        }
    }
}

impl Smoothing {
    pub fn fixed_lerp(rate: f64) -> Self {
        Self::FixedLerp { rate }
    }

    /// Adaptive lerp with the stock band thresholds (0.1 / 0.01).
    pub fn adaptive_lerp() -> Self {
        Self::AdaptiveLerp {
            fast: 0.3,
            mid: 0.12,
            slow: 0.05,
            fast_gap: 0.1,
            slow_gap: 0.01,
        }
    }

    pub fn spring(smooth_time: f64) -> Self {
        Self::Spring { smooth_time }
    }

    /// Advances `state` one tick toward `target`.
    ///
    /// `dt` is the elapsed time in seconds, already clamped by the caller
    /// (see `EngineOptions::max_dt_ms`); only `Spring` consumes it. The
    /// result is re-clamped to `[0, 1]` defensively for every strategy, and
    /// a residue below the settle thresholds snaps onto the target so
    /// convergence terminates instead of decaying forever.
    ///
    /// Returns the new `current`.
    pub fn step(&self, state: &mut SmootherState, target: f64, dt: f64) -> f64 {
        let target = clamp01(target);
        match *self {
            Self::Direct => {
                state.current = target;
                state.velocity = 0.0;
            }
            Self::FixedLerp { rate } => {
                lerp_step(state, target, rate);
            }
            Self::AdaptiveLerp {
                fast,
                mid,
                slow,
                fast_gap,
                slow_gap,
            } => {
                let gap = (target - state.current).abs();
                let rate = if gap > fast_gap {
                    fast
                } else if gap < slow_gap {
                    slow
                } else {
                    mid
                };
                lerp_step(state, target, rate);
            }
            Self::Spring { smooth_time } => {
                smooth_damp(state, target, smooth_time, dt.max(0.0));
            }
        }

        state.current = clamp01(state.current);
        if state.current != target
            && (target - state.current).abs() < SETTLE_GAP
            && state.velocity.abs() < SETTLE_VELOCITY
        {
            state.current = target;
            state.velocity = 0.0;
        }
        state.current
    }
}

/// Integration state shared by every smoothing strategy.
///
/// `current` is the smoothed progress in `[0, 1]`; `velocity` is only
/// meaningful for `Spring` (progress units per second; the lerp strategies
/// store the last per-tick delta there).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmootherState {
    pub current: f64,
    pub velocity: f64,
}

impl SmootherState {
    pub fn new(current: f64) -> Self {
        Self {
            current: clamp01(current),
            velocity: 0.0,
        }
    }

    /// Whether the smoother is at rest on `target`.
    pub fn is_settled(&self, target: f64) -> bool {
        self.current == clamp01(target) && self.velocity == 0.0
    }
}

pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

fn lerp_step(state: &mut SmootherState, target: f64, rate: f64) {
    let rate = rate.clamp(f64::EPSILON, 1.0);
    let prev = state.current;
    state.current = prev + (target - prev) * rate;
    state.velocity = state.current - prev;
}

/// Critically-damped spring step (Game Programming Gems style smooth damp).
///
/// `smooth_time` is clamped to a positive floor so near-zero inputs degrade
/// to a very stiff spring instead of dividing by zero.
fn smooth_damp(state: &mut SmootherState, target: f64, smooth_time: f64, dt: f64) {
    let smooth_time = if smooth_time.is_finite() {
        smooth_time.max(MIN_SMOOTH_TIME)
    } else {
        MIN_SMOOTH_TIME
    };
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    // Pade-style approximation of exp(-x), stable for large x.
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = state.current - target;
    let temp = (state.velocity + omega * change) * dt;
    state.velocity = (state.velocity - omega * temp) * exp;
    let next = target + (change + temp) * exp;

    // Overshoot guard: with large dt or inherited velocity the integrated
    // step can carry past the target. Land on it and kill the velocity.
    let moving_up = target - state.current > 0.0;
    if moving_up == (next > target) && state.current != target {
        state.current = target;
        state.velocity = 0.0;
    } else {
        state.current = next;
    }
}
