use crate::smoothing::clamp01;
use crate::{Direction, FrameRange};

/// Progress at or above which the mapping snaps to the terminal frame.
///
/// Exponential-style smoothing approaches 1.0 asymptotically; without the snap
/// the animation would never visibly complete.
pub const COMPLETION_SNAP: f64 = 0.999;

/// Maps smoothed progress to a fractional frame index.
///
/// Pure function of progress + configuration; committing the frame to a render
/// surface is the adapter's job. Returns `None` when the asset is unready
/// (`total_frames == 0`), which callers treat as "skip this tick".
///
/// - `range` trims the mapping into a sub-range of the authored frames
///   (clamped to the asset; `None` uses the full range)
/// - `direction` reverses the progress → frame mapping
/// - `exponent` shapes progress non-linearly (`shaped = progress^γ`);
///   non-positive or non-finite values fall back to 1.0
pub fn map_frame(
    current: f64,
    total_frames: u32,
    range: Option<FrameRange>,
    direction: Direction,
    exponent: f64,
) -> Option<f64> {
    if total_frames == 0 {
        return None;
    }
    let range = range
        .map(|r| r.clamp_to(total_frames))
        .unwrap_or_else(|| FrameRange::full(total_frames));
    let current = clamp01(current);

    if current >= COMPLETION_SNAP {
        return Some(match direction {
            Direction::Forward => range.high as f64,
            Direction::Reverse => range.low as f64,
        });
    }

    let exponent = if exponent.is_finite() && exponent > 0.0 {
        exponent
    } else {
        1.0
    };
    let shaped = current.powf(exponent);
    let span = range.span() as f64;
    let frame = match direction {
        Direction::Forward => range.low as f64 + shaped * span,
        Direction::Reverse => range.low as f64 + (1.0 - shaped) * span,
    };
    Some(frame)
}
