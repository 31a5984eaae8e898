/// Mapping direction from progress to frame index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Progress 0 maps to the low end of the frame range, 1 to the high end.
    #[default]
    Forward,
    /// Progress 0 maps to the high end of the frame range, 1 to the low end.
    Reverse,
}

/// Geometry of the bound scroll container at one sampled instant.
///
/// All fields are in the host's pixel units:
/// - `top` is the offset of the container's top edge relative to the viewport
///   top (goes negative once the container scrolls past it)
/// - `height` is the container's total height
/// - `viewport` is the viewport height
///
/// The host recomputes this on every scroll/resize event; the engine never
/// reads geometry itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerRect {
    pub top: f64,
    pub height: f64,
    pub viewport: f64,
}

impl ContainerRect {
    pub fn new(top: f64, height: f64, viewport: f64) -> Self {
        Self {
            top,
            height,
            viewport,
        }
    }

    /// The distance the viewport can travel through the container.
    ///
    /// Zero or negative means the container does not scroll (degenerate).
    pub fn scrollable_span(&self) -> f64 {
        self.height - self.viewport
    }
}

/// An inclusive sub-range of the animation asset's authored frames.
///
/// Progress maps into `[low, high]` instead of the full `[0, total_frames - 1]`
/// when a trim range is configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameRange {
    pub low: u32,
    pub high: u32, // inclusive
}

impl FrameRange {
    /// Creates a range; swapped bounds are reordered.
    pub fn new(low: u32, high: u32) -> Self {
        if low <= high {
            Self { low, high }
        } else {
            Self {
                low: high,
                high: low,
            }
        }
    }

    /// The full range of an asset with `total_frames` authored frames.
    pub fn full(total_frames: u32) -> Self {
        Self {
            low: 0,
            high: total_frames.saturating_sub(1),
        }
    }

    /// Clamps both ends into the asset's authored frames.
    pub fn clamp_to(self, total_frames: u32) -> Self {
        let last = total_frames.saturating_sub(1);
        Self {
            low: self.low.min(last),
            high: self.high.min(last),
        }
    }

    /// Number of usable frames between the ends (`high - low`).
    pub fn span(&self) -> u32 {
        self.high.saturating_sub(self.low)
    }
}
