/// The boundary to an external animation asset/player instance.
///
/// Implementations wrap whatever actually paints frames (a Lottie player, a
/// sprite sheet, a video element). The contract is deliberately tiny so tests
/// can substitute a recording fake:
///
/// - `total_frames` reports `None` until the asset has loaded; the controller
///   skips frame work while unready instead of faulting.
/// - `seek` displays one frame and must not start playback or loop.
/// - `set_visible` shows/hides the surface (used by [`crate::DoubleBuffer`]
///   to swap which of two surfaces is on screen).
pub trait AnimationSurface {
    /// The asset's authored frame count, or `None` while still loading.
    fn total_frames(&self) -> Option<u32>;

    /// Displays `frame` (possibly fractional). One-shot seek, not playback.
    fn seek(&mut self, frame: f64);

    /// Shows or hides the surface. Single-surface setups may ignore this.
    fn set_visible(&mut self, visible: bool) {
        let _ = visible;
    }
}
