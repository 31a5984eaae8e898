use crate::AnimationSurface;

/// Two alternating render surfaces, exactly one visible at any instant.
///
/// Masks paint latency: `commit` always paints the *off-screen* surface, and
/// the visibility swap is deferred to `finish_swap`, which the controller runs
/// at the top of the next tick. The swap therefore rides the same per-frame
/// callback as the rest of the loop instead of an independent delay timer, and
/// the visible surface is never the one being painted.
///
/// A commit arriving while a swap is still pending supersedes the previous
/// one: the off-screen surface is simply repainted with the newer frame and
/// the stale frame is never shown. Visual currency beats completeness here.
#[derive(Clone, Debug)]
pub struct DoubleBuffer<S> {
    front: S, // visible
    back: S,  // being prepared
    swap_pending: bool,
}

impl<S: AnimationSurface> DoubleBuffer<S> {
    /// Creates a buffer pair; `front` starts visible, `back` hidden.
    pub fn new(mut front: S, mut back: S) -> Self {
        front.set_visible(true);
        back.set_visible(false);
        Self {
            front,
            back,
            swap_pending: false,
        }
    }

    /// Frame count of the underlying asset (`None` while loading).
    pub fn total_frames(&self) -> Option<u32> {
        self.front
            .total_frames()
            .or_else(|| self.back.total_frames())
    }

    /// Paints `frame` into the off-screen surface and marks a swap pending.
    pub fn commit(&mut self, frame: f64) {
        self.back.seek(frame);
        self.swap_pending = true;
    }

    /// Completes a pending swap: the freshly painted surface becomes visible
    /// and the previously visible one becomes the next paint target.
    ///
    /// The new surface is shown before the old one is hidden, so there is
    /// never an instant with neither surface visible.
    ///
    /// Returns whether a swap happened.
    pub fn finish_swap(&mut self) -> bool {
        if !self.swap_pending {
            return false;
        }
        self.back.set_visible(true);
        self.front.set_visible(false);
        core::mem::swap(&mut self.front, &mut self.back);
        self.swap_pending = false;
        true
    }

    pub fn swap_pending(&self) -> bool {
        self.swap_pending
    }

    /// The currently visible surface.
    pub fn visible(&self) -> &S {
        &self.front
    }

    /// Consumes the buffer, returning `(visible, hidden)`.
    pub fn into_surfaces(self) -> (S, S) {
        (self.front, self.back)
    }
}
