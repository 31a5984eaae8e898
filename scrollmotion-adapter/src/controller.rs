use scrollmotion::{ContainerRect, Engine, EngineOptions};

use crate::{AnimationSurface, DoubleBuffer};

/// Surface configuration for a [`Controller`].
#[derive(Clone, Debug)]
pub enum Buffering<S> {
    /// One surface, sought in place on every frame change.
    Single(S),
    /// Two alternating surfaces (see [`DoubleBuffer`]).
    Double(DoubleBuffer<S>),
}

impl<S: AnimationSurface> Buffering<S> {
    fn total_frames(&self) -> Option<u32> {
        match self {
            Self::Single(s) => s.total_frames(),
            Self::Double(db) => db.total_frames(),
        }
    }
}

/// A framework-neutral controller that wraps a [`scrollmotion::Engine`] and
/// owns the per-frame workflow.
///
/// This type does not hold any UI objects beyond the surfaces it was attached
/// with. Adapters drive it by calling:
/// - `on_scroll` / `on_resize` from their event callbacks — these only store
///   the latest geometry, so native events firing faster than the display
///   refresh rate collapse to one geometry read per frame (no layout
///   thrashing)
/// - `tick(now_ms)` once per display frame — this completes any pending
///   double-buffer swap, feeds the stored geometry to the engine, steps the
///   smoother, and commits the mapped frame to the surface(s)
/// - `detach()` at unmount — after which events and ticks are inert, and no
///   further seeks or geometry reads occur
///
/// Asset readiness is discovered on the fly: each tick queries the surface's
/// `total_frames()`, so a late asset load starts producing frames without a
/// separate callback.
#[derive(Clone, Debug)]
pub struct Controller<S> {
    engine: Engine,
    surfaces: Option<Buffering<S>>,
    pending_rect: Option<(ContainerRect, u64)>,
}

impl<S: AnimationSurface> Controller<S> {
    /// Attaches the engine to a surface configuration.
    pub fn new(surfaces: Buffering<S>, options: EngineOptions) -> Self {
        Self {
            engine: Engine::new(options),
            surfaces: Some(surfaces),
            pending_rect: None,
        }
    }

    /// Attaches with a single surface.
    pub fn single(surface: S, options: EngineOptions) -> Self {
        Self::new(Buffering::Single(surface), options)
    }

    /// Attaches with a double-buffered surface pair; `front` starts visible.
    pub fn double_buffered(front: S, back: S, options: EngineOptions) -> Self {
        Self::new(
            Buffering::Double(DoubleBuffer::new(front, back)),
            options,
        )
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn is_attached(&self) -> bool {
        self.surfaces.is_some()
    }

    /// Call this from your scroll event callback.
    ///
    /// Only stores the geometry; the next `tick` consumes it. Events arriving
    /// between ticks supersede each other (latest wins).
    pub fn on_scroll(&mut self, rect: ContainerRect, now_ms: u64) {
        if self.surfaces.is_none() {
            return;
        }
        self.pending_rect = Some((rect, now_ms));
    }

    /// Call this from your resize event callback. Resizes change the same
    /// geometry a scroll does, so they share the coalescing slot.
    pub fn on_resize(&mut self, rect: ContainerRect, now_ms: u64) {
        self.on_scroll(rect, now_ms);
    }

    /// Advances the controller by one display frame.
    ///
    /// Returns the frame committed to the surface(s), or `None` when nothing
    /// could be committed (detached, engine disabled, or asset unready).
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let surfaces = self.surfaces.as_mut()?;

        // Complete last tick's swap first, so the surface painted below is
        // the one that just went off screen.
        if let Buffering::Double(db) = surfaces {
            db.finish_swap();
        }

        let total_frames = surfaces.total_frames();
        let pending = self.pending_rect.take();

        let mut frame = None;
        self.engine.batch_update(|e| {
            e.set_total_frames(total_frames);
            if let Some((rect, at_ms)) = pending {
                e.apply_scroll_event(rect, at_ms);
            }
            frame = e.tick(now_ms);
        });
        let frame = frame?;

        match surfaces {
            Buffering::Single(s) => s.seek(frame),
            Buffering::Double(db) => db.commit(frame),
        }
        Some(frame)
    }

    /// Detaches from the surfaces and drops pending work.
    ///
    /// Subsequent `on_scroll`/`on_resize`/`tick` calls are inert: no seeks,
    /// no geometry processing. Returns the surfaces for reuse, or `None` if
    /// already detached.
    pub fn detach(&mut self) -> Option<Buffering<S>> {
        self.pending_rect = None;
        self.surfaces.take()
    }
}
