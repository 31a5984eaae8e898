//! A headless scroll-driven animation engine.
//!
//! For adapter-level utilities (render surfaces, double buffering), see the
//! `scrollmotion-adapter` crate.
//!
//! This crate focuses on the core math needed to drive a pre-rendered animation
//! asset in lockstep with page scroll: normalized scroll progress, pluggable
//! progress smoothing (direct, lerp, adaptive lerp, critically-damped spring),
//! and progress → frame mapping with trim ranges and shaping exponents.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - container geometry (top offset, height, viewport height) on scroll/resize
//! - a per-display-frame tick
//! - an animation sink that can seek to a (possibly fractional) frame
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod engine;
mod mapper;
mod options;
mod sampler;
mod smoothing;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use engine::Engine;
pub use mapper::{COMPLETION_SNAP, map_frame};
pub use options::{EngineOptions, OnChangeCallback};
pub use sampler::{ScrollSampler, raw_progress};
pub use smoothing::{DEFAULT_LERP_RATE, Smoothing, SmootherState};
pub use state::{EngineState, ProgressState};
pub use types::{ContainerRect, Direction, FrameRange};
