//! Adapter utilities for the `scrollmotion` crate.
//!
//! The `scrollmotion` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides small, framework-neutral helpers commonly needed
//! to wire the engine to a real page:
//!
//! - [`AnimationSurface`]: the boundary to a loaded animation asset/player
//!   (`total_frames`, one-shot `seek`, visibility)
//! - [`DoubleBuffer`]: two alternating surfaces so the visible one is never
//!   the one being painted
//! - [`Controller`]: the per-frame workflow — coalesces scroll/resize events
//!   to one geometry read per tick, drives the engine, commits frames, and
//!   releases everything on detach
//!
//! This crate is intentionally framework-agnostic (no DOM/wasm bindings).
#![forbid(unsafe_code)]

mod buffer;
mod controller;
mod surface;


pub use buffer::DoubleBuffer;
pub use controller::{Buffering, Controller};
pub use surface::AnimationSurface;
