/// A lightweight, serializable snapshot of the smoothing state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressState {
    pub target: f64,
    pub current: f64,
    pub velocity: f64,
}

/// A combined snapshot of the engine's progress + asset readiness.
///
/// This is useful for restoring an animation across remounts or sessions
/// without coupling the engine to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineState {
    pub progress: ProgressState,
    pub total_frames: Option<u32>,
}
