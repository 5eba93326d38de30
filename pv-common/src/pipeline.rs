use std::time::Duration;

use crate::ViewerError;

/// Run state of a media pipeline, independent of the framework driving it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Null,
    Ready,
    Paused,
    Playing,
}

/// The primitives the viewer needs from a multimedia framework.
///
/// The viewer only ever owns a two element chain (source, sink) so the
/// surface is kept deliberately small: element creation, bin membership,
/// linking, run state, surface binding, bus pumping and seeking.
pub trait MediaPipeline {
    type Element;
    /// Native drawing surface the sink renders into.
    type Surface;

    fn make_element(&self, factory: &str, name: &str) -> Result<Self::Element, ViewerError>;

    fn add(&self, element: &Self::Element) -> Result<(), ViewerError>;

    fn link(&self, src: &Self::Element, dest: &Self::Element) -> Result<(), ViewerError>;

    fn set_run_state(&self, state: RunState) -> Result<(), ViewerError>;

    /// Current run state. Must not block on pending transitions.
    fn run_state(&self) -> RunState;

    /// Whether a requested run state has not been reached or aborted yet.
    fn is_transitioning(&self) -> bool;

    fn attach_surface(&self, sink: &Self::Element, surface: &Self::Surface);

    /// Advance the pipeline by one step of the host loop.
    fn iterate(&self);

    fn position(&self) -> Option<Duration>;

    fn duration(&self) -> Option<Duration>;

    fn seek(&self, position: Duration) -> Result<(), ViewerError>;
}
