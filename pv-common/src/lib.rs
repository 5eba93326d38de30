pub mod config;
pub mod controller;
pub mod error;
pub mod pipeline;
pub mod project;
pub mod seek;
pub mod status;
pub mod timecode;

pub use config::ViewerConfig;
pub use controller::{Schedule, ViewerController};
pub use error::ViewerError;
pub use pipeline::{MediaPipeline, RunState};
pub use project::Project;
pub use status::PlaybackStatus;

/// Requests coming from the transport buttons under the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Play,
    TogglePlay,
    Pause,
    Stop,
    SeekBackward,
    SeekForward,
    GoToStart,
    GoToEnd,
}
