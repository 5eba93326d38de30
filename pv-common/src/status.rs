use crate::RunState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Playing,
    Paused,
    Stopped,
}

impl PlaybackStatus {
    pub fn play(self) -> Self {
        match self {
            Self::Paused | Self::Stopped => Self::Playing,
            Self::Playing => Self::Playing,
        }
    }

    pub fn pause(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            other => other,
        }
    }

    pub fn stop(self) -> Self {
        Self::Stopped
    }

    /// Play and pause share a single button.
    pub fn toggle(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused | Self::Stopped => Self::Playing,
        }
    }

    /// Status matching a run state the pipeline settled in on its own.
    pub fn from_run_state(state: RunState) -> Self {
        match state {
            RunState::Playing => Self::Playing,
            RunState::Paused => Self::Paused,
            RunState::Ready | RunState::Null => Self::Stopped,
        }
    }

    /// Run state the pipeline is expected to be in for this status.
    pub fn run_state(self) -> RunState {
        match self {
            Self::Playing => RunState::Playing,
            Self::Paused => RunState::Paused,
            Self::Stopped => RunState::Ready,
        }
    }
}
