use thiserror::Error;

use crate::RunState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    #[error("Failed to create element from factory `{factory}`")]
    ElementCreation { factory: String },

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error("Unable to set the pipeline to the `{state:?}` state")]
    StateChange { state: RunState },
}
