use thiserror::Error;

use crate::usecases::ports::OrchestratorError;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("The '{executable}' command was not found on the system path.")]
    DotNotFound { executable: String },

    #[error(transparent)]
    Orchestrator(#[from] OrchestratorError),
}

impl GraphError {
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// The missing-`dot` hint is printed as its own block, so only build
    /// failures carry a one-line suggestion.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            GraphError::DotNotFound { .. } => None,
            GraphError::Orchestrator(fatal) => Some(fatal.suggestion()),
        }
    }
}
