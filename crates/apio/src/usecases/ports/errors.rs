use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Failed to run '{program}': {reason}")]
    Spawn { program: String, reason: String },
    #[error("'{program}' was terminated before it exited")]
    Terminated { program: String },
}

impl OrchestratorError {
    pub fn suggestion(&self) -> String {
        match self {
            OrchestratorError::Spawn { program, .. } => format!(
                "Check that '{}' is installed, or point APIO_SCONS at the build program.",
                program
            ),
            OrchestratorError::Terminated { .. } => {
                "The build was interrupted. Run the command again.".to_string()
            }
        }
    }
}
