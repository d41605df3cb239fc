use crate::domain::GraphOptions;
use crate::usecases::ports::OrchestratorError;

/// Build manager bound to one project directory.
///
/// `Ok` carries the build's own exit code, which may be non-zero. `Err` is
/// reserved for failures that would otherwise abort the whole process.
pub trait BuildOrchestrator: Send + Sync {
    fn graph(&self, options: &GraphOptions) -> Result<i32, OrchestratorError>;
}
