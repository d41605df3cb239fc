use std::path::PathBuf;

/// Looks up executables on the host's search path.
pub trait ExecutableLocator: Send + Sync {
    fn find(&self, name: &str) -> Option<PathBuf>;
}
