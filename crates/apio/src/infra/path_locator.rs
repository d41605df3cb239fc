//! Executable lookup over the `PATH` environment variable.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::usecases::ports::ExecutableLocator;

/// Searches the process `PATH`, or an explicit one for tests.
#[derive(Debug, Clone, Default)]
pub struct SystemPathLocator {
    path_override: Option<OsString>,
}

impl SystemPathLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_path(path: impl Into<OsString>) -> Self {
        Self {
            path_override: Some(path.into()),
        }
    }

    fn search_path(&self) -> Option<OsString> {
        self.path_override.clone().or_else(|| env::var_os("PATH"))
    }
}

impl ExecutableLocator for SystemPathLocator {
    fn find(&self, name: &str) -> Option<PathBuf> {
        let Some(path_os) = self.search_path() else {
            debug!(name, "PATH is not set");
            return None;
        };

        let exts = executable_extensions();
        let found = env::split_paths(&path_os).find_map(|dir| {
            exts.iter()
                .map(|ext| dir.join(format!("{name}{ext}")))
                .find(|candidate| is_executable(candidate))
        });

        match &found {
            Some(path) => debug!(name, path = %path.display(), "Executable found"),
            None => debug!(name, "Executable not found on PATH"),
        }
        found
    }
}

fn executable_extensions() -> Vec<String> {
    if cfg!(windows) {
        env::var("PATHEXT")
            .ok()
            .map(|value| {
                value
                    .split(';')
                    .filter(|item| !item.is_empty())
                    .map(std::string::ToString::to_string)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_else(|| vec![".EXE".to_string(), ".CMD".to_string(), ".BAT".to_string()])
    } else {
        vec![String::new()]
    }
}

#[cfg(unix)]
fn is_executable(candidate: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    candidate
        .metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(candidate: &Path) -> bool {
    candidate.is_file()
}
