//! Build configuration read from the environment.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::warn;

const DEFAULT_SCONS_PROGRAM: &str = "scons";

#[derive(Debug, Clone)]
pub struct BuildConfig {
    program: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl BuildConfig {
    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn from_env() -> Self {
        Self {
            program: parse_env_program("APIO_SCONS", DEFAULT_SCONS_PROGRAM),
        }
    }

    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }
}

fn parse_env_program(key: &str, default: &str) -> PathBuf {
    let value: OsString = match env::var_os(key) {
        Some(value) => value,
        None => return PathBuf::from(default),
    };
    if value.to_string_lossy().trim().is_empty() {
        warn!(key, "Empty build program config; using default");
        return PathBuf::from(default);
    }
    PathBuf::from(value)
}
