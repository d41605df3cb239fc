//! Mock executable locator for use case tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::usecases::ports::ExecutableLocator;

#[derive(Default)]
pub struct MockLocator {
    installed: HashMap<String, PathBuf>,
    lookups: Mutex<Vec<String>>,
}

impl MockLocator {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, path: impl Into<PathBuf>) -> Self {
        self.installed.insert(name.to_string(), path.into());
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl ExecutableLocator for MockLocator {
    fn find(&self, name: &str) -> Option<PathBuf> {
        self.lookups.lock().unwrap().push(name.to_string());
        self.installed.get(name).cloned()
    }
}
