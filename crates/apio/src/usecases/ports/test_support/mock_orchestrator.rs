//! Mock build orchestrator that records every graph call.

use std::sync::Mutex;

use crate::domain::GraphOptions;
use crate::usecases::ports::BuildOrchestrator;
use crate::usecases::ports::OrchestratorError;

#[derive(Debug, Clone, Copy)]
pub enum MockFailure {
    Spawn,
    Terminated,
}

pub struct MockOrchestrator {
    exit_code: i32,
    failure: Option<MockFailure>,
    calls: Mutex<Vec<GraphOptions>>,
}

impl MockOrchestrator {
    pub fn returning(exit_code: i32) -> Self {
        Self {
            exit_code,
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(failure: MockFailure) -> Self {
        Self {
            exit_code: 0,
            failure: Some(failure),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<GraphOptions> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl BuildOrchestrator for MockOrchestrator {
    fn graph(&self, options: &GraphOptions) -> Result<i32, OrchestratorError> {
        self.calls.lock().unwrap().push(options.clone());
        match self.failure {
            None => Ok(self.exit_code),
            Some(MockFailure::Spawn) => Err(OrchestratorError::Spawn {
                program: "mock-scons".to_string(),
                reason: "not installed".to_string(),
            }),
            Some(MockFailure::Terminated) => Err(OrchestratorError::Terminated {
                program: "mock-scons".to_string(),
            }),
        }
    }
}
