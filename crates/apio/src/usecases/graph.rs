//! Graph use case: check for `dot`, then hand the build to the orchestrator.

use std::sync::Arc;

use crate::domain::DOT_EXECUTABLE;
use crate::domain::DotCheck;
use crate::domain::GraphOutput;
use crate::domain::GraphRequest;
use crate::usecases::GraphError;
use crate::usecases::ports::BuildOrchestrator;
use crate::usecases::ports::ExecutableLocator;
use crate::usecases::ports::GraphReporter;

pub trait GraphUseCase: Send + Sync {
    fn execute(&self, request: &GraphRequest) -> Result<GraphOutput, GraphError>;
}

pub struct GraphUseCaseImpl {
    locator: Arc<dyn ExecutableLocator>,
    orchestrator: Arc<dyn BuildOrchestrator>,
    reporter: Arc<dyn GraphReporter>,
}

impl GraphUseCaseImpl {
    pub fn new(
        locator: Arc<dyn ExecutableLocator>,
        orchestrator: Arc<dyn BuildOrchestrator>,
        reporter: Arc<dyn GraphReporter>,
    ) -> Self {
        Self {
            locator,
            orchestrator,
            reporter,
        }
    }

    fn check_dot(&self, force: bool) -> Result<DotCheck, GraphError> {
        match self.locator.find(DOT_EXECUTABLE) {
            Some(path) => Ok(DotCheck::Found(path)),
            None if force => {
                self.reporter.dot_check_skipped();
                Ok(DotCheck::Skipped)
            }
            None => Err(GraphError::DotNotFound {
                executable: DOT_EXECUTABLE.to_string(),
            }),
        }
    }
}

impl GraphUseCase for GraphUseCaseImpl {
    fn execute(&self, request: &GraphRequest) -> Result<GraphOutput, GraphError> {
        let dot_check = self.check_dot(request.force())?;

        let options = request.options();
        let exit_code = self.orchestrator.graph(&options)?;

        Ok(GraphOutput {
            exit_code,
            dot_check,
        })
    }
}
