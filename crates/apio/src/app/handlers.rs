use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::adapters::presenter::ConsoleReporter;
use crate::app::commands::GraphArgs;
use crate::domain::DotCheck;
use crate::domain::GraphRequest;
use crate::infra::BuildConfig;
use crate::infra::SconsOrchestrator;
use crate::infra::SystemPathLocator;
use crate::usecases::GraphUseCase;
use crate::usecases::GraphUseCaseImpl;

pub fn graph_request(args: &GraphArgs) -> GraphRequest {
    GraphRequest::new(&args.project_dir)
        .with_top_module(args.top_module.clone().unwrap_or_default())
        .with_force(args.force)
        .with_verbose(args.verbose)
}

/// Wires the production adapters and runs `apio graph`.
pub fn handle_graph(args: &GraphArgs) -> Result<i32> {
    let request = graph_request(args);
    let orchestrator = SconsOrchestrator::new(request.project_dir(), BuildConfig::from_env());
    let usecase = GraphUseCaseImpl::new(
        Arc::new(SystemPathLocator::new()),
        Arc::new(orchestrator),
        Arc::new(ConsoleReporter),
    );

    let output = usecase.execute(&request)?;
    match &output.dot_check {
        DotCheck::Found(path) => {
            debug!(dot = %path.display(), exit_code = output.exit_code, "Graph finished")
        }
        DotCheck::Skipped => {
            debug!(exit_code = output.exit_code, "Graph finished without dot check")
        }
    }
    Ok(output.exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn args(top_module: Option<&str>) -> GraphArgs {
        GraphArgs {
            project_dir: PathBuf::from("/work/blinky"),
            top_module: top_module.map(str::to_string),
            force: true,
            verbose: true,
        }
    }

    #[test]
    fn test_graph_request_from_args() {
        let request = graph_request(&args(Some("cpu")));
        assert_eq!(request.project_dir(), Path::new("/work/blinky"));
        assert_eq!(request.top_module(), "cpu");
        assert!(request.force());
        assert!(request.verbose());
    }

    #[test]
    fn test_missing_top_module_becomes_empty() {
        let request = graph_request(&args(None));
        assert_eq!(request.top_module(), "");
    }
}
