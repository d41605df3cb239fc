//! SCons-backed build orchestrator.
//!
//! Runs `scons -Q graph <variables>` in the project directory with inherited
//! stdio and forwards its exit code.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::domain::GraphOptions;
use crate::infra::BuildConfig;
use crate::usecases::ports::BuildOrchestrator;
use crate::usecases::ports::OrchestratorError;

const GRAPH_TARGET: &str = "graph";

pub struct SconsOrchestrator {
    project_dir: PathBuf,
    config: BuildConfig,
}

impl SconsOrchestrator {
    pub fn new(project_dir: impl Into<PathBuf>, config: BuildConfig) -> Self {
        Self {
            project_dir: project_dir.into(),
            config,
        }
    }

    fn program_label(&self) -> String {
        self.config.program().display().to_string()
    }
}

/// SCons command-line arguments for a graph build.
///
/// An empty top module is left out so the build script picks its default.
fn graph_args(options: &GraphOptions) -> Vec<String> {
    let mut args = vec!["-Q".to_string(), GRAPH_TARGET.to_string()];
    if !options.top_module.is_empty() {
        args.push(format!("top_module={}", options.top_module));
    }
    args.push(format!("verbose_all={}", options.verbose.all));
    args.push(format!("verbose_yosys={}", options.verbose.yosys));
    args.push(format!("verbose_pnr={}", options.verbose.pnr));
    args
}

impl BuildOrchestrator for SconsOrchestrator {
    fn graph(&self, options: &GraphOptions) -> Result<i32, OrchestratorError> {
        let args = graph_args(options);
        debug!(
            program = %self.program_label(),
            project_dir = %self.project_dir.display(),
            args = ?args,
            "Running graph build"
        );

        let status = Command::new(self.config.program())
            .args(&args)
            .current_dir(&self.project_dir)
            .status()
            .map_err(|err| OrchestratorError::Spawn {
                program: self.program_label(),
                reason: err.to_string(),
            })?;

        match status.code() {
            Some(code) => {
                debug!(code, "Graph build finished");
                Ok(code)
            }
            None => Err(OrchestratorError::Terminated {
                program: self.program_label(),
            }),
        }
    }
}
