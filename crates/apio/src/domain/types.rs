//! Graph request and the options payload handed to the build orchestrator.

use std::path::{Path, PathBuf};

/// Graphviz renderer the graph command depends on.
pub const DOT_EXECUTABLE: &str = "dot";

/// Per-stage verbosity flags understood by the build orchestrator.
///
/// The graph command only drives the graph stage, so synthesis (`yosys`) and
/// place-and-route (`pnr`) tracing stay off whatever `--verbose` says.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerboseOptions {
    pub all: bool,
    pub yosys: bool,
    pub pnr: bool,
}

impl VerboseOptions {
    pub fn for_graph(verbose: bool) -> Self {
        Self {
            all: verbose,
            yosys: false,
            pnr: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphOptions {
    pub verbose: VerboseOptions,
    /// Empty means the project's default top module.
    pub top_module: String,
}

#[derive(Debug, Clone)]
pub struct GraphRequest {
    project_dir: PathBuf,
    top_module: String,
    force: bool,
    verbose: bool,
}

impl GraphRequest {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            top_module: String::new(),
            force: false,
            verbose: false,
        }
    }

    pub fn with_top_module(mut self, top_module: impl Into<String>) -> Self {
        self.top_module = top_module.into();
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn top_module(&self) -> &str {
        &self.top_module
    }

    pub fn force(&self) -> bool {
        self.force
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn options(&self) -> GraphOptions {
        GraphOptions {
            verbose: VerboseOptions::for_graph(self.verbose),
            top_module: self.top_module.clone(),
        }
    }
}

/// Outcome of the `dot` availability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotCheck {
    Found(PathBuf),
    /// `dot` was missing and `--force` let the command continue.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphOutput {
    pub exit_code: i32,
    pub dot_check: DotCheck,
}
