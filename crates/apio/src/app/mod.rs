//! CLI application layer and composition root wiring.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

pub mod commands;
pub mod handlers;

use crate::adapters::presenter;
use crate::app::commands::Cli;
use crate::app::commands::Commands;
use crate::usecases::GraphError;
use apio_common::color_init;
use apio_common::telemetry;

const FAILURE_EXIT_CODE: i32 = 1;

pub struct Application;

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

impl Application {
    pub fn new() -> Self {
        Self
    }

    /// Parses the command line and returns the process exit code.
    pub fn run(&self) -> Result<i32> {
        let cli = Cli::parse();
        let verbose = match &cli.command {
            Commands::Graph(args) => args.verbose,
        };
        let _telemetry = telemetry::init_tracing(if verbose { "debug" } else { "warn" });
        color_init(cli.no_color);
        debug!(command = ?cli.command, "CLI command parsed");

        let exit_code = match self.execute(&cli) {
            Ok(exit_code) => exit_code,
            Err(e) => self.handle_error(e),
        };
        Ok(exit_code)
    }

    fn execute(&self, cli: &Cli) -> Result<i32> {
        match &cli.command {
            Commands::Graph(args) => handlers::handle_graph(args),
        }
    }

    fn handle_error(&self, e: anyhow::Error) -> i32 {
        debug!(error = %e, "Command failed");

        let Some(graph_error) = find_error::<GraphError>(&e) else {
            presenter::present_error(&format!("{e:#}"), None);
            return FAILURE_EXIT_CODE;
        };

        match graph_error {
            GraphError::DotNotFound { .. } => presenter::present_dot_missing(),
            GraphError::Orchestrator(_) => presenter::present_error(
                &graph_error.to_string(),
                graph_error.suggestion().as_deref(),
            ),
        }
        graph_error.exit_code()
    }
}

fn find_error<T: std::error::Error + 'static>(error: &anyhow::Error) -> Option<&T> {
    error.chain().find_map(|source| source.downcast_ref::<T>())
}
