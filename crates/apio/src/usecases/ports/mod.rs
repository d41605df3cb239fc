pub mod build_orchestrator;
pub mod errors;
pub mod executable_locator;
pub mod graph_reporter;
#[cfg(test)]
pub(crate) mod test_support;

pub use build_orchestrator::BuildOrchestrator;
pub use errors::OrchestratorError;
pub use executable_locator::ExecutableLocator;
pub use graph_reporter::GraphReporter;
