mod mock_locator;
mod mock_orchestrator;
mod mock_reporter;

pub use mock_locator::MockLocator;
pub use mock_orchestrator::{MockFailure, MockOrchestrator};
pub use mock_reporter::MockReporter;
