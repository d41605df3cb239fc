#![deny(clippy::all)]
mod config;
mod path_locator;
mod scons;

pub use config::BuildConfig;
pub use path_locator::SystemPathLocator;
pub use scons::SconsOrchestrator;
