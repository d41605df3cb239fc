#![expect(clippy::print_stderr, reason = "CLI diagnostics are emitted here")]

//! CLI diagnostics presenter.
//!
//! Text rendering is kept in `render_*` functions so it can be tested without
//! capturing stderr.

use apio_common::Colors;

use crate::usecases::ports::GraphReporter;

const PROGRAM_NAME: &str = "apio";

pub const DOT_SKIPPED_WARNING: &str = "Warning: Skipping the check for the 'dot' command.";

pub const DOT_MISSING_ERROR: &str = "Error: The 'dot' command was not found on the system path.";

pub const DOT_HELP: &str = "
The 'dot' command is part of the 'graphviz' suite. Please install
it per the instructions at https://graphviz.org/download and run
this command again. If you think that the 'dot' command is available
on the system path, you can try suppressing this error message by
adding the --force flag to the apio graph command.
";

pub fn render_dot_skipped() -> String {
    Colors::warning(DOT_SKIPPED_WARNING)
}

/// Blank line, red error, yellow remediation hint.
pub fn render_dot_missing() -> String {
    format!(
        "\n{}\n{}",
        Colors::error(DOT_MISSING_ERROR),
        Colors::warning(DOT_HELP)
    )
}

pub fn render_error(message: &str, suggestion: Option<&str>) -> String {
    let mut out = format!("{}: {} {}", PROGRAM_NAME, Colors::error("Error:"), message);
    if let Some(suggestion) = suggestion {
        out.push('\n');
        out.push_str(&format!("{} {}", Colors::dim("Suggestion:"), suggestion));
    }
    out
}

pub fn present_dot_missing() {
    eprintln!("{}", render_dot_missing());
}

pub fn present_error(message: &str, suggestion: Option<&str>) {
    eprintln!("{}", render_error(message, suggestion));
}

/// Prints use case notices to stderr as they happen.
pub struct ConsoleReporter;

impl GraphReporter for ConsoleReporter {
    fn dot_check_skipped(&self) {
        eprintln!("{}", render_dot_skipped());
    }
}
