//! Terminal color helpers for diagnostics.
//!
//! Diagnostics go to stderr, so color is disabled when stderr is not a
//! terminal, when `--no-color` is passed, or when `NO_COLOR` is set.

use std::io::IsTerminal;
use std::sync::OnceLock;

static NO_COLOR: OnceLock<bool> = OnceLock::new();

pub fn init(no_color_flag: bool) {
    let _ = NO_COLOR.set(
        no_color_flag || std::env::var("NO_COLOR").is_ok() || !std::io::stderr().is_terminal(),
    );
}

fn is_disabled() -> bool {
    *NO_COLOR.get().unwrap_or(&false)
}

mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const DIM: &str = "\x1b[90m";
}

pub struct Colors;

fn wrap_with_ansi(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + text.len() + codes::RESET.len());
    out.push_str(prefix);
    out.push_str(text);
    out.push_str(codes::RESET);
    out
}

fn paint(text: &str, prefix: &str) -> String {
    if is_disabled() {
        text.to_string()
    } else {
        wrap_with_ansi(text, prefix)
    }
}

impl Colors {
    pub fn error(text: &str) -> String {
        paint(text, codes::RED)
    }

    pub fn warning(text: &str) -> String {
        paint(text, codes::YELLOW)
    }

    pub fn dim(text: &str) -> String {
        paint(text, codes::DIM)
    }
}
