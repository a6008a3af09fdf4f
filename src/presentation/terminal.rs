//! Terminal capability detection
//!
//! Reporters only need two answers: may they colour stdout, and may they
//! print unicode symbols. Both are derived from whether stdout is a tty and
//! a handful of conventional environment variables.

use is_terminal::IsTerminal;

use crate::config::ColorMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
}

impl TerminalCapabilities {
    /// Whether to colour output under the requested mode.
    pub fn use_color(&self, mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => self.supports_color,
        }
    }
}

/// Inspect the real process environment and stdout.
pub fn detect_capabilities() -> TerminalCapabilities {
    let env = |key: &str| std::env::var(key).ok();
    capabilities_from(&env, std::io::stdout().is_terminal())
}

fn capabilities_from(env: &dyn Fn(&str) -> Option<String>, is_tty: bool) -> TerminalCapabilities {
    let dumb = env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));

    // https://no-color.org and https://bixense.com/clicolors
    let forced = env("CLICOLOR_FORCE").is_some_and(|v| v != "0");
    let disabled = env("NO_COLOR").is_some_and(|v| !v.is_empty());

    TerminalCapabilities {
        is_tty,
        supports_color: !disabled && (forced || (is_tty && !dumb)),
        supports_unicode: !dumb && locale_is_utf8(env),
    }
}

/// The first locale variable that is set decides; an unset locale is
/// assumed to be UTF-8.
fn locale_is_utf8(env: &dyn Fn(&str) -> Option<String>) -> bool {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .find_map(|key| env(key).filter(|v| !v.is_empty()));

    match locale {
        None => true,
        Some(value) => {
            let value = value.to_ascii_lowercase();
            value.contains("utf-8") || value.contains("utf8")
        }
    }
}
