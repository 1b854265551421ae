//! Terminal logging with colored module prefixes.
//!
//! # Example
//!
//! ```ignore
//! log!("load"; "found {} articles", count);
//! log!("error"; "articles/draft.md: missing field `title`");
//! ```

use colored::{ColoredString, Colorize};
use crossterm::terminal::size;
use std::{
    io::{Write, stderr},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Length of brackets around module name: "[]"
const BRACKET_LEN: usize = 2;
/// Space after prefix: "[module] " <- this space
const SPACE_AFTER_PREFIX: usize = 1;

/// Total prefix length for a module name: `[`, `]` and the trailing space.
#[inline]
const fn calc_prefix_len(module_len: usize) -> usize {
    module_len + BRACKET_LEN + SPACE_AFTER_PREFIX
}

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120))
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix to stderr.
///
/// Stdout is reserved for command output such as `--json` results.
pub fn log(module: &str, message: &str) {
    let line = render_line(module, message, get_terminal_width() as usize);

    let mut stderr = stderr().lock();
    writeln!(stderr, "{line}").ok();
    stderr.flush().ok();
}

/// Format one log line for a terminal `width` columns wide.
///
/// Single-line messages are truncated to fit, except for `warn` and `error`
/// whose text is the diagnosis itself. Multiline messages are kept as-is.
fn render_line(module: &str, message: &str, width: usize) -> String {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    if message.contains('\n') || matches!(module_lower.as_str(), "warn" | "error") {
        return format!("{prefix} {message}");
    }

    let max_msg_len = width.saturating_sub(calc_prefix_len(module.len()));
    format!("{prefix} {}", truncate_str(message, max_msg_len))
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "load" | "check" => prefix.bright_blue().bold(),
        "export" => prefix.bright_green().bold(),
        "warn" => prefix.bright_magenta().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within `max_len` bytes.
///
/// Ensures the result is valid UTF-8 by finding the nearest character boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_prefix_len() {
        // "load" -> "[load] " = 4 + 2 + 1 = 7
        assert_eq!(calc_prefix_len(4), 7);
        assert_eq!(calc_prefix_len(0), 3);
    }

    #[test]
    fn test_truncate_str_short_string() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_str_needs_truncation() {
        assert_eq!(truncate_str("hello world", 5), "hello");
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn test_truncate_str_unicode_boundary() {
        // "新特性" is 9 bytes (3 bytes per char)
        assert_eq!(truncate_str("新特性", 4), "新");
        assert_eq!(truncate_str("新特性", 6), "新特");
        assert_eq!(truncate_str("a新b", 3), "a");
    }

    #[test]
    fn test_render_line_truncates_info() {
        colored::control::set_override(false);
        let line = render_line("load", &"x".repeat(100), 20);
        // "[load] " takes 7 columns
        assert_eq!(line, format!("[load] {}", "x".repeat(13)));
    }

    #[test]
    fn test_render_line_keeps_warning_reason() {
        colored::control::set_override(false);
        let path = format!("/tmp/site/content/articles/{}/post.md", "a".repeat(120));
        let message = format!("skipped {path}: article is missing required field `title`");

        let line = render_line("warn", &message, 80);
        assert!(line.ends_with("missing required field `title`"));
        assert!(render_line("error", &message, 80).contains(&path));
    }

    #[test]
    fn test_render_line_multiline_untouched() {
        colored::control::set_override(false);
        let line = render_line("load", "first\nsecond line that is long", 10);
        assert_eq!(line, "[load] first\nsecond line that is long");
    }

    #[test]
    fn test_colorize_prefix_wraps_module() {
        let prefix = colorize_prefix("load", "load");
        assert!(prefix.to_string().contains("[load]"));
    }
}
