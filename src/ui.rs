//! Output formatting and color utilities for the starter CLI.

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("STARTER_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Red for errors
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_is_quiet_unset() {
        std::env::remove_var("STARTER_QUIET");
        assert!(!is_quiet());
    }

    #[test]
    #[serial]
    fn test_is_quiet_enabled() {
        std::env::set_var("STARTER_QUIET", "1");
        assert!(is_quiet());
        std::env::set_var("STARTER_QUIET", "true");
        assert!(is_quiet());
        std::env::remove_var("STARTER_QUIET");
    }

    #[test]
    #[serial]
    fn test_is_quiet_disabled_value() {
        std::env::set_var("STARTER_QUIET", "0");
        assert!(!is_quiet());
        std::env::remove_var("STARTER_QUIET");
    }
}
