//! # Starter - Module Starter Template
//!
//! A minimal scaffold meant to be copied into a new project and filled in
//! with domain logic. The library exposes a single entry point,
//! [`template::execute_template`], which validates an options record and
//! returns a deterministic result record. The `starter` binary wraps it in
//! a small CLI.
//!
//! ## Modules
//!
//! - [`template`] - The template executor: options, result, and validation
//! - [`ui`] - Colored output helpers and quiet-mode detection
//!
//! ## Example
//!
//! ```
//! use starter::template::{execute_template, TemplateOptions};
//!
//! let options = TemplateOptions::new("hello").dry_run(true);
//! let result = execute_template(&options).expect("non-empty input");
//!
//! assert!(result.success);
//! assert_eq!(result.message, "Processed: hello (dry-run)");
//! ```

pub mod template;
pub mod ui;

/// Generate a UTC timestamp in ISO 8601 format: `YYYY-MM-DDTHH:MM:SSZ`
///
/// Uses `chrono::Utc::now()` so the timestamp is truly in UTC, not local
/// time with a misleading `Z` suffix.
pub fn utc_now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
