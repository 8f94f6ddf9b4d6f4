//! Template executor: validate an options record and produce a result record.
//!
//! This is the seam where domain logic belongs. The executor is pure and
//! synchronous: identical options always produce an identical result, with
//! no I/O and no shared state. Replace the body of [`execute_template`]
//! with project-specific logic while keeping the contract below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when the required `input` field is empty.
///
/// Surfaced synchronously to the caller; no retries, no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("input must be provided")]
pub struct ValidationError;

/// Options consumed by a single executor invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateOptions {
    /// Text to process. Must be non-empty.
    pub input: String,
    /// Report what would be done without doing it.
    #[serde(default)]
    pub dry_run: bool,
}

impl TemplateOptions {
    /// Create options for the given input with `dry_run` off.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            dry_run: false,
        }
    }

    /// Set the dry-run flag.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result returned by a single executor invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateResult {
    /// Whether the workflow succeeded.
    pub success: bool,
    /// Human-readable summary of what was processed.
    pub message: String,
}

/// Execute the template workflow.
///
/// Validates that `input` is non-empty, then formats a summary message.
/// Whitespace-only input is accepted; only the empty string is rejected.
pub fn execute_template(options: &TemplateOptions) -> Result<TemplateResult, ValidationError> {
    if options.input.is_empty() {
        return Err(ValidationError);
    }

    let suffix = if options.dry_run { " (dry-run)" } else { "" };
    Ok(TemplateResult {
        success: true,
        message: format!("Processed: {}{}", options.input, suffix),
    })
}
