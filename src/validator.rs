//! Input validation for text submitted by the user.

use crate::error::{QrPrintError, Result};

/// The only scheme a submitted address may start with.
pub const REQUIRED_PREFIX: &str = "https://";

/// Reason attached to every rejected submission.
pub const REJECTION_REASON: &str = "must be an HTTPS address";

/// Outcome of validating one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The trimmed text, ready for encoding.
    Accepted(String),
    /// Why the text was refused.
    Rejected(String),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Converts into a `Result` so callers can propagate a rejection with `?`.
    pub fn into_result(self) -> Result<String> {
        match self {
            Self::Accepted(text) => Ok(text),
            Self::Rejected(reason) => Err(QrPrintError::InvalidInput { reason }),
        }
    }
}

/// Trims `raw` and accepts it only if it begins with `https://`.
///
/// No length limit is applied here; payloads too large for a symbol are
/// refused by the encoder.
///
/// # Example
///
/// ```
/// use qrprint::validator::{validate, ValidationResult};
///
/// assert_eq!(
///     validate("  https://example.com \n"),
///     ValidationResult::Accepted("https://example.com".to_string())
/// );
/// assert!(!validate("example.com").is_accepted());
/// ```
pub fn validate(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.starts_with(REQUIRED_PREFIX) {
        tracing::debug!(len = trimmed.len(), "input accepted");
        ValidationResult::Accepted(trimmed.to_string())
    } else {
        tracing::debug!("input rejected: missing {} prefix", REQUIRED_PREFIX);
        ValidationResult::Rejected(REJECTION_REASON.to_string())
    }
}
