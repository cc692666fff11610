//! Contact-form submission validation.
//!
//! The public contact endpoint is the only unauthenticated write path, so
//! its input is validated here with `validator` before anything touches
//! the database.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

/// Maximum accepted message body length.
pub const MAX_MESSAGE_CHARS: u64 = 5_000;

/// Incoming contact-form submission.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "a valid email address is required"))]
    pub email: String,
    #[validate(length(max = 200))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 5000, message = "message is required"))]
    pub message: String,
}

impl ContactSubmission {
    /// Validate the submission, trimming surrounding whitespace first.
    ///
    /// Returns a cleaned copy on success so callers never persist
    /// untrimmed values.
    pub fn validated(&self) -> Result<ContactSubmission, CoreError> {
        let cleaned = ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self
                .subject
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            message: self.message.trim().to_string(),
        };

        cleaned
            .validate()
            .map_err(|e| CoreError::Validation(flatten_errors(&e)))?;

        Ok(cleaned)
    }
}

/// Flatten validator's nested error map into a single human-readable line.
fn flatten_errors(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let msg = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{field}: {msg}")
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
