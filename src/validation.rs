//! Input validation for task data.

use crate::error::{PlannerError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Maximum allowed length for a task or user name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum allowed length for a reminder address.
pub const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// Validates a name and returns it trimmed.
pub fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PlannerError::Validation("Name cannot be blank".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(PlannerError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(name.to_string())
}

/// Trims an optional reminder address; blank means no address.
pub fn normalize_email(email: Option<&str>) -> Option<String> {
    email
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
}

/// Validates the shape of a reminder address typed by a user.
///
/// Blank input is accepted and means "no reminders".
pub fn validate_email(email: &str) -> Result<Option<String>> {
    let Some(email) = normalize_email(Some(email)) else {
        return Ok(None);
    };
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(PlannerError::Validation(format!(
            "Email exceeds maximum length of {} characters",
            MAX_EMAIL_LENGTH
        )));
    }
    if !EMAIL_RE.is_match(&email) {
        return Err(PlannerError::Validation(format!(
            "'{}' does not look like an email address",
            email
        )));
    }
    Ok(Some(email))
}
