use validator::ValidateEmail;

use crate::app_error::{AppError, AppResult};

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Trims a required text field and enforces a maximum length in characters.
pub fn required_text(field: &'static str, value: &str, max_chars: usize) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(field, "must not be empty"));
    }
    if trimmed.chars().count() > max_chars {
        return Err(AppError::validation(
            field,
            format!("must be at most {max_chars} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional text field; blank values collapse to `None`.
pub fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max_chars: usize,
) -> AppResult<Option<String>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(trimmed) if trimmed.chars().count() > max_chars => Err(AppError::validation(
            field,
            format!("must be at most {max_chars} characters"),
        )),
        Some(trimmed) => Ok(Some(trimmed.to_string())),
    }
}

/// Normalizes an email address, rejecting anything that is not syntactically valid.
pub fn email(field: &'static str, value: &str) -> AppResult<String> {
    if !is_valid_email(value) {
        return Err(AppError::validation(field, "must be a valid email address"));
    }
    Ok(value.trim().to_string())
}
