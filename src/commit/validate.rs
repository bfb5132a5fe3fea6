// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Input-time checks for composer answers.

use crate::error::ValidationError;

/// Subject must be non-empty, start uppercase, and not end with a period.
pub fn validate_subject(subject: &str) -> Result<(), ValidationError> {
    let subject = subject.trim();

    match subject.chars().next() {
        None => Err(ValidationError::EmptySubject),
        Some(first) if !first.is_uppercase() => Err(ValidationError::SubjectNotCapitalized),
        Some(_) if subject.ends_with('.') => Err(ValidationError::SubjectTrailingPeriod),
        Some(_) => Ok(()),
    }
}

/// A breaking change needs a description.
pub fn validate_breaking(note: &str) -> Result<(), ValidationError> {
    if note.trim().is_empty() {
        Err(ValidationError::EmptyBreaking)
    } else {
        Ok(())
    }
}
