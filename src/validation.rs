//! Input validation for timetable requests.
//!
//! Checks structural integrity of a request and its solver configuration
//! before searching. Detects:
//! - A shortlist capacity of zero
//! - Duplicate session ids within a course

use crate::models::Course;
use crate::solver::{SolverConfig, TimetableRequest};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The configured shortlist capacity (`top_n`) is zero.
    ZeroCapacity,
    /// Two sessions of the same course share an id.
    DuplicateSessionId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a request against its solver configuration.
///
/// Checks:
/// 1. `top_n` is at least 1
/// 2. Session ids are unique within each course
///
/// A course with no sessions is not an error; it simply admits no complete
/// timetable.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &TimetableRequest, config: &SolverConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.top_n == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroCapacity,
            "top_n must be at least 1",
        ));
    }

    for course in &request.courses {
        check_session_ids(course, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_session_ids(course: &Course, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for session in &course.sessions {
        if !seen.insert(session.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSessionId,
                format!(
                    "Course '{}' has duplicate session id {}",
                    course.name, session.id
                ),
            ));
        }
    }
}
