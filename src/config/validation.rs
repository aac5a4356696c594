//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject probe orders that cannot select a backend deterministically
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure: BuilderConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::BuilderConfig;
use crate::factory::BackendKind;

/// A single semantic configuration problem.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("backend_order must not be empty")]
    EmptyBackendOrder,

    #[error("backend '{0}' listed more than once in backend_order")]
    DuplicateBackend(BackendKind),
}

/// Check a deserialized config for semantic problems.
pub fn validate_config(config: &BuilderConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.backend_order.is_empty() {
        errors.push(ValidationError::EmptyBackendOrder);
    }

    let mut seen: Vec<BackendKind> = Vec::new();
    for kind in &config.backend_order {
        if seen.contains(kind) {
            errors.push(ValidationError::DuplicateBackend(*kind));
        } else {
            seen.push(*kind);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
