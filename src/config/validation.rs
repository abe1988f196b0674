//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (port must be non-zero)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MockConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::MockConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Port 0 would ask the OS for an ephemeral port.
    #[error("port must be between 1 and 65535, got 0")]
    ZeroPort,
}

/// Check a deserialized config for values serde cannot rule out.
pub fn validate_config(config: &MockConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
