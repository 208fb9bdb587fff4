// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::types::StepId;

#[derive(Error, Debug)]
pub enum StepdagError {
    /// A step lists a predecessor that is not part of the step set.
    #[error("Reference error: step '{step}' depends on unknown step '{missing}'")]
    ReferenceError { step: StepId, missing: StepId },

    /// The dependency graph has at least one cycle. `steps` holds every step
    /// that could not be ordered, in enumeration order.
    #[error("Cycle detected among steps: {}", .steps.join(", "))]
    CycleError { steps: Vec<StepId> },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Validation error{}: {reason}", .step.as_ref().map(|s| format!(" in step '{s}'")).unwrap_or_default())]
    ValidationError {
        step: Option<StepId>,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StepdagError {
    pub(crate) fn invalid_step(step: &str, reason: impl Into<String>) -> Self {
        StepdagError::ValidationError {
            step: Some(step.to_string()),
            reason: reason.into(),
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, StepdagError>;
