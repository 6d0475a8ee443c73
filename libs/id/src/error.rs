//! Error types for identifier generation and checksum calculation.

use thiserror::Error;

/// Errors that can occur when selecting a generator or computing check digits.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// No family tag was configured.
    #[error("no ID type configured")]
    MissingConfiguration,

    /// The configured family tag does not name a known family.
    #[error("unsupported ID type '{value}': expected one of {}", .supported.join(", "))]
    UnsupportedIdType {
        value: String,
        supported: Vec<&'static str>,
    },

    /// A checksum payload violates the family's length or alphabet rules.
    #[error("invalid {family} payload: {reason}")]
    InvalidPayload {
        family: &'static str,
        reason: String,
    },

    /// The checksum calculator rejected a payload produced during generation.
    #[error("failed to compute {family} checksum")]
    ChecksumComputationFailed {
        family: &'static str,
        #[source]
        source: Box<IdError>,
    },
}

impl IdError {
    /// Returns a stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            IdError::MissingConfiguration => "missing_configuration",
            IdError::UnsupportedIdType { .. } => "unsupported_id_type",
            IdError::InvalidPayload { .. } => "invalid_payload",
            IdError::ChecksumComputationFailed { .. } => "checksum_computation_failed",
        }
    }

    /// Returns true if this error stems from the family tag configuration.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            IdError::MissingConfiguration | IdError::UnsupportedIdType { .. }
        )
    }

    pub(crate) fn invalid_payload(family: &'static str, reason: impl Into<String>) -> Self {
        IdError::InvalidPayload {
            family,
            reason: reason.into(),
        }
    }

    pub(crate) fn checksum_failed(family: &'static str, source: IdError) -> Self {
        IdError::ChecksumComputationFailed {
            family,
            source: Box::new(source),
        }
    }
}
