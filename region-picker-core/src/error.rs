//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use region_picker_provider::HierarchyLevel;

use crate::types::SkipReason;

// Re-export library error type
pub use region_picker_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A fetch was refused by the skip rules before any I/O
    #[error("Fetch skipped for {level}: {reason}")]
    FetchSkipped {
        level: HierarchyLevel,
        reason: SkipReason,
    },

    /// Submit was attempted before every level was committed
    #[error("Incomplete selection: {0} not selected")]
    IncompleteSelection(HierarchyLevel),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Source error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::FetchSkipped { .. } | Self::IncompleteSelection(_) | Self::ValidationError(_) => {
                true
            }
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_converts() {
        let err: CoreError = ProviderError::NotFound {
            provider: "rest".to_string(),
            resource: "regency 9999".to_string(),
            raw_message: None,
        }
        .into();
        assert!(matches!(err, CoreError::Provider(_)));
        assert!(err.is_expected());
    }

    #[test]
    fn network_failure_is_unexpected() {
        let err = CoreError::Provider(ProviderError::NetworkError {
            provider: "rest".to_string(),
            detail: "connection refused".to_string(),
        });
        assert!(!err.is_expected());
    }

    #[test]
    fn skipped_display_names_level() {
        let err = CoreError::FetchSkipped {
            level: HierarchyLevel::Regency,
            reason: SkipReason::MissingParent,
        };
        assert_eq!(
            err.to_string(),
            "Fetch skipped for regency: parent not selected"
        );
        assert!(err.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::IncompleteSelection(HierarchyLevel::Village));
        assert!(
            matches!(&json, Ok(v) if v["code"] == "IncompleteSelection" && v["details"] == "village"),
            "unexpected: {json:?}"
        );
    }
}
