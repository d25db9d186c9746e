use serde::{Deserialize, Serialize};

/// Unified error type for all region source operations.
///
/// Each variant includes a `provider` field identifying which source produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Transient Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError) : network connectivity issues
/// - [`Timeout`](Self::Timeout) : request timed out
/// - [`RateLimited`](Self::RateLimited) : API rate limit exceeded
///
/// Retries are off unless [`RequestContext::max_retries`](crate::RequestContext::max_retries)
/// is set; by default the user retypes to try again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Source that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Source that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Source that produced the error.
        provider: String,
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The session token is missing, invalid or expired.
    InvalidCredentials {
        /// Source that produced the error.
        provider: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated user lacks permission for the requested resource.
    PermissionDenied {
        /// Source that produced the error.
        provider: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The requested region (or the endpoint itself) does not exist.
    NotFound {
        /// Source that produced the error.
        provider: String,
        /// What was looked up, e.g. `"regency 3273"`.
        resource: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter is invalid (unknown level, malformed base URL, etc.).
    InvalidParameter {
        /// Source that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse the API response or a dataset file.
    ParseError {
        /// Source that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the API.
    ///
    /// Catch-all for status codes and envelope codes not mapped to a specific variant.
    Unknown {
        /// Source that produced the error.
        provider: String,
        /// Raw error code (envelope `code` or HTTP status), if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::NotFound { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// Whether the failure is transient (network, timeout, rate limit).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::NotFound {
                provider,
                resource,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] {resource} not found: {msg}")
                } else {
                    write!(f, "[{provider}] {resource} not found")
                }
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_code,
                raw_message,
            } => match raw_code {
                Some(code) => write!(f, "[{provider}] {raw_message} (code {code})"),
                None => write!(f, "[{provider}] {raw_message}"),
            },
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "rest".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[rest] Network error: connection refused");
    }

    #[test]
    fn display_not_found_with_message() {
        let e = ProviderError::NotFound {
            provider: "rest".to_string(),
            resource: "regency 3273".to_string(),
            raw_message: Some("Data tidak ditemukan".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[rest] regency 3273 not found: Data tidak ditemukan"
        );
    }

    #[test]
    fn display_rate_limited_with_retry_after() {
        let e = ProviderError::RateLimited {
            provider: "rest".to_string(),
            retry_after: Some(5),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[rest] Rate limited (retry after 5s)");
    }

    #[test]
    fn display_unknown_with_code() {
        let e = ProviderError::Unknown {
            provider: "rest".to_string(),
            raw_code: Some("500".to_string()),
            raw_message: "Server Error".to_string(),
        };
        assert_eq!(e.to_string(), "[rest] Server Error (code 500)");
    }

    #[test]
    fn expected_vs_unexpected() {
        let not_found = ProviderError::NotFound {
            provider: "memory".to_string(),
            resource: "province 99".to_string(),
            raw_message: None,
        };
        let parse = ProviderError::ParseError {
            provider: "rest".to_string(),
            detail: "eof".to_string(),
        };
        assert!(not_found.is_expected());
        assert!(!parse.is_expected());
    }

    #[test]
    fn transient_classification() {
        let timeout = ProviderError::Timeout {
            provider: "rest".to_string(),
            detail: "30s".to_string(),
        };
        let denied = ProviderError::PermissionDenied {
            provider: "rest".to_string(),
            raw_message: None,
        };
        assert!(timeout.is_transient());
        assert!(!denied.is_transient());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ProviderError::InvalidCredentials {
            provider: "rest".to_string(),
            raw_message: None,
        };
        let json = serde_json::to_value(&e);
        assert!(
            matches!(&json, Ok(v) if v["code"] == "InvalidCredentials" && v["provider"] == "rest"),
            "unexpected: {json:?}"
        );
    }
}
