//! Transport-level errors and wire error codes.

use crate::errors::RetryableError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable rejection codes reported by the service.
///
/// Unrecognized codes deserialize to [`ErrorCode::Unknown`] so that new
/// server-side codes never break decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ErrorCode {
    InternalServerError,
    BadRequest,
    InvalidPhoneNumber,
    AccountInvalid,
    NegativeBalance,
    InvalidLine,
    UnsupportedRegion,
    InvalidAuthUuid,
    #[serde(other)]
    Unknown,
}

/// Errors produced by the transport and decoder.
///
/// These never cross the public boundary; they are normalized into
/// [`crate::Error`] by the operation facade.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// HTTP 403 from the gateway; the API key itself was rejected.
    #[error("request rejected by the gateway (HTTP 403)")]
    Unauthorized,

    /// The request payload could not be serialized to JSON.
    #[error("serialize request payload: {0}")]
    SerializeRequest(#[source] serde_json::Error),

    /// The HTTP request could not be performed.
    #[error("perform HTTP request: {0}")]
    Http(#[from] reqwest_middleware::Error),

    /// The response body could not be read.
    #[error("read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// A retryable HTTP status was still present after retries.
    #[error("received retryable HTTP status {status}")]
    TransientStatus { status: StatusCode },

    /// The response body did not match the expected success or error shape.
    #[error("decode response body (HTTP status {status}): {source}")]
    DecodeBody {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// The caller's cancellation token fired before the request completed.
    #[error("request cancelled")]
    Cancelled,
}

/// Statuses treated as transient and worth retrying.
pub(crate) fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

impl RetryableError for ApiError {
    fn is_retryable(&self) -> bool {
        match self {
            ApiError::Http(_) | ApiError::TransientStatus { .. } => true,
            ApiError::Unauthorized
            | ApiError::SerializeRequest(_)
            | ApiError::ReadBody(_)
            | ApiError::DecodeBody { .. }
            | ApiError::Cancelled => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_known_values() {
        let cases = [
            ("internal_server_error", ErrorCode::InternalServerError),
            ("bad_request", ErrorCode::BadRequest),
            ("invalid_phone_number", ErrorCode::InvalidPhoneNumber),
            ("account_invalid", ErrorCode::AccountInvalid),
            ("negative_balance", ErrorCode::NegativeBalance),
            ("invalid_line", ErrorCode::InvalidLine),
            ("unsupported_region", ErrorCode::UnsupportedRegion),
            ("invalid_auth_uuid", ErrorCode::InvalidAuthUuid),
        ];

        for (raw, expected) in cases {
            let parsed: ErrorCode = serde_json::from_str(&format!("\"{raw}\"")).unwrap();
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn test_error_code_unknown_value() {
        let parsed: ErrorCode = serde_json::from_str("\"code_from_the_future\"").unwrap();
        assert_eq!(parsed, ErrorCode::Unknown);
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_retryable_status(StatusCode::BAD_GATEWAY));
        assert!(is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_retryable_status(StatusCode::GATEWAY_TIMEOUT));

        assert!(!is_retryable_status(StatusCode::OK));
        assert!(!is_retryable_status(StatusCode::BAD_REQUEST));
        assert!(!is_retryable_status(StatusCode::FORBIDDEN));
        assert!(!is_retryable_status(StatusCode::NOT_IMPLEMENTED));
    }

    #[test]
    fn test_retry_classification() {
        assert!(
            ApiError::TransientStatus {
                status: StatusCode::SERVICE_UNAVAILABLE,
            }
            .is_retryable()
        );
        assert!(!ApiError::Unauthorized.is_retryable());
        assert!(!ApiError::Cancelled.is_retryable());
    }
}
