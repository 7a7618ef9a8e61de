//! Caller-facing error taxonomy and retry classification.

use crate::api::{ApiError, ErrorCode};
use thiserror::Error;

/// Errors surfaced by client operations.
///
/// This is a closed set: every transport failure, HTTP status, and
/// server-reported error code is normalized into one of these values before
/// it crosses the public boundary. Unrecognized server codes and exhausted
/// retries both collapse into [`Error::Internal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The API key was rejected by the service gateway.
    #[error("unauthorized, please check your API key")]
    InvalidApiKey,

    /// An unclassified transport, decoding, or server failure.
    #[error("an unhandled error occurred")]
    Internal,

    /// The phone number is not a valid number under region-less parsing.
    #[error("invalid phone number")]
    InvalidPhoneNumber,

    /// The customer account identifier is not a valid UUID or was rejected.
    #[error("invalid account UUID")]
    InvalidCustomerUuid,

    /// The account balance does not allow further authentications.
    #[error("negative balance")]
    NegativeBalance,

    /// The destination region is not supported by the service.
    #[error("unsupported region")]
    UnsupportedRegion,

    /// The authentication UUID is not a valid UUID or is unknown server-side.
    #[error("invalid authentication UUID")]
    InvalidAuthenticationUuid,

    /// The callback URL is not a valid absolute URL.
    #[error("invalid callback URL")]
    InvalidCallbackUrl,
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Self::InvalidApiKey,
            _ => Self::Internal,
        }
    }
}

impl From<ErrorCode> for Error {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::InvalidPhoneNumber | ErrorCode::InvalidLine => Self::InvalidPhoneNumber,
            ErrorCode::AccountInvalid => Self::InvalidCustomerUuid,
            ErrorCode::NegativeBalance => Self::NegativeBalance,
            ErrorCode::UnsupportedRegion => Self::UnsupportedRegion,
            ErrorCode::InvalidAuthUuid => Self::InvalidAuthenticationUuid,
            ErrorCode::InternalServerError | ErrorCode::BadRequest | ErrorCode::Unknown => {
                Self::Internal
            }
        }
    }
}

/// Trait for errors that can be classified as retryable or permanent.
///
/// The transport retries an operation only while its error reports
/// `is_retryable() == true`.
pub(crate) trait RetryableError {
    /// Returns true if this error represents a transient failure that might
    /// succeed on retry.
    fn is_retryable(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        let cases = [
            (ErrorCode::InvalidPhoneNumber, Error::InvalidPhoneNumber),
            (ErrorCode::InvalidLine, Error::InvalidPhoneNumber),
            (ErrorCode::AccountInvalid, Error::InvalidCustomerUuid),
            (ErrorCode::NegativeBalance, Error::NegativeBalance),
            (ErrorCode::UnsupportedRegion, Error::UnsupportedRegion),
            (ErrorCode::InvalidAuthUuid, Error::InvalidAuthenticationUuid),
            (ErrorCode::InternalServerError, Error::Internal),
            (ErrorCode::BadRequest, Error::Internal),
            (ErrorCode::Unknown, Error::Internal),
        ];

        for (code, expected) in cases {
            assert_eq!(Error::from(code), expected);
        }
    }

    #[test]
    fn test_unauthorized_maps_to_invalid_api_key() {
        assert_eq!(Error::from(ApiError::Unauthorized), Error::InvalidApiKey);
    }

    #[test]
    fn test_other_api_errors_map_to_internal() {
        assert_eq!(Error::from(ApiError::Cancelled), Error::Internal);
        assert_eq!(
            Error::from(ApiError::TransientStatus {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            }),
            Error::Internal
        );
    }
}
