//! Generic success-or-error response envelope.

use crate::api::errors::ApiError;
use crate::api::types::ErrorResponse;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Decoded response for one endpoint call.
///
/// Success-or-error classification is identical for every endpoint; only the
/// success payload type differs, so decoding is expressed once over `T`
/// instead of per endpoint.
#[derive(Debug)]
pub(crate) enum ApiResponse<T> {
    Success(T),
    Error(ErrorResponse),
}

impl<T> ApiResponse<T> {
    /// Convert the envelope into a Result for ergonomic handling.
    pub fn into_result(self) -> Result<T, ErrorResponse> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Error(e) => Err(e),
        }
    }

    /// Check whether the envelope holds a success payload.
    #[cfg(test)]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Classify and decode a raw HTTP response.
    ///
    /// - 200 with a body matching `T` is a success.
    /// - 403 is a gateway rejection of the API key; the body is ignored.
    /// - Any other status with a `{code, message, doc_url}` body is a
    ///   server-reported domain error.
    /// - A body that matches neither expected shape is a decode failure,
    ///   whatever the status.
    pub fn from_http(status: StatusCode, body: &[u8]) -> Result<Self, ApiError> {
        if status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized);
        }

        if status == StatusCode::OK {
            let data = serde_json::from_slice::<T>(body)
                .map_err(|source| ApiError::DecodeBody { status, source })?;
            return Ok(Self::Success(data));
        }

        let error = serde_json::from_slice::<ErrorResponse>(body)
            .map_err(|source| ApiError::DecodeBody { status, source })?;
        Ok(Self::Error(error))
    }
}
