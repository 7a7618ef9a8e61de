//! Wire request and response types.
//!
//! Field names follow the service's snake_case JSON contract. Optional
//! request fields are omitted from serialization when unset, never sent as
//! empty-string placeholders.

use crate::api::errors::ErrorCode;
use crate::status::{AuthStatus, CheckStatus, RetryStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for the `authentication` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct AuthRequest {
    pub phone_number: String,
    pub customer_uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_returning_user: Option<bool>,
}

/// Request body for the `check` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CheckRequest {
    pub customer_uuid: String,
    pub authentication_uuid: String,
    pub check_code: String,
}

/// Request body for the `retry` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RetryRequest {
    pub customer_uuid: String,
    pub authentication_uuid: String,
}

/// Success body of the `authentication` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct AuthSuccess {
    pub authentication_uuid: String,
    pub status: AuthStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Success body of the `check` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CheckSuccess {
    pub authentication_uuid: String,
    pub status: CheckStatus,
}

/// Success body of the `retry` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RetrySuccess {
    pub authentication_uuid: String,
    pub status: RetryStatus,
    pub created_at: DateTime<Utc>,
    pub next_retry_at: DateTime<Utc>,
    pub remaining_retry: i64,
}

/// Error body returned on any non-200, non-403 status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
    pub doc_url: String,
}
