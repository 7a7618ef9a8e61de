//! Business statuses reported by the authentication service.
//!
//! The server may introduce new states at any time, so every enum here
//! deserializes unrecognized values to its `Unknown` variant instead of
//! failing the decode.

use serde::{Deserialize, Serialize};

/// Status of an authentication challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    /// A code was sent and the server is waiting for a check.
    Pending,
    /// Too many authentications were requested for this number.
    RateLimited,
    /// The request was flagged by the antispam system.
    SpamDetected,
    /// The code was successfully verified.
    Approved,
    /// The challenge was canceled server-side.
    Canceled,
    /// The challenge expired before a valid check.
    Expired,
    /// Unrecognized status value.
    #[serde(other)]
    Unknown,
}

/// Outcome of a code check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// The submitted code is correct.
    Valid,
    /// The submitted code is wrong.
    Invalid,
    /// No code was submitted for this challenge yet.
    WithoutAttempt,
    /// Too many checks were attempted.
    RateLimited,
    /// The challenge was already validated by an earlier check.
    AlreadyValidated,
    /// The challenge expired before this check.
    ExpiredAuth,
    /// Unrecognized status value.
    #[serde(other)]
    Unknown,
}

/// Outcome of a code retry request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryStatus {
    /// A new code was sent.
    Approved,
    /// The server refused to send a new code.
    Denied,
    /// No retry was attempted.
    NoAttempt,
    /// Too many retries were requested.
    RateLimited,
    /// The challenge expired before the retry.
    ExpiredAuth,
    /// The challenge was already validated.
    AlreadyValidated,
    /// Unrecognized status value.
    #[serde(other)]
    Unknown,
}
