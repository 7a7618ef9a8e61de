//! # Phone Auth
//!
//! Async client library for a phone number authentication (OTP) API.
//!
//! The client sends a verification code to a phone number, checks the code
//! the user entered, and requests a renewed code when needed. Transient
//! network failures are retried transparently with exponential backoff, and
//! every failure mode is normalized into the closed [`Error`] taxonomy.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use phone_auth::{AuthenticateOptions, Client, DeviceType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(
//!         "7cc75ba7-2140-4b36-9e74-56e8aae59f6c", // customer UUID
//!         "your_api_key",
//!     )?;
//!
//!     // Send a code
//!     let auth = client
//!         .authenticate(AuthenticateOptions {
//!             phone_number: "+33612345678".to_string(),
//!             device_type: Some(DeviceType::Ios),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     // Verify what the user typed
//!     let check = client.check(&auth.authentication_uuid, "123456").await?;
//!     println!("check status: {:?}", check.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Client                 (validate input, normalize errors)
//!    │
//!    ▼
//! Api                    (POST + api key header, backoff retries, cancellation)
//!    │
//!    ▼
//! ApiResponse<T>         (success / domain error / transport error)
//! ```
//!
//! ## Features
//!
//! - `tracing` - tracing instrumentation on client operations (enabled by
//!   default)

pub mod client;
pub mod errors;
pub mod log;
pub mod retry;
pub mod status;

mod api;

// Re-export commonly used types at the crate root
pub use client::{
    AuthenticateOptions, Authentication, Check, Client, ClientBuilder, DEFAULT_BASE_URL,
    DeviceType, Retry,
};
pub use errors::Error;
pub use log::{Level, LeveledLogger, NullLogger, StderrLogger};
pub use retry::RetryConfig;
pub use status::{AuthStatus, CheckStatus, RetryStatus};

// Re-exported so callers don't need a direct tokio-util dependency to cancel
// operations.
pub use tokio_util::sync::CancellationToken;
