//! Public client facade: construction, validation, and the three operations.

use crate::api::{Api, AuthRequest, CheckRequest, RetryRequest};
use crate::errors::Error;
use crate::log::{LeveledLogger, StderrLogger};
use crate::retry::RetryConfig;
use crate::status::{AuthStatus, CheckStatus, RetryStatus};
use chrono::{DateTime, Utc};
use reqwest_middleware::{ClientBuilder as MiddlewareClientBuilder, ClientWithMiddleware};
use secrecy::SecretString;
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use url::Url;
use uuid::Uuid;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.phoneauth.dev/v1";

/// Client for the phone number authentication API.
///
/// The client is stateless between calls apart from the shared HTTP
/// connection pool; it is cheap to clone and safe to share across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use phone_auth::{AuthenticateOptions, Client};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new(
///         std::env::var("PHONE_AUTH_CUSTOMER_UUID")?,
///         std::env::var("PHONE_AUTH_API_KEY")?,
///     )?;
///
///     let auth = client
///         .authenticate(AuthenticateOptions::new("+33612345678"))
///         .await?;
///     println!("challenge {} is {:?}", auth.authentication_uuid, auth.status);
///
///     let check = client.check(&auth.authentication_uuid, "123456").await?;
///     println!("check result: {:?}", check.status);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api: Arc<Api>,
    customer_uuid: String,
}

/// Builder for configuring a [`Client`].
pub struct ClientBuilder {
    customer_uuid: String,
    api_key: String,
    base_url: Option<Url>,
    max_network_retries: Option<usize>,
    retry_config: Option<RetryConfig>,
    http_client: Option<ClientWithMiddleware>,
    logger: Option<Arc<dyn LeveledLogger>>,
}

impl ClientBuilder {
    /// Create a new builder with the required credentials.
    ///
    /// `customer_uuid` is the account identifier issued during onboarding;
    /// `api_key` is the secret key paired with it.
    pub fn new(customer_uuid: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            customer_uuid: customer_uuid.into(),
            api_key: api_key.into(),
            base_url: None,
            max_network_retries: None,
            retry_config: None,
            http_client: None,
            logger: None,
        }
    }

    /// Override the API base URL. Mainly useful for testing and staging
    /// deployments; defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Set the maximum number of times a request that appears to have failed
    /// due to an intermittent problem is retried. Defaults to 3.
    pub fn max_network_retries(mut self, retries: usize) -> Self {
        self.max_network_retries = Some(retries);
        self
    }

    /// Replace the whole retry configuration (delays, factor, and count).
    pub fn retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = Some(retry_config);
        self
    }

    /// Use a custom HTTP client, e.g. to set timeouts or proxies.
    pub fn http_client(mut self, http_client: ClientWithMiddleware) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Set the logger used for diagnostics. Defaults to a stderr logger that
    /// emits warnings and errors only.
    pub fn logger(mut self, logger: Arc<dyn LeveledLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Build the [`Client`].
    ///
    /// Fails with [`Error::InvalidCustomerUuid`] if the customer UUID is not
    /// a syntactically valid UUID.
    pub fn build(self) -> Result<Client, Error> {
        if !is_valid_uuid(&self.customer_uuid) {
            return Err(Error::InvalidCustomerUuid);
        }

        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(StderrLogger::default()));

        let base_url = self
            .base_url
            .unwrap_or_else(|| Url::parse(DEFAULT_BASE_URL).expect("Invalid default URL"));

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let client = reqwest::Client::builder().build().map_err(|e| {
                    logger.error(&format!("build HTTP client: {e}"));
                    Error::Internal
                })?;
                MiddlewareClientBuilder::new(client).build()
            }
        };

        let mut retry_config = self.retry_config.unwrap_or_default();
        if let Some(retries) = self.max_network_retries {
            retry_config = retry_config.with_max_retries(retries);
        }

        let api = Api::new(
            http_client,
            base_url,
            SecretString::from(self.api_key),
            retry_config,
            logger,
        );

        Ok(Client {
            api: Arc::new(api),
            customer_uuid: self.customer_uuid,
        })
    }
}

/// Type of device requesting the authentication, used by the antispam
/// system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Android,
    Ios,
    Web,
}

impl DeviceType {
    /// Wire representation of the device type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "ANDROID",
            Self::Ios => "IOS",
            Self::Web => "WEB",
        }
    }
}

impl Display for DeviceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options for an authentication request.
///
/// Only `phone_number` is required. The other fields are optional but
/// recommended: the antispam system uses them to assess the request.
#[derive(Debug, Clone, Default)]
pub struct AuthenticateOptions {
    /// Phone number to send the code to, in international format.
    pub phone_number: String,
    /// IP address of the end user's device.
    pub ip: Option<String>,
    /// Stable identifier of the end user's device.
    pub device_id: Option<String>,
    /// Type of the end user's device.
    pub device_type: Option<DeviceType>,
    /// Version of the application requesting the authentication.
    pub app_version: Option<String>,
    /// Absolute URL called back when the challenge status changes.
    pub callback_url: Option<String>,
    /// Whether this user already authenticated successfully in the past.
    pub is_returning_user: bool,
}

impl AuthenticateOptions {
    /// Create options with only the required phone number set.
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            ..Self::default()
        }
    }
}

/// Snapshot of an authentication challenge, as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    /// Server-issued identifier of the challenge.
    pub authentication_uuid: String,
    /// Current challenge status.
    pub status: AuthStatus,
    /// When the challenge was created.
    pub created_at: DateTime<Utc>,
    /// When the challenge expires.
    pub expires_at: DateTime<Utc>,
}

/// Result of a code check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Identifier of the checked challenge.
    pub authentication_uuid: String,
    /// Verification outcome.
    pub status: CheckStatus,
}

/// Result of a retry request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retry {
    /// Identifier of the retried challenge.
    pub authentication_uuid: String,
    /// Retry outcome.
    pub status: RetryStatus,
    /// When the challenge was created.
    pub created_at: DateTime<Utc>,
    /// Earliest time the next retry is allowed.
    pub next_retry_at: DateTime<Utc>,
    /// Number of retries left for this challenge.
    pub remaining_retry: i64,
}

impl Client {
    /// Create a client with default configuration.
    pub fn new(customer_uuid: impl Into<String>, api_key: impl Into<String>) -> Result<Self, Error> {
        Self::builder(customer_uuid, api_key).build()
    }

    /// Create a builder for configuring the client.
    pub fn builder(
        customer_uuid: impl Into<String>,
        api_key: impl Into<String>,
    ) -> ClientBuilder {
        ClientBuilder::new(customer_uuid, api_key)
    }

    /// Start an authentication: send a code to a phone number.
    ///
    /// The phone number is validated locally under region-less parsing rules
    /// before any network call; so is the callback URL when one is set.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "phone_auth.authenticate", skip_all)
    )]
    pub async fn authenticate(
        &self,
        options: AuthenticateOptions,
    ) -> Result<Authentication, Error> {
        self.authenticate_inner(options, None).await
    }

    /// Like [`Client::authenticate`], aborting early if `cancel` fires.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "phone_auth.authenticate", skip_all)
    )]
    pub async fn authenticate_cancellable(
        &self,
        options: AuthenticateOptions,
        cancel: CancellationToken,
    ) -> Result<Authentication, Error> {
        self.authenticate_inner(options, Some(&cancel)).await
    }

    async fn authenticate_inner(
        &self,
        options: AuthenticateOptions,
        cancel: Option<&CancellationToken>,
    ) -> Result<Authentication, Error> {
        if !is_valid_phone_number(&options.phone_number) {
            return Err(Error::InvalidPhoneNumber);
        }

        if let Some(callback_url) = &options.callback_url {
            if !is_valid_url(callback_url) {
                return Err(Error::InvalidCallbackUrl);
            }
        }

        let request = AuthRequest {
            phone_number: options.phone_number,
            customer_uuid: self.customer_uuid.clone(),
            ip: options.ip,
            device_id: options.device_id,
            device_type: options.device_type.map(|d| d.as_str().to_owned()),
            app_version: options.app_version,
            callback_url: options.callback_url,
            is_returning_user: Some(options.is_returning_user),
        };

        let success = self
            .api
            .authentication(&request, cancel)
            .await?
            .into_result()
            .map_err(|e| Error::from(e.code))?;

        Ok(Authentication {
            authentication_uuid: success.authentication_uuid,
            status: success.status,
            created_at: success.created_at,
            expires_at: success.expires_at,
        })
    }

    /// Check a code the user entered against a challenge.
    ///
    /// `code` is passed through unvalidated; the server is authoritative on
    /// code format and validity.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "phone_auth.check",
            skip_all,
            fields(authentication_uuid = %authentication_uuid)
        )
    )]
    pub async fn check(&self, authentication_uuid: &str, code: &str) -> Result<Check, Error> {
        self.check_inner(authentication_uuid, code, None).await
    }

    /// Like [`Client::check`], aborting early if `cancel` fires.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "phone_auth.check",
            skip_all,
            fields(authentication_uuid = %authentication_uuid)
        )
    )]
    pub async fn check_cancellable(
        &self,
        authentication_uuid: &str,
        code: &str,
        cancel: CancellationToken,
    ) -> Result<Check, Error> {
        self.check_inner(authentication_uuid, code, Some(&cancel))
            .await
    }

    async fn check_inner(
        &self,
        authentication_uuid: &str,
        code: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Check, Error> {
        if !is_valid_uuid(authentication_uuid) {
            return Err(Error::InvalidAuthenticationUuid);
        }

        let request = CheckRequest {
            customer_uuid: self.customer_uuid.clone(),
            authentication_uuid: authentication_uuid.to_owned(),
            check_code: code.to_owned(),
        };

        let success = self
            .api
            .check(&request, cancel)
            .await?
            .into_result()
            .map_err(|e| Error::from(e.code))?;

        Ok(Check {
            authentication_uuid: success.authentication_uuid,
            status: success.status,
        })
    }

    /// Ask the server to send a new code for an existing challenge.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "phone_auth.retry",
            skip_all,
            fields(authentication_uuid = %authentication_uuid)
        )
    )]
    pub async fn retry(&self, authentication_uuid: &str) -> Result<Retry, Error> {
        self.retry_inner(authentication_uuid, None).await
    }

    /// Like [`Client::retry`], aborting early if `cancel` fires.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "phone_auth.retry",
            skip_all,
            fields(authentication_uuid = %authentication_uuid)
        )
    )]
    pub async fn retry_cancellable(
        &self,
        authentication_uuid: &str,
        cancel: CancellationToken,
    ) -> Result<Retry, Error> {
        self.retry_inner(authentication_uuid, Some(&cancel)).await
    }

    async fn retry_inner(
        &self,
        authentication_uuid: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Retry, Error> {
        if !is_valid_uuid(authentication_uuid) {
            return Err(Error::InvalidAuthenticationUuid);
        }

        let request = RetryRequest {
            customer_uuid: self.customer_uuid.clone(),
            authentication_uuid: authentication_uuid.to_owned(),
        };

        let success = self
            .api
            .retry(&request, cancel)
            .await?
            .into_result()
            .map_err(|e| Error::from(e.code))?;

        Ok(Retry {
            authentication_uuid: success.authentication_uuid,
            status: success.status,
            created_at: success.created_at,
            next_retry_at: success.next_retry_at,
            remaining_retry: success.remaining_retry,
        })
    }
}

fn is_valid_phone_number(number: &str) -> bool {
    match phonenumber::parse(None, number) {
        Ok(parsed) => phonenumber::is_valid(&parsed),
        Err(_) => false,
    }
}

fn is_valid_uuid(value: &str) -> bool {
    Uuid::parse_str(value).is_ok()
}

fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_number_validation() {
        assert!(is_valid_phone_number("+33612345678"));
        assert!(is_valid_phone_number("+12015550123"));

        assert!(!is_valid_phone_number("invalid_phone_number"));
        assert!(!is_valid_phone_number(""));
        assert!(!is_valid_phone_number("+999999"));
    }

    #[test]
    fn test_uuid_validation() {
        assert!(is_valid_uuid("7cc75ba7-2140-4b36-9e74-56e8aae59f6c"));
        assert!(!is_valid_uuid("invalid_customer_uuid"));
        assert!(!is_valid_uuid(""));
    }

    #[test]
    fn test_url_validation() {
        assert!(is_valid_url("https://example.com/callback"));
        assert!(is_valid_url("http://localhost:8080/hook"));

        assert!(!is_valid_url("invalid_callback_url"));
        assert!(!is_valid_url("/relative/path"));
    }

    #[test]
    fn test_device_type_wire_values() {
        assert_eq!(DeviceType::Android.as_str(), "ANDROID");
        assert_eq!(DeviceType::Ios.as_str(), "IOS");
        assert_eq!(DeviceType::Web.as_str(), "WEB");
        assert_eq!(DeviceType::Ios.to_string(), "IOS");
    }

    #[test]
    fn test_builder_rejects_invalid_customer_uuid() {
        let result = Client::builder("invalid_customer_uuid", "key").build();
        assert_eq!(result.unwrap_err(), Error::InvalidCustomerUuid);
    }

    #[test]
    fn test_builder_accepts_valid_customer_uuid() {
        let client = Client::builder("7cc75ba7-2140-4b36-9e74-56e8aae59f6c", "key").build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = Client::builder("7cc75ba7-2140-4b36-9e74-56e8aae59f6c", "super_secret")
            .build()
            .unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("super_secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
