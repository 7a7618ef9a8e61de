//! HTTP transport: JSON POSTs with retry and cancellation.

use crate::api::errors::{ApiError, is_retryable_status};
use crate::api::response::ApiResponse;
use crate::api::types::{
    AuthRequest, AuthSuccess, CheckRequest, CheckSuccess, RetryRequest, RetrySuccess,
};
use crate::errors::RetryableError;
use crate::log::LeveledLogger;
use crate::retry::RetryConfig;
use backon::Retryable;
use reqwest::StatusCode;
use reqwest_middleware::ClientWithMiddleware;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use url::Url;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Header carrying the API key on every request.
pub(crate) const API_KEY_HEADER: &str = "x-api-key";

/// Low-level API transport.
///
/// Serializes payloads, posts them with the required headers, retries
/// transient failures with exponential backoff, and hands raw responses to
/// the [`ApiResponse`] decoder. Holds the shared connection pool; safe to use
/// from concurrent operations.
pub(crate) struct Api {
    http_client: ClientWithMiddleware,
    base_url: Url,
    api_key: SecretString,
    retry_config: RetryConfig,
    logger: Arc<dyn LeveledLogger>,
}

impl std::fmt::Debug for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Api")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("retry_config", &self.retry_config)
            .finish()
    }
}

impl Api {
    pub fn new(
        http_client: ClientWithMiddleware,
        base_url: Url,
        api_key: SecretString,
        retry_config: RetryConfig,
        logger: Arc<dyn LeveledLogger>,
    ) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
            retry_config,
            logger,
        }
    }

    /// Call the `authentication` endpoint.
    pub async fn authentication(
        &self,
        request: &AuthRequest,
        cancel: Option<&CancellationToken>,
    ) -> Result<ApiResponse<AuthSuccess>, ApiError> {
        self.request("authentication", request, cancel).await
    }

    /// Call the `check` endpoint.
    pub async fn check(
        &self,
        request: &CheckRequest,
        cancel: Option<&CancellationToken>,
    ) -> Result<ApiResponse<CheckSuccess>, ApiError> {
        self.request("check", request, cancel).await
    }

    /// Call the `retry` endpoint.
    pub async fn retry(
        &self,
        request: &RetryRequest,
        cancel: Option<&CancellationToken>,
    ) -> Result<ApiResponse<RetrySuccess>, ApiError> {
        self.request("retry", request, cancel).await
    }

    /// Post a payload and decode the response through the generic envelope.
    ///
    /// Retries are applied around the raw POST, so they are invisible to the
    /// decoder and the caller. A fired cancellation token aborts both
    /// in-flight requests and pending backoff sleeps.
    async fn request<Req, Res>(
        &self,
        path: &str,
        payload: &Req,
        cancel: Option<&CancellationToken>,
    ) -> Result<ApiResponse<Res>, ApiError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let body = serde_json::to_vec(payload).map_err(|e| {
            self.logger.error(&format!("serialize request payload: {e}"));
            ApiError::SerializeRequest(e)
        })?;

        let url = format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path);

        let send = || self.post_once(&url, &body);
        let retried = send
            .retry(self.retry_config.build_strategy())
            .when(|err: &ApiError| err.is_retryable())
            .notify(|err, after| {
                self.logger.warn(&format!(
                    "retrying {path} after transient failure: {err} (next attempt in {:.1}s)",
                    after.as_secs_f64()
                ));
                #[cfg(feature = "tracing")]
                debug!(
                    error = %err,
                    path,
                    retry_after_secs = after.as_secs_f64(),
                    "Retrying request after transient failure"
                );
            });

        let (status, bytes) = match cancel {
            Some(token) => tokio::select! {
                _ = token.cancelled() => {
                    self.logger.warn(&format!("request to {path} cancelled"));
                    return Err(ApiError::Cancelled);
                }
                result = retried => result?,
            },
            None => retried.await?,
        };

        if status != StatusCode::OK {
            self.logger
                .error(&format!("received a non-200 HTTP status {status}"));
        }

        ApiResponse::from_http(status, &bytes).inspect_err(|err| {
            if !matches!(err, ApiError::Unauthorized) {
                self.logger.error(&format!("unable to decode response: {err}"));
            }
        })
    }

    /// One POST attempt. Retryable statuses are surfaced as errors so the
    /// backoff predicate can see them.
    async fn post_once(&self, url: &str, body: &[u8]) -> Result<(StatusCode, Vec<u8>), ApiError> {
        let response = self
            .http_client
            .post(url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_vec())
            .send()
            .await?;

        let status = response.status();
        if is_retryable_status(status) {
            return Err(ApiError::TransientStatus { status });
        }

        let bytes = response.bytes().await.map_err(ApiError::ReadBody)?;
        Ok((status, bytes.to_vec()))
    }
}
