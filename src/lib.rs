#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod billing_request_flows;
pub mod codec;
#[cfg(feature = "client")]
pub mod config;
pub mod error;
pub mod field;
pub mod refunds;
pub(crate) mod serde_helpers;
pub mod types;

#[cfg(feature = "client")]
use backoff::{ExponentialBackoff, backoff::Backoff as _};
#[cfg(feature = "client")]
use reqwest::{
    Method, Request, StatusCode,
    header::{self, HeaderMap, HeaderName, HeaderValue},
};
#[cfg(feature = "client")]
use secrecy::ExposeSecret as _;
#[cfg(feature = "client")]
use url::Url;

#[cfg(feature = "client")]
use crate::codec::Resource;
#[cfg(feature = "client")]
pub use crate::config::{Config, RetryConfig};
use crate::error::Error;
#[cfg(feature = "client")]
use crate::error::{ApiError, ApiErrorEnvelope, Status};

pub type Result<T> = std::result::Result<T, Error>;

/// Base URL of the live environment.
pub const LIVE_URL: &str = "https://api.gocardless.com";

/// Base URL of the sandbox environment <https://manage-sandbox.gocardless.com>
pub const SANDBOX_URL: &str = "https://api-sandbox.gocardless.com";

/// API version sent in the `GoCardless-Version` header.
pub const API_VERSION: &str = "2015-07-06";

pub const ACCESS_TOKEN_VAR: &str = "GOCARDLESS_ACCESS_TOKEN";

/// Header carrying the idempotency key of creation requests.
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

#[cfg(feature = "client")]
const VERSION_HEADER: HeaderName = HeaderName::from_static("gocardless-version");

#[cfg(feature = "client")]
const USER_AGENT: &str = concat!("gocardless-client-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Parses `host`, making sure its path ends with `/` so resource paths join underneath it.
#[cfg(feature = "client")]
pub(crate) fn base_url(host: &str) -> Result<Url> {
    let mut url = Url::parse(host)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Builds the [`reqwest::Client`] shared by a resource client, with authentication and version
/// headers set on every request.
#[cfg(feature = "client")]
pub(crate) fn http_client(config: &Config) -> Result<reqwest::Client> {
    let token = config.access_token().expose_secret();
    if token.trim().is_empty() {
        return Err(Error::validation("access token must not be empty"));
    }

    let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, authorization);
    headers.insert(VERSION_HEADER, HeaderValue::from_static(API_VERSION));
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    Ok(reqwest::Client::builder()
        .default_headers(headers)
        .build()?)
}

/// A fresh random idempotency key.
#[cfg(feature = "client")]
pub(crate) fn idempotency_key() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Whether sending `request` twice is safe: idempotent methods, or creations carrying an
/// idempotency key.
#[cfg(feature = "client")]
fn is_replayable(request: &Request) -> bool {
    matches!(
        *request.method(),
        Method::GET | Method::HEAD | Method::PUT | Method::DELETE
    ) || request.headers().contains_key(IDEMPOTENCY_KEY_HEADER)
}

/// Whether `error` may succeed on a retry.
#[cfg(feature = "client")]
fn is_transient(error: &Error) -> bool {
    if let Some(status) = error.downcast_ref::<Status>() {
        return matches!(
            status.status_code,
            StatusCode::INTERNAL_SERVER_ERROR
                | StatusCode::BAD_GATEWAY
                | StatusCode::SERVICE_UNAVAILABLE
                | StatusCode::GATEWAY_TIMEOUT
        );
    }

    error
        .downcast_ref::<reqwest::Error>()
        .is_some_and(|e| e.is_connect() || e.is_timeout() || e.is_request())
}

/// Sends `request`, retrying transient failures per `retry`, and decodes the enveloped
/// resource from the response.
///
/// Non-replayable requests (a `POST` without an idempotency key) are sent once. Retries reuse
/// the same request, so a creation keeps its idempotency key across attempts.
#[cfg(feature = "client")]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request, retry),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code,
            attempts
        )
    )
)]
async fn request<R: Resource>(
    client: &reqwest::Client,
    request: Request,
    retry: &RetryConfig,
) -> Result<R> {
    let replayable = is_replayable(&request);
    let mut backoff: ExponentialBackoff = retry.clone().into();
    let mut pending = request;
    let mut attempt: u32 = 1;

    loop {
        let next = if replayable && attempt < retry.max_attempts {
            pending.try_clone()
        } else {
            None
        };

        match execute::<R>(client, pending).await {
            Err(e) if is_transient(&e) => {
                let (Some(next), Some(delay)) = (next, backoff.next_backoff()) else {
                    return Err(e);
                };

                #[cfg(feature = "tracing")]
                tracing::warn!(
                    attempt,
                    delay = ?delay,
                    error = %e,
                    "retrying request after transient failure"
                );

                tokio::time::sleep(delay).await;
                pending = next;
                attempt += 1;
            }
            result => {
                #[cfg(feature = "tracing")]
                tracing::Span::current().record("attempts", attempt);

                return result;
            }
        }
    }
}

/// Message and decoded `error` envelope of a non-2xx response body. A body that is not an error
/// envelope is kept as the message; a body that could not be read is described instead.
#[cfg(feature = "client")]
fn failure_details<E: std::fmt::Display>(
    body: std::result::Result<String, E>,
) -> (String, Option<ApiError>) {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %e, "unable to read error response body");

            return (format!("unable to read response body: {e}"), None);
        }
    };

    match serde_json::from_str::<ApiErrorEnvelope>(&body) {
        Ok(envelope) => (envelope.error.message.clone(), Some(envelope.error)),
        Err(_) => (body, None),
    }
}

#[cfg(feature = "client")]
async fn execute<R: Resource>(client: &reqwest::Client, request: Request) -> Result<R> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let (message, api_error) = failure_details(response.text().await);

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            request_id = ?api_error.as_ref().and_then(|e| e.request_id.as_deref()),
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, message, api_error));
    }

    let body = response.text().await?;
    codec::decode_envelope_str(&body)
}
