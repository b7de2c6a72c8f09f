use reqwest::{Client as ReqwestClient, Method};
use url::Url;

use super::types::{Refund, RefundCreateRequest, RefundUpdateRequest};
use crate::codec::{self, Resource as _};
use crate::error::Error;
use crate::{Config, IDEMPOTENCY_KEY_HEADER, Result};

/// Client for the refunds endpoints.
///
/// # Example
///
/// ```no_run
/// use gocardless_client_sdk::{Config, LIVE_URL};
/// use gocardless_client_sdk::refunds::Client;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(LIVE_URL, Config::from_env()?)?;
///
/// let refund = client.get("RF123").await?;
/// println!("{:?} {:?}", refund.amount, refund.currency);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
    config: Config,
}

impl Client {
    /// Creates a new refunds client against `host`, e.g. [`LIVE_URL`](crate::LIVE_URL).
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid, the access token is empty, or the HTTP
    /// client fails to build.
    pub fn new(host: &str, config: Config) -> Result<Client> {
        Ok(Self {
            host: crate::base_url(host)?,
            client: crate::http_client(&config)?,
            config,
        })
    }

    /// Returns the host URL for the client.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    fn refund_url(&self, id: &str) -> Result<Url> {
        if id.is_empty() {
            return Err(Error::validation("refund id must not be empty"));
        }

        let mut url = self.host.join("refunds")?;
        url.path_segments_mut()
            .map_err(|()| Error::validation(format!("{} cannot be a base URL", self.host)))?
            .push(id);

        Ok(url)
    }

    /// Creates a refund of a payment.
    ///
    /// The request carries an `Idempotency-Key` header, the caller's or a random one, and is
    /// retried on transient failures with that same key. If the API reports that an earlier
    /// request with the key already created a refund, that refund is fetched and returned,
    /// unless [`Config`] is set to raise on idempotency conflicts.
    pub async fn create(&self, request: &RefundCreateRequest) -> Result<Refund> {
        let idempotency_key = request
            .idempotency_key
            .clone()
            .unwrap_or_else(crate::idempotency_key);

        let http_request = self
            .client
            .request(Method::POST, self.host.join("refunds")?)
            .header(IDEMPOTENCY_KEY_HEADER, idempotency_key)
            .json(&codec::encode_envelope(Refund::ENVELOPE, request)?)
            .build()?;

        match crate::request::<Refund>(&self.client, http_request, self.config.retry()).await {
            Err(e) if !self.config.raise_on_idempotency_conflict() => {
                let Some(id) = e.conflicting_resource_id().map(str::to_owned) else {
                    return Err(e);
                };

                #[cfg(feature = "tracing")]
                tracing::info!(id = %id, "refund already created with this idempotency key, fetching it");

                self.get(&id).await
            }
            result => result,
        }
    }

    /// Retrieves the details of an existing refund.
    pub async fn get(&self, id: &str) -> Result<Refund> {
        let http_request = self
            .client
            .request(Method::GET, self.refund_url(id)?)
            .build()?;

        crate::request(&self.client, http_request, self.config.retry()).await
    }

    /// Updates a refund object. Only `metadata` can be changed.
    pub async fn update(&self, id: &str, request: &RefundUpdateRequest) -> Result<Refund> {
        let http_request = self
            .client
            .request(Method::PUT, self.refund_url(id)?)
            .json(&codec::encode_envelope(Refund::ENVELOPE, request)?)
            .build()?;

        crate::request(&self.client, http_request, self.config.retry()).await
    }
}
