use reqwest::{Client as ReqwestClient, Method};
use url::Url;

use super::types::{BillingRequestFlow, BillingRequestFlowCreateRequest};
use crate::codec::{self, Resource as _};
use crate::{Config, IDEMPOTENCY_KEY_HEADER, Result};

/// Client for the billing request flows endpoint.
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
    config: Config,
}

impl Client {
    /// Creates a new billing request flows client against `host`.
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

    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Creates a new billing request flow.
    ///
    /// Flows have no retrieval endpoint, so an idempotent creation conflict is returned as an
    /// error carrying the id of the existing flow.
    pub async fn create(
        &self,
        request: &BillingRequestFlowCreateRequest,
    ) -> Result<BillingRequestFlow> {
        let idempotency_key = request
            .idempotency_key
            .clone()
            .unwrap_or_else(crate::idempotency_key);

        let http_request = self
            .client
            .request(Method::POST, self.host.join("billing_request_flows")?)
            .header(IDEMPOTENCY_KEY_HEADER, idempotency_key)
            .json(&codec::encode_envelope(BillingRequestFlow::ENVELOPE, request)?)
            .build()?;

        crate::request(&self.client, http_request, self.config.retry()).await
    }
}
