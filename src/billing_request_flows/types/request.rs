use bon::Builder;
use serde::Serialize;

/// Request to create a billing request flow.
///
/// # Example
///
/// ```
/// use gocardless_client_sdk::billing_request_flows::types::{
///     BillingRequestFlowCreateLinks, BillingRequestFlowCreateRequest,
/// };
///
/// let request = BillingRequestFlowCreateRequest::builder()
///     .redirect_uri("https://example.com/done")
///     .lock_bank_account(true)
///     .links(BillingRequestFlowCreateLinks::builder().billing_request("BRQ123").build())
///     .build();
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
pub struct BillingRequestFlowCreateRequest {
    /// URL that the payer can be redirected to after completing the request flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub redirect_uri: Option<String>,
    /// URL that the payer can be taken to if there isn't a way to progress ahead in the flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub exit_uri: Option<String>,
    /// Fulfil the billing request on completion of the flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_fulfil: Option<bool>,
    /// Prevent the payer from changing the bank account details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_bank_account: Option<bool>,
    /// Prevent the payer from changing their customer details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_customer_details: Option<bool>,
    pub links: BillingRequestFlowCreateLinks,
    /// Sent as the `Idempotency-Key` header. A random key is generated when unset.
    #[serde(skip)]
    #[builder(into)]
    pub idempotency_key: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
pub struct BillingRequestFlowCreateLinks {
    /// ID of the billing request against which this flow is created.
    pub billing_request: String,
}
