use bon::Builder;
use serde::Serialize;

use crate::types::Metadata;

/// Request to create a refund against a payment.
///
/// The body is sent wrapped in a `refunds` envelope. Unset optional parameters are left out.
///
/// # Example
///
/// ```
/// use gocardless_client_sdk::refunds::types::{RefundCreateLinks, RefundCreateRequest};
///
/// let request = RefundCreateRequest::builder()
///     .amount(100)
///     .total_amount_confirmation(100)
///     .links(RefundCreateLinks::builder().payment("PM123").build())
///     .idempotency_key("refund-PM123-1")
///     .build();
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
pub struct RefundCreateRequest {
    /// Amount in minor unit (e.g. pence in GBP, cents in EUR).
    pub amount: i64,
    /// Total expected refunded amount in minor unit, including this refund. Guards against
    /// accidentally issuing the same refund twice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount_confirmation: Option<i64>,
    /// Reference that will appear on your customer's bank statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub links: RefundCreateLinks,
    /// Sent as the `Idempotency-Key` header rather than in the body. A random key is generated
    /// when unset.
    #[serde(skip)]
    #[builder(into)]
    pub idempotency_key: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
pub struct RefundCreateLinks {
    /// ID of the payment against which the refund is being made.
    pub payment: String,
}

/// Request to update a refund. Only `metadata` can be changed.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize, Builder)]
pub struct RefundUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}
