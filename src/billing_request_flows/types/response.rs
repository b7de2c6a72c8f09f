use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::codec::Resource;
use crate::field::Field;
use crate::types::Timestamp;

/// Represents a billing request flow resource.
///
/// Billing request flows can be created to enable a payer to authorise a payment created for a
/// scheme with strong payer authorisation (such as open banking single payments).
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct BillingRequestFlow {
    /// URL for a GC-controlled flow which will allow the payer to fulfil the billing request.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub authorisation_url: Field<String>,
    /// Timestamp when the flow was created.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub created_at: Field<Timestamp>,
    /// Timestamp when the flow will expire. Each flow currently lasts for 7 days.
    ///
    /// Kept as the raw string the API sent; it is not parsed like `created_at`.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub expires_at: Field<String>,
    /// Resources linked to this flow.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::record",
        skip_serializing_if = "Field::is_absent"
    )]
    #[builder(default, into)]
    pub links: Field<BillingRequestFlowLinks>,
    /// URL that the payer can be redirected to after completing the request flow.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub redirect_uri: Field<String>,
}

impl Resource for BillingRequestFlow {
    const ENVELOPE: &'static str = "billing_request_flows";
}

/// Resources linked to a billing request flow.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct BillingRequestFlowLinks {
    /// ID of the billing request against which this flow was created.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub billing_request: Field<String>,
}
