//! Refund resources as returned by the API.

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::FxCurrency;
use crate::codec::Resource;
use crate::field::Field;
use crate::types::{Decimal, Metadata, Timestamp};

/// Represents a refund resource.
///
/// Refund objects represent (partial) refunds of a payment back to the customer.
///
/// Every field may be absent, `null`, or present; see [`Field`].
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct Refund {
    /// Amount in minor unit (e.g. pence in GBP, cents in EUR).
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub amount: Field<i64>,
    /// Fixed timestamp, recording when this resource was created.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub created_at: Field<Timestamp>,
    /// ISO 4217 currency code. This is set to the currency of the refund's payment.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub currency: Field<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::record",
        skip_serializing_if = "Field::is_absent"
    )]
    #[builder(default, into)]
    pub fx: Field<RefundFx>,
    /// Unique identifier, beginning with "RF".
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub id: Field<String>,
    /// Resources linked to this refund.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::record",
        skip_serializing_if = "Field::is_absent"
    )]
    #[builder(default, into)]
    pub links: Field<RefundLinks>,
    /// Key-value store of custom data.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub metadata: Field<Metadata>,
    /// An optional reference that will appear on your customer's bank statement. The character
    /// limit depends on the scheme, from 10 characters for Bacs and ACH up to 140 for SEPA.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub reference: Field<String>,
}

impl Resource for Refund {
    const ENVELOPE: &'static str = "refunds";
}

/// Foreign exchange details of a refund paid out in another currency.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct RefundFx {
    /// Estimated rate that will be used in the foreign exchange of the `amount` into the
    /// `fx_currency`. Varies with the market rate until the moment it is paid out.
    /// Present only before a resource is paid out.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub estimated_exchange_rate: Field<Decimal>,
    /// Rate used in the foreign exchange of the `amount` into the `fx_currency`.
    /// Present only after a resource is paid out.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub exchange_rate: Field<Decimal>,
    /// Amount that was paid out in the `fx_currency` after foreign exchange.
    /// Present only after the resource has been paid out.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub fx_amount: Field<i64>,
    /// Currency in which amounts will be paid out (after foreign exchange). Present only if
    /// payouts will be (or were) made via foreign exchange.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub fx_currency: Field<FxCurrency>,
}

/// Resources linked to a refund.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct RefundLinks {
    /// ID of the mandate against which the refund is being made.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub mandate: Field<String>,
    /// ID of the payment against which the refund is being made.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    #[builder(default, into)]
    pub payment: Field<String>,
}
