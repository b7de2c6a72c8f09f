use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod request;
pub mod response;

pub use request::{RefundCreateLinks, RefundCreateRequest, RefundUpdateRequest};
pub use response::{Refund, RefundFx, RefundLinks};

/// [ISO 4217](http://en.wikipedia.org/wiki/ISO_4217#Active_codes) code for the currency in which
/// amounts will be paid out after foreign exchange.
///
/// Codes the API adds before this crate knows about them decode to
/// [`Unknown`](Self::Unknown) and encode back to the same string.
///
/// # Example
///
/// ```
/// use gocardless_client_sdk::refunds::types::FxCurrency;
///
/// let eur: FxCurrency = serde_json::from_str(r#""EUR""#).unwrap();
/// assert_eq!(eur, FxCurrency::Eur);
///
/// let new: FxCurrency = serde_json::from_str(r#""CHF""#).unwrap();
/// assert_eq!(new, FxCurrency::Unknown("CHF".to_owned()));
/// assert_eq!(serde_json::to_string(&new).unwrap(), r#""CHF""#);
/// ```
#[non_exhaustive]
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum FxCurrency {
    Aud,
    Cad,
    Dkk,
    Eur,
    Gbp,
    Nzd,
    Sek,
    Usd,
    /// Unknown currency code from the API (captures the raw value).
    #[serde(untagged)]
    Unknown(String),
}

impl FxCurrency {
    const KNOWN: [FxCurrency; 8] = [
        Self::Aud,
        Self::Cad,
        Self::Dkk,
        Self::Eur,
        Self::Gbp,
        Self::Nzd,
        Self::Sek,
        Self::Usd,
    ];

    /// The three-letter code as sent on the wire.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Dkk => "DKK",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Nzd => "NZD",
            Self::Sek => "SEK",
            Self::Usd => "USD",
            Self::Unknown(code) => code,
        }
    }
}

/// Parses a code exactly as [`Deserialize`] does: case-sensitive, anything unrecognised is
/// [`FxCurrency::Unknown`].
impl FromStr for FxCurrency {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::KNOWN
            .into_iter()
            .find(|currency| currency.code() == s)
            .unwrap_or_else(|| Self::Unknown(s.to_owned())))
    }
}
