//! Re-exported types from external crates for convenience.
//!
//! These types appear in resource fields and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

use std::collections::HashMap;

/// Offset-aware timestamps, as used by `created_at` fields.
pub use chrono::{DateTime, FixedOffset, Utc};
/// Arbitrary precision decimal type for exchange rates.
pub use rust_decimal::Decimal;
/// Macro for creating [`Decimal`] literals at compile time.
///
/// # Example
/// ```
/// use gocardless_client_sdk::types::dec;
/// let rate = dec!(1.1234567890);
/// ```
pub use rust_decimal_macros::dec;

/// Timestamp as returned by the API, keeping the offset it was sent with.
pub type Timestamp = DateTime<FixedOffset>;

/// Key-value store of custom data attached to a resource.
///
/// The API permits up to 3 keys of up to 50 characters with values of up to 500 characters.
/// Those limits are enforced server-side only.
pub type Metadata = HashMap<String, String>;
