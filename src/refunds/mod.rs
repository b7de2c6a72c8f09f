//! Refunds: (partial) refunds of a payment back to the customer.
//!
//! GoCardless notifies you via a webhook whenever a refund is created, and updates the
//! `amount_refunded` property of the payment.
//!
//! The [`types`] are always available. The HTTP [`Client`] requires the `client` feature.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/refunds` | POST | Create a refund against a payment |
//! | `/refunds/{id}` | GET | Get a single refund |
//! | `/refunds/{id}` | PUT | Update a refund's metadata |
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "client")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use gocardless_client_sdk::{Config, SANDBOX_URL};
//! use gocardless_client_sdk::refunds::{Client, types::{RefundCreateLinks, RefundCreateRequest}};
//!
//! let config = Config::builder().access_token("sandbox_token".to_owned()).build();
//! let client = Client::new(SANDBOX_URL, config)?;
//!
//! let request = RefundCreateRequest::builder()
//!     .amount(100)
//!     .total_amount_confirmation(150)
//!     .reference("Partial refund")
//!     .links(RefundCreateLinks::builder().payment("PM123").build())
//!     .build();
//!
//! let refund = client.create(&request).await?;
//! println!("created {:?}", refund.id);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "client")]
pub mod client;
pub mod types;

#[cfg(feature = "client")]
pub use client::Client;
