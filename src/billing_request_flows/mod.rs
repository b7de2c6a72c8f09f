//! Billing Request Flows.
//!
//! A billing request flow lets a payer authorise a payment created for a scheme with strong
//! payer authorisation (such as open banking single payments) through a GoCardless-hosted page.
//!
//! The [`types`] are always available. The HTTP [`Client`] requires the `client` feature.
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/billing_request_flows` | POST | Create a flow for a billing request |
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "client")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use gocardless_client_sdk::{Config, SANDBOX_URL};
//! use gocardless_client_sdk::billing_request_flows::Client;
//! use gocardless_client_sdk::billing_request_flows::types::{
//!     BillingRequestFlowCreateLinks, BillingRequestFlowCreateRequest,
//! };
//!
//! let config = Config::builder().access_token("sandbox_token".to_owned()).build();
//! let client = Client::new(SANDBOX_URL, config)?;
//!
//! let request = BillingRequestFlowCreateRequest::builder()
//!     .redirect_uri("https://example.com/done")
//!     .links(BillingRequestFlowCreateLinks::builder().billing_request("BRQ123").build())
//!     .build();
//!
//! let flow = client.create(&request).await?;
//! println!("send the payer to {:?}", flow.authorisation_url.as_deref());
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "client")]
pub mod client;
pub mod types;

#[cfg(feature = "client")]
pub use client::Client;
