pub mod request;
pub mod response;

pub use request::{BillingRequestFlowCreateLinks, BillingRequestFlowCreateRequest};
pub use response::{BillingRequestFlow, BillingRequestFlowLinks};
