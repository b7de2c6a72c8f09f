#![cfg(feature = "client")]
#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

mod create {
    use std::time::Duration;

    use gocardless_client_sdk::billing_request_flows::Client;
    use gocardless_client_sdk::billing_request_flows::types::{
        BillingRequestFlowCreateLinks, BillingRequestFlowCreateRequest,
    };
    use gocardless_client_sdk::error::{Kind, Status};
    use gocardless_client_sdk::{Config, RetryConfig};
    use httpmock::{Method::POST, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    fn client(server: &MockServer) -> anyhow::Result<Client> {
        let config = Config::builder()
            .access_token("sandbox_token".to_owned())
            .retry(RetryConfig::fixed(2, Duration::from_millis(1)))
            .build();

        Ok(Client::new(&server.base_url(), config)?)
    }

    fn request() -> BillingRequestFlowCreateRequest {
        BillingRequestFlowCreateRequest::builder()
            .redirect_uri("https://example.com/done")
            .exit_uri("https://example.com/exit")
            .lock_bank_account(true)
            .links(
                BillingRequestFlowCreateLinks::builder()
                    .billing_request("BRQ123")
                    .build(),
            )
            .idempotency_key("flow-key")
            .build()
    }

    #[tokio::test]
    async fn create_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/billing_request_flows")
                .header("authorization", "Bearer sandbox_token")
                .header("idempotency-key", "flow-key")
                .json_body(json!({
                    "billing_request_flows": {
                        "redirect_uri": "https://example.com/done",
                        "exit_uri": "https://example.com/exit",
                        "lock_bank_account": true,
                        "links": { "billing_request": "BRQ123" }
                    }
                }));
            then.status(StatusCode::OK).json_body(json!({
                "billing_request_flows": {
                    "authorisation_url": "https://pay.gocardless.com/billing/static/flow?id=BRF123",
                    "created_at": "2021-01-01T10:00:00.000Z",
                    "expires_at": "2021-01-08T10:00:00.000Z",
                    "redirect_uri": "https://example.com/done",
                    "links": { "billing_request": "BRQ123" },
                    "session_token": "sesh_123"
                }
            }));
        });

        let flow = client.create(&request()).await?;

        assert_eq!(
            flow.authorisation_url.as_deref(),
            Some("https://pay.gocardless.com/billing/static/flow?id=BRF123")
        );
        assert_eq!(flow.expires_at.as_deref(), Some("2021-01-08T10:00:00.000Z"));
        assert_eq!(
            flow.links.value().unwrap().billing_request.as_deref(),
            Some("BRQ123")
        );
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn create_retries_with_same_key() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/billing_request_flows")
                .header("idempotency-key", "flow-key");
            then.status(StatusCode::INTERNAL_SERVER_ERROR).json_body(json!({
                "error": {
                    "message": "Internal server error",
                    "type": "gocardless",
                    "code": 500,
                    "request_id": "REQ500",
                    "documentation_url": "https://developer.gocardless.com/api-reference#internal_server_error",
                    "errors": []
                }
            }));
        });

        let err = client.create(&request()).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Status);
        assert_eq!(
            err.downcast_ref::<Status>().unwrap().status_code,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        mock.assert_calls(2);

        Ok(())
    }

    #[tokio::test]
    async fn create_conflict_is_returned() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(POST).path("/billing_request_flows");
            then.status(StatusCode::CONFLICT).json_body(json!({
                "error": {
                    "message": "A resource has already been created with this idempotency key",
                    "type": "invalid_state",
                    "code": 409,
                    "request_id": "REQ409",
                    "documentation_url": "https://developer.gocardless.com/api-reference#idempotent_creation_conflict",
                    "errors": [
                        {
                            "reason": "idempotent_creation_conflict",
                            "message": "A resource has already been created with this idempotency key",
                            "links": { "conflicting_resource_id": "BRF123" }
                        }
                    ]
                }
            }));
        });

        let err = client.create(&request()).await.unwrap_err();

        assert_eq!(err.conflicting_resource_id(), Some("BRF123"));
        mock.assert_calls(1);

        Ok(())
    }
}
