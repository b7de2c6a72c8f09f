#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

mod refund {
    use gocardless_client_sdk::codec;
    use gocardless_client_sdk::error::{Kind, Schema};
    use gocardless_client_sdk::field::Field;
    use gocardless_client_sdk::refunds::types::{FxCurrency, Refund, RefundFx, RefundLinks};
    use gocardless_client_sdk::types::{Metadata, dec};
    use serde_json::json;

    #[test]
    fn decode_example_refund_should_succeed() -> anyhow::Result<()> {
        let refund: Refund = codec::decode(json!({
            "id": "RF123",
            "amount": 500,
            "currency": "GBP",
            "links": { "mandate": "MD1", "payment": "PM1" }
        }))?;

        let expected = Refund::builder()
            .id("RF123".to_owned())
            .amount(500_i64)
            .currency("GBP".to_owned())
            .links(
                RefundLinks::builder()
                    .mandate("MD1".to_owned())
                    .payment("PM1".to_owned())
                    .build(),
            )
            .build();

        assert_eq!(refund, expected);
        assert!(refund.fx.is_absent());
        assert!(refund.metadata.is_absent());
        assert!(refund.reference.is_absent());
        assert!(refund.created_at.is_absent());

        Ok(())
    }

    #[test]
    fn round_trip_should_succeed() -> anyhow::Result<()> {
        let wire = json!({
            "amount": 150,
            "created_at": "2014-01-01T12:00:00.000Z",
            "currency": "EUR",
            "fx": {
                "estimated_exchange_rate": null,
                "exchange_rate": "1.1234567890",
                "fx_amount": 168,
                "fx_currency": "USD"
            },
            "id": "RF123",
            "links": { "mandate": "MD123", "payment": "PM123" },
            "metadata": { "reason": "damaged" },
            "reference": null
        });

        let refund: Refund = codec::decode(wire)?;
        let again: Refund = codec::decode(codec::encode(&refund)?)?;

        assert_eq!(refund, again);
        assert!(refund.reference.is_null());

        let fx = refund.fx.value().unwrap();
        assert!(fx.estimated_exchange_rate.is_null());
        assert_eq!(fx.exchange_rate, Field::Present(dec!(1.1234567890)));

        Ok(())
    }

    #[test]
    fn empty_object_is_all_absent() -> anyhow::Result<()> {
        let refund: Refund = codec::decode(json!({}))?;

        assert_eq!(refund, Refund::default());
        assert_eq!(codec::encode(&refund)?, json!({}));

        Ok(())
    }

    #[test]
    fn null_amount_is_distinguishable_from_absent() -> anyhow::Result<()> {
        let with_null: Refund = codec::decode(json!({ "amount": null }))?;
        let without: Refund = codec::decode(json!({}))?;

        assert!(with_null.amount.is_set());
        assert!(!without.amount.is_set());
        assert_ne!(with_null, without);
        assert_eq!(codec::encode(&with_null)?, json!({ "amount": null }));

        Ok(())
    }

    #[test]
    fn unrecognised_currencies_pass_through() -> anyhow::Result<()> {
        let eur: RefundFx = codec::decode(json!({ "fx_currency": "EUR" }))?;
        assert_eq!(eur.fx_currency, Field::Present(FxCurrency::Eur));

        for code in ["XYZ", "CHF", "eur", ""] {
            let fx: RefundFx = codec::decode(json!({ "fx_currency": code }))?;

            assert_eq!(
                fx.fx_currency,
                Field::Present(FxCurrency::Unknown(code.to_owned()))
            );
            assert_eq!(codec::encode(&fx)?, json!({ "fx_currency": code }));
        }

        Ok(())
    }

    #[test]
    fn non_string_currency_is_schema_error() {
        let err = codec::decode::<Refund>(json!({ "fx": { "fx_currency": 840 } })).unwrap_err();

        assert_eq!(err.kind(), Kind::Schema);
        assert_eq!(err.downcast_ref::<Schema>().unwrap().path, "fx.fx_currency");
    }

    #[test]
    fn nested_fx_absence_and_presence() -> anyhow::Result<()> {
        let without: Refund = codec::decode(json!({ "id": "RF1" }))?;
        assert!(without.fx.is_absent());

        let with: Refund = codec::decode(json!({ "fx": { "fx_currency": "USD" } }))?;
        assert_eq!(
            with.fx,
            Field::Present(RefundFx::builder().fx_currency(FxCurrency::Usd).build())
        );

        Ok(())
    }

    #[test]
    fn metadata_pairs_are_preserved() -> anyhow::Result<()> {
        let refund: Refund = codec::decode(json!({ "metadata": { "a": "1", "b": "2" } }))?;

        let expected = Metadata::from([
            ("a".to_owned(), "1".to_owned()),
            ("b".to_owned(), "2".to_owned()),
        ]);
        assert_eq!(refund.metadata, Field::Present(expected));

        Ok(())
    }

    #[test]
    fn malformed_values_are_schema_errors() {
        let cases = [
            (json!({ "amount": "500" }), "amount"),
            (json!({ "amount": 1.5 }), "amount"),
            (json!({ "created_at": "2014-13-01T00:00:00Z" }), "created_at"),
            (json!({ "metadata": { "a": 1 } }), "metadata.a"),
            (json!({ "links": "PM1" }), "links"),
        ];

        for (wire, path) in cases {
            let err = codec::decode::<Refund>(wire).unwrap_err();

            assert_eq!(err.kind(), Kind::Schema);
            assert_eq!(err.downcast_ref::<Schema>().unwrap().path, path);
        }
    }

    #[test]
    fn records_must_be_objects() {
        for wire in [json!([500, null, "GBP"]), json!([]), json!("RF123"), json!(500)] {
            let err = codec::decode::<Refund>(wire.clone()).unwrap_err();

            assert_eq!(err.kind(), Kind::Schema, "decoding {wire}");
            assert_eq!(err.downcast_ref::<Schema>().unwrap().path, ".");
        }
    }

    #[test]
    fn nested_records_must_be_objects() {
        let cases = [
            (json!({ "links": ["MD1", "PM1"] }), "links"),
            (json!({ "fx": [10] }), "fx"),
            (json!({ "fx": [] }), "fx"),
            (json!({ "fx": 10 }), "fx"),
        ];

        for (wire, path) in cases {
            let err = codec::decode::<Refund>(wire.clone()).unwrap_err();

            assert_eq!(err.kind(), Kind::Schema, "decoding {wire}");
            assert_eq!(err.downcast_ref::<Schema>().unwrap().path, path);
        }
    }

    #[test]
    fn enveloped_array_is_schema_error() {
        let err = codec::decode_envelope::<Refund>(json!({ "refunds": [500] })).unwrap_err();

        assert_eq!(err.kind(), Kind::Schema);
        assert_eq!(err.downcast_ref::<Schema>().unwrap().path, "refunds");
    }

    #[test]
    fn malformed_json_is_schema_error() {
        let err = codec::decode_str::<Refund>(r#"{"amount": 5"#).unwrap_err();

        assert_eq!(err.kind(), Kind::Schema);
        assert_eq!(err.downcast_ref::<Schema>().unwrap().path, ".");
    }

    #[test]
    fn unknown_keys_are_ignored() -> anyhow::Result<()> {
        let refund: Refund = codec::decode(json!({ "id": "RF1", "status": "paid" }))?;

        assert_eq!(refund.id.as_deref(), Some("RF1"));
        assert_eq!(codec::encode(&refund)?, json!({ "id": "RF1" }));

        Ok(())
    }

    #[test]
    fn envelope_should_succeed() -> anyhow::Result<()> {
        let refund: Refund = codec::decode_envelope(json!({
            "refunds": { "id": "RF1", "amount": 10 }
        }))?;

        assert_eq!(refund.amount, Field::Present(10));
        assert_eq!(
            codec::encode_envelope("refunds", &refund)?,
            json!({ "refunds": { "id": "RF1", "amount": 10 } })
        );

        Ok(())
    }

    #[test]
    fn missing_envelope_is_schema_error() {
        let err = codec::decode_envelope::<Refund>(json!({ "payments": {} })).unwrap_err();
        assert_eq!(err.kind(), Kind::Schema);

        let err = codec::decode_envelope::<Refund>(json!({ "refunds": { "amount": "x" } }))
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<Schema>().unwrap().path,
            "refunds.amount"
        );
    }
}

mod billing_request_flow {
    use gocardless_client_sdk::billing_request_flows::types::{
        BillingRequestFlow, BillingRequestFlowLinks,
    };
    use gocardless_client_sdk::codec;
    use gocardless_client_sdk::error::{Kind, Schema};
    use gocardless_client_sdk::field::Field;
    use serde_json::json;

    #[test]
    fn round_trip_should_succeed() -> anyhow::Result<()> {
        let wire = json!({
            "authorisation_url": "https://pay.gocardless.com/billing/static/flow?id=BRF123",
            "created_at": "2021-01-01T10:00:00.000+00:00",
            "expires_at": "2021-01-08T10:00:00.000Z",
            "links": { "billing_request": "BRQ123" },
            "redirect_uri": null
        });

        let flow: BillingRequestFlow = codec::decode(wire.clone())?;

        assert_eq!(
            flow.links,
            Field::Present(
                BillingRequestFlowLinks::builder()
                    .billing_request("BRQ123".to_owned())
                    .build()
            )
        );
        assert!(flow.redirect_uri.is_null());
        assert_eq!(codec::decode::<BillingRequestFlow>(codec::encode(&flow)?)?, flow);

        Ok(())
    }

    #[test]
    fn expires_at_is_kept_verbatim() -> anyhow::Result<()> {
        for raw in ["2021-01-08T10:00:00.000Z", "next week"] {
            let flow: BillingRequestFlow = codec::decode(json!({ "expires_at": raw }))?;

            assert_eq!(flow.expires_at.as_deref(), Some(raw));
            assert_eq!(codec::encode(&flow)?, json!({ "expires_at": raw }));
        }

        Ok(())
    }

    #[test]
    fn created_at_must_be_a_timestamp() {
        let err = codec::decode::<BillingRequestFlow>(json!({ "created_at": "next week" }));
        assert!(err.is_err(), "an unparseable created_at should fail to decode");
    }

    #[test]
    fn links_array_is_schema_error() {
        let err = codec::decode::<BillingRequestFlow>(json!({ "links": ["BRQ123"] })).unwrap_err();

        assert_eq!(err.kind(), Kind::Schema);
        assert_eq!(err.downcast_ref::<Schema>().unwrap().path, "links");
    }

    #[test]
    fn empty_links_stay_present() -> anyhow::Result<()> {
        let flow: BillingRequestFlow = codec::decode(json!({ "links": {} }))?;

        assert_eq!(flow.links, Field::Present(BillingRequestFlowLinks::default()));
        assert_eq!(codec::encode(&flow)?, json!({ "links": {} }));

        Ok(())
    }
}
