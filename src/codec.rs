//! Resource codec: wire JSON to typed records and back.
//!
//! Resources are plain serde structs whose fields are [`Field`](crate::field::Field)s annotated
//! with their wire key. This module drives those declarations:
//!
//! - [`decode`] turns a JSON value into a record. Any value that cannot be coerced to its
//!   declared type fails with a [`Kind::Schema`](crate::error::Kind::Schema) error carrying the
//!   JSON path of the value.
//! - [`encode`] writes a record back out, emitting only the fields that were set.
//! - [`decode_envelope`] and [`encode_envelope`] handle the `{"refunds": {...}}` wrapper the API
//!   puts around single resources.
//!
//! When the `tracing` feature is enabled, keys the record does not declare are logged as
//! warnings, which helps spot API additions before the schema catches up.
//!
//! # Example
//!
//! ```
//! use gocardless_client_sdk::codec;
//! use gocardless_client_sdk::refunds::types::Refund;
//! use serde_json::json;
//!
//! let refund: Refund = codec::decode(json!({ "id": "RF123", "amount": 500 }))?;
//! assert_eq!(refund.id.as_deref(), Some("RF123"));
//! assert!(refund.fx.is_absent());
//!
//! assert_eq!(codec::encode(&refund)?, json!({ "id": "RF123", "amount": 500 }));
//! # Ok::<(), gocardless_client_sdk::error::Error>(())
//! ```

use std::any::type_name;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::Result;
use crate::error::Error;
use crate::serde_helpers::Record;

/// A record the API returns wrapped in an envelope object.
pub trait Resource: Serialize + DeserializeOwned {
    /// The key the API wraps this resource in, e.g. `refunds`.
    const ENVELOPE: &'static str;
}

/// Decodes a JSON value into `T`.
///
/// Unknown keys are ignored (and logged with the `tracing` feature). Malformed literals, type
/// mismatches and non-string enum values fail with a schema error, as does a record given as
/// anything other than a JSON object.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        type_name = %type_name::<T>(),
        json = %value,
        "decoding JSON"
    );

    #[cfg(feature = "tracing")]
    let original = value.clone();
    #[cfg(feature = "tracing")]
    let mut unknown_paths: Vec<String> = Vec::new();

    #[cfg(feature = "tracing")]
    let result = serde_path_to_error::deserialize(serde_ignored::Deserializer::new(
        value,
        &mut |path: serde_ignored::Path<'_>| unknown_paths.push(path.to_string()),
    ));
    #[cfg(not(feature = "tracing"))]
    let result = serde_path_to_error::deserialize(value);

    let Record(decoded): Record<T> = result.map_err(|e| {
        let path = e.path().to_string();

        #[cfg(feature = "tracing")]
        tracing::error!(
            type_name = %type_name::<T>(),
            path = %path,
            value = %crate::serde_helpers::format_value(
                crate::serde_helpers::lookup_value(&original, &path)
            ),
            error = %e.inner(),
            "decoding failed"
        );

        Error::schema(type_name::<T>(), path, e.into_inner().to_string())
    })?;

    #[cfg(feature = "tracing")]
    for path in unknown_paths {
        let field_value = crate::serde_helpers::lookup_value(&original, &path);

        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %crate::serde_helpers::format_value(field_value),
            "unknown field in API response"
        );
    }

    Ok(decoded)
}

/// Decodes a JSON document held in a string.
///
/// A document that is not valid JSON is reported as a schema error at the root path.
pub fn decode_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    decode(parse::<T>(json)?)
}

/// Decodes an enveloped resource held in a string, as the API returns it.
pub fn decode_envelope_str<T: Resource>(json: &str) -> Result<T> {
    decode_envelope(parse::<T>(json)?)
}

fn parse<T>(json: &str) -> Result<Value> {
    serde_json::from_str(json).map_err(|e| Error::schema(type_name::<T>(), ".", e.to_string()))
}

/// Encodes `value` as JSON. Absent fields are left out of the output.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Unwraps `{ T::ENVELOPE: {...} }` and decodes the inner object.
pub fn decode_envelope<T: Resource>(value: Value) -> Result<T> {
    let Value::Object(mut map) = value else {
        return Err(Error::schema(
            type_name::<T>(),
            ".",
            format!("expected an object with a `{}` key", T::ENVELOPE),
        ));
    };

    let Some(inner) = map.remove(T::ENVELOPE) else {
        return Err(Error::schema(
            type_name::<T>(),
            ".",
            format!("missing `{}` envelope", T::ENVELOPE),
        ));
    };

    #[cfg(feature = "tracing")]
    for key in map.keys() {
        tracing::debug!(
            type_name = %type_name::<T>(),
            key = %key,
            "ignoring sibling of resource envelope"
        );
    }

    // Report nested paths relative to the envelope key.
    decode(inner).map_err(|e| match e.downcast_ref::<crate::error::Schema>() {
        Some(schema) if schema.path == "." => {
            Error::schema(schema.type_name, T::ENVELOPE, schema.reason.clone())
        }
        Some(schema) => Error::schema(
            schema.type_name,
            format!("{}.{}", T::ENVELOPE, schema.path),
            schema.reason.clone(),
        ),
        None => e,
    })
}

/// Wraps the encoded `value` in an object under `envelope`, the shape request bodies take.
pub fn encode_envelope<T: Serialize + ?Sized>(envelope: &str, value: &T) -> Result<Value> {
    let mut map = Map::with_capacity(1);
    map.insert(envelope.to_owned(), encode(value)?);

    Ok(Value::Object(map))
}
