//! Serde plumbing shared by the codec.
//!
//! Derived struct deserializers accept a JSON array as well as an object, filling fields by
//! position. [`Record`] and [`record`] restrict records to objects.
//!
//! `serde_ignored` and `serde_path_to_error` both report locations as dotted paths
//! (`fx.fx_currency`, `errors[0].field`, with `?` marking option layers). The `tracing` helpers
//! resolve such a path back to the value in the original document for log events.

use serde::de::{Deserialize, Deserializer, Visitor};
#[cfg(feature = "tracing")]
use serde_json::Value;

use crate::field::Field;

/// Deserializes `T` only from a map, never from a sequence.
#[derive(Debug)]
pub(crate) struct Record<T>(pub(crate) T);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Record<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(MapOnly(deserializer)).map(Record)
    }
}

/// `deserialize_with` target for a nested record field: `Field<T>` that only accepts an object.
pub(crate) fn record<'de, D, T>(deserializer: D) -> Result<Field<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let field = Field::<Record<T>>::deserialize(deserializer)?;
    Ok(field.map(|Record(value)| value))
}

/// Forwards to the inner deserializer, except that a struct is read with `deserialize_map`.
struct MapOnly<D>(D);

impl<'de, D: Deserializer<'de>> Deserializer<'de> for MapOnly<D> {
    type Error = D::Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        self.0.deserialize_any(visitor)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        self.0.deserialize_map(visitor)
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map enum identifier ignored_any
    }
}

/// Converts a dotted serde path into an RFC 6901 JSON pointer.
///
/// - `"fx.exchange_rate"` -> `"/fx/exchange_rate"`
/// - `"errors[0].field"` -> `"/errors/0/field"`
/// - `"?.links.?.mandate"` -> `"/links/mandate"`
/// - `"."` and `""` -> `""` (the whole document)
#[cfg(feature = "tracing")]
pub(crate) fn json_pointer(path: &str) -> String {
    path.split(['.', '[', ']'])
        .filter(|segment| !segment.is_empty() && *segment != "?")
        .fold(String::new(), |mut pointer, segment| {
            pointer.push('/');
            pointer.push_str(&segment.replace('~', "~0").replace('/', "~1"));
            pointer
        })
}

/// Looks up the value at a dotted serde path, `None` if the path leads nowhere.
#[cfg(feature = "tracing")]
pub(crate) fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    value.pointer(&json_pointer(path))
}

/// Formats a looked-up value for a log field.
#[cfg(feature = "tracing")]
pub(crate) fn format_value(value: Option<&Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "<unable to retrieve>".to_owned(),
    }
}
