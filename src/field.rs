//! Three-state field values.
//!
//! Every field of a GoCardless resource can be missing from the JSON object, present with an
//! explicit `null`, or present with a value. [`Field`] keeps those three states apart so that
//! encoding a record only writes the keys that were actually set.
//!
//! Resource structs annotate each field with
//! `#[serde(default, skip_serializing_if = "Field::is_absent")]`: a missing key decodes to
//! [`Field::Absent`] through [`Default`], and an absent field is never written back.
#![expect(
    clippy::exhaustive_enums,
    reason = "The three states are the whole point of the type and callers should match on them"
)]

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A resource field that is either absent, explicitly `null`, or holds a value.
///
/// # Example
///
/// ```
/// use gocardless_client_sdk::field::Field;
///
/// let amount: Field<i64> = 500.into();
/// assert!(amount.is_present());
/// assert_eq!(amount.value(), Some(&500));
///
/// let missing: Field<i64> = Field::default();
/// assert!(missing.is_absent());
/// assert_eq!(missing.value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// The key was not in the JSON object, or was never set.
    Absent,
    /// The key was present with a JSON `null`.
    Null,
    /// The key was present with a value.
    Present(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}

impl<T> Field<T> {
    /// Builds a present field from an [`Option`], mapping `None` to [`Field::Null`].
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Present(v),
            None => Self::Null,
        }
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Whether the key would appear in the encoded JSON object, as a value or as `null`.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        !self.is_absent()
    }

    /// Returns the value, if present.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    #[must_use]
    pub const fn as_ref(&self) -> Field<&T> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Present(v) => Field::Present(v),
        }
    }

    /// Maps a present value, keeping the absent and null states untouched.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Present(v) => Field::Present(f(v)),
        }
    }
}

impl Field<String> {
    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        self.value().map(String::as_str)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(v) => serializer.serialize_some(v),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only reached when the key exists; missing keys go through `Default`.
        Option::<T>::deserialize(deserializer).map(Self::from_option)
    }
}
