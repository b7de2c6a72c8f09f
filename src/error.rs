use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

#[cfg(feature = "client")]
pub use reqwest::Method;
#[cfg(feature = "client")]
pub use reqwest::StatusCode;
#[cfg(feature = "client")]
use reqwest::header;
use serde::Deserialize;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A wire value could not be decoded into its declared type. The client schema and the
    /// server contract disagree; retrying the same decode will not help.
    Schema,
    /// Error related to non-successful HTTP call
    Status,
    /// Error related to invalid input within gocardless-client-sdk
    Validation,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    pub fn schema<P: Into<String>, R: Into<String>>(
        type_name: &'static str,
        path: P,
        reason: R,
    ) -> Self {
        Schema {
            type_name,
            path: path.into(),
            reason: reason.into(),
        }
        .into()
    }

    #[cfg(feature = "client")]
    pub fn status<S: Into<String>>(
        status_code: StatusCode,
        method: Method,
        path: String,
        message: S,
        api_error: Option<ApiError>,
    ) -> Self {
        Status {
            status_code,
            method,
            path,
            message: message.into(),
            api_error,
        }
        .into()
    }

    /// The id of the resource an earlier request with the same idempotency key already created,
    /// if this error is an idempotent creation conflict.
    #[must_use]
    pub fn conflicting_resource_id(&self) -> Option<&str> {
        #[cfg(feature = "client")]
        {
            let status = self.downcast_ref::<Status>()?;
            status.api_error.as_ref()?.conflicting_resource_id()
        }
        #[cfg(not(feature = "client"))]
        {
            None
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// A value on the wire did not match the type declared for it.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct Schema {
    /// Rust type that was being decoded.
    pub type_name: &'static str,
    /// Dotted JSON path of the offending value, `.` for the root.
    pub path: String,
    pub reason: String,
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to decode {} at {}: {}",
            self.type_name, self.path, self.reason
        )
    }
}

impl StdError for Schema {}

#[cfg(feature = "client")]
#[non_exhaustive]
#[derive(Debug)]
pub struct Status {
    pub status_code: StatusCode,
    pub method: Method,
    pub path: String,
    pub message: String,
    /// The decoded `error` envelope, when the response body carried one.
    pub api_error: Option<ApiError>,
}

#[cfg(feature = "client")]
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making {} call to {} with {}",
            self.status_code, self.method, self.path, self.message
        )
    }
}

#[cfg(feature = "client")]
impl StdError for Status {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

/// The category GoCardless assigns to a failed request.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ApiErrorType {
    /// Malformed request, bad credentials or similar misuse of the API.
    InvalidApiUsage,
    /// The request is valid but the resource is in the wrong state for it.
    InvalidState,
    /// One or more parameters failed validation.
    ValidationFailed,
    /// Something went wrong on the GoCardless side.
    Gocardless,
    /// Unknown error type from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

/// Body of the `error` envelope returned with non-2xx responses.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    pub code: u16,
    pub request_id: Option<String>,
    pub documentation_url: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

impl ApiError {
    const IDEMPOTENT_CREATION_CONFLICT: &'static str = "idempotent_creation_conflict";

    #[must_use]
    pub fn conflicting_resource_id(&self) -> Option<&str> {
        self.errors
            .iter()
            .filter(|e| e.reason.as_deref() == Some(Self::IDEMPOTENT_CREATION_CONFLICT))
            .find_map(|e| e.links.as_ref()?.conflicting_resource_id.as_deref())
    }
}

#[cfg(feature = "client")]
#[derive(Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub(crate) error: ApiError,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    pub field: Option<String>,
    pub request_pointer: Option<String>,
    pub reason: Option<String>,
    pub links: Option<ApiErrorLinks>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorLinks {
    pub conflicting_resource_id: Option<String>,
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

#[cfg(feature = "client")]
impl From<header::InvalidHeaderValue> for Error {
    fn from(e: header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

#[cfg(feature = "client")]
impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<Schema> for Error {
    fn from(err: Schema) -> Self {
        Error::with_source(Kind::Schema, err)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

#[cfg(feature = "client")]
impl From<Status> for Error {
    fn from(err: Status) -> Self {
        Error::with_source(Kind::Status, err)
    }
}
