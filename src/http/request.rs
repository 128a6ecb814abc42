//! Normalized view of the inbound request.
//!
//! # Responsibilities
//! - Capture method, URL, original URL and headers once per request
//! - Case-insensitive header access returning `Option`, never an error
//! - Decode the protocol headers (§ headers.rs) into typed accessors
//!
//! # Design Decisions
//! - Immutable after construction; the engine never mutates the request
//! - Absent or non-UTF8 header values read as `None`
//! - `original_url` covers hosts that mount the app under a path prefix;
//!   the page object prefers it, the conflict redirect does not

use http::{HeaderMap, Method};
use http::header::AsHeaderName;

use crate::http::headers::{
    X_INERTIA, X_INERTIA_PARTIAL_COMPONENT, X_INERTIA_PARTIAL_DATA, X_INERTIA_VERSION,
};

/// Read-only snapshot of the request under resolution.
#[derive(Debug, Clone)]
pub struct RequestSnapshot {
    method: Method,
    url: String,
    original_url: Option<String>,
    headers: HeaderMap,
}

impl RequestSnapshot {
    pub fn new(method: Method, url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method,
            url: url.into(),
            original_url: None,
            headers,
        }
    }

    /// Attach the pre-mount URL seen by the client (e.g. behind a nested
    /// router or path prefix).
    pub fn with_original_url(mut self, url: impl Into<String>) -> Self {
        self.original_url = Some(url.into());
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn original_url(&self) -> Option<&str> {
        self.original_url.as_deref()
    }

    /// URL reported in the page object: the original URL when present,
    /// the plain request URL otherwise.
    pub fn page_url(&self) -> &str {
        self.original_url.as_deref().unwrap_or(&self.url)
    }

    /// Case-insensitive header lookup. Absent or non-UTF8 values are `None`.
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// True iff the request carries `X-Inertia: true`.
    pub fn is_protocol_request(&self) -> bool {
        self.header(&X_INERTIA) == Some("true")
    }

    /// Asset version token declared by the client, if any.
    pub fn declared_version(&self) -> Option<&str> {
        self.header(&X_INERTIA_VERSION)
    }

    /// Raw comma-separated partial-reload whitelist, if any.
    pub fn partial_data(&self) -> Option<&str> {
        self.header(&X_INERTIA_PARTIAL_DATA)
    }

    /// Component the partial-reload whitelist applies to, if any.
    pub fn partial_component(&self) -> Option<&str> {
        self.header(&X_INERTIA_PARTIAL_COMPONENT)
    }
}
