//! Reply envelope handed to the host adapter.
//!
//! # Responsibilities
//! - Carry status, headers and serialized body for either reply mode
//! - Carry view data through to document-mode template rendering
//!
//! # Design Decisions
//! - Plain data, no behavior: the host decides whether to write it directly
//!   or run the document template first
//! - `body` is `None` only for the version-conflict short-circuit

use http::{HeaderMap, StatusCode};
use http::header::AsHeaderName;
use serde_json::{Map, Value};

/// Final reply produced by one render call.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    /// Status to write (session-controlled, default 200; 409 on conflict).
    pub status: StatusCode,

    /// Fully assembled reply headers (mode base headers + session overrides).
    pub headers: HeaderMap,

    /// Serialized page object, or `None` for the conflict reply.
    pub body: Option<String>,

    /// True when the body is a protocol-JSON reply (or a conflict reply);
    /// false means the host should render the document template.
    pub is_protocol_reply: bool,

    /// Template context passthrough; unused in protocol-JSON mode.
    pub view_data: Map<String, Value>,
}

impl ResponseEnvelope {
    /// Header value lookup, case-insensitive. Convenience for hosts/tests.
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
