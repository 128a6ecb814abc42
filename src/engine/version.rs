//! Asset-version gate.
//!
//! # Responsibilities
//! - Detect a stale client bundle on protocol-aware GET requests
//! - Short-circuit with the protocol's 409 + location reply
//!
//! # Design Decisions
//! - Runs before any prop producer; a conflicting request never evaluates
//!   props
//! - The location header carries the plain request URL (not the original
//!   URL), matching client expectations for the forced navigation
//! - Not an error: the conflict reply is a normal envelope

use http::{HeaderMap, HeaderValue, Method, StatusCode};
use serde_json::Map;

use crate::config::AssetVersion;
use crate::http::{RequestSnapshot, ResponseEnvelope, X_INERTIA_LOCATION};

/// Returns the 409 conflict envelope when the client's declared asset
/// version is stale, `None` otherwise.
///
/// The gate only fires for protocol-aware GET requests that actually
/// declare a version; everything else falls through to normal resolution.
pub(crate) fn version_conflict(
    request: &RequestSnapshot,
    current: &AssetVersion,
) -> Option<ResponseEnvelope> {
    if !request.is_protocol_request() || request.method() != Method::GET {
        return None;
    }
    // An empty header value counts as undeclared, same as no header at all.
    let declared = request.declared_version().filter(|v| !v.is_empty())?;
    if current.matches(declared) {
        return None;
    }

    tracing::debug!(
        declared = %declared,
        current = %current,
        url = %request.url(),
        "asset version conflict, forcing client navigation"
    );

    let mut headers = HeaderMap::new();
    let location = HeaderValue::try_from(request.url())
        .unwrap_or_else(|_| HeaderValue::from_static("/"));
    headers.insert(X_INERTIA_LOCATION, location);

    Some(ResponseEnvelope {
        status: StatusCode::CONFLICT,
        headers,
        body: None,
        is_protocol_reply: true,
        view_data: Map::new(),
    })
}
