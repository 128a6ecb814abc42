//! Recognized protocol header names.
//!
//! The protocol defines exactly five headers; everything else on the
//! request is opaque to this engine. Names are lowercase per HTTP/2
//! conventions; `HeaderMap` lookup is case-insensitive anyway.

use http::HeaderName;

/// Marks a protocol-aware request (value `"true"`); also set on JSON replies.
pub const X_INERTIA: HeaderName = HeaderName::from_static("x-inertia");

/// Asset version the client was built against.
pub const X_INERTIA_VERSION: HeaderName = HeaderName::from_static("x-inertia-version");

/// Comma-separated prop-name whitelist for a partial reload.
pub const X_INERTIA_PARTIAL_DATA: HeaderName = HeaderName::from_static("x-inertia-partial-data");

/// Component the partial-data whitelist applies to.
pub const X_INERTIA_PARTIAL_COMPONENT: HeaderName =
    HeaderName::from_static("x-inertia-partial-component");

/// Reply-only: redirect target on an asset-version conflict.
pub const X_INERTIA_LOCATION: HeaderName = HeaderName::from_static("x-inertia-location");
