//! HTTP protocol surface.
//!
//! # Data Flow
//! ```text
//! inbound request (any host framework)
//!     → request.rs (RequestSnapshot: method, url, headers)
//!     → headers.rs (the five recognized X-Inertia-* names)
//!     → [engine resolves the page]
//!     → response.rs (ResponseEnvelope: status, headers, body)
//!     → host writes it out or renders the document template
//! ```
//!
//! # Design Decisions
//! - `http::HeaderMap` everywhere; case-insensitive lookup comes for free
//! - Unknown headers are opaque to the engine
//! - The envelope is plain data; writing it is the host's job

pub mod headers;
pub mod request;
pub mod response;

pub use headers::{
    X_INERTIA, X_INERTIA_LOCATION, X_INERTIA_PARTIAL_COMPONENT, X_INERTIA_PARTIAL_DATA,
    X_INERTIA_VERSION,
};
pub use request::RequestSnapshot;
pub use response::ResponseEnvelope;
