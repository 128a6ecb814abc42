//! Server-side adapter for the Inertia page-transition protocol.
//!
//! # Data Flow
//! ```text
//! inbound request (host framework)
//!     → http::RequestSnapshot (normalized method/url/headers)
//!     → Engine::session (config snapshot pinned here)
//!     → RenderSession builder calls (share props, status, headers)
//!     → render: version gate → prop resolution → page envelope
//!     → http::ResponseEnvelope (protocol JSON or document render context)
//! ```
//!
//! The engine core has no framework dependency; the `host` module carries
//! the axum adapter and the template-renderer contract for document mode.

pub mod config;
pub mod engine;
pub mod host;
pub mod http;
pub mod props;
pub mod session;

pub use self::config::{AssetVersion, ConfigUpdate, InertiaConfig};
pub use self::engine::{Engine, PageObject, RenderError, ReplyMode};
pub use self::host::{Inertia, InertiaState, TemplateRenderer, ViewContext};
pub use self::http::{RequestSnapshot, ResponseEnvelope};
pub use self::props::{BoxError, Prop, Props};
pub use self::session::RenderSession;
