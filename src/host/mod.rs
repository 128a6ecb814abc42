//! Host-framework collaborator contract.
//!
//! # Data Flow
//! ```text
//! host adapter (axum module here; any framework can implement the same)
//!     → builds a RequestSnapshot from its native request
//!     → calls Engine::resolve / RenderSession::render
//!     → protocol reply: writes status/headers/body directly
//!     → document reply: TemplateRenderer::render(view, ViewContext)
//!       and writes the returned HTML
//! ```
//!
//! # Design Decisions
//! - Template rendering stays entirely outside the engine core; this module
//!   only fixes the call contract
//! - `ViewContext` serializes with view data flattened at the top level so
//!   template variables read naturally

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::InertiaConfig;
use crate::http::ResponseEnvelope;
use crate::props::BoxError;

pub mod axum;

pub use self::axum::{inertia_session, Inertia, InertiaState, SessionCell};

/// Document-mode template rendering, supplied by the host.
pub trait TemplateRenderer: Send + Sync {
    /// Render the named view with the given context, returning HTML.
    fn render(&self, view: &str, context: &ViewContext) -> Result<String, BoxError>;
}

/// Context handed to the document template.
#[derive(Debug, Clone, Serialize)]
pub struct ViewContext {
    /// Asset manifest from the engine configuration.
    pub manifest: Option<Map<String, Value>>,

    /// Serialized page object JSON, ready to embed in the app root element.
    pub page: String,

    /// Session view data, flattened into the top level of the context.
    #[serde(flatten)]
    pub view_data: Map<String, Value>,
}

impl ViewContext {
    pub fn new(config: &InertiaConfig, envelope: &ResponseEnvelope) -> Self {
        Self {
            manifest: config.manifest.clone(),
            page: envelope.body.clone().unwrap_or_default(),
            view_data: envelope.view_data.clone(),
        }
    }
}
