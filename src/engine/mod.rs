//! Protocol translation engine.
//!
//! # Data Flow
//! ```text
//! RequestSnapshot
//!     → Engine::session (config snapshot pinned for the request)
//!     → RenderSession::render(component, props)
//!         → version.rs  (stale bundle? → 409 short-circuit)
//!         → props::resolve (partial filtering, producer evaluation)
//!         → envelope.rs (page object JSON, mode headers, overrides)
//!     → ResponseEnvelope
//! ```
//!
//! # Design Decisions
//! - One engine per host instance, injected where it is needed; no statics
//! - `resolve` is the whole host-facing contract; hosts that need builder
//!   state go through `session` instead
//! - The engine assigns no error status codes; producer failures propagate
//!   for the host to classify

use std::sync::Arc;

use thiserror::Error;

use crate::config::{ConfigStore, ConfigUpdate, InertiaConfig};
use crate::host::TemplateRenderer;
use crate::http::{RequestSnapshot, ResponseEnvelope};
use crate::props::{BoxError, Props};
use crate::session::RenderSession;

pub mod envelope;
pub(crate) mod version;

pub use envelope::{PageObject, ReplyMode};

/// Failure surfaced by a render call.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A prop producer failed. The producer's error is preserved unmodified
    /// as the source; no status code is assigned here.
    #[error("evaluation of prop '{key}' failed")]
    Prop {
        key: String,
        #[source]
        source: BoxError,
    },

    /// Page object serialization failed.
    #[error("page serialization failed")]
    Serialize(#[from] serde_json::Error),

    /// Document-mode template rendering failed in the host adapter.
    #[error("template render failed")]
    Template(#[source] BoxError),

    /// A document-mode reply was requested but no template renderer is
    /// configured on the engine.
    #[error("no template renderer configured for document-mode reply")]
    MissingRenderer,

    /// The per-request session slot was already consumed by an earlier
    /// render call.
    #[error("render session already consumed for this request")]
    SessionConsumed,
}

/// Protocol engine: configuration plus the render entry points.
pub struct Engine {
    config: ConfigStore,
    renderer: Option<Arc<dyn TemplateRenderer>>,
}

impl Engine {
    pub fn new(config: InertiaConfig) -> Self {
        Self {
            config: ConfigStore::new(config),
            renderer: None,
        }
    }

    /// Attach the document-mode template renderer.
    pub fn with_renderer(mut self, renderer: Arc<dyn TemplateRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> Arc<InertiaConfig> {
        self.config.snapshot()
    }

    /// Shallow-merge a configuration update. Intended for startup/route
    /// registration, before traffic begins.
    pub fn update_config(&self, update: ConfigUpdate) {
        self.config.update(update);
    }

    /// Start a render session for one request. The session pins the config
    /// snapshot current at this moment.
    pub fn session(&self, request: RequestSnapshot) -> RenderSession {
        RenderSession::new(request, self.config.snapshot())
    }

    /// One-shot resolution for hosts with no per-request builder state:
    /// request + component + props in, envelope out.
    pub async fn resolve(
        &self,
        request: RequestSnapshot,
        component: &str,
        props: Props,
    ) -> Result<ResponseEnvelope, RenderError> {
        self.session(request).render(component, props).await
    }

    pub(crate) fn renderer(&self) -> Option<&Arc<dyn TemplateRenderer>> {
        self.renderer.as_ref()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(InertiaConfig::default())
    }
}
