//! Per-request render session.
//!
//! # Responsibilities
//! - Accumulate shared props, view data, custom headers and status code
//!   across middleware/handler layers within one request
//! - Run the render pipeline exactly once
//!
//! # Design Decisions
//! - `render` consumes the session, so reuse after render is a compile
//!   error rather than undefined behavior
//! - The config snapshot is pinned at session creation; a concurrent
//!   config update never tears a request

use std::sync::Arc;

use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use serde_json::{Map, Value};

use crate::config::InertiaConfig;
use crate::engine::envelope::{self, PageObject, ReplyMode};
use crate::engine::{version, RenderError};
use crate::http::{RequestSnapshot, ResponseEnvelope};
use crate::props::{resolve_props, PartialReload, Prop, Props};

/// Mutable per-request state, consumed by `render`.
pub struct RenderSession {
    request: RequestSnapshot,
    config: Arc<InertiaConfig>,
    status: StatusCode,
    shared: Props,
    view_data: Map<String, Value>,
    custom_headers: HeaderMap,
}

impl RenderSession {
    pub(crate) fn new(request: RequestSnapshot, config: Arc<InertiaConfig>) -> Self {
        Self {
            request,
            config,
            status: StatusCode::OK,
            shared: Props::new(),
            view_data: Map::new(),
            custom_headers: HeaderMap::new(),
        }
    }

    pub fn request(&self) -> &RequestSnapshot {
        &self.request
    }

    /// Config snapshot this session was created with.
    pub fn config(&self) -> &InertiaConfig {
        &self.config
    }

    /// Replace the shared prop set wholesale.
    pub fn share(&mut self, props: Props) -> &mut Self {
        self.shared = props;
        self
    }

    /// Add or overwrite one shared prop.
    pub fn with(&mut self, key: impl Into<String>, prop: Prop) -> &mut Self {
        self.shared.insert(key, prop);
        self
    }

    /// Add or overwrite one shared plain value.
    pub fn with_value(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.with(key, Prop::value(value))
    }

    /// Shared prop stored under `key`, if any. Callers wanting a fallback
    /// chain `unwrap_or` instead of passing a default value.
    pub fn get_shared(&self, key: &str) -> Option<&Prop> {
        self.shared.get(key)
    }

    /// Drop all shared props.
    pub fn flush_shared(&mut self) -> &mut Self {
        self.shared.clear();
        self
    }

    /// Merge validation errors in under the conventional `errors` key.
    pub fn with_errors(&mut self, errors: impl Into<Value>) -> &mut Self {
        self.with("errors", Prop::value(errors))
    }

    /// Merge a plain-text flash message in under the conventional `flash`
    /// key, wrapped as `{"message": ...}`.
    pub fn with_flash_message(&mut self, message: impl Into<String>) -> &mut Self {
        let mut flash = Map::new();
        flash.insert("message".to_string(), Value::String(message.into()));
        self.with("flash", Prop::value(Value::Object(flash)))
    }

    /// Merge structured flash data in under the conventional `flash` key.
    pub fn with_flash(&mut self, flash: impl Into<Value>) -> &mut Self {
        self.with("flash", Prop::value(flash))
    }

    /// Attach one entry to the document render context.
    pub fn with_view_data(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.view_data.insert(key.into(), value.into());
        self
    }

    /// Set one reply header. Custom headers override the mode base headers.
    pub fn with_header(&mut self, name: HeaderName, value: HeaderValue) -> &mut Self {
        self.custom_headers.insert(name, value);
        self
    }

    /// Merge a batch of reply headers, overriding on collision.
    pub fn with_headers(&mut self, headers: HeaderMap) -> &mut Self {
        for (name, value) in &headers {
            self.custom_headers.insert(name.clone(), value.clone());
        }
        self
    }

    /// Set the reply status code (default 200).
    pub fn status(&mut self, status: StatusCode) -> &mut Self {
        self.status = status;
        self
    }

    /// Run the render pipeline: version gate, prop resolution, envelope
    /// assembly. Consumes the session; a session renders at most once.
    pub async fn render(
        mut self,
        component: &str,
        props: Props,
    ) -> Result<ResponseEnvelope, RenderError> {
        // Gate first: a conflicting request must not evaluate any producer.
        if let Some(conflict) = version::version_conflict(&self.request, &self.config.version) {
            return Ok(conflict);
        }

        let mode = if self.request.is_protocol_request() {
            ReplyMode::Protocol
        } else {
            ReplyMode::Document
        };
        let partial = PartialReload::from_request(&self.request, component);

        tracing::debug!(
            component = %component,
            mode = ?mode,
            partial = partial.is_some(),
            url = %self.request.page_url(),
            "resolving page"
        );

        let mut merged = std::mem::take(&mut self.shared);
        merged.merge(props);
        let resolved = resolve_props(merged, partial.as_ref()).await?;

        let page = PageObject {
            component: component.to_string(),
            props: resolved,
            url: self.request.page_url().to_string(),
            version: self.config.version.clone(),
        };

        envelope::build(&page, mode, self.status, &self.custom_headers, self.view_data)
    }
}
