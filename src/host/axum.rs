//! Axum host adapter.
//!
//! # Responsibilities
//! - Build a `RequestSnapshot` from the native request
//! - Cache one render session per request (extensions-backed slot) so
//!   every middleware layer and the handler see the same session
//! - Turn the final envelope into an axum `Response`, routing document
//!   replies through the configured template renderer
//!
//! # Usage
//! ```text
//! Router::new()
//!     .route("/users", get(users_index))
//!     .layer(middleware::from_fn_with_state(state.clone(), inertia_session))
//!     .with_state(state)
//!
//! async fn users_index(inertia: Inertia) -> Result<Response, RenderError> {
//!     inertia.render("Users/Index", props).await
//! }
//! ```
//! The middleware layer is optional: the extractor seeds the slot itself
//! when no earlier layer has.

use std::convert::Infallible;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{FromRef, FromRequestParts, OriginalUri, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::request::Parts;
use http::{Extensions, HeaderMap, Method, StatusCode, Uri};
use serde_json::Value;

use crate::engine::{Engine, RenderError};
use crate::host::ViewContext;
use crate::http::RequestSnapshot;
use crate::props::{Prop, Props};
use crate::session::RenderSession;

/// Shared state for the adapter: the engine handle.
#[derive(Clone)]
pub struct InertiaState {
    engine: Arc<Engine>,
}

impl InertiaState {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Arc<Engine> {
        &self.engine
    }
}

/// Per-request slot caching the render session across layers.
///
/// Cloning shares the slot; the first render call takes the session out,
/// after which the slot reads as consumed.
#[derive(Clone)]
pub struct SessionCell(Arc<Mutex<Option<RenderSession>>>);

impl SessionCell {
    fn new(session: RenderSession) -> Self {
        Self(Arc::new(Mutex::new(Some(session))))
    }

    fn take(&self) -> Option<RenderSession> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }

    fn with<R>(&self, f: impl FnOnce(&mut RenderSession) -> R) -> Option<R> {
        self.0.lock().ok().and_then(|mut slot| slot.as_mut().map(f))
    }
}

fn snapshot_from(
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    extensions: &Extensions,
) -> RequestSnapshot {
    let url = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let mut snapshot = RequestSnapshot::new(method.clone(), url, headers.clone());

    // Nested routers strip their prefix from `uri`; the client navigated to
    // the original one.
    if let Some(OriginalUri(original)) = extensions.get::<OriginalUri>() {
        if let Some(pq) = original.path_and_query() {
            if pq.as_str() != snapshot.url() {
                snapshot = snapshot.with_original_url(pq.as_str());
            }
        }
    }
    snapshot
}

/// Middleware that seeds the per-request session slot.
///
/// Place it outside any layer that needs to touch the session (flash
/// merging, shared props) before the handler renders.
pub async fn inertia_session(
    State(state): State<InertiaState>,
    mut request: Request,
    next: Next,
) -> Response {
    if request.extensions().get::<SessionCell>().is_none() {
        let snapshot = snapshot_from(
            request.method(),
            request.uri(),
            request.headers(),
            request.extensions(),
        );
        let cell = SessionCell::new(state.engine.session(snapshot));
        request.extensions_mut().insert(cell);
    }
    next.run(request).await
}

/// Extractor giving handlers access to the request's render session.
pub struct Inertia {
    engine: Arc<Engine>,
    cell: SessionCell,
}

impl<S> FromRequestParts<S> for Inertia
where
    InertiaState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = InertiaState::from_ref(state);
        let cell = match parts.extensions.get::<SessionCell>() {
            Some(cell) => cell.clone(),
            None => {
                let snapshot =
                    snapshot_from(&parts.method, &parts.uri, &parts.headers, &parts.extensions);
                let cell = SessionCell::new(state.engine.session(snapshot));
                parts.extensions.insert(cell.clone());
                cell
            }
        };
        Ok(Self {
            engine: state.engine.clone(),
            cell,
        })
    }
}

impl Inertia {
    /// Run `f` against the live session. Fails once the session has been
    /// consumed by a render call.
    pub fn with_session<R>(
        &self,
        f: impl FnOnce(&mut RenderSession) -> R,
    ) -> Result<R, RenderError> {
        self.cell.with(f).ok_or(RenderError::SessionConsumed)
    }

    /// Replace the session's shared prop set.
    pub fn share(&self, props: Props) -> Result<(), RenderError> {
        self.with_session(|session| {
            session.share(props);
        })
    }

    /// Add or overwrite one shared prop.
    pub fn with(&self, key: impl Into<String>, prop: Prop) -> Result<(), RenderError> {
        self.with_session(|session| {
            session.with(key, prop);
        })
    }

    /// Add or overwrite one shared plain value.
    pub fn with_value(
        &self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), RenderError> {
        self.with_session(|session| {
            session.with_value(key, value);
        })
    }

    /// Set the reply status code.
    pub fn status(&self, status: StatusCode) -> Result<(), RenderError> {
        self.with_session(|session| {
            session.status(status);
        })
    }

    async fn resolve_envelope(
        &self,
        component: &str,
        props: Props,
    ) -> Result<(crate::config::InertiaConfig, crate::http::ResponseEnvelope), RenderError> {
        let session = self.cell.take().ok_or(RenderError::SessionConsumed)?;
        // Pin the session's config for the document context before the
        // session is consumed.
        let config = session.config().clone();
        let envelope = session.render(component, props).await?;
        Ok((config, envelope))
    }

    fn document_html(
        &self,
        config: &crate::config::InertiaConfig,
        envelope: &crate::http::ResponseEnvelope,
    ) -> Result<String, RenderError> {
        let renderer = self.engine.renderer().ok_or(RenderError::MissingRenderer)?;
        let context = ViewContext::new(config, envelope);
        renderer
            .render(&config.view, &context)
            .map_err(RenderError::Template)
    }

    /// Resolve the page and produce the axum response. Protocol replies are
    /// written directly; document replies run the engine's template
    /// renderer with the view context.
    pub async fn render(&self, component: &str, props: Props) -> Result<Response, RenderError> {
        let (config, envelope) = self.resolve_envelope(component, props).await?;
        if envelope.is_protocol_reply {
            return Ok(envelope.into_response());
        }

        let html = self.document_html(&config, &envelope)?;
        let mut response = Response::new(Body::from(html));
        *response.status_mut() = envelope.status;
        *response.headers_mut() = envelope.headers;
        Ok(response)
    }

    /// Resolve the page and return the reply body as a string instead of a
    /// response: the page-object JSON for protocol requests, the rendered
    /// document HTML otherwise. For hosts that forward the output through
    /// their own response layer.
    pub async fn render_to_string(
        &self,
        component: &str,
        props: Props,
    ) -> Result<String, RenderError> {
        let (config, envelope) = self.resolve_envelope(component, props).await?;
        if envelope.is_protocol_reply {
            return Ok(envelope.body.unwrap_or_default());
        }
        self.document_html(&config, &envelope)
    }
}

impl IntoResponse for crate::http::ResponseEnvelope {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body.unwrap_or_default()));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "inertia render failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
