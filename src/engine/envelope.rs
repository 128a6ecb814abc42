//! Page object serialization and reply-header assembly.
//!
//! # Responsibilities
//! - Serialize the page object to the protocol's JSON wire form
//! - Pick the reply mode's base headers
//! - Apply session custom headers last so they override any base header
//!
//! # Design Decisions
//! - View data never enters the JSON body; it rides on the envelope for
//!   document-mode template rendering only

use http::header::{CONTENT_TYPE, VARY};
use http::{HeaderMap, HeaderValue, StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::AssetVersion;
use crate::engine::RenderError;
use crate::http::{ResponseEnvelope, X_INERTIA};

/// Canonical JSON payload describing one screen.
#[derive(Debug, Clone, Serialize)]
pub struct PageObject {
    pub component: String,
    pub props: Map<String, Value>,
    pub url: String,
    pub version: AssetVersion,
}

/// Which of the two reply paths the request asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyMode {
    /// `X-Inertia: true` on the request: serialized page object as JSON.
    Protocol,
    /// Plain browser navigation: page object embedded in an HTML document.
    Document,
}

fn base_headers(mode: ReplyMode) -> HeaderMap {
    let mut headers = HeaderMap::new();
    match mode {
        ReplyMode::Protocol => {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            headers.insert(VARY, HeaderValue::from_static("Accept"));
            headers.insert(X_INERTIA, HeaderValue::from_static("true"));
        }
        ReplyMode::Document => {
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            );
        }
    }
    headers
}

/// Assemble the final envelope for a resolved page.
pub(crate) fn build(
    page: &PageObject,
    mode: ReplyMode,
    status: StatusCode,
    custom_headers: &HeaderMap,
    view_data: Map<String, Value>,
) -> Result<ResponseEnvelope, RenderError> {
    let body = serde_json::to_string(page)?;

    let mut headers = base_headers(mode);
    for (name, value) in custom_headers {
        headers.insert(name.clone(), value.clone());
    }

    tracing::debug!(
        component = %page.component,
        mode = ?mode,
        status = %status,
        props = page.props.len(),
        "page envelope assembled"
    );

    Ok(ResponseEnvelope {
        status,
        headers,
        body: Some(body),
        is_protocol_reply: mode == ReplyMode::Protocol,
        view_data,
    })
}
