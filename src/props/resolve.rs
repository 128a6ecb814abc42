//! Prop resolution: partial-reload filtering and producer evaluation.
//!
//! # Responsibilities
//! - Decide whether the request is a partial reload for this component
//! - Compute the effective key set and its order
//! - Evaluate producers sequentially, preserving key order in the output
//!
//! # Design Decisions
//! - Strictly sequential awaits: clients diff by key presence and order,
//!   so inter-key parallelism is a protocol regression, not an optimization
//! - Whitelisted keys missing from the merged map are silently absent
//! - A producer error aborts resolution and propagates to the caller

use serde_json::{Map, Value};

use crate::engine::RenderError;
use crate::http::RequestSnapshot;
use crate::props::entry::Prop;
use crate::props::map::Props;

/// Parsed partial-reload directive.
///
/// Present only when the request carries a partial-data whitelist AND its
/// partial-component header matches the component being rendered exactly;
/// anything else is a full load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialReload {
    keys: Vec<String>,
}

impl PartialReload {
    /// Detect a partial reload for `component` on this request.
    ///
    /// Empty and duplicate tokens in the whitelist are filtered silently;
    /// the surviving tokens keep their header order.
    pub fn from_request(request: &RequestSnapshot, component: &str) -> Option<Self> {
        // An empty whitelist counts as no whitelist: full load.
        let data = request.partial_data().filter(|d| !d.is_empty())?;
        if request.partial_component() != Some(component) {
            return None;
        }

        let mut keys: Vec<String> = Vec::new();
        for token in data.split(',') {
            if token.is_empty() || keys.iter().any(|k| k == token) {
                continue;
            }
            keys.push(token.to_string());
        }
        Some(Self { keys })
    }

    /// Whitelisted prop names, in header order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

/// Evaluate the merged prop map into the final ordered JSON map.
///
/// Effective keys are the partial whitelist when one is active, otherwise
/// every key of `merged` in insertion order. Lazy props run only under an
/// active partial reload; on full loads they are omitted entirely.
pub async fn resolve_props(
    mut merged: Props,
    partial: Option<&PartialReload>,
) -> Result<Map<String, Value>, RenderError> {
    let keys: Vec<String> = match partial {
        Some(p) => p.keys().to_vec(),
        None => merged.keys().map(str::to_owned).collect(),
    };

    let mut resolved = Map::new();
    for key in keys {
        let Some(prop) = merged.take(&key) else {
            // Whitelisted name with no matching prop: silently absent.
            continue;
        };
        match prop {
            Prop::Value(value) => {
                resolved.insert(key, value);
            }
            Prop::Eager(producer) => {
                tracing::trace!(key = %key, "evaluating eager prop");
                let value = producer()
                    .await
                    .map_err(|source| RenderError::Prop { key: key.clone(), source })?;
                resolved.insert(key, value);
            }
            Prop::Lazy(producer) => {
                if partial.is_none() {
                    continue;
                }
                tracing::trace!(key = %key, "evaluating lazy prop");
                let value = producer()
                    .await
                    .map_err(|source| RenderError::Prop { key: key.clone(), source })?;
                resolved.insert(key, value);
            }
        }
    }
    Ok(resolved)
}
