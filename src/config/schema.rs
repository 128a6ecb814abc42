//! Configuration schema definitions.
//!
//! All types derive Serde traits so hosts can deserialize them from their
//! own config files alongside the rest of their settings.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque token identifying the deployed frontend asset bundle.
///
/// Clients echo this token back on every protocol request; a mismatch
/// forces a full-page navigation. String or number, compared by canonical
/// string form so a numeric `2` matches the header value `"2"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetVersion {
    /// Textual token (content hash, build id, ...).
    Text(String),
    /// Numeric token (build counter, timestamp, ...).
    Number(serde_json::Number),
}

impl AssetVersion {
    /// Canonical string form used for comparison against header values.
    pub fn token(&self) -> String {
        match self {
            AssetVersion::Text(s) => s.clone(),
            AssetVersion::Number(n) => n.to_string(),
        }
    }

    /// Returns true if the client-declared token matches this version.
    pub fn matches(&self, declared: &str) -> bool {
        match self {
            AssetVersion::Text(s) => s == declared,
            AssetVersion::Number(n) => n.to_string() == declared,
        }
    }
}

impl Default for AssetVersion {
    fn default() -> Self {
        AssetVersion::Text("1".to_string())
    }
}

impl fmt::Display for AssetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetVersion::Text(s) => f.write_str(s),
            AssetVersion::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for AssetVersion {
    fn from(value: &str) -> Self {
        AssetVersion::Text(value.to_string())
    }
}

impl From<String> for AssetVersion {
    fn from(value: String) -> Self {
        AssetVersion::Text(value)
    }
}

impl From<u64> for AssetVersion {
    fn from(value: u64) -> Self {
        AssetVersion::Number(serde_json::Number::from(value))
    }
}

/// Protocol configuration for one engine instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InertiaConfig {
    /// Template identifier handed to the document-mode renderer.
    pub view: String,

    /// Current asset version token.
    pub version: AssetVersion,

    /// Optional asset manifest forwarded into the document render context.
    pub manifest: Option<Map<String, Value>>,
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self {
            view: "app".to_string(),
            version: AssetVersion::default(),
            manifest: None,
        }
    }
}

impl InertiaConfig {
    /// Shallow merge: fields present in `update` overwrite, absent fields
    /// keep their current values.
    pub fn merged(&self, update: ConfigUpdate) -> Self {
        Self {
            view: update.view.unwrap_or_else(|| self.view.clone()),
            version: update.version.unwrap_or_else(|| self.version.clone()),
            manifest: update.manifest.or_else(|| self.manifest.clone()),
        }
    }
}

/// Partial configuration used for shallow merges over a running engine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigUpdate {
    pub view: Option<String>,
    pub version: Option<AssetVersion>,
    pub manifest: Option<Map<String, Value>>,
}

impl ConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(mut self, view: impl Into<String>) -> Self {
        self.view = Some(view.into());
        self
    }

    pub fn version(mut self, version: impl Into<AssetVersion>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn manifest(mut self, manifest: Map<String, Value>) -> Self {
        self.manifest = Some(manifest);
        self
    }
}
