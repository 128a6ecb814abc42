//! Shared helpers for integration tests.

#![allow(dead_code)]

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use inertia_adapter::{AssetVersion, ConfigUpdate, Engine, InertiaConfig, RequestSnapshot};

pub fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(
            HeaderName::try_from(*name).unwrap(),
            HeaderValue::from_str(value).unwrap(),
        );
    }
    map
}

pub fn get(url: &str, header_pairs: &[(&str, &str)]) -> RequestSnapshot {
    RequestSnapshot::new(Method::GET, url, headers(header_pairs))
}

pub fn engine_with_version(version: impl Into<AssetVersion>) -> Engine {
    let engine = Engine::new(InertiaConfig::default());
    engine.update_config(ConfigUpdate::new().version(version));
    engine
}
