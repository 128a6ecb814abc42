//! Protocol configuration subsystem.
//!
//! # Data Flow
//! ```text
//! host startup
//!     → schema.rs (InertiaConfig: view, asset version, manifest)
//!     → store.rs (ConfigStore: atomic snapshot, shallow merges)
//!     → Engine holds the store
//!
//! Per request:
//!     Engine::session reads one snapshot (Arc) at session creation
//!     → the whole request sees a single coherent config
//! ```
//!
//! # Design Decisions
//! - Config is injected at engine construction, never process-global
//! - Updates are shallow last-writer-wins merges, expected before traffic
//! - Reads are wait-free (arc-swap); writers never block readers
//! - All fields have defaults so a zero-config engine works out of the box

pub mod schema;
pub mod store;

pub use schema::{AssetVersion, ConfigUpdate, InertiaConfig};
pub use store::ConfigStore;
