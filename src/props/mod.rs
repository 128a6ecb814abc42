//! Page property subsystem.
//!
//! # Data Flow
//! ```text
//! session shared props + call-site props
//!     → map.rs (Props: ordered association list, explicit wins on merge)
//!     → resolve.rs (partial-reload detection, effective key set)
//!     → entry.rs producers evaluated sequentially, in key order
//!     → ordered JSON map for the page object
//! ```
//!
//! # Design Decisions
//! - A prop is a tagged union (value / eager producer / lazy producer),
//!   decided at insertion time; no runtime inspection of values
//! - Insertion order is the protocol order; clients diff by key presence
//!   and order, so nothing here may reorder
//! - Lazy props never run on full loads; they are absent, not null

pub mod entry;
pub mod map;
pub mod resolve;

pub use entry::{BoxError, Prop};
pub use map::Props;
pub use resolve::{resolve_props, PartialReload};
