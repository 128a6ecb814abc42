//! Tagged page properties.
//!
//! # Responsibilities
//! - Distinguish plain values from eager and lazy producers at the type level
//! - Box producers into a uniform single-shot async shape
//!
//! # Design Decisions
//! - Producers are `FnOnce`: a session is single-use, so each producer runs
//!   at most once per request
//! - Producer errors are opaque (`BoxError`) and propagate unmodified; the
//!   engine never classifies them

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

/// Opaque error type surfaced by prop producers and template renderers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Boxed future returned by a producer.
pub type PropFuture = Pin<Box<dyn Future<Output = Result<Value, BoxError>> + Send>>;

/// Single-shot async producer for a prop value.
pub type PropProducer = Box<dyn FnOnce() -> PropFuture + Send>;

/// One named page property.
pub enum Prop {
    /// Plain value, used as-is.
    Value(Value),
    /// Producer invoked whenever the key is in scope for the request.
    Eager(PropProducer),
    /// Producer invoked only when the key is explicitly whitelisted by a
    /// partial reload; omitted entirely from full loads.
    Lazy(PropProducer),
}

impl Prop {
    /// Plain eager value.
    pub fn value(value: impl Into<Value>) -> Self {
        Prop::Value(value.into())
    }

    /// Eager producer, evaluated on every load that includes its key.
    pub fn eager<F, Fut>(producer: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Value, BoxError>> + Send + 'static,
    {
        Prop::Eager(Box::new(move || Box::pin(producer())))
    }

    /// Lazy producer, evaluated only when a partial reload names its key.
    pub fn lazy<F, Fut>(producer: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Value, BoxError>> + Send + 'static,
    {
        Prop::Lazy(Box::new(move || Box::pin(producer())))
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, Prop::Lazy(_))
    }
}

impl From<Value> for Prop {
    fn from(value: Value) -> Self {
        Prop::Value(value)
    }
}

impl fmt::Debug for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prop::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Prop::Eager(_) => f.write_str("Eager(..)"),
            Prop::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}
