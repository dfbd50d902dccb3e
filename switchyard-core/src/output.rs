//! Output channel abstraction.
//!
//! Handlers emit events into an [`Output`]. One output is shared by every
//! handler behind a router, and handlers may emit from their own threads, so
//! sinks are `Send + Sync` and reached through an `Arc`.

use std::sync::Arc;

/// Receives events emitted by connected handlers.
pub trait EventSink<E>: Send + Sync {
    /// Deliver one event downstream.
    fn emit(&self, event: E);
}

impl<E, F> EventSink<E> for F
where
    F: Fn(E) + Send + Sync,
{
    fn emit(&self, event: E) {
        (self)(event)
    }
}

/// A shared handle to an [`EventSink`].
pub type Output<E> = Arc<dyn EventSink<E>>;

/// Wrap a sink into a shareable [`Output`].
pub fn output<E, S>(sink: S) -> Output<E>
where
    S: EventSink<E> + 'static,
{
    Arc::new(sink)
}
