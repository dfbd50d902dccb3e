//! Channel-backed outputs.
//!
//! Lets an async loop consume router events as a `Stream`:
//!
//! ```rust,ignore
//! let (output, mut events) = switchyard::output::channel();
//! let mut connection = router.connect(output)?;
//! connection.accept(&effect)?;
//! while let Some(event) = events.next().await { .. }
//! ```

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use std::sync::Arc;
use switchyard_core::{EventSink, Output};

/// An [`EventSink`] forwarding into an unbounded `futures` channel.
///
/// Events emitted after the receiver is dropped are discarded.
pub struct ChannelOutput<E> {
    sender: UnboundedSender<E>,
}

impl<E> ChannelOutput<E> {
    /// Wrap an existing sender.
    pub fn new(sender: UnboundedSender<E>) -> Self {
        Self { sender }
    }
}

impl<E: Send> EventSink<E> for ChannelOutput<E> {
    fn emit(&self, event: E) {
        if let Err(err) = self.sender.unbounded_send(event) {
            #[cfg(feature = "tracing")]
            tracing::trace!(disconnected = err.is_disconnected(), "event receiver is gone");
            #[cfg(not(feature = "tracing"))]
            let _ = err;
        }
    }
}

/// Create an output and the receiver its events arrive on.
pub fn channel<E: Send + 'static>() -> (Output<E>, UnboundedReceiver<E>) {
    let (sender, receiver) = unbounded();
    (Arc::new(ChannelOutput::new(sender)), receiver)
}
