//! Merging multiplexer.
//!
//! Presents N child connectables as one. Every child is connected to the same
//! output, and every accepted value is offered to every child in
//! registration order.

use switchyard_core::{
    AcceptError, BoxConnectable, BoxConnection, ConnectError, Connectable, Connection,
    DisposeError, Output,
};

/// Fan-out over several connectables sharing one output.
pub struct MergedConnectable<I, O> {
    children: Vec<BoxConnectable<I, O>>,
}

impl<I, O> MergedConnectable<I, O> {
    /// Merge `children`; order is preserved for connect, accept and dispose.
    pub fn new(children: Vec<BoxConnectable<I, O>>) -> Self {
        Self { children }
    }

    /// Number of merged children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<I: 'static, O> Connectable<I, O> for MergedConnectable<I, O> {
    fn connect(&self, output: Output<O>) -> Result<BoxConnection<I>, ConnectError> {
        let mut connected = Vec::with_capacity(self.children.len());

        for child in &self.children {
            match child.connect(output.clone()) {
                Ok(connection) => connected.push(connection),
                Err(err) => {
                    rollback(connected);
                    return Err(err);
                }
            }
        }

        Ok(Box::new(MergedConnection {
            children: connected,
        }))
    }
}

/// Dispose children connected before a sibling failed to connect.
///
/// The connect error is what the caller gets back, so failures here can only
/// be logged.
fn rollback<I>(connected: Vec<BoxConnection<I>>) {
    for mut connection in connected {
        if let Err(err) = connection.dispose() {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, "failed to dispose child during connect rollback");
            #[cfg(not(feature = "tracing"))]
            let _ = err;
        }
    }
}

struct MergedConnection<I> {
    children: Vec<BoxConnection<I>>,
}

impl<I> Connection<I> for MergedConnection<I> {
    fn accept(&mut self, value: &I) -> Result<(), AcceptError> {
        for child in &mut self.children {
            child.accept(value)?;
        }
        Ok(())
    }

    fn dispose(&mut self) -> Result<(), DisposeError> {
        let mut failures = Vec::new();
        for child in &mut self.children {
            if let Err(err) = child.dispose() {
                failures.extend(err.into_failures());
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DisposeError::new(failures))
        }
    }
}
