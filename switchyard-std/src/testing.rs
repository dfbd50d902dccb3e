//! Testing utilities for Switchyard.
//!
//! This module provides utilities to make testing routers and handlers easier.
//!
//! # Features
//!
//! - [`RecordingSink`]: An output that records every emitted event
//! - [`SpyConnectable`]: A connectable that records its whole lifecycle and
//!   can be told to fail

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use switchyard_core::{
    AcceptError, BoxConnection, ConnectError, Connectable, Connection, DisposeError, EventSink,
    Output,
};
use thiserror::Error;

// ============================================================================
// Recording Sink
// ============================================================================

/// An output that records all events it receives.
///
/// # Example
///
/// ```rust,ignore
/// let sink = RecordingSink::new();
/// let mut connection = router.connect(sink.output())?;
/// connection.accept(&effect)?;
/// assert_eq!(sink.events(), vec![expected]);
/// ```
pub struct RecordingSink<E> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E: Clone + Send + 'static> RecordingSink<E> {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// An [`Output`] that records into this sink.
    pub fn output(&self) -> Output<E> {
        Arc::new(self.clone())
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<E> {
        self.events.lock().unwrap().clone()
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl<E: Clone + Send + 'static> Default for RecordingSink<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for RecordingSink<E> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl<E: Send> EventSink<E> for RecordingSink<E> {
    fn emit(&self, event: E) {
        self.events.lock().unwrap().push(event);
    }
}

// ============================================================================
// Spy Connectable
// ============================================================================

/// Failure injected by a [`SpyConnectable`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpyFailure {
    /// Injected by [`SpyConnectable::failing_connect`].
    #[error("`{0}` refused to connect")]
    Connect(&'static str),

    /// Injected by [`SpyConnectable::failing_dispose`].
    #[error("`{0}` failed to dispose")]
    Dispose(&'static str),

    /// Injected by [`SpyConnectable::failing_accept`].
    #[error("`{0}` failed to accept")]
    Accept(&'static str),
}

struct SpyState<I> {
    connects: AtomicUsize,
    disposes: AtomicUsize,
    open: AtomicUsize,
    accepted: Mutex<Vec<I>>,
}

/// A connectable that records connects, accepted values and disposes.
///
/// Clones share their records, so keep one clone for assertions and hand
/// the other to the builder.
///
/// # Example
///
/// ```rust,ignore
/// let spy = SpyConnectable::<Toast>::new("toast");
/// let router = builder.add_sub_router(spy.clone())?.build();
/// // ...
/// assert_eq!(spy.disposes(), 1);
/// ```
pub struct SpyConnectable<I> {
    name: &'static str,
    state: Arc<SpyState<I>>,
    exclusive: bool,
    fail_connect: bool,
    fail_accept: bool,
    fail_dispose: bool,
}

impl<I: Clone + Send + 'static> SpyConnectable<I> {
    /// Create a spy that accepts any number of connections and never fails.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Arc::new(SpyState {
                connects: AtomicUsize::new(0),
                disposes: AtomicUsize::new(0),
                open: AtomicUsize::new(0),
                accepted: Mutex::new(Vec::new()),
            }),
            exclusive: false,
            fail_connect: false,
            fail_accept: false,
            fail_dispose: false,
        }
    }

    /// Refuse a second connection while one is active.
    pub fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }

    /// Fail every `connect`.
    pub fn failing_connect(mut self) -> Self {
        self.fail_connect = true;
        self
    }

    /// Fail every `accept` after recording the value.
    pub fn failing_accept(mut self) -> Self {
        self.fail_accept = true;
        self
    }

    /// Fail every `dispose` after counting it.
    pub fn failing_dispose(mut self) -> Self {
        self.fail_dispose = true;
        self
    }

    /// Number of successful connects.
    pub fn connects(&self) -> usize {
        self.state.connects.load(Ordering::SeqCst)
    }

    /// Number of dispose calls received.
    pub fn disposes(&self) -> usize {
        self.state.disposes.load(Ordering::SeqCst)
    }

    /// Whether a connection is currently open.
    pub fn is_active(&self) -> bool {
        self.state.open.load(Ordering::SeqCst) > 0
    }

    /// Get a clone of the accepted values.
    pub fn accepted(&self) -> Vec<I> {
        self.state.accepted.lock().unwrap().clone()
    }
}

impl<I> Clone for SpyConnectable<I> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            state: self.state.clone(),
            exclusive: self.exclusive,
            fail_connect: self.fail_connect,
            fail_accept: self.fail_accept,
            fail_dispose: self.fail_dispose,
        }
    }
}

impl<I, O> Connectable<I, O> for SpyConnectable<I>
where
    I: Clone + Send + 'static,
{
    fn connect(&self, _output: Output<O>) -> Result<BoxConnection<I>, ConnectError> {
        if self.fail_connect {
            return Err(ConnectError::Failed(Box::new(SpyFailure::Connect(
                self.name,
            ))));
        }
        if self.exclusive && self.is_active() {
            return Err(ConnectError::LimitExceeded {
                connectable: self.name.to_string(),
            });
        }

        self.state.open.fetch_add(1, Ordering::SeqCst);
        self.state.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(SpyConnection {
            spy: self.clone(),
        }))
    }
}

struct SpyConnection<I> {
    spy: SpyConnectable<I>,
}

impl<I: Clone + Send + 'static> Connection<I> for SpyConnection<I> {
    fn accept(&mut self, value: &I) -> Result<(), AcceptError> {
        self.spy.state.accepted.lock().unwrap().push(value.clone());
        if self.spy.fail_accept {
            return Err(AcceptError::Handler(Box::new(SpyFailure::Accept(
                self.spy.name,
            ))));
        }
        Ok(())
    }

    fn dispose(&mut self) -> Result<(), DisposeError> {
        self.spy.state.disposes.fetch_add(1, Ordering::SeqCst);
        let _ = self
            .spy
            .state
            .open
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |open| open.checked_sub(1));
        if self.spy.fail_dispose {
            return Err(DisposeError::single(SpyFailure::Dispose(self.spy.name)));
        }
        Ok(())
    }
}
