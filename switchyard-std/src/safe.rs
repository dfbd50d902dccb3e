//! # Safety Wrapper
//!
//! Enforces the connection lifecycle around any connectable, independent of
//! how the wrapped handlers behave:
//!
//! - **Single connection**: a second `connect` while one is active fails with
//!   [`ConnectError::LimitExceeded`].
//! - **Idempotent dispose**: after the first `dispose`, `accept` and
//!   `dispose` are no-ops.
//! - **Silent output**: events emitted after `dispose` never reach the
//!   output, even when a handler emits from another thread.
//!
//! Errors raised by handlers during `accept` pass through untouched.

use std::{
    borrow::Cow,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};
use switchyard_core::{
    AcceptError, BoxConnection, ConnectError, Connectable, Connection, DisposeError, EventSink,
    Output,
};

/// Wraps a connectable with the lifecycle guarantees described above.
pub struct SafeConnectable<C> {
    inner: C,
    name: Cow<'static, str>,
    active: Arc<AtomicBool>,
}

impl<C> SafeConnectable<C> {
    /// Wrap `inner`, naming it in connection-limit errors.
    pub fn new(inner: C, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            name: name.into(),
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The name used in errors and logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether an undisposed connection currently exists.
    pub fn is_connected(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

/// Clears the active flag on drop unless defused, so a panicking handler
/// cannot leave the wrapper locked.
struct Release<'a> {
    active: &'a AtomicBool,
    armed: bool,
}

impl<'a> Release<'a> {
    fn new(active: &'a AtomicBool) -> Self {
        Self {
            active,
            armed: true,
        }
    }

    fn defuse(mut self) {
        self.armed = false;
    }
}

impl Drop for Release<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.active.store(false, Ordering::Release);
        }
    }
}

impl<I, O, C> Connectable<I, O> for SafeConnectable<C>
where
    I: 'static,
    O: 'static,
    C: Connectable<I, O>,
{
    fn connect(&self, output: Output<O>) -> Result<BoxConnection<I>, ConnectError> {
        if self
            .active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ConnectError::LimitExceeded {
                connectable: self.name.to_string(),
            });
        }
        let release = Release::new(&self.active);

        let disposed = Arc::new(AtomicBool::new(false));
        let guarded: Output<O> = Arc::new(SafeOutput {
            inner: output,
            disposed: disposed.clone(),
        });

        let inner = self.inner.connect(guarded)?;
        release.defuse();

        #[cfg(feature = "tracing")]
        tracing::trace!(connectable = %self.name, "connected");

        Ok(Box::new(SafeConnection {
            inner,
            name: self.name.clone(),
            disposed,
            active: self.active.clone(),
        }))
    }
}

struct SafeOutput<O> {
    inner: Output<O>,
    disposed: Arc<AtomicBool>,
}

impl<O> EventSink<O> for SafeOutput<O> {
    fn emit(&self, event: O) {
        if self.disposed.load(Ordering::Acquire) {
            #[cfg(feature = "tracing")]
            tracing::trace!("dropping event emitted after dispose");
            return;
        }
        self.inner.emit(event);
    }
}

struct SafeConnection<I> {
    inner: BoxConnection<I>,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    name: Cow<'static, str>,
    disposed: Arc<AtomicBool>,
    active: Arc<AtomicBool>,
}

impl<I> Connection<I> for SafeConnection<I> {
    fn accept(&mut self, value: &I) -> Result<(), AcceptError> {
        if self.disposed.load(Ordering::Acquire) {
            return Ok(());
        }
        self.inner.accept(value)
    }

    fn dispose(&mut self) -> Result<(), DisposeError> {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }

        let release = Release::new(&self.active);
        let result = self.inner.dispose();
        drop(release);

        #[cfg(feature = "tracing")]
        tracing::trace!(connectable = %self.name, failed = result.is_err(), "disposed");

        result
    }
}

impl<I> Drop for SafeConnection<I> {
    fn drop(&mut self) {
        if self.disposed.load(Ordering::Acquire) {
            return;
        }
        if let Err(err) = self.dispose() {
            #[cfg(feature = "tracing")]
            tracing::warn!(connectable = %self.name, error = %err, "dispose on drop failed");
            #[cfg(not(feature = "tracing"))]
            let _ = err;
        }
    }
}
