//! Error types for Switchyard.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`SwitchyardError`] - Top-level error type for all Switchyard operations
//! - [`ConfigurationError`] - Rejected bindings at registration time
//! - [`ConnectError`] - Failures while connecting a router or handler
//! - [`AcceptError`] - Failures while routing a single value
//! - [`DisposeError`] - Aggregated failures while tearing a connection down

use crate::effect::EffectTag;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Switchyard operations.
#[derive(Error, Debug)]
pub enum SwitchyardError {
    /// A binding was rejected by the router builder.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Connecting failed.
    #[error("connect error: {0}")]
    Connect(#[from] ConnectError),

    /// Routing a value failed.
    #[error("accept error: {0}")]
    Accept(#[from] AcceptError),

    /// Disposing a connection failed.
    #[error("dispose error: {0}")]
    Dispose(#[from] DisposeError),
}

impl SwitchyardError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            SwitchyardError::Configuration(ConfigurationError::Collision { .. }) => {
                "tag_collision"
            }
            SwitchyardError::Connect(ConnectError::LimitExceeded { .. }) => {
                "connection_limit_exceeded"
            }
            SwitchyardError::Connect(ConnectError::Failed(_)) => "connect_failed",
            SwitchyardError::Accept(AcceptError::Unrouted { .. }) => "unrouted_effect",
            SwitchyardError::Accept(AcceptError::Handler(_)) => "handler_failed",
            SwitchyardError::Dispose(_) => "dispose_failed",
        }
    }
}

/// Errors raised while registering bindings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The new tag is equal to, or nested above or below, a registered one.
    #[error("effect tags must not subsume each other: `{tag}` collides with existing `{existing}`")]
    Collision {
        /// The tag being registered.
        tag: EffectTag,
        /// The registered tag it collides with.
        existing: EffectTag,
    },
}

/// Errors raised by `Connectable::connect`.
#[derive(Error, Debug)]
pub enum ConnectError {
    /// The connectable already has an active, undisposed connection.
    #[error("connection limit exceeded: `{connectable}` already has an active connection")]
    LimitExceeded {
        /// Name of the connectable that refused.
        connectable: String,
    },

    /// A handler failed to connect for its own reasons.
    #[error(transparent)]
    Failed(BoxError),
}

/// Errors raised by `Connection::accept`.
#[derive(Error, Debug)]
pub enum AcceptError {
    /// No registered tag subsumes the value's tag.
    #[error("no handler registered for effect `{tag}`")]
    Unrouted {
        /// The tag of the unmatched value.
        tag: EffectTag,
    },

    /// The handler itself failed.
    #[error("handler failed")]
    Handler(#[source] BoxError),
}

/// Every failure reported while disposing a group of connections.
#[derive(Error, Debug)]
#[error("failed to dispose {} connection(s): {}", .failures.len(), join(.failures))]
pub struct DisposeError {
    failures: Vec<BoxError>,
}

impl DisposeError {
    /// Aggregate several failures.
    pub fn new(failures: Vec<BoxError>) -> Self {
        Self { failures }
    }

    /// Wrap a single failure.
    pub fn single(failure: impl Into<BoxError>) -> Self {
        Self {
            failures: vec![failure.into()],
        }
    }

    /// The collected failures, in disposal order.
    pub fn failures(&self) -> &[BoxError] {
        &self.failures
    }

    /// Number of collected failures.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Whether no failure was collected.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Take the collected failures.
    pub fn into_failures(self) -> Vec<BoxError> {
        self.failures
    }
}

fn join(failures: &[BoxError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
