//! # switchyard-core
//!
//! Core traits for the Switchyard effect router.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! handler crates that only need to speak the connection protocol, without
//! pulling in the router implementation from `switchyard-std`.
//!
//! # Building Blocks
//!
//! ## Effects ([`Effect`], [`Variant`], [`EffectTag`])
//!
//! Effects are enums whose values report an [`EffectTag`]. A [`Variant`] is a
//! concrete type a value can be narrowed to; routers are keyed by variant.
//!
//! ## Connection Protocol ([`Connectable`], [`Connection`])
//!
//! Handlers, sub-routers and routers all share one lifecycle:
//! `connect(output)` → `accept(value)`* → `dispose()`.
//!
//! ## Output ([`EventSink`], [`Output`])
//!
//! The shared channel handlers emit their events into.
//!
//! # Error Types
//!
//! - [`SwitchyardError`] - Top-level error type
//! - [`ConfigurationError`] - Registration-time errors
//! - [`ConnectError`], [`AcceptError`], [`DisposeError`] - Lifecycle errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod connection;
mod effect;
mod error;
mod handler;
mod output;

// Re-exports
pub use connection::{BoxConnectable, BoxConnection, Connectable, Connection};
pub use effect::{Effect, EffectTag, Variant};
pub use error::{
    AcceptError, BoxError, ConfigurationError, ConnectError, DisposeError, SwitchyardError,
};
pub use handler::HandlerResult;
pub use output::{EventSink, Output, output};
