//! # Connection Protocol
//!
//! The one interface shared by handlers, sub-routers and built routers.
//!
//! A [`Connectable`] is an inert description of some work. Connecting it to
//! an [`Output`] yields a live [`Connection`] owned by the caller, who feeds
//! it values with [`Connection::accept`] and ends it with
//! [`Connection::dispose`].
//!
//! ```text
//! Connectable<I, O> ──connect(output)──► Connection<I> ──accept(&I)──► handler
//!                                                            └──► output.emit(O)
//! ```
//!
//! # Rules
//!
//! - A connection is single-use: once disposed it is inert.
//! - Calls on one connection come from a single logical caller; `&mut self`
//!   enforces it.
//! - Values are passed by reference so every child of a multiplexer can
//!   inspect the same value without cloning.

use crate::{
    error::{AcceptError, ConnectError, DisposeError},
    output::Output,
};
use std::sync::Arc;

/// A live session accepting values of type `I`.
pub trait Connection<I: ?Sized>: Send {
    /// Offer one value to the connection.
    fn accept(&mut self, value: &I) -> Result<(), AcceptError>;

    /// Release every resource held by the connection.
    fn dispose(&mut self) -> Result<(), DisposeError>;
}

/// An owned, type-erased [`Connection`].
pub type BoxConnection<I> = Box<dyn Connection<I>>;

impl<I: ?Sized, C: Connection<I> + ?Sized> Connection<I> for Box<C> {
    fn accept(&mut self, value: &I) -> Result<(), AcceptError> {
        (**self).accept(value)
    }

    fn dispose(&mut self) -> Result<(), DisposeError> {
        (**self).dispose()
    }
}

/// Something that accepts `I` values and emits `O` events once connected.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be connected as a `Connectable<{I}, {O}>`",
    label = "missing `Connectable` implementation",
    note = "Use `connectables::from_action`, `from_consumer` or `from_function` to adapt a closure."
)]
pub trait Connectable<I, O>: Send + Sync {
    /// Connect to `output`, producing a connection owned by the caller.
    fn connect(&self, output: Output<O>) -> Result<BoxConnection<I>, ConnectError>;
}

/// A shared, type-erased [`Connectable`].
pub type BoxConnectable<I, O> = Box<dyn Connectable<I, O>>;

impl<I, O, C: Connectable<I, O> + ?Sized> Connectable<I, O> for Box<C> {
    fn connect(&self, output: Output<O>) -> Result<BoxConnection<I>, ConnectError> {
        (**self).connect(output)
    }
}

impl<I, O, C: Connectable<I, O> + ?Sized> Connectable<I, O> for Arc<C> {
    fn connect(&self, output: Output<O>) -> Result<BoxConnection<I>, ConnectError> {
        (**self).connect(output)
    }
}
