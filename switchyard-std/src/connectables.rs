//! Adapters turning plain closures into [`Connectable`]s.
//!
//! - [`from_action`]: ignores the value, runs a zero-argument closure.
//! - [`from_consumer`]: hands the value to a closure.
//! - [`from_function`]: maps the value to an event and emits it.
//!
//! None of them hold per-connection state, so they accept any number of
//! concurrent connections.

use std::sync::Arc;
use switchyard_core::{
    AcceptError, BoxConnection, ConnectError, Connectable, Connection, DisposeError,
    HandlerResult, Output,
};

/// Create a connectable that runs `action` for every accepted value.
pub fn from_action<A, R>(action: A) -> ActionConnectable<A>
where
    A: Fn() -> R + Send + Sync + 'static,
    R: HandlerResult,
{
    ActionConnectable {
        action: Arc::new(action),
    }
}

/// Create a connectable that passes every accepted value to `consumer`.
pub fn from_consumer<C>(consumer: C) -> ConsumerConnectable<C> {
    ConsumerConnectable {
        consumer: Arc::new(consumer),
    }
}

/// Create a connectable that emits `function(value)` for every accepted value.
pub fn from_function<F>(function: F) -> FunctionConnectable<F> {
    FunctionConnectable {
        function: Arc::new(function),
    }
}

/// See [`from_action`].
pub struct ActionConnectable<A> {
    action: Arc<A>,
}

impl<I, O, A, R> Connectable<I, O> for ActionConnectable<A>
where
    A: Fn() -> R + Send + Sync + 'static,
    R: HandlerResult,
{
    fn connect(&self, _output: Output<O>) -> Result<BoxConnection<I>, ConnectError> {
        Ok(Box::new(ActionConnection {
            action: self.action.clone(),
        }))
    }
}

struct ActionConnection<A> {
    action: Arc<A>,
}

impl<I, A, R> Connection<I> for ActionConnection<A>
where
    A: Fn() -> R + Send + Sync + 'static,
    R: HandlerResult,
{
    fn accept(&mut self, _value: &I) -> Result<(), AcceptError> {
        (self.action)().into_result().map_err(AcceptError::Handler)
    }

    fn dispose(&mut self) -> Result<(), DisposeError> {
        Ok(())
    }
}

/// See [`from_consumer`].
pub struct ConsumerConnectable<C> {
    consumer: Arc<C>,
}

impl<I, O, C, R> Connectable<I, O> for ConsumerConnectable<C>
where
    C: Fn(&I) -> R + Send + Sync + 'static,
    R: HandlerResult,
{
    fn connect(&self, _output: Output<O>) -> Result<BoxConnection<I>, ConnectError> {
        Ok(Box::new(ConsumerConnection {
            consumer: self.consumer.clone(),
        }))
    }
}

struct ConsumerConnection<C> {
    consumer: Arc<C>,
}

impl<I, C, R> Connection<I> for ConsumerConnection<C>
where
    C: Fn(&I) -> R + Send + Sync + 'static,
    R: HandlerResult,
{
    fn accept(&mut self, value: &I) -> Result<(), AcceptError> {
        (self.consumer)(value)
            .into_result()
            .map_err(AcceptError::Handler)
    }

    fn dispose(&mut self) -> Result<(), DisposeError> {
        Ok(())
    }
}

/// See [`from_function`].
pub struct FunctionConnectable<F> {
    function: Arc<F>,
}

impl<I, O, F> Connectable<I, O> for FunctionConnectable<F>
where
    O: 'static,
    F: Fn(&I) -> O + Send + Sync + 'static,
{
    fn connect(&self, output: Output<O>) -> Result<BoxConnection<I>, ConnectError> {
        Ok(Box::new(FunctionConnection {
            function: self.function.clone(),
            output,
        }))
    }
}

struct FunctionConnection<F, O> {
    function: Arc<F>,
    output: Output<O>,
}

impl<I, O, F> Connection<I> for FunctionConnection<F, O>
where
    O: 'static,
    F: Fn(&I) -> O + Send + Sync + 'static,
{
    fn accept(&mut self, value: &I) -> Result<(), AcceptError> {
        self.output.emit((self.function)(value));
        Ok(())
    }

    fn dispose(&mut self) -> Result<(), DisposeError> {
        Ok(())
    }
}
