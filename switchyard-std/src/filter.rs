//! Variant filtering adapter.

use std::marker::PhantomData;
use switchyard_core::{
    AcceptError, BoxConnection, ConnectError, Connectable, Connection, DisposeError, Effect,
    Output, Variant,
};

/// Narrows a `Connectable<G, O>` to a `Connectable<F, O>`.
///
/// Values that do not narrow to `G` are dropped without error; this is what
/// lets several filters share one multiplexed input.
pub struct VariantFilter<G, C> {
    delegate: C,
    _variant: PhantomData<fn() -> G>,
}

impl<G, C> VariantFilter<G, C> {
    /// Wrap `delegate` so it only sees values of variant `G`.
    pub fn new(delegate: C) -> Self {
        Self {
            delegate,
            _variant: PhantomData,
        }
    }
}

impl<F, G, O, C> Connectable<F, O> for VariantFilter<G, C>
where
    F: Effect,
    G: Variant<F>,
    C: Connectable<G, O>,
{
    fn connect(&self, output: Output<O>) -> Result<BoxConnection<F>, ConnectError> {
        let delegate = self.delegate.connect(output)?;
        Ok(Box::new(VariantFilterConnection::<G> {
            delegate,
            _variant: PhantomData,
        }))
    }
}

struct VariantFilterConnection<G> {
    delegate: BoxConnection<G>,
    _variant: PhantomData<fn() -> G>,
}

impl<F, G> Connection<F> for VariantFilterConnection<G>
where
    F: Effect,
    G: Variant<F>,
{
    fn accept(&mut self, value: &F) -> Result<(), AcceptError> {
        match G::narrow(value) {
            Some(narrowed) => {
                debug_assert!(
                    G::TAG.subsumes(&value.tag()),
                    "`{}` narrowed a value tagged `{}`",
                    G::TAG,
                    value.tag()
                );
                self.delegate.accept(narrowed)
            }
            None => Ok(()),
        }
    }

    fn dispose(&mut self) -> Result<(), DisposeError> {
        self.delegate.dispose()
    }
}
