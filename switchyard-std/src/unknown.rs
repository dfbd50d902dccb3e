//! Reporter for effects no binding claims.

use std::sync::Arc;
use switchyard_core::{
    AcceptError, BoxConnection, ConnectError, Connectable, Connection, DisposeError, Effect,
    EffectTag, Output,
};

/// Fails every value whose tag is not subsumed by a registered tag.
///
/// Sits last in a router so an unmatched effect surfaces as
/// [`AcceptError::Unrouted`] instead of vanishing. It never emits.
#[derive(Clone, Debug)]
pub struct UnknownEffectReporter {
    tags: Arc<[EffectTag]>,
}

impl UnknownEffectReporter {
    /// Create a reporter for the given registered tags.
    pub fn new(tags: impl Into<Arc<[EffectTag]>>) -> Self {
        Self { tags: tags.into() }
    }

    /// The tags this reporter considers routed.
    pub fn tags(&self) -> &[EffectTag] {
        &self.tags
    }

    fn check(tags: &[EffectTag], tag: EffectTag) -> Result<(), AcceptError> {
        if tags.iter().any(|registered| registered.subsumes(&tag)) {
            Ok(())
        } else {
            Err(AcceptError::Unrouted { tag })
        }
    }
}

impl<F: Effect, O> Connectable<F, O> for UnknownEffectReporter {
    fn connect(&self, _output: Output<O>) -> Result<BoxConnection<F>, ConnectError> {
        Ok(Box::new(ReporterConnection {
            tags: self.tags.clone(),
        }))
    }
}

struct ReporterConnection {
    tags: Arc<[EffectTag]>,
}

impl<F: Effect> Connection<F> for ReporterConnection {
    fn accept(&mut self, value: &F) -> Result<(), AcceptError> {
        let result = UnknownEffectReporter::check(&self.tags, value.tag());

        #[cfg(feature = "tracing")]
        if let Err(AcceptError::Unrouted { tag }) = &result {
            tracing::debug!(%tag, "effect matched no registered tag");
        }

        result
    }

    fn dispose(&mut self) -> Result<(), DisposeError> {
        Ok(())
    }
}
