//! # Effect Router Builder
//!
//! Accumulates variant-to-handler bindings and freezes them into an
//! [`EffectRouter`].
//!
//! ```text
//! EffectRouterBuilder
//!   .add_action::<Increment, _>(..)?     ──► VariantFilter<Increment, _> ─┐
//!   .add_consumer(|log: &Log| ..)?       ──► VariantFilter<Log, _>       ─┤
//!   .add_sub_router(ui_router)?          ──► VariantFilter<UiEffect, _>  ─┤
//!   .build()                                 UnknownEffectReporter       ─┘
//!                                                   │
//!                         SafeConnectable(MergedConnectable[..]) = EffectRouter
//! ```
//!
//! # Exclusivity
//!
//! Every registration is checked against the tags already bound. Two tags
//! that are equal, or where one is nested below the other, would let a value
//! match two handlers, so the second registration fails with
//! [`ConfigurationError::Collision`] whatever the registration order.
//!
//! `build` consumes the builder; a builder cannot be built twice.

use crate::{
    connectables::{from_action, from_consumer, from_function},
    filter::VariantFilter,
    merged::MergedConnectable,
    safe::SafeConnectable,
    unknown::UnknownEffectReporter,
};
use std::borrow::Cow;
use switchyard_core::{
    BoxConnectable, BoxConnection, ConfigurationError, ConnectError, Connectable, Effect,
    EffectTag, HandlerResult, Output, Variant,
};

const DEFAULT_NAME: &str = "effect-router";

/// Builder for an [`EffectRouter`] over effects `F` emitting events `O`.
///
/// # Example
///
/// ```rust,ignore
/// let router = EffectRouterBuilder::<AppEffect, AppEvent>::new()
///     .add_action::<Increment, _>(|| counter.fetch_add(1, Ordering::SeqCst))?
///     .add_consumer(|log: &Log| println!("{}", log.line))?
///     .add_function(|save: &Save| AppEvent::Saved(save.id))?
///     .build();
///
/// let mut connection = router.connect(output(|event| queue.push(event)))?;
/// connection.accept(&AppEffect::Increment(Increment))?;
/// connection.dispose()?;
/// ```
pub struct EffectRouterBuilder<F, O> {
    name: Cow<'static, str>,
    connectables: Vec<BoxConnectable<F, O>>,
    tags: Vec<EffectTag>,
}

impl<F: Effect, O: 'static> Default for EffectRouterBuilder<F, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Effect, O: 'static> EffectRouterBuilder<F, O> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::named(DEFAULT_NAME)
    }

    /// Create an empty builder whose router is labelled `name` in errors and logs.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            connectables: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Run `action` for every value of variant `G`.
    pub fn add_action<G, R>(
        self,
        action: impl Fn() -> R + Send + Sync + 'static,
    ) -> Result<Self, ConfigurationError>
    where
        G: Variant<F>,
        R: HandlerResult,
    {
        self.add_sub_router::<G>(from_action(action))
    }

    /// Pass every value of variant `G` to `consumer`.
    pub fn add_consumer<G, R>(
        self,
        consumer: impl Fn(&G) -> R + Send + Sync + 'static,
    ) -> Result<Self, ConfigurationError>
    where
        G: Variant<F>,
        R: HandlerResult,
    {
        self.add_sub_router::<G>(from_consumer(consumer))
    }

    /// Emit `function(value)` to the output for every value of variant `G`.
    pub fn add_function<G>(
        self,
        function: impl Fn(&G) -> O + Send + Sync + 'static,
    ) -> Result<Self, ConfigurationError>
    where
        G: Variant<F>,
    {
        self.add_sub_router::<G>(from_function(function))
    }

    /// Route every value of variant `G` to a full connectable.
    ///
    /// The connectable keeps its own lifecycle: if it refuses to connect,
    /// connecting the built router fails with the same error.
    pub fn add_sub_router<G>(
        mut self,
        sub_router: impl Connectable<G, O> + 'static,
    ) -> Result<Self, ConfigurationError>
    where
        G: Variant<F>,
    {
        self.validate_and_track(G::TAG)?;
        self.connectables
            .push(Box::new(VariantFilter::<G, _>::new(sub_router)));
        Ok(self)
    }

    /// Tags registered so far, in registration order.
    pub fn tags(&self) -> &[EffectTag] {
        &self.tags
    }

    fn validate_and_track(&mut self, tag: EffectTag) -> Result<(), ConfigurationError> {
        if let Some(existing) = self.tags.iter().find(|existing| tag.is_related(existing)) {
            return Err(ConfigurationError::Collision {
                tag,
                existing: *existing,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(router = %self.name, %tag, "registered effect binding");

        self.tags.push(tag);
        Ok(())
    }

    /// Freeze the bindings into a router.
    pub fn build(mut self) -> EffectRouter<F, O> {
        let tags: std::sync::Arc<[EffectTag]> = self.tags.into();
        self.connectables
            .push(Box::new(UnknownEffectReporter::new(tags.clone())));

        #[cfg(feature = "tracing")]
        tracing::debug!(router = %self.name, bindings = tags.len(), "built effect router");

        EffectRouter {
            inner: SafeConnectable::new(MergedConnectable::new(self.connectables), self.name),
            tags,
        }
    }
}

/// The immutable router produced by [`EffectRouterBuilder::build`].
///
/// At most one connection may be active at a time.
pub struct EffectRouter<F, O> {
    inner: SafeConnectable<MergedConnectable<F, O>>,
    tags: std::sync::Arc<[EffectTag]>,
}

impl<F, O> EffectRouter<F, O> {
    /// The router's name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// The registered tags, in registration order.
    pub fn tags(&self) -> &[EffectTag] {
        &self.tags
    }

    /// Whether an undisposed connection currently exists.
    pub fn is_connected(&self) -> bool {
        self.inner.is_connected()
    }
}

impl<F: Effect, O: 'static> Connectable<F, O> for EffectRouter<F, O> {
    fn connect(&self, output: Output<O>) -> Result<BoxConnection<F>, ConnectError> {
        self.inner.connect(output)
    }
}
