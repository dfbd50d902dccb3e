//! # switchyard - Type-Dispatching Effect Router
//!
//! `switchyard` routes a stream of effect values to independently registered
//! handlers by variant, and merges everything the handlers emit into one
//! output.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use switchyard::prelude::*;
//!
//! let router = EffectRouterBuilder::<AppEffect, AppEvent>::new()
//!     .add_action::<Increment, _>(|| counter.fetch_add(1, Ordering::SeqCst))?
//!     .add_consumer(|log: &Log| println!("{}", log.line))?
//!     .add_sub_router(ui_router)?
//!     .build();
//!
//! let (output, events) = switchyard::output::channel();
//! let mut connection = router.connect(output)?;
//! connection.accept(&AppEffect::Increment(Increment))?;
//! connection.dispose()?;
//! ```
//!
//! ## Guarantees
//!
//! - Registering two related tags fails at registration time.
//! - Every value is handled by at most one binding; a value no binding
//!   claims fails with [`AcceptError::Unrouted`].
//! - A router has at most one active connection, and a disposed connection
//!   is inert.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use switchyard_core::{
    // Errors
    AcceptError,
    BoxConnectable,
    BoxConnection,
    BoxError,
    ConfigurationError,
    ConnectError,
    // Connection protocol
    Connectable,
    Connection,
    DisposeError,
    // Effects
    Effect,
    EffectTag,
    // Output
    EventSink,
    // Handler
    HandlerResult,
    Output,
    SwitchyardError,
    Variant,
    effect_variant,
    output as sink,
};

// Router
pub use switchyard_std::{
    EffectRouter, EffectRouterBuilder, MergedConnectable, SafeConnectable, UnknownEffectReporter,
    VariantFilter,
};

/// Closure adapters.
pub mod connectables {
    pub use switchyard_std::connectables::{
        ActionConnectable, ConsumerConnectable, FunctionConnectable, from_action, from_consumer,
        from_function,
    };
}

/// Channel-backed outputs.
pub mod output {
    pub use switchyard_std::output::{ChannelOutput, channel};
}

/// Testing utilities.
pub mod testing {
    pub use switchyard_std::testing::{RecordingSink, SpyConnectable, SpyFailure};
}

/// Prelude module - common imports for Switchyard.
///
/// # Usage
///
/// ```rust,ignore
/// use switchyard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        AcceptError, Connectable, Connection, Effect, EffectRouter, EffectRouterBuilder,
        EffectTag, EventSink, Output, Variant, effect_variant, sink,
    };
}
