//! # switchyard-std
//!
//! Standard implementations for the Switchyard effect router.
//!
//! This crate provides:
//! - **Router builder**: [`EffectRouterBuilder`] and the [`EffectRouter`] it builds
//! - **Routing components**: [`VariantFilter`], [`MergedConnectable`],
//!   [`UnknownEffectReporter`], [`SafeConnectable`]
//! - **Handler adapters**: [`connectables`]
//! - **Channel outputs**: [`output`]
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use switchyard_core;

// Modules
pub mod builder;
pub mod connectables;
pub mod filter;
pub mod merged;
pub mod output;
pub mod safe;
pub mod testing;
pub mod unknown;

pub use builder::{EffectRouter, EffectRouterBuilder};
pub use filter::VariantFilter;
pub use merged::MergedConnectable;
pub use safe::SafeConnectable;
pub use unknown::UnknownEffectReporter;
