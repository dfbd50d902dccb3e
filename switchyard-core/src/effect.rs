//! # Effects, Tags and Variants
//!
//! An effect is a value produced upstream asking for a side effect to be
//! carried out. Effects are modelled as closed enums; a variant that itself
//! wraps an enum opens a sub-hierarchy.
//!
//! Every point of that hierarchy is named by an [`EffectTag`], a path of
//! static segments:
//!
//! ```text
//! AppEffect
//! ├── Increment        ["increment"]
//! └── Ui(UiEffect)     ["ui"]
//!     ├── Toast        ["ui", "toast"]
//!     └── Dialog       ["ui", "dialog"]
//! ```
//!
//! A tag *subsumes* another when its path is a prefix of the other's, so
//! `ui` subsumes `ui::toast`. Routing tables must never hold two related tags.

use std::fmt;

/// Identifies one variant (or sub-hierarchy) of an effect type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectTag {
    path: &'static [&'static str],
}

impl EffectTag {
    /// The tag of the whole hierarchy; it subsumes every other tag.
    pub const ROOT: EffectTag = EffectTag { path: &[] };

    /// Create a tag from its path segments, outermost first.
    pub const fn new(path: &'static [&'static str]) -> Self {
        Self { path }
    }

    /// The path segments of this tag.
    pub const fn path(&self) -> &'static [&'static str] {
        self.path
    }

    /// The innermost segment, or `"<root>"` for [`EffectTag::ROOT`].
    pub fn name(&self) -> &'static str {
        self.path.last().copied().unwrap_or("<root>")
    }

    /// Whether a value tagged `other` falls under this tag.
    ///
    /// Holds when the two tags are equal or `other` is nested below `self`.
    pub fn subsumes(&self, other: &EffectTag) -> bool {
        other.path.starts_with(self.path)
    }

    /// Whether either tag subsumes the other.
    pub fn is_related(&self, other: &EffectTag) -> bool {
        self.subsumes(other) || other.subsumes(self)
    }
}

impl fmt::Display for EffectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.path.join("::"))
    }
}

impl fmt::Debug for EffectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EffectTag({self})")
    }
}

/// A value that can be routed by variant.
///
/// # Example
///
/// ```rust,ignore
/// enum AppEffect {
///     Increment(Increment),
///     Ui(UiEffect),
/// }
///
/// impl Effect for AppEffect {
///     fn tag(&self) -> EffectTag {
///         match self {
///             AppEffect::Increment(_) => <Increment as Variant<AppEffect>>::TAG,
///             AppEffect::Ui(ui) => ui.tag(),
///         }
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a routable Effect",
    label = "missing `Effect` implementation",
    note = "Implement `Effect::tag` to report the most specific tag of each value."
)]
pub trait Effect: Send + Sync + 'static {
    /// The most specific tag of this value.
    fn tag(&self) -> EffectTag;
}

/// A concrete type that values of the effect type `F` may narrow to.
///
/// `narrow` must return `Some` exactly for the values whose
/// [`Effect::tag`] is subsumed by [`Variant::TAG`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a variant of `{F}`",
    label = "missing `Variant<{F}>` implementation",
    note = "Use `effect_variant!` to declare how `{F}` narrows to `{Self}`."
)]
pub trait Variant<F: Effect>: Sized + 'static {
    /// The tag this variant is registered under.
    const TAG: EffectTag;

    /// Check-and-cast: borrow the variant out of `effect` if it is one.
    fn narrow(effect: &F) -> Option<&Self>;
}

/// Implements [`Variant`] from a match pattern.
///
/// ```rust,ignore
/// effect_variant! {
///     impl Variant<AppEffect> for Toast as ["ui", "toast"] {
///         AppEffect::Ui(UiEffect::Toast(toast)) => toast
///     }
///     impl Variant<UiEffect> for Toast as ["ui", "toast"] {
///         UiEffect::Toast(toast) => toast
///     }
/// }
/// ```
#[macro_export]
macro_rules! effect_variant {
    ($(
        impl Variant<$effect:ty> for $variant:ty as [$($segment:literal),+ $(,)?] {
            $pattern:pat => $binding:ident $(,)?
        }
    )+) => {$(
        impl $crate::Variant<$effect> for $variant {
            const TAG: $crate::EffectTag = $crate::EffectTag::new(&[$($segment),+]);

            fn narrow(effect: &$effect) -> ::core::option::Option<&Self> {
                match effect {
                    $pattern => ::core::option::Option::Some($binding),
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                }
            }
        }
    )+};
}
