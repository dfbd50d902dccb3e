//! Results of handler bodies.
//!
//! Actions and consumers may return either `()` or a `Result`, so plain
//! closures and fallible ones register the same way.

use crate::error::BoxError;

/// The return type of an action or consumer body.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid handler result",
    label = "handlers must return `()` or `Result<(), E>`",
    note = "The error type `E` must convert into `BoxError`."
)]
pub trait HandlerResult {
    /// Normalize into a boxed result.
    fn into_result(self) -> Result<(), BoxError>;
}

impl HandlerResult for () {
    fn into_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> HandlerResult for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_result(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}
