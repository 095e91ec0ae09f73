//! The capability a record type needs to round-trip through a partial.

use crate::error::PartialError;
use crate::store::Partial;

/// Decomposition into and fallible reconstruction from a [`Partial`].
///
/// `to_partial` snapshots every field of the record into a fresh
/// container. `from_partial` rebuilds the record and fails with
/// [`PartialError`] when a field its constructor needs is absent (or,
/// see [`Partial::get`], stored with the wrong type).
///
/// # Examples
///
/// ```rust,ignore
/// use fieldset_partial::{keys, Partial, PartialError, PartialRecord};
///
/// #[derive(Clone)]
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// keys! {
///     pub mod user for User {
///         pub NAME: String = "name";
///         pub AGE: u32 = "age";
///     }
/// }
///
/// impl PartialRecord for User {
///     fn to_partial(&self) -> Partial<Self> {
///         Partial::new()
///             .with(user::NAME, self.name.clone())
///             .with(user::AGE, self.age)
///     }
///
///     fn from_partial(partial: &Partial<Self>) -> Result<Self, PartialError> {
///         Ok(Self {
///             name: partial.get(user::NAME)?.clone(),
///             age: *partial.get(user::AGE)?,
///         })
///     }
/// }
/// ```
pub trait PartialRecord: Sized + 'static {
    /// Snapshots the record into a fully-populated partial.
    fn to_partial(&self) -> Partial<Self>;

    /// Rebuilds the record from a partial.
    ///
    /// # Errors
    ///
    /// Returns the first [`PartialError`] hit while reading required
    /// fields, typically [`PartialError::ValueNotFound`] for a field
    /// that was never set.
    fn from_partial(partial: &Partial<Self>) -> Result<Self, PartialError>;
}
