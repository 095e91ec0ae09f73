//! The partial container: a type-erased field store with typed accessors.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use crate::error::PartialError;
use crate::field::{FieldId, Key};

// ============================================================================
// PARTIAL
// ============================================================================

/// A possibly-incomplete snapshot of the fields of a record type `R`.
///
/// A field is either absent (never set) or present with exactly one
/// value. Present-with-`None` on an `Option`-typed field is a perfectly
/// good populated entry: presence means "has been assigned", not
/// "is non-null".
///
/// The container never interprets or transforms values. Writes are
/// unconditional and unvalidated, which is what lets callers stage
/// incomplete or invalid data and defer judgement to a rule set.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldset_partial::{Key, Partial};
///
/// struct User { name: String, age: u32 }
///
/// const NAME: Key<User, String> = Key::new("name");
/// const AGE: Key<User, u32> = Key::new("age");
///
/// let partial = Partial::new()
///     .with(NAME, "alice".to_owned())
///     .with(AGE, 30);
///
/// assert!(partial.contains(NAME));
/// assert_eq!(partial.get(AGE)?, &30);
/// ```
///
/// # Concurrency
///
/// Stored values are `Any + Send + Sync`, so a `Partial` moves freely
/// across threads. It has no internal synchronization: treat it as an
/// owned value and keep mutation exclusive.
pub struct Partial<R> {
    values: HashMap<FieldId, Box<dyn Any + Send + Sync>>,
    _marker: PhantomData<fn() -> R>,
}

impl<R> Partial<R> {
    /// Creates an empty partial with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            _marker: PhantomData,
        }
    }

    /// Returns the number of fields currently set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no field has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the ids of the fields currently set, in no
    /// particular order.
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.values.keys().copied()
    }

    /// Membership test for a field, with no type downcast involved.
    ///
    /// This is the presence notion used by `required` rules: a field set
    /// to an explicit `None` is still contained.
    pub fn contains(&self, field: impl Into<FieldId>) -> bool {
        self.values.contains_key(&field.into())
    }
}

impl<R: 'static> Partial<R> {
    /// Stores `value` under `key`, overwriting any prior entry.
    ///
    /// No validation happens at write time.
    pub fn set<V>(&mut self, key: Key<R, V>, value: V)
    where
        V: Any + Send + Sync,
    {
        self.values.insert(key.id(), Box::new(value));
    }

    /// Builder form of [`set`](Self::set), for decomposition chains.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<V>(mut self, key: Key<R, V>, value: V) -> Self
    where
        V: Any + Send + Sync,
    {
        self.set(key, value);
        self
    }

    /// Required accessor: returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// - [`PartialError::ValueNotFound`] if the field was never set.
    /// - [`PartialError::TypeMismatch`] if the stored value cannot be
    ///   downcast to `V`. This can only happen when two keys with the
    ///   same name but different value types were declared for `R`; the
    ///   container reports the misuse instead of panicking.
    pub fn get<V>(&self, key: Key<R, V>) -> Result<&V, PartialError>
    where
        V: Any,
    {
        let field = key.id();
        let value = self
            .values
            .get(&field)
            .ok_or(PartialError::ValueNotFound { field })?;
        value
            .downcast_ref::<V>()
            .ok_or(PartialError::TypeMismatch {
                field,
                expected: std::any::type_name::<V>(),
            })
    }

    /// Optional accessor: returns the value stored under `key`, or
    /// `None` if the field is absent or the stored value fails to
    /// downcast to `V`. Never fails.
    #[must_use]
    pub fn get_opt<V>(&self, key: Key<R, V>) -> Option<&V>
    where
        V: Any,
    {
        self.values.get(&key.id())?.downcast_ref::<V>()
    }

    /// Flattening accessor for `Option`-typed fields.
    ///
    /// Absent, present-with-`None`, and a failed downcast all read as
    /// `None`; only present-with-`Some` yields a value. Note the
    /// asymmetry with [`contains`](Self::contains): a field set to
    /// `None` reads as `None` here but still counts as present.
    #[must_use]
    pub fn get_some<V>(&self, key: Key<R, Option<V>>) -> Option<&V>
    where
        V: Any,
    {
        self.get_opt(key)?.as_ref()
    }
}

impl<R> Default for Partial<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Partial<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<&FieldId> = self.values.keys().collect();
        fields.sort_by_key(|id| id.name());
        f.debug_struct("Partial")
            .field("record", &std::any::type_name::<R>())
            .field("fields", &fields)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
