//! Field references: typed keys, presence-only handles, and erased ids.
//!
//! Three views of "the field named X of record type R":
//!
//! - [`Key<R, V>`] commits to the value type `V` and is what typed
//!   accessors and value rules operate on.
//! - [`Field<R>`] drops the value type; presence checks need nothing
//!   more. Every key converts into one via `From`.
//! - [`FieldId`] drops the record type too, leaving a plain comparable,
//!   hashable id usable as a map key and in failure reports.
//!
//! Identity is always (record type, field name). Two keys with the same
//! name but different value types erase to equal ids; the same name on
//! different record types does not.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

// ============================================================================
// TYPED KEY
// ============================================================================

/// A typed field key: field `name` of record `R`, holding a `V`.
///
/// Keys are `Copy`, constructible in `const` context, and carry nothing
/// at runtime but the field name; the record and value types live purely
/// in the type system.
///
/// Declare keys as `const` items, usually through the [`keys!`](crate::keys)
/// macro:
///
/// ```rust,ignore
/// use fieldset_partial::Key;
///
/// struct User { name: String }
///
/// const NAME: Key<User, String> = Key::new("name");
/// ```
pub struct Key<R, V> {
    name: &'static str,
    _marker: PhantomData<fn() -> (R, V)>,
}

impl<R, V> Key<R, V> {
    /// Creates a key for the field called `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Returns the field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl<R: 'static, V> Key<R, V> {
    /// Erases the key down to a [`FieldId`].
    #[must_use]
    pub fn id(self) -> FieldId {
        FieldId::of::<R>(self.name)
    }
}

// Manual impls: derives would bound R and V, which are phantom.
impl<R, V> Clone for Key<R, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, V> Copy for Key<R, V> {}

impl<R, V> PartialEq for Key<R, V> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<R, V> Eq for Key<R, V> {}

impl<R, V> Hash for Key<R, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<R, V> fmt::Debug for Key<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("record", &short_type_name(std::any::type_name::<R>()))
            .field("name", &self.name)
            .finish()
    }
}

// ============================================================================
// PRESENCE-ONLY HANDLE
// ============================================================================

/// A field of record `R` with no commitment to its value type.
///
/// Presence rules only need to know *which* field to look for, so they
/// accept anything convertible into a `Field<R>`; in particular, any
/// typed [`Key<R, V>`] converts losslessly.
pub struct Field<R> {
    name: &'static str,
    _marker: PhantomData<fn() -> R>,
}

impl<R> Field<R> {
    /// Creates a presence-only handle for the field called `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Returns the field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl<R: 'static> Field<R> {
    /// Erases the handle down to a [`FieldId`].
    #[must_use]
    pub fn id(self) -> FieldId {
        FieldId::of::<R>(self.name)
    }
}

impl<R, V> From<Key<R, V>> for Field<R> {
    fn from(key: Key<R, V>) -> Self {
        Self::new(key.name)
    }
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Field<R> {}

impl<R> PartialEq for Field<R> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<R> Eq for Field<R> {}

impl<R> Hash for Field<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("record", &short_type_name(std::any::type_name::<R>()))
            .field("name", &self.name)
            .finish()
    }
}

// ============================================================================
// ERASED ID
// ============================================================================

/// A fully type-erased field identifier.
///
/// Equality and hashing use (record type, field name) only, so ids built
/// from keys with different value types still denote the same field, and
/// ids from different record types never collide even when field names
/// match. `Display` renders `Record.field`.
#[derive(Clone, Copy, Debug)]
pub struct FieldId {
    record: TypeId,
    record_name: &'static str,
    name: &'static str,
}

impl FieldId {
    /// Creates the id for field `name` of record type `R`.
    #[must_use]
    pub fn of<R: 'static>(name: &'static str) -> Self {
        Self {
            record: TypeId::of::<R>(),
            record_name: std::any::type_name::<R>(),
            name,
        }
    }

    /// Returns the field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Returns the record type name without its module path.
    #[must_use]
    pub fn record_name(self) -> &'static str {
        short_type_name(self.record_name)
    }
}

impl PartialEq for FieldId {
    fn eq(&self, other: &Self) -> bool {
        self.record == other.record && self.name == other.name
    }
}

impl Eq for FieldId {}

impl Hash for FieldId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.record_name(), self.name)
    }
}

impl<R: 'static, V> From<Key<R, V>> for FieldId {
    fn from(key: Key<R, V>) -> Self {
        key.id()
    }
}

impl<R: 'static> From<Field<R>> for FieldId {
    fn from(field: Field<R>) -> Self {
        field.id()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    full.rsplit("::").next().unwrap_or(full)
}

// ============================================================================
// TESTS
// ============================================================================
