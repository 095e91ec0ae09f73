//! Declarative rules: presence checks and typed value predicates.

use std::any::Any;
use std::fmt;

use fieldset_partial::{Field, FieldId, Key, Partial};

use crate::outcome::Reason;

// ============================================================================
// RULE
// ============================================================================

/// One declared check against a single field of record type `R`.
///
/// A rule is either a presence check or a value predicate. Predicates
/// are declared with a strongly-typed closure over the field's value
/// type and stored type-erased, so rules over heterogeneous field types
/// share one ordered sequence inside a
/// [`Validation`](crate::Validation).
pub struct Rule<R> {
    field: FieldId,
    check: Check<R>,
}

enum Check<R> {
    Present,
    Value(Box<dyn Fn(&Partial<R>) -> bool + Send + Sync>),
}

impl<R: 'static> Rule<R> {
    /// Presence check: passes iff the field has been assigned.
    ///
    /// Accepts a typed [`Key`] or a bare [`Field`] handle; the value
    /// type is irrelevant to presence.
    #[must_use]
    pub fn required(field: impl Into<Field<R>>) -> Self {
        Self {
            field: field.into().id(),
            check: Check::Present,
        }
    }

    /// Value predicate: passes iff the field is present and `predicate`
    /// accepts the stored value.
    ///
    /// An absent field fails this rule. So does a stored value that is
    /// not a `V`: a failed downcast is indistinguishable from a
    /// rejected value, by design.
    pub fn satisfies<V, F>(key: Key<R, V>, predicate: F) -> Self
    where
        V: Any,
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Self {
            field: key.id(),
            check: Check::Value(Box::new(move |partial: &Partial<R>| {
                partial.get_opt(key).is_some_and(&predicate)
            })),
        }
    }

    /// Returns the id of the field this rule checks.
    #[must_use]
    pub fn field(&self) -> FieldId {
        self.field
    }

    /// Evaluates the rule, returning the reason it failed, if it did.
    pub(crate) fn evaluate(&self, partial: &Partial<R>) -> Option<Reason> {
        match &self.check {
            Check::Present => {
                (!partial.contains(self.field)).then_some(Reason::Missing(self.field))
            }
            Check::Value(passes) => {
                (!passes(partial)).then_some(Reason::InvalidValue(self.field))
            }
        }
    }
}

// Manual Debug: the predicate closure has nothing useful to print.
impl<R> fmt::Debug for Rule<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.check {
            Check::Present => "Required",
            Check::Value(_) => "Satisfies",
        };
        f.debug_tuple(kind).field(&self.field).finish()
    }
}

// ============================================================================
// FACTORY FUNCTIONS
// ============================================================================

/// Declares a presence rule. See [`Rule::required`].
#[must_use]
pub fn required<R: 'static>(field: impl Into<Field<R>>) -> Rule<R> {
    Rule::required(field)
}

/// Declares a value-predicate rule. See [`Rule::satisfies`].
pub fn satisfies<R, V, F>(key: Key<R, V>, predicate: F) -> Rule<R>
where
    R: 'static,
    V: Any,
    F: Fn(&V) -> bool + Send + Sync + 'static,
{
    Rule::satisfies(key, predicate)
}

// ============================================================================
// TESTS
// ============================================================================
