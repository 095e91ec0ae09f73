//! Validation outcomes and per-rule failure reasons.

use std::fmt;

use fieldset_partial::FieldId;
use smallvec::SmallVec;

// ============================================================================
// REASON
// ============================================================================

/// Why one declared rule failed.
///
/// Reasons are data, not errors. Callers map them to user-facing
/// messages themselves; this library never formats, localizes, or
/// raises them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// A `required` rule found the field never assigned.
    Missing(FieldId),
    /// A `satisfies` rule found the field absent, of the wrong stored
    /// type, or rejected by its predicate.
    InvalidValue(FieldId),
}

impl Reason {
    /// Returns the field the failed rule was declared on.
    #[must_use]
    pub fn field(self) -> FieldId {
        match self {
            Self::Missing(field) | Self::InvalidValue(field) => field,
        }
    }

    /// Returns true for a presence failure.
    #[must_use]
    pub fn is_missing(self) -> bool {
        matches!(self, Self::Missing(_))
    }

    /// Returns true for a value failure.
    #[must_use]
    pub fn is_invalid_value(self) -> bool {
        matches!(self, Self::InvalidValue(_))
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "missing required field {field}"),
            Self::InvalidValue(field) => write!(f, "invalid value for field {field}"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Reason {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let kind = match self {
            Self::Missing(_) => "missing",
            Self::InvalidValue(_) => "invalid_value",
        };
        let mut state = serializer.serialize_struct("Reason", 2)?;
        state.serialize_field("kind", kind)?;
        state.serialize_field("field", &self.field())?;
        state.end()
    }
}

/// The reasons collected by one validation run, in rule-declaration
/// order. Inlined up to four entries; realistic rule sets rarely fail
/// more rules than that at once.
pub type Reasons = SmallVec<[Reason; 4]>;

// ============================================================================
// OUTCOME
// ============================================================================

/// The discriminated result of evaluating a rule set against a partial.
///
/// There is no partial-success state: either every rule passed and the
/// record was reconstructed, or at least one failed and every failure
/// is reported.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<R> {
    /// Every rule passed; the record was rebuilt from the partial.
    Valid(R),
    /// At least one rule failed. Non-empty, in declaration order.
    Invalid(Reasons),
}

impl<R> Outcome<R> {
    /// Returns true if every rule passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns true if any rule failed.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the collected reasons; empty iff the outcome is valid.
    #[must_use]
    pub fn reasons(&self) -> &[Reason] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid(reasons) => reasons,
        }
    }

    /// Returns the reconstructed record, if valid.
    #[must_use]
    pub fn record(&self) -> Option<&R> {
        match self {
            Self::Valid(record) => Some(record),
            Self::Invalid(_) => None,
        }
    }

    /// Consumes the outcome, returning the record if valid.
    #[must_use]
    pub fn into_record(self) -> Option<R> {
        match self {
            Self::Valid(record) => Some(record),
            Self::Invalid(_) => None,
        }
    }

    /// Bridges into `Result` for `?`-style call sites.
    pub fn into_result(self) -> Result<R, Reasons> {
        match self {
            Self::Valid(record) => Ok(record),
            Self::Invalid(reasons) => Err(reasons),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
