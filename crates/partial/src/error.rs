//! Error type for typed reads from a partial container.

use crate::field::FieldId;

/// Failure of the required accessor on a [`Partial`](crate::Partial).
///
/// Both variants are recoverable and carry the offending field id.
/// Validation failure reasons are deliberately *not* errors of this
/// type; they are plain data aggregated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PartialError {
    /// The field was never set on the container.
    #[error("no value set for field {field}")]
    ValueNotFound {
        /// The field that was read.
        field: FieldId,
    },

    /// A value is present but is not of the accessor's declared type.
    ///
    /// Reaching this means two keys with the same name but different
    /// value types exist for one record type; the read reports the
    /// misuse instead of panicking.
    #[error("value for field {field} is not a `{expected}`")]
    TypeMismatch {
        /// The field that was read.
        field: FieldId,
        /// The type the accessor asked for.
        expected: &'static str,
    },
}

impl PartialError {
    /// Returns the field the failed read was addressed to.
    #[must_use]
    pub const fn field(&self) -> FieldId {
        match self {
            Self::ValueNotFound { field } | Self::TypeMismatch { field, .. } => *field,
        }
    }
}
