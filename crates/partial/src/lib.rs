//! # fieldset-partial
//!
//! Type-safe, possibly-incomplete snapshots of record types.
//!
//! A [`Partial<R>`] holds any subset of the fields of a record type `R`,
//! each addressed by a typed [`Key<R, V>`]. Values are staged without any
//! validation at write time and read back through typed accessors, which
//! makes the container the natural buffer between loosely-typed input
//! (form fields, request bodies) and a fully-constructed domain value.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldset_partial::{keys, Partial, PartialRecord};
//!
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! keys! {
//!     /// Field keys for [`User`].
//!     pub mod user for User {
//!         pub NAME: String = "name";
//!         pub AGE: u32 = "age";
//!     }
//! }
//!
//! let mut partial = Partial::<User>::new();
//! partial.set(user::NAME, "alice".to_owned());
//!
//! assert_eq!(partial.get(user::NAME)?, "alice");
//! assert!(partial.get_opt(user::AGE).is_none());
//! ```
//!
//! ## Design
//!
//! - Writes never fail and never inspect the value ([`Partial::set`]).
//! - The required accessor ([`Partial::get`]) reports absence and
//!   type-erasure misuse as recoverable [`PartialError`]s.
//! - The optional accessor ([`Partial::get_opt`]) never fails.
//! - Record types opt in to decomposition and reconstruction by
//!   implementing [`PartialRecord`].

pub mod error;
pub mod field;
mod macros;
pub mod record;
pub mod store;

pub use error::PartialError;
pub use field::{Field, FieldId, Key};
pub use record::PartialRecord;
pub use store::Partial;
