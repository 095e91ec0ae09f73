//! # fieldset-validator
//!
//! Declarative validation of partially-populated records.
//!
//! A [`Validation`] is an ordered, immutable set of rules over the
//! fields of one record type. Evaluating it against a
//! [`Partial`](fieldset_partial::Partial) runs every rule (no
//! short-circuiting) and produces an [`Outcome`]: the reconstructed
//! record when everything passes, or the full list of failure
//! [`Reason`]s in rule-declaration order.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldset_validator::prelude::*;
//!
//! let signup = Validation::new([
//!     required(user::FIRST_NAME),
//!     satisfies(user::FIRST_NAME, |name: &String| !name.is_empty()),
//!     required(user::LAST_NAME),
//!     satisfies(user::AGE, |age: &u32| *age >= 18),
//! ]);
//!
//! match signup.validate(&partial) {
//!     Outcome::Valid(user) => println!("welcome, {}", user.first_name),
//!     Outcome::Invalid(reasons) => {
//!         for reason in &reasons {
//!             eprintln!("{reason}");
//!         }
//!     }
//! }
//! ```
//!
//! ## Rule kinds
//!
//! - [`required`] passes iff the field has been assigned, whatever the
//!   value (an explicit `None` on an `Option`-typed field counts).
//! - [`satisfies`] passes iff the field is present *and* its value
//!   satisfies a typed predicate. An absent field, a failed downcast,
//!   and a rejected value all report the same way: as an invalid value.
//!
//! Failure reasons are data, never errors; the expected "invalid input"
//! path allocates no error machinery and loses no information.

pub mod engine;
pub mod outcome;
pub mod prelude;
pub mod rules;

pub use engine::Validation;
pub use outcome::{Outcome, Reason, Reasons};
pub use rules::{Rule, required, satisfies};
