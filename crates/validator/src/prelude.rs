//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldset_validator::prelude::*;` import that
//! brings in the container types from `fieldset-partial` alongside the
//! engine, rules, and outcome types.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldset_validator::prelude::*;
//!
//! let rules = Validation::new([
//!     required(user::EMAIL),
//!     satisfies(user::AGE, |age: &u32| *age >= 18),
//! ]);
//! ```

// ============================================================================
// CONTAINER: keys, store, record capability
// ============================================================================

pub use fieldset_partial::{Field, FieldId, Key, Partial, PartialError, PartialRecord, keys};

// ============================================================================
// ENGINE: rule set, rules, outcomes
// ============================================================================

pub use crate::engine::Validation;
pub use crate::outcome::{Outcome, Reason, Reasons};
pub use crate::rules::{Rule, required, satisfies};
