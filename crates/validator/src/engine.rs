//! The validation engine: an immutable rule set evaluated against partials.

use std::fmt;

use fieldset_partial::{Partial, PartialRecord};

use crate::outcome::{Outcome, Reasons};
use crate::rules::Rule;

// ============================================================================
// VALIDATION
// ============================================================================

/// An ordered set of [`Rule`]s over one record type, fixed at
/// construction.
///
/// A `Validation` is stateless and reusable: one instance may be
/// evaluated any number of times, from any number of threads, against
/// independent partials.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldset_validator::{Validation, required, satisfies};
///
/// let signup = Validation::new([
///     required(user::EMAIL),
///     satisfies(user::EMAIL, |email: &String| email.contains('@')),
///     satisfies(user::AGE, |age: &u32| *age >= 18),
/// ]);
///
/// let outcome = signup.validate(&partial);
/// ```
pub struct Validation<R> {
    rules: Vec<Rule<R>>,
}

impl<R> Validation<R> {
    /// Builds a rule set from rules in declaration order.
    pub fn new(rules: impl IntoIterator<Item = Rule<R>>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Returns the declared rules, in order.
    #[must_use]
    pub fn rules(&self) -> &[Rule<R>] {
        &self.rules
    }

    /// Returns the number of declared rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules were declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<R: PartialRecord> Validation<R> {
    /// Evaluates every rule against `partial` and reports the outcome.
    ///
    /// All rules run; nothing short-circuits. Each failing rule
    /// contributes exactly one [`Reason`](crate::Reason), in
    /// declaration order. When every rule passes, the record is
    /// reconstructed from the partial and returned as
    /// [`Outcome::Valid`].
    ///
    /// # Panics
    ///
    /// Panics if every rule passes but
    /// [`PartialRecord::from_partial`] still fails. That means the rule
    /// set does not cover a field the record's constructor needs: a
    /// defect in how the rules were declared, not bad input, and one
    /// that must not be misreported as an `Invalid` outcome. It cannot
    /// happen when every field read by `from_partial` is covered by a
    /// `required` rule.
    pub fn validate(&self, partial: &Partial<R>) -> Outcome<R> {
        let mut reasons = Reasons::new();
        for rule in &self.rules {
            if let Some(reason) = rule.evaluate(partial) {
                reasons.push(reason);
            }
        }

        if !reasons.is_empty() {
            return Outcome::Invalid(reasons);
        }

        match R::from_partial(partial) {
            Ok(record) => Outcome::Valid(record),
            Err(err) => panic!(
                "rule set passed but `{}` could not be reconstructed: {err}; every field \
                 consumed by `from_partial` must be covered by a `required` rule",
                std::any::type_name::<R>(),
            ),
        }
    }
}

impl<R> FromIterator<Rule<R>> for Validation<R> {
    fn from_iter<I: IntoIterator<Item = Rule<R>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<R> fmt::Debug for Validation<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validation")
            .field("rules", &self.rules)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
