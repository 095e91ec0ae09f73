//! End-to-end scenarios: a form-shaped record validated by rule sets.

use fieldset_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
struct User {
    first_name: String,
    last_name: String,
    age: Option<u32>,
}

keys! {
    /// Field keys for [`User`].
    pub mod user for User {
        pub FIRST_NAME: String = "first_name";
        pub LAST_NAME: String = "last_name";
        pub AGE: Option<u32> = "age";
    }
}

impl PartialRecord for User {
    fn to_partial(&self) -> Partial<Self> {
        Partial::new()
            .with(user::FIRST_NAME, self.first_name.clone())
            .with(user::LAST_NAME, self.last_name.clone())
            .with(user::AGE, self.age)
    }

    fn from_partial(partial: &Partial<Self>) -> Result<Self, PartialError> {
        Ok(Self {
            first_name: partial.get(user::FIRST_NAME)?.clone(),
            last_name: partial.get(user::LAST_NAME)?.clone(),
            age: partial.get_some(user::AGE).copied(),
        })
    }
}

/// The signup policy used throughout: names present and well-formed,
/// age at least 18.
fn signup() -> Validation<User> {
    Validation::new([
        required(user::FIRST_NAME),
        satisfies(user::FIRST_NAME, |name: &String| !name.is_empty()),
        required(user::LAST_NAME),
        satisfies(user::LAST_NAME, |name: &String| name.len() > 5),
        satisfies(user::AGE, |age: &Option<u32>| {
            age.is_some_and(|age| age >= 18)
        }),
    ])
}

// ============================================================================
// FAILURE AGGREGATION
// ============================================================================

#[test]
fn short_last_name_and_underage_collect_two_reasons() {
    let partial = Partial::new()
        .with(user::FIRST_NAME, "foo".to_owned())
        .with(user::LAST_NAME, "bar".to_owned())
        .with(user::AGE, Some(17));

    let outcome = signup().validate(&partial);
    assert_eq!(
        outcome.reasons(),
        [
            Reason::InvalidValue(user::LAST_NAME.id()),
            Reason::InvalidValue(user::AGE.id()),
        ],
    );
}

#[test]
fn empty_names_fail_their_predicates_while_assigned_none_counts_as_present() {
    // Age is *assigned* an explicit None: required() is satisfied, so
    // only the two name predicates contribute reasons.
    let partial = Partial::new()
        .with(user::FIRST_NAME, String::new())
        .with(user::LAST_NAME, String::new())
        .with(user::AGE, None);

    let rules = Validation::new([
        satisfies(user::FIRST_NAME, |name: &String| !name.is_empty()),
        satisfies(user::LAST_NAME, |name: &String| !name.is_empty()),
        required(user::AGE),
    ]);

    let outcome = rules.validate(&partial);
    assert_eq!(
        outcome.reasons(),
        [
            Reason::InvalidValue(user::FIRST_NAME.id()),
            Reason::InvalidValue(user::LAST_NAME.id()),
        ],
    );
}

#[test]
fn never_assigned_field_fails_both_rule_kinds() {
    // Same rules, but age was never staged at all: now the presence
    // rule fails too. Each declared rule still contributes at most one
    // reason.
    let partial = Partial::new()
        .with(user::FIRST_NAME, String::new())
        .with(user::LAST_NAME, String::new());

    let rules = Validation::new([
        satisfies(user::FIRST_NAME, |name: &String| !name.is_empty()),
        satisfies(user::LAST_NAME, |name: &String| !name.is_empty()),
        required(user::AGE),
    ]);

    let outcome = rules.validate(&partial);
    assert_eq!(
        outcome.reasons(),
        [
            Reason::InvalidValue(user::FIRST_NAME.id()),
            Reason::InvalidValue(user::LAST_NAME.id()),
            Reason::Missing(user::AGE.id()),
        ],
    );
}

// ============================================================================
// SUCCESS PATH
// ============================================================================

#[test]
fn passing_every_rule_reconstructs_the_record() {
    let partial = Partial::new()
        .with(user::FIRST_NAME, "Test".to_owned())
        .with(user::LAST_NAME, "Test 123".to_owned())
        .with(user::AGE, Some(18));

    let outcome = signup().validate(&partial);
    assert_eq!(
        outcome,
        Outcome::Valid(User {
            first_name: "Test".to_owned(),
            last_name: "Test 123".to_owned(),
            age: Some(18),
        }),
    );
}

#[test]
fn decomposed_record_passes_its_own_policy() {
    let original = User {
        first_name: "Test".to_owned(),
        last_name: "Test 123".to_owned(),
        age: Some(30),
    };

    let outcome = signup().validate(&original.to_partial());
    assert_eq!(outcome.into_record(), Some(original));
}

// ============================================================================
// ACCESSOR SCENARIOS
// ============================================================================

#[test]
fn optional_accessor_on_never_set_field_is_absent_not_an_error() {
    let partial = Partial::<User>::new();
    assert!(partial.get_opt(user::AGE).is_none());
    assert!(partial.get_some(user::AGE).is_none());
}

#[test]
fn required_accessor_on_never_set_field_reports_value_not_found() {
    let partial = Partial::<User>::new();
    assert_eq!(
        partial.get(user::FIRST_NAME).unwrap_err(),
        PartialError::ValueNotFound {
            field: user::FIRST_NAME.id()
        },
    );
}

// ============================================================================
// PRESENCE SEMANTICS, PARAMETERIZED
// ============================================================================

#[rstest]
#[case::never_assigned(None, false)]
#[case::assigned_none(Some(None), true)]
#[case::assigned_some(Some(Some(21)), true)]
fn presence_means_assigned_not_non_null(
    #[case] staged: Option<Option<u32>>,
    #[case] expect_present: bool,
) {
    let mut partial = Partial::new()
        .with(user::FIRST_NAME, "Test".to_owned())
        .with(user::LAST_NAME, "Test 123".to_owned());
    if let Some(age) = staged {
        partial.set(user::AGE, age);
    }

    let rules = Validation::new([
        required(user::FIRST_NAME),
        required(user::LAST_NAME),
        required(user::AGE),
    ]);
    let outcome = rules.validate(&partial);
    assert_eq!(outcome.reasons().is_empty(), expect_present);
}

#[rstest]
#[case::underage(17, false)]
#[case::exactly_adult(18, true)]
#[case::adult(30, true)]
fn age_predicate_boundary(#[case] age: u32, #[case] expect_pass: bool) {
    let partial = User {
        first_name: "Test".to_owned(),
        last_name: "Test 123".to_owned(),
        age: Some(age),
    }
    .to_partial();

    assert_eq!(signup().validate(&partial).is_valid(), expect_pass);
}
