//! Serialization of failure reasons for API-style reporting.

#![cfg(feature = "serde")]

use fieldset_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Signup {
    email: String,
    age: u32,
}

keys! {
    pub mod signup for Signup {
        pub EMAIL: String = "email";
        pub AGE: u32 = "age";
    }
}

impl PartialRecord for Signup {
    fn to_partial(&self) -> Partial<Self> {
        Partial::new()
            .with(signup::EMAIL, self.email.clone())
            .with(signup::AGE, self.age)
    }

    fn from_partial(partial: &Partial<Self>) -> Result<Self, PartialError> {
        Ok(Self {
            email: partial.get(signup::EMAIL)?.clone(),
            age: *partial.get(signup::AGE)?,
        })
    }
}

#[test]
fn invalid_outcome_serializes_as_a_reason_list() {
    let rules = Validation::new([
        required(signup::EMAIL),
        satisfies(signup::EMAIL, |email: &String| email.contains('@')),
        required(signup::AGE),
    ]);

    let partial = Partial::new().with(signup::EMAIL, "nope".to_owned());

    let outcome = rules.validate(&partial);
    let body = serde_json::to_value(outcome.reasons()).unwrap();
    assert_eq!(
        body,
        json!([
            { "kind": "invalid_value", "field": "Signup.email" },
            { "kind": "missing", "field": "Signup.age" },
        ]),
    );
}

#[test]
fn field_ids_serialize_as_dotted_paths() {
    assert_eq!(
        serde_json::to_value(signup::AGE.id()).unwrap(),
        json!("Signup.age"),
    );
}
