//! Validating a signup form staged field-by-field.

use fieldset_validator::prelude::*;

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

fn main() {
    // The policy is declared once and reused for every submission.
    let signup = Validation::new([
        required(user::FIRST_NAME),
        satisfies(user::FIRST_NAME, |name: &String| !name.is_empty()),
        required(user::LAST_NAME),
        satisfies(user::LAST_NAME, |name: &String| name.len() > 5),
        satisfies(user::AGE, |age: &Option<u32>| {
            age.is_some_and(|age| age >= 18)
        }),
    ]);

    // A submission with problems: short last name, underage.
    let first_try = Partial::new()
        .with(user::FIRST_NAME, "foo".to_owned())
        .with(user::LAST_NAME, "bar".to_owned())
        .with(user::AGE, Some(17));

    match signup.validate(&first_try) {
        Outcome::Valid(user) => println!("✓ signed up {user:?}"),
        Outcome::Invalid(reasons) => {
            println!("✗ submission rejected:");
            for reason in &reasons {
                println!("    {reason}");
            }
        }
    }

    // A corrected submission.
    let second_try = Partial::new()
        .with(user::FIRST_NAME, "Test".to_owned())
        .with(user::LAST_NAME, "Test 123".to_owned())
        .with(user::AGE, Some(18));

    match signup.validate(&second_try) {
        Outcome::Valid(user) => println!("✓ signed up {user:?}"),
        Outcome::Invalid(reasons) => println!("✗ rejected again: {} problem(s)", reasons.len()),
    }
}
