//! The `keys!` macro: declare a record's field keys in one block.

/// Declares a module of `const` [`Key`](crate::Key) items for a record
/// type.
///
/// One line per field: visibility, key name, value type, and the field's
/// string name. Doc comments on the module and on individual keys pass
/// through.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldset_partial::keys;
///
/// struct User {
///     name: String,
///     age: u32,
///     nickname: Option<String>,
/// }
///
/// keys! {
///     /// Field keys for [`User`].
///     pub mod user for User {
///         pub NAME: String = "name";
///         pub AGE: u32 = "age";
///         /// Optional field: `Some`/`None` is part of the value.
///         pub NICKNAME: Option<String> = "nickname";
///     }
/// }
///
/// assert_eq!(user::NAME.name(), "name");
/// ```
#[macro_export]
macro_rules! keys {
    (
        $(#[$meta:meta])*
        $vis:vis mod $module:ident for $record:ty {
            $(
                $(#[$key_meta:meta])*
                $key_vis:vis $key:ident: $value:ty = $field:literal;
            )+
        }
    ) => {
        $(#[$meta])*
        $vis mod $module {
            #[allow(unused_imports)]
            use super::*;

            $(
                $(#[$key_meta])*
                $key_vis const $key: $crate::Key<$record, $value> =
                    $crate::Key::new($field);
            )+
        }
    };
}
