use crate::token::is_boolean;

/// A row is a header when any of its fields is not a boolean token.
///
/// A row made only of `true`/`false` values is data, even if it is the only
/// row in the input.
#[must_use]
pub fn is_header<S: AsRef<str>>(fields: &[S]) -> bool {
    fields.iter().any(|field| !is_boolean(field.as_ref()))
}
