//! Identifier syntax shared by widget ids and class names.
//!
//! An identifier is one or more letters, digits, underscores or hyphens that
//! does not begin with a digit.

use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z_\-][a-zA-Z0-9_\-]*$").expect("identifier pattern is valid")
});

/// A string that is not a legal identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "'{value}' is an invalid {description}; identifiers must contain only letters, \
     numbers, underscores, or hyphens, and must not begin with a number."
)]
pub struct IdentifierError {
    /// What the identifier was meant to be (e.g. `"id"`).
    pub description: String,
    /// The rejected input.
    pub value: String,
}

/// Whether `value` is a legal identifier.
pub fn is_identifier(value: &str) -> bool {
    IDENTIFIER.is_match(value)
}

/// Check that every name in `names` is a legal identifier.
///
/// The empty string is not an identifier; callers that allow clearing a value
/// must special-case it.
pub fn check_identifiers<'a>(
    description: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), IdentifierError> {
    match names.into_iter().find(|name| !is_identifier(name)) {
        Some(bad) => Err(IdentifierError {
            description: description.to_owned(),
            value: bad.to_owned(),
        }),
        None => Ok(()),
    }
}
