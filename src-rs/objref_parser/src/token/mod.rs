//! Token parsers for the reference grammar.
//!
//! The grammar has exactly three token kinds: identifiers, the `.`
//! segment separator, and the `:` unit/path separator.

pub mod error;
pub mod symbol;

use nom::{
    Parser as _, bytes::complete::take_while, character::complete::satisfy, combinator::recognize,
};

use crate::{
    token::error::TokenError,
    util::{InputSpan, Result},
};

/// Parses an identifier (alphabetic or underscore, then alphanumeric or
/// underscore).
///
/// Identifiers follow standard programming language rules:
/// - Must start with an alphabetic character or underscore
/// - Can be followed by any number of alphanumeric characters or underscores
///
/// There are no reserved words in the reference grammar, so any such
/// sequence is a valid identifier.
///
/// # Arguments
///
/// * `input` - The input span to parse
///
/// # Returns
///
/// Returns the matched span, or an error if the input does not start with
/// a valid identifier.
pub fn identifier(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>> {
    recognize((
        // First character must be alphabetic or underscore
        satisfy(|c: char| c.is_alphabetic() || c == '_'),
        // Remaining characters can be alphanumeric or underscore
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))
    .parse(input)
    .map_err(|err| err.map(TokenError::expected_identifier))
}
