//! Parser for textual object references.
//!
//! A reference names a loadable unit and optionally a qualified path to a
//! member within it:
//!
//! ```text
//! reference      := unit-name [ ":" qualified-path ]
//! unit-name      := "."* identifier ("." identifier)*
//! qualified-path := identifier ("." identifier)*
//! ```
//!
//! The leading dot run of a unit name marks a relative reference, and the
//! run on its own (`.`, `..`) is a valid unit name; everywhere else an
//! empty segment is a syntax error. Parsing is purely syntactic: no unit
//! is loaded and no member is looked up.

use objref_reference::{ParsedReference, QualifiedPath, UnitName};

pub mod error;

mod token;

mod util;
use util::{InputSpan, Result as InternalResult};

mod qualified_path;
mod reference;
mod unit_name;

pub use error::ParseError;

/// Parses a complete reference into a unit name and an optional qualified
/// path.
///
/// # Errors
///
/// Returns an error if the reference violates the grammar: an empty or
/// invalid unit name, a `:` with nothing after it, an invalid qualified
/// path segment, or more than one `:` separator.
pub fn parse(input: &str) -> Result<ParsedReference, ParseError> {
    run(input, reference::parse_complete)
}

/// Parses a unit name on its own.
///
/// # Errors
///
/// Returns an error if the input is not a valid unit name.
pub fn parse_unit_name(input: &str) -> Result<UnitName, ParseError> {
    run(input, unit_name::parse_complete)
}

/// Parses a qualified path on its own.
///
/// # Errors
///
/// Returns an error if the input is not a valid qualified path.
pub fn parse_qualified_path(input: &str) -> Result<QualifiedPath, ParseError> {
    run(input, qualified_path::parse_complete)
}

/// Internal parsing function that handles the common parsing logic.
fn run<T>(
    input: &str,
    parser: impl Fn(InputSpan<'_>) -> InternalResult<'_, T, error::ParserError>,
) -> Result<T, ParseError> {
    let span = InputSpan::new(input);
    let result = parser(span);

    match result {
        Ok((_rest, value)) => Ok(value),
        Err(nom::Err::Incomplete(_needed)) => unreachable!(
            "This should never happen because we use `complete` combinators rather than `stream` combinators"
        ),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(ParseError::new(input, e)),
    }
}
