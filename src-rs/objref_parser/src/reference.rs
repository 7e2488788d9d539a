//! Parser for complete references.

use nom::{Input as _, Parser as _, combinator::opt};

use objref_reference::ParsedReference;

use crate::{
    error::{ErrorHandlingParser, ParserError},
    qualified_path,
    token::symbol::colon,
    unit_name,
    util::{InputSpan, Result},
};

/// Parses a reference
///
/// This function **fails if the complete input is not consumed**.
pub fn parse_complete(input: InputSpan<'_>) -> Result<'_, ParsedReference, ParserError> {
    reference.parse(input)
}

/// Parses a reference: a unit name, optionally followed by `:` and a
/// qualified path.
fn reference(input: InputSpan<'_>) -> Result<'_, ParsedReference, ParserError> {
    // An empty unit name is reported as such rather than as a bad
    // identifier, so `""`, `":"`, and `":const"` all name the real problem.
    if input.fragment().is_empty() || input.fragment().starts_with(':') {
        return Err(nom::Err::Error(ParserError::empty_unit_name(input)));
    }

    let (rest, unit_name) = unit_name::parse(input)?;

    let (rest, separator) = opt(colon.convert_errors()).parse(rest)?;

    let Some(_separator) = separator else {
        let rest = expect_end(rest)?;
        return Ok((rest, ParsedReference::new(unit_name, None)));
    };

    if rest.fragment().is_empty() {
        return Err(nom::Err::Error(ParserError::missing_qualified_name(rest)));
    }

    // A second separator is reported as such wherever it occurs in the
    // remainder, before any segment validation.
    if let Some(index) = rest.fragment().find(':') {
        let (second_separator, _) = rest.take_split(index);
        return Err(nom::Err::Error(ParserError::multiple_separators(
            second_separator,
        )));
    }

    let (rest, path) = qualified_path::parse(rest)?;

    let rest = expect_end(rest)?;

    Ok((rest, ParsedReference::new(unit_name, Some(path))))
}

/// Checks that the input is exhausted.
fn expect_end(input: InputSpan<'_>) -> std::result::Result<InputSpan<'_>, nom::Err<ParserError>> {
    if input.fragment().is_empty() {
        Ok(input)
    } else {
        Err(nom::Err::Error(ParserError::unexpected_token(input)))
    }
}
