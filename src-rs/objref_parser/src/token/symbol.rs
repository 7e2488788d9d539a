//! Parsers for the separator symbols of the reference grammar.

use nom::{Parser as _, character::complete::char, combinator::recognize};

use crate::{
    token::error::{ExpectSymbol, TokenError},
    util::{InputSpan, Result},
};

/// Parses the `:` separator between the unit name and the qualified path.
pub fn colon(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>> {
    recognize(char(':'))
        .parse(input)
        .map_err(|err| err.map(TokenError::expected_symbol(ExpectSymbol::Colon)))
}

/// Parses the `.` separator between segments.
pub fn dot(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>> {
    recognize(char('.'))
        .parse(input)
        .map_err(|err| err.map(TokenError::expected_symbol(ExpectSymbol::Dot)))
}
