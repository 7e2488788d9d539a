//! Parser for the unit-name portion of a reference.

use nom::{
    Parser as _,
    bytes::complete::take_while,
    combinator::{all_consuming, opt, recognize},
    multi::separated_list1,
};

use objref_reference::UnitName;

use crate::{
    error::{ErrorHandlingParser, ParserError},
    token::{identifier, symbol::dot},
    util::{InputSpan, Result},
};

/// Parses a unit name
///
/// This function **may not consume the complete input**.
pub fn parse(input: InputSpan<'_>) -> Result<'_, UnitName, ParserError> {
    unit_name.parse(input)
}

/// Parses a unit name
///
/// This function **fails if the complete input is not consumed**.
pub fn parse_complete(input: InputSpan<'_>) -> Result<'_, UnitName, ParserError> {
    if input.fragment().is_empty() {
        return Err(nom::Err::Error(ParserError::empty_unit_name(input)));
    }

    all_consuming(unit_name).parse(input)
}

/// Parses a unit name: a leading run of `.` relative markers followed by
/// an optional dot-separated list of identifier segments.
///
/// Only the *leading* dot run may be empty of identifiers; a unit name
/// consisting solely of dots is valid and denotes a purely relative
/// reference. An empty match is rejected.
fn unit_name(input: InputSpan<'_>) -> Result<'_, UnitName, ParserError> {
    let (rest, matched) = recognize((
        take_while(|c| c == '.'),
        opt(separated_list1(dot, identifier)),
    ))
    .convert_errors()
    .parse(input)?;

    if matched.fragment().is_empty() {
        return Err(nom::Err::Error(ParserError::expect_unit_segment(input)));
    }

    Ok((rest, UnitName::new(*matched.fragment())))
}
