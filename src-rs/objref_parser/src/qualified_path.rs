//! Parser for the qualified-path portion of a reference.

use nom::{
    Parser as _,
    combinator::{all_consuming, recognize},
    multi::separated_list1,
};

use objref_reference::QualifiedPath;

use crate::{
    error::ParserError,
    token::{identifier, symbol::dot},
    util::{InputSpan, Result},
};

/// Parses a qualified path
///
/// This function **may not consume the complete input**.
pub fn parse(input: InputSpan<'_>) -> Result<'_, QualifiedPath, ParserError> {
    qualified_path.parse(input)
}

/// Parses a qualified path
///
/// This function **fails if the complete input is not consumed**.
pub fn parse_complete(input: InputSpan<'_>) -> Result<'_, QualifiedPath, ParserError> {
    all_consuming(qualified_path).parse(input)
}

/// Parses a qualified path: a dot-separated list of identifier segments.
///
/// Every segment must be a valid identifier, which forbids leading,
/// trailing, and interior empty segments.
fn qualified_path(input: InputSpan<'_>) -> Result<'_, QualifiedPath, ParserError> {
    let (rest, matched) = recognize(separated_list1(dot, identifier))
        .parse(input)
        .map_err(|err| err.map(ParserError::expect_path_segment))?;

    Ok((rest, QualifiedPath::new(*matched.fragment())))
}
