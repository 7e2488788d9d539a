use nom::IResult;
use nom_locate::LocatedSpan;

use crate::token::error::TokenError;

/// A span of text in the reference string being parsed.
///
/// The span tracks its offset within the full reference so errors can
/// point at the exact character that caused them.
pub type InputSpan<'a> = LocatedSpan<&'a str>;

/// A result type for parser operations.
///
/// This type alias provides a consistent result type for all parser
/// functions, wrapping nom's `IResult` with our span type.
pub type Result<'a, O, E = TokenError> = IResult<InputSpan<'a>, O, E>;
