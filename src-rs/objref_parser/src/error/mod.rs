//! Error handling for the reference parser.

use objref_error::{AsObjrefError, Context};

use crate::{token::error::TokenError, util::InputSpan};

mod display;

pub mod reason;
use reason::ParserErrorReason;

mod parser_trait;
pub use parser_trait::ErrorHandlingParser;

/// An error that occurred during parsing, positioned within the input.
///
/// This is the error type the nom parsers work with internally. The
/// public entry points wrap it into a [`ParseError`], which also carries
/// the offending reference text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserError {
    /// The offset in the reference text where the error occurred
    pub error_offset: usize,
    /// The reason for the error
    pub reason: ParserErrorReason,
}

impl ParserError {
    /// Creates a new `ParserError` at the position of the given input
    fn new(reason: ParserErrorReason, input: InputSpan<'_>) -> Self {
        Self {
            error_offset: input.location_offset(),
            reason,
        }
    }

    /// Creates a new `ParserError` from a `TokenError` with a specific reason
    ///
    /// This is used to convert token-level errors to parser-level errors
    #[must_use]
    const fn new_from_token_error(error: TokenError, reason: ParserErrorReason) -> Self {
        Self {
            reason,
            error_offset: error.offset,
        }
    }

    /// Creates a new `ParserError` for a reference with no unit name
    pub(crate) fn empty_unit_name(input: InputSpan<'_>) -> Self {
        Self::new(ParserErrorReason::empty_unit_name(), input)
    }

    /// Creates a new `ParserError` for an expected unit name segment
    pub(crate) fn expect_unit_segment(input: InputSpan<'_>) -> Self {
        Self::new(ParserErrorReason::expect_unit_segment(), input)
    }

    /// Creates a new `ParserError` for an expected qualified path segment
    pub(crate) fn expect_path_segment(error: TokenError) -> Self {
        Self::new_from_token_error(error, ParserErrorReason::expect_path_segment())
    }

    /// Creates a new `ParserError` for a separator with nothing after it
    pub(crate) fn missing_qualified_name(input: InputSpan<'_>) -> Self {
        Self::new(ParserErrorReason::missing_qualified_name(), input)
    }

    /// Creates a new `ParserError` for a second `:` separator
    pub(crate) fn multiple_separators(input: InputSpan<'_>) -> Self {
        Self::new(ParserErrorReason::multiple_separators(), input)
    }

    /// Creates a new `ParserError` for trailing input after a reference
    pub(crate) fn unexpected_token(input: InputSpan<'_>) -> Self {
        Self::new(ParserErrorReason::unexpected_token(), input)
    }
}

impl<'a> nom::error::ParseError<InputSpan<'a>> for ParserError {
    fn from_error_kind(input: InputSpan<'a>, kind: nom::error::ErrorKind) -> Self {
        #[expect(
            clippy::wildcard_enum_match_arm,
            reason = "this will only ever care about the EOF error kind"
        )]
        let reason = match kind {
            // If `all_consuming` is used, we expect the parser to consume the entire input
            nom::error::ErrorKind::Eof => ParserErrorReason::unexpected_token(),
            _ => ParserErrorReason::nom_error(kind),
        };

        Self {
            reason,
            error_offset: input.location_offset(),
        }
    }

    fn append(_input: InputSpan<'a>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

/// Implements conversion from `TokenError` to `ParserError`.
///
/// This allows token-level errors to be converted into parser-level
/// errors while preserving the error information.
impl From<TokenError> for ParserError {
    fn from(e: TokenError) -> Self {
        Self {
            reason: ParserErrorReason::token_error(e.kind),
            error_offset: e.offset,
        }
    }
}

/// An invalid reference error, as returned by the public parsing entry
/// points.
///
/// Carries the offending reference text together with the position and
/// the reason of the failure, so the error can be reported without the
/// caller keeping the input around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    reference: String,
    offset: usize,
    reason: ParserErrorReason,
}

impl ParseError {
    /// Creates a new `ParseError` from the internal positioned error and
    /// the reference text it occurred in.
    pub(crate) fn new(reference: &str, error: ParserError) -> Self {
        Self {
            reference: reference.to_string(),
            offset: error.error_offset,
            reason: error.reason,
        }
    }

    /// Returns the reference text that failed to parse
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Returns the character offset where parsing failed
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the reason parsing failed
    pub fn reason(&self) -> ParserErrorReason {
        self.reason
    }
}

impl AsObjrefError for ParseError {
    fn message(&self) -> String {
        self.reason.to_string()
    }

    fn offset(&self) -> Option<usize> {
        Some(self.offset)
    }

    fn context(&self) -> Vec<Context> {
        match self.reason {
            ParserErrorReason::MultipleSeparators => vec![Context::Help(
                "a reference may contain at most one `:`; members within the unit are separated by `.`"
                    .to_string(),
            )],
            ParserErrorReason::MissingQualifiedName => vec![Context::Help(
                "remove the trailing `:` to refer to the unit itself".to_string(),
            )],
            ParserErrorReason::EmptyUnitName
            | ParserErrorReason::Expect(_)
            | ParserErrorReason::UnexpectedToken
            | ParserErrorReason::TokenError(_)
            | ParserErrorReason::NomError(_) => vec![],
        }
    }
}
