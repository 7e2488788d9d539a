//! Detailed error reasons for reference parsing errors.

use crate::token::error::TokenErrorKind;

/// The different kinds of errors that can occur while parsing a reference.
///
/// Each variant describes one way the grammar can be violated. All of
/// them surface through the same [`ParseError`](crate::error::ParseError)
/// type; the reason exists so messages and tests can be precise about
/// what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErrorReason {
    /// The reference has no unit name before the separator
    EmptyUnitName,
    /// Expected a grammar construct but found something else
    Expect(ExpectKind),
    /// A `:` separator with nothing after it
    MissingQualifiedName,
    /// More than one `:` separator in the reference
    MultipleSeparators,
    /// Found a token that was not expected in the current context
    UnexpectedToken,
    /// A token-level error occurred
    TokenError(TokenErrorKind),
    /// A low-level nom parsing error
    NomError(nom::error::ErrorKind),
}

/// The different grammar constructs that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectKind {
    /// Expected a unit name segment
    UnitSegment,
    /// Expected a qualified path segment
    PathSegment,
}

impl ParserErrorReason {
    pub(crate) fn empty_unit_name() -> Self {
        Self::EmptyUnitName
    }

    pub(crate) fn expect_unit_segment() -> Self {
        Self::Expect(ExpectKind::UnitSegment)
    }

    pub(crate) fn expect_path_segment() -> Self {
        Self::Expect(ExpectKind::PathSegment)
    }

    pub(crate) fn missing_qualified_name() -> Self {
        Self::MissingQualifiedName
    }

    pub(crate) fn multiple_separators() -> Self {
        Self::MultipleSeparators
    }

    pub(crate) fn unexpected_token() -> Self {
        Self::UnexpectedToken
    }

    pub(crate) fn token_error(kind: TokenErrorKind) -> Self {
        Self::TokenError(kind)
    }

    pub(crate) fn nom_error(kind: nom::error::ErrorKind) -> Self {
        Self::NomError(kind)
    }
}
