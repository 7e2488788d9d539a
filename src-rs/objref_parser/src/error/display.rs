//! Display implementations for parser errors.

use std::fmt;

use crate::{
    error::{
        ParseError, ParserError,
        reason::{ExpectKind, ParserErrorReason},
    },
    token::error::{ExpectKind as TokenExpectKind, ExpectSymbol, TokenErrorKind},
};

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad reference {:?}: {}", self.reference(), self.reason())
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl fmt::Display for ParserErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUnitName => write!(f, "empty unit name"),
            Self::Expect(kind) => write!(f, "expected {kind}"),
            Self::MissingQualifiedName => write!(f, "missing qualified name after `:`"),
            Self::MultipleSeparators => write!(f, "more than one `:` separator"),
            Self::UnexpectedToken => write!(f, "unexpected character"),
            Self::TokenError(kind) => write!(f, "{kind}"),
            Self::NomError(kind) => write!(f, "internal parser error ({kind:?})"),
        }
    }
}

impl fmt::Display for ExpectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnitSegment => write!(f, "a unit name segment"),
            Self::PathSegment => write!(f, "a qualified name segment"),
        }
    }
}

impl fmt::Display for TokenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expect(TokenExpectKind::Identifier) => write!(f, "expected an identifier"),
            Self::Expect(TokenExpectKind::Symbol(symbol)) => write!(f, "expected `{symbol}`"),
            Self::NomError(kind) => write!(f, "internal token error ({kind:?})"),
        }
    }
}

impl fmt::Display for ExpectSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Colon => write!(f, ":"),
            Self::Dot => write!(f, "."),
        }
    }
}
