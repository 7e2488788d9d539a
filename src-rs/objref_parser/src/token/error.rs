//! Error handling for token parsing.

use nom::error::ParseError;

use crate::util::InputSpan;

/// An error that occurred during token parsing.
///
/// Contains both the type of error and the location where it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenError {
    /// The specific kind of error that occurred
    pub kind: TokenErrorKind,
    /// The offset in the reference text where the error occurred
    pub offset: usize,
}

/// The different kinds of errors that can occur during token parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorKind {
    /// Expected a specific token
    Expect(ExpectKind),
    /// A low-level nom parsing error
    NomError(nom::error::ErrorKind),
}

/// The different kinds of tokens that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectKind {
    /// Expected an identifier
    Identifier,
    /// Expected a symbol
    Symbol(ExpectSymbol),
}

/// The different symbols that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectSymbol {
    /// Expected ':' symbol
    Colon,
    /// Expected '.' symbol
    Dot,
}

impl TokenError {
    /// Updates the error kind
    ///
    /// This should only be happening if the error is a nom error, so it
    /// panics if it's not, since that likely means a token parser wrapped
    /// an already-classified error.
    fn update_kind(self, kind: TokenErrorKind) -> Self {
        let is_nom_error = matches!(self.kind, TokenErrorKind::NomError(_));
        assert!(
            is_nom_error,
            "Cannot update an error that is not a nom error! (attempting to update the kind {:?})",
            self.kind
        );

        Self { kind, ..self }
    }

    /// Creates a new `TokenError` instance for an expected identifier
    pub fn expected_identifier(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Identifier))
    }

    /// Creates a new `TokenError` instance for an expected symbol
    pub fn expected_symbol(symbol: ExpectSymbol) -> impl Fn(Self) -> Self {
        move |error: Self| error.update_kind(TokenErrorKind::Expect(ExpectKind::Symbol(symbol)))
    }
}

impl ParseError<InputSpan<'_>> for TokenError {
    fn from_error_kind(input: InputSpan<'_>, kind: nom::error::ErrorKind) -> Self {
        Self {
            kind: TokenErrorKind::NomError(kind),
            offset: input.location_offset(),
        }
    }

    fn append(_input: InputSpan<'_>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}
