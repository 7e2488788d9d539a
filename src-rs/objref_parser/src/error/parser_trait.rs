use nom::{Parser, error::ParseError};

/// A trait for converting parser errors in a consistent way.
///
/// This trait extends nom's `Parser` trait with helpers for moving
/// between the token-level and parser-level error types while leaving
/// unrecoverable errors (`nom::Err::Failure`) untouched.
pub trait ErrorHandlingParser<I, O, E>: Parser<I, Output = O, Error = E>
where
    E: ParseError<I>,
{
    /// Converts errors to a new type that implements `From<E>`.
    ///
    /// This is a convenience method that uses `Into` for both recoverable
    /// and unrecoverable errors.
    fn convert_errors<E2>(mut self) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|e| match e {
                nom::Err::Error(e) => nom::Err::Error(e.into()),
                nom::Err::Failure(e) => nom::Err::Failure(e.into()),
                nom::Err::Incomplete(e) => nom::Err::Incomplete(e),
            })
        }
    }
}

/// Implements the `ErrorHandlingParser` trait for any type that
/// implements `Parser`.
impl<I, O, E, P> ErrorHandlingParser<I, O, E> for P
where
    P: Parser<I, Output = O, Error = E>,
    E: ParseError<I>,
{
}
