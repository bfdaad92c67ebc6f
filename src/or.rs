use crate::error::{FailureData, ParseError};
use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Parser combinator that tries the first parser and, if it fails, tries
/// the second against the *original* state. No partial consumption leaks
/// across the alternative boundary.
///
/// When both alternatives fail, the combined failure reports the furthest
/// of the two positions (deeper failures are more informative) and
/// concatenates both messages, recording both positions in the data.
pub struct Or<P, Q> {
    first: P,
    second: Q,
}

impl<P, Q> Or<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        Or { first, second }
    }
}

impl<'s, P, Q, O> Parser<'s> for Or<P, Q>
where
    P: Parser<'s, Output = O>,
    Q: Parser<'s, Output = O>,
{
    type Output = O;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, O> {
        let first_err = match self.first.parse(state) {
            Ok(success) => return Ok(success),
            Err(err) => err,
        };
        match self.second.parse(state) {
            Ok(success) => Ok(success),
            Err(second_err) => {
                let pos = first_err.pos.max(second_err.pos);
                let message = format!(
                    "{} failed: {} and {}",
                    self.label(),
                    first_err.message,
                    second_err.message
                );
                let positions = FailureData {
                    expected: Vec::new(),
                    failure_positions: vec![first_err.pos, second_err.pos],
                };
                let data = first_err.data.merge(second_err.data).merge(positions);
                Err(ParseError::with_data(message, pos, data))
            }
        }
    }

    fn label(&self) -> String {
        format!("alt({}, {})", self.first.label(), self.second.label())
    }
}

/// Convenience function to create an Or parser
pub fn alt<'s, P, Q, O>(first: P, second: Q) -> Or<P, Q>
where
    P: Parser<'s, Output = O>,
    Q: Parser<'s, Output = O>,
{
    Or::new(first, second)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'s>: Parser<'s> + Sized {
    fn or<Q>(self, other: Q) -> Or<Self, Q>
    where
        Q: Parser<'s, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

impl<'s, P> OrExt<'s> for P where P: Parser<'s> {}
