use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Parser combinator that matches zero or more occurrences of the given
/// parser, greedily, stopping at the first failure. Always succeeds.
///
/// Warning: if the given parser succeeds without consuming input, this
/// parser will not terminate.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'s, P> Parser<'s> for Many<P>
where
    P: Parser<'s>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, Vec<P::Output>> {
        let mut results = Vec::new();
        let mut state = state;
        loop {
            match self.parser.parse(state) {
                Ok((value, next_state)) => {
                    results.push(value);
                    state = next_state;
                }
                // Zero or more: failure just ends the repetition.
                Err(_) => break,
            }
        }
        Ok((results, state))
    }

    fn label(&self) -> String {
        format!("{}*", self.parser.label())
    }
}

/// Convenience function to create a Many parser
pub fn many<'s, P>(parser: P) -> Many<P>
where
    P: Parser<'s>,
{
    Many::new(parser)
}
