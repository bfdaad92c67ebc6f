use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Parser combinator that matches one or more occurrences of the given
/// parser. Fails iff the first attempt fails, propagating that failure.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'s, P> Parser<'s> for Some<P>
where
    P: Parser<'s>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, Vec<P::Output>> {
        // First parse must succeed.
        let (first, mut state) = self.parser.parse(state)?;
        let mut results = vec![first];
        loop {
            match self.parser.parse(state) {
                Ok((value, next_state)) => {
                    results.push(value);
                    state = next_state;
                }
                Err(_) => break,
            }
        }
        Ok((results, state))
    }

    fn label(&self) -> String {
        format!("{}+", self.parser.label())
    }
}

/// Convenience function to create a Some parser
pub fn some<'s, P>(parser: P) -> Some<P>
where
    P: Parser<'s>,
{
    Some::new(parser)
}
