use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Parser combinator that runs two parsers in sequence and keeps the
/// second result, discarding the first.
pub struct Follows<P, Q> {
    leader: P,
    parser: Q,
}

impl<P, Q> Follows<P, Q> {
    pub fn new(leader: P, parser: Q) -> Self {
        Follows { leader, parser }
    }
}

impl<'s, P, Q> Parser<'s> for Follows<P, Q>
where
    P: Parser<'s>,
    Q: Parser<'s>,
{
    type Output = Q::Output;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, Self::Output> {
        let (_, state) = self.leader.parse(state)?;
        let (value, state) = self.parser.parse(state)?;
        Ok((value, state))
    }

    fn label(&self) -> String {
        format!("follows({}, {})", self.leader.label(), self.parser.label())
    }
}

/// Convenience function to create a Follows parser
pub fn follows<'s, P, Q>(leader: P, parser: Q) -> Follows<P, Q>
where
    P: Parser<'s>,
    Q: Parser<'s>,
{
    Follows::new(leader, parser)
}
