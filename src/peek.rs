use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Parser combinator that runs a parser and returns its result without
/// advancing the state (lookahead without consumption). Failures
/// propagate as-is.
pub struct Peek<P> {
    parser: P,
}

impl<P> Peek<P> {
    pub fn new(parser: P) -> Self {
        Peek { parser }
    }
}

impl<'s, P> Parser<'s> for Peek<P>
where
    P: Parser<'s>,
{
    type Output = P::Output;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, P::Output> {
        let (value, _) = self.parser.parse(state)?;
        Ok((value, state))
    }

    fn label(&self) -> String {
        format!("peek({})", self.parser.label())
    }
}

/// Convenience function to create a Peek parser
pub fn peek<'s, P>(parser: P) -> Peek<P>
where
    P: Parser<'s>,
{
    Peek::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::string::string;
    use crate::parser::parse;
    use crate::seq::seq;

    #[test]
    fn test_peek_does_not_consume() {
        let parser = seq(peek(string("ab")), string("abc"));
        let ((ahead, full), state) = parse("abcd", &parser).unwrap();
        assert_eq!(ahead, "ab");
        assert_eq!(full, "abc");
        assert_eq!(state.view(None), "d");
    }

    #[test]
    fn test_peek_failure_propagates() {
        let err = parse("xyz", &peek(string("ab"))).unwrap_err();
        assert_eq!(err.pos, 1);
    }
}
