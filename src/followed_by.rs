use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Parser combinator that runs two parsers in sequence and keeps the
/// first result, discarding the second.
pub struct FollowedBy<P, Q> {
    parser: P,
    trailer: Q,
}

impl<P, Q> FollowedBy<P, Q> {
    pub fn new(parser: P, trailer: Q) -> Self {
        FollowedBy { parser, trailer }
    }
}

impl<'s, P, Q> Parser<'s> for FollowedBy<P, Q>
where
    P: Parser<'s>,
    Q: Parser<'s>,
{
    type Output = P::Output;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, Self::Output> {
        let (value, state) = self.parser.parse(state)?;
        let (_, state) = self.trailer.parse(state)?;
        Ok((value, state))
    }

    fn label(&self) -> String {
        format!("followed_by({}, {})", self.parser.label(), self.trailer.label())
    }
}

/// Convenience function to create a FollowedBy parser
pub fn followed_by<'s, P, Q>(parser: P, trailer: Q) -> FollowedBy<P, Q>
where
    P: Parser<'s>,
    Q: Parser<'s>,
{
    FollowedBy::new(parser, trailer)
}

/// Extension trait to add .followed_by() method support for parsers
pub trait FollowedByExt<'s>: Parser<'s> + Sized {
    fn followed_by<Q>(self, trailer: Q) -> FollowedBy<Self, Q>
    where
        Q: Parser<'s>,
    {
        FollowedBy::new(self, trailer)
    }
}

impl<'s, P> FollowedByExt<'s> for P where P: Parser<'s> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::char::char;
    use crate::lexical::number::integer;
    use crate::lexical::space::space;
    use crate::parser::parse;

    #[test]
    fn test_keeps_first_result() {
        let parser = followed_by(integer(), space());
        let (value, state) = parse("100    a", &parser).unwrap();
        assert_eq!(value, 100);
        assert_eq!(state.view(None), "a");
    }

    #[test]
    fn test_trailer_failure_fails_whole() {
        let parser = followed_by(integer(), char(';'));
        assert!(parse("100,", &parser).is_err());
    }

    #[test]
    fn test_method_syntax() {
        let parser = char('a').followed_by(char('b'));
        let (value, _) = parse("ab", &parser).unwrap();
        assert_eq!(value, 'a');
    }
}
