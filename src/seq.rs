use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Parser combinator that sequences two parsers and returns both results
/// as a tuple. Fails as soon as either parser fails, propagating that
/// failure.
///
/// Note: chaining multiple `.seq()` calls produces nested tuples like
/// `((a, b), c)` rather than flat ones; destructuring keeps the parsing
/// order explicit.
pub struct Seq<P, Q> {
    first: P,
    second: Q,
}

impl<P, Q> Seq<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        Seq { first, second }
    }
}

impl<'s, P, Q> Parser<'s> for Seq<P, Q>
where
    P: Parser<'s>,
    Q: Parser<'s>,
{
    type Output = (P::Output, Q::Output);

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, Self::Output> {
        let (first, state) = self.first.parse(state)?;
        let (second, state) = self.second.parse(state)?;
        Ok(((first, second), state))
    }

    fn label(&self) -> String {
        format!("seq({}, {})", self.first.label(), self.second.label())
    }
}

/// Convenience function to create a Seq parser
pub fn seq<'s, P, Q>(first: P, second: Q) -> Seq<P, Q>
where
    P: Parser<'s>,
    Q: Parser<'s>,
{
    Seq::new(first, second)
}

/// Extension trait to add .seq() method support for parsers
pub trait SeqExt<'s>: Parser<'s> + Sized {
    fn seq<Q>(self, second: Q) -> Seq<Self, Q>
    where
        Q: Parser<'s>,
    {
        Seq::new(self, second)
    }
}

impl<'s, P> SeqExt<'s> for P where P: Parser<'s> {}
