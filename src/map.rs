use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Parser combinator that transforms the output of a parser using a
/// mapping function. Failures propagate unchanged.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'s, P, F, U> Parser<'s> for Map<P, F>
where
    P: Parser<'s>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, U> {
        let (value, state) = self.parser.parse(state)?;
        Ok(((self.mapper)(value), state))
    }

    fn label(&self) -> String {
        format!("fmap({})", self.parser.label())
    }
}

/// Parser combinator that replaces the output of a parser with a fixed
/// value. Equivalent to mapping with a constant function.
pub struct To<P, U> {
    parser: P,
    value: U,
}

impl<P, U> To<P, U> {
    pub fn new(parser: P, value: U) -> Self {
        To { parser, value }
    }
}

impl<'s, P, U> Parser<'s> for To<P, U>
where
    P: Parser<'s>,
    U: Clone,
{
    type Output = U;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, U> {
        let (_, state) = self.parser.parse(state)?;
        Ok((self.value.clone(), state))
    }

    fn label(&self) -> String {
        format!("to({})", self.parser.label())
    }
}

/// Convenience function to create a Map parser
pub fn fmap<'s, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'s>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Convenience function to create a To parser
pub fn to<'s, P, U>(parser: P, value: U) -> To<P, U>
where
    P: Parser<'s>,
    U: Clone,
{
    To::new(parser, value)
}

/// Extension trait to add .map() and .to() method support for parsers
pub trait MapExt<'s>: Parser<'s> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn to<U: Clone>(self, value: U) -> To<Self, U> {
        To::new(self, value)
    }
}

impl<'s, P> MapExt<'s> for P where P: Parser<'s> {}
