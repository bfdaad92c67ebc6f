use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;
use std::marker::PhantomData;

/// A lazy parser that defers construction of the actual parser until
/// parse time.
///
/// This is the late-bound indirection that makes recursive grammars
/// expressible: a production can refer to itself (or to a mutually
/// recursive production) through a factory function, since the inner
/// parser is only built when input actually reaches it. See the group
/// production in the regexp grammar.
pub struct Lazy<F, P> {
    factory: F,
    _marker: PhantomData<P>,
}

impl<'s, F, P> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'s>,
{
    pub fn new(factory: F) -> Self {
        Lazy {
            factory,
            _marker: PhantomData,
        }
    }
}

impl<'s, F, P> Parser<'s> for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'s>,
{
    type Output = P::Output;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, P::Output> {
        (self.factory)().parse(state)
    }

    fn label(&self) -> String {
        "lazy".to_string()
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'s, F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'s>,
{
    Lazy::new(factory)
}
