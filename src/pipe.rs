use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Parser combinator that runs a parser, then a second parser built from
/// the first one's result (monadic bind).
///
/// This is how dependent grammars are expressed: the parser produced by
/// the function can depend on what was already parsed. See
/// `repeated`-style count prefixes, or the `{m,n}` range parser in the
/// regexp grammar.
pub struct Pipe<P, F> {
    parser: P,
    next: F,
}

impl<P, F> Pipe<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Pipe { parser, next }
    }
}

impl<'s, P, F, Q> Parser<'s> for Pipe<P, F>
where
    P: Parser<'s>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'s>,
{
    type Output = Q::Output;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, Self::Output> {
        let (value, state) = self.parser.parse(state)?;
        (self.next)(value).parse(state)
    }

    fn label(&self) -> String {
        format!("pipe({})", self.parser.label())
    }
}

/// Convenience function to create a Pipe parser
pub fn pipe<'s, P, F, Q>(parser: P, next: F) -> Pipe<P, F>
where
    P: Parser<'s>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'s>,
{
    Pipe::new(parser, next)
}

/// Extension trait to add .pipe() method support for parsers
pub trait PipeExt<'s>: Parser<'s> + Sized {
    fn pipe<F, Q>(self, next: F) -> Pipe<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'s>,
    {
        Pipe::new(self, next)
    }
}

impl<'s, P> PipeExt<'s> for P where P: Parser<'s> {}
