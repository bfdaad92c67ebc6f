use crate::error::ParseError;
use crate::state::ParseState;
use std::rc::Rc;

/// Outcome of running a parser: the semantic value plus the continuation
/// state on success, or a failure describing how far parsing got.
pub type ParseResult<'s, T> = Result<(T, ParseState<'s>), ParseError>;

/// Core trait for parser combinators.
///
/// A parser is a function from `ParseState` to `ParseResult`, carrying a
/// human-readable label for diagnostics. Parsers are immutable once
/// constructed; combinators build new parsers rather than mutating
/// existing ones. A failing parse must not consume input: callers hold on
/// to the pre-parse state and may retry alternatives against it.
pub trait Parser<'s> {
    type Output;

    /// Attempt to parse from the given state.
    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, Self::Output>;

    /// Human-readable name of this parser, used in failure messages.
    fn label(&self) -> String {
        "?".to_string()
    }
}

impl<'s, P: Parser<'s> + ?Sized> Parser<'s> for &P {
    type Output = P::Output;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, Self::Output> {
        (**self).parse(state)
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

impl<'s, P: Parser<'s> + ?Sized> Parser<'s> for Box<P> {
    type Output = P::Output;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, Self::Output> {
        (**self).parse(state)
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

impl<'s, P: Parser<'s> + ?Sized> Parser<'s> for Rc<P> {
    type Output = P::Output;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, Self::Output> {
        (**self).parse(state)
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

/// A reference-counted, type-erased parser.
///
/// Combinators that take a list of parsers (`chain`, `alts`, `sjoin`) and
/// recursive grammars need a single concrete type for heterogeneous
/// parsers sharing an output type; this is it.
pub type SharedParser<'s, T> = Rc<dyn Parser<'s, Output = T> + 's>;

/// Extension trait for erasing a parser's concrete type.
pub trait SharedExt<'s>: Parser<'s> + Sized + 's {
    fn shared(self) -> SharedParser<'s, Self::Output> {
        Rc::new(self)
    }
}

impl<'s, P> SharedExt<'s> for P where P: Parser<'s> + 's {}

/// Parse an input string from the beginning with the given parser.
///
/// This is the sole entry point the combinator core exposes: it builds
/// the initial state and runs the parser against it.
pub fn parse<'s, P>(input: &'s str, parser: &P) -> ParseResult<'s, P::Output>
where
    P: Parser<'s>,
{
    parser.parse(ParseState::new(input))
}

/// Parse starting from an explicit 1-based position.
pub fn parse_at<'s, P>(input: &'s str, parser: &P, start: usize) -> ParseResult<'s, P::Output>
where
    P: Parser<'s>,
{
    parser.parse(ParseState::at(input, start))
}
