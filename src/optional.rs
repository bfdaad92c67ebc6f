use crate::map::Map;
use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Parser combinator that runs a parser and falls back to a default value
/// when it fails. Always succeeds, so beware making this the sole target
/// of an unbounded repetition.
pub struct Optional<P, T> {
    parser: P,
    default: T,
}

impl<P, T> Optional<P, T> {
    pub fn new(parser: P, default: T) -> Self {
        Optional { parser, default }
    }
}

impl<'s, P, T> Parser<'s> for Optional<P, T>
where
    P: Parser<'s, Output = T>,
    T: Clone,
{
    type Output = T;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, T> {
        match self.parser.parse(state) {
            Ok(success) => Ok(success),
            Err(_) => Ok((self.default.clone(), state)),
        }
    }

    fn label(&self) -> String {
        format!("{}?", self.parser.label())
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'s, P, T>(parser: P, default: T) -> Optional<P, T>
where
    P: Parser<'s, Output = T>,
    T: Clone,
{
    Optional::new(parser, default)
}

/// Like `optional` but wraps the result in `Option`, defaulting to `None`.
pub fn maybe<'s, P>(
    parser: P,
) -> Optional<Map<P, fn(P::Output) -> Option<P::Output>>, Option<P::Output>>
where
    P: Parser<'s>,
    P::Output: Clone,
{
    Optional::new(Map::new(parser, Option::Some as fn(_) -> _), Option::None)
}
