use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Parser combinator that runs three parsers in sequence and keeps only
/// the middle result. The usual shape is `between(open, body, close)` for
/// bracketed content.
pub struct Between<P, Q, R> {
    open: P,
    body: Q,
    close: R,
}

impl<P, Q, R> Between<P, Q, R> {
    pub fn new(open: P, body: Q, close: R) -> Self {
        Between { open, body, close }
    }
}

impl<'s, P, Q, R> Parser<'s> for Between<P, Q, R>
where
    P: Parser<'s>,
    Q: Parser<'s>,
    R: Parser<'s>,
{
    type Output = Q::Output;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, Self::Output> {
        let (_, state) = self.open.parse(state)?;
        let (value, state) = self.body.parse(state)?;
        let (_, state) = self.close.parse(state)?;
        Ok((value, state))
    }

    fn label(&self) -> String {
        format!(
            "between({}, {}, {})",
            self.open.label(),
            self.body.label(),
            self.close.label()
        )
    }
}

/// Convenience function to create a Between parser
pub fn between<'s, P, Q, R>(open: P, body: Q, close: R) -> Between<P, Q, R>
where
    P: Parser<'s>,
    Q: Parser<'s>,
    R: Parser<'s>,
{
    Between::new(open, body, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::char::char;
    use crate::lexical::string::sjoin;
    use crate::parser::{SharedExt, parse};

    #[test]
    fn test_between_brackets() {
        let parser = between(
            char('['),
            sjoin(
                vec![char('a').shared(), char('b').shared(), char('c').shared()],
                "",
            ),
            char(']'),
        );
        let (value, _) = parse("[abc]", &parser).unwrap();
        assert_eq!(value, "abc");
    }

    #[test]
    fn test_missing_close_fails() {
        let parser = between(char('('), char('x'), char(')'));
        let err = parse("(x]", &parser).unwrap_err();
        assert_eq!(err.pos, 3);
    }

    #[test]
    fn test_missing_open_fails() {
        let parser = between(char('('), char('x'), char(')'));
        let err = parse("x)", &parser).unwrap_err();
        assert_eq!(err.pos, 1);
    }
}
