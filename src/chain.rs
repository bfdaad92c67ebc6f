use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, SharedParser};
use crate::state::ParseState;

/// Parser combinator that runs a list of parsers in sequence, collecting
/// every result in order. Fails fast at the first failing sub-parser,
/// reporting which one failed and where.
pub struct Chain<'s, T> {
    parsers: Vec<SharedParser<'s, T>>,
}

impl<'s, T> Chain<'s, T> {
    pub fn new(parsers: Vec<SharedParser<'s, T>>) -> Self {
        Chain { parsers }
    }
}

impl<'s, T> Parser<'s> for Chain<'s, T> {
    type Output = Vec<T>;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, Vec<T>> {
        let mut results = Vec::with_capacity(self.parsers.len());
        let mut state = state;
        for parser in &self.parsers {
            match parser.parse(state) {
                Ok((value, next_state)) => {
                    results.push(value);
                    state = next_state;
                }
                Err(err) => {
                    return Err(ParseError::with_data(
                        format!("chained parser {} failed: {}", parser.label(), err.message),
                        err.pos,
                        err.data,
                    ));
                }
            }
        }
        Ok((results, state))
    }

    fn label(&self) -> String {
        let labels: Vec<String> = self.parsers.iter().map(|p| p.label()).collect();
        format!("chain({})", labels.join(", "))
    }
}

/// Convenience function to create a Chain parser
pub fn chain<'s, T>(parsers: Vec<SharedParser<'s, T>>) -> Chain<'s, T> {
    Chain::new(parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::char::char;
    use crate::parser::{SharedExt, parse};

    #[test]
    fn test_chain_collects_in_order() {
        let parser = chain(vec![
            char('a').shared(),
            char('b').shared(),
            char('c').shared(),
        ]);
        let (values, state) = parse("abcd", &parser).unwrap();
        assert_eq!(values, vec!['a', 'b', 'c']);
        assert_eq!(state.view(None), "d");
    }

    #[test]
    fn test_chain_fails_fast_with_position() {
        let parser = chain(vec![
            char('a').shared(),
            char('b').shared(),
            char('c').shared(),
        ]);
        let err = parse("abx", &parser).unwrap_err();
        assert_eq!(err.pos, 3);
        assert!(err.message.contains("chained parser"));
    }

    #[test]
    fn test_empty_chain_succeeds() {
        let parser = chain::<char>(vec![]);
        let (values, state) = parse("abc", &parser).unwrap();
        assert!(values.is_empty());
        assert_eq!(state.point(), 1);
    }
}
