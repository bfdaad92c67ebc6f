use crate::error::{FailureData, ParseError};
use crate::parser::{ParseResult, Parser, SharedParser};
use crate::state::ParseState;

/// Parser combinator that tries alternatives in order until one succeeds,
/// all against the same original state. First match wins.
///
/// When every alternative fails, the aggregate failure carries the single
/// furthest failure's message and position, plus the positions reached by
/// every attempt.
pub struct Alts<'s, T> {
    parsers: Vec<SharedParser<'s, T>>,
}

impl<'s, T> Alts<'s, T> {
    pub fn new(parsers: Vec<SharedParser<'s, T>>) -> Self {
        Alts { parsers }
    }
}

impl<'s, T> Parser<'s> for Alts<'s, T> {
    type Output = T;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, T> {
        let mut farthest = state.point();
        let mut message = String::new();
        let mut data = FailureData::default();
        let mut positions = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            match parser.parse(state) {
                Ok(success) => return Ok(success),
                Err(err) => {
                    if err.pos > farthest {
                        farthest = err.pos;
                        message = err.message;
                        data = err.data;
                    }
                    positions.push(err.pos);
                }
            }
        }

        let all_positions = FailureData {
            expected: Vec::new(),
            failure_positions: positions,
        };
        Err(ParseError::with_data(
            format!("all alternatives failed: {}", message),
            farthest,
            data.merge(all_positions),
        ))
    }

    fn label(&self) -> String {
        let labels: Vec<String> = self.parsers.iter().map(|p| p.label()).collect();
        format!("alts({})", labels.join(", "))
    }
}

/// Convenience function to create an Alts parser
pub fn alts<'s, T>(parsers: Vec<SharedParser<'s, T>>) -> Alts<'s, T> {
    Alts::new(parsers)
}
