use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Effectively infinite repetition bound.
pub const MANY_REPS: usize = usize::MAX;

/// Parser combinator that matches between `min` and `max` (inclusive)
/// occurrences of the given parser.
///
/// Succeeds once at least `min` repetitions have matched, stopping at
/// `max` or at the first failure. Fails, reporting the underlying
/// failure, when fewer than `min` matches occur.
pub struct Repeated<P> {
    parser: P,
    min: usize,
    max: usize,
}

impl<P> Repeated<P> {
    /// # Panics
    ///
    /// Panics when `min > max`. Malformed bounds are a programmer mistake
    /// in grammar assembly, not an input-dependent outcome.
    pub fn new(parser: P, min: usize, max: usize) -> Self {
        assert!(
            min <= max,
            "repeated parser requires minimum <= maximum (got {}..={})",
            min,
            max
        );
        Repeated { parser, min, max }
    }
}

impl<'s, P> Parser<'s> for Repeated<P>
where
    P: Parser<'s>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, Vec<P::Output>> {
        let origin = state;
        let mut state = state;
        let mut results = Vec::new();
        while results.len() < self.max {
            match self.parser.parse(state) {
                Ok((value, next_state)) => {
                    results.push(value);
                    state = next_state;
                }
                Err(err) => {
                    if results.len() < self.min {
                        return Err(ParseError::with_data(
                            format!(
                                "{} parsed fewer than minimum ({}) items: {}",
                                self.label(),
                                self.min,
                                err.message
                            ),
                            origin.point(),
                            err.data,
                        ));
                    }
                    break;
                }
            }
        }
        Ok((results, state))
    }

    fn label(&self) -> String {
        if self.max == MANY_REPS {
            format!("{}{{{},}}", self.parser.label(), self.min)
        } else {
            format!("{}{{{},{}}}", self.parser.label(), self.min, self.max)
        }
    }
}

/// Convenience function to create a Repeated parser
///
/// # Panics
///
/// Panics when `min > max`.
pub fn repeated<'s, P>(parser: P, min: usize, max: usize) -> Repeated<P>
where
    P: Parser<'s>,
{
    Repeated::new(parser, min, max)
}
