use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;
use std::marker::PhantomData;

/// Parser that always fails at the current position with a fixed reason.
pub struct Fail<T> {
    reason: String,
    _marker: PhantomData<T>,
}

impl<T> Fail<T> {
    pub fn new(reason: impl Into<String>) -> Self {
        Fail {
            reason: reason.into(),
            _marker: PhantomData,
        }
    }
}

impl<'s, T> Parser<'s> for Fail<T> {
    type Output = T;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, T> {
        Err(ParseError::new(self.reason.clone(), state.point()))
    }

    fn label(&self) -> String {
        format!("fails({})", self.reason)
    }
}

/// Parser that fails with the stated reason.
pub fn failure<T>(reason: impl Into<String>) -> Fail<T> {
    Fail::new(reason)
}

/// Parser that always fails.
pub fn void<T>() -> Fail<T> {
    Fail::new("void parser")
}
