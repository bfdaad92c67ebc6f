use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Parser that always succeeds with a fixed value, consuming no input.
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<'s, T: Clone> Parser<'s> for Pure<T> {
    type Output = T;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, T> {
        Ok((self.value.clone(), state))
    }

    fn label(&self) -> String {
        "pure".to_string()
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_pure_succeeds_without_consuming() {
        let (value, state) = parse("abc", &pure(4)).unwrap();
        assert_eq!(value, 4);
        assert_eq!(state.point(), 1);
    }

    #[test]
    fn test_pure_on_empty_input() {
        let (value, state) = parse("", &pure("ok")).unwrap();
        assert_eq!(value, "ok");
        assert!(state.at_end());
    }
}
