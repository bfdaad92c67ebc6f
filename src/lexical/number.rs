use crate::error::ParseError;
use crate::lexical::regex::{Re, re_regex};
use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;
use once_cell::sync::Lazy;
use regex::Regex;

static NATURAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A(?:[1-9][0-9]*|0)").unwrap());
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A(?:-?[1-9][0-9]*|0)").unwrap());

/// Parser that matches a non-negative decimal integer.
///
/// No leading zeros: `0` matches but `007` matches only the first zero.
pub struct Natural {
    digits: Re,
}

impl<'s> Parser<'s> for Natural {
    type Output = u64;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, u64> {
        let (matched, next_state) = self.digits.parse(state)?;
        match matched.parse::<u64>() {
            Ok(value) => Ok((value, next_state)),
            Err(_) => Err(ParseError::new(
                format!("number {} out of range", matched),
                state.point(),
            )),
        }
    }

    fn label(&self) -> String {
        "natural_number".to_string()
    }
}

/// Convenience function to create a Natural parser
pub fn natural_number() -> Natural {
    Natural {
        digits: re_regex(NATURAL.clone()),
    }
}

/// Parser that matches a signed decimal integer.
pub struct Int {
    digits: Re,
}

impl<'s> Parser<'s> for Int {
    type Output = i64;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, i64> {
        let (matched, next_state) = self.digits.parse(state)?;
        match matched.parse::<i64>() {
            Ok(value) => Ok((value, next_state)),
            Err(_) => Err(ParseError::new(
                format!("number {} out of range", matched),
                state.point(),
            )),
        }
    }

    fn label(&self) -> String {
        "integer".to_string()
    }
}

/// Convenience function to create an Int parser
pub fn integer() -> Int {
    Int {
        digits: re_regex(INTEGER.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_natural() {
        let (value, _) = parse("100.", &natural_number()).unwrap();
        assert_eq!(value, 100);
        let (value, _) = parse("0", &natural_number()).unwrap();
        assert_eq!(value, 0);
    }

    #[test]
    fn test_natural_rejects_sign() {
        assert!(parse("-5", &natural_number()).is_err());
    }

    #[test]
    fn test_no_leading_zeros() {
        let (value, state) = parse("007", &natural_number()).unwrap();
        assert_eq!(value, 0);
        assert_eq!(state.view(None), "07");
    }

    #[test]
    fn test_integer_signs() {
        let (value, _) = parse("100", &integer()).unwrap();
        assert_eq!(value, 100);
        let (value, _) = parse("-100.", &integer()).unwrap();
        assert_eq!(value, -100);
    }

    #[test]
    fn test_out_of_range() {
        let err = parse("99999999999999999999999", &natural_number()).unwrap_err();
        assert!(err.message.contains("out of range"));
    }
}
