use crate::error::{FailureData, ParseError};
use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Parser that succeeds on any single character.
pub struct AnyChar;

impl<'s> Parser<'s> for AnyChar {
    type Output = char;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, char> {
        match state.view(None).chars().next() {
            Option::Some(c) => Ok((c, state.advance(c.len_utf8()))),
            Option::None => Err(ParseError::new("expected a character", state.point())),
        }
    }

    fn label(&self) -> String {
        "any_char".to_string()
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that only succeeds at the end of the input, consuming nothing.
pub struct Eof;

impl<'s> Parser<'s> for Eof {
    type Output = ();

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, ()> {
        if state.at_end() {
            Ok(((), state))
        } else {
            Err(ParseError::new("expected end of input", state.point()))
        }
    }

    fn label(&self) -> String {
        "eof".to_string()
    }
}

/// Convenience function to create an Eof parser
pub fn eof() -> Eof {
    Eof
}

/// Parser that matches one specific character.
pub struct Char {
    expected: char,
}

impl<'s> Parser<'s> for Char {
    type Output = char;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, char> {
        match state.view(None).chars().next() {
            Option::Some(c) if c == self.expected => Ok((c, state.advance(c.len_utf8()))),
            _ => Err(ParseError::with_data(
                format!("expected character '{}'", self.expected),
                state.point(),
                FailureData::expecting(self.expected.to_string()),
            )),
        }
    }

    fn label(&self) -> String {
        format!("char({})", self.expected)
    }
}

/// Convenience function to create a Char parser
pub fn char(expected: char) -> Char {
    Char { expected }
}

/// Parser that matches any character in a given set.
pub struct CharIn {
    chars: String,
}

impl<'s> Parser<'s> for CharIn {
    type Output = char;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, char> {
        match state.view(None).chars().next() {
            Option::Some(c) if self.chars.contains(c) => Ok((c, state.advance(c.len_utf8()))),
            _ => Err(ParseError::with_data(
                format!("expected character in [{}]", self.chars),
                state.point(),
                FailureData::expecting(self.chars.clone()),
            )),
        }
    }

    fn label(&self) -> String {
        format!("char_in({})", self.chars)
    }
}

/// Convenience function to create a CharIn parser
pub fn char_in(chars: impl Into<String>) -> CharIn {
    CharIn {
        chars: chars.into(),
    }
}

/// Parser that matches any character NOT in a given set.
pub struct CharNotIn {
    chars: String,
}

impl<'s> Parser<'s> for CharNotIn {
    type Output = char;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, char> {
        match state.view(None).chars().next() {
            Option::Some(c) if !self.chars.contains(c) => Ok((c, state.advance(c.len_utf8()))),
            _ => Err(ParseError::with_data(
                format!("expected character not in [{}]", self.chars),
                state.point(),
                FailureData::expecting(format!("not in [{}]", self.chars)),
            )),
        }
    }

    fn label(&self) -> String {
        format!("char_not_in({})", self.chars)
    }
}

/// Convenience function to create a CharNotIn parser
pub fn char_not_in(chars: impl Into<String>) -> CharNotIn {
    CharNotIn {
        chars: chars.into(),
    }
}

/// Parser that matches a character satisfying a predicate. The
/// description names the expectation in failure messages.
pub struct CharSatisfies<F> {
    pred: F,
    description: String,
}

impl<'s, F> Parser<'s> for CharSatisfies<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, char> {
        match state.view(None).chars().next() {
            Option::Some(c) if (self.pred)(c) => Ok((c, state.advance(c.len_utf8()))),
            _ => Err(ParseError::new(
                format!("expected character satisfying {}", self.description),
                state.point(),
            )),
        }
    }

    fn label(&self) -> String {
        format!("char_satisfies({})", self.description)
    }
}

/// Convenience function to create a CharSatisfies parser
pub fn char_satisfies<F>(pred: F, description: impl Into<String>) -> CharSatisfies<F>
where
    F: Fn(char) -> bool,
{
    CharSatisfies {
        pred,
        description: description.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_any_char() {
        let (c, state) = parse("abc", &any_char()).unwrap();
        assert_eq!(c, 'a');
        assert_eq!(state.point(), 2);
        assert!(parse("", &any_char()).is_err());
    }

    #[test]
    fn test_eof() {
        assert!(parse("", &eof()).is_ok());
        let err = parse("a", &eof()).unwrap_err();
        assert_eq!(err.message, "expected end of input");
    }

    #[test]
    fn test_char_match() {
        let (c, _) = parse("10, 20, 30", &char('1')).unwrap();
        assert_eq!(c, '1');
    }

    #[test]
    fn test_char_mismatch_records_expectation() {
        let err = parse("x", &char('a')).unwrap_err();
        assert_eq!(err.pos, 1);
        assert_eq!(err.data.expected, vec!["a".to_string()]);
    }

    #[test]
    fn test_char_in() {
        let (c, _) = parse("xyz", &char_in("uax")).unwrap();
        assert_eq!(c, 'x');
        assert!(parse("q", &char_in("uax")).is_err());
    }

    #[test]
    fn test_char_not_in() {
        let (c, _) = parse("yxz", &char_not_in("uax")).unwrap();
        assert_eq!(c, 'y');
        assert!(parse("x", &char_not_in("uax")).is_err());
        assert!(parse("", &char_not_in("uax")).is_err());
    }

    #[test]
    fn test_char_satisfies() {
        let upper = char_satisfies(|c| c.is_uppercase(), "uppercase");
        let (c, _) = parse("A", &upper).unwrap();
        assert_eq!(c, 'A');
        let err = parse("a", &upper).unwrap_err();
        assert!(err.message.contains("uppercase"));
    }

    #[test]
    fn test_multibyte_char() {
        let (c, state) = parse("日本", &char('日')).unwrap();
        assert_eq!(c, '日');
        assert_eq!(state.view(None), "本");
    }
}
