use crate::error::{FailureData, ParseError};
use crate::followed_by::FollowedBy;
use crate::lexical::space::{Space, space};
use crate::parser::{ParseResult, Parser, SharedParser};
use crate::state::ParseState;
use std::fmt::Display;

/// Parser that matches a literal string, optionally after transforming
/// the candidate input (this is how case-insensitive matching works).
/// The parsed value is the input as it appeared, not the expectation.
pub struct Str<F> {
    expected: String,
    transform: F,
}

impl<'s, F> Parser<'s> for Str<F>
where
    F: Fn(&str) -> String,
{
    type Output = &'s str;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, &'s str> {
        let n = self.expected.chars().count();
        match state.require(n) {
            Ok(input) if (self.transform)(input) == self.expected => {
                Ok((input, state.advance(input.len())))
            }
            _ => Err(ParseError::with_data(
                format!("expected string {:?}", self.expected),
                state.point(),
                FailureData::expecting(self.expected.clone()),
            )),
        }
    }

    fn label(&self) -> String {
        format!("string({})", self.expected)
    }
}

/// Parser that matches a specific string exactly.
pub fn string(expected: impl Into<String>) -> Str<fn(&str) -> String> {
    string_with(expected, str::to_string)
}

/// Parser that matches a string after transforming the candidate input.
/// E.g. a lowercase expectation with a lowercasing transform gives
/// case-insensitive matching.
pub fn string_with<F>(expected: impl Into<String>, transform: F) -> Str<F>
where
    F: Fn(&str) -> String,
{
    Str {
        expected: expected.into(),
        transform,
    }
}

/// Parser like `string` but case-insensitive.
pub fn istring(expected: impl Into<String>) -> Str<fn(&str) -> String> {
    string_with(expected.into().to_lowercase(), str::to_lowercase)
}

/// Parser that matches a string followed by (and discarding) whitespace,
/// a lexer convenience.
pub fn symbol(expected: impl Into<String>) -> FollowedBy<Str<fn(&str) -> String>, Space> {
    symbol_with(expected, space())
}

/// Like `symbol` but with an explicit notion of trailing space.
pub fn symbol_with<'s, P>(
    expected: impl Into<String>,
    spacep: P,
) -> FollowedBy<Str<fn(&str) -> String>, P>
where
    P: Parser<'s>,
{
    FollowedBy::new(string(expected), spacep)
}

/// Parser that matches any string from a fixed set, longest first, so a
/// prefix never shadows a longer match.
pub struct StringIn {
    choices: Vec<String>,
}

impl StringIn {
    pub fn new(choices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        choices.sort_by_key(|s| std::cmp::Reverse(s.len()));
        StringIn { choices }
    }
}

impl<'s> Parser<'s> for StringIn {
    type Output = &'s str;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, &'s str> {
        let rest = state.view(None);
        for choice in &self.choices {
            if rest.starts_with(choice.as_str()) {
                let matched = &rest[..choice.len()];
                return Ok((matched, state.advance(matched.len())));
            }
        }
        Err(ParseError::with_data(
            format!("expected one of {}", self.choices.join(", ")),
            state.point(),
            FailureData {
                expected: self.choices.clone(),
                failure_positions: Vec::new(),
            },
        ))
    }

    fn label(&self) -> String {
        format!("string_in({})", self.choices.join(", "))
    }
}

/// Convenience function to create a StringIn parser
pub fn string_in(choices: impl IntoIterator<Item = impl Into<String>>) -> StringIn {
    StringIn::new(choices)
}

/// Parser like `string_in` over a slice of literals.
pub fn strings(choices: &[&str]) -> StringIn {
    StringIn::new(choices.iter().copied())
}

/// Parser that runs string-producing parsers in succession, joining the
/// results with a separator.
pub struct Sjoin<'s, T> {
    parsers: Vec<SharedParser<'s, T>>,
    sep: String,
}

impl<'s, T: Display> Parser<'s> for Sjoin<'s, T> {
    type Output = String;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, String> {
        let mut pieces = Vec::with_capacity(self.parsers.len());
        let mut state = state;
        for parser in &self.parsers {
            match parser.parse(state) {
                Ok((value, next_state)) => {
                    pieces.push(value.to_string());
                    state = next_state;
                }
                Err(err) => {
                    return Err(ParseError::with_data(
                        format!("in sjoin, {} failed: {}", parser.label(), err.message),
                        err.pos,
                        err.data,
                    ));
                }
            }
        }
        Ok((pieces.join(&self.sep), state))
    }

    fn label(&self) -> String {
        let labels: Vec<String> = self.parsers.iter().map(|p| p.label()).collect();
        format!("sjoin({})", labels.join(", "))
    }
}

/// Convenience function to create an Sjoin parser
pub fn sjoin<'s, T: Display>(
    parsers: Vec<SharedParser<'s, T>>,
    sep: impl Into<String>,
) -> Sjoin<'s, T> {
    Sjoin {
        parsers,
        sep: sep.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::char::char;
    use crate::parser::{SharedExt, parse};

    #[test]
    fn test_string_exact() {
        let (value, state) = parse("abc def", &string("abc")).unwrap();
        assert_eq!(value, "abc");
        assert_eq!(state.view(None), " def");
    }

    #[test]
    fn test_string_mismatch() {
        let err = parse("abd", &string("abc")).unwrap_err();
        assert_eq!(err.pos, 1);
        assert_eq!(err.data.expected, vec!["abc".to_string()]);
    }

    #[test]
    fn test_string_insufficient_input() {
        assert!(parse("ab", &string("abc")).is_err());
    }

    #[test]
    fn test_istring_returns_input_spelling() {
        let (value, _) = parse("aBc", &istring("abc")).unwrap();
        assert_eq!(value, "aBc");
    }

    #[test]
    fn test_symbol_discards_trailing_space() {
        let (value, state) = parse("let   x", &symbol("let")).unwrap();
        assert_eq!(value, "let");
        assert_eq!(state.view(None), "x");
    }

    #[test]
    fn test_string_in_longest_match_first() {
        let parser = string_in(["b", "bb", "a"]);
        let (value, _) = parse("bbb", &parser).unwrap();
        assert_eq!(value, "bb");
    }

    #[test]
    fn test_strings_matches_any() {
        let (value, _) = parse("bar", &strings(&["foo", "bar", "zap"])).unwrap();
        assert_eq!(value, "bar");
        let err = parse("qux", &strings(&["foo", "bar"])).unwrap_err();
        assert!(err.message.contains("expected one of"));
    }

    #[test]
    fn test_sjoin_concatenates() {
        let parser = sjoin(
            vec![char('a').shared(), char('b').shared(), char('c').shared()],
            "",
        );
        let (value, _) = parse("abc", &parser).unwrap();
        assert_eq!(value, "abc");
    }

    #[test]
    fn test_sjoin_with_separator() {
        let parser = sjoin(vec![char('x').shared(), char('y').shared()], "-");
        let (value, _) = parse("xy", &parser).unwrap();
        assert_eq!(value, "x-y");
    }

    #[test]
    fn test_sjoin_failure_names_culprit() {
        let parser = sjoin(vec![char('a').shared(), char('b').shared()], "");
        let err = parse("ax", &parser).unwrap_err();
        assert_eq!(err.pos, 2);
        assert!(err.message.contains("in sjoin"));
    }
}
