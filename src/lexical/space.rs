use crate::error::ParseError;
use crate::lexical::char::{CharSatisfies, char_satisfies};
use crate::lexical::regex::{Re, re_regex};
use crate::map::fmap;
use crate::parser::{ParseResult, Parser};
use crate::some::some;
use crate::state::ParseState;
use once_cell::sync::Lazy;
use regex::Regex;

const VERTICAL: &str = "\n\x0B\x0C\r\u{2028}\u{2029}";

fn span_of<'s>(state: ParseState<'s>, pred: impl Fn(char) -> bool) -> Option<(&'s str, usize)> {
    let rest = state.view(None);
    let end = rest
        .char_indices()
        .find(|(_, c)| !pred(*c))
        .map_or(rest.len(), |(idx, _)| idx);
    if end == 0 {
        None
    } else {
        Some((&rest[..end], end))
    }
}

/// Parser that matches a run of one or more whitespace characters.
pub struct Space;

impl<'s> Parser<'s> for Space {
    type Output = &'s str;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, &'s str> {
        match span_of(state, char::is_whitespace) {
            Some((matched, len)) => Ok((matched, state.advance(len))),
            None => Err(ParseError::new("expected whitespace", state.point())),
        }
    }

    fn label(&self) -> String {
        "whitespace".to_string()
    }
}

/// Convenience function to create a Space parser
pub fn space() -> Space {
    Space
}

/// Parser that matches a run of horizontal whitespace (no newlines).
pub struct HSpace;

impl<'s> Parser<'s> for HSpace {
    type Output = &'s str;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, &'s str> {
        match span_of(state, |c| c.is_whitespace() && !VERTICAL.contains(c)) {
            Some((matched, len)) => Ok((matched, state.advance(len))),
            None => Err(ParseError::new("expected horizontal space", state.point())),
        }
    }

    fn label(&self) -> String {
        "horizontal-space".to_string()
    }
}

/// Convenience function to create an HSpace parser
pub fn hspace() -> HSpace {
    HSpace
}

/// Parser that matches a run of vertical whitespace.
pub struct VSpace;

impl<'s> Parser<'s> for VSpace {
    type Output = &'s str;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, &'s str> {
        match span_of(state, |c| VERTICAL.contains(c)) {
            Some((matched, len)) => Ok((matched, state.advance(len))),
            None => Err(ParseError::new("expected vertical space", state.point())),
        }
    }

    fn label(&self) -> String {
        "vertical-space".to_string()
    }
}

/// Convenience function to create a VSpace parser
pub fn vspace() -> VSpace {
    VSpace
}

static NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A(?:\r?\n)").unwrap());

/// Parser that matches a single newline, with or without carriage return.
pub fn newline() -> Re {
    re_regex(NEWLINE.clone())
}

/// Parser that matches one alphabetic character.
pub fn letter() -> CharSatisfies<fn(char) -> bool> {
    char_satisfies(char::is_alphabetic, "letter")
}

/// Parser that matches one or more alphabetic characters as a string.
pub fn letters<'s>() -> impl Parser<'s, Output = String> {
    fmap(some(letter()), |cs| cs.into_iter().collect())
}

/// Parser that matches one decimal digit.
pub fn digit() -> CharSatisfies<fn(char) -> bool> {
    char_satisfies(|c| c.is_ascii_digit(), "digit")
}

/// Parser that matches one or more decimal digits as a string.
pub fn digits<'s>() -> impl Parser<'s, Output = String> {
    fmap(some(digit()), |cs| cs.into_iter().collect())
}
