use crate::lexical::regex::{Re, re_regex};
use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;
use once_cell::sync::Lazy;
use regex::Regex;

static BOOLEAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A(?i:true|false|yes|no|0|1)").unwrap());

/// Parser that matches a boolean in any common spelling:
/// `true`/`false`, `yes`/`no`, `1`/`0`, case-insensitive.
pub struct Boolean {
    word: Re,
}

impl<'s> Parser<'s> for Boolean {
    type Output = bool;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, bool> {
        let (matched, next_state) = self.word.parse(state)?;
        let truthy = matches!(
            matched.chars().next().map(|c| c.to_ascii_lowercase()),
            Some('t') | Some('y') | Some('1')
        );
        Ok((truthy, next_state))
    }

    fn label(&self) -> String {
        "boolean".to_string()
    }
}

/// Convenience function to create a Boolean parser
pub fn boolean() -> Boolean {
    Boolean {
        word: re_regex(BOOLEAN.clone()),
    }
}
