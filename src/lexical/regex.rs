use crate::error::{FailureData, ParseError};
use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;
use regex::Regex;

/// Parser that matches a regular expression anchored at the current
/// position, advancing by the full matched length.
///
/// The parsed value is the whole match, or the chosen capture group.
/// Flags go inline in the pattern (e.g. `(?i)` for case-insensitivity).
pub struct Re {
    regex: Regex,
    pattern: String,
    group: usize,
}

impl Re {
    /// Build from an already-compiled regex. The pattern should anchor
    /// itself or rely on `re`/`re_group` which anchor for you.
    pub fn from_regex(regex: Regex, group: usize) -> Self {
        let pattern = regex.as_str().to_string();
        Re {
            regex,
            pattern,
            group,
        }
    }
}

impl<'s> Parser<'s> for Re {
    type Output = &'s str;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, &'s str> {
        let rest = state.view(None);
        let failure = || {
            ParseError::with_data(
                format!("expected match of regex /{}/", self.pattern),
                state.point(),
                FailureData::expecting(format!("/{}/", self.pattern)),
            )
        };
        if self.group == 0 {
            match self.regex.find(rest) {
                Option::Some(m) => Ok((m.as_str(), state.advance(m.end()))),
                Option::None => Err(failure()),
            }
        } else {
            match self.regex.captures(rest) {
                Option::Some(caps) => {
                    let whole_len = caps.get(0).map_or(0, |m| m.end());
                    match caps.get(self.group) {
                        Option::Some(m) => Ok((m.as_str(), state.advance(whole_len))),
                        Option::None => Err(failure()),
                    }
                }
                Option::None => Err(failure()),
            }
        }
    }

    fn label(&self) -> String {
        format!("regex(/{}/[{}])", self.pattern, self.group)
    }
}

fn anchored(pattern: &str) -> String {
    // A leading '^' is redundant with our anchoring; drop it.
    let pattern = pattern.strip_prefix('^').unwrap_or(pattern);
    format!(r"\A(?:{})", pattern)
}

/// Parser matching `pattern` at the current position.
///
/// # Panics
///
/// Panics when the pattern does not compile: an invalid pattern is a
/// programmer mistake in grammar assembly, caught at construction time.
pub fn re(pattern: &str) -> Re {
    re_group(pattern, 0)
}

/// Like `re`, but the parsed value is the given capture group.
///
/// # Panics
///
/// Panics when the pattern does not compile.
pub fn re_group(pattern: &str, group: usize) -> Re {
    let regex = match Regex::new(&anchored(pattern)) {
        Ok(regex) => regex,
        Err(err) => panic!("invalid regex pattern /{}/: {}", pattern, err),
    };
    Re {
        regex,
        pattern: pattern.to_string(),
        group,
    }
}

/// Build a parser from a pre-compiled regex (compile once, reuse in
/// grammars). The regex must already be anchored (see `anchored`
/// patterns built by `re`).
pub fn re_regex(regex: Regex) -> Re {
    Re::from_regex(regex, 0)
}
