//! A regular-expression compiler built on the combinators in this
//! crate: pattern text in, tree out.
//!
//! The dialect covers the constructs shared by the common regex
//! engines. The tree is the closed [`RegExp`] enum; [`to_pattern`]
//! renders a tree back to pattern text.

use thiserror::Error;

use crate::followed_by::followed_by;
use crate::lexical::char::eof;
use crate::parser::parse;

pub mod ast;
mod grammar;
pub mod printer;

pub use ast::{AssertionKind, EscapeClass, GroupKind, LookaroundKind, RegExp, RepeatKind};
pub use printer::to_pattern;

/// Failure to parse a pattern, with the 1-based position where parsing
/// gave up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("regex parsing failed at position {pos}: {message}")]
pub struct RegexpError {
    pub message: String,
    pub pos: usize,
}

/// Parse a pattern into a [`RegExp`] tree.
///
/// The whole pattern must parse: trailing text the grammar cannot
/// consume is an error, not a silently shorter tree.
pub fn parse_regexp(pattern: &str) -> Result<RegExp, RegexpError> {
    match parse(pattern, &followed_by(grammar::regexp_parser(), eof())) {
        Ok((tree, _)) => Ok(tree),
        Err(err) => Err(RegexpError {
            message: err.message,
            pos: err.pos,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_number_pattern() {
        let tree = parse_regexp("(?:-?[1-9][0-9]*|0)").unwrap();
        assert_eq!(
            tree,
            RegExp::Group {
                kind: GroupKind::Plain,
                child: Box::new(RegExp::Alternation(vec![
                    RegExp::Concat(vec![
                        RegExp::Repetition {
                            child: Box::new(RegExp::Literal("-".into())),
                            kind: RepeatKind::Optional,
                            lazy: false,
                        },
                        RegExp::CharClass {
                            chars: "1-9".into(),
                            complement: false,
                        },
                        RegExp::Repetition {
                            child: Box::new(RegExp::CharClass {
                                chars: "0-9".into(),
                                complement: false,
                            }),
                            kind: RepeatKind::Many,
                            lazy: false,
                        },
                    ]),
                    RegExp::Literal("0".into()),
                ])),
            }
        );
    }

    #[test]
    fn test_trailing_garbage_is_an_error() {
        let err = parse_regexp("a)").unwrap_err();
        assert_eq!(err.pos, 2);
    }

    #[test]
    fn test_empty_pattern_is_an_error() {
        assert!(parse_regexp("").is_err());
    }

    #[test]
    fn test_unclosed_group() {
        assert!(parse_regexp("(ab").is_err());
    }

    #[test]
    fn test_print_parse_round_trip() {
        for pattern in [
            "abc",
            "ab*c+",
            r"\w+@\w+",
            "(?:-?[1-9][0-9]*|0)",
            "(?P<name>[A-Za-z_]+)",
            r"^hello|goodbye$",
            "a|b|",
            "x{2,5}?y",
        ] {
            let tree = parse_regexp(pattern).unwrap();
            let printed = to_pattern(&tree);
            let reparsed = parse_regexp(&printed).unwrap();
            assert_eq!(reparsed, tree, "round trip changed {}", pattern);
        }
    }
}
