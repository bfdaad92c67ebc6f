//! The regular-expression grammar, one production per function.
//!
//! Supports the constructs shared by the common regex dialects: literal
//! text, escaped metacharacters, special escapes (`\w` and friends),
//! character classes, zero-length assertions, groups (plain, capturing,
//! named), alternation, and the four repetition modifiers with their
//! lazy variants. Lookarounds have tree nodes but no production here.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::{AssertionKind, EscapeClass, GroupKind, RegExp, RepeatKind};
use crate::alts::{Alts, alts};
use crate::between::between;
use crate::fail::failure;
use crate::followed_by::followed_by;
use crate::follows::follows;
use crate::lazy::lazy;
use crate::lexical::char::{char, char_in};
use crate::lexical::number::natural_number;
use crate::lexical::regex::{Re, re_regex};
use crate::lexical::string::{string, strings};
use crate::map::{MapExt, fmap};
use crate::optional::{maybe, optional};
use crate::or::alt;
use crate::parser::{Parser, SharedExt, SharedParser};
use crate::pipe::PipeExt;
use crate::pure::pure;
use crate::seq::seq;
use crate::some::some;

// Characters that mean themselves, and the metacharacters that need
// escaping to do so.
static LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A(?:[^\]\[?*+.|^$(){}\\]+)").unwrap());
static METACHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A(?:[\]\[?*+.|^$(){}\\])").unwrap());
// Bracket body: an optional complementing '^', then an optional leading
// ']' (legal right after the opening bracket), then anything up to the
// closing bracket.
static CLASS_BODY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A(?:\^?\]?[^\]]+)").unwrap());
static NAMED_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A(?:\?P<([-A-Za-z_]+)>)").unwrap());

/// One or more `\\` pairs, each unescaping to a single backslash.
fn unescapes<'s>() -> impl Parser<'s, Output = RegExp> {
    fmap(some(string(r"\\")), |pairs| {
        RegExp::Literal("\\".repeat(pairs.len()))
    })
}

/// An escaped metacharacter, e.g. `\.` or `\[`, unescaped to itself.
fn escaped<'s>() -> impl Parser<'s, Output = RegExp> {
    follows(char('\\'), re_regex(METACHAR.clone())).map(|m| RegExp::Literal(m.to_string()))
}

/// A special escape sequence like `\w` or `\S`.
fn special<'s>() -> impl Parser<'s, Output = RegExp> {
    follows(char('\\'), char_in(EscapeClass::CODES)).pipe(|code| match EscapeClass::from_code(code)
    {
        Option::Some(class) => pure(RegExp::Escape(class)).shared(),
        Option::None => failure("unrecognized escape class").shared(),
    })
}

/// A zero-length assertion token: `^`, `$`, `\A`, `\Z`, `\b`, `\B`.
fn assertion<'s>() -> impl Parser<'s, Output = RegExp> {
    strings(&AssertionKind::TOKENS).pipe(|token| match AssertionKind::from_token(token) {
        Option::Some(kind) => pure(RegExp::Assertion(kind)).shared(),
        Option::None => failure("unrecognized zero-length assertion").shared(),
    })
}

/// A run of characters that mean themselves.
fn literal<'s>() -> impl Parser<'s, Output = RegExp> {
    re_regex(LITERAL.clone()).map(|text| RegExp::Literal(text.to_string()))
}

fn dot<'s>() -> impl Parser<'s, Output = RegExp> {
    char('.').to(RegExp::Dot)
}

/// A character class, `[...]` or complemented `[^...]`.
fn cclass<'s>() -> impl Parser<'s, Output = RegExp> {
    between(char('['), re_regex(CLASS_BODY.clone()), char(']')).map(RegExp::char_class)
}

/// The opening of a group, determining its kind: `(?:` for plain,
/// `(?P<name>` for named, bare `(` for capturing.
fn group_kind<'s>() -> impl Parser<'s, Output = GroupKind> {
    follows(
        char('('),
        optional(
            alts(vec![
                string("?:").to(GroupKind::Plain).shared(),
                Re::from_regex(NAMED_GROUP.clone(), 1)
                    .map(|name| GroupKind::Named(name.to_string()))
                    .shared(),
            ]),
            GroupKind::Capturing,
        ),
    )
}

/// A parenthesized group around a full regular expression. Recursion
/// into the whole grammar goes through `lazy`.
fn group<'s>() -> impl Parser<'s, Output = RegExp> {
    fmap(
        followed_by(seq(group_kind(), lazy(regexp_parser)), char(')')),
        |(kind, child)| RegExp::Group {
            child: Box::new(child),
            kind,
        },
    )
}

/// A `{m}` or `{m,n}` repetition range. An inverted range like `{5,2}`
/// fails the production rather than producing an unsatisfiable node.
fn repeat_range<'s>() -> impl Parser<'s, Output = RepeatKind> {
    between(
        char('{'),
        natural_number()
            .pipe(|min| seq(pure(min), optional(follows(char(','), natural_number()), min))),
        char('}'),
    )
    .pipe(|(min, max)| {
        if min <= max {
            pure(RepeatKind::Range { min, max }).shared()
        } else {
            failure(format!("invalid repetition range {{{},{}}}", min, max)).shared()
        }
    })
}

fn repeat_kind<'s>() -> Alts<'s, RepeatKind> {
    alts(vec![
        char('?').to(RepeatKind::Optional).shared(),
        char('*').to(RepeatKind::Many).shared(),
        char('+').to(RepeatKind::Some).shared(),
        repeat_range().shared(),
    ])
}

/// An optional repetition modifier with its optional lazy marker `?`.
fn modifier<'s>() -> impl Parser<'s, Output = Option<(RepeatKind, bool)>> {
    maybe(seq(repeat_kind(), maybe(char('?'))))
        .map(|m| m.map(|(kind, question)| (kind, question.is_some())))
}

/// Wrap a base node with a parsed repetition modifier.
///
/// A modifier binds to the last character of a multi-character literal:
/// `abc*` is `ab` then `c*`, not `(abc)*`.
fn wrap_modifier((basic, modifier): (RegExp, Option<(RepeatKind, bool)>)) -> RegExp {
    let Option::Some((kind, lazy)) = modifier else {
        return basic;
    };
    match basic {
        RegExp::Literal(text) if text.chars().count() > 1 => {
            let split = text.len() - text.chars().next_back().map_or(0, |c| c.len_utf8());
            let head = RegExp::Literal(text[..split].to_string());
            let tail = RegExp::repetition(RegExp::Literal(text[split..].to_string()), kind, lazy);
            RegExp::Concat(vec![head, tail])
        }
        basic => RegExp::repetition(basic, kind, lazy),
    }
}

/// A base node followed by an optional repetition modifier.
fn repetition<'s, P>(parser: P) -> impl Parser<'s, Output = RegExp>
where
    P: Parser<'s, Output = RegExp>,
{
    fmap(seq(parser, modifier()), wrap_modifier)
}

/// Regex components that can be distinguished by their prefix.
fn base<'s>() -> Alts<'s, RegExp> {
    alts(vec![
        repetition(unescapes()).shared(),
        repetition(special()).shared(),
        assertion().shared(),
        repetition(escaped()).shared(),
        repetition(dot()).shared(),
        repetition(literal()).shared(),
        repetition(cclass()).shared(),
        repetition(group()).shared(),
    ])
}

/// One term of the token stream `join` consumes: a parsed node or a
/// bare alternation bar.
enum Term {
    Node(RegExp),
    Bar,
}

fn term<'s>() -> impl Parser<'s, Output = Term> {
    alt(base().map(Term::Node), char('|').map(|_| Term::Bar))
}

/// Simplify a parsed term sequence into a single tree.
///
/// Filters out empty no-ops, merges consecutive literals into one, and
/// partitions on bars into an alternation. A bar with nothing on one
/// side contributes an empty-string literal, so `a|` has two branches.
fn join(terms: Vec<Term>) -> RegExp {
    let mut alternated: Vec<RegExp> = Vec::new();
    let mut concatenated: Vec<RegExp> = Vec::new();
    let mut last_literal: Option<String> = None;

    for term in terms {
        let node = match term {
            Term::Bar => {
                if let Some(text) = last_literal.take() {
                    concatenated.push(RegExp::Literal(text));
                }
                if concatenated.is_empty() {
                    alternated.push(RegExp::Literal(String::new()));
                } else {
                    alternated.push(RegExp::concat(std::mem::take(&mut concatenated)));
                }
                continue;
            }
            Term::Node(node) => node,
        };
        if node.is_empty_noop() {
            continue;
        }
        match node {
            RegExp::Literal(text) => {
                last_literal = Some(match last_literal.take() {
                    Some(mut merged) => {
                        merged.push_str(&text);
                        merged
                    }
                    None => text,
                });
            }
            node => {
                if let Some(text) = last_literal.take() {
                    concatenated.push(RegExp::Literal(text));
                }
                if let RegExp::Concat(children) = node {
                    concatenated.extend(children);
                } else {
                    concatenated.push(node);
                }
            }
        }
    }

    if let Some(text) = last_literal {
        concatenated.push(RegExp::Literal(text));
    }
    if concatenated.is_empty() {
        alternated.push(RegExp::Literal(String::new()));
    } else {
        alternated.push(RegExp::concat(concatenated));
    }

    if alternated.len() == 1 {
        alternated.swap_remove(0)
    } else {
        RegExp::Alternation(alternated)
    }
}

/// The full regular-expression grammar.
pub(crate) fn regexp_parser<'s>() -> SharedParser<'s, RegExp> {
    fmap(some(term()), join).shared()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn parsed(pattern: &str) -> RegExp {
        let (tree, _) = parse(pattern, &regexp_parser()).unwrap();
        tree
    }

    #[test]
    fn test_plain_literal() {
        assert_eq!(parsed("abc"), RegExp::Literal("abc".into()));
    }

    #[test]
    fn test_repetition_binds_last_character() {
        assert_eq!(
            parsed("ab*"),
            RegExp::Concat(vec![
                RegExp::Literal("a".into()),
                RegExp::Repetition {
                    child: Box::new(RegExp::Literal("b".into())),
                    kind: RepeatKind::Many,
                    lazy: false,
                },
            ])
        );
    }

    #[test]
    fn test_lazy_modifier() {
        assert_eq!(
            parsed("a+?"),
            RegExp::Repetition {
                child: Box::new(RegExp::Literal("a".into())),
                kind: RepeatKind::Some,
                lazy: true,
            }
        );
    }

    #[test]
    fn test_range_forms() {
        assert_eq!(
            parsed("a{3}"),
            RegExp::Repetition {
                child: Box::new(RegExp::Literal("a".into())),
                kind: RepeatKind::Range { min: 3, max: 3 },
                lazy: false,
            }
        );
        assert_eq!(
            parsed("a{2,5}"),
            RegExp::Repetition {
                child: Box::new(RegExp::Literal("a".into())),
                kind: RepeatKind::Range { min: 2, max: 5 },
                lazy: false,
            }
        );
    }

    #[test]
    fn test_inverted_range_fails_to_parse() {
        // {5,2} is rejected by the range production; the brace text then
        // matches nothing else, so the whole parse stops before it.
        let (tree, state) = parse("a{5,2}", &regexp_parser()).unwrap();
        assert_eq!(tree, RegExp::Literal("a".into()));
        assert_eq!(state.view(None), "{5,2}");
    }

    #[test]
    fn test_dot_is_a_node() {
        assert_eq!(
            parsed("a.c"),
            RegExp::Concat(vec![
                RegExp::Literal("a".into()),
                RegExp::Dot,
                RegExp::Literal("c".into()),
            ])
        );
    }

    #[test]
    fn test_escaped_metacharacter_is_literal() {
        assert_eq!(parsed(r"a\.c"), RegExp::Literal("a.c".into()));
    }

    #[test]
    fn test_double_backslash_unescapes() {
        assert_eq!(parsed(r"\\"), RegExp::Literal("\\".into()));
        assert_eq!(parsed(r"\\\\"), RegExp::Literal("\\\\".into()));
    }

    #[test]
    fn test_special_escape() {
        assert_eq!(
            parsed(r"\w+"),
            RegExp::Repetition {
                child: Box::new(RegExp::Escape(EscapeClass::Word)),
                kind: RepeatKind::Some,
                lazy: false,
            }
        );
    }

    #[test]
    fn test_assertions() {
        assert_eq!(
            parsed(r"^a$"),
            RegExp::Concat(vec![
                RegExp::Assertion(AssertionKind::Bol),
                RegExp::Literal("a".into()),
                RegExp::Assertion(AssertionKind::Eol),
            ])
        );
        assert_eq!(parsed(r"\b"), RegExp::Assertion(AssertionKind::WordBoundary));
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(
            parsed("[abc]"),
            RegExp::CharClass {
                chars: "abc".into(),
                complement: false,
            }
        );
        assert_eq!(
            parsed("[^a-z]"),
            RegExp::CharClass {
                chars: "a-z".into(),
                complement: true,
            }
        );
    }

    #[test]
    fn test_group_kinds() {
        assert_eq!(
            parsed("(a)"),
            RegExp::Group {
                child: Box::new(RegExp::Literal("a".into())),
                kind: GroupKind::Capturing,
            }
        );
        assert_eq!(
            parsed("(?:a)"),
            RegExp::Group {
                child: Box::new(RegExp::Literal("a".into())),
                kind: GroupKind::Plain,
            }
        );
        assert_eq!(
            parsed("(?P<word>a+)"),
            RegExp::Group {
                child: Box::new(RegExp::Repetition {
                    child: Box::new(RegExp::Literal("a".into())),
                    kind: RepeatKind::Some,
                    lazy: false,
                }),
                kind: GroupKind::Named("word".into()),
            }
        );
    }

    #[test]
    fn test_alternation_with_empty_branch() {
        assert_eq!(
            parsed("a|b|"),
            RegExp::Alternation(vec![
                RegExp::Literal("a".into()),
                RegExp::Literal("b".into()),
                RegExp::Literal("".into()),
            ])
        );
    }

    #[test]
    fn test_consecutive_literals_merge() {
        // Escapes interleaved with plain text still produce one literal.
        assert_eq!(parsed(r"a\+b"), RegExp::Literal("a+b".into()));
    }
}
