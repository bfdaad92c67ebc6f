//! Render a regular-expression tree back to pattern text.
//!
//! Printing is the inverse of parsing for grammar-produced trees:
//! parsing the printed form of such a tree yields a structurally equal
//! tree. Hand-built trees outside the grammar's image (say, a
//! multi-character literal under a repetition) may print ambiguously.

use super::ast::{GroupKind, LookaroundKind, RegExp, RepeatKind};

const METACHARS: &str = r"][?*+.|^$(){}\";

/// Escape literal text so each character means itself.
fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if METACHARS.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn repeat_suffix(kind: &RepeatKind, lazy: bool) -> String {
    let mut suffix = match kind {
        RepeatKind::Optional => "?".to_string(),
        RepeatKind::Many => "*".to_string(),
        RepeatKind::Some => "+".to_string(),
        RepeatKind::Range { min, max } if min == max => format!("{{{}}}", min),
        RepeatKind::Range { min, max } => format!("{{{},{}}}", min, max),
    };
    if lazy {
        suffix.push('?');
    }
    suffix
}

/// Render a tree to an equivalent pattern string.
pub fn to_pattern(tree: &RegExp) -> String {
    match tree {
        RegExp::Literal(text) => escape_literal(text),
        RegExp::NoOp(None) => String::new(),
        RegExp::NoOp(Some(comment)) => format!("(?#{})", comment),
        RegExp::Dot => ".".to_string(),
        RegExp::Escape(class) => format!("\\{}", class.code()),
        RegExp::CharClass { chars, complement } => {
            if *complement {
                format!("[^{}]", chars)
            } else {
                format!("[{}]", chars)
            }
        }
        RegExp::Assertion(kind) => kind.token().to_string(),
        RegExp::Concat(children) => children.iter().map(to_pattern).collect(),
        RegExp::Group { child, kind } => {
            let opening = match kind {
                GroupKind::Plain => "(?:".to_string(),
                GroupKind::Capturing => "(".to_string(),
                GroupKind::Named(name) => format!("(?P<{}>", name),
            };
            format!("{}{})", opening, to_pattern(child))
        }
        RegExp::Alternation(children) => {
            let branches: Vec<String> = children.iter().map(to_pattern).collect();
            branches.join("|")
        }
        RegExp::Repetition { child, kind, lazy } => {
            format!("{}{}", to_pattern(child), repeat_suffix(kind, *lazy))
        }
        RegExp::Lookaround { child, kind } => {
            let opening = match kind {
                LookaroundKind::PositiveAhead => "(?=",
                LookaroundKind::NegativeAhead => "(?!",
                LookaroundKind::PositiveBehind => "(?<=",
                LookaroundKind::NegativeBehind => "(?<!",
            };
            format!("{}{})", opening, to_pattern(child))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::ast::EscapeClass;
    use super::*;

    #[test]
    fn test_literal_escapes_metacharacters() {
        let tree = RegExp::Literal("a+b.c".into());
        assert_eq!(to_pattern(&tree), r"a\+b\.c");
    }

    #[test]
    fn test_repeat_suffixes() {
        let child = Box::new(RegExp::Literal("a".into()));
        let tree = RegExp::Repetition {
            child: child.clone(),
            kind: RepeatKind::Range { min: 2, max: 5 },
            lazy: false,
        };
        assert_eq!(to_pattern(&tree), "a{2,5}");
        let tree = RegExp::Repetition {
            child,
            kind: RepeatKind::Range { min: 3, max: 3 },
            lazy: true,
        };
        assert_eq!(to_pattern(&tree), "a{3}?");
    }

    #[test]
    fn test_group_and_alternation() {
        let tree = RegExp::Group {
            child: Box::new(RegExp::Alternation(vec![
                RegExp::Literal("a".into()),
                RegExp::Escape(EscapeClass::Digit),
            ])),
            kind: GroupKind::Named("v".into()),
        };
        assert_eq!(to_pattern(&tree), r"(?P<v>a|\d)");
    }

    #[test]
    fn test_lookaround_prints_even_without_a_production() {
        let tree = RegExp::Lookaround {
            child: Box::new(RegExp::Literal("a".into())),
            kind: LookaroundKind::NegativeBehind,
        };
        assert_eq!(to_pattern(&tree), "(?<!a)");
    }
}
