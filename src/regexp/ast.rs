//! Tree representation of a parsed regular expression.
//!
//! Every node is a variant of the closed `RegExp` enum: the node set is
//! fixed and enumerable, so consumers pattern-match exhaustively instead
//! of downcasting. Trees are built bottom-up by the grammar and are
//! immutable once constructed.

/// A special escape sequence like `\w` or `\D`.
///
/// The set is closed; escapes taking arguments (`\p{...}`, `\u{...}`)
/// are unsupported and unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeClass {
    Word,
    NonWord,
    Digit,
    NonDigit,
    Space,
    NonSpace,
}

impl EscapeClass {
    pub const CODES: &'static str = "wWdDsS";

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'w' => Some(EscapeClass::Word),
            'W' => Some(EscapeClass::NonWord),
            'd' => Some(EscapeClass::Digit),
            'D' => Some(EscapeClass::NonDigit),
            's' => Some(EscapeClass::Space),
            'S' => Some(EscapeClass::NonSpace),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            EscapeClass::Word => 'w',
            EscapeClass::NonWord => 'W',
            EscapeClass::Digit => 'd',
            EscapeClass::NonDigit => 'D',
            EscapeClass::Space => 's',
            EscapeClass::NonSpace => 'S',
        }
    }
}

/// A zero-length assertion without arguments (lookarounds excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertionKind {
    Bol,
    Eol,
    BegString,
    EndString,
    WordBoundary,
    NonWordBoundary,
}

impl AssertionKind {
    pub const TOKENS: [&'static str; 6] = ["^", "$", r"\A", r"\Z", r"\b", r"\B"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "^" => Some(AssertionKind::Bol),
            "$" => Some(AssertionKind::Eol),
            r"\A" => Some(AssertionKind::BegString),
            r"\Z" => Some(AssertionKind::EndString),
            r"\b" => Some(AssertionKind::WordBoundary),
            r"\B" => Some(AssertionKind::NonWordBoundary),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            AssertionKind::Bol => "^",
            AssertionKind::Eol => "$",
            AssertionKind::BegString => r"\A",
            AssertionKind::EndString => r"\Z",
            AssertionKind::WordBoundary => r"\b",
            AssertionKind::NonWordBoundary => r"\B",
        }
    }
}

/// How a group captures: `(...)`, `(?:...)`, or `(?P<name>...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKind {
    Plain,
    Capturing,
    Named(String),
}

/// Repetition shape: `?`, `*`, `+`, or a `{m}`/`{m,n}` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatKind {
    Optional,
    Many,
    Some,
    Range { min: u64, max: u64 },
}

/// Lookaround flavor. Constructible, but no grammar production reaches
/// it: the surface syntax is unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookaroundKind {
    PositiveAhead,
    NegativeAhead,
    PositiveBehind,
    NegativeBehind,
}

/// A node in a compiled regular-expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegExp {
    /// Literal text, metacharacters already unescaped.
    Literal(String),
    /// A no-op, with an optional comment.
    NoOp(Option<String>),
    /// The `.` metacharacter.
    Dot,
    /// A special escape sequence like `\w`.
    Escape(EscapeClass),
    /// A character class, body kept as raw text with the leading `^`
    /// stripped into the complement flag.
    CharClass { chars: String, complement: bool },
    /// A zero-length assertion like `^` or `\b`.
    Assertion(AssertionKind),
    /// Concatenation of two or more nodes.
    Concat(Vec<RegExp>),
    /// A parenthesized subpattern.
    Group { child: Box<RegExp>, kind: GroupKind },
    /// Alternation between two or more nodes.
    Alternation(Vec<RegExp>),
    /// Repetition of a node, eager or lazy.
    Repetition {
        child: Box<RegExp>,
        kind: RepeatKind,
        lazy: bool,
    },
    /// A lookaround assertion. Not reachable from the grammar.
    Lookaround {
        child: Box<RegExp>,
        kind: LookaroundKind,
    },
}

impl RegExp {
    /// Build a character class from the raw bracket body, deriving the
    /// complement flag from a leading `^`.
    pub fn char_class(body: &str) -> RegExp {
        match body.strip_prefix('^') {
            Some(rest) => RegExp::CharClass {
                chars: rest.to_string(),
                complement: true,
            },
            None => RegExp::CharClass {
                chars: body.to_string(),
                complement: false,
            },
        }
    }

    /// Concatenate nodes, collapsing a singleton to the node itself.
    pub fn concat(mut nodes: Vec<RegExp>) -> RegExp {
        if nodes.len() == 1 {
            nodes.swap_remove(0)
        } else {
            RegExp::Concat(nodes)
        }
    }

    /// Build a repetition node.
    ///
    /// # Panics
    ///
    /// Panics when a `Range` has `min > max`; an inverted range is a
    /// construction mistake, not a parseable value.
    pub fn repetition(child: RegExp, kind: RepeatKind, lazy: bool) -> RegExp {
        if let RepeatKind::Range { min, max } = kind {
            assert!(
                min <= max,
                "repetition range requires min <= max (got {{{},{}}})",
                min,
                max
            );
        }
        RegExp::Repetition {
            child: Box::new(child),
            kind,
            lazy,
        }
    }

    /// True for a `NoOp` carrying no comment; `join` filters these out.
    pub fn is_empty_noop(&self) -> bool {
        matches!(self, RegExp::NoOp(None))
    }

    /// True for leaf nodes (no children).
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            RegExp::Literal(_)
                | RegExp::NoOp(_)
                | RegExp::Dot
                | RegExp::Escape(_)
                | RegExp::CharClass { .. }
                | RegExp::Assertion(_)
        )
    }
}
