use thiserror::Error;

/// Structured context attached to a parse failure.
///
/// This is the `data` field of the failure protocol: alternation
/// combinators record the positions of every failed branch here, and the
/// character/string primitives record what they expected. Merging keeps
/// everything from both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureData {
    /// What the failing parser expected to see, when it can say.
    pub expected: Vec<String>,
    /// Positions reached by each failed alternative, recorded by
    /// `alt`/`alts` for diagnostics.
    pub failure_positions: Vec<usize>,
}

impl FailureData {
    pub fn expecting(item: impl Into<String>) -> Self {
        FailureData {
            expected: vec![item.into()],
            failure_positions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expected.is_empty() && self.failure_positions.is_empty()
    }

    /// Merge two data payloads, keeping entries from both.
    pub fn merge(mut self, other: FailureData) -> Self {
        self.expected.extend(other.expected);
        self.failure_positions.extend(other.failure_positions);
        self
    }
}

/// A failed parse: a message, the furthest position reached (1-based),
/// and structured diagnostic data.
///
/// Failures are ordinary values inside the combinator core; combinators
/// inspect and propagate or recover from them explicitly. Only the
/// terminal entry points (`parse_regexp`) convert one into a hard error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (at position {pos})")]
pub struct ParseError {
    pub message: String,
    pub pos: usize,
    pub data: FailureData,
}

impl ParseError {
    pub fn new(message: impl Into<String>, pos: usize) -> Self {
        ParseError {
            message: message.into(),
            pos,
            data: FailureData::default(),
        }
    }

    pub fn with_data(message: impl Into<String>, pos: usize, data: FailureData) -> Self {
        ParseError {
            message: message.into(),
            pos,
            data,
        }
    }
}
