use crate::error::ParseError;

/// Immutable cursor over a source string.
///
/// A `ParseState` records the full input (`source`), the current read
/// position (`point`), and the position where the current parsing attempt
/// began (`start`). Positions are 1-based byte offsets into the source,
/// ranging over `[1, source.len() + 1]`, with `len + 1` meaning
/// end-of-input. Every advancing operation builds a fresh state; nothing
/// is ever mutated in place, so saved states remain valid backtrack
/// targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseState<'s> {
    source: &'s str,
    point: usize,
    start: usize,
}

impl<'s> ParseState<'s> {
    /// Create a state positioned at the beginning of the input.
    pub fn new(source: &'s str) -> Self {
        ParseState {
            source,
            point: 1,
            start: 1,
        }
    }

    /// Create a state at an explicit 1-based position.
    ///
    /// The position is clamped into `[1, source.len() + 1]`: a zero is
    /// treated as 1 and anything past the end as end-of-input. A position
    /// inside a multibyte character snaps forward to the next character
    /// boundary. `start` is set to the adjusted point.
    pub fn at(source: &'s str, point: usize) -> Self {
        let mut point = point.clamp(1, source.len() + 1);
        while !source.is_char_boundary(point - 1) {
            point += 1;
        }
        ParseState {
            source,
            point,
            start: point,
        }
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Current read position, 1-based.
    pub fn point(&self) -> usize {
        self.point
    }

    /// Position where the current parsing attempt began, 1-based.
    pub fn start(&self) -> usize {
        self.start
    }

    /// True when no input remains.
    pub fn at_end(&self) -> bool {
        self.point > self.source.len()
    }

    /// The unconsumed input from `point` onward, truncated to `maxlen`
    /// characters when given.
    pub fn view(&self, maxlen: Option<usize>) -> &'s str {
        let rest = &self.source[self.point - 1..];
        match maxlen {
            None => rest,
            Some(n) => match rest.char_indices().nth(n) {
                Option::Some((idx, _)) => &rest[..idx],
                Option::None => rest,
            },
        }
    }

    /// The next `size` characters, or an error when fewer remain.
    pub fn require(&self, size: usize) -> Result<&'s str, ParseError> {
        let rest = self.view(None);
        let mut count = 0;
        for (idx, _) in rest.char_indices() {
            if count == size {
                return Ok(&rest[..idx]);
            }
            count += 1;
        }
        if count == size {
            return Ok(rest);
        }
        Err(ParseError::new(
            format!("required {} characters but only {} remain", size, count),
            self.point,
        ))
    }

    /// A new state advanced by `by` bytes, clamped to end-of-input.
    /// `start` carries forward unchanged; `advance(0)` is the identity.
    pub fn advance(&self, by: usize) -> Self {
        if by == 0 {
            return *self;
        }
        ParseState {
            source: self.source,
            point: (self.point + by).min(self.source.len() + 1),
            start: self.start,
        }
    }
}
