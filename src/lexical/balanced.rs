use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Parser that matches a span balanced with respect to two distinct
/// delimiters, e.g. everything from an opening `(` through its matching
/// `)`, nesting included.
///
/// The parsed value is the balanced span plus the byte offsets of every
/// delimiter within it, signed: positive for opening, negative for
/// closing. (An opening delimiter at offset zero is recorded as 0.)
///
/// With `seen_opening`, the opening delimiter is taken to have been
/// consumed already and the span closes the implied open delimiter.
pub struct Balanced {
    opening: String,
    closing: String,
    seen_opening: bool,
}

impl<'s> Parser<'s> for Balanced {
    type Output = (&'s str, Vec<i64>);

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, (&'s str, Vec<i64>)> {
        let input = state.view(None);
        let len_open = self.opening.len();
        let len_close = self.closing.len();
        let needed = if self.seen_opening {
            len_close
        } else {
            len_open + len_close
        };

        if input.len() < needed {
            return Err(ParseError::new(
                format!(
                    "expected balanced delimiters {}..{}: insufficient input",
                    self.opening, self.closing
                ),
                state.point(),
            ));
        }
        if !self.seen_opening && !input.starts_with(&self.opening) {
            return Err(ParseError::new(
                format!(
                    "expected balanced delimiters {}..{}: missing {}",
                    self.opening, self.closing, self.opening
                ),
                state.point(),
            ));
        }

        let mut index = if self.seen_opening { 0 } else { len_open };
        let mut count = 1;
        let mut positions: Vec<i64> = if self.seen_opening { vec![] } else { vec![0] };

        while count > 0 && index < input.len() {
            if input[index..].starts_with(&self.opening) {
                count += 1;
                positions.push(index as i64);
                index += len_open;
            } else if input[index..].starts_with(&self.closing) {
                count -= 1;
                positions.push(-(index as i64));
                index += len_close;
            } else {
                // Skip one character, respecting UTF-8 boundaries.
                index += input[index..].chars().next().map_or(1, |c| c.len_utf8());
            }
        }

        if count != 0 {
            return Err(ParseError::new(
                format!(
                    "expected balanced delimiters {}..{}",
                    self.opening, self.closing
                ),
                state.point(),
            ));
        }

        Ok(((&input[..index], positions), state.advance(index)))
    }

    fn label(&self) -> String {
        format!("balanced(\"{}\", \"{}\")", self.opening, self.closing)
    }
}

/// Convenience function to create a Balanced parser
pub fn balanced_delimiters(
    opening: impl Into<String>,
    closing: impl Into<String>,
    seen_opening: bool,
) -> Balanced {
    Balanced {
        opening: opening.into(),
        closing: closing.into(),
        seen_opening,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_balanced_nested() {
        let parser = balanced_delimiters("(", ")", false);
        let ((span, positions), state) = parse("(a(b(c)d)e)xyz", &parser).unwrap();
        assert_eq!(span, "(a(b(c)d)e)");
        assert_eq!(positions, vec![0, 2, 4, -6, -8, -10]);
        assert_eq!(state.view(None), "xyz");
    }

    #[test]
    fn test_seen_opening_closes_implied_delimiter() {
        let parser = balanced_delimiters("(", ")", true);
        let ((span, positions), _) = parse("ab(c)d)rest", &parser).unwrap();
        assert_eq!(span, "ab(c)d)");
        assert_eq!(positions, vec![2, -4, -6]);
    }

    #[test]
    fn test_unbalanced_fails() {
        let parser = balanced_delimiters("(", ")", false);
        let err = parse("(a(b)", &parser).unwrap_err();
        assert!(err.message.contains("balanced"));
    }

    #[test]
    fn test_missing_opening_fails() {
        let parser = balanced_delimiters("(", ")", false);
        assert!(parse("abc)", &parser).is_err());
    }

    #[test]
    fn test_multichar_delimiters() {
        let parser = balanced_delimiters("<<", ">>", false);
        let ((span, positions), _) = parse("<<a<<b>>c>>tail", &parser).unwrap();
        assert_eq!(span, "<<a<<b>>c>>");
        assert_eq!(positions, vec![0, 3, -6, -9]);
    }
}
