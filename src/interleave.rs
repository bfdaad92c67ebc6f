use crate::error::ParseError;
use crate::fail::Fail;
use crate::parser::{ParseResult, Parser};
use crate::state::ParseState;

/// Parser combinator that alternates an item parser with a separator,
/// with optional start/end delimiters. Separator, start, and end results
/// are discarded; the items are collected in order.
///
/// The continuation state always sits just after the last successful
/// item: a separator consumed before a failed final item is backtracked,
/// and when `end` is supplied it is matched at that same position, so no
/// separator is required between the last item and the end delimiter.
///
/// By default at least one item is required; `allow_empty` lifts that,
/// which is most useful together with `begin`/`end`.
pub struct Interleave<P, PS, PB, PE> {
    item: P,
    sep: PS,
    start: Option<PB>,
    end: Option<PE>,
    allow_empty: bool,
}

impl<'s, P, PS> Interleave<P, PS, Fail<()>, Fail<()>>
where
    P: Parser<'s>,
    PS: Parser<'s>,
{
    pub fn new(item: P, sep: PS) -> Self {
        Interleave {
            item,
            sep,
            start: None,
            end: None,
            allow_empty: false,
        }
    }
}

impl<P, PS, PB, PE> Interleave<P, PS, PB, PE> {
    /// Require a start delimiter before the first item.
    pub fn begin<PB2>(self, start: PB2) -> Interleave<P, PS, PB2, PE> {
        Interleave {
            item: self.item,
            sep: self.sep,
            start: Some(start),
            end: self.end,
            allow_empty: self.allow_empty,
        }
    }

    /// Require an end delimiter after the last item.
    pub fn end<PE2>(self, end: PE2) -> Interleave<P, PS, PB, PE2> {
        Interleave {
            item: self.item,
            sep: self.sep,
            start: self.start,
            end: Some(end),
            allow_empty: self.allow_empty,
        }
    }

    /// Accept zero items.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }
}

impl<'s, P, PS, PB, PE> Parser<'s> for Interleave<P, PS, PB, PE>
where
    P: Parser<'s>,
    PS: Parser<'s>,
    PB: Parser<'s>,
    PE: Parser<'s>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: ParseState<'s>) -> ParseResult<'s, Vec<P::Output>> {
        let mut state = state;
        if let Some(start) = &self.start {
            let (_, next_state) = start.parse(state)?;
            state = next_state;
        }

        let mut results = Vec::new();
        // State just after the last successful item, before any trailing
        // separator. This is where `end` matches and where the
        // continuation resumes.
        let mut item_state: Option<ParseState<'s>> = None;
        loop {
            match self.item.parse(state) {
                Ok((value, next_state)) => {
                    results.push(value);
                    state = next_state;
                    item_state = Some(state);
                }
                Err(err) => {
                    if item_state.is_none() && !self.allow_empty {
                        return Err(ParseError::with_data(
                            format!(
                                "expected items ({}) in interleave: {}",
                                self.item.label(),
                                err.message
                            ),
                            err.pos,
                            err.data,
                        ));
                    }
                    break;
                }
            }

            match self.sep.parse(state) {
                Ok((_, next_state)) => state = next_state,
                Err(_) => break,
            }
        }

        let resume = item_state.unwrap_or(state);
        if let Some(end) = &self.end {
            let (_, next_state) = end.parse(resume)?;
            return Ok((results, next_state));
        }
        Ok((results, resume))
    }

    fn label(&self) -> String {
        format!(
            "interleave{}({} {})",
            if self.allow_empty { "" } else { "1" },
            self.item.label(),
            self.sep.label()
        )
    }
}

/// Convenience function to create an Interleave parser
pub fn interleave<'s, P, PS>(item: P, sep: PS) -> Interleave<P, PS, Fail<()>, Fail<()>>
where
    P: Parser<'s>,
    PS: Parser<'s>,
{
    Interleave::new(item, sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::char::char;
    use crate::lexical::number::natural_number;
    use crate::lexical::space::letters;
    use crate::lexical::string::{string, symbol};
    use crate::parser::parse;

    fn list_of_ints<'s>() -> impl Parser<'s, Output = Vec<u64>> {
        interleave(natural_number(), string(", "))
            .begin(char('['))
            .end(char(']'))
            .allow_empty()
    }

    #[test]
    fn test_bracketed_list() {
        let (values, state) = parse("[10, 20, 30]", &list_of_ints()).unwrap();
        assert_eq!(values, vec![10, 20, 30]);
        assert!(state.at_end());
    }

    #[test]
    fn test_singleton_list() {
        let (values, _) = parse("[10]", &list_of_ints()).unwrap();
        assert_eq!(values, vec![10]);
    }

    #[test]
    fn test_empty_list() {
        let (values, _) = parse("[]", &list_of_ints()).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_empty_requires_allow_empty() {
        let parser = interleave(natural_number(), string(", "))
            .begin(char('['))
            .end(char(']'));
        assert!(parse("[]", &parser).is_err());
    }

    #[test]
    fn test_plain_interleave() {
        let parser = interleave(letters(), symbol(","));
        let (values, _) = parse("a, b, crg", &parser).unwrap();
        assert_eq!(values, vec!["a", "b", "crg"]);
    }

    #[test]
    fn test_trailing_separator_backtracked() {
        // The trailing ", " is consumed while looking for a fourth item,
        // then backtracked: the continuation sits right after "30".
        let parser = interleave(natural_number(), string(", "));
        let (values, state) = parse("10, 20, 30, x", &parser).unwrap();
        assert_eq!(values, vec![10, 20, 30]);
        assert_eq!(state.view(None), ", x");
    }

    #[test]
    fn test_no_separator_needed_before_end() {
        // In "[10, ]" the separator is consumed, the next item fails, and
        // end must then match at the post-item position, which holds
        // ", ]", so this fails.
        let err = parse("[10, ]", &list_of_ints()).unwrap_err();
        assert_eq!(err.pos, 4);
    }

    #[test]
    fn test_missing_items_fails_without_allow_empty() {
        let parser = interleave(natural_number(), string(", "));
        let err = parse("x", &parser).unwrap_err();
        assert!(err.message.contains("expected items"));
    }
}
