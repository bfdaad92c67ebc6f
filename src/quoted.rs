//! Double-quoted string literals with backslash escapes.
//!
//! The worked example of combinator assembly: delimiters via `between`,
//! body via `many` over an alternation of escape sequences and plain
//! characters.

use crate::between::between;
use crate::error::ParseError;
use crate::followed_by::followed_by;
use crate::follows::follows;
use crate::lexical::char::{any_char, char, char_not_in, eof};
use crate::many::many;
use crate::map::MapExt;
use crate::or::alt;
use crate::parser::{Parser, parse};

fn decode_escape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        other => other,
    }
}

/// Parser for a double-quoted string literal. The parsed value is the
/// decoded content without the quotes.
///
/// `\n`, `\t`, and `\r` decode to their control characters; any other
/// escaped character (`\"`, `\\`, ...) decodes to itself.
pub fn quoted_string<'s>() -> impl Parser<'s, Output = String> {
    let escape = follows(char('\\'), any_char()).map(decode_escape);
    let plain = char_not_in("\"\\");
    between(char('"'), many(alt(escape, plain)), char('"')).map(|chars| chars.into_iter().collect())
}

/// Parse a complete input as one quoted string literal.
pub fn parse_quoted(input: &str) -> Result<String, ParseError> {
    parse(input, &followed_by(quoted_string(), eof())).map(|(value, _)| value)
}
