//! Concrete lexical parsers built from the combinator core: characters,
//! strings, regex-literal matches, whitespace, numbers, booleans, and
//! balanced-delimiter spans.

pub mod balanced;
pub mod boolean;
pub mod char;
pub mod number;
pub mod regex;
pub mod space;
pub mod string;

pub use balanced::balanced_delimiters;
pub use boolean::boolean;
pub use char::{any_char, char, char_in, char_not_in, char_satisfies, eof};
pub use number::{integer, natural_number};
pub use regex::{re, re_group, re_regex};
pub use space::{digit, digits, hspace, letter, letters, newline, space, vspace};
pub use string::{istring, sjoin, string, string_in, string_with, strings, symbol, symbol_with};
