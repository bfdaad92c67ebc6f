//! # Parsely - Parser Combinator Library
//!
//! A parser combinator library with labeled failures, plus two parsers
//! built on top of it: a regular-expression compiler producing syntax
//! trees, and a quoted-string literal parser.
//!
//! Parsely provides composable, type-safe parsers that combine into
//! complex parsing logic from simple building blocks. The library
//! emphasizes:
//!
//! - **Failures as values**: A failed parse is an ordinary `Result`,
//!   with the furthest position reached and what was expected there
//! - **Pure parsing state**: Parsers take an immutable cursor and
//!   return a new one, so backtracking is just reusing the old state
//! - **Composability**: Small parsers combine into larger ones using
//!   combinators, including recursive grammars through `lazy`

pub mod alts;
pub mod between;
pub mod chain;
pub mod error;
pub mod fail;
pub mod followed_by;
pub mod follows;
pub mod interleave;
pub mod lazy;
pub mod lexical;
pub mod many;
pub mod map;
pub mod optional;
pub mod or;
pub mod parser;
pub mod peek;
pub mod pipe;
pub mod pure;
pub mod quoted;
pub mod regexp;
pub mod repeated;
pub mod seq;
pub mod some;
pub mod state;

pub use alts::alts;
pub use between::between;
pub use chain::chain;
pub use error::{FailureData, ParseError};
pub use fail::{failure, void};
pub use followed_by::{FollowedByExt, followed_by};
pub use follows::follows;
pub use interleave::interleave;
pub use lazy::lazy;
pub use many::many;
pub use map::{MapExt, fmap, to};
pub use optional::{maybe, optional};
pub use or::{OrExt, alt};
pub use parser::{ParseResult, Parser, SharedExt, SharedParser, parse, parse_at};
pub use peek::peek;
pub use pipe::{PipeExt, pipe};
pub use pure::pure;
pub use quoted::{parse_quoted, quoted_string};
pub use regexp::{RegExp, RegexpError, parse_regexp, to_pattern};
pub use repeated::{MANY_REPS, repeated};
pub use seq::{SeqExt, seq};
pub use some::some;
pub use state::ParseState;
