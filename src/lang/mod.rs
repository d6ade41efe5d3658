/*!
# BASIC Language Module

Lexical analysis and parsing of the BASIC language. `lex` turns one source
line into canonical tokens, `parse` turns tokens into statements, and `Line`
bundles the two behind a single type.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;

/// Half-open range of character positions within the canonical text
/// of a line. Used for diagnostics only.
pub type Column = std::ops::Range<usize>;

/// A BASIC line number. `None` for direct (unnumbered) lines.
pub type LineNumber = Option<u16>;

pub trait MaxValue<T> {
    fn max_value() -> T;
}

impl MaxValue<u16> for LineNumber {
    fn max_value() -> u16 {
        65529
    }
}
