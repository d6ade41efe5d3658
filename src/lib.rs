//! # BASIC language front end
//!
//! Lexical analysis and parsing for the BASIC programming language as it
//! was in the 8-bit era. A source line goes in, a canonical token list and
//! an abstract syntax tree come out. There is no interpreter here; this
//! crate is the front half shared by anything that wants to read BASIC.
//!
//! ```
//! use basic::lang::Line;
//!
//! let line = Line::new("10 fori=1to99:?i:next");
//! assert_eq!(line.to_string(), "10 FOR I=1 TO 99:PRINT I:NEXT");
//! assert!(line.ast().is_ok());
//! ```

pub mod lang;
