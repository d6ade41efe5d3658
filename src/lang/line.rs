use super::ast::Statement;
use super::token::Token;
use super::{lex, parse, Error, LineNumber};

/// One line of source, lexed on construction. Displaying a `Line`
/// produces the canonical text, which lexes back to the same tokens.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(source: &str) -> Line {
        let (number, tokens) = lex(source.trim_end_matches(|ch| ch == '\r' || ch == '\n'));
        Line { number, tokens }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// A direct line has no line number and runs immediately.
    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn ast(&self) -> Result<Vec<Statement>, Error> {
        parse(self.number, &self.tokens)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(number) = self.number {
            write!(f, "{} ", number)?;
        }
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_line() {
        let line = Line::new("run");
        assert_eq!(line.number(), None);
        assert!(line.is_direct());
        assert_eq!(line.to_string(), "RUN");
    }

    #[test]
    fn test_numbered_line() {
        let line = Line::new("10 print");
        assert_eq!(line.number(), Some(10));
        assert!(!line.is_direct());
        assert_eq!(line.to_string(), "10 PRINT");
    }

    #[test]
    fn test_trailing_newline_trimmed() {
        let line = Line::new("10 A=1\r\n");
        assert_eq!(line.to_string(), "10 A=1");
    }

    #[test]
    fn test_canonical_round_trip() {
        let line = Line::new("10 fori=1to99:?i:next");
        let canonical = line.to_string();
        assert_eq!(canonical, "10 FOR I=1 TO 99:PRINT I:NEXT");
        assert_eq!(Line::new(&canonical), line);
    }
}
