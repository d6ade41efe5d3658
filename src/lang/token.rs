pub use super::ident::Ident;
use super::{Error, LineNumber, MaxValue};
use crate::error;
use std::convert::TryFrom;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Ident(Ident),
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
}

/// Reserved words in scan order. A word must come before any word that
/// occurs inside it, so DEFDBL is found before DEF. Scanning takes the
/// first positional match.
const WORDS: [(&str, Token); 49] = [
    ("RESTORE", Token::Word(Word::Restore)),
    ("DEFDBL", Token::Word(Word::Defdbl)),
    ("DEFINT", Token::Word(Word::Defint)),
    ("DEFSNG", Token::Word(Word::Defsng)),
    ("DEFSTR", Token::Word(Word::Defstr)),
    ("DELETE", Token::Word(Word::Delete)),
    ("RETURN", Token::Word(Word::Return)),
    ("CLEAR", Token::Word(Word::Clear)),
    ("ERASE", Token::Word(Word::Erase)),
    ("GOSUB", Token::Word(Word::Gosub)),
    ("INPUT", Token::Word(Word::Input)),
    ("PRINT", Token::Word(Word::Print)),
    ("RENUM", Token::Word(Word::Renum)),
    ("TROFF", Token::Word(Word::Troff)),
    ("WHILE", Token::Word(Word::While)),
    ("CONT", Token::Word(Word::Cont)),
    ("DATA", Token::Word(Word::Data)),
    ("ELSE", Token::Word(Word::Else)),
    ("GOTO", Token::Word(Word::Goto)),
    ("NEXT", Token::Word(Word::Next)),
    ("LIST", Token::Word(Word::List)),
    ("LOAD", Token::Word(Word::Load)),
    ("READ", Token::Word(Word::Read)),
    ("SAVE", Token::Word(Word::Save)),
    ("STEP", Token::Word(Word::Step)),
    ("STOP", Token::Word(Word::Stop)),
    ("SWAP", Token::Word(Word::Swap)),
    ("THEN", Token::Word(Word::Then)),
    ("TRON", Token::Word(Word::Tron)),
    ("WEND", Token::Word(Word::Wend)),
    ("AND", Token::Operator(Operator::And)),
    ("CLS", Token::Word(Word::Cls)),
    ("DEF", Token::Word(Word::Def)),
    ("DIM", Token::Word(Word::Dim)),
    ("END", Token::Word(Word::End)),
    ("EQV", Token::Operator(Operator::Eqv)),
    ("FOR", Token::Word(Word::For)),
    ("IMP", Token::Operator(Operator::Imp)),
    ("LET", Token::Word(Word::Let)),
    ("MOD", Token::Operator(Operator::Modulo)),
    ("NEW", Token::Word(Word::New)),
    ("NOT", Token::Operator(Operator::Not)),
    ("REM", Token::Word(Word::Rem1)),
    ("RUN", Token::Word(Word::Run)),
    ("XOR", Token::Operator(Operator::Xor)),
    ("IF", Token::Word(Word::If)),
    ("ON", Token::Word(Word::On)),
    ("OR", Token::Operator(Operator::Or)),
    ("TO", Token::Word(Word::To)),
];

impl Token {
    /// Split an uppercased alphabetic run into reserved words with
    /// identifier text around them. Returns the scanned tokens and any
    /// unmatched trailing text.
    pub(crate) fn scan_alphabetic(run: String) -> (Vec<Token>, String) {
        let mut tokens: Vec<Token> = Vec::new();
        let mut s = run;
        for (word, token) in WORDS.iter() {
            if s.is_empty() {
                break;
            }
            if let Some(index) = s.find(word) {
                let rest = s.split_off(index + word.len());
                s.truncate(index);
                if !s.is_empty() {
                    tokens.push(Token::Ident(Ident::Plain(std::mem::take(&mut s))));
                }
                tokens.push(token.clone());
                s = rest;
            }
        }
        (tokens, s)
    }

    pub(crate) fn from_minutia(ch: char) -> Option<Token> {
        match ch {
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            ',' => Some(Token::Comma),
            ':' => Some(Token::Colon),
            ';' => Some(Token::Semicolon),
            '?' => Some(Token::Word(Word::Print)),
            '\'' => Some(Token::Word(Word::Rem2)),
            '^' => Some(Token::Operator(Operator::Caret)),
            '*' => Some(Token::Operator(Operator::Multiply)),
            '/' => Some(Token::Operator(Operator::Divide)),
            '\\' => Some(Token::Operator(Operator::DivideInt)),
            '+' => Some(Token::Operator(Operator::Plus)),
            '-' => Some(Token::Operator(Operator::Minus)),
            '=' => Some(Token::Operator(Operator::Equal)),
            '<' => Some(Token::Operator(Operator::Less)),
            '>' => Some(Token::Operator(Operator::Greater)),
            _ => None,
        }
    }

    /// Word-like tokens need a space between them to re-lex the same way.
    pub fn is_word(&self) -> bool {
        match self {
            Token::Word(_) => true,
            Token::Ident(_) => true,
            Token::Literal(_) => true,
            Token::Operator(op) => op.is_word(),
            _ => false,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{:>width$}", "", width = *u),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Colon => write!(f, ":"),
            Semicolon => write!(f, ";"),
        }
    }
}

impl TryFrom<&Token> for LineNumber {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        let msg = "INVALID LINE NUMBER";
        if let Token::Literal(lit) = token {
            let s = match lit {
                Literal::Integer(s) => s,
                Literal::Single(s) => s,
                Literal::Double(s) => s,
                _ => return Err(error!(SyntaxError; msg)),
            };
            if s.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(line) = s.parse::<u16>() {
                    if line <= LineNumber::max_value() {
                        return Ok(Some(line));
                    }
                }
                return Err(error!(Overflow; msg));
            }
        }
        Err(error!(SyntaxError; msg))
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Single(String),
    Double(String),
    Integer(String),
    Hex(String),
    Octal(String),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Single(s) => write!(f, "{}", s),
            Double(s) => write!(f, "{}", s),
            Integer(s) => write!(f, "{}", s),
            Hex(s) => write!(f, "&H{}", s),
            Octal(s) => write!(f, "&{}", s),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Word {
    Clear,
    Cls,
    Cont,
    Data,
    Def,
    Defdbl,
    Defint,
    Defsng,
    Defstr,
    Delete,
    Dim,
    Else,
    End,
    Erase,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    List,
    Load,
    New,
    Next,
    On,
    Print,
    Read,
    Rem1,
    Rem2,
    Renum,
    Restore,
    Return,
    Run,
    Save,
    Step,
    Stop,
    Swap,
    Then,
    To,
    Troff,
    Tron,
    Wend,
    While,
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Clear => write!(f, "CLEAR"),
            Cls => write!(f, "CLS"),
            Cont => write!(f, "CONT"),
            Data => write!(f, "DATA"),
            Def => write!(f, "DEF"),
            Defdbl => write!(f, "DEFDBL"),
            Defint => write!(f, "DEFINT"),
            Defsng => write!(f, "DEFSNG"),
            Defstr => write!(f, "DEFSTR"),
            Delete => write!(f, "DELETE"),
            Dim => write!(f, "DIM"),
            Else => write!(f, "ELSE"),
            End => write!(f, "END"),
            Erase => write!(f, "ERASE"),
            For => write!(f, "FOR"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            List => write!(f, "LIST"),
            Load => write!(f, "LOAD"),
            New => write!(f, "NEW"),
            Next => write!(f, "NEXT"),
            On => write!(f, "ON"),
            Print => write!(f, "PRINT"),
            Read => write!(f, "READ"),
            Rem1 => write!(f, "REM"),
            Rem2 => write!(f, "'"),
            Renum => write!(f, "RENUM"),
            Restore => write!(f, "RESTORE"),
            Return => write!(f, "RETURN"),
            Run => write!(f, "RUN"),
            Save => write!(f, "SAVE"),
            Step => write!(f, "STEP"),
            Stop => write!(f, "STOP"),
            Swap => write!(f, "SWAP"),
            Then => write!(f, "THEN"),
            To => write!(f, "TO"),
            Troff => write!(f, "TROFF"),
            Tron => write!(f, "TRON"),
            Wend => write!(f, "WEND"),
            While => write!(f, "WHILE"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    DivideInt,
    Modulo,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Not,
    And,
    Or,
    Xor,
    Imp,
    Eqv,
}

impl Operator {
    pub fn is_word(&self) -> bool {
        use Operator::*;
        match self {
            Caret | Multiply | Divide | DivideInt | Plus | Minus | Equal | NotEqual | Less
            | LessEqual | Greater | GreaterEqual => false,
            Modulo | Not | And | Or | Xor | Imp | Eqv => true,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            DivideInt => write!(f, "\\"),
            Modulo => write!(f, "MOD"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            Not => write!(f, "NOT"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
            Xor => write!(f, "XOR"),
            Imp => write!(f, "IMP"),
            Eqv => write!(f, "EQV"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_whole_word() {
        let (tokens, rest) = Token::scan_alphabetic("PRINT".to_string());
        assert_eq!(tokens, vec![Token::Word(Word::Print)]);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_scan_word_with_prefix_and_suffix() {
        let (tokens, rest) = Token::scan_alphabetic("BANDS".to_string());
        assert_eq!(
            tokens,
            vec![
                Token::Ident(Ident::Plain("B".to_string())),
                Token::Operator(Operator::And),
            ]
        );
        assert_eq!(rest, "S");
    }

    #[test]
    fn test_scan_longest_first() {
        let (tokens, rest) = Token::scan_alphabetic("DEFDBL".to_string());
        assert_eq!(tokens, vec![Token::Word(Word::Defdbl)]);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_scan_no_match() {
        let (tokens, rest) = Token::scan_alphabetic("PICKLES".to_string());
        assert_eq!(tokens, vec![]);
        assert_eq!(rest, "PICKLES");
    }

    #[test]
    fn test_line_number_conversion() {
        use std::convert::TryFrom;
        let token = Token::Literal(Literal::Integer("100".to_string()));
        assert_eq!(LineNumber::try_from(&token).ok(), Some(Some(100)));
        let token = Token::Literal(Literal::Single("65530".to_string()));
        assert!(LineNumber::try_from(&token).is_err());
    }
}
