use super::{token::*, LineNumber, MaxValue};
use std::collections::VecDeque;

/// Tokenize one line of source. The line number prefix, if valid, is
/// split off and never appears in the token list. The tokens re-display
/// as the canonical text of the line and re-lexing that text yields the
/// same tokens.
pub fn lex(s: &str) -> (LineNumber, Vec<Token>) {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

fn is_basic_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_basic_alphabetic(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    pending: VecDeque<Token>,
    remark: bool,
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        let pk = *self.chars.peek()?;
        if self.remark {
            return Some(Token::Unknown(self.chars.by_ref().collect::<String>()));
        }
        if is_basic_whitespace(pk) {
            return Some(self.whitespace());
        }
        if is_basic_digit(pk) || pk == '.' {
            return Some(self.number());
        }
        if is_basic_alphabetic(pk) {
            return Some(self.alphabetic());
        }
        if pk == '"' {
            return Some(self.string());
        }
        if pk == '&' {
            return Some(self.radix());
        }
        Some(self.minutia())
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> (LineNumber, Vec<Token>) {
        let (line_number, rest) = BasicLexer::take_line_number(s);
        let mut tokens: Vec<Token> = BasicLexer {
            chars: rest.chars().peekable(),
            pending: VecDeque::new(),
            remark: false,
        }
        .collect();
        BasicLexer::trim_end(&mut tokens);
        BasicLexer::collapse_relational(&mut tokens);
        BasicLexer::separate_words(&mut tokens);
        // after spacing so that GO TO pairs split out of a single run
        // still fuse, keeping the canonical text stable
        BasicLexer::collapse_go(&mut tokens);
        (line_number, tokens)
    }

    fn take_line_number(s: &str) -> (LineNumber, &str) {
        let text = s.trim_start_matches(is_basic_whitespace);
        let digits = text
            .find(|ch: char| !is_basic_digit(ch))
            .unwrap_or_else(|| text.len());
        if digits > 0 {
            if let Ok(number) = text[..digits].parse::<u16>() {
                if number <= LineNumber::max_value() {
                    let mut rest = text[digits..].chars();
                    match rest.clone().next() {
                        Some(ch) if is_basic_whitespace(ch) => {
                            rest.next();
                        }
                        _ => {}
                    }
                    return (Some(number), rest.as_str());
                }
            }
        }
        (None, s)
    }

    fn whitespace(&mut self) -> Token {
        let mut len = 0;
        while let Some(&pk) = self.chars.peek() {
            if !is_basic_whitespace(pk) {
                break;
            }
            self.chars.next();
            len += 1;
        }
        Token::Whitespace(len)
    }

    fn number(&mut self) -> Token {
        let mut s = String::new();
        let mut digits = 0;
        let mut decimal = false;
        let mut exponent = false;
        let mut double = false;
        while let Some(pk) = self.chars.peek().copied() {
            match pk {
                '0'..='9' => {
                    self.chars.next();
                    s.push(pk);
                    if !exponent {
                        digits += 1;
                    }
                }
                '.' if !decimal && !exponent => {
                    self.chars.next();
                    s.push('.');
                    decimal = true;
                }
                'E' | 'e' | 'D' | 'd' if !exponent => {
                    // the marker belongs to the number only when an
                    // exponent actually follows, else 1E is 1 then E
                    let mut ahead = self.chars.clone();
                    ahead.next();
                    match ahead.next() {
                        Some(ch) if is_basic_digit(ch) || ch == '+' || ch == '-' => {}
                        _ => break,
                    }
                    self.chars.next();
                    let marker = pk.to_ascii_uppercase();
                    if marker == 'D' {
                        double = true;
                    }
                    s.push(marker);
                    exponent = true;
                    if let Some(sign) = self.chars.peek().copied() {
                        if sign == '+' || sign == '-' {
                            self.chars.next();
                            s.push(sign);
                        }
                    }
                }
                '!' => {
                    self.chars.next();
                    s.push('!');
                    return Token::Literal(Literal::Single(s));
                }
                '#' => {
                    self.chars.next();
                    s.push('#');
                    return Token::Literal(Literal::Double(s));
                }
                '%' => {
                    self.chars.next();
                    s.push('%');
                    return Token::Literal(Literal::Integer(s));
                }
                _ => break,
            }
        }
        if double || digits > 7 {
            return Token::Literal(Literal::Double(s));
        }
        if !decimal && !exponent && s.parse::<i16>().is_ok() {
            return Token::Literal(Literal::Integer(s));
        }
        Token::Literal(Literal::Single(s))
    }

    fn string(&mut self) -> Token {
        let mut s = String::new();
        self.chars.next();
        for ch in self.chars.by_ref() {
            if ch == '"' {
                break;
            }
            s.push(ch);
        }
        Token::Literal(Literal::String(s))
    }

    fn radix(&mut self) -> Token {
        let mut s = String::new();
        self.chars.next();
        let hex = match self.chars.peek().copied() {
            Some('H') | Some('h') => {
                self.chars.next();
                true
            }
            _ => false,
        };
        while let Some(pk) = self.chars.peek().copied() {
            let more = if hex {
                pk.is_ascii_hexdigit()
            } else {
                ('0'..='7').contains(&pk)
            };
            if !more {
                break;
            }
            self.chars.next();
            s.push(pk.to_ascii_uppercase());
        }
        if hex {
            Token::Literal(Literal::Hex(s))
        } else {
            Token::Literal(Literal::Octal(s))
        }
    }

    fn alphabetic(&mut self) -> Token {
        let mut run = String::new();
        while let Some(&pk) = self.chars.peek() {
            if !is_basic_alphabetic(pk) {
                break;
            }
            run.push(pk.to_ascii_uppercase());
            self.chars.next();
        }
        let (mut tokens, leftover) = Token::scan_alphabetic(run);
        if let Some(at) = tokens.iter().position(|t| *t == Token::Word(Word::Rem1)) {
            self.remark = true;
            let mut comment: String = tokens
                .split_off(at + 1)
                .iter()
                .map(|t| t.to_string())
                .collect();
            comment.push_str(&leftover);
            comment.extend(self.chars.by_ref());
            if !comment.is_empty() {
                tokens.push(Token::Unknown(comment));
            }
        } else if !leftover.is_empty() {
            tokens.push(self.ident(leftover));
        }
        let mut tokens = tokens.into_iter();
        match tokens.next() {
            Some(first) => {
                self.pending.extend(tokens);
                first
            }
            None => {
                debug_assert!(false, "alphabetic run produced no token");
                Token::Unknown(String::new())
            }
        }
    }

    /// Unmatched trailing text of an alphabetic run continues as an
    /// identifier, absorbing digits and one type sigil. Letters after a
    /// digit start a fresh token.
    fn ident(&mut self, mut s: String) -> Token {
        while let Some(&pk) = self.chars.peek() {
            if !is_basic_digit(pk) {
                break;
            }
            s.push(pk);
            self.chars.next();
        }
        match self.chars.peek().copied() {
            Some('$') => {
                self.chars.next();
                s.push('$');
                Token::Ident(Ident::String(s))
            }
            Some('!') => {
                self.chars.next();
                s.push('!');
                Token::Ident(Ident::Single(s))
            }
            Some('#') => {
                self.chars.next();
                s.push('#');
                Token::Ident(Ident::Double(s))
            }
            Some('%') => {
                self.chars.next();
                s.push('%');
                Token::Ident(Ident::Integer(s))
            }
            _ => Token::Ident(Ident::Plain(s)),
        }
    }

    fn minutia(&mut self) -> Token {
        let ch = match self.chars.next() {
            Some(ch) => ch,
            None => {
                debug_assert!(false, "minutia called at end of line");
                return Token::Unknown(String::new());
            }
        };
        if let Some(token) = Token::from_minutia(ch) {
            if token == Token::Word(Word::Rem2) {
                self.remark = true;
            }
            return token;
        }
        let mut s = String::new();
        s.push(ch);
        while let Some(pk) = self.chars.peek().copied() {
            if is_basic_whitespace(pk)
                || is_basic_digit(pk)
                || is_basic_alphabetic(pk)
                || pk == '.'
                || pk == '"'
                || pk == '&'
                || Token::from_minutia(pk).is_some()
            {
                break;
            }
            self.chars.next();
            s.push(pk);
        }
        Token::Unknown(s)
    }

    fn collapse_relational(tokens: &mut Vec<Token>) {
        fn relational(token: &Token) -> Option<Operator> {
            match token {
                Token::Operator(Operator::Less) => Some(Operator::Less),
                Token::Operator(Operator::Greater) => Some(Operator::Greater),
                Token::Operator(Operator::Equal) => Some(Operator::Equal),
                _ => None,
            }
        }
        fn collapse(first: &Operator, second: &Operator) -> Option<Operator> {
            use Operator::*;
            match (first, second) {
                (Less, Equal) | (Equal, Less) => Some(LessEqual),
                (Greater, Equal) | (Equal, Greater) => Some(GreaterEqual),
                (Less, Greater) | (Greater, Less) => Some(NotEqual),
                _ => None,
            }
        }
        let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut index = 0;
        while index < tokens.len() {
            if let Some(first) = relational(&tokens[index]) {
                let mut next = index + 1;
                if let Some(Token::Whitespace(_)) = tokens.get(next) {
                    next += 1;
                }
                if let Some(second) = tokens.get(next).and_then(relational) {
                    if let Some(op) = collapse(&first, &second) {
                        out.push(Token::Operator(op));
                        index = next + 1;
                        continue;
                    }
                }
            }
            out.push(tokens[index].clone());
            index += 1;
        }
        *tokens = out;
    }

    fn collapse_go(tokens: &mut Vec<Token>) {
        let mut locs: Vec<(usize, Token)> = vec![];
        for (index, ttt) in tokens.windows(3).enumerate() {
            if let Token::Ident(Ident::Plain(go)) = &ttt[0] {
                if go == "GO" {
                    if let Token::Whitespace(_) = ttt[1] {
                        if let Token::Word(Word::To) = ttt[2] {
                            locs.push((index, Token::Word(Word::Goto)));
                        }
                        if let Token::Ident(Ident::Plain(sub)) = &ttt[2] {
                            if sub == "SUB" {
                                locs.push((index, Token::Word(Word::Gosub)));
                            }
                        }
                    }
                }
            }
        }
        while let Some((index, token)) = locs.pop() {
            tokens.splice(index..index + 3, Some(token));
        }
    }

    fn separate_words(tokens: &mut Vec<Token>) {
        let mut ins: Vec<usize> = vec![];
        for (index, tt) in tokens.windows(2).enumerate() {
            if tt.iter().all(|t| t.is_word()) {
                ins.push(index);
            }
        }
        while let Some(index) = ins.pop() {
            tokens.insert(index + 1, Token::Whitespace(1));
        }
    }

    fn trim_end(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.last() {
            tokens.pop();
        }
        if let Some(Token::Unknown(_)) = tokens.last() {
            if let Some(Token::Unknown(s)) = tokens.pop() {
                tokens.push(Token::Unknown(s.trim_end().to_string()));
            }
        }
    }
}
