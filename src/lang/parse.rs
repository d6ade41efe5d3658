use super::{ast::*, token::*, Column, Error, LineNumber, MaxValue};
use crate::error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Parse the tokens of one line into statements. The first error wins
/// and comes back stamped with the line number.
pub fn parse(line_number: LineNumber, tokens: &[Token]) -> Result<Vec<Statement>> {
    match Parser::parse(tokens) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    remark: bool,
    col: Column,
    remap: Vec<(Ident, Ident)>,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Vec<Statement>> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            remark: false,
            col: 0..0,
            remap: vec![],
        };
        if let Some(Token::Literal(literal)) = parse.peek() {
            match literal {
                Literal::Integer(_) | Literal::Single(_) | Literal::Double(_) => {
                    return Err(error!(UndefinedLine, ..&parse.col; "INVALID LINE NUMBER"));
                }
                _ => {}
            }
        }
        parse.statements()
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    /// Empty column at the cursor, for nodes with no source text.
    fn here(&self) -> Column {
        self.col.end..self.col.end
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let token = self.token_stream.next()?;
            self.col.end += token.to_string().chars().count();
            if self.remark {
                continue;
            }
            match token {
                Token::Word(Word::Rem1) | Token::Word(Word::Rem2) => {
                    self.remark = true;
                    continue;
                }
                Token::Whitespace(_) => continue,
                _ => return Some(token),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn statements(&mut self) -> Result<Vec<Statement>> {
        let mut statements: Vec<Statement> = vec![];
        let mut expect_colon = false;
        loop {
            match self.peek() {
                None | Some(Token::Word(Word::Else)) => return Ok(statements),
                Some(Token::Colon) => {
                    expect_colon = false;
                    self.next();
                }
                _ => {
                    if expect_colon {
                        return Err(error!(SyntaxError, ..&self.col; "UNEXPECTED TOKEN"));
                    }
                    match self.statement() {
                        Ok(statement) => statements.push(statement),
                        Err(e) => return Err(e.in_column(&self.col)),
                    }
                    expect_colon = true;
                }
            }
        }
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.peek() {
            Some(Token::Ident(_)) => Statement::for_word(self, &Word::Let),
            Some(Token::Word(word)) => {
                self.next();
                Statement::for_word(self, word)
            }
            _ => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        fn descend(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = unary(this)?;
            loop {
                let op = match this.peek() {
                    Some(Token::Operator(op)) => {
                        if let Operator::Not = op {
                            break;
                        }
                        if Expression::precedence(op) <= precedence {
                            break;
                        }
                        op.clone()
                    }
                    _ => break,
                };
                this.next();
                let column = this.column();
                let rhs = descend(this, Expression::precedence(&op))?;
                lhs = Expression::binary(column, &op, lhs, rhs);
            }
            Ok(lhs)
        }
        fn unary(this: &mut Parser) -> Result<Expression> {
            match this.next() {
                Some(Token::LParen) => {
                    let expression = this.expression()?;
                    this.expect(Token::RParen)?;
                    Ok(expression)
                }
                Some(Token::Operator(Operator::Plus)) => descend(this, 12),
                Some(Token::Operator(Operator::Minus)) => {
                    let column = this.column();
                    let expression = descend(this, 12)?;
                    Ok(Expression::Negation(column, Box::new(expression)))
                }
                Some(Token::Operator(Operator::Not)) => {
                    let column = this.column();
                    let expression = descend(this, 6)?;
                    Ok(Expression::Not(column, Box::new(expression)))
                }
                Some(Token::Ident(ident)) => {
                    let column = this.column();
                    match this.peek() {
                        Some(&&Token::LParen) => {
                            let list = this.expression_list()?;
                            let column = column.start..this.col.end;
                            Ok(Expression::Variable(Variable::Array(
                                column,
                                ident.clone(),
                                list,
                            )))
                        }
                        _ => {
                            if ident.is_user_function() {
                                return Err(
                                    error!(SyntaxError, ..&column; "EXPECTED FUNCTION CALL"),
                                );
                            }
                            Ok(Expression::Variable(Variable::Unary(
                                column,
                                this.remapped(ident),
                            )))
                        }
                    }
                }
                Some(Token::Literal(literal)) => Expression::literal(this.column(), literal),
                _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
            }
        }
        descend(self, 0)
    }

    fn expression_list(&mut self) -> Result<Vec<Expression>> {
        self.expect(Token::LParen)?;
        let mut expressions: Vec<Expression> = vec![];
        loop {
            expressions.push(self.expression()?);
            match self.next() {
                Some(Token::RParen) => return Ok(expressions),
                Some(Token::Comma) => continue,
                _ => return Err(error!(SyntaxError; "EXPECTED END OR SEPARATOR")),
            }
        }
    }

    fn printer_list(&mut self) -> Result<Vec<Expression>> {
        let mut expressions: Vec<Expression> = vec![];
        let mut linefeed = true;
        loop {
            match self.peek() {
                None | Some(Token::Colon) | Some(Token::Word(Word::Else)) => {
                    if linefeed {
                        expressions.push(Expression::String(self.here(), "\n".to_string()));
                    }
                    return Ok(expressions);
                }
                Some(Token::Semicolon) => {
                    linefeed = false;
                    self.next();
                }
                Some(Token::Comma) => {
                    // advance to the next 14 column print zone
                    linefeed = false;
                    self.next();
                    let column = self.column();
                    expressions.push(Expression::Variable(Variable::Array(
                        column.clone(),
                        Ident::Plain("TAB".to_string()),
                        vec![Expression::Integer(column, -14)],
                    )));
                }
                _ => {
                    linefeed = true;
                    expressions.push(self.expression()?);
                }
            }
        }
    }

    fn ident(&mut self) -> Result<(Column, Ident)> {
        match self.next() {
            Some(Token::Ident(ident)) => Ok((self.column(), ident.clone())),
            _ => Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        }
    }

    fn variable(&mut self) -> Result<Variable> {
        let (column, ident) = self.ident()?;
        if ident.is_user_function() {
            return Err(error!(SyntaxError, ..&column; "EXPECTED VARIABLE"));
        }
        match self.peek() {
            Some(&&Token::LParen) => {
                let list = self.expression_list()?;
                let column = column.start..self.col.end;
                Ok(Variable::Array(column, ident, list))
            }
            _ => Ok(Variable::Unary(column, ident)),
        }
    }

    fn unary_variable(&mut self) -> Result<Variable> {
        let (column, ident) = self.ident()?;
        if ident.is_user_function() {
            return Err(error!(SyntaxError, ..&column; "EXPECTED VARIABLE"));
        }
        Ok(Variable::Unary(column, ident))
    }

    fn remapped(&self, ident: &Ident) -> Ident {
        for (from, to) in &self.remap {
            if from == ident {
                return to.clone();
            }
        }
        ident.clone()
    }

    fn line_number(&mut self) -> Result<(Column, u16)> {
        match self.next() {
            Some(token) => {
                let column = self.column();
                match LineNumber::try_from(token)? {
                    Some(number) => Ok((column, number)),
                    None => Err(error!(SyntaxError, ..&column; "INVALID LINE NUMBER")),
                }
            }
            None => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }

    /// A literal destination parses as a line number so that values
    /// above 32767 stay exact; anything else is a plain expression.
    fn line_number_expression(&mut self) -> Result<Expression> {
        match self.peek() {
            Some(Token::Literal(Literal::Integer(_)))
            | Some(Token::Literal(Literal::Single(_)))
            | Some(Token::Literal(Literal::Double(_))) => {
                let (column, number) = self.line_number()?;
                Ok(Expression::for_line_number(column, number))
            }
            _ => self.expression(),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError;
            match token {
                Unknown(_) | Whitespace(_) => {"UNEXPECTED TOKEN"}
                Literal(_) => {"EXPECTED LITERAL"}
                Word(_) => {"EXPECTED RESERVED WORD"}
                Operator(_) => {"EXPECTED OPERATOR"}
                Ident(_) => {"EXPECTED IDENTIFIER"}
                LParen => {"EXPECTED LEFT PARENTHESIS"}
                RParen => {"EXPECTED RIGHT PARENTHESIS"}
                Comma => {"EXPECTED COMMA"}
                Colon => {"EXPECTED COLON"}
                Semicolon => {"EXPECTED SEMICOLON"}
            }
        ))
    }
}

impl Expression {
    fn binary(column: Column, op: &Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        let lhs = Box::new(lhs);
        let rhs = Box::new(rhs);
        match op {
            Caret => Expression::Power(column, lhs, rhs),
            Multiply => Expression::Multiply(column, lhs, rhs),
            Divide => Expression::Divide(column, lhs, rhs),
            DivideInt => Expression::DivideInt(column, lhs, rhs),
            Modulo => Expression::Modulo(column, lhs, rhs),
            Plus => Expression::Add(column, lhs, rhs),
            Minus => Expression::Subtract(column, lhs, rhs),
            Equal => Expression::Equal(column, lhs, rhs),
            NotEqual => Expression::NotEqual(column, lhs, rhs),
            Less => Expression::Less(column, lhs, rhs),
            LessEqual => Expression::LessEqual(column, lhs, rhs),
            Greater => Expression::Greater(column, lhs, rhs),
            GreaterEqual => Expression::GreaterEqual(column, lhs, rhs),
            And => Expression::And(column, lhs, rhs),
            Or => Expression::Or(column, lhs, rhs),
            Xor => Expression::Xor(column, lhs, rhs),
            Imp => Expression::Imp(column, lhs, rhs),
            Eqv => Expression::Eqv(column, lhs, rhs),
            Not => Expression::Not(column, rhs),
        }
    }

    /// Binding power. An operator is consumed only when strictly
    /// tighter than the active level, so every binary operator is
    /// left associative.
    fn precedence(op: &Operator) -> usize {
        use Operator::*;
        match op {
            Caret => 13,
            Multiply | Divide => 11,
            DivideInt => 10,
            Modulo => 9,
            Plus | Minus => 8,
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => 7,
            Not => 6,
            And => 5,
            Or => 4,
            Xor => 3,
            Imp => 2,
            Eqv => 1,
        }
    }

    fn literal(column: Column, literal: &Literal) -> Result<Expression> {
        fn clean(s: &str) -> String {
            let mut s = s.replace('D', "E");
            match s.chars().last() {
                Some('!') | Some('#') | Some('%') => {
                    s.pop();
                }
                _ => {}
            }
            s
        }
        match literal {
            Literal::Single(s) => match clean(s).parse::<f32>() {
                Ok(number) => Ok(Expression::Single(column, number)),
                Err(_) => Err(error!(SyntaxError, ..&column; "INVALID NUMBER")),
            },
            Literal::Double(s) => match clean(s).parse::<f64>() {
                Ok(number) => Ok(Expression::Double(column, number)),
                Err(_) => Err(error!(SyntaxError, ..&column; "INVALID NUMBER")),
            },
            Literal::Integer(s) => {
                let s = clean(s);
                if let Ok(number) = s.parse::<i16>() {
                    return Ok(Expression::Integer(column, number));
                }
                match s.parse::<f64>() {
                    Ok(number) if number >= -32768.0 && number <= 32767.0 => {
                        Ok(Expression::Integer(column, number.round() as i16))
                    }
                    _ => Err(error!(Overflow, ..&column)),
                }
            }
            Literal::Hex(s) | Literal::Octal(s) => {
                let radix = match literal {
                    Literal::Hex(_) => 16,
                    _ => 8,
                };
                if s.is_empty() {
                    return Err(error!(SyntaxError, ..&column; "INVALID NUMBER"));
                }
                match u16::from_str_radix(s, radix) {
                    Ok(number) => Ok(Expression::Integer(column, number as i16)),
                    Err(_) => Err(error!(Overflow, ..&column)),
                }
            }
            Literal::String(s) => {
                if s.chars().count() > 255 {
                    return Err(error!(StringTooLong, ..&column));
                }
                Ok(Expression::String(column, s.clone()))
            }
        }
    }

    fn for_line_number(column: Column, number: u16) -> Expression {
        if number <= i16::max_value() as u16 {
            Expression::Integer(column, number as i16)
        } else {
            Expression::Single(column, f32::from(number))
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: &Word) -> Result<Statement> {
        let column = parse.column();
        use Word::*;
        match word {
            Clear => Ok(Statement::Clear(column)),
            Cls => Ok(Statement::Cls(column)),
            Cont => Ok(Statement::Cont(column)),
            Data => Self::data(parse, column),
            Def => Self::def(parse, column),
            Defdbl => Self::deftype(parse, column, Statement::Defdbl),
            Defint => Self::deftype(parse, column, Statement::Defint),
            Defsng => Self::deftype(parse, column, Statement::Defsng),
            Defstr => Self::deftype(parse, column, Statement::Defstr),
            Delete => Self::delete(parse, column),
            Dim => Self::dim(parse, column),
            End => Ok(Statement::End(column)),
            Erase => Self::erase(parse, column),
            For => Self::r#for(parse, column),
            Gosub => Self::gosub(parse, column),
            Goto => Self::goto(parse, column),
            If => Self::r#if(parse, column),
            Input => Self::input(parse, column),
            Let => Self::r#let(parse, column),
            List => Self::list(parse, column),
            Load => Self::load(parse, column),
            New => Ok(Statement::New(column)),
            Next => Self::next(parse, column),
            On => Self::on(parse, column),
            Print => Self::r#print(parse, column),
            Read => Self::read(parse, column),
            Renum => Self::renum(parse, column),
            Restore => Self::restore(parse, column),
            Return => Ok(Statement::Return(column)),
            Run => Self::run(parse, column),
            Save => Self::save(parse, column),
            Stop => Ok(Statement::Stop(column)),
            Swap => Self::swap(parse, column),
            Troff => Ok(Statement::Troff(column)),
            Tron => Ok(Statement::Tron(column)),
            Wend => Ok(Statement::Wend(column)),
            While => Self::r#while(parse, column),
            Else | Rem1 | Rem2 | Step | Then | To => {
                Err(error!(SyntaxError; "EXPECTED STATEMENT"))
            }
        }
    }

    fn variable_list(parse: &mut Parser) -> Result<Vec<Variable>> {
        let mut variables = vec![parse.variable()?];
        while let Some(&&Token::Comma) = parse.peek() {
            parse.next();
            variables.push(parse.variable()?);
        }
        Ok(variables)
    }

    fn at_end(parse: &mut Parser) -> bool {
        match parse.peek() {
            None | Some(Token::Colon) | Some(Token::Word(Word::Else)) => true,
            _ => false,
        }
    }

    fn data(parse: &mut Parser, column: Column) -> Result<Statement> {
        let mut expressions: Vec<Expression> = vec![];
        if !Self::at_end(parse) {
            loop {
                expressions.push(parse.expression()?);
                match parse.peek() {
                    Some(&&Token::Comma) => {
                        parse.next();
                    }
                    _ => break,
                }
            }
        }
        Ok(Statement::Data(column, expressions))
    }

    fn def(parse: &mut Parser, column: Column) -> Result<Statement> {
        fn mangle(function: &Ident, parameter: &Ident) -> Ident {
            let text = format!("{}.{}", function.as_str(), parameter.as_str());
            match parameter {
                Ident::Plain(_) => Ident::Plain(text),
                Ident::String(_) => Ident::String(text),
                Ident::Single(_) => Ident::Single(text),
                Ident::Double(_) => Ident::Double(text),
                Ident::Integer(_) => Ident::Integer(text),
            }
        }
        let (fn_column, fn_ident) = parse.ident()?;
        if !fn_ident.is_user_function() {
            return Err(error!(SyntaxError, ..&fn_column; "EXPECTED FN IDENTIFIER"));
        }
        let mut parameters: Vec<Variable> = vec![];
        if let Some(&&Token::LParen) = parse.peek() {
            parse.next();
            loop {
                let (param_column, param_ident) = parse.ident()?;
                let mangled = mangle(&fn_ident, &param_ident);
                parse.remap.push((param_ident, mangled.clone()));
                parameters.push(Variable::Unary(param_column, mangled));
                match parse.next() {
                    Some(Token::RParen) => break,
                    Some(Token::Comma) => continue,
                    _ => return Err(error!(SyntaxError; "EXPECTED END OR SEPARATOR")),
                }
            }
        }
        parse.expect(Token::Operator(Operator::Equal))?;
        let expression = parse.expression()?;
        parse.remap.clear();
        Ok(Statement::Def(
            column,
            Variable::Unary(fn_column, fn_ident),
            parameters,
            expression,
        ))
    }

    fn deftype(
        parse: &mut Parser,
        column: Column,
        build: fn(Column, Variable, Variable) -> Statement,
    ) -> Result<Statement> {
        fn letter(parse: &mut Parser) -> Result<(Column, Ident)> {
            let (column, ident) = parse.ident()?;
            if ident.as_str().chars().count() != 1 {
                return Err(error!(SyntaxError, ..&column));
            }
            Ok((column, ident))
        }
        let (first_column, first) = letter(parse)?;
        let (second_column, second) = match parse.peek() {
            Some(Token::Operator(Operator::Minus)) => {
                parse.next();
                letter(parse)?
            }
            _ => (first_column.clone(), first.clone()),
        };
        if first.as_str() > second.as_str() {
            return Err(error!(IllegalFunctionCall, ..&second_column));
        }
        Ok(build(
            column,
            Variable::Unary(first_column, first),
            Variable::Unary(second_column, second),
        ))
    }

    fn line_range(parse: &mut Parser) -> Result<Option<(Expression, Expression)>> {
        let from = match parse.peek() {
            Some(Token::Literal(_)) => Some(parse.line_number()?),
            _ => None,
        };
        let dashed = match parse.peek() {
            Some(Token::Operator(Operator::Minus)) => {
                parse.next();
                true
            }
            _ => false,
        };
        let to = if dashed {
            match parse.peek() {
                Some(Token::Literal(_)) => Some(parse.line_number()?),
                _ => None,
            }
        } else {
            None
        };
        if from.is_none() && !dashed {
            return Ok(None);
        }
        let (from_column, from_number) = match from {
            Some((column, number)) => (column, number),
            None => (parse.here(), 0),
        };
        let (to_column, to_number) = match to {
            Some((column, number)) => (column, number),
            None => {
                if dashed {
                    (parse.here(), LineNumber::max_value())
                } else {
                    (from_column.clone(), from_number)
                }
            }
        };
        if from_number > to_number {
            return Err(error!(IllegalFunctionCall, ..&to_column));
        }
        Ok(Some((
            Expression::for_line_number(from_column, from_number),
            Expression::for_line_number(to_column, to_number),
        )))
    }

    fn delete(parse: &mut Parser, column: Column) -> Result<Statement> {
        match Self::line_range(parse)? {
            Some((from, to)) => Ok(Statement::Delete(column, from, to)),
            None => Err(error!(IllegalFunctionCall, ..&column)),
        }
    }

    fn dim(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Dim(column, Self::variable_list(parse)?))
    }

    fn erase(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Erase(column, Self::variable_list(parse)?))
    }

    fn r#for(parse: &mut Parser, column: Column) -> Result<Statement> {
        let variable = parse.unary_variable()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let from = parse.expression()?;
        parse.expect(Token::Word(Word::To))?;
        let to = parse.expression()?;
        let step = match parse.peek() {
            Some(Token::Word(Word::Step)) => {
                parse.next();
                parse.expression()?
            }
            _ => Expression::Integer(parse.here(), 1),
        };
        Ok(Statement::For(column, variable, from, to, step))
    }

    fn gosub(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Gosub(column, parse.line_number_expression()?))
    }

    fn goto(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Goto(column, parse.line_number_expression()?))
    }

    fn r#if(parse: &mut Parser, column: Column) -> Result<Statement> {
        fn branch(parse: &mut Parser) -> Result<Vec<Statement>> {
            match parse.peek() {
                Some(Token::Literal(_)) => {
                    let (column, number) = parse.line_number()?;
                    Ok(vec![Statement::Goto(
                        column.clone(),
                        Expression::for_line_number(column, number),
                    )])
                }
                _ => parse.statements(),
            }
        }
        let predicate = parse.expression()?;
        let then_statements = match parse.next() {
            Some(Token::Word(Word::Goto)) => {
                let (goto_column, number) = parse.line_number()?;
                vec![Statement::Goto(
                    goto_column.clone(),
                    Expression::for_line_number(goto_column, number),
                )]
            }
            Some(Token::Word(Word::Then)) => branch(parse)?,
            _ => return Err(error!(SyntaxError; "EXPECTED THEN OR GOTO")),
        };
        let else_statements = match parse.peek() {
            Some(Token::Word(Word::Else)) => {
                parse.next();
                branch(parse)?
            }
            _ => vec![],
        };
        Ok(Statement::If(
            column,
            predicate,
            then_statements,
            else_statements,
        ))
    }

    fn input(parse: &mut Parser, column: Column) -> Result<Statement> {
        let mut caps = Expression::Integer(parse.here(), 1);
        if let Some(&&Token::Comma) = parse.peek() {
            parse.next();
            caps = Expression::Integer(parse.column(), 0);
        }
        let mut prompt = Expression::String(parse.here(), String::new());
        if let Some(Token::Literal(Literal::String(_))) = parse.peek() {
            match parse.next() {
                Some(Token::Literal(literal)) => {
                    prompt = Expression::literal(parse.column(), literal)?;
                }
                _ => return Err(error!(InternalError)),
            }
            parse.expect(Token::Semicolon)?;
        }
        let variables = Self::variable_list(parse)?;
        Ok(Statement::Input(column, prompt, caps, variables))
    }

    fn r#let(parse: &mut Parser, column: Column) -> Result<Statement> {
        if let Some(Token::Ident(Ident::String(name))) = parse.peek() {
            if name.as_str() == "MID$" {
                return Self::mid(parse);
            }
        }
        let variable = parse.variable()?;
        match parse.next() {
            Some(Token::Operator(Operator::Equal)) => {}
            _ => return Err(error!(SyntaxError; "EXPECTED EQUALS SIGN")),
        }
        let expression = parse.expression()?;
        Ok(Statement::Let(column, variable, expression))
    }

    fn list(parse: &mut Parser, column: Column) -> Result<Statement> {
        match Self::line_range(parse)? {
            Some((from, to)) => Ok(Statement::List(column, from, to)),
            None => Ok(Statement::List(
                column,
                Expression::for_line_number(parse.here(), 0),
                Expression::for_line_number(parse.here(), LineNumber::max_value()),
            )),
        }
    }

    fn load(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Load(column, parse.expression()?))
    }

    fn mid(parse: &mut Parser) -> Result<Statement> {
        let (column, _) = parse.ident()?;
        parse.expect(Token::LParen)?;
        let variable = parse.variable()?;
        parse.expect(Token::Comma)?;
        let position = parse.expression()?;
        let length = match parse.peek() {
            Some(&&Token::Comma) => {
                parse.next();
                parse.expression()?
            }
            _ => Expression::Integer(parse.here(), 32767),
        };
        parse.expect(Token::RParen)?;
        match parse.next() {
            Some(Token::Operator(Operator::Equal)) => {}
            _ => return Err(error!(SyntaxError; "EXPECTED EQUALS SIGN")),
        }
        let expression = parse.expression()?;
        Ok(Statement::Mid(
            column, variable, position, length, expression,
        ))
    }

    fn next(parse: &mut Parser, column: Column) -> Result<Statement> {
        let variables = if Self::at_end(parse) {
            vec![]
        } else {
            Self::variable_list(parse)?
        };
        Ok(Statement::Next(column, variables))
    }

    fn on(parse: &mut Parser, column: Column) -> Result<Statement> {
        let expression = parse.expression()?;
        let build: fn(Column, Expression, Vec<Expression>) -> Statement = match parse.next() {
            Some(Token::Word(Word::Goto)) => Statement::OnGoto,
            Some(Token::Word(Word::Gosub)) => Statement::OnGosub,
            _ => return Err(error!(SyntaxError; "EXPECTED GOTO OR GOSUB")),
        };
        let mut targets: Vec<Expression> = vec![];
        loop {
            let (target_column, number) = parse.line_number()?;
            targets.push(Expression::for_line_number(target_column, number));
            match parse.peek() {
                Some(&&Token::Comma) => {
                    parse.next();
                }
                _ => break,
            }
        }
        Ok(build(column, expression, targets))
    }

    fn r#print(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Print(column, parse.printer_list()?))
    }

    fn read(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Read(column, Self::variable_list(parse)?))
    }

    fn renum(parse: &mut Parser, column: Column) -> Result<Statement> {
        fn field(parse: &mut Parser, default: u16) -> Result<Expression> {
            match parse.peek() {
                Some(Token::Literal(_)) => {
                    let (column, number) = parse.line_number()?;
                    Ok(Expression::for_line_number(column, number))
                }
                _ => Ok(Expression::for_line_number(parse.here(), default)),
            }
        }
        let new = field(parse, 10)?;
        let mut old = Expression::for_line_number(parse.here(), 0);
        let mut step = Expression::for_line_number(parse.here(), 10);
        if let Some(&&Token::Comma) = parse.peek() {
            parse.next();
            old = field(parse, 0)?;
            if let Some(&&Token::Comma) = parse.peek() {
                parse.next();
                step = field(parse, 10)?;
            }
        }
        Ok(Statement::Renum(column, new, old, step))
    }

    fn restore(parse: &mut Parser, column: Column) -> Result<Statement> {
        let expression = if Self::at_end(parse) {
            Expression::for_line_number(parse.here(), 0)
        } else {
            parse.line_number_expression()?
        };
        Ok(Statement::Restore(column, expression))
    }

    fn run(parse: &mut Parser, column: Column) -> Result<Statement> {
        let expression = if Self::at_end(parse) {
            Expression::for_line_number(parse.here(), 0)
        } else {
            parse.line_number_expression()?
        };
        Ok(Statement::Run(column, expression))
    }

    fn save(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Save(column, parse.expression()?))
    }

    fn swap(parse: &mut Parser, column: Column) -> Result<Statement> {
        let first = parse.variable()?;
        parse.expect(Token::Comma)?;
        let second = parse.variable()?;
        Ok(Statement::Swap(column, first, second))
    }

    fn r#while(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::While(column, parse.expression()?))
    }
}
