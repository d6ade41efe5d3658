/*!
Abstract syntax tree for one line of BASIC. Every node carries the
`Column` span of its source text within the canonical line. Spans are
for diagnostics only and do not participate in equality.
*/

pub use super::ident::Ident;
use super::Column;

#[derive(Debug, Clone)]
pub enum Variable {
    Unary(Column, Ident),
    Array(Column, Ident, Vec<Expression>),
}

#[derive(Debug, Clone)]
pub enum Expression {
    Variable(Variable),
    Single(Column, f32),
    Double(Column, f64),
    Integer(Column, i16),
    String(Column, String),
    Negation(Column, Box<Expression>),
    Not(Column, Box<Expression>),
    Power(Column, Box<Expression>, Box<Expression>),
    Multiply(Column, Box<Expression>, Box<Expression>),
    Divide(Column, Box<Expression>, Box<Expression>),
    DivideInt(Column, Box<Expression>, Box<Expression>),
    Modulo(Column, Box<Expression>, Box<Expression>),
    Add(Column, Box<Expression>, Box<Expression>),
    Subtract(Column, Box<Expression>, Box<Expression>),
    Equal(Column, Box<Expression>, Box<Expression>),
    NotEqual(Column, Box<Expression>, Box<Expression>),
    Less(Column, Box<Expression>, Box<Expression>),
    LessEqual(Column, Box<Expression>, Box<Expression>),
    Greater(Column, Box<Expression>, Box<Expression>),
    GreaterEqual(Column, Box<Expression>, Box<Expression>),
    And(Column, Box<Expression>, Box<Expression>),
    Or(Column, Box<Expression>, Box<Expression>),
    Xor(Column, Box<Expression>, Box<Expression>),
    Imp(Column, Box<Expression>, Box<Expression>),
    Eqv(Column, Box<Expression>, Box<Expression>),
}

#[derive(Debug, Clone)]
pub enum Statement {
    Clear(Column),
    Cls(Column),
    Cont(Column),
    Data(Column, Vec<Expression>),
    Def(Column, Variable, Vec<Variable>, Expression),
    Defdbl(Column, Variable, Variable),
    Defint(Column, Variable, Variable),
    Defsng(Column, Variable, Variable),
    Defstr(Column, Variable, Variable),
    Delete(Column, Expression, Expression),
    Dim(Column, Vec<Variable>),
    End(Column),
    Erase(Column, Vec<Variable>),
    For(Column, Variable, Expression, Expression, Expression),
    Gosub(Column, Expression),
    Goto(Column, Expression),
    If(Column, Expression, Vec<Statement>, Vec<Statement>),
    Input(Column, Expression, Expression, Vec<Variable>),
    Let(Column, Variable, Expression),
    List(Column, Expression, Expression),
    Load(Column, Expression),
    Mid(Column, Variable, Expression, Expression, Expression),
    New(Column),
    Next(Column, Vec<Variable>),
    OnGoto(Column, Expression, Vec<Expression>),
    OnGosub(Column, Expression, Vec<Expression>),
    Print(Column, Vec<Expression>),
    Read(Column, Vec<Variable>),
    Renum(Column, Expression, Expression, Expression),
    Restore(Column, Expression),
    Return(Column),
    Run(Column, Expression),
    Save(Column, Expression),
    Stop(Column),
    Swap(Column, Variable, Variable),
    Troff(Column),
    Tron(Column),
    Wend(Column),
    While(Column, Expression),
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        use Variable::*;
        match (self, other) {
            (Unary(_, a), Unary(_, b)) => a == b,
            (Array(_, a, x), Array(_, b, y)) => a == b && x == y,
            _ => false,
        }
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        use Expression::*;
        match (self, other) {
            (Variable(a), Variable(b)) => a == b,
            (Single(_, a), Single(_, b)) => a == b,
            (Double(_, a), Double(_, b)) => a == b,
            (Integer(_, a), Integer(_, b)) => a == b,
            (String(_, a), String(_, b)) => a == b,
            (Negation(_, a), Negation(_, b)) => a == b,
            (Not(_, a), Not(_, b)) => a == b,
            (Power(_, a, x), Power(_, b, y))
            | (Multiply(_, a, x), Multiply(_, b, y))
            | (Divide(_, a, x), Divide(_, b, y))
            | (DivideInt(_, a, x), DivideInt(_, b, y))
            | (Modulo(_, a, x), Modulo(_, b, y))
            | (Add(_, a, x), Add(_, b, y))
            | (Subtract(_, a, x), Subtract(_, b, y))
            | (Equal(_, a, x), Equal(_, b, y))
            | (NotEqual(_, a, x), NotEqual(_, b, y))
            | (Less(_, a, x), Less(_, b, y))
            | (LessEqual(_, a, x), LessEqual(_, b, y))
            | (Greater(_, a, x), Greater(_, b, y))
            | (GreaterEqual(_, a, x), GreaterEqual(_, b, y))
            | (And(_, a, x), And(_, b, y))
            | (Or(_, a, x), Or(_, b, y))
            | (Xor(_, a, x), Xor(_, b, y))
            | (Imp(_, a, x), Imp(_, b, y))
            | (Eqv(_, a, x), Eqv(_, b, y)) => a == b && x == y,
            _ => false,
        }
    }
}

impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        use Statement::*;
        match (self, other) {
            (Clear(_), Clear(_))
            | (Cls(_), Cls(_))
            | (Cont(_), Cont(_))
            | (End(_), End(_))
            | (New(_), New(_))
            | (Return(_), Return(_))
            | (Stop(_), Stop(_))
            | (Troff(_), Troff(_))
            | (Tron(_), Tron(_))
            | (Wend(_), Wend(_)) => true,
            (Data(_, a), Data(_, b)) | (Print(_, a), Print(_, b)) => a == b,
            (Dim(_, a), Dim(_, b))
            | (Erase(_, a), Erase(_, b))
            | (Next(_, a), Next(_, b))
            | (Read(_, a), Read(_, b)) => a == b,
            (Def(_, a, x, p), Def(_, b, y, q)) => a == b && x == y && p == q,
            (Defdbl(_, a, x), Defdbl(_, b, y))
            | (Defint(_, a, x), Defint(_, b, y))
            | (Defsng(_, a, x), Defsng(_, b, y))
            | (Defstr(_, a, x), Defstr(_, b, y))
            | (Swap(_, a, x), Swap(_, b, y)) => a == b && x == y,
            (Delete(_, a, x), Delete(_, b, y)) | (List(_, a, x), List(_, b, y)) => {
                a == b && x == y
            }
            (For(_, v, a, x, p), For(_, w, b, y, q))
            | (Mid(_, v, a, x, p), Mid(_, w, b, y, q)) => {
                v == w && a == b && x == y && p == q
            }
            (Gosub(_, a), Gosub(_, b))
            | (Goto(_, a), Goto(_, b))
            | (Load(_, a), Load(_, b))
            | (Restore(_, a), Restore(_, b))
            | (Run(_, a), Run(_, b))
            | (Save(_, a), Save(_, b))
            | (While(_, a), While(_, b)) => a == b,
            (If(_, a, x, p), If(_, b, y, q)) => a == b && x == y && p == q,
            (Input(_, a, x, p), Input(_, b, y, q)) => a == b && x == y && p == q,
            (Let(_, a, x), Let(_, b, y)) => a == b && x == y,
            (OnGoto(_, a, x), OnGoto(_, b, y)) | (OnGosub(_, a, x), OnGosub(_, b, y)) => {
                a == b && x == y
            }
            (Renum(_, a, x, p), Renum(_, b, y, q)) => a == b && x == y && p == q,
            _ => false,
        }
    }
}

pub trait Visitor {
    fn visit_statement(&mut self, _: &Statement) {}
    fn visit_variable(&mut self, _: &Variable) {}
    fn visit_ident(&mut self, _: &Ident) {}
    fn visit_expression(&mut self, _: &Expression) {}
}

/// Post-order traversal; children are visited before their parent.
pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for Ident {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_ident(self)
    }
}

impl AcceptVisitor for Variable {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Variable::*;
        match self {
            Unary(_, ident) => {
                ident.accept(visitor);
            }
            Array(_, ident, vec_expr) => {
                ident.accept(visitor);
                for expr in vec_expr {
                    expr.accept(visitor);
                }
            }
        }
        visitor.visit_variable(self)
    }
}

impl AcceptVisitor for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Expression::*;
        match self {
            Variable(var) => {
                var.accept(visitor);
            }
            Single(..) | Double(..) | Integer(..) | String(..) => {}
            Negation(_, expr) | Not(_, expr) => expr.accept(visitor),
            Power(_, expr1, expr2)
            | Multiply(_, expr1, expr2)
            | Divide(_, expr1, expr2)
            | DivideInt(_, expr1, expr2)
            | Modulo(_, expr1, expr2)
            | Add(_, expr1, expr2)
            | Subtract(_, expr1, expr2)
            | Equal(_, expr1, expr2)
            | NotEqual(_, expr1, expr2)
            | Less(_, expr1, expr2)
            | LessEqual(_, expr1, expr2)
            | Greater(_, expr1, expr2)
            | GreaterEqual(_, expr1, expr2)
            | And(_, expr1, expr2)
            | Or(_, expr1, expr2)
            | Xor(_, expr1, expr2)
            | Imp(_, expr1, expr2)
            | Eqv(_, expr1, expr2) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
            }
        }
        visitor.visit_expression(self)
    }
}

impl AcceptVisitor for Statement {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Statement::*;
        match self {
            Clear(_) | Cls(_) | Cont(_) | End(_) | New(_) | Return(_) | Stop(_) | Troff(_)
            | Tron(_) | Wend(_) => {}
            Data(_, vec_expr) | Print(_, vec_expr) => {
                for expr in vec_expr {
                    expr.accept(visitor);
                }
            }
            Def(_, var, vec_var, expr) => {
                var.accept(visitor);
                for v in vec_var {
                    v.accept(visitor);
                }
                expr.accept(visitor);
            }
            Defdbl(_, var1, var2)
            | Defint(_, var1, var2)
            | Defsng(_, var1, var2)
            | Defstr(_, var1, var2)
            | Swap(_, var1, var2) => {
                var1.accept(visitor);
                var2.accept(visitor);
            }
            Delete(_, expr1, expr2) | List(_, expr1, expr2) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
            }
            Dim(_, vec_var) | Erase(_, vec_var) | Next(_, vec_var) | Read(_, vec_var) => {
                for var in vec_var {
                    var.accept(visitor);
                }
            }
            For(_, var, expr1, expr2, expr3) | Mid(_, var, expr1, expr2, expr3) => {
                var.accept(visitor);
                expr1.accept(visitor);
                expr2.accept(visitor);
                expr3.accept(visitor);
            }
            Gosub(_, expr)
            | Goto(_, expr)
            | Load(_, expr)
            | Restore(_, expr)
            | Run(_, expr)
            | Save(_, expr)
            | While(_, expr) => {
                expr.accept(visitor);
            }
            If(_, predicate, vec_stmt1, vec_stmt2) => {
                predicate.accept(visitor);
                for stmt in vec_stmt1 {
                    stmt.accept(visitor);
                }
                for stmt in vec_stmt2 {
                    stmt.accept(visitor);
                }
            }
            Input(_, expr1, expr2, vec_var) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
                for var in vec_var {
                    var.accept(visitor);
                }
            }
            Let(_, var, expr) => {
                var.accept(visitor);
                expr.accept(visitor);
            }
            OnGoto(_, expr, vec_expr) | OnGosub(_, expr, vec_expr) => {
                expr.accept(visitor);
                for e in vec_expr {
                    e.accept(visitor);
                }
            }
            Renum(_, expr1, expr2, expr3) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
                expr3.accept(visitor);
            }
        }
        visitor.visit_statement(self)
    }
}
