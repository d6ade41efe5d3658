use basic::lang::{ast::*, lex, parse, Line};

fn first(s: &str) -> Statement {
    let (lin, tokens) = lex(s);
    let mut statements = parse(lin, &tokens).expect(s);
    assert!(!statements.is_empty(), "no statement in {:?}", s);
    statements.remove(0)
}

fn all(s: &str) -> Vec<Statement> {
    let (lin, tokens) = lex(s);
    parse(lin, &tokens).expect(s)
}

fn err(s: &str) -> String {
    let (lin, tokens) = lex(s);
    match parse(lin, &tokens) {
        Ok(_) => panic!("expected error for {:?}", s),
        Err(e) => e.to_string(),
    }
}

fn var(s: &str) -> Variable {
    Variable::Unary(0..0, Ident::Plain(s.to_string()))
}

fn var_expr(s: &str) -> Expression {
    Expression::Variable(var(s))
}

fn int(i: i16) -> Expression {
    Expression::Integer(0..0, i)
}

fn string(s: &str) -> Expression {
    Expression::String(0..0, s.to_string())
}

#[test]
fn test_zero_arity() {
    assert_eq!(first("CLEAR"), Statement::Clear(0..0));
    assert_eq!(first("CLS"), Statement::Cls(0..0));
    assert_eq!(first("CONT"), Statement::Cont(0..0));
    assert_eq!(first("END"), Statement::End(0..0));
    assert_eq!(first("NEW"), Statement::New(0..0));
    assert_eq!(first("RETURN"), Statement::Return(0..0));
    assert_eq!(first("STOP"), Statement::Stop(0..0));
    assert_eq!(first("TROFF"), Statement::Troff(0..0));
    assert_eq!(first("TRON"), Statement::Tron(0..0));
    assert_eq!(first("WEND"), Statement::Wend(0..0));
}

#[test]
fn test_data() {
    assert_eq!(
        first(r#"DATA 99, "Red Balloons", -30"#),
        Statement::Data(
            0..0,
            vec![
                int(99),
                string("Red Balloons"),
                Expression::Negation(0..0, Box::new(int(30))),
            ]
        )
    );
    assert_eq!(first("DATA"), Statement::Data(0..0, vec![]));
}

#[test]
fn test_def_fn() {
    assert_eq!(
        first("DEF FNA(X)=X*2"),
        Statement::Def(
            0..0,
            Variable::Unary(0..0, Ident::Plain("FNA".to_string())),
            vec![Variable::Unary(0..0, Ident::Plain("FNA.X".to_string()))],
            Expression::Multiply(0..0, Box::new(var_expr("FNA.X")), Box::new(int(2))),
        )
    );
}

#[test]
fn test_def_fn_no_parameters() {
    assert_eq!(
        first("DEF FNZ=42"),
        Statement::Def(
            0..0,
            Variable::Unary(0..0, Ident::Plain("FNZ".to_string())),
            vec![],
            int(42),
        )
    );
}

#[test]
fn test_def_fn_call_inside_body() {
    assert_eq!(
        first("DEF FNB(X,Y)=FNA(X)/Y"),
        Statement::Def(
            0..0,
            Variable::Unary(0..0, Ident::Plain("FNB".to_string())),
            vec![
                Variable::Unary(0..0, Ident::Plain("FNB.X".to_string())),
                Variable::Unary(0..0, Ident::Plain("FNB.Y".to_string())),
            ],
            Expression::Divide(
                0..0,
                Box::new(Expression::Variable(Variable::Array(
                    0..0,
                    Ident::Plain("FNA".to_string()),
                    vec![var_expr("FNB.X")],
                ))),
                Box::new(var_expr("FNB.Y")),
            ),
        )
    );
}

#[test]
fn test_def_requires_fn_name() {
    assert_eq!(err("DEF A(X)=1"), "?SYNTAX ERROR; EXPECTED FN IDENTIFIER");
}

#[test]
fn test_deftype() {
    assert_eq!(
        first("DEFINT I-N"),
        Statement::Defint(0..0, var("I"), var("N"))
    );
    assert_eq!(first("DEFSTR S"), Statement::Defstr(0..0, var("S"), var("S")));
    assert_eq!(
        first("DEFDBL A-Z"),
        Statement::Defdbl(0..0, var("A"), var("Z"))
    );
    assert_eq!(first("DEFSNG B"), Statement::Defsng(0..0, var("B"), var("B")));
}

#[test]
fn test_deftype_errors() {
    assert_eq!(err("DEFINT i-"), "?SYNTAX ERROR; EXPECTED VARIABLE");
    assert_eq!(err("DEFINT ii"), "?SYNTAX ERROR");
    assert_eq!(err("DEFINT z-a"), "?ILLEGAL FUNCTION CALL");
}

#[test]
fn test_delete() {
    assert_eq!(first("DELETE 10"), Statement::Delete(0..0, int(10), int(10)));
    assert_eq!(
        first("DELETE 10-100"),
        Statement::Delete(0..0, int(10), int(100))
    );
    assert_eq!(
        first("DELETE -100"),
        Statement::Delete(0..0, int(0), int(100))
    );
    assert_eq!(
        first("DELETE 100-"),
        Statement::Delete(0..0, int(100), Expression::Single(0..0, 65529.0))
    );
    assert_eq!(err("DELETE"), "?ILLEGAL FUNCTION CALL");
    assert_eq!(err("DELETE 20-10"), "?ILLEGAL FUNCTION CALL");
}

#[test]
fn test_dim_and_erase() {
    assert_eq!(
        first("DIM A$(10,10),B(5)"),
        Statement::Dim(
            0..0,
            vec![
                Variable::Array(
                    0..0,
                    Ident::String("A$".to_string()),
                    vec![int(10), int(10)]
                ),
                Variable::Array(0..0, Ident::Plain("B".to_string()), vec![int(5)]),
            ]
        )
    );
    assert_eq!(
        first("ERASE A$,B"),
        Statement::Erase(
            0..0,
            vec![
                Variable::Unary(0..0, Ident::String("A$".to_string())),
                var("B"),
            ]
        )
    );
}

#[test]
fn test_for_next() {
    assert_eq!(
        first("FOR I=1 TO 10"),
        Statement::For(0..0, var("I"), int(1), int(10), int(1))
    );
    assert_eq!(
        first("FOR I=10 TO 1 STEP -1"),
        Statement::For(
            0..0,
            var("I"),
            int(10),
            int(1),
            Expression::Negation(0..0, Box::new(int(1))),
        )
    );
    assert_eq!(first("NEXT"), Statement::Next(0..0, vec![]));
    assert_eq!(
        first("NEXT I,J"),
        Statement::Next(0..0, vec![var("I"), var("J")])
    );
}

#[test]
fn test_goto_gosub() {
    assert_eq!(first("GOTO 100"), Statement::Goto(0..0, int(100)));
    assert_eq!(first("GO TO 100"), Statement::Goto(0..0, int(100)));
    assert_eq!(first("GOSUB 200"), Statement::Gosub(0..0, int(200)));
    assert_eq!(
        first("GOTO 65000"),
        Statement::Goto(0..0, Expression::Single(0..0, 65000.0))
    );
    assert_eq!(
        err("10 GOTO 70000"),
        "?OVERFLOW IN 10:6; INVALID LINE NUMBER"
    );
}

#[test]
fn test_if_then() {
    assert_eq!(
        first(r#"IF A>1 THEN B=2"#),
        Statement::If(
            0..0,
            Expression::Greater(0..0, Box::new(var_expr("A")), Box::new(int(1))),
            vec![Statement::Let(0..0, var("B"), int(2))],
            vec![],
        )
    );
}

#[test]
fn test_if_then_else() {
    assert_eq!(
        first(r#"IF A THEN B=1:C=2 ELSE D=3"#),
        Statement::If(
            0..0,
            var_expr("A"),
            vec![
                Statement::Let(0..0, var("B"), int(1)),
                Statement::Let(0..0, var("C"), int(2)),
            ],
            vec![Statement::Let(0..0, var("D"), int(3))],
        )
    );
}

#[test]
fn test_if_line_number_shorthand() {
    assert_eq!(
        first("IF A THEN 100 ELSE 200"),
        Statement::If(
            0..0,
            var_expr("A"),
            vec![Statement::Goto(0..0, int(100))],
            vec![Statement::Goto(0..0, int(200))],
        )
    );
    assert_eq!(
        first("IF A GOTO 100"),
        Statement::If(
            0..0,
            var_expr("A"),
            vec![Statement::Goto(0..0, int(100))],
            vec![],
        )
    );
}

#[test]
fn test_if_else_binds_innermost() {
    assert_eq!(
        first("IF A THEN IF B THEN C=1 ELSE C=2"),
        Statement::If(
            0..0,
            var_expr("A"),
            vec![Statement::If(
                0..0,
                var_expr("B"),
                vec![Statement::Let(0..0, var("C"), int(1))],
                vec![Statement::Let(0..0, var("C"), int(2))],
            )],
            vec![],
        )
    );
}

#[test]
fn test_if_requires_then() {
    assert_eq!(err("IF A B=1"), "?SYNTAX ERROR; EXPECTED THEN OR GOTO");
}

#[test]
fn test_input() {
    assert_eq!(
        first(r#"INPUT A%,B$"#),
        Statement::Input(
            0..0,
            string(""),
            int(1),
            vec![
                Variable::Unary(0..0, Ident::Integer("A%".to_string())),
                Variable::Unary(0..0, Ident::String("B$".to_string())),
            ]
        )
    );
    assert_eq!(
        first(r#"INPUT "NAME";A$"#),
        Statement::Input(
            0..0,
            string("NAME"),
            int(1),
            vec![Variable::Unary(0..0, Ident::String("A$".to_string()))],
        )
    );
    assert_eq!(
        first(r#"INPUT ,"NAME";A$"#),
        Statement::Input(
            0..0,
            string("NAME"),
            int(0),
            vec![Variable::Unary(0..0, Ident::String("A$".to_string()))],
        )
    );
}

#[test]
fn test_input_prompt_needs_semicolon() {
    assert_eq!(err(r#"INPUT "NAME",A$"#), "?SYNTAX ERROR; EXPECTED SEMICOLON");
}

#[test]
fn test_let() {
    assert_eq!(
        first("LET A=1"),
        Statement::Let(0..0, var("A"), int(1))
    );
    assert_eq!(first("A=1"), Statement::Let(0..0, var("A"), int(1)));
    assert_eq!(
        first("A(1,2)=3"),
        Statement::Let(
            0..0,
            Variable::Array(0..0, Ident::Plain("A".to_string()), vec![int(1), int(2)]),
            int(3),
        )
    );
    assert_eq!(err("A 1"), "?SYNTAX ERROR; EXPECTED EQUALS SIGN");
}

#[test]
fn test_let_mid() {
    assert_eq!(
        first(r#"MID$(A$,11)="OR""#),
        Statement::Mid(
            0..0,
            Variable::Unary(0..0, Ident::String("A$".to_string())),
            int(11),
            int(32767),
            string("OR"),
        )
    );
    assert_eq!(
        first(r#"LET MID$(A$,5,1)="LALA""#),
        Statement::Mid(
            0..0,
            Variable::Unary(0..0, Ident::String("A$".to_string())),
            int(5),
            int(1),
            string("LALA"),
        )
    );
}

#[test]
fn test_list() {
    assert_eq!(
        first("LIST"),
        Statement::List(0..0, int(0), Expression::Single(0..0, 65529.0))
    );
    assert_eq!(first("LIST 50"), Statement::List(0..0, int(50), int(50)));
    assert_eq!(
        first("LIST 50-60"),
        Statement::List(0..0, int(50), int(60))
    );
}

#[test]
fn test_load_save() {
    assert_eq!(
        first(r#"LOAD "GAME""#),
        Statement::Load(0..0, string("GAME"))
    );
    assert_eq!(
        first(r#"SAVE A$+".BAS""#),
        Statement::Save(
            0..0,
            Expression::Add(
                0..0,
                Box::new(Expression::Variable(Variable::Unary(
                    0..0,
                    Ident::String("A$".to_string())
                ))),
                Box::new(string(".BAS")),
            )
        )
    );
}

#[test]
fn test_on_goto_gosub() {
    assert_eq!(
        first("ON X GOTO 100,200,300"),
        Statement::OnGoto(0..0, var_expr("X"), vec![int(100), int(200), int(300)])
    );
    assert_eq!(
        first("ON X+1 GOSUB 100,200"),
        Statement::OnGosub(
            0..0,
            Expression::Add(0..0, Box::new(var_expr("X")), Box::new(int(1))),
            vec![int(100), int(200)],
        )
    );
    assert_eq!(err("ON X THEN 100"), "?SYNTAX ERROR; EXPECTED GOTO OR GOSUB");
}

#[test]
fn test_read() {
    assert_eq!(
        first("READ A,B(I)"),
        Statement::Read(
            0..0,
            vec![
                var("A"),
                Variable::Array(0..0, Ident::Plain("B".to_string()), vec![var_expr("I")]),
            ]
        )
    );
}

#[test]
fn test_renum() {
    assert_eq!(
        first("RENUM"),
        Statement::Renum(0..0, int(10), int(0), int(10))
    );
    assert_eq!(
        first("RENUM 100"),
        Statement::Renum(0..0, int(100), int(0), int(10))
    );
    assert_eq!(
        first("RENUM 100,50,20"),
        Statement::Renum(0..0, int(100), int(50), int(20))
    );
    assert_eq!(
        first("RENUM ,,100"),
        Statement::Renum(0..0, int(10), int(0), int(100))
    );
}

#[test]
fn test_restore_run() {
    assert_eq!(first("RESTORE"), Statement::Restore(0..0, int(0)));
    assert_eq!(first("RESTORE 30"), Statement::Restore(0..0, int(30)));
    assert_eq!(first("RUN"), Statement::Run(0..0, int(0)));
    assert_eq!(first("RUN 100"), Statement::Run(0..0, int(100)));
    assert_eq!(
        first(r#"RUN "GAME""#),
        Statement::Run(0..0, string("GAME"))
    );
}

#[test]
fn test_swap() {
    assert_eq!(
        first("SWAP A,B"),
        Statement::Swap(0..0, var("A"), var("B"))
    );
    assert_eq!(err("SWAP A"), "?SYNTAX ERROR; EXPECTED COMMA");
}

#[test]
fn test_while() {
    assert_eq!(
        first("WHILE I<2"),
        Statement::While(
            0..0,
            Expression::Less(0..0, Box::new(var_expr("I")), Box::new(int(2))),
        )
    );
}

#[test]
fn test_print_shorthand() {
    assert_eq!(
        first("?A"),
        Statement::Print(0..0, vec![var_expr("A"), string("\n")])
    );
}

#[test]
fn test_colon_separation() {
    assert_eq!(
        all("A=1:B=2"),
        vec![
            Statement::Let(0..0, var("A"), int(1)),
            Statement::Let(0..0, var("B"), int(2)),
        ]
    );
    assert_eq!(err("10 A=1 B=2"), "?SYNTAX ERROR IN 10:5; UNEXPECTED TOKEN");
}

#[test]
fn test_remark_ends_line() {
    assert_eq!(
        all("A=1:REM B=2:C=3"),
        vec![Statement::Let(0..0, var("A"), int(1))]
    );
    assert_eq!(
        all("A=1 'B=2"),
        vec![Statement::Let(0..0, var("A"), int(1))]
    );
}

#[test]
fn test_statements_survive_canonical_round_trip() {
    for source in &[
        "10 FOR I=1 TO 99:PRINT I:NEXT",
        "ON X GOSUB 100,200",
        "IF A THEN B=1 ELSE 200",
        "DEF FNA(X)=X*2",
        r#"INPUT ,"WHO";A$"#,
    ] {
        let line = Line::new(source);
        let again = Line::new(&line.to_string());
        assert_eq!(again.ast().expect(source), line.ast().expect(source));
    }
}
