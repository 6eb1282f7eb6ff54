use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_tokens_advance_and_carry_line() {
    let interner = StringInterner::new();
    let mut b = AstBuilder::new(&interner);

    let first = b.token(TokenKind::Identifier, "abc");
    b.at_line(4);
    let second = b.token(TokenKind::Plus, "+");

    assert_eq!(first.span, Span::new(0, 3));
    assert_eq!(first.line, 1);
    assert_eq!(second.span, Span::new(4, 5));
    assert_eq!(second.line, 4);
    assert_eq!(interner.lookup(first.lexeme), "abc");
}

#[test]
fn test_binary_records_operator_token() {
    let interner = StringInterner::new();
    let mut b = AstBuilder::new(&interner);

    let one = b.number(1.0);
    let two = b.number(2.0);
    let sum = b.binary(one, BinaryOp::Add, two);
    let stmt = b.print(sum);
    let program = b.finish([stmt]);

    let ExprKind::Binary { op, operator, .. } = program.arena[sum].kind else {
        panic!("expected binary expression");
    };
    assert_eq!(op, BinaryOp::Add);
    assert_eq!(operator.kind, TokenKind::Plus);
    assert_eq!(interner.lookup(operator.lexeme), "+");
    assert_eq!(program.statements(), &[stmt]);
}

#[test]
fn test_function_declaration_layout() {
    let interner = StringInterner::new();
    let mut b = AstBuilder::new(&interner);

    let a = b.variable("a");
    let ret = b.return_stmt(Some(a));
    let fun = b.function("id", &["a"], [ret]);
    let program = b.finish([fun]);

    let StmtKind::Function(id) = program.arena[fun].kind else {
        panic!("expected function statement");
    };
    let decl = program.arena.get_function(id);
    assert_eq!(interner.lookup(decl.name.lexeme), "id");
    assert_eq!(decl.arity(), 1);
    assert_eq!(interner.lookup(decl.params[0].lexeme), "a");
    assert_eq!(program.arena.get_stmt_list(decl.body), &[ret]);
}

#[test]
fn test_call_arguments_in_order() {
    let interner = StringInterner::new();
    let mut b = AstBuilder::new(&interner);

    let callee = b.variable("f");
    let x = b.number(1.0);
    let y = b.string("two");
    let call = b.call(callee, [x, y]);
    let stmt = b.expression(call);
    let program = b.finish([stmt]);

    let ExprKind::Call { args, paren, .. } = program.arena[call].kind else {
        panic!("expected call expression");
    };
    assert_eq!(program.arena.get_expr_list(args), &[x, y]);
    assert_eq!(paren.kind, TokenKind::RightParen);
}
