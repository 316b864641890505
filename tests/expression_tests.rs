use tpfmt::ast::*;
use tpfmt::errors::{TpError, TpResult};
use tpfmt::printer::print_expr;
use tpfmt::token::Token;

#[test]
fn test_symbolic_binary_operator() -> TpResult<()> {
    let expr = Expr::binary(Expr::ident("a"), Token::Plus, Expr::int(1));
    assert_eq!(print_expr(&expr)?, "a + 1");
    let expr = Expr::binary(Expr::ident("x"), Token::NotEquals, Expr::ident("y"));
    assert_eq!(print_expr(&expr)?, "x <> y");
    Ok(())
}

#[test]
fn test_keyword_binary_operators_are_lowercased() -> TpResult<()> {
    let cases = [
        (Token::And, "a and b"),
        (Token::Or, "a or b"),
        (Token::Div, "a div b"),
        (Token::Mod, "a mod b"),
        (Token::Shl, "a shl b"),
        (Token::Shr, "a shr b"),
        (Token::In, "a in b"),
        (Token::Xor, "a xor b"),
    ];
    for (op, expected) in cases {
        let expr = Expr::binary(Expr::ident("a"), op, Expr::ident("b"));
        assert_eq!(print_expr(&expr)?, expected);
    }
    Ok(())
}

#[test]
fn test_unary_operators() -> TpResult<()> {
    assert_eq!(print_expr(&Expr::unary(Token::Minus, Expr::ident("x")))?, "-x");
    assert_eq!(print_expr(&Expr::unary(Token::Plus, Expr::int(3)))?, "+3");
    assert_eq!(print_expr(&Expr::unary(Token::Not, Expr::ident("done")))?, "not done");
    Ok(())
}

#[test]
fn test_address_of_uses_fixed_prefix() -> TpResult<()> {
    let expr = Expr::At(AtExpr::new(Expr::ident("buffer")));
    assert_eq!(print_expr(&expr)?, "@buffer");
    Ok(())
}

#[test]
fn test_non_operator_token_is_rejected() {
    let expr = Expr::binary(Expr::ident("a"), Token::Begin, Expr::ident("b"));
    assert!(matches!(
        print_expr(&expr),
        Err(TpError::ContractViolation { node: "binary expression", .. })
    ));
    let expr = Expr::unary(Token::Div, Expr::ident("a"));
    assert!(matches!(
        print_expr(&expr),
        Err(TpError::ContractViolation { node: "unary expression", .. })
    ));
}

#[test]
fn test_composite_literals() -> TpResult<()> {
    let set = Expr::Set(SetExpr::new(vec![
        Expr::int(1),
        Expr::Range(RangeExpr::new(Expr::int(3), Expr::int(5))),
    ]));
    assert_eq!(print_expr(&set)?, "[1, 3 .. 5]");

    let array = Expr::ConstArray(ConstArrayExpr::new(vec![Expr::int(1), Expr::int(2), Expr::int(3)]));
    assert_eq!(print_expr(&array)?, "(1, 2, 3)");

    let record = Expr::ConstRecord(ConstRecordExpr::new(vec![
        ConstField::new("x", Expr::int(1)),
        ConstField::new("y", Expr::int(2)),
    ]));
    assert_eq!(print_expr(&record)?, "(x: 1; y: 2)");

    assert_eq!(print_expr(&Expr::Set(SetExpr::new(vec![])))?, "[]");
    Ok(())
}

#[test]
fn test_access_shapes() -> TpResult<()> {
    let field = Expr::Dot(DotExpr::new(Expr::ident("p"), "x"));
    assert_eq!(print_expr(&field)?, "p.x");

    let index = Expr::Index(IndexExpr::new(Expr::ident("a"), Expr::binary(Expr::ident("i"), Token::Minus, Expr::int(1))));
    assert_eq!(print_expr(&index)?, "a[i - 1]");

    let deref = Expr::Pointer(PointerExpr::new(Expr::ident("node")));
    let next = Expr::Dot(DotExpr::new(deref, "next"));
    assert_eq!(print_expr(&next)?, "node^.next");

    let paren = Expr::binary(
        Expr::Paren(ParenExpr::new(Expr::binary(Expr::ident("a"), Token::Plus, Expr::ident("b")))),
        Token::Star,
        Expr::ident("c"),
    );
    assert_eq!(print_expr(&paren)?, "(a + b) * c");
    Ok(())
}

#[test]
fn test_function_call_always_has_parentheses() -> TpResult<()> {
    let call = Expr::call(Expr::ident("Max"), vec![Expr::ident("a"), Expr::ident("b")]);
    assert_eq!(print_expr(&call)?, "Max(a, b)");
    let call = Expr::call(Expr::ident("Random"), vec![]);
    assert_eq!(print_expr(&call)?, "Random()");
    Ok(())
}

#[test]
fn test_type_conversion_normalizes_case() -> TpResult<()> {
    let conv = Expr::TypeConv(TypeConvExpr::new(TypeIdent::new("BYTE"), Expr::ident("c")));
    assert_eq!(print_expr(&conv)?, "Byte(c)");
    let conv = Expr::TypeConv(TypeConvExpr::new(TypeIdent::new("longInt"), Expr::int(1)));
    assert_eq!(print_expr(&conv)?, "Longint(1)");
    Ok(())
}

#[test]
fn test_empty_type_conversion_name_is_rejected() {
    let conv = Expr::TypeConv(TypeConvExpr::new(TypeIdent::new(""), Expr::ident("c")));
    assert!(matches!(
        print_expr(&conv),
        Err(TpError::ContractViolation { node: "type conversion", .. })
    ));
}

#[test]
fn test_width_annotation() -> TpResult<()> {
    let width = Expr::Width(WidthExpr::new(Expr::ident("total"), Expr::int(8)));
    assert_eq!(print_expr(&width)?, "total:8");
    let nested = Expr::Width(WidthExpr::new(width, Expr::int(2)));
    assert_eq!(print_expr(&nested)?, "total:8:2");
    Ok(())
}

#[test]
fn test_constants_inside_expressions() -> TpResult<()> {
    let expr = Expr::binary(
        Expr::Const(ConstExpr::hex(255)),
        Token::And,
        Expr::Const(ConstExpr::float(2.0)),
    );
    assert_eq!(print_expr(&expr)?, "$FF and 2.0");
    assert_eq!(print_expr(&Expr::string("it's"))?, "'it''s'");
    assert_eq!(print_expr(&Expr::Const(ConstExpr::nil()))?, "nil");
    Ok(())
}

#[test]
fn test_empty_identifier_is_rejected() {
    assert!(matches!(
        print_expr(&Expr::ident("")),
        Err(TpError::ContractViolation { node: "identifier", .. })
    ));
    let nested = Expr::binary(Expr::ident("a"), Token::Plus, Expr::ident(""));
    assert!(matches!(
        print_expr(&nested),
        Err(TpError::ContractViolation { node: "identifier", .. })
    ));
}
