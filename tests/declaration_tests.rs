use tpfmt::ast::*;
use tpfmt::errors::{TpError, TpResult};
use tpfmt::printer::{print_decl_part, print_type_spec};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn integer() -> TypeIdent {
    TypeIdent::new("Integer")
}

#[test]
fn test_procedure_without_parameters() -> TpResult<()> {
    let decl = DeclPart::Proc(ProcDecl::new("Foo", vec![], vec![], None));
    assert_eq!(print_decl_part(&decl)?, "procedure Foo;");
    Ok(())
}

#[test]
fn test_procedure_with_parameter_groups() -> TpResult<()> {
    let params = vec![
        ParamGroup::new(false, names(&["a", "b"]), integer()),
        ParamGroup::new(true, names(&["c"]), integer()),
    ];
    let decl = DeclPart::Proc(ProcDecl::new("Foo", params, vec![], None));
    assert_eq!(print_decl_part(&decl)?, "procedure Foo(a, b: Integer; var c: Integer);");
    Ok(())
}

#[test]
fn test_procedure_with_locals_and_body() -> TpResult<()> {
    let locals = vec![DeclPart::Vars(VarDecls::new(vec![VarDecl::new(
        names(&["i"]),
        TypeSpec::named("Integer"),
    )]))];
    let body = CompoundStmt::new(vec![Stmt::assign(Expr::ident("i"), Expr::int(0))]);
    let decl = DeclPart::Proc(ProcDecl::new("Reset", vec![], locals, Some(body)));
    let expected = "procedure Reset;\n    var\n        i: Integer;\n    begin\n        i := 0;\n    end;\n";
    assert_eq!(print_decl_part(&decl)?, expected);
    Ok(())
}

#[test]
fn test_function_signature_and_body() -> TpResult<()> {
    let params = vec![ParamGroup::new(false, names(&["x"]), integer())];
    let body = CompoundStmt::new(vec![Stmt::assign(
        Expr::ident("Square"),
        Expr::binary(Expr::ident("x"), tpfmt::token::Token::Star, Expr::ident("x")),
    )]);
    let decl = DeclPart::Func(FuncDecl::new("Square", params, integer(), vec![], Some(body)));
    let expected = "function Square(x: Integer): Integer;\n    begin\n        Square := x * x;\n    end;\n";
    assert_eq!(print_decl_part(&decl)?, expected);

    let forward = DeclPart::Func(FuncDecl::new("Now", vec![], TypeIdent::new("Longint"), vec![], None));
    assert_eq!(print_decl_part(&forward)?, "function Now: Longint;");
    Ok(())
}

#[test]
fn test_const_section() -> TpResult<()> {
    let decl = DeclPart::Consts(ConstDecls::new(vec![
        ConstDecl::new("Max", None, Expr::int(100)),
        ConstDecl::new("Name", Some(TypeSpec::String(StringSpec::new(10))), Expr::string("pas")),
        ConstDecl::new("Mask", None, Expr::Const(ConstExpr::hex(15))),
    ]));
    let expected = "const\n    Max = 100;\n    Name: string[10] = 'pas';\n    Mask = $0F;";
    assert_eq!(print_decl_part(&decl)?, expected);
    Ok(())
}

#[test]
fn test_type_section() -> TpResult<()> {
    let decl = DeclPart::Types(TypeDefs::new(vec![
        TypeDef::new("TColor", TypeSpec::Scalar(ScalarSpec::new(names(&["Red", "Green", "Blue"])))),
        TypeDef::new("PNode", TypeSpec::Pointer(PointerSpec::new(TypeIdent::new("TNode")))),
        TypeDef::new(
            "TGrid",
            TypeSpec::Array(ArraySpec::new(Expr::int(1), Expr::int(8), TypeSpec::named("Byte"))),
        ),
    ]));
    let expected = "type\n    TColor = (Red, Green, Blue);\n    PNode = ^TNode;\n    TGrid = array[1 .. 8] of Byte;";
    assert_eq!(print_decl_part(&decl)?, expected);
    Ok(())
}

#[test]
fn test_record_type_inside_type_section() -> TpResult<()> {
    let record = TypeSpec::Record(RecordSpec::new(vec![
        RecordSection::new(names(&["x", "y"]), TypeSpec::named("Integer")),
        RecordSection::new(names(&["next"]), TypeSpec::named("PNode")),
    ]));
    assert_eq!(
        print_type_spec(&record)?,
        "record\n    x, y: Integer;\n    next: PNode;\nend"
    );
    let decl = DeclPart::Types(TypeDefs::new(vec![TypeDef::new("TNode", record)]));
    assert_eq!(
        print_decl_part(&decl)?,
        "type\n    TNode = record\n        x, y: Integer;\n        next: PNode;\n    end;"
    );
    Ok(())
}

#[test]
fn test_file_and_procedural_types() -> TpResult<()> {
    assert_eq!(print_type_spec(&TypeSpec::File(FileSpec::new(None)))?, "file");
    assert_eq!(
        print_type_spec(&TypeSpec::File(FileSpec::new(Some(TypeSpec::named("Char")))))?,
        "file of Char"
    );
    assert_eq!(print_type_spec(&TypeSpec::Proc(ProcSpec::new(vec![])))?, "procedure");
    let func = TypeSpec::Func(FuncSpec::new(
        vec![ParamGroup::new(false, names(&["a", "b"]), integer())],
        TypeIdent::new("Boolean"),
    ));
    assert_eq!(print_type_spec(&func)?, "function(a, b: Integer): Boolean");
    Ok(())
}

#[test]
fn test_var_section_groups_names() -> TpResult<()> {
    let decl = DeclPart::Vars(VarDecls::new(vec![
        VarDecl::new(names(&["i", "j", "k"]), TypeSpec::named("Integer")),
        VarDecl::new(names(&["f"]), TypeSpec::File(FileSpec::new(None))),
    ]));
    assert_eq!(print_decl_part(&decl)?, "var\n    i, j, k: Integer;\n    f: file;");
    Ok(())
}

#[test]
fn test_label_section() -> TpResult<()> {
    let decl = DeclPart::Labels(LabelDecls::new(names(&["1", "99", "Done"])));
    assert_eq!(print_decl_part(&decl)?, "label 1, 99, Done;");
    Ok(())
}

#[test]
fn test_init_section() -> TpResult<()> {
    let init = DeclPart::Init(InitDecl::new(
        vec![Stmt::assign(Expr::ident("Count"), Expr::int(0))],
        vec![Stmt::call("Close", Some(vec![Expr::ident("Log")]))],
    ));
    assert_eq!(
        print_decl_part(&init)?,
        "initialization\n    Count := 0;\nfinalization\n    Close(Log);"
    );

    let init_only = DeclPart::Init(InitDecl::new(vec![Stmt::call("Setup", None)], vec![]));
    assert_eq!(print_decl_part(&init_only)?, "initialization\n    Setup;\nfinalization");
    Ok(())
}

#[test]
fn test_empty_name_lists_are_rejected() {
    let decl = DeclPart::Vars(VarDecls::new(vec![VarDecl::new(vec![], TypeSpec::named("Integer"))]));
    assert!(matches!(
        print_decl_part(&decl),
        Err(TpError::ContractViolation { node: "var declaration", .. })
    ));

    let decl = DeclPart::Proc(ProcDecl::new(
        "Foo",
        vec![ParamGroup::new(true, vec![], integer())],
        vec![],
        None,
    ));
    assert!(matches!(
        print_decl_part(&decl),
        Err(TpError::ContractViolation { node: "parameter group", .. })
    ));

    let decl = DeclPart::Labels(LabelDecls::new(vec![]));
    assert!(print_decl_part(&decl).is_err());
}

#[test]
fn test_empty_scalar_type_is_rejected() {
    let scalar = TypeSpec::Scalar(ScalarSpec::new(vec![]));
    assert!(matches!(
        print_type_spec(&scalar),
        Err(TpError::ContractViolation { node: "scalar type", .. })
    ));
}

#[test]
fn test_record_section_without_names_is_rejected() {
    let record = TypeSpec::Record(RecordSpec::new(vec![
        RecordSection::new(names(&["x"]), TypeSpec::named("Integer")),
        RecordSection::new(vec![], TypeSpec::named("Integer")),
    ]));
    assert!(matches!(
        print_type_spec(&record),
        Err(TpError::ContractViolation { node: "record section", .. })
    ));
}
