use crate::ast::{
    CompoundStmt, ConstDecl, DeclPart, FuncDecl, InitDecl, ParamGroup, ProcDecl, RecordSpec, TypeSpec, VarDecl,
};
use crate::config::printer::{GROUP_SEPARATOR, LIST_SEPARATOR};
use crate::errors::{TpError, TpResult};
use crate::printer::expressions::print_expr;
use crate::printer::statements::{print_compound, print_stmt_list};
use crate::utils::{indent, write_line};

pub fn print_decl_part(part: &DeclPart) -> TpResult<String> {
    match part {
        DeclPart::Consts(d) => {
            let entries = d.decls.iter().map(print_const_decl).collect::<TpResult<Vec<_>>>()?;
            Ok(print_section("const", &entries))
        }
        DeclPart::Types(d) => {
            let entries = d
                .defs
                .iter()
                .map(|def| Ok(format!("{} = {}", def.name, print_type_spec(&def.type_spec)?)))
                .collect::<TpResult<Vec<_>>>()?;
            Ok(print_section("type", &entries))
        }
        DeclPart::Vars(d) => {
            let entries = d.decls.iter().map(print_var_decl).collect::<TpResult<Vec<_>>>()?;
            Ok(print_section("var", &entries))
        }
        DeclPart::Labels(d) => {
            let labels = required_names("label declaration", &d.labels)?;
            Ok(format!("label {};", labels))
        }
        DeclPart::Proc(d) => print_proc_decl(d),
        DeclPart::Func(d) => print_func_decl(d),
        DeclPart::Init(d) => print_init_decl(d),
    }
}

/// Declaration parts one after another, separated by newlines.
pub fn print_decl_parts(parts: &[DeclPart]) -> TpResult<String> {
    let mut texts = Vec::with_capacity(parts.len());
    for part in parts {
        log::trace!("printing declaration part {}", decl_part_kind(part));
        texts.push(print_decl_part(part)?);
    }
    Ok(texts.join("\n"))
}

fn decl_part_kind(part: &DeclPart) -> &'static str {
    match part {
        DeclPart::Consts(_) => "const",
        DeclPart::Types(_) => "type",
        DeclPart::Vars(_) => "var",
        DeclPart::Labels(_) => "label",
        DeclPart::Proc(_) => "procedure",
        DeclPart::Func(_) => "function",
        DeclPart::Init(_) => "initialization",
    }
}

// Header word, then one indented `entry;` per line
fn print_section(header: &str, entries: &[String]) -> String {
    let mut text = header.to_string();
    for entry in entries {
        text.push('\n');
        text.push_str(&indent(&format!("{};", entry)));
    }
    text
}

fn required_names(node: &'static str, names: &[String]) -> TpResult<String> {
    if names.is_empty() {
        return Err(TpError::contract_violation(node, "empty name list"));
    }
    Ok(names.join(LIST_SEPARATOR))
}

fn print_const_decl(decl: &ConstDecl) -> TpResult<String> {
    match &decl.type_spec {
        Some(type_spec) => Ok(format!(
            "{}: {} = {}",
            decl.name,
            print_type_spec(type_spec)?,
            print_expr(&decl.value)?
        )),
        None => Ok(format!("{} = {}", decl.name, print_expr(&decl.value)?)),
    }
}

fn print_var_decl(decl: &VarDecl) -> TpResult<String> {
    Ok(format!(
        "{}: {}",
        required_names("var declaration", &decl.names)?,
        print_type_spec(&decl.type_spec)?
    ))
}

fn print_param_group(group: &ParamGroup) -> TpResult<String> {
    let prefix = if group.is_var { "var " } else { "" };
    Ok(format!(
        "{}{}: {}",
        prefix,
        required_names("parameter group", &group.names)?,
        group.type_ident.name
    ))
}

/// `(a, b: Integer; var c: Integer)`, or nothing at all without parameters.
pub fn print_params(params: &[ParamGroup]) -> TpResult<String> {
    if params.is_empty() {
        return Ok(String::new());
    }
    let groups = params.iter().map(print_param_group).collect::<TpResult<Vec<_>>>()?;
    Ok(format!("({})", groups.join(GROUP_SEPARATOR)))
}

pub fn print_type_spec(spec: &TypeSpec) -> TpResult<String> {
    let text = match spec {
        TypeSpec::Func(s) => format!("function{}: {}", print_params(&s.params)?, s.result.name),
        TypeSpec::Proc(s) => format!("procedure{}", print_params(&s.params)?),
        TypeSpec::Scalar(s) => format!("({})", required_names("scalar type", &s.names)?),
        TypeSpec::Ident(s) => s.type_ident.name.clone(),
        TypeSpec::String(s) => format!("string[{}]", s.size),
        TypeSpec::Array(s) => format!(
            "array[{} .. {}] of {}",
            print_expr(&s.min)?,
            print_expr(&s.max)?,
            print_type_spec(&s.of)?
        ),
        TypeSpec::Record(s) => print_record_spec(s)?,
        TypeSpec::File(s) => match &s.of {
            Some(of) => format!("file of {}", print_type_spec(of)?),
            None => "file".to_string(),
        },
        TypeSpec::Pointer(s) => format!("^{}", s.type_ident.name),
    };
    Ok(text)
}

fn print_record_spec(spec: &RecordSpec) -> TpResult<String> {
    let mut text = String::from("record\n");
    for section in &spec.sections {
        let line = format!(
            "{}: {};",
            required_names("record section", &section.names)?,
            print_type_spec(&section.type_spec)?
        );
        text.push_str(&indent(&line));
        text.push('\n');
    }
    text.push_str("end");
    Ok(text)
}

// Nested declarations and body, both indented under the signature line
fn print_routine_tail(
    buf: &mut String,
    decls: &[DeclPart],
    body: Option<&CompoundStmt>,
) -> TpResult<()> {
    if !decls.is_empty() {
        write_line(buf, format_args!("\n{}", indent(&print_decl_parts(decls)?)))?;
    }
    if let Some(body) = body {
        write_line(buf, format_args!("\n{};\n", indent(&print_compound(body)?)))?;
    }
    Ok(())
}

fn print_proc_decl(decl: &ProcDecl) -> TpResult<String> {
    let mut text = String::new();
    write_line(&mut text, format_args!("procedure {}{};", decl.name, print_params(&decl.params)?))?;
    print_routine_tail(&mut text, &decl.decls, decl.stmt.as_ref())?;
    Ok(text)
}

fn print_func_decl(decl: &FuncDecl) -> TpResult<String> {
    let mut text = String::new();
    write_line(
        &mut text,
        format_args!(
            "function {}{}: {};",
            decl.name,
            print_params(&decl.params)?,
            decl.result.name
        ),
    )?;
    print_routine_tail(&mut text, &decl.decls, decl.stmt.as_ref())?;
    Ok(text)
}

fn print_init_decl(decl: &InitDecl) -> TpResult<String> {
    let mut text = String::from("initialization");
    let inits = print_stmt_list(&decl.inits)?;
    if !inits.is_empty() {
        write_line(&mut text, format_args!("\n{}", indent(&inits)))?;
    }
    text.push_str("\nfinalization");
    let finits = print_stmt_list(&decl.finits)?;
    if !finits.is_empty() {
        write_line(&mut text, format_args!("\n{}", indent(&finits)))?;
    }
    Ok(text)
}
