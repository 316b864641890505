use crate::ast::{
    AssignStmt, CaseElement, CaseStmt, CompoundStmt, ForStmt, IfStmt, ProcStmt, Stmt,
};
use crate::config::printer::STATEMENT_TERMINATOR;
use crate::errors::TpResult;
use crate::printer::expressions::{print_arg_list, print_expr, print_expr_list, print_type_conv_name};
use crate::utils::indent;

pub fn print_stmt(stmt: &Stmt) -> TpResult<String> {
    let text = match stmt {
        Stmt::Assign(s) => print_assign(s)?,
        Stmt::Case(s) => print_case(s)?,
        Stmt::Compound(s) => print_compound(s)?,
        Stmt::Empty => String::new(),
        Stmt::For(s) => print_for(s)?,
        Stmt::Goto(s) => format!("goto {}", s.label),
        Stmt::If(s) => print_if(s)?,
        Stmt::Labelled(s) => format!("{}:\n{}", s.label, print_stmt(&s.stmt)?),
        Stmt::Proc(s) => print_proc_call(s)?,
        Stmt::Repeat(s) => format!(
            "repeat\n{}\nuntil {}",
            indent(&print_stmt_list(&s.stmts)?),
            print_expr(&s.cond)?
        ),
        Stmt::While(s) => format!(
            "while {} do{}",
            print_expr(&s.cond)?,
            print_body(&s.stmt)?
        ),
        Stmt::With(s) => format!("with {} do{}", print_expr(&s.var)?, print_body(&s.stmt)?),
    };
    Ok(text)
}

/// One statement per line, each terminated by `;`. A trailing empty
/// statement is dropped instead of leaving a lone `;` line.
pub fn print_stmt_list(stmts: &[Stmt]) -> TpResult<String> {
    let mut lines = stmts
        .iter()
        .map(|stmt| Ok(format!("{}{}", print_stmt(stmt)?, STATEMENT_TERMINATOR)))
        .collect::<TpResult<Vec<_>>>()?;
    if lines.last().map(String::as_str) == Some(STATEMENT_TERMINATOR) {
        lines.pop();
    }
    Ok(lines.join("\n"))
}

pub fn print_compound(stmt: &CompoundStmt) -> TpResult<String> {
    let body = print_stmt_list(&stmt.stmts)?;
    if body.is_empty() {
        return Ok("begin\nend".to_string());
    }
    Ok(format!("begin\n{}\nend", indent(&body)))
}

// Body of if/for/while/with: a compound block stays on the header line,
// anything else goes on the next line one level deeper.
fn print_body(stmt: &Stmt) -> TpResult<String> {
    let text = print_stmt(stmt)?;
    if stmt.is_compound() {
        Ok(format!(" {}", text))
    } else {
        Ok(format!("\n{}", indent(&text)))
    }
}

fn print_if(stmt: &IfStmt) -> TpResult<String> {
    let mut text = format!(
        "if {} then{}",
        print_expr(&stmt.cond)?,
        print_body(&stmt.then_branch)?
    );
    if let Some(else_branch) = &stmt.else_branch {
        text.push(if stmt.then_branch.is_compound() { ' ' } else { '\n' });
        match &**else_branch {
            // else-if chains stay at the column of the first `if`
            Stmt::If(inner) => {
                text.push_str("else ");
                text.push_str(&print_if(inner)?);
            }
            other => {
                text.push_str("else");
                text.push_str(&print_body(other)?);
            }
        }
    }
    Ok(text)
}

fn print_for(stmt: &ForStmt) -> TpResult<String> {
    let direction = if stmt.down { "downto" } else { "to" };
    Ok(format!(
        "for {} := {} {} {} do{}",
        stmt.var,
        print_expr(&stmt.initial)?,
        direction,
        print_expr(&stmt.final_value)?,
        print_body(&stmt.stmt)?
    ))
}

fn print_assign(stmt: &AssignStmt) -> TpResult<String> {
    let var = print_expr(&stmt.var)?;
    let value = print_expr(&stmt.value)?;
    match &stmt.type_conv {
        Some(type_ident) => Ok(format!(
            "{}({}) := {}",
            print_type_conv_name(type_ident)?,
            var,
            value
        )),
        None => Ok(format!("{} := {}", var, value)),
    }
}

fn print_case(stmt: &CaseStmt) -> TpResult<String> {
    let mut text = format!("case {} of\n", print_expr(&stmt.selector)?);
    for element in &stmt.cases {
        text.push_str(&indent(&print_case_element(element)?));
        text.push_str(";\n");
    }
    if let Some(else_stmts) = &stmt.else_stmts {
        text.push_str("else\n");
        let body = print_stmt_list(else_stmts)?;
        if !body.is_empty() {
            text.push_str(&indent(&body));
            text.push('\n');
        }
    }
    text.push_str("end");
    Ok(text)
}

fn print_case_element(element: &CaseElement) -> TpResult<String> {
    Ok(format!(
        "{}: {}",
        print_expr_list(&element.consts)?,
        print_stmt(&element.stmt)?
    ))
}

fn print_proc_call(stmt: &ProcStmt) -> TpResult<String> {
    let mut text = print_expr(&stmt.proc_expr)?;
    if let Some(args) = &stmt.args {
        text.push_str(&print_arg_list(args)?);
    }
    Ok(text)
}
