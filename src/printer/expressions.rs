use crate::ast::{ConstField, Expr, TypeIdent};
use crate::config::printer::{GROUP_SEPARATOR, LIST_SEPARATOR};
use crate::errors::{TpError, TpResult};
use crate::printer::literals::format_const;
use crate::token::Token;
use crate::utils::capitalize_type_name;

pub fn print_expr(expr: &Expr) -> TpResult<String> {
    let text = match expr {
        Expr::At(e) => format!("@{}", print_expr(&e.expr)?),
        Expr::Binary(e) => {
            if !e.op.is_binary_operator() {
                return Err(TpError::contract_violation(
                    "binary expression",
                    format!("'{}' is not a binary operator", e.op),
                ));
            }
            format!(
                "{} {} {}",
                print_expr(&e.left)?,
                operator_text(e.op),
                print_expr(&e.right)?
            )
        }
        Expr::Const(e) => format_const(e)?,
        Expr::ConstArray(e) => format!("({})", print_expr_list(&e.values)?),
        Expr::ConstRecord(e) => {
            let fields = e
                .fields
                .iter()
                .map(print_const_field)
                .collect::<TpResult<Vec<_>>>()?;
            format!("({})", fields.join(GROUP_SEPARATOR))
        }
        Expr::Dot(e) => format!("{}.{}", print_expr(&e.record)?, e.field),
        Expr::Func(e) => format!("{}{}", print_expr(&e.func)?, print_arg_list(&e.args)?),
        Expr::Ident(e) => {
            if e.name.is_empty() {
                return Err(TpError::contract_violation("identifier", "empty name"));
            }
            e.name.clone()
        }
        Expr::Index(e) => format!("{}[{}]", print_expr(&e.array)?, print_expr(&e.index)?),
        Expr::Paren(e) => format!("({})", print_expr(&e.expr)?),
        Expr::Pointer(e) => format!("{}^", print_expr(&e.expr)?),
        Expr::Range(e) => format!("{} .. {}", print_expr(&e.min)?, print_expr(&e.max)?),
        Expr::Set(e) => format!("[{}]", print_expr_list(&e.values)?),
        Expr::TypeConv(e) => format!(
            "{}({})",
            print_type_conv_name(&e.type_ident)?,
            print_expr(&e.expr)?
        ),
        Expr::Unary(e) => {
            if !e.op.is_unary_operator() {
                return Err(TpError::contract_violation(
                    "unary expression",
                    format!("'{}' is not a unary operator", e.op),
                ));
            }
            let operand = print_expr(&e.expr)?;
            if e.op.is_keyword() {
                format!("{} {}", operator_text(e.op), operand)
            } else {
                format!("{}{}", operator_text(e.op), operand)
            }
        }
        Expr::Width(e) => format!("{}:{}", print_expr(&e.expr)?, print_expr(&e.width)?),
    };
    Ok(text)
}

// Keyword operators print in lowercase, symbols as stored
fn operator_text(op: Token) -> String {
    if op.is_keyword() {
        op.spelling().to_lowercase()
    } else {
        op.spelling().to_string()
    }
}

fn print_const_field(field: &ConstField) -> TpResult<String> {
    Ok(format!("{}: {}", field.name, print_expr(&field.value)?))
}

/// Comma-joined expressions, no brackets.
pub fn print_expr_list(exprs: &[Expr]) -> TpResult<String> {
    let items = exprs.iter().map(print_expr).collect::<TpResult<Vec<_>>>()?;
    Ok(items.join(LIST_SEPARATOR))
}

/// Parenthesized argument list, `(a, b)`.
pub fn print_arg_list(args: &[Expr]) -> TpResult<String> {
    Ok(format!("({})", print_expr_list(args)?))
}

/// Type name used as a conversion, normalized to `Leading` case.
pub fn print_type_conv_name(type_ident: &TypeIdent) -> TpResult<String> {
    capitalize_type_name(&type_ident.name)
        .ok_or_else(|| TpError::contract_violation("type conversion", "empty type name"))
}
