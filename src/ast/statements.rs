use serde::{Deserialize, Serialize};

use crate::ast::expressions::Expr;
use crate::ast::types::TypeIdent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Stmt {
    Assign(AssignStmt),
    Case(CaseStmt),
    Compound(CompoundStmt),
    Empty,
    For(ForStmt),
    Goto(GotoStmt),
    If(IfStmt),
    Labelled(LabelledStmt),
    Proc(ProcStmt),
    Repeat(RepeatStmt),
    While(WhileStatement),
    With(WithStmt),
}

impl Stmt {
    pub fn assign(var: Expr, value: Expr) -> Self {
        Stmt::Assign(AssignStmt::new(None, var, value))
    }

    pub fn compound(stmts: Vec<Stmt>) -> Self {
        Stmt::Compound(CompoundStmt::new(stmts))
    }

    pub fn call(proc_name: impl Into<String>, args: Option<Vec<Expr>>) -> Self {
        Stmt::Proc(ProcStmt::new(Expr::ident(proc_name), args))
    }

    pub fn if_then(cond: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Stmt::If(IfStmt::new(cond, then_branch, else_branch))
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Stmt::Compound(_))
    }
}

/// `var := value`, optionally written through a cast: `Byte(var) := value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignStmt {
    #[serde(default)]
    pub type_conv: Option<TypeIdent>,
    pub var: Expr,
    pub value: Expr,
}

impl AssignStmt {
    pub fn new(type_conv: Option<TypeIdent>, var: Expr, value: Expr) -> Self {
        Self {
            type_conv,
            var,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStmt {
    pub selector: Expr,
    pub cases: Vec<CaseElement>,
    #[serde(default, rename = "else")]
    pub else_stmts: Option<Vec<Stmt>>,
}

impl CaseStmt {
    pub fn new(selector: Expr, cases: Vec<CaseElement>, else_stmts: Option<Vec<Stmt>>) -> Self {
        Self {
            selector,
            cases,
            else_stmts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseElement {
    pub consts: Vec<Expr>,
    pub stmt: Stmt,
}

impl CaseElement {
    pub fn new(consts: Vec<Expr>, stmt: Stmt) -> Self {
        Self { consts, stmt }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompoundStmt {
    #[serde(default)]
    pub stmts: Vec<Stmt>,
}

impl CompoundStmt {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStmt {
    pub var: String,
    pub initial: Expr,
    #[serde(default)]
    pub down: bool,
    #[serde(rename = "final")]
    pub final_value: Expr,
    pub stmt: Box<Stmt>,
}

impl ForStmt {
    pub fn new(var: impl Into<String>, initial: Expr, down: bool, final_value: Expr, stmt: Stmt) -> Self {
        Self {
            var: var.into(),
            initial,
            down,
            final_value,
            stmt: Box::new(stmt),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GotoStmt {
    pub label: String,
}

impl GotoStmt {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub cond: Expr,
    #[serde(rename = "then")]
    pub then_branch: Box<Stmt>,
    #[serde(default, rename = "else")]
    pub else_branch: Option<Box<Stmt>>,
}

impl IfStmt {
    pub fn new(cond: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Self {
            cond,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelledStmt {
    pub label: String,
    pub stmt: Box<Stmt>,
}

impl LabelledStmt {
    pub fn new(label: impl Into<String>, stmt: Stmt) -> Self {
        Self {
            label: label.into(),
            stmt: Box::new(stmt),
        }
    }
}

/// Procedure call statement. `args` is `None` when the call was written
/// without a parenthesized argument list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcStmt {
    #[serde(rename = "proc")]
    pub proc_expr: Expr,
    #[serde(default)]
    pub args: Option<Vec<Expr>>,
}

impl ProcStmt {
    pub fn new(proc_expr: Expr, args: Option<Vec<Expr>>) -> Self {
        Self { proc_expr, args }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatStmt {
    #[serde(default)]
    pub stmts: Vec<Stmt>,
    pub cond: Expr,
}

impl RepeatStmt {
    pub fn new(stmts: Vec<Stmt>, cond: Expr) -> Self {
        Self { stmts, cond }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub cond: Expr,
    pub stmt: Box<Stmt>,
}

impl WhileStatement {
    pub fn new(cond: Expr, stmt: Stmt) -> Self {
        Self {
            cond,
            stmt: Box::new(stmt),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithStmt {
    pub var: Expr,
    pub stmt: Box<Stmt>,
}

impl WithStmt {
    pub fn new(var: Expr, stmt: Stmt) -> Self {
        Self {
            var,
            stmt: Box::new(stmt),
        }
    }
}
