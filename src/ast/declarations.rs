use serde::{Deserialize, Serialize};

use crate::ast::expressions::Expr;
use crate::ast::statements::{CompoundStmt, Stmt};
use crate::ast::types::{ParamGroup, TypeIdent, TypeSpec};

/// One section of a declaration part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DeclPart {
    Consts(ConstDecls),
    Types(TypeDefs),
    Vars(VarDecls),
    Labels(LabelDecls),
    Proc(ProcDecl),
    Func(FuncDecl),
    Init(InitDecl),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstDecls {
    pub decls: Vec<ConstDecl>,
}

impl ConstDecls {
    pub fn new(decls: Vec<ConstDecl>) -> Self {
        Self { decls }
    }
}

/// `name = value` or, for typed constants, `name: Type = value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstDecl {
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_spec: Option<TypeSpec>,
    pub value: Expr,
}

impl ConstDecl {
    pub fn new(name: impl Into<String>, type_spec: Option<TypeSpec>, value: Expr) -> Self {
        Self {
            name: name.into(),
            type_spec,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefs {
    pub defs: Vec<TypeDef>,
}

impl TypeDefs {
    pub fn new(defs: Vec<TypeDef>) -> Self {
        Self { defs }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,
    #[serde(rename = "type")]
    pub type_spec: TypeSpec,
}

impl TypeDef {
    pub fn new(name: impl Into<String>, type_spec: TypeSpec) -> Self {
        Self {
            name: name.into(),
            type_spec,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecls {
    pub decls: Vec<VarDecl>,
}

impl VarDecls {
    pub fn new(decls: Vec<VarDecl>) -> Self {
        Self { decls }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    pub names: Vec<String>,
    #[serde(rename = "type")]
    pub type_spec: TypeSpec,
}

impl VarDecl {
    pub fn new(names: Vec<String>, type_spec: TypeSpec) -> Self {
        Self { names, type_spec }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDecls {
    pub labels: Vec<String>,
}

impl LabelDecls {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }
}

/// Procedure declaration. A missing body marks a forward or interface
/// declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcDecl {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParamGroup>,
    #[serde(default)]
    pub decls: Vec<DeclPart>,
    #[serde(default)]
    pub stmt: Option<CompoundStmt>,
}

impl ProcDecl {
    pub fn new(
        name: impl Into<String>,
        params: Vec<ParamGroup>,
        decls: Vec<DeclPart>,
        stmt: Option<CompoundStmt>,
    ) -> Self {
        Self {
            name: name.into(),
            params,
            decls,
            stmt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDecl {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParamGroup>,
    pub result: TypeIdent,
    #[serde(default)]
    pub decls: Vec<DeclPart>,
    #[serde(default)]
    pub stmt: Option<CompoundStmt>,
}

impl FuncDecl {
    pub fn new(
        name: impl Into<String>,
        params: Vec<ParamGroup>,
        result: TypeIdent,
        decls: Vec<DeclPart>,
        stmt: Option<CompoundStmt>,
    ) -> Self {
        Self {
            name: name.into(),
            params,
            result,
            decls,
            stmt,
        }
    }
}

/// `initialization ... finalization ...` section of a unit
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InitDecl {
    #[serde(default)]
    pub inits: Vec<Stmt>,
    #[serde(default)]
    pub finits: Vec<Stmt>,
}

impl InitDecl {
    pub fn new(inits: Vec<Stmt>, finits: Vec<Stmt>) -> Self {
        Self { inits, finits }
    }
}
