use serde::{Deserialize, Serialize};

use crate::ast::expressions::Expr;

/// Reference to a named type, e.g. `Integer` or `TPoint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeIdent {
    pub name: String,
}

impl TypeIdent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One group of formal parameters sharing a type: `var a, b: Integer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamGroup {
    #[serde(default)]
    pub is_var: bool,
    pub names: Vec<String>,
    #[serde(rename = "type")]
    pub type_ident: TypeIdent,
}

impl ParamGroup {
    pub fn new(is_var: bool, names: Vec<String>, type_ident: TypeIdent) -> Self {
        Self {
            is_var,
            names,
            type_ident,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TypeSpec {
    Func(FuncSpec),
    Proc(ProcSpec),
    Scalar(ScalarSpec),
    Ident(IdentSpec),
    String(StringSpec),
    Array(ArraySpec),
    Record(RecordSpec),
    File(FileSpec),
    Pointer(PointerSpec),
}

impl TypeSpec {
    pub fn named(name: impl Into<String>) -> Self {
        TypeSpec::Ident(IdentSpec::new(TypeIdent::new(name)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncSpec {
    #[serde(default)]
    pub params: Vec<ParamGroup>,
    pub result: TypeIdent,
}

impl FuncSpec {
    pub fn new(params: Vec<ParamGroup>, result: TypeIdent) -> Self {
        Self { params, result }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcSpec {
    #[serde(default)]
    pub params: Vec<ParamGroup>,
}

impl ProcSpec {
    pub fn new(params: Vec<ParamGroup>) -> Self {
        Self { params }
    }
}

/// Enumerated type, `(Red, Green, Blue)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarSpec {
    pub names: Vec<String>,
}

impl ScalarSpec {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentSpec {
    #[serde(rename = "type")]
    pub type_ident: TypeIdent,
}

impl IdentSpec {
    pub fn new(type_ident: TypeIdent) -> Self {
        Self { type_ident }
    }
}

/// `string[size]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringSpec {
    pub size: u32,
}

impl StringSpec {
    pub fn new(size: u32) -> Self {
        Self { size }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArraySpec {
    pub min: Expr,
    pub max: Expr,
    pub of: Box<TypeSpec>,
}

impl ArraySpec {
    pub fn new(min: Expr, max: Expr, of: TypeSpec) -> Self {
        Self {
            min,
            max,
            of: Box::new(of),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSpec {
    pub sections: Vec<RecordSection>,
}

impl RecordSpec {
    pub fn new(sections: Vec<RecordSection>) -> Self {
        Self { sections }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSection {
    pub names: Vec<String>,
    #[serde(rename = "type")]
    pub type_spec: TypeSpec,
}

impl RecordSection {
    pub fn new(names: Vec<String>, type_spec: TypeSpec) -> Self {
        Self { names, type_spec }
    }
}

/// `file` or `file of T`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSpec {
    #[serde(default)]
    pub of: Option<Box<TypeSpec>>,
}

impl FileSpec {
    pub fn new(of: Option<TypeSpec>) -> Self {
        Self { of: of.map(Box::new) }
    }
}

/// `^T`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerSpec {
    #[serde(rename = "type")]
    pub type_ident: TypeIdent,
}

impl PointerSpec {
    pub fn new(type_ident: TypeIdent) -> Self {
        Self { type_ident }
    }
}
