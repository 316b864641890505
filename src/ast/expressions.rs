use serde::{Deserialize, Serialize};

use crate::ast::literals::ConstExpr;
use crate::ast::types::TypeIdent;
use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expr {
    At(AtExpr),
    Binary(BinaryExpr),
    Const(ConstExpr),
    ConstArray(ConstArrayExpr),
    ConstRecord(ConstRecordExpr),
    Dot(DotExpr),
    Func(FuncExpr),
    Ident(IdentExpr),
    Index(IndexExpr),
    Paren(ParenExpr),
    Pointer(PointerExpr),
    Range(RangeExpr),
    Set(SetExpr),
    TypeConv(TypeConvExpr),
    Unary(UnaryExpr),
    Width(WidthExpr),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(IdentExpr::new(name))
    }

    pub fn int(value: i64) -> Self {
        Expr::Const(ConstExpr::integer(value))
    }

    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        Expr::Const(ConstExpr::string(bytes))
    }

    pub fn binary(left: Expr, op: Token, right: Expr) -> Self {
        Expr::Binary(BinaryExpr::new(left, op, right))
    }

    pub fn unary(op: Token, expr: Expr) -> Self {
        Expr::Unary(UnaryExpr::new(op, expr))
    }

    pub fn call(func: Expr, args: Vec<Expr>) -> Self {
        Expr::Func(FuncExpr::new(func, args))
    }
}

/// `@expr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtExpr {
    pub expr: Box<Expr>,
}

impl AtExpr {
    pub fn new(expr: Expr) -> Self {
        Self { expr: Box::new(expr) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: Token,
    pub right: Box<Expr>,
}

impl BinaryExpr {
    pub fn new(left: Expr, op: Token, right: Expr) -> Self {
        Self {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

/// Typed constant array, `(1, 2, 3)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstArrayExpr {
    pub values: Vec<Expr>,
}

impl ConstArrayExpr {
    pub fn new(values: Vec<Expr>) -> Self {
        Self { values }
    }
}

/// Typed constant record, `(x: 1; y: 2)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstRecordExpr {
    pub fields: Vec<ConstField>,
}

impl ConstRecordExpr {
    pub fn new(fields: Vec<ConstField>) -> Self {
        Self { fields }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstField {
    pub name: String,
    pub value: Expr,
}

impl ConstField {
    pub fn new(name: impl Into<String>, value: Expr) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotExpr {
    pub record: Box<Expr>,
    pub field: String,
}

impl DotExpr {
    pub fn new(record: Expr, field: impl Into<String>) -> Self {
        Self {
            record: Box::new(record),
            field: field.into(),
        }
    }
}

/// Function call inside an expression. The argument list is always rendered,
/// even when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncExpr {
    pub func: Box<Expr>,
    pub args: Vec<Expr>,
}

impl FuncExpr {
    pub fn new(func: Expr, args: Vec<Expr>) -> Self {
        Self {
            func: Box::new(func),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentExpr {
    pub name: String,
}

impl IdentExpr {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpr {
    pub array: Box<Expr>,
    pub index: Box<Expr>,
}

impl IndexExpr {
    pub fn new(array: Expr, index: Expr) -> Self {
        Self {
            array: Box::new(array),
            index: Box::new(index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenExpr {
    pub expr: Box<Expr>,
}

impl ParenExpr {
    pub fn new(expr: Expr) -> Self {
        Self { expr: Box::new(expr) }
    }
}

/// Pointer dereference, `expr^`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerExpr {
    pub expr: Box<Expr>,
}

impl PointerExpr {
    pub fn new(expr: Expr) -> Self {
        Self { expr: Box::new(expr) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeExpr {
    pub min: Box<Expr>,
    pub max: Box<Expr>,
}

impl RangeExpr {
    pub fn new(min: Expr, max: Expr) -> Self {
        Self {
            min: Box::new(min),
            max: Box::new(max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetExpr {
    pub values: Vec<Expr>,
}

impl SetExpr {
    pub fn new(values: Vec<Expr>) -> Self {
        Self { values }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeConvExpr {
    #[serde(rename = "type")]
    pub type_ident: TypeIdent,
    pub expr: Box<Expr>,
}

impl TypeConvExpr {
    pub fn new(type_ident: TypeIdent, expr: Expr) -> Self {
        Self {
            type_ident,
            expr: Box::new(expr),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: Token,
    pub expr: Box<Expr>,
}

impl UnaryExpr {
    pub fn new(op: Token, expr: Expr) -> Self {
        Self {
            op,
            expr: Box::new(expr),
        }
    }
}

/// Field-width annotation in write/writeln arguments, `value:width`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidthExpr {
    pub expr: Box<Expr>,
    pub width: Box<Expr>,
}

impl WidthExpr {
    pub fn new(expr: Expr, width: Expr) -> Self {
        Self {
            expr: Box::new(expr),
            width: Box::new(width),
        }
    }
}
