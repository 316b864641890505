use serde::{Deserialize, Serialize};

use crate::ast::declarations::DeclPart;
use crate::ast::statements::CompoundStmt;

/// Root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SourceFile {
    Program(Program),
    Unit(Unit),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    #[serde(default)]
    pub uses: Vec<String>,
    #[serde(default)]
    pub decls: Vec<DeclPart>,
    pub stmt: CompoundStmt,
}

impl Program {
    pub fn new(name: impl Into<String>, uses: Vec<String>, decls: Vec<DeclPart>, stmt: CompoundStmt) -> Self {
        Self {
            name: name.into(),
            uses,
            decls,
            stmt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    #[serde(default)]
    pub interface_uses: Vec<String>,
    #[serde(default)]
    pub interface: Vec<DeclPart>,
    #[serde(default)]
    pub implementation_uses: Vec<String>,
    #[serde(default)]
    pub implementation: Vec<DeclPart>,
    #[serde(default)]
    pub init: Option<CompoundStmt>,
}

impl Unit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            interface_uses: Vec::new(),
            interface: Vec::new(),
            implementation_uses: Vec::new(),
            implementation: Vec::new(),
            init: None,
        }
    }
}
