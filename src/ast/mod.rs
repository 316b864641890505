// Syntax tree for Turbo Pascal programs and units.
// Nodes own their children exclusively; the printer only reads them.

mod program;
mod declarations;
mod types;
mod statements;
mod expressions;
mod literals;

pub use program::{Program, SourceFile, Unit};
pub use declarations::{
    ConstDecl, ConstDecls, DeclPart, FuncDecl, InitDecl, LabelDecls, ProcDecl, TypeDef, TypeDefs,
    VarDecl, VarDecls,
};
pub use types::{
    ArraySpec, FileSpec, FuncSpec, IdentSpec, ParamGroup, PointerSpec, ProcSpec, RecordSection,
    RecordSpec, ScalarSpec, StringSpec, TypeIdent, TypeSpec,
};
pub use statements::{
    AssignStmt, CaseElement, CaseStmt, CompoundStmt, ForStmt, GotoStmt, IfStmt, LabelledStmt,
    ProcStmt, RepeatStmt, Stmt, WhileStatement, WithStmt,
};
pub use expressions::{
    AtExpr, BinaryExpr, ConstArrayExpr, ConstField, ConstRecordExpr, DotExpr, Expr, FuncExpr,
    IdentExpr, IndexExpr, ParenExpr, PointerExpr, RangeExpr, SetExpr, TypeConvExpr, UnaryExpr,
    WidthExpr,
};
pub use literals::{latin1, ConstExpr, ConstValue};
