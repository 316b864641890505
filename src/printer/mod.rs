// Tree-to-text rendering. One recursive function per node family; nothing is
// cached between calls, so independent trees can be printed from any thread.

pub mod literals;
pub mod expressions;
pub mod statements;
pub mod declarations;
pub mod program;

pub use declarations::{print_decl_part, print_decl_parts, print_params, print_type_spec};
pub use expressions::print_expr;
pub use literals::{escape_string, format_const, format_float, format_hex};
pub use program::{print_file, print_program, print_unit};
pub use statements::{print_compound, print_stmt, print_stmt_list};
