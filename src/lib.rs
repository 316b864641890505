use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod config;
pub mod errors;
pub mod printer;
pub mod token;
pub mod utils;

pub const VERSION: &str = "0.1.0";

use crate::ast::SourceFile;
use crate::config::input::TREE_EXTENSION;
use crate::errors::{TpError, TpResult};

pub use crate::printer::{print_file, print_program, print_unit};

pub fn read(filename: &Path) -> TpResult<String> {
    let path = Path::new(filename);
    let message = format!("File must have a .{} extension", TREE_EXTENSION);

    match path.extension() {
        Some(ext) => {
            if !ext.eq(TREE_EXTENSION) {
                return Err(TpError::FileReadError(message));
            }
        }
        None => {
            return Err(TpError::FileReadError(message));
        }
    }
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Decode a syntax tree handed over by the parser as JSON.
pub fn parse_tree(json: &str) -> TpResult<SourceFile> {
    let file = serde_json::from_str(json)?;
    Ok(file)
}

/// Read, decode and print the tree stored at `path`.
pub fn render_path(path: &Path) -> TpResult<String> {
    let json = read(path)?;
    log::debug!("read {} bytes from {}", json.len(), path.display());
    let file = parse_tree(&json)?;
    print_file(&file)
}
