use crate::config::printer::INDENT;
use crate::errors::{TpError, TpResult};

/// Helper function for writing formatted strings to a buffer
/// Used across the declaration and file printers
pub fn write_line(buf: &mut String, args: std::fmt::Arguments) -> TpResult<()> {
    use std::fmt::Write;
    buf.write_fmt(args).map_err(TpError::from)
}

/// Prefix every non-empty line with one indentation level.
pub fn indent(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", INDENT, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `BYTE` -> `Byte`, `longint` -> `Longint`
pub fn capitalize_type_name(name: &str) -> Option<String> {
    let mut chars = name.chars();
    let first = chars.next()?;
    let mut normalized: String = first.to_uppercase().collect();
    normalized.push_str(&chars.as_str().to_lowercase());
    Some(normalized)
}
