pub mod string_utils;

pub use string_utils::{capitalize_type_name, indent, write_line};
