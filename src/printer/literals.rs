use crate::ast::{ConstExpr, ConstValue};
use crate::config::literals::{EXPONENT_ABOVE, EXPONENT_BELOW};
use crate::errors::{TpError, TpResult};

const QUOTE: u8 = b'\'';

// Bytes that may appear verbatim inside a quoted run
fn is_printable(b: u8) -> bool {
    (32..=126).contains(&b)
}

/// Render a byte string as a Pascal string literal.
///
/// Printable ASCII goes inside single quotes with `'` doubled; every other
/// byte becomes `#n` outside the quotes, and consecutive escapes are merged
/// (`#1#2`). An escape as the first byte drops the opening quote, and a quote
/// pair left empty by an escape at the very end is trimmed; nothing inside
/// the literal is ever trimmed.
pub fn escape_string(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "''".to_string();
    }
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('\'');
    // true while the quoted run opened last has no content yet
    let mut run_empty = true;
    for &b in bytes {
        if is_printable(b) {
            if b == QUOTE {
                out.push_str("''");
            } else {
                out.push(char::from(b));
            }
            run_empty = false;
        } else {
            if run_empty {
                out.pop();
            } else {
                out.push('\'');
            }
            out.push_str(&format!("#{}'", b));
            run_empty = true;
        }
    }
    out.push('\'');

    let ends_with_escape = !is_printable(bytes[bytes.len() - 1]);
    if ends_with_escape && out.ends_with("''") {
        out.truncate(out.len() - 2);
    }
    out
}

/// Floats always carry a decimal point so they never read back as integers.
/// Very large or very small magnitudes use a scale factor (`1.0E300`).
pub fn format_float(value: f64) -> TpResult<String> {
    if !value.is_finite() {
        return Err(TpError::contract_violation(
            "constant",
            format!("float value {} has no Pascal spelling", value),
        ));
    }
    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || (magnitude != 0.0 && magnitude < EXPONENT_BELOW) {
        let text = format!("{:E}", value);
        return match text.split_once('E') {
            Some((mantissa, exponent)) if !mantissa.contains('.') => {
                Ok(format!("{}.0E{}", mantissa, exponent))
            }
            _ => Ok(text),
        };
    }
    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    Ok(text)
}

/// `$` + uppercase hex digits, at least two of them.
pub fn format_hex(value: i64) -> String {
    if value < 0 {
        format!("-${:02X}", value.unsigned_abs())
    } else {
        format!("${:02X}", value)
    }
}

pub fn format_const(expr: &ConstExpr) -> TpResult<String> {
    match &expr.value {
        ConstValue::Str(bytes) => Ok(escape_string(bytes)),
        ConstValue::Float(value) => format_float(*value),
        ConstValue::Nil => Ok("nil".to_string()),
        ConstValue::Integer(value) if expr.is_hex => Ok(format_hex(*value)),
        ConstValue::Integer(value) => Ok(value.to_string()),
    }
}
