//! C# literal rendering for schema constants.

use crate::error::CodegenError;
use sharpidl_schema::{BasicType, Constant, IdlType};

/// Escapes a string value for embedding in a C# double-quoted literal.
///
/// Backslashes are doubled before quotes are escaped; the reverse order
/// would double-escape the backslashes inserted for the quotes.
#[must_use]
pub fn escape_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Renders a constant as C# literal source text.
///
/// Booleans render as the lowercase keyword by truthiness, `float`
/// constants carry the single-precision suffix, string constants are
/// escaped and quoted, and everything else renders as plain decimal text.
///
/// # Errors
/// Returns `CodegenError::MissingConstantValue` if the constant's value
/// was never resolved; that is a parser contract violation.
pub fn constant_to_dotnet(constant: &Constant) -> Result<String, CodegenError> {
    let Some(value) = &constant.value else {
        return Err(CodegenError::missing_constant_value(&constant.name));
    };

    let literal = match &constant.ty {
        IdlType::Basic(BasicType::Boolean) => {
            if value.is_truthy() { "true" } else { "false" }.to_string()
        }
        IdlType::Basic(BasicType::Float) => format!("{value}f"),
        ty if ty.is_generic_string() => format!("\"{}\"", escape_string(&value.to_string())),
        _ => value.to_string(),
    };

    Ok(literal)
}
