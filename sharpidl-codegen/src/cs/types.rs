//! IDL → C# and C type name resolution.

use crate::error::CodegenError;
use sharpidl_schema::{BasicType, IdlType};

/// Canonical CLR string type, used in both naming modes.
const DOTNET_STRING: &str = "System.String";

/// Rendering mode for scalar type names.
///
/// `Primitive` emits the built-in C# keyword (`int`, `bool`); `Qualified`
/// emits the CLR name (`System.Int32`, `System.Boolean`) for contexts that
/// need a canonical type-identity string, such as reflection metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeNameMode {
    /// Built-in C# keyword form.
    #[default]
    Primitive,
    /// Fully-qualified CLR type name.
    Qualified,
}

/// Returns the C# type name for a primitive.
#[must_use]
pub const fn basic_type_to_dotnet(basic: BasicType, mode: TypeNameMode) -> &'static str {
    match mode {
        TypeNameMode::Primitive => match basic {
            BasicType::Float => "float",
            BasicType::Double | BasicType::LongDouble => "double",
            BasicType::Char => "char",
            BasicType::WChar => "ushort",
            BasicType::Boolean => "bool",
            BasicType::Octet | BasicType::Uint8 => "byte",
            BasicType::Int8 => "sbyte",
            BasicType::Uint16 => "ushort",
            BasicType::Int16 => "short",
            BasicType::Uint32 => "uint",
            BasicType::Int32 => "int",
            BasicType::Uint64 => "ulong",
            BasicType::Int64 => "long",
        },
        TypeNameMode::Qualified => match basic {
            BasicType::Float => "System.Single",
            BasicType::Double | BasicType::LongDouble => "System.Double",
            BasicType::Char => "System.Char",
            BasicType::WChar => "System.UInt16",
            BasicType::Boolean => "System.Boolean",
            BasicType::Octet | BasicType::Uint8 => "System.Byte",
            BasicType::Int8 => "System.SByte",
            BasicType::Uint16 => "System.UInt16",
            BasicType::Int16 => "System.Int16",
            BasicType::Uint32 => "System.UInt32",
            BasicType::Int32 => "System.Int32",
            BasicType::Uint64 => "System.UInt64",
            BasicType::Int64 => "System.Int64",
        },
    }
}

/// Resolves a primitive IDL type name to its C# type name.
///
/// The generic string names resolve to the canonical CLR string type in
/// both modes.
///
/// # Errors
/// Returns `CodegenError::UnsupportedType` for names outside the primitive
/// enumeration; that is a schema/parser contract violation, not a
/// recoverable condition.
pub fn scalar_type_to_dotnet(name: &str, mode: TypeNameMode) -> Result<&'static str, CodegenError> {
    if name == "string" || name == "wstring" {
        return Ok(DOTNET_STRING);
    }
    BasicType::from_idl_name(name)
        .map(|basic| basic_type_to_dotnet(basic, mode))
        .ok_or_else(|| CodegenError::unsupported_type(name))
}

/// Resolves any IDL type to its C# type name.
///
/// Collections resolve recursively to the element type followed by array
/// notation; the naming mode propagates into the element.
#[must_use]
pub fn dotnet_type(ty: &IdlType, mode: TypeNameMode) -> String {
    match ty {
        IdlType::String { .. } | IdlType::WString { .. } => DOTNET_STRING.to_string(),
        IdlType::Namespaced { namespaces, name } => {
            if namespaces.is_empty() {
                name.clone()
            } else {
                format!("{}.{}", namespaces.join("."), name)
            }
        }
        IdlType::Named(name) => name.clone(),
        IdlType::Array { element, .. } | IdlType::Sequence { element, .. } => {
            format!("{}[]", dotnet_type(element, mode))
        }
        IdlType::Basic(basic) => basic_type_to_dotnet(*basic, mode).to_string(),
    }
}

/// Resolves the C-side type spelling used by the native support code.
///
/// Generic strings cross the boundary as `const char *`; namespaced user
/// types use the double-underscore struct naming of the generated support
/// sources.
///
/// # Errors
/// Returns `CodegenError::UnsupportedType` for shapes with no direct C
/// spelling (local named references and collections; those are expressed
/// through generated support structs instead).
pub fn c_type(ty: &IdlType) -> Result<String, CodegenError> {
    match ty {
        IdlType::String { .. } | IdlType::WString { .. } => Ok("const char *".to_string()),
        IdlType::Basic(basic) => Ok(basic_type_to_c(*basic).to_string()),
        IdlType::Namespaced { namespaces, name } => {
            if namespaces.is_empty() {
                Ok(name.clone())
            } else {
                Ok(format!("{}__{}", namespaces.join("__"), name))
            }
        }
        _ => Err(CodegenError::unsupported_type(ty.to_string())),
    }
}

/// Returns the C99 spelling for a primitive.
const fn basic_type_to_c(basic: BasicType) -> &'static str {
    match basic {
        BasicType::Float => "float",
        BasicType::Double => "double",
        BasicType::LongDouble => "long double",
        BasicType::Char => "signed char",
        BasicType::WChar => "uint16_t",
        BasicType::Boolean => "bool",
        BasicType::Octet | BasicType::Uint8 => "uint8_t",
        BasicType::Int8 => "int8_t",
        BasicType::Uint16 => "uint16_t",
        BasicType::Int16 => "int16_t",
        BasicType::Uint32 => "uint32_t",
        BasicType::Int32 => "int32_t",
        BasicType::Uint64 => "uint64_t",
        BasicType::Int64 => "int64_t",
    }
}
