//! P/Invoke marshal descriptor resolution.
//!
//! Two deliberately distinct tables. Scalar fields cross the native call
//! boundary with interop parameter tags (signed/unsigned width); collection
//! buffers use the storage tags the native array copy routines are declared
//! with. `int8` maps to `I1` as a scalar but to the copyable `char` storage
//! tag as an element; keep the tables separate, never unify them.

use std::fmt;

use crate::error::CodegenError;
use sharpidl_schema::{BasicType, IdlType};

/// Interop marshal tag for a scalar crossing the native boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarshalType {
    /// 4-byte floating point.
    R4,
    /// 8-byte floating point.
    R8,
    /// Signed 1-byte integer.
    I1,
    /// Signed 2-byte integer.
    I2,
    /// Signed 4-byte integer.
    I4,
    /// Signed 8-byte integer.
    I8,
    /// Unsigned 1-byte integer.
    U1,
    /// Unsigned 2-byte integer.
    U2,
    /// Unsigned 4-byte integer.
    U4,
    /// Unsigned 8-byte integer.
    U8,
    /// Pointer-sized native string.
    LPStr,
}

impl MarshalType {
    /// Returns the marshal attribute spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::R4 => "R4",
            Self::R8 => "R8",
            Self::I1 => "I1",
            Self::I2 => "I2",
            Self::I4 => "I4",
            Self::I8 => "I8",
            Self::U1 => "U1",
            Self::U2 => "U2",
            Self::U4 => "U4",
            Self::U8 => "U8",
            Self::LPStr => "LPStr",
        }
    }
}

impl fmt::Display for MarshalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Native storage tag for collection element buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayMarshalType {
    /// 4-byte floating point storage.
    Float,
    /// 8-byte floating point storage.
    Double,
    /// Copyable single-byte character storage.
    Char,
    /// 2-byte storage.
    Short,
    /// Raw single-byte storage.
    Byte,
    /// 4-byte storage.
    Int,
    /// 8-byte storage.
    Long,
    /// Array of native string handles.
    IntPtr,
}

impl ArrayMarshalType {
    /// Returns the storage type spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
            Self::Short => "short",
            Self::Byte => "byte",
            Self::Int => "int",
            Self::Long => "long",
            Self::IntPtr => "IntPtr",
        }
    }
}

impl fmt::Display for ArrayMarshalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves the marshal tag for a scalar or string field.
///
/// # Errors
/// Returns `CodegenError::UnsupportedMarshalType` for anything but
/// primitives and generic strings; named and namespaced types never cross
/// the boundary as bare scalars.
pub fn marshal_type(ty: &IdlType) -> Result<MarshalType, CodegenError> {
    match ty {
        IdlType::Basic(basic) => Ok(basic_marshal_type(*basic)),
        ty if ty.is_generic_string() => Ok(MarshalType::LPStr),
        _ => Err(CodegenError::unsupported_marshal_type(ty.to_string())),
    }
}

/// Scalar interop parameter table.
const fn basic_marshal_type(basic: BasicType) -> MarshalType {
    match basic {
        BasicType::Float => MarshalType::R4,
        BasicType::Double | BasicType::LongDouble => MarshalType::R8,
        BasicType::Char | BasicType::Boolean | BasicType::Int8 => MarshalType::I1,
        BasicType::WChar | BasicType::Int16 => MarshalType::I2,
        BasicType::Octet | BasicType::Uint8 => MarshalType::U1,
        BasicType::Uint16 => MarshalType::U2,
        BasicType::Uint32 => MarshalType::U4,
        BasicType::Int32 => MarshalType::I4,
        BasicType::Uint64 => MarshalType::U8,
        BasicType::Int64 => MarshalType::I8,
    }
}

/// Resolves the element storage tag for an array or sequence.
///
/// String elements marshal as an array of native string handles.
///
/// # Errors
/// Returns `CodegenError::UnsupportedMarshalType` for non-collection
/// input, and for element types outside primitives and generic strings —
/// including a collection nested directly inside another collection.
pub fn marshal_array_type(ty: &IdlType) -> Result<ArrayMarshalType, CodegenError> {
    let element = match ty {
        IdlType::Array { element, .. } | IdlType::Sequence { element, .. } => element.as_ref(),
        _ => return Err(CodegenError::unsupported_marshal_type(ty.to_string())),
    };

    if element.is_generic_string() {
        return Ok(ArrayMarshalType::IntPtr);
    }
    match element {
        IdlType::Basic(basic) => Ok(basic_array_marshal_type(*basic)),
        _ => Err(CodegenError::unsupported_marshal_type(ty.to_string())),
    }
}

/// Element storage table. Differs from the scalar table where the native
/// copy routines take a different storage width or signedness (`int8` is
/// copied as `char`, `boolean` as raw bytes).
const fn basic_array_marshal_type(basic: BasicType) -> ArrayMarshalType {
    match basic {
        BasicType::Float => ArrayMarshalType::Float,
        BasicType::Double | BasicType::LongDouble => ArrayMarshalType::Double,
        BasicType::Char | BasicType::Int8 => ArrayMarshalType::Char,
        BasicType::WChar | BasicType::Uint16 | BasicType::Int16 => ArrayMarshalType::Short,
        BasicType::Boolean | BasicType::Octet | BasicType::Uint8 => ArrayMarshalType::Byte,
        BasicType::Uint32 | BasicType::Int32 => ArrayMarshalType::Int,
        BasicType::Uint64 | BasicType::Int64 => ArrayMarshalType::Long,
    }
}
