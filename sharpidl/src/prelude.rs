//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use sharpidl::prelude::*;
//! ```

// Type model
pub use sharpidl_schema::SchemaError;
pub use sharpidl_schema::types::{BasicType, Constant, ConstantValue, IdlType};
pub use sharpidl_schema::validation::{validate_constant, validate_type};

// Mapping services
pub use sharpidl_codegen::cs::{
    ArrayMarshalType, MarshalType, TypeNameMode, constant_to_dotnet, dotnet_type, field_name,
    marshal_array_type, marshal_type,
};

// Driver and renderer seam
pub use sharpidl_codegen::{
    CodegenError, Generator, GeneratorArguments, RenderContext, RenderError, Renderer,
    generate_bindings,
};
