//! Error types for binding generation.

use thiserror::Error;

/// Error type for binding-generation operations.
///
/// Every variant is fatal: the schema or the generator's coverage tables
/// must be fixed, there is no recoverable runtime state.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Type outside the supported lattice reached a type mapper.
    #[error("unsupported type '{type_name}'")]
    UnsupportedType {
        /// Offending type.
        type_name: String,
    },

    /// Type outside the supported shapes reached a marshal resolver.
    #[error("unsupported marshal type '{type_name}'")]
    UnsupportedMarshalType {
        /// Offending type.
        type_name: String,
    },

    /// Constant rendering requested without a resolved value.
    #[error("constant '{constant}' has no value to render")]
    MissingConstantValue {
        /// Constant name.
        constant: String,
    },

    /// Template rendering error, propagated from the renderer.
    #[error("render error: {0}")]
    Render(#[from] crate::render::RenderError),
}

impl CodegenError {
    /// Creates an unsupported type error.
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Creates an unsupported marshal type error.
    pub fn unsupported_marshal_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedMarshalType {
            type_name: type_name.into(),
        }
    }

    /// Creates a missing constant value error.
    pub fn missing_constant_value(constant: impl Into<String>) -> Self {
        Self::MissingConstantValue {
            constant: constant.into(),
        }
    }
}
