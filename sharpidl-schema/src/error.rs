//! Error types for type-shape well-formedness checks.

use thiserror::Error;

/// Error type for well-formedness violations in the type model.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Collection nested directly inside another collection.
    #[error("element of '{type_name}' is itself a collection; nested collections are not a marshalable shape")]
    NestedCollection {
        /// Offending collection type.
        type_name: String,
    },

    /// Array declared with zero elements.
    #[error("array type '{type_name}' has zero length")]
    ZeroSizedArray {
        /// Offending array type.
        type_name: String,
    },

    /// Sequence declared with a zero upper bound.
    #[error("sequence type '{type_name}' has a zero upper bound")]
    ZeroSequenceBound {
        /// Offending sequence type.
        type_name: String,
    },

    /// Constant value shape outside the declared type's domain.
    #[error("constant '{constant}' of type '{type_name}' has a value outside the type's domain")]
    ValueShapeMismatch {
        /// Constant name.
        constant: String,
        /// Declared type.
        type_name: String,
    },
}

impl SchemaError {
    /// Creates a nested collection error.
    pub fn nested_collection(type_name: impl Into<String>) -> Self {
        Self::NestedCollection {
            type_name: type_name.into(),
        }
    }

    /// Creates a zero-sized array error.
    pub fn zero_sized_array(type_name: impl Into<String>) -> Self {
        Self::ZeroSizedArray {
            type_name: type_name.into(),
        }
    }

    /// Creates a zero sequence bound error.
    pub fn zero_sequence_bound(type_name: impl Into<String>) -> Self {
        Self::ZeroSequenceBound {
            type_name: type_name.into(),
        }
    }

    /// Creates a value shape mismatch error.
    pub fn value_shape_mismatch(
        constant: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::ValueShapeMismatch {
            constant: constant.into(),
            type_name: type_name.into(),
        }
    }
}
