//! Type-shape well-formedness checks.
//!
//! Shapes the marshal layer cannot represent are rejected here before they
//! reach generation: directly nested collections, zero-sized arrays, zero
//! sequence bounds, and constant values outside their type's domain.

use crate::error::SchemaError;
use crate::types::{BasicType, Constant, ConstantValue, IdlType};

/// Validates a type descriptor's shape.
///
/// # Errors
/// Returns `SchemaError` for a collection whose element is itself a
/// collection, a zero-sized array, or a zero sequence bound.
pub fn validate_type(ty: &IdlType) -> Result<(), SchemaError> {
    match ty {
        IdlType::Array { element, size } => {
            if *size == 0 {
                return Err(SchemaError::zero_sized_array(ty.to_string()));
            }
            validate_element(ty, element)
        }
        IdlType::Sequence { element, bound } => {
            if *bound == Some(0) {
                return Err(SchemaError::zero_sequence_bound(ty.to_string()));
            }
            validate_element(ty, element)
        }
        _ => Ok(()),
    }
}

/// Rejects collection elements that are themselves collections.
fn validate_element(owner: &IdlType, element: &IdlType) -> Result<(), SchemaError> {
    if element.is_collection() {
        return Err(SchemaError::nested_collection(owner.to_string()));
    }
    Ok(())
}

/// Validates that a constant's value shape matches its type's domain.
///
/// Absent values are accepted here; their absence is reported at render
/// time, where the constant is actually consumed.
///
/// # Errors
/// Returns `SchemaError::ValueShapeMismatch` for a boolean constant
/// without a truthiness-bearing value, a float constant without a numeric
/// value, a string constant without a text value, or any other scalar
/// constant without a decimal-printable value.
pub fn validate_constant(constant: &Constant) -> Result<(), SchemaError> {
    let Some(value) = &constant.value else {
        return Ok(());
    };

    let shape_ok = match &constant.ty {
        IdlType::Basic(BasicType::Boolean) => {
            matches!(value, ConstantValue::Bool(_) | ConstantValue::Int(_))
        }
        IdlType::Basic(basic) if basic.is_floating_point() => {
            matches!(value, ConstantValue::Float(_) | ConstantValue::Int(_))
        }
        ty if ty.is_generic_string() => matches!(value, ConstantValue::Str(_)),
        IdlType::Basic(_) => matches!(value, ConstantValue::Int(_)),
        _ => true,
    };

    if shape_ok {
        Ok(())
    } else {
        Err(SchemaError::value_shape_mismatch(
            &constant.name,
            constant.ty.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_shapes_are_well_formed() {
        assert!(validate_type(&IdlType::Basic(BasicType::Int32)).is_ok());
        assert!(validate_type(&IdlType::string()).is_ok());
        assert!(validate_type(&IdlType::named("Header")).is_ok());
    }

    #[test]
    fn test_flat_collections_are_well_formed() {
        assert!(validate_type(&IdlType::array(IdlType::Basic(BasicType::Octet), 8)).is_ok());
        assert!(validate_type(&IdlType::sequence(IdlType::string())).is_ok());
        assert!(
            validate_type(&IdlType::bounded_sequence(
                IdlType::Basic(BasicType::Float),
                32
            ))
            .is_ok()
        );
    }

    #[test]
    fn test_nested_collection_rejected() {
        let nested = IdlType::sequence(IdlType::sequence(IdlType::Basic(BasicType::Int32)));
        assert!(matches!(
            validate_type(&nested),
            Err(SchemaError::NestedCollection { .. })
        ));

        let array_of_sequences =
            IdlType::array(IdlType::sequence(IdlType::Basic(BasicType::Int8)), 4);
        assert!(matches!(
            validate_type(&array_of_sequences),
            Err(SchemaError::NestedCollection { .. })
        ));
    }

    #[test]
    fn test_zero_sized_array_rejected() {
        let zero = IdlType::array(IdlType::Basic(BasicType::Int32), 0);
        assert!(matches!(
            validate_type(&zero),
            Err(SchemaError::ZeroSizedArray { .. })
        ));
    }

    #[test]
    fn test_zero_sequence_bound_rejected() {
        let zero = IdlType::bounded_sequence(IdlType::Basic(BasicType::Int32), 0);
        assert!(matches!(
            validate_type(&zero),
            Err(SchemaError::ZeroSequenceBound { .. })
        ));
    }

    #[test]
    fn test_constant_shapes() {
        let boolean = Constant::new(
            "ENABLED",
            IdlType::Basic(BasicType::Boolean),
            ConstantValue::Bool(true),
        );
        assert!(validate_constant(&boolean).is_ok());

        let float = Constant::new(
            "GRAVITY",
            IdlType::Basic(BasicType::Float),
            ConstantValue::Float(9.81),
        );
        assert!(validate_constant(&float).is_ok());

        let text = Constant::new(
            "FRAME_ID",
            IdlType::string(),
            ConstantValue::Str("base_link".to_string()),
        );
        assert!(validate_constant(&text).is_ok());
    }

    #[test]
    fn test_constant_shape_mismatch_rejected() {
        let bad_string = Constant::new("NAME", IdlType::string(), ConstantValue::Int(1));
        assert!(matches!(
            validate_constant(&bad_string),
            Err(SchemaError::ValueShapeMismatch { .. })
        ));

        let bad_int = Constant::new(
            "COUNT",
            IdlType::Basic(BasicType::Uint16),
            ConstantValue::Str("many".to_string()),
        );
        assert!(matches!(
            validate_constant(&bad_int),
            Err(SchemaError::ValueShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_unresolved_constant_passes_shape_check() {
        let unresolved = Constant::unresolved("LATER", IdlType::Basic(BasicType::Int32));
        assert!(validate_constant(&unresolved).is_ok());
    }
}
