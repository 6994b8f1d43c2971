//! Public field identifier resolution.

/// Computes the public C# field name for a raw schema field name.
///
/// Only the first character is uppercased; the rest of the name is left
/// untouched. A capitalized name equal to the owning type's simple name or
/// its generated class name would collide with the enclosing type (a
/// reserved-identifier hazard in C#), so a trailing underscore is appended
/// in that case. Comparison is exact and case-sensitive, after
/// capitalization.
#[must_use]
pub fn field_name(raw: &str, type_name: &str, class_name: &str) -> String {
    let mut chars = raw.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    if capitalized == type_name || capitalized == class_name {
        format!("{capitalized}_")
    } else {
        capitalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_character_uppercased() {
        assert_eq!(field_name("x", "Point", "Point"), "X");
        assert_eq!(field_name("velocity", "Twist", "Twist"), "Velocity");
    }

    #[test]
    fn test_rest_of_name_untouched() {
        assert_eq!(field_name("myField", "Owner", "Owner"), "MyField");
        assert_eq!(field_name("ranges_MM", "Scan", "Scan"), "Ranges_MM");
    }

    #[test]
    fn test_collision_with_simple_name() {
        assert_eq!(field_name("data", "Data", "Point"), "Data_");
    }

    #[test]
    fn test_collision_with_class_name() {
        assert_eq!(field_name("point", "Data", "Point"), "Point_");
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        assert_eq!(field_name("data", "DATA", "Point"), "Data");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(field_name("", "Data", "Point"), "");
    }
}
