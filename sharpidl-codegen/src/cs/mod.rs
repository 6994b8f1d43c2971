//! C# target mapping modules.

pub mod constants;
pub mod fields;
pub mod marshal;
pub mod types;

pub use constants::{constant_to_dotnet, escape_string};
pub use fields::field_name;
pub use marshal::{ArrayMarshalType, MarshalType, marshal_array_type, marshal_type};
pub use types::{TypeNameMode, basic_type_to_dotnet, c_type, dotnet_type, scalar_type_to_dotnet};
