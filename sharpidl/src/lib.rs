//! # sharpidl
//!
//! IDL → C# binding generation core.
//!
//! sharpidl resolves the abstract type descriptors a parser front end
//! produces for a message/service schema into C# type names, P/Invoke
//! marshal descriptors, and C# constant literals, and drives template
//! rendering for the generated binding sources. Template evaluation and
//! file naming stay in external collaborators behind the
//! [`Renderer`](codegen::Renderer) seam.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sharpidl::prelude::*;
//!
//! let args = GeneratorArguments::new("sensor_msgs", "generated/");
//! let generator = Generator::new(&args).with_build_tool("dotnet");
//! generator.generate(&typesupport_impls, &mut renderer)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - IDL type model and well-formedness checks
//! - [`codegen`] - C# type mapping, marshal resolution, and the generation driver

pub mod prelude;

/// IDL type model and well-formedness checks.
pub mod schema {
    pub use sharpidl_schema::*;
}

/// C# type mapping, marshal resolution, and the generation driver.
pub mod codegen {
    pub use sharpidl_codegen::*;
}

// Re-export commonly used items at the crate root
pub use sharpidl_schema::{BasicType, Constant, ConstantValue, IdlType, SchemaError};

pub use sharpidl_codegen::{
    CodegenError, Generator, GeneratorArguments, RenderContext, RenderError, Renderer,
    generate_bindings,
};
