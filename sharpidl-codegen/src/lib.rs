//! # sharpidl Codegen
//!
//! C# binding generation from IDL type descriptors.
//!
//! This crate provides:
//! - IDL → C# type name resolution (primitive and CLR-qualified modes)
//! - P/Invoke marshal descriptor resolution for scalars and collections
//! - C# literal rendering for schema constants
//! - Public field identifier resolution
//! - The generation driver and the template-renderer seam

pub mod cs;
pub mod error;
pub mod generator;
pub mod render;

pub use error::CodegenError;
pub use generator::{Generator, GeneratorArguments};
pub use render::{RenderContext, RenderError, Renderer};

/// Runs one binding-generation pass.
///
/// Entry point for the invoking build layer: renders the fixed primary
/// template set plus one typesupport shim per implementation identifier,
/// delegating all text production to `renderer`.
///
/// # Arguments
/// * `args` - Schema-arguments handle for the pass
/// * `typesupport_impls` - Middleware implementation identifiers
/// * `build_tool` - Optional build-tool label passed through to templates
/// * `renderer` - External template-rendering collaborator
///
/// # Errors
/// Returns `CodegenError` on the first resolver or renderer failure; the
/// pass has no partial-output recovery.
pub fn generate_bindings(
    args: &GeneratorArguments,
    typesupport_impls: &[String],
    build_tool: Option<&str>,
    renderer: &mut dyn Renderer,
) -> Result<(), CodegenError> {
    let mut generator = Generator::new(args);
    if let Some(build_tool) = build_tool {
        generator = generator.with_build_tool(build_tool);
    }
    generator.generate(typesupport_impls, renderer)
}
