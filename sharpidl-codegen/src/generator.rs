//! Generation driver.
//!
//! Builds the fixed template → output-name table, assembles the context
//! bindings, and delegates text production to the renderer once per
//! primary template plus once per typesupport implementation.

use std::path::PathBuf;

use crate::cs::TypeNameMode;
use crate::error::CodegenError;
use crate::render::{RenderContext, Renderer};

/// Primary templates and their output-name patterns.
///
/// `{}` stands for the interface stem and is expanded by the external
/// file-naming glue. The table is fixed; it never depends on schema
/// content.
const TEMPLATES: &[(&str, &str)] = &[("idl.cs.em", "{}.cs"), ("idl.c.em", "{}_s.c")];

/// Typesupport shim template, rendered once per implementation identifier.
const TYPESUPPORT_TEMPLATE: &str = "idl_typesupport.c.em";

/// Schema-arguments handle.
///
/// Mirrors the generator-arguments file produced by the build layer; the
/// core consumes it opaquely and passes it through to templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorArguments {
    /// Package the interfaces belong to.
    pub package_name: String,
    /// IDL source files of the pass.
    pub idl_files: Vec<PathBuf>,
    /// Directory the renderer writes outputs under.
    pub output_dir: PathBuf,
}

impl GeneratorArguments {
    /// Creates an arguments handle with no IDL files yet.
    #[must_use]
    pub fn new(package_name: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            package_name: package_name.into(),
            idl_files: Vec::new(),
            output_dir: output_dir.into(),
        }
    }

    /// Adds an IDL source file to the pass.
    pub fn add_idl_file(&mut self, path: impl Into<PathBuf>) {
        self.idl_files.push(path.into());
    }
}

/// Binding-generation driver for one pass.
///
/// Holds only borrowed, immutable inputs; every pass is independent and
/// the render calls it issues have no ordering dependency between
/// distinct output files.
pub struct Generator<'a> {
    args: &'a GeneratorArguments,
    build_tool: Option<&'a str>,
    mode: TypeNameMode,
}

impl<'a> Generator<'a> {
    /// Creates a driver for one generation pass.
    #[must_use]
    pub const fn new(args: &'a GeneratorArguments) -> Self {
        Self {
            args,
            build_tool: None,
            mode: TypeNameMode::Primitive,
        }
    }

    /// Sets the build-tool label passed through to templates.
    #[must_use]
    pub const fn with_build_tool(mut self, build_tool: &'a str) -> Self {
        self.build_tool = Some(build_tool);
        self
    }

    /// Selects the scalar type-naming mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: TypeNameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Runs one generation pass.
    ///
    /// Issues one render call per primary template and one typesupport
    /// shim per implementation identifier; an empty identifier set
    /// produces the primary outputs only. Aborts on the first failure
    /// with no partial-output recovery.
    ///
    /// # Errors
    /// Propagates resolver and renderer errors unchanged.
    pub fn generate(
        &self,
        typesupport_impls: &[String],
        renderer: &mut dyn Renderer,
    ) -> Result<(), CodegenError> {
        let context = RenderContext::new(self.args, self.build_tool, self.mode);

        tracing::info!(
            "Generating bindings for package '{}'",
            self.args.package_name
        );

        for (template, output) in TEMPLATES {
            tracing::debug!("Rendering {} -> {}", template, output);
            renderer.render(template, output, &context)?;
        }

        for impl_name in typesupport_impls {
            let output = typesupport_output(impl_name);
            tracing::debug!("Rendering {} -> {}", TYPESUPPORT_TEMPLATE, output);
            renderer.render(TYPESUPPORT_TEMPLATE, &output, &context)?;
        }

        tracing::info!(
            "Generated {} outputs for package '{}'",
            TEMPLATES.len() + typesupport_impls.len(),
            self.args.package_name
        );

        Ok(())
    }
}

/// Output-name pattern for one typesupport shim.
fn typesupport_output(impl_name: &str) -> String {
    format!("{{}}.ep.{impl_name}.c")
}
