//! Template-renderer seam.
//!
//! Actual text production lives in an external template engine; this core
//! hands it a template name, an output name, and the context bindings, once
//! per output file, and performs no I/O of its own.

use thiserror::Error;

use crate::cs;
use crate::error::CodegenError;
use crate::generator::GeneratorArguments;
use sharpidl_schema::{Constant, IdlType};

/// Error raised by a template renderer.
#[derive(Debug, Error)]
#[error("template '{template}' failed to render: {message}")]
pub struct RenderError {
    /// Template name.
    pub template: String,
    /// Renderer-reported message.
    pub message: String,
}

impl RenderError {
    /// Creates a render error for the given template.
    pub fn new(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            message: message.into(),
        }
    }
}

/// External template-rendering collaborator.
///
/// Implementations own all file I/O. The generation driver calls
/// [`render`](Renderer::render) once per output file and aborts the pass
/// on the first failure.
pub trait Renderer {
    /// Renders one template into one output file.
    ///
    /// `output` is the output-name pattern for the pass; the `{}`
    /// placeholder stands for the interface stem and is expanded by the
    /// implementation's file-naming glue.
    ///
    /// # Errors
    /// Failures propagate unchanged through the driver.
    fn render(
        &mut self,
        template: &str,
        output: &str,
        context: &RenderContext<'_>,
    ) -> Result<(), RenderError>;
}

/// Context bindings exposed to template evaluation.
///
/// Wraps the resolver services with the configured naming mode and carries
/// the pass-through generation parameters under stable names.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    args: &'a GeneratorArguments,
    build_tool: Option<&'a str>,
    mode: cs::TypeNameMode,
}

impl<'a> RenderContext<'a> {
    pub(crate) const fn new(
        args: &'a GeneratorArguments,
        build_tool: Option<&'a str>,
        mode: cs::TypeNameMode,
    ) -> Self {
        Self {
            args,
            build_tool,
            mode,
        }
    }

    /// Schema-arguments handle for the pass.
    #[must_use]
    pub const fn arguments(&self) -> &'a GeneratorArguments {
        self.args
    }

    /// Build-tool label, when the invoking layer supplied one.
    #[must_use]
    pub const fn build_tool(&self) -> Option<&'a str> {
        self.build_tool
    }

    /// Resolves the C# type name for any IDL type.
    #[must_use]
    pub fn dotnet_type(&self, ty: &IdlType) -> String {
        cs::dotnet_type(ty, self.mode)
    }

    /// Resolves a primitive IDL type name to its C# type name.
    ///
    /// # Errors
    /// `UnsupportedType` for names outside the primitive enumeration.
    pub fn scalar_type(&self, name: &str) -> Result<&'static str, CodegenError> {
        cs::scalar_type_to_dotnet(name, self.mode)
    }

    /// Resolves the C-side type spelling.
    ///
    /// # Errors
    /// `UnsupportedType` for shapes with no direct C spelling.
    pub fn c_type(&self, ty: &IdlType) -> Result<String, CodegenError> {
        cs::c_type(ty)
    }

    /// Resolves the scalar interop marshal tag.
    ///
    /// # Errors
    /// `UnsupportedMarshalType` outside primitives and generic strings.
    pub fn marshal_type(&self, ty: &IdlType) -> Result<cs::MarshalType, CodegenError> {
        cs::marshal_type(ty)
    }

    /// Resolves the collection element storage tag.
    ///
    /// # Errors
    /// `UnsupportedMarshalType` for non-collection input or unsupported
    /// element types.
    pub fn marshal_array_type(&self, ty: &IdlType) -> Result<cs::ArrayMarshalType, CodegenError> {
        cs::marshal_array_type(ty)
    }

    /// Renders a constant as C# literal text.
    ///
    /// # Errors
    /// `MissingConstantValue` if the constant's value is absent.
    pub fn constant_to_dotnet(&self, constant: &Constant) -> Result<String, CodegenError> {
        cs::constant_to_dotnet(constant)
    }

    /// Resolves the public field identifier for a raw field name.
    #[must_use]
    pub fn field_name(&self, raw: &str, type_name: &str, class_name: &str) -> String {
        cs::field_name(raw, type_name, class_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::TypeNameMode;
    use sharpidl_schema::{BasicType, ConstantValue};

    fn test_args() -> GeneratorArguments {
        GeneratorArguments::new("sensor_msgs", "generated")
    }

    #[test]
    fn test_context_uses_configured_mode() {
        let args = test_args();
        let primitive = RenderContext::new(&args, None, TypeNameMode::Primitive);
        let qualified = RenderContext::new(&args, None, TypeNameMode::Qualified);

        let ty = IdlType::Basic(BasicType::Int32);
        assert_eq!(primitive.dotnet_type(&ty), "int");
        assert_eq!(qualified.dotnet_type(&ty), "System.Int32");
        assert_eq!(qualified.scalar_type("int32").unwrap(), "System.Int32");
    }

    #[test]
    fn test_context_exposes_pass_parameters() {
        let args = test_args();
        let context = RenderContext::new(&args, Some("dotnet"), TypeNameMode::Primitive);
        assert_eq!(context.arguments().package_name, "sensor_msgs");
        assert_eq!(context.build_tool(), Some("dotnet"));
    }

    #[test]
    fn test_context_delegates_resolvers() {
        let args = test_args();
        let context = RenderContext::new(&args, None, TypeNameMode::Primitive);

        let seq = IdlType::sequence(IdlType::Basic(BasicType::Int8));
        assert_eq!(
            context.marshal_array_type(&seq).unwrap(),
            cs::ArrayMarshalType::Char
        );
        assert_eq!(
            context
                .marshal_type(&IdlType::Basic(BasicType::Int8))
                .unwrap(),
            cs::MarshalType::I1
        );

        let constant = Constant::new(
            "SCALE",
            IdlType::Basic(BasicType::Float),
            ConstantValue::Float(1.5),
        );
        assert_eq!(context.constant_to_dotnet(&constant).unwrap(), "1.5f");
        assert_eq!(context.field_name("data", "Data", "Point"), "Data_");
        assert_eq!(context.c_type(&IdlType::string()).unwrap(), "const char *");
    }
}
