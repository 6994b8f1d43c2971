//! Example generation pass with a stdout renderer.
//!
//! Run with: `cargo run --example generate`

use sharpidl::prelude::*;

/// Renderer that prints what a template engine would produce, instead of
/// evaluating real templates.
struct StdoutRenderer;

impl Renderer for StdoutRenderer {
    fn render(
        &mut self,
        template: &str,
        output: &str,
        context: &RenderContext<'_>,
    ) -> Result<(), RenderError> {
        println!(
            "[render] {} -> {} (package {})",
            template,
            output,
            context.arguments().package_name
        );

        // The bindings a real template would call while expanding.
        let ranges = IdlType::sequence(IdlType::Basic(BasicType::Float));
        println!("         ranges: {}", context.dotnet_type(&ranges));
        println!(
            "         ranges storage: {}",
            context
                .marshal_array_type(&ranges)
                .map_err(|e| RenderError::new(template, e.to_string()))?
        );

        let frame_id = Constant::new(
            "DEFAULT_FRAME",
            IdlType::string(),
            ConstantValue::Str("base_link".to_string()),
        );
        println!(
            "         constant: {}",
            context
                .constant_to_dotnet(&frame_id)
                .map_err(|e| RenderError::new(template, e.to_string()))?
        );
        println!(
            "         field: {}",
            context.field_name("data", "Data", "LaserScan")
        );

        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = GeneratorArguments::new("sensor_msgs", "generated");
    args.add_idl_file("msg/LaserScan.idl");

    let typesupport_impls = vec![
        "rmw_fastrtps_cs".to_string(),
        "rmw_cyclonedds_cs".to_string(),
    ];

    let generator = Generator::new(&args).with_build_tool("dotnet");
    generator.generate(&typesupport_impls, &mut StdoutRenderer)?;

    Ok(())
}
