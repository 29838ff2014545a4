//! Post-processing pipelines.


mod html;
mod templates;

pub use html::HtmlPipeline;
pub use templates::TemplatePipeline;

const ATTR_SRC: &str = "src";
const ATTR_HREF: &str = "href";

const SCRIPT_SELECTOR: &str = "script";
const STYLESHEET_SELECTOR: &str = r#"link[rel="stylesheet"]"#;

/// Suffix identifying template sources, matched case-sensitively.
const TEMPLATE_EXT: &str = ".mjml";
/// Suffix carried by compiled templates.
const OUTPUT_EXT: &str = ".ms";
