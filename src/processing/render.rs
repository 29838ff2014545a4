use mrml::prelude::render::RenderOptions;

/// Failure modes of the MJML renderer.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to parse MJML: {0}")]
    Parse(String),
    #[error("failed to render MJML: {0}")]
    Render(String),
}

/// Render an MJML template into its final markup.
///
/// The renderer's output is written out as-is; no post-processing is
/// applied.
pub fn render_mjml(text: &str) -> Result<String, RenderError> {
    let root = mrml::parse(text).map_err(|err| RenderError::Parse(err.to_string()))?;
    root.render(&RenderOptions::default())
        .map_err(|err| RenderError::Render(err.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_render_carries_content() {
        let rendered = render_mjml(
            "<mjml><mj-body><mj-section><mj-column><mj-text>Hello there</mj-text></mj-column></mj-section></mj-body></mjml>",
        )
        .expect("not expected to fail");
        assert!(rendered.contains("Hello there"), "{rendered}");
    }

    #[test]
    fn test_render_rejects_malformed_input() {
        let res = render_mjml("<mjml><mj-body>");
        assert!(res.is_err());
    }
}
