use anyhow::Result;
use lol_html::{HtmlRewriter, Settings, element};

/// A wrapper for Html modifications, and rewrites.
///
/// Rewriting is streaming, so everything not matched by a selector is carried
/// over byte for byte.
#[derive(Debug)]
pub struct Document(Vec<u8>);

impl AsRef<[u8]> for Document {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Document {
    /// Create a new document
    ///
    /// Note: if this is not a valid HTML document, it will fail later on.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self(data.into())
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    /// Prepend `prefix` to the `attr` attribute of every element matching
    /// `selector`, returning the number of elements rewritten.
    ///
    /// An element missing the attribute contributes an empty current value,
    /// so its rewritten attribute equals the bare prefix. Repeated
    /// application stacks the prefix.
    ///
    /// The content of the document will be replaced with the output of the
    /// operation.
    pub fn prefix_attr(&mut self, selector: &str, attr: &str, prefix: &str) -> Result<usize> {
        let mut count = 0;
        let mut buf = Vec::new();

        let mut rewriter = HtmlRewriter::new(
            Settings {
                element_content_handlers: vec![element!(selector, |el| {
                    let current = el.get_attribute(attr).unwrap_or_default();
                    el.set_attribute(attr, &format!("{prefix}{current}"))?;
                    count += 1;
                    Ok(())
                })],
                ..Settings::default()
            },
            |out: &[u8]| buf.extend_from_slice(out),
        );
        rewriter.write(self.0.as_slice())?;
        rewriter.end()?;

        self.0 = buf;

        Ok(count)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_prefix_attr() {
        let mut doc = Document::new(
            r#"
<html>
    <head>
        <script src="app.js"></script>
        <script></script>
        <link rel="stylesheet" href="app.css">
    </head>
    <body></body>
</html>
"#,
        );

        let count = doc
            .prefix_attr("script", "src", "public/")
            .expect("not expected to fail");
        assert_eq!(2, count);

        let html = String::from_utf8_lossy(doc.as_ref());
        assert!(html.contains(r#"<script src="public/app.js"></script>"#), "{html}");
        assert!(html.contains(r#"<script src="public/"></script>"#), "{html}");
        assert!(html.contains(r#"href="app.css""#), "{html}");
    }

    #[test]
    fn test_no_match_keeps_bytes() {
        let raw = "<html><head><title>plain</title></head><body></body></html>";
        let mut doc = Document::new(raw);

        let count = doc
            .prefix_attr("script", "src", "public/")
            .expect("not expected to fail");

        assert_eq!(0, count);
        assert_eq!(raw.as_bytes(), doc.as_ref());
    }
}
