//! HTML asset rewrite pipeline.

use super::{ATTR_HREF, ATTR_SRC, SCRIPT_SELECTOR, STYLESHEET_SELECTOR};
use crate::common::{self, BUILDING, SUCCESS, html_rewrite::Document};
use crate::config::rt::RtcHtml;
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::fs;

/// The HTML asset rewrite pipeline.
///
/// Prepends the configured base path to the `src` of every `script` element
/// and the `href` of every stylesheet `link` element, leaving the rest of
/// the document untouched. Each run applies the prefix once; re-running on
/// its own output stacks it.
pub struct HtmlPipeline {
    /// Runtime config.
    cfg: Arc<RtcHtml>,
}

impl HtmlPipeline {
    /// Create a new instance.
    pub fn new(cfg: Arc<RtcHtml>) -> Self {
        Self { cfg }
    }

    /// Run this pipeline.
    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn run(self) -> Result<()> {
        let rel_input = common::strip_prefix(&self.cfg.input);
        tracing::info!("{}rewriting asset paths in {:?}", BUILDING, rel_input);

        let raw = fs::read_to_string(&self.cfg.input)
            .await
            .with_context(|| format!("error reading HTML document {:?}", self.cfg.input))?;

        let mut document = Document::new(raw);
        let scripts = document
            .prefix_attr(SCRIPT_SELECTOR, ATTR_SRC, &self.cfg.base)
            .context("error rewriting script elements")?;
        let stylesheets = document
            .prefix_attr(STYLESHEET_SELECTOR, ATTR_HREF, &self.cfg.base)
            .context("error rewriting stylesheet link elements")?;

        if scripts == 0 && stylesheets == 0 {
            tracing::warn!("no script or stylesheet elements found in {:?}", rel_input);
        }

        if let Some(parent) = self.cfg.output.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("error creating output directory {:?}", parent))?;
        }
        fs::write(&self.cfg.output, document.into_inner())
            .await
            .with_context(|| {
                format!("error writing rewritten document {:?}", self.cfg.output)
            })?;

        tracing::info!(
            "{}rewrote {} script and {} stylesheet references",
            SUCCESS,
            scripts,
            stylesheets
        );
        Ok(())
    }
}
