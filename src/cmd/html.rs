use crate::config::{self, rt::RtcHtml};
use crate::pipelines::HtmlPipeline;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Rewrite script & stylesheet paths in an HTML document.
#[derive(Clone, Debug, Args)]
#[command(name = "html")]
#[command(next_help_heading = "Html")]
pub struct Html {
    /// The HTML document to rewrite
    pub input: PathBuf,

    /// Where to write the rewritten document
    pub output: PathBuf,

    /// The base path prepended to every asset reference [default: frontend-public/]
    pub base: Option<String>,
}

impl Html {
    #[tracing::instrument(level = "trace", skip(self, config))]
    pub async fn run(self, config: Option<PathBuf>) -> Result<()> {
        let cfg = config::load(config).await?;
        let cfg = RtcHtml::new(cfg, self.input, self.output, self.base);
        HtmlPipeline::new(Arc::new(cfg)).run().await
    }
}
