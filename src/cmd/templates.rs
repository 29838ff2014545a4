use crate::config::rt::RtcTemplates;
use crate::pipelines::TemplatePipeline;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Compile a directory tree of MJML templates.
#[derive(Clone, Debug, Args)]
#[command(name = "templates")]
#[command(next_help_heading = "Templates")]
pub struct Templates {
    /// The directory searched recursively for template sources
    pub input_dir: PathBuf,

    /// The directory receiving the compiled templates, created if absent
    pub output_dir: PathBuf,
}

impl Templates {
    #[tracing::instrument(level = "trace", skip(self, _config))]
    pub async fn run(self, _config: Option<PathBuf>) -> Result<()> {
        let cfg = RtcTemplates::new(self.input_dir, self.output_dir);
        TemplatePipeline::new(Arc::new(cfg)).run().await
    }
}
