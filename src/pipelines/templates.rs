//! MJML template compilation pipeline.

use super::{OUTPUT_EXT, TEMPLATE_EXT};
use crate::common::{self, BUILDING, SUCCESS};
use crate::config::rt::RtcTemplates;
use crate::processing::render::render_mjml;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::fs;

/// The template batch compilation pipeline.
///
/// Renders every template source found under the input directory and writes
/// the results flat into the output directory, swapping the source suffix
/// for the compiled one. Input subdirectory structure is not mirrored, so
/// sources sharing a base name overwrite each other; the last one processed
/// wins.
pub struct TemplatePipeline {
    /// Runtime config.
    cfg: Arc<RtcTemplates>,
}

impl TemplatePipeline {
    /// Create a new instance.
    pub fn new(cfg: Arc<RtcTemplates>) -> Self {
        Self { cfg }
    }

    /// Run this pipeline.
    ///
    /// The first failing read, render or write aborts the whole batch.
    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn run(self) -> Result<()> {
        tracing::info!(
            "{}compiling templates from {:?}",
            BUILDING,
            common::strip_prefix(&self.cfg.input_dir)
        );

        fs::create_dir_all(&self.cfg.output_dir)
            .await
            .with_context(|| {
                format!("error creating output directory {:?}", self.cfg.output_dir)
            })?;

        let sources =
            common::collect_files_with_suffix(self.cfg.input_dir.clone(), TEMPLATE_EXT).await?;
        for source in &sources {
            self.compile(source).await?;
        }

        match sources.len() {
            0 => tracing::warn!(
                "no {} templates found under {:?}",
                TEMPLATE_EXT,
                self.cfg.input_dir
            ),
            n => tracing::info!("{}compiled {} templates", SUCCESS, n),
        }

        Ok(())
    }

    /// Compile a single template source into the output directory.
    async fn compile(&self, source: &Path) -> Result<()> {
        let rel_source = common::strip_prefix(source);
        tracing::debug!(path = ?rel_source, "rendering template");

        let text = fs::read_to_string(source)
            .await
            .with_context(|| format!("error reading template {:?}", source))?;
        let rendered = render_mjml(&text)
            .with_context(|| format!("error rendering template {:?}", source))?;

        let output = self.cfg.output_dir.join(output_name(source)?);
        fs::write(&output, rendered)
            .await
            .with_context(|| format!("error writing compiled template {:?}", output))?;

        tracing::debug!(path = ?rel_source, "finished rendering template");
        Ok(())
    }
}

/// Compute the flat output file name for a template source path.
fn output_name(source: &Path) -> Result<String> {
    let name = source
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("invalid template file name {:?}", source))?;
    let stem = name.strip_suffix(TEMPLATE_EXT).with_context(|| {
        format!(
            "template {:?} does not carry the {} suffix",
            source, TEMPLATE_EXT
        )
    })?;
    Ok(format!("{stem}{OUTPUT_EXT}"))
}
