//! Common functionality and types.
pub mod html_rewrite;

use anyhow::{Context, Result};
use console::Emoji;
use once_cell::sync::Lazy;
use std::fs::Metadata;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub static STARTING: Emoji = Emoji("🚀 ", "");
pub static BUILDING: Emoji = Emoji("📦 ", "");
pub static SUCCESS: Emoji = Emoji("✅ ", "");

// If we fail to get the current_dir, we can't do much and just fail, so we can use expect(..).
#[allow(clippy::expect_used)]
static CWD: Lazy<PathBuf> =
    Lazy::new(|| std::env::current_dir().expect("error getting current dir"));

/// Recursively collect every regular file under `dir` whose file name ends
/// with `suffix` (case-sensitive).
///
/// A missing or non-directory `dir` yields an empty collection rather than an
/// error; callers decide whether zero matches is worth flagging. Traversal
/// order is unspecified.
pub async fn collect_files_with_suffix(dir: PathBuf, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut collector = Vec::new();

    if !path_exists_and(&dir, |meta| meta.is_dir()).await? {
        return Ok(collector);
    }

    // Collect matching files and recursively handle nested directories.
    let mut read_dir = tokio::fs::read_dir(&dir)
        .await
        .with_context(|| format!("unable to read dir {:?}", dir))?;
    while let Some(entry) = read_dir
        .next_entry()
        .await
        .with_context(|| format!("unable to read next entry of dir {:?}", dir))?
    {
        let file_type = entry.file_type().await?;
        if file_type.is_dir() {
            let files = Box::pin(collect_files_with_suffix(entry.path(), suffix)).await?;
            collector.extend(files);
        } else if file_type.is_file() && entry.file_name().to_string_lossy().ends_with(suffix) {
            collector.push(entry.path());
        }
    }

    Ok(collector)
}

/// Checks if path exists.
pub async fn path_exists(path: impl AsRef<Path>) -> Result<bool> {
    path_exists_and(path, |_| true).await
}

/// Checks if path exists and metadata matches the given predicate.
pub async fn path_exists_and(
    path: impl AsRef<Path>,
    and: impl FnOnce(Metadata) -> bool,
) -> Result<bool> {
    tokio::fs::metadata(path.as_ref())
        .await
        .map(and)
        .or_else(|error| {
            if error.kind() == ErrorKind::NotFound {
                Ok(false)
            } else {
                Err(error)
            }
        })
        .with_context(|| {
            format!(
                "error checking for existence of path at {:?}",
                path.as_ref()
            )
        })
}

/// Strip the CWD prefix from the given path.
///
/// Returns `target` unmodified if an error is returned from the operation.
pub fn strip_prefix(target: &Path) -> &Path {
    target.strip_prefix(CWD.as_path()).unwrap_or(target)
}
