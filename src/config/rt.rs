//! Runtime config.
//!
//! The runtime configuration is the result of merging the persisted model
//! with the CLI arguments of the command being run.

use super::{Configuration, DEFAULT_BASE};
use std::path::PathBuf;

/// Runtime config for the HTML asset rewriter.
#[derive(Clone, Debug)]
pub struct RtcHtml {
    /// The source HTML document.
    pub input: PathBuf,
    /// The destination of the rewritten document.
    pub output: PathBuf,
    /// The prefix prepended to every rewritten asset reference, used verbatim.
    pub base: String,
}

impl RtcHtml {
    /// Construct a new instance.
    ///
    /// Base path precedence: CLI argument, then config file, then the
    /// built-in default.
    pub fn new(cfg: Configuration, input: PathBuf, output: PathBuf, base: Option<String>) -> Self {
        let base = base
            .or(cfg.html.base)
            .unwrap_or_else(|| DEFAULT_BASE.to_string());
        Self {
            input,
            output,
            base,
        }
    }
}

/// Runtime config for the template batch compiler.
#[derive(Clone, Debug)]
pub struct RtcTemplates {
    /// The directory searched recursively for template sources.
    pub input_dir: PathBuf,
    /// The directory receiving the compiled templates.
    pub output_dir: PathBuf,
}

impl RtcTemplates {
    /// Construct a new instance.
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Html;
    use rstest::rstest;

    #[rstest]
    // cli, config file, resolved
    #[case(None, None, "frontend-public/")]
    #[case(None, Some("configured/"), "configured/")]
    #[case(Some("cli/"), None, "cli/")]
    #[case(Some("cli/"), Some("configured/"), "cli/")]
    // an empty CLI base is a valid prefix, not an absent one
    #[case(Some(""), Some("configured/"), "")]
    fn base_precedence(
        #[case] cli: Option<&str>,
        #[case] configured: Option<&str>,
        #[case] expected: &str,
    ) {
        let cfg = Configuration {
            html: Html {
                base: configured.map(str::to_string),
            },
        };
        let rtc = RtcHtml::new(
            cfg,
            "in.html".into(),
            "out.html".into(),
            cli.map(str::to_string),
        );
        assert_eq!(expected, rtc.base);
    }
}
