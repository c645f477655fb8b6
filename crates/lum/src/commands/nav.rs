//! `lum nav` command implementation.

use clap::Args;
use lum_config::Config;
use lum_nav::PageContext;

use super::{ConfigArgs, navigator_from_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Request path of the document (e.g. `/docs/guide/`).
    #[arg(default_value = "/")]
    request_path: String,

    #[command(flatten)]
    config: ConfigArgs,

    /// Print JSON on a single line.
    #[arg(long)]
    compact: bool,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the request path is invalid
    /// or the menu directory cannot be listed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.config.load()?;
        let json = self.render(&config)?;
        Output::new().data(&json);
        Ok(())
    }

    /// Build the navigation for the request path and serialize it.
    fn render(&self, config: &Config) -> Result<String, CliError> {
        let context = PageContext::resolve_with_extension(
            &config.docs_resolved.source_dir,
            &self.request_path,
            &config.navigation.content_extension,
        )?;
        tracing::debug!(
            request_path = %self.request_path,
            file_path = %context.file_path.display(),
            "Resolved request"
        );

        let navigation = navigator_from_config(config).build(&context)?;

        let json = if self.compact {
            serde_json::to_string(&navigation)?
        } else {
            serde_json::to_string_pretty(&navigation)?
        };
        Ok(json)
    }
}
