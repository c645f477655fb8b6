//! `lum check` command implementation.

use clap::Args;
use lum_nav::PageContext;

use super::{ConfigArgs, navigator_from_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the document root cannot
    /// be listed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let source_dir = &config.docs_resolved.source_dir;

        if let Some(config_path) = &config.config_path {
            output.info(&format!("Config: {}", config_path.display()));
        }
        output.info(&format!("Document root: {}", source_dir.display()));

        let context = PageContext::resolve_with_extension(
            source_dir,
            "/",
            &config.navigation.content_extension,
        )?;
        let navigator = navigator_from_config(&config);
        let menu = navigator.menu(&context)?;
        let pages = navigator.try_side_menu(&context)?;

        output.success(&format!(
            "OK: {} menu sections, {} top-level pages",
            menu.len(),
            pages.len()
        ));
        Ok(())
    }
}
