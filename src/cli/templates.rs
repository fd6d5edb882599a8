//! List renderable templates.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::{CliConfig, template_dirs};
use crate::templating::Origin;

/// List packaged templates and those found in the search path.
#[derive(Debug, Args)]
pub struct TemplatesCommand {
    /// Additional directory to search for templates
    #[arg(long)]
    templates_dir: Option<PathBuf>,
}

impl TemplatesCommand {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let settings = config.load_config()?;
        let loader = template_dirs(&settings, self.templates_dir.as_deref());

        for dir in loader.search_path() {
            if !dir.is_dir() {
                tracing::warn!("template directory {} does not exist", dir.display());
            }
        }

        for entry in loader.entries() {
            let origin = match &entry.origin {
                Origin::Packaged => entry.origin.to_string().dimmed(),
                other => other.to_string().cyan(),
            };
            println!("{}  ({})", entry.name.bold(), origin);
        }
        Ok(())
    }
}
