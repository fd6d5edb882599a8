//! Command-line interface for deptree
//!
//! # Commands
//!
//! - `render` - Render a dependency tree file as DOT or JSON
//! - `templates` - List the templates that can be rendered
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Debug logging
//! - `--quiet` / `-q` - Errors only
//! - `--config` / `-c` - Configuration file (see [`crate::config`])
//!
//! Logging goes to stderr so rendered output on stdout stays clean. `RUST_LOG`
//! overrides the level chosen by the flags.
//!
//! # Examples
//!
//! ```bash
//! deptree render --input tree.toml > tree.dot
//! deptree render --input tree.toml --layout records --output tree.dot
//! deptree render --input tree.json --format json
//! deptree templates --templates-dir ./my-templates
//! ```

mod render;
mod templates;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::config::DeptreeConfig;

pub use render::{OutputFormatArg, RenderCommand};
pub use templates::TemplatesCommand;

/// Settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Default log filter, used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Configuration file given with `--config`.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Install the global tracing subscriber. Does nothing if one is already set.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// The configuration file contents, or defaults when none was given.
    pub fn load_config(&self) -> Result<DeptreeConfig> {
        self.config_path.as_deref().map_or_else(|| Ok(DeptreeConfig::default()), DeptreeConfig::load)
    }
}

#[derive(Parser)]
#[command(
    name = "deptree",
    about = "Render dependency trees as Graphviz graphs or JSON documents",
    version,
    long_about = "deptree reads a resolved dependency tree, groups dependencies into clusters by namespace \
                  and renders the result through Tera templates."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a configuration file
    #[arg(short, long, global = true, env = "DEPTREE_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a dependency tree
    Render(RenderCommand),

    /// List available templates
    Templates(TemplatesCommand),
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(&config)
    }

    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
            config_path: self.config.clone(),
        }
    }

    pub fn execute_with_config(self, config: &CliConfig) -> Result<()> {
        match self.command {
            Commands::Render(cmd) => cmd.execute(config),
            Commands::Templates(cmd) => cmd.execute(config),
        }
    }
}

/// Config search path plus an optional command-line directory.
fn template_dirs(config: &DeptreeConfig, extra: Option<&Path>) -> crate::templating::ResourceLoader {
    let extra: Vec<PathBuf> = extra.map(Path::to_path_buf).into_iter().collect();
    config.loader(&extra)
}
