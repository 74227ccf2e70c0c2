//! gigtape - Terminal-based concert recording manifest and metadata system.
//!
//! Concert recordings are described by YAML manifests: a `defaults` mapping
//! of shared metadata (artist, album, date, resolution, filename templates)
//! and a `performances` list of per-recording overrides. gigtape merges the
//! two, derives filesystem-safe variants of fields on demand, renders the
//! `{field}` filename and path templates, and previews or validates the
//! resulting output layout.
//!
//! Incomplete metadata fails loudly. A performance with an unset critical
//! field or an unresolvable template placeholder is reported as a problem
//! for a human to fix, never silently rendered into a mis-titled file.

use clap::{CommandFactory, Parser, Subcommand, builder::PossibleValuesParser};
use clap_complete::{Generator, Shell, generate};
use std::error::Error;
use std::io;

mod attrs;
mod cli;
mod config;
mod constants;
mod error;
mod manifest;
mod performance;
mod render;
mod sanitize;
mod utils;

#[derive(Parser)]
#[command(name = "gigtape")]
#[command(about = "Terminal-based concert recording manifest and metadata system")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize gigtape configuration
    Init,
    /// Show current configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Preview the proposed output tree for one or more manifests
    Preview {
        /// YAML manifest files containing defaults and/or performances
        #[arg(required = true)]
        manifests: Vec<String>,
    },
    /// Show every performance's resolved metadata in full
    Show {
        /// YAML manifest files containing defaults and/or performances
        #[arg(required = true)]
        manifests: Vec<String>,
    },
    /// Validate manifest metadata and filename templates
    Lint {
        /// YAML manifest files containing defaults and/or performances
        #[arg(required = true)]
        manifests: Vec<String>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// View current configuration
    View,
    /// Set a configuration value
    Set {
        /// Configuration key
        #[arg(value_parser = PossibleValuesParser::new([
            "default_genre",
            "default_resolution",
            "default_bitrate",
            "default_recording",
        ]))]
        key: String,
        /// Configuration value
        value: String,
    },
    /// Edit configuration file in your editor
    Edit,
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut io::stdout(),
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            cli::init::handle_init()?;
        }
        Commands::Config { action } => match action {
            ConfigAction::View => {
                cli::config::handle_config_view()?;
            }
            ConfigAction::Set { key, value } => {
                cli::config::handle_config_set(&key, &value)?;
            }
            ConfigAction::Edit => {
                cli::config::handle_config_edit()?;
            }
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        Commands::Preview { manifests } => {
            cli::preview::handle_preview(&manifests)?;
        }
        Commands::Show { manifests } => {
            cli::show::handle_show(&manifests)?;
        }
        Commands::Lint { manifests } => {
            cli::lint::handle_lint(&manifests)?;
        }
    }

    Ok(())
}
