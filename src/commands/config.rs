use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::Path;

use confmig::config::{self, ConfmigConfig};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Display the loaded configuration
    Show,
    /// Show the path to the config file
    Path,
    /// Write an empty config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    command: String,
    path: String,
    exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<ConfmigConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    written: Option<bool>,
}

pub fn run(args: ConfigArgs, _global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show => show(),
        ConfigCommand::Path => path(),
        ConfigCommand::Init { force } => init(force),
    }
}

fn show() -> CmdResult<ConfigOutput> {
    Ok((
        ConfigOutput {
            command: "config.show".to_string(),
            path: config::config_path()?,
            exists: config::config_exists(),
            config: Some(config::load_config()?),
            written: None,
        },
        0,
    ))
}

fn path() -> CmdResult<ConfigOutput> {
    Ok((
        ConfigOutput {
            command: "config.path".to_string(),
            path: config::config_path()?,
            exists: config::config_exists(),
            config: None,
            written: None,
        },
        0,
    ))
}

fn init(force: bool) -> CmdResult<ConfigOutput> {
    let path = config::config_path()?;
    init_at(Path::new(&path), force)
}

/// Write an empty config at `path` unless one exists and `force` is unset.
fn init_at(path: &Path, force: bool) -> CmdResult<ConfigOutput> {
    let written = if path.exists() && !force {
        false
    } else {
        config::save_config_to(path, &ConfmigConfig::default())?;
        true
    };

    Ok((
        ConfigOutput {
            command: "config.init".to_string(),
            path: path.display().to_string(),
            exists: true,
            config: None,
            written: Some(written),
        },
        0,
    ))
}
