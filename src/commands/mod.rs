use confmig::config::{build_registry, load_config};
use confmig::Registry;
use semver::Version;

pub type CmdResult<T> = confmig::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

impl GlobalArgs {
    /// Load the config file and build the registry every command reads from.
    pub(crate) fn registry(&self) -> confmig::Result<Registry> {
        build_registry(&load_config()?)
    }
}

/// Parse a version argument such as `0.50.0`.
pub(crate) fn parse_version(raw: &str) -> confmig::Result<Version> {
    Version::parse(raw.trim()).map_err(|e| {
        confmig::Error::validation_invalid_argument(
            "version",
            format!("Not a semantic version: {}", e),
            Some(raw.to_string()),
        )
    })
}

pub mod config;
pub mod lookup;
pub mod table;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (confmig::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Table(args) => dispatch!(args, global, table),
        crate::Commands::Lookup(args) => dispatch!(args, global, lookup),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
