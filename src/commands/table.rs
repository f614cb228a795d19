use clap::{Args, Subcommand};
use serde::Serialize;

use confmig::{Registry, RenameRule};

use super::{parse_version, CmdResult, GlobalArgs};

#[derive(Args)]
pub struct TableArgs {
    #[command(subcommand)]
    command: TableCommand,
}

#[derive(Subcommand)]
enum TableCommand {
    /// List registered rename tables in version order
    List,
    /// Show the rules of one rename table
    Show {
        /// Table version (e.g., 0.50.0)
        version: String,
    },
    /// Validate built-in and configured rename tables
    Validate,
}

#[derive(Debug, Serialize)]
pub struct TableSummary {
    pub version: String,
    pub rules: usize,
}

#[derive(Debug, Serialize)]
pub struct TableListOutput {
    pub command: String,
    pub tables: Vec<TableSummary>,
}

#[derive(Debug, Serialize)]
pub struct TableShowOutput {
    pub command: String,
    pub version: String,
    pub rules: Vec<RenameRule>,
}

#[derive(Debug, Serialize)]
pub struct TableValidateOutput {
    pub command: String,
    pub valid: bool,
    pub tables: usize,
    pub rules: usize,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TableOutput {
    List(TableListOutput),
    Show(TableShowOutput),
    Validate(TableValidateOutput),
}

pub fn run(args: TableArgs, global: &GlobalArgs) -> CmdResult<TableOutput> {
    let registry = global.registry()?;

    match args.command {
        TableCommand::List => Ok((TableOutput::List(list(&registry)), 0)),
        TableCommand::Show { version } => Ok((TableOutput::Show(show(&registry, &version)?), 0)),
        TableCommand::Validate => Ok((TableOutput::Validate(validate(&registry)), 0)),
    }
}

fn list(registry: &Registry) -> TableListOutput {
    TableListOutput {
        command: "table.list".to_string(),
        tables: registry
            .tables()
            .map(|table| TableSummary {
                version: table.version().to_string(),
                rules: table.len(),
            })
            .collect(),
    }
}

fn show(registry: &Registry, version: &str) -> confmig::Result<TableShowOutput> {
    let version = parse_version(version)?;
    let table = registry.require(&version)?;

    Ok(TableShowOutput {
        command: "table.show".to_string(),
        version: version.to_string(),
        rules: table.rules().to_vec(),
    })
}

// Reaching this point means every table passed validation while the
// registry was built.
fn validate(registry: &Registry) -> TableValidateOutput {
    TableValidateOutput {
        command: "table.validate".to_string(),
        valid: true,
        tables: registry.len(),
        rules: registry.rule_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_reports_builtin_table() {
        let output = list(&Registry::builtin().unwrap());
        assert_eq!(output.tables.len(), 1);
        assert_eq!(output.tables[0].version, "0.50.0");
        assert_eq!(output.tables[0].rules, 10);
    }

    #[test]
    fn show_preserves_rule_order() {
        let output = show(&Registry::builtin().unwrap(), "0.50.0").unwrap();
        assert_eq!(output.rules[0].old_key, "Style/AccessorMethodName");
        assert_eq!(output.rules[9].new_key, "Naming/VariableNumber");
    }

    #[test]
    fn show_unknown_version_fails() {
        let err = show(&Registry::builtin().unwrap(), "1.0.0").unwrap_err();
        assert_eq!(err.code, confmig::ErrorCode::RenameTableNotFound);
    }
}
