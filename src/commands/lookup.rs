use clap::Args;
use serde::Serialize;

use confmig::Registry;

use super::{parse_version, CmdResult, GlobalArgs};

#[derive(Args)]
pub struct LookupArgs {
    /// Fully qualified key (e.g., Style/FileName)
    pub key: String,

    /// Only consult the table for this version
    #[arg(long)]
    pub version: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LookupMatch {
    pub version: String,
    pub new_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupOutput {
    pub command: String,
    pub key: String,
    pub renamed: bool,
    pub matches: Vec<LookupMatch>,
}

pub fn run(args: LookupArgs, global: &GlobalArgs) -> CmdResult<LookupOutput> {
    let registry = global.registry()?;
    Ok((lookup(&registry, &args.key, args.version.as_deref())?, 0))
}

fn lookup(registry: &Registry, key: &str, version: Option<&str>) -> confmig::Result<LookupOutput> {
    let matches: Vec<LookupMatch> = match version {
        Some(raw) => {
            let version = parse_version(raw)?;
            let table = registry.require(&version)?;
            table
                .lookup(key)
                .map(|new_key| LookupMatch {
                    version: version.to_string(),
                    new_key: new_key.to_string(),
                })
                .into_iter()
                .collect()
        }
        None => registry
            .lookup_all(key)
            .into_iter()
            .map(|(version, new_key)| LookupMatch {
                version: version.to_string(),
                new_key: new_key.to_string(),
            })
            .collect(),
    };

    Ok(LookupOutput {
        command: "lookup".to_string(),
        key: key.to_string(),
        renamed: !matches.is_empty(),
        matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::builtin().unwrap()
    }

    #[test]
    fn renamed_key_reports_match() {
        let output = lookup(&registry(), "Style/ConstantName", Some("0.50.0")).unwrap();
        assert!(output.renamed);
        assert_eq!(
            output.matches,
            vec![LookupMatch {
                version: "0.50.0".to_string(),
                new_key: "Naming/ConstantName".to_string(),
            }]
        );
    }

    #[test]
    fn unrenamed_key_is_not_an_error() {
        let output = lookup(&registry(), "Style/Foo", None).unwrap();
        assert!(!output.renamed);
        assert!(output.matches.is_empty());
    }

    #[test]
    fn already_new_key_is_not_renamed() {
        let output = lookup(&registry(), "Naming/ConstantName", None).unwrap();
        assert!(!output.renamed);
    }

    #[test]
    fn unknown_version_fails() {
        let err = lookup(&registry(), "Style/FileName", Some("9.0.0")).unwrap_err();
        assert_eq!(err.code, confmig::ErrorCode::RenameTableNotFound);
    }
}
