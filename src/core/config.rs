use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::paths;
use crate::rename::{Registry, TableSpec};

/// Root configuration structure for confmig.json / confmig.yml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConfmigConfig {
    /// Extra rename tables registered after the built-in ones.
    #[serde(default)]
    pub tables: Vec<TableSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

fn format_for(path: &Path) -> Format {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yml") | Some("yaml") => Format::Yaml,
        _ => Format::Json,
    }
}

/// Load the config from its resolved path.
///
/// A missing file is an empty config. A malformed one is an error, since
/// silently dropping it would hide broken rename tables.
pub fn load_config() -> Result<ConfmigConfig> {
    load_config_from(&paths::config_file()?)
}

pub fn load_config_from(path: &Path) -> Result<ConfmigConfig> {
    if !path.exists() {
        return Ok(ConfmigConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    let display = path.display().to_string();
    let config: ConfmigConfig = match format_for(path) {
        Format::Json => serde_json::from_str(&content)
            .map_err(|e| Error::config_invalid_json(display, e))?,
        Format::Yaml => serde_yml::from_str(&content)
            .map_err(|e| Error::config_invalid_yaml(display, e))?,
    };

    log_status!(
        "config",
        "Loaded {} rename table(s) from {}",
        config.tables.len(),
        path.display()
    );

    Ok(config)
}

/// Write `config` to `path`, creating parent directories as needed.
pub fn save_config_to(path: &Path, config: &ConfmigConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
        })?;
    }

    let content = match format_for(path) {
        Format::Json => serde_json::to_string_pretty(config)
            .map_err(|e| Error::internal_json(e.to_string(), Some("serialize config".into())))?,
        Format::Yaml => serde_yml::to_string(config)
            .map_err(|e| Error::internal_unexpected(format!("serialize config: {}", e)))?,
    };

    fs::write(path, content).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("write {}", path.display())))
    })?;

    Ok(())
}

pub fn config_exists() -> bool {
    paths::config_file().map(|p| p.exists()).unwrap_or(false)
}

/// Get the config path (for display purposes)
pub fn config_path() -> Result<String> {
    Ok(paths::config_file()?.display().to_string())
}

/// Built-in tables plus every table from `config`, validated together.
pub fn build_registry(config: &ConfmigConfig) -> Result<Registry> {
    let mut registry = Registry::builtin()?;
    for spec in &config.tables {
        registry.register(spec.build()?)?;
    }

    log_status!(
        "registry",
        "{} table(s), {} rule(s) registered",
        registry.len(),
        registry.rule_count()
    );

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::rename::RenameRule;
    use semver::Version;

    #[test]
    fn yaml_extension_selects_yaml() {
        assert_eq!(format_for(Path::new("a/confmig.yml")), Format::Yaml);
        assert_eq!(format_for(Path::new("a/confmig.yaml")), Format::Yaml);
        assert_eq!(format_for(Path::new("a/confmig.json")), Format::Json);
        assert_eq!(format_for(Path::new("a/confmig")), Format::Json);
    }

    #[test]
    fn missing_tables_field_defaults_empty() {
        let config: ConfmigConfig = serde_json::from_str("{}").unwrap();
        assert!(config.tables.is_empty());
    }

    #[test]
    fn build_registry_adds_config_tables() {
        let config = ConfmigConfig {
            tables: vec![TableSpec {
                version: Version::new(0, 51, 0),
                rules: vec![RenameRule::new("Lint/Old", "Lint/New")],
            }],
        };
        let registry = build_registry(&config).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.lookup(&Version::new(0, 51, 0), "Lint/Old"),
            Some("Lint/New")
        );
    }

    #[test]
    fn build_registry_rejects_builtin_version() {
        let config = ConfmigConfig {
            tables: vec![TableSpec {
                version: Version::new(0, 50, 0),
                rules: Vec::new(),
            }],
        };
        let err = build_registry(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::RenameVersionCollision);
    }

    #[test]
    fn build_registry_reports_duplicate_key() {
        let config = ConfmigConfig {
            tables: vec![TableSpec {
                version: Version::new(0, 52, 0),
                rules: vec![
                    RenameRule::new("Lint/A", "Lint/B"),
                    RenameRule::new("Lint/A", "Lint/C"),
                ],
            }],
        };
        let err = build_registry(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::RenameDuplicateKey);
    }
}
