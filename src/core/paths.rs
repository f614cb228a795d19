use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CONFMIG_CONFIG";

/// Base confmig config directory (universal ~/.config/confmig/ on all platforms)
pub fn confmig() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected("APPDATA environment variable not set on Windows")
        })?;
        Ok(PathBuf::from(appdata).join("confmig"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected("HOME environment variable not set on Unix-like system")
        })?;
        Ok(PathBuf::from(home).join(".config").join("confmig"))
    }
}

/// Config file path, honouring `CONFMIG_CONFIG` (with `~` and `$VAR` expansion).
pub fn config_file() -> Result<PathBuf> {
    match env::var(CONFIG_ENV) {
        Ok(raw) if !raw.trim().is_empty() => expand(&raw),
        _ => Ok(confmig()?.join("confmig.json")),
    }
}

pub(crate) fn expand(raw: &str) -> Result<PathBuf> {
    shellexpand::full(raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| {
            Error::validation_invalid_argument(CONFIG_ENV, e.to_string(), Some(raw.to_string()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_leaves_plain_path() {
        assert_eq!(
            expand("/etc/confmig.yml").unwrap(),
            PathBuf::from("/etc/confmig.yml")
        );
    }

    // Both cases share one test so the env mutation cannot race.
    #[cfg(not(windows))]
    #[test]
    fn config_file_honours_env_override() {
        let home = PathBuf::from(env::var("HOME").unwrap());

        env::set_var(CONFIG_ENV, "~/x.yml");
        let overridden = config_file();

        env::set_var(CONFIG_ENV, "  ");
        let blank = config_file();
        env::remove_var(CONFIG_ENV);

        assert_eq!(overridden.unwrap(), home.join("x.yml"));
        assert_eq!(
            blank.unwrap(),
            home.join(".config").join("confmig").join("confmig.json")
        );
    }

    #[test]
    fn expand_unknown_variable_fails() {
        let err = expand("$CONFMIG_TEST_SURELY_UNSET_VAR/x.json").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }
}
