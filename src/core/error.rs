use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    RenameNoopRule,
    RenameEmptyKey,
    RenameDuplicateKey,
    RenameVersionCollision,
    RenameTableNotFound,

    ConfigInvalidJson,
    ConfigInvalidYaml,

    ValidationInvalidArgument,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::RenameNoopRule => "rename.noop_rule",
            ErrorCode::RenameEmptyKey => "rename.empty_key",
            ErrorCode::RenameDuplicateKey => "rename.duplicate_key",
            ErrorCode::RenameVersionCollision => "rename.version_collision",
            ErrorCode::RenameTableNotFound => "rename.table_not_found",

            ErrorCode::ConfigInvalidJson => "config.invalid_json",
            ErrorCode::ConfigInvalidYaml => "config.invalid_yaml",

            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDetails {
    pub version: String,
    pub old_key: String,
    pub new_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateKeyDetails {
    pub version: String,
    pub old_key: String,
    pub first_new_key: String,
    pub second_new_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDetails {
    pub version: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigParseDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn rename_noop_rule(version: &semver::Version, key: impl Into<String>) -> Self {
        let key = key.into();
        let message = format!("Rule renames '{}' to itself in table {}", key, version);
        Self::new(
            ErrorCode::RenameNoopRule,
            message,
            to_details(RuleDetails {
                version: version.to_string(),
                old_key: key.clone(),
                new_key: key,
            }),
        )
        .with_hint("Remove the rule; keys that keep their name need no entry")
    }

    pub fn rename_empty_key(
        version: &semver::Version,
        old_key: impl Into<String>,
        new_key: impl Into<String>,
    ) -> Self {
        Self::new(
            ErrorCode::RenameEmptyKey,
            format!("Rule in table {} has an empty key", version),
            to_details(RuleDetails {
                version: version.to_string(),
                old_key: old_key.into(),
                new_key: new_key.into(),
            }),
        )
    }

    pub fn rename_duplicate_key(
        version: &semver::Version,
        old_key: impl Into<String>,
        first_new_key: impl Into<String>,
        second_new_key: impl Into<String>,
    ) -> Self {
        let old_key = old_key.into();
        Self::new(
            ErrorCode::RenameDuplicateKey,
            format!("Key '{}' is renamed twice in table {}", old_key, version),
            to_details(DuplicateKeyDetails {
                version: version.to_string(),
                old_key,
                first_new_key: first_new_key.into(),
                second_new_key: second_new_key.into(),
            }),
        )
    }

    pub fn rename_version_collision(version: &semver::Version) -> Self {
        Self::new(
            ErrorCode::RenameVersionCollision,
            format!("A rename table is already registered for version {}", version),
            to_details(VersionDetails {
                version: version.to_string(),
            }),
        )
        .with_hint("Merge the rules into the existing table or pick another version")
    }

    pub fn rename_table_not_found(version: &semver::Version) -> Self {
        Self::new(
            ErrorCode::RenameTableNotFound,
            "Rename table not found",
            to_details(VersionDetails {
                version: version.to_string(),
            }),
        )
        .with_hint("Run 'confmig table list' to see registered versions")
    }

    pub fn config_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidJson,
            "Invalid JSON in configuration",
            to_details(ConfigParseDetails {
                path: path.into(),
                error: err.to_string(),
            }),
        )
    }

    pub fn config_invalid_yaml(path: impl Into<String>, err: serde_yml::Error) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidYaml,
            "Invalid YAML in configuration",
            to_details(ConfigParseDetails {
                path: path.into(),
                error: err.to_string(),
            }),
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            to_details(InvalidArgumentDetails {
                field: field.into(),
                problem: problem.into(),
                value,
            }),
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalIoError,
            "IO error",
            to_details(InternalErrorDetails {
                error: error.into(),
                context,
            }),
        )
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalJsonError,
            "JSON error",
            to_details(InternalErrorDetails {
                error: error.into(),
                context,
            }),
        )
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    #[test]
    fn duplicate_key_details_are_camel_case() {
        let err = Error::rename_duplicate_key(
            &Version::new(0, 50, 0),
            "Style/FileName",
            "Naming/FileName",
            "Naming/Other",
        );
        assert_eq!(err.code.as_str(), "rename.duplicate_key");
        assert_eq!(err.details["oldKey"], "Style/FileName");
        assert_eq!(err.details["secondNewKey"], "Naming/Other");
    }

    #[test]
    fn table_not_found_carries_hint() {
        let err = Error::rename_table_not_found(&Version::new(9, 9, 9));
        assert_eq!(err.details["version"], "9.9.9");
        assert_eq!(err.hints.len(), 1);
    }
}
