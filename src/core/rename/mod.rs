//! Rename tables: deprecated configuration keys and their replacements.
//!
//! A `RenameTable` belongs to exactly one version step. It is validated on
//! construction, so a table that exists is free of no-op and duplicate rules.

mod builtin;
mod registry;

pub use builtin::builtin_tables;
pub use registry::Registry;

use crate::error::{Error, Result};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Types
// ============================================================================

/// A single legacy key and the key that replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRule {
    pub old_key: String,
    pub new_key: String,
}

impl RenameRule {
    pub fn new(old_key: impl Into<String>, new_key: impl Into<String>) -> Self {
        Self {
            old_key: old_key.into(),
            new_key: new_key.into(),
        }
    }
}

/// Unvalidated table as it appears in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    pub version: Version,
    #[serde(default)]
    pub rules: Vec<RenameRule>,
}

impl TableSpec {
    pub fn build(&self) -> Result<RenameTable> {
        RenameTable::new(self.version.clone(), self.rules.clone())
    }
}

/// Ordered, immutable set of renames for one version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TableSpec")]
pub struct RenameTable {
    version: Version,
    rules: Vec<RenameRule>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl PartialEq for RenameTable {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.rules == other.rules
    }
}

impl Eq for RenameTable {}

impl TryFrom<TableSpec> for RenameTable {
    type Error = Error;

    fn try_from(spec: TableSpec) -> Result<Self> {
        RenameTable::new(spec.version, spec.rules)
    }
}

// ============================================================================
// Construction
// ============================================================================

impl RenameTable {
    /// Validate `rules` and build the lookup index.
    ///
    /// Fails on the first rule that has an empty key, renames a key to
    /// itself, or repeats an `old_key` seen earlier in the table.
    pub fn new(version: Version, rules: Vec<RenameRule>) -> Result<Self> {
        let mut index = HashMap::with_capacity(rules.len());

        for (pos, rule) in rules.iter().enumerate() {
            if rule.old_key.trim().is_empty() || rule.new_key.trim().is_empty() {
                return Err(Error::rename_empty_key(
                    &version,
                    &rule.old_key,
                    &rule.new_key,
                ));
            }
            if rule.old_key == rule.new_key {
                return Err(Error::rename_noop_rule(&version, &rule.old_key));
            }
            if let Some(&first) = index.get(&rule.old_key) {
                let first: &RenameRule = &rules[first];
                return Err(Error::rename_duplicate_key(
                    &version,
                    &rule.old_key,
                    &first.new_key,
                    &rule.new_key,
                ));
            }
            index.insert(rule.old_key.clone(), pos);
        }

        Ok(Self {
            version,
            rules,
            index,
        })
    }

    /// Build a table from literal `(old, new)` pairs.
    pub fn from_pairs(version: Version, pairs: &[(&str, &str)]) -> Result<Self> {
        let rules = pairs
            .iter()
            .map(|(old, new)| RenameRule::new(*old, *new))
            .collect();
        Self::new(version, rules)
    }
}

// ============================================================================
// Queries
// ============================================================================

impl RenameTable {
    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn rules(&self) -> &[RenameRule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenameRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Replacement for `old_key`, or `None` if the key is not renamed.
    pub fn lookup(&self, old_key: &str) -> Option<&str> {
        self.index
            .get(old_key)
            .map(|&pos| self.rules[pos].new_key.as_str())
    }

    pub fn contains(&self, old_key: &str) -> bool {
        self.index.contains_key(old_key)
    }
}

impl<'a> IntoIterator for &'a RenameTable {
    type Item = &'a RenameRule;
    type IntoIter = std::slice::Iter<'a, RenameRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
