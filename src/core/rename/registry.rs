use super::{builtin_tables, RenameTable};
use crate::error::{Error, Result};
use semver::Version;
use std::collections::btree_map::{BTreeMap, Entry};

/// Rename tables keyed by version.
///
/// Built once at startup and handed to consumers by reference. Iteration is
/// in ascending version order, which is the only ordering tables have.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tables: BTreeMap<Version, RenameTable>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in table.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for table in builtin_tables()? {
            registry.register(table)?;
        }
        Ok(registry)
    }

    /// Add `table` under its own version. Fails if the version is taken.
    pub fn register(&mut self, table: RenameTable) -> Result<()> {
        match self.tables.entry(table.version().clone()) {
            Entry::Occupied(entry) => Err(Error::rename_version_collision(entry.key())),
            Entry::Vacant(entry) => {
                entry.insert(table);
                Ok(())
            }
        }
    }

    pub fn resolve(&self, version: &Version) -> Option<&RenameTable> {
        self.tables.get(version)
    }

    pub fn require(&self, version: &Version) -> Result<&RenameTable> {
        self.resolve(version)
            .ok_or_else(|| Error::rename_table_not_found(version))
    }

    /// Replacement for `old_key` in the table for `version`.
    ///
    /// An unregistered version reports absence like an unrenamed key.
    pub fn lookup(&self, version: &Version, old_key: &str) -> Option<&str> {
        self.resolve(version)?.lookup(old_key)
    }

    /// Every table that renames `old_key`, in ascending version order.
    ///
    /// Each hit is independent. A `new_key` is not fed into later tables.
    pub fn lookup_all(&self, old_key: &str) -> Vec<(&Version, &str)> {
        self.tables
            .iter()
            .filter_map(|(version, table)| table.lookup(old_key).map(|new| (version, new)))
            .collect()
    }

    pub fn versions(&self) -> impl Iterator<Item = &Version> {
        self.tables.keys()
    }

    pub fn tables(&self) -> impl Iterator<Item = &RenameTable> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn rule_count(&self) -> usize {
        self.tables.values().map(RenameTable::len).sum()
    }
}
