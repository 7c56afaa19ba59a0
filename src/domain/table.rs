//! Frozen allocation table and country index.

use super::group::Group;
use std::collections::{BTreeMap, BTreeSet};

/// Prefix → group map together with its country → prefixes index.
///
/// Built by [`crate::compiler::TableBuilder`]; read-only afterwards, so a
/// single table can serve any number of concurrent lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationTable {
    prefixes: BTreeMap<String, Group>,
    countries: BTreeMap<String, BTreeSet<String>>,
}

impl AllocationTable {
    pub(crate) fn from_parts(
        prefixes: BTreeMap<String, Group>,
        countries: BTreeMap<String, BTreeSet<String>>,
    ) -> Self {
        Self {
            prefixes,
            countries,
        }
    }

    /// Looks up the group registered under an exact prefix key.
    pub fn get(&self, prefix: &str) -> Option<&Group> {
        self.prefixes.get(prefix)
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.prefixes.contains_key(prefix)
    }

    /// All prefix keys and their groups, sorted by key.
    pub fn prefixes(&self) -> &BTreeMap<String, Group> {
        &self.prefixes
    }

    /// Country → sorted prefix keys.
    pub fn countries(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.countries
    }

    /// Prefix keys allocated to `country`, if any.
    pub fn prefixes_of(&self, country: &str) -> Option<&BTreeSet<String>> {
        self.countries.get(country)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}
