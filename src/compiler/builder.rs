//! Allocation table builder.
//!
//! Folds validated rows into the prefix table and the country index,
//! keeping both in lock-step.

use super::DuplicatePolicy;
use crate::domain::{Allocation, AllocationRow, AllocationTable, Group};
use crate::error::{CallsignError, CallsignResult};
use log::warn;
use std::collections::{BTreeMap, BTreeSet};

/// Mutable accumulator for one compilation run.
///
/// Call [`TableBuilder::add_row`] for every row in order, optionally
/// [`crate::compiler::consolidate`], then freeze with [`TableBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    policy: DuplicatePolicy,
    prefixes: BTreeMap<String, Group>,
    countries: BTreeMap<String, BTreeSet<String>>,
    /// Rows seen per first stem character
    occurrences: BTreeMap<char, usize>,
}

impl TableBuilder {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Validates, expands and inserts one row.
    ///
    /// `row` is the 1-based data row number used in diagnostics.
    pub fn add_row(&mut self, row: usize, input: &AllocationRow) -> CallsignResult<()> {
        let allocation = Allocation::analyze(row, input)?;
        let prefixes = allocation.prefixes();

        if let Some(first) = allocation.stem().chars().next() {
            *self.occurrences.entry(first).or_default() += 1;
        }

        let group = allocation.into_group();
        for prefix in prefixes {
            self.insert(prefix, group.clone())?;
        }
        Ok(())
    }

    /// Inserts `prefix`, applying the duplicate policy.
    fn insert(&mut self, prefix: String, group: Group) -> CallsignResult<()> {
        if let Some(existing) = self.prefixes.get(&prefix) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(CallsignError::ConflictingAllocation {
                        prefix,
                        existing: existing.country().to_string(),
                        incoming: group.country().to_string(),
                    });
                }
                DuplicatePolicy::Overwrite => {
                    warn!(
                        "prefix {} reassigned from '{}' to '{}'",
                        prefix,
                        existing.country(),
                        group.country()
                    );
                    self.remove(&prefix);
                }
            }
        }
        self.put(prefix, group);
        Ok(())
    }

    /// Inserts into both structures without any conflict check.
    pub(crate) fn put(&mut self, prefix: String, group: Group) {
        self.countries
            .entry(group.country().to_string())
            .or_default()
            .insert(prefix.clone());
        self.prefixes.insert(prefix, group);
    }

    /// Removes `prefix` from both structures.
    pub(crate) fn remove(&mut self, prefix: &str) -> Option<Group> {
        let group = self.prefixes.remove(prefix)?;
        if let Some(keys) = self.countries.get_mut(group.country()) {
            keys.remove(prefix);
            if keys.is_empty() {
                self.countries.remove(group.country());
            }
        }
        Some(group)
    }

    pub fn get(&self, prefix: &str) -> Option<&Group> {
        self.prefixes.get(prefix)
    }

    /// Number of rows whose stem starts with `first`.
    pub fn occurrences(&self, first: char) -> usize {
        self.occurrences.get(&first).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Freezes the accumulated state.
    pub fn build(self) -> AllocationTable {
        AllocationTable::from_parts(self.prefixes, self.countries)
    }
}
