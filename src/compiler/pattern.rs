//! Assembly of the global call sign pattern.

use crate::domain::AllocationTable;
use std::collections::BTreeSet;

/// Grammar following the national prefix: a digit, up to three more
/// alphanumerics and a final letter.
pub const CALLSIGN_SUFFIX: &str = "[0-9][0-9A-Z]{0,3}[A-Z]";

/// Joins every distinct fragment of `table`, sorted, into one capturing
/// alternation followed by [`CALLSIGN_SUFFIX`].
pub fn assemble(table: &AllocationTable) -> String {
    let fragments: BTreeSet<&str> = table
        .prefixes()
        .values()
        .map(|group| group.fragment())
        .collect();
    let alternation: Vec<&str> = fragments.into_iter().collect();
    format!("({}){}", alternation.join("|"), CALLSIGN_SUFFIX)
}
