//! Call sign classification against a compiled allocation table.

use super::table::AllocationTable;
use regex::Regex;

/// Result of classifying one call sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The call sign resolved to a registered prefix
    Match { prefix: String, country: String },
    /// The call sign failed the pattern or resolved to no known prefix
    NoMatch,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }

    pub fn country(&self) -> Option<&str> {
        match self {
            Self::Match { country, .. } => Some(country),
            Self::NoMatch => None,
        }
    }
}

/// Longest-prefix matcher over a compiled pattern and table.
///
/// The pattern's capture group may be longer than any registered key
/// (full groups take an optional third letter, consolidated letters up to
/// two), so the captured text is shortened one character at a time until
/// it names a key in the table.
#[derive(Debug, Clone, Copy)]
pub struct CallsignMatcher<'a> {
    regex: &'a Regex,
    table: &'a AllocationTable,
}

impl<'a> CallsignMatcher<'a> {
    /// `regex` must be anchored at the start and capture the prefix in group 1.
    pub fn new(regex: &'a Regex, table: &'a AllocationTable) -> Self {
        Self { regex, table }
    }

    /// Classifies `call`, ignoring case.
    pub fn lookup(&self, call: &str) -> MatchOutcome {
        let call = call.trim().to_ascii_uppercase();
        let Some(captured) = self.regex.captures(&call).and_then(|caps| caps.get(1)) else {
            return MatchOutcome::NoMatch;
        };

        let mut candidate = captured.as_str();
        while !candidate.is_empty() {
            if let Some(group) = self.table.get(candidate) {
                return MatchOutcome::Match {
                    prefix: candidate.to_string(),
                    country: group.country().to_string(),
                };
            }
            // captured text is ASCII: the pattern only admits [0-9A-Z]
            candidate = &candidate[..candidate.len() - 1];
        }
        MatchOutcome::NoMatch
    }

    /// Renders the report line for `call`, keeping the caller's spelling.
    pub fn describe(&self, call: &str) -> String {
        match self.lookup(call) {
            MatchOutcome::Match { country, .. } => format!("{} - {}", call, country),
            MatchOutcome::NoMatch => format!("{} does not match", call),
        }
    }
}
