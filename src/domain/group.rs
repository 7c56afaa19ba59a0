//! Allocation groups: one validated row of the ITU series table.
//!
//! A row such as `KAA - KAZ` or `3DA - 3DM` is analyzed into an
//! [`Allocation`], which carries the prefix code the row is keyed on and the
//! [`Group`] that ends up stored in the allocation table.

use super::letter::Letter;
use super::AllocationRow;
use crate::error::{CallsignError, CallsignResult};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Separator between the first and last series in a range cell.
pub const RANGE_SEPARATOR: &str = " - ";

/// Which third characters of a two-character stem a group covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// All 26 third characters, or a whole consolidated first letter
    Full,
    /// A contiguous sub-range of third characters
    Partial { first: Letter, last: Letter },
}

/// The unit stored in the allocation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    country: String,
    fragment: String,
    span: Span,
}

impl Group {
    /// Group covering a whole first letter, e.g. `K[A-Z]{0,2}`.
    pub fn consolidated(letter: Letter, country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            fragment: format!("{}[A-Z]{{0,2}}", letter),
            span: Span::Full,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Pattern text this group contributes to the global alternation.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn is_full(&self) -> bool {
        self.span == Span::Full
    }
}

impl Serialize for Group {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.is_full() { 3 } else { 5 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("is_full", &self.is_full())?;
        map.serialize_entry("country", &self.country)?;
        map.serialize_entry("regex", &self.fragment)?;
        if let Span::Partial { first, last } = self.span {
            map.serialize_entry("first", &first.to_string())?;
            map.serialize_entry("last", &last.to_string())?;
        }
        map.end()
    }
}

/// A validated row: the group plus the code it is keyed on.
///
/// `code` is the two-character stem for full groups and the first
/// three-character series for partial groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    code: String,
    group: Group,
}

impl Allocation {
    /// Validates one row and derives its group.
    ///
    /// `row` is the 1-based row number used in diagnostics.
    pub fn analyze(row: usize, input: &AllocationRow) -> CallsignResult<Self> {
        let range = input.series.trim();
        let malformed = |reason: &str| CallsignError::malformed(row, range, reason);

        let (first, last) = range
            .split_once(RANGE_SEPARATOR)
            .ok_or_else(|| malformed("expected 'XXX - YYY'"))?;

        let first_chars: Vec<char> = first.chars().collect();
        let last_chars: Vec<char> = last.chars().collect();
        if first_chars.len() != 3 || last_chars.len() != 3 {
            return Err(malformed("prefixes must be 3 characters"));
        }
        if first_chars[..2] != last_chars[..2] {
            return Err(malformed("prefixes must start with the same characters"));
        }
        if !first_chars[..2].iter().all(is_stem_char) {
            return Err(malformed(
                "stem must be uppercase ASCII letters or digits",
            ));
        }

        let (lo, hi) = match (Letter::new(first_chars[2]), Letter::new(last_chars[2])) {
            (Some(lo), Some(hi)) => (lo, hi),
            _ => return Err(malformed("third character must be an uppercase letter")),
        };
        if lo > hi {
            return Err(malformed("range end precedes range start"));
        }

        let stem = &first[..2];
        let country = input.country.trim().to_string();
        let allocation = if lo == Letter::A && hi == Letter::Z {
            Self {
                code: stem.to_string(),
                group: Group {
                    country,
                    // third letter is optional in full groups
                    fragment: format!("{}[A-Z]?", stem),
                    span: Span::Full,
                },
            }
        } else {
            Self {
                code: first.to_string(),
                group: Group {
                    country,
                    fragment: format!("{}[{}-{}]", stem, lo, hi),
                    span: Span::Partial {
                        first: lo,
                        last: hi,
                    },
                },
            }
        };
        Ok(allocation)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// The two-character stem shared by every prefix of this row.
    pub fn stem(&self) -> &str {
        &self.code[..2]
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    /// Expands the row into the atomic prefix keys it covers.
    ///
    /// A full group yields its stem alone; a partial group yields one
    /// three-character key per covered third letter.
    pub fn prefixes(&self) -> Vec<String> {
        match self.group.span {
            Span::Full => vec![self.code.clone()],
            Span::Partial { first, last } => first
                .through(last)
                .map(|c| format!("{}{}", self.stem(), c))
                .collect(),
        }
    }

    /// Drops the code, keeping only the stored group.
    pub fn into_group(self) -> Group {
        self.group
    }
}

fn is_stem_char(c: &char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}
