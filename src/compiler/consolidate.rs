//! Single-letter consolidation.
//!
//! Some countries hold every two-letter stem under one first letter
//! (`KA`..`KZ` as 26 full rows). Those 26 entries are replaced by one entry
//! keyed on the letter alone, whose fragment makes both following letters
//! optional, so that a bare `K1ABC` is recognized as well.

use super::builder::TableBuilder;
use crate::domain::{Group, Letter};
use log::debug;

/// Runs the consolidation pass over `builder`, returning the letters that
/// were collapsed. Running it again on the result collapses nothing.
pub fn consolidate(builder: &mut TableBuilder) -> Vec<Letter> {
    Letter::all()
        .filter(|&letter| consolidate_letter(builder, letter))
        .collect()
}

fn consolidate_letter(builder: &mut TableBuilder, letter: Letter) -> bool {
    // 26 rows is necessary, not sufficient
    if builder.occurrences(letter.as_char()) != 26 {
        return false;
    }

    let keys: Vec<String> = Letter::all()
        .map(|second| format!("{}{}", letter, second))
        .collect();

    let country = match builder.get(&keys[0]) {
        Some(reference) if reference.is_full() => reference.country().to_string(),
        _ => return false,
    };
    let uniform = keys[1..].iter().all(|key| {
        builder
            .get(key)
            .is_some_and(|group| group.is_full() && group.country() == country)
    });
    if !uniform {
        return false;
    }

    for key in &keys {
        builder.remove(key);
    }
    builder.put(letter.to_string(), Group::consolidated(letter, country.as_str()));
    debug!("consolidated {}A..{}Z into {} for '{}'", letter, letter, letter, country);
    true
}
