//! Ordered alphabet for the third character of a prefix range.

use std::fmt;

/// An uppercase ASCII letter `A..=Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    pub const A: Letter = Letter(b'A');
    pub const Z: Letter = Letter(b'Z');

    /// Returns the letter for `c`, or `None` if `c` is not in `A..=Z`.
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Self(c as u8))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// All 26 letters in order.
    pub fn all() -> impl Iterator<Item = Letter> {
        Self::A.through(Self::Z)
    }

    /// Inclusive range from `self` to `last`. Empty when `last < self`.
    pub fn through(self, last: Letter) -> impl Iterator<Item = Letter> {
        (self.0..=last.0).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_letters() {
        assert!(Letter::new('a').is_none());
        assert!(Letter::new('1').is_none());
        assert!(Letter::new('Ä').is_none());
        assert_eq!(Letter::new('Q').map(Letter::as_char), Some('Q'));
    }

    #[test]
    fn test_through_is_inclusive() {
        let a = Letter::new('C').unwrap();
        let b = Letter::new('F').unwrap();
        let chars: String = a.through(b).map(Letter::as_char).collect();
        assert_eq!(chars, "CDEF");
        assert_eq!(b.through(a).count(), 0);
        assert_eq!(Letter::all().count(), 26);
    }
}
