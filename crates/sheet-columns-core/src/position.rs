//! Column positions in bijective base-26
//!
//! A [`Position`] is a most-significant-first sequence of digits in `0..26`,
//! one per letter of the column label. There is no zero digit: every string
//! of letters is a distinct position, so running past `Z...Z` always makes
//! the label one letter longer instead of wrapping.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::label;

/// Number of letters in the column alphabet (A-Z)
pub const RADIX: u8 = 26;

const MAX_DIGIT: u8 = RADIX - 1;

/// A column position (e.g. `[0]` = "A", `[0, 0]` = "AA")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Position {
    /// Digit indices, most significant first. Never empty, every digit < 26.
    digits: Vec<u8>,
}

impl Position {
    /// The first column, "A"
    pub fn new() -> Self {
        Self { digits: vec![0] }
    }

    /// Digit indices, most significant first (A = 0, Z = 25)
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of letters in the label for this position
    pub fn width(&self) -> usize {
        self.digits.len()
    }

    /// Move to the next column
    ///
    /// Adds one with carry. A digit below `Z` is incremented and the carry
    /// stops there; a `Z` rolls over to `A` and carries left. When the most
    /// significant digit rolls over too, a new leading `A` is inserted
    /// ("Z" -> "AA", "ZZ" -> "AAA").
    pub fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            if *digit < MAX_DIGIT {
                *digit += 1;
                return;
            }
            *digit = 0;
        }

        self.digits.insert(0, 0);
    }

    /// Move `n` columns forward
    ///
    /// Jumps straight to the target through the ordinal when it fits in a
    /// `u64`, otherwise steps one column at a time.
    pub fn advance_by(&mut self, n: u64) {
        match self.ordinal().and_then(|ordinal| ordinal.checked_add(n)) {
            Some(target) => *self = Self::from_ordinal(target),
            None => {
                for _ in 0..n {
                    self.advance();
                }
            }
        }
    }

    /// Zero-based index of this column (A = 0, Z = 25, AA = 26, XFD = 16383)
    ///
    /// Returns `None` when the index does not fit in a `u64`.
    pub fn ordinal(&self) -> Option<u64> {
        let value = self.digits.iter().try_fold(0u128, |acc, &digit| {
            acc.checked_mul(u128::from(RADIX))?
                .checked_add(u128::from(digit) + 1)
        })?;
        u64::try_from(value - 1).ok()
    }

    /// Position for a zero-based column index
    pub fn from_ordinal(ordinal: u64) -> Self {
        let radix = u128::from(RADIX);
        let mut n = u128::from(ordinal) + 1;
        let mut digits = Vec::new();

        while n > 0 {
            n -= 1;
            digits.push((n % radix) as u8);
            n /= radix;
        }
        digits.reverse();

        Self { digits }
    }

    /// Parse column letters, ignoring case ("a", "AB", "xfd")
    ///
    /// Row numbers are not accepted here; strip them first with
    /// [`label::normalize`].
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidLabel("empty column letters".into()));
        }

        let digits = s
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Ok(c.to_ascii_uppercase() as u8 - b'A')
                } else {
                    Err(Error::InvalidLabel(format!(
                        "invalid column letter '{}' in '{}'",
                        c, s
                    )))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { digits })
    }

    /// Render the label, with `row_number` appended when given
    pub fn label(&self, row_number: Option<u32>) -> String {
        label::render(self, row_number)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.width()
            .cmp(&other.width())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&label::letters(&self.digits))
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Position {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advanced(n: usize) -> Position {
        let mut position = Position::new();
        for _ in 0..n {
            position.advance();
        }
        position
    }

    #[test]
    fn test_new_is_a() {
        let position = Position::new();
        assert_eq!(position.digits(), &[0]);
        assert_eq!(position.to_string(), "A");
    }

    #[test]
    fn test_advance_boundaries() {
        assert_eq!(advanced(25).to_string(), "Z");
        assert_eq!(advanced(26).to_string(), "AA");
        assert_eq!(advanced(51).to_string(), "AZ");
        assert_eq!(advanced(52).to_string(), "BA");
        assert_eq!(advanced(701).to_string(), "ZZ");
        assert_eq!(advanced(702).to_string(), "AAA");
        assert_eq!(advanced(16383).to_string(), "XFD");
    }

    #[test]
    fn test_advance_carries_through_inner_z() {
        let mut position = Position::parse("AZZ").unwrap();
        position.advance();
        assert_eq!(position.to_string(), "BAA");

        let mut position = Position::parse("ZZZ").unwrap();
        position.advance();
        assert_eq!(position.to_string(), "AAAA");
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(Position::parse("A").unwrap().ordinal(), Some(0));
        assert_eq!(Position::parse("Z").unwrap().ordinal(), Some(25));
        assert_eq!(Position::parse("AA").unwrap().ordinal(), Some(26));
        assert_eq!(Position::parse("ZZ").unwrap().ordinal(), Some(701));
        assert_eq!(Position::parse("AAA").unwrap().ordinal(), Some(702));
        assert_eq!(Position::parse("XFD").unwrap().ordinal(), Some(16383));
    }

    #[test]
    fn test_ordinal_overflow() {
        let huge = Position::parse(&"Z".repeat(20)).unwrap();
        assert_eq!(huge.ordinal(), None);
    }

    #[test]
    fn test_from_ordinal() {
        assert_eq!(Position::from_ordinal(0).to_string(), "A");
        assert_eq!(Position::from_ordinal(26).to_string(), "AA");
        assert_eq!(Position::from_ordinal(702).to_string(), "AAA");
        assert_eq!(Position::from_ordinal(u64::MAX).ordinal(), Some(u64::MAX));
    }

    #[test]
    fn test_advance_by_matches_stepping() {
        let mut jumped = Position::new();
        jumped.advance_by(730);
        assert_eq!(jumped, advanced(730));

        jumped.advance_by(0);
        assert_eq!(jumped, advanced(730));
    }

    #[test]
    fn test_advance_by_past_u64() {
        let mut position = Position::from_ordinal(u64::MAX);
        position.advance_by(1);
        assert_eq!(position.ordinal(), None);

        let mut expected = Position::from_ordinal(u64::MAX);
        expected.advance();
        assert_eq!(position, expected);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Position::parse("xfd").unwrap().to_string(), "XFD");
        assert_eq!("AB".parse::<Position>().unwrap().digits(), &[0, 1]);
        assert!(Position::parse("").is_err());
        assert!(Position::parse("A1").is_err());
        assert!(Position::parse("A-B").is_err());
    }

    #[test]
    fn test_ordering() {
        let z = Position::parse("Z").unwrap();
        let aa = Position::parse("AA").unwrap();
        let ab = Position::parse("AB").unwrap();
        assert!(z < aa);
        assert!(aa < ab);
        assert!(Position::parse("ZZ").unwrap() < Position::parse("AAA").unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_letters() {
        let position = Position::parse("XFD").unwrap();
        let json = serde_json::to_string(&position).unwrap();
        assert_eq!(json, "\"XFD\"");
        assert_eq!(serde_json::from_str::<Position>(&json).unwrap(), position);
        assert!(serde_json::from_str::<Position>("\"A1\"").is_err());
    }
}
