//! Column label rendering and matching

use crate::error::{Error, Result};
use crate::position::Position;

/// Letters for a digit sequence (0 = A, 25 = Z)
pub fn letters(digits: &[u8]) -> String {
    digits.iter().map(|&digit| (b'A' + digit) as char).collect()
}

/// Render a label: the column letters followed by the row number, if any
///
/// The row number is appended as-is, without separator or padding
/// ("A" + 15 = "A15").
pub fn render(position: &Position, row_number: Option<u32>) -> String {
    let letters = position.to_string();
    match row_number {
        Some(row) => format!("{}{}", letters, row),
        None => letters,
    }
}

/// Normalize a label for comparison: drop digits, upper-case the rest
///
/// "b12" and "B" both normalize to "B".
pub fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Convert a zero-based column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
pub fn ordinal_to_letters(ordinal: u64) -> String {
    Position::from_ordinal(ordinal).to_string()
}

/// Convert column letters to a zero-based index (A = 0, Z = 25, AA = 26, etc.)
pub fn letters_to_ordinal(letters: &str) -> Result<u64> {
    Position::parse(letters)?
        .ordinal()
        .ok_or_else(|| Error::OrdinalOverflow(letters.to_string()))
}
