//! # sheet-columns-core
//!
//! Spreadsheet-style column labels: A, B, ..., Z, AA, AB, ..., ZZ, AAA, ...
//!
//! This crate provides:
//! - [`ColumnGenerator`] - A lazy cursor over column labels, optionally
//!   suffixed with a fixed row number
//! - [`ColumnSequence`] - The cursor contract, with replay and walk-to
//!   traversals built on single steps
//! - [`Position`] - A column as a bijective base-26 digit sequence, with no
//!   upper bound on its length
//! - [`label`] - Rendering, target normalization and the ordinal codec
//!
//! ## Example
//!
//! ```rust
//! use sheet_columns_core::{ColumnGenerator, ColumnSequence};
//!
//! let mut columns = ColumnGenerator::new(None, 24);
//! assert_eq!(columns.current(true), "Y");
//! assert_eq!(columns.current(true), "Z");
//! assert_eq!(columns.current(true), "AA");
//!
//! // Walk up to a column; digits and case in the target are ignored
//! let mut seen = Vec::new();
//! columns.for_each_until("ad7", |label| seen.push(label.to_string()));
//! assert_eq!(seen, ["AB", "AC", "AD"]);
//! ```

pub mod error;
pub mod generator;
pub mod label;
pub mod options;
pub mod position;
pub mod sequence;

// Re-exports for convenience
pub use error::{Error, Result};
pub use generator::{ColumnGenerator, Labels};
pub use label::{letters_to_ordinal, normalize, ordinal_to_letters};
pub use options::GeneratorOptions;
pub use position::{Position, RADIX};
pub use sequence::ColumnSequence;

/// Number of columns in an Excel worksheet (A through XFD)
///
/// Labels are not capped here; this is only a convenient landmark.
pub const EXCEL_MAX_COLS: u64 = 16_384;
