//! Column sequence generator

use crate::error::{Error, Result};
use crate::label::normalize;
use crate::options::GeneratorOptions;
use crate::position::Position;
use crate::sequence::ColumnSequence;

/// Lazily produces column labels, one per step
///
/// ```rust
/// use sheet_columns_core::{ColumnGenerator, ColumnSequence};
///
/// let mut columns = ColumnGenerator::new(Some(15), 0);
/// assert_eq!(columns.current(true), "A15");
/// assert_eq!(columns.current(false), "B15");
/// assert_eq!(columns.last_emitted(), "A15");
/// ```
///
/// Not meant for concurrent mutation; wrap it in a lock if it must be shared.
#[derive(Debug, Clone)]
pub struct ColumnGenerator {
    position: Position,
    previous: Option<String>,
    options: GeneratorOptions,
}

impl ColumnGenerator {
    /// Create a generator, optionally suffixing a row number and skipping
    /// `skip` columns
    pub fn new(row_number: Option<u32>, skip: u64) -> Self {
        Self::with_options(&GeneratorOptions { row_number, skip })
    }

    /// Create a generator from options
    pub fn with_options(options: &GeneratorOptions) -> Self {
        let mut generator = Self {
            position: Position::new(),
            previous: None,
            options: options.clone(),
        };
        generator.init();

        let GeneratorOptions { row_number, skip } = options;
        let start = &generator.position;
        tracing::debug!("Created column generator at {start} (row: {row_number:?}, skip: {skip})");
        generator
    }

    /// Options the generator was created with
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Row number appended to every label
    pub fn row_number(&self) -> Option<u32> {
        self.options.row_number
    }

    /// Position at the cursor
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Zero-based index of the column at the cursor, if it fits in a `u64`
    pub fn ordinal(&self) -> Option<u64> {
        self.position.ordinal()
    }

    /// Iterate over labels from the cursor on, emitting each one
    ///
    /// Each item is exactly what `current(true)` would have returned.
    pub fn labels(&mut self) -> Labels<'_> {
        Labels { generator: self }
    }

    /// Like [`for_each_until`](ColumnSequence::for_each_until), but gives up
    /// instead of looping forever
    ///
    /// Fails without moving if `target` cannot name a column or sorts before
    /// the cursor, and fails after `limit` emitted labels if the target still
    /// has not been reached. Labels emitted before a limit failure stay
    /// consumed.
    pub fn try_for_each_until<F>(
        &mut self,
        target: &str,
        limit: u64,
        mut visit: F,
    ) -> Result<&mut Self>
    where
        F: FnMut(&str),
    {
        let normalized = normalize(target);
        let goal =
            Position::parse(&normalized).map_err(|_| Error::InvalidTarget(target.to_string()))?;

        if goal < self.position {
            return Err(Error::TargetBehindCursor {
                target: target.to_string(),
                current: self.position.to_string(),
            });
        }

        for _ in 0..limit {
            let label = self.current(true);
            visit(&label);
            if normalize(&label) == normalized {
                return Ok(self);
            }
        }

        tracing::debug!("Walk to {target} stopped after {limit} columns");
        Err(Error::WalkLimitExceeded {
            target: target.to_string(),
            limit,
        })
    }

    fn init(&mut self) {
        self.position = Position::new();
        self.position.advance_by(self.options.skip);
        self.previous = None;
    }

    fn step(&mut self) {
        let width = self.position.width();
        self.position.advance();
        let widened = self.position.width();
        if widened > width {
            tracing::trace!("Column labels widened to {widened} letters");
        }
    }
}

impl Default for ColumnGenerator {
    fn default() -> Self {
        Self::with_options(&GeneratorOptions::default())
    }
}

impl From<GeneratorOptions> for ColumnGenerator {
    fn from(options: GeneratorOptions) -> Self {
        Self::with_options(&options)
    }
}

impl ColumnSequence for ColumnGenerator {
    fn current(&mut self, advance: bool) -> String {
        let label = self.position.label(self.options.row_number);
        if advance {
            self.previous = Some(label.clone());
            self.step();
        }
        label
    }

    fn last_emitted(&self) -> String {
        match &self.previous {
            Some(label) => label.clone(),
            None => self.position.label(self.options.row_number),
        }
    }

    fn reset(&mut self) -> &mut Self {
        self.init();
        let start = &self.position;
        tracing::debug!("Reset column generator to {start}");
        self
    }

    fn advance_by(&mut self, n: u64) -> &mut Self {
        self.position.advance_by(n);
        let position = &self.position;
        tracing::debug!("Advanced {n} columns to {position}");
        self
    }
}

/// Endless iterator over the labels of a [`ColumnGenerator`]
///
/// Created by [`ColumnGenerator::labels`]. `next` never returns `None`.
#[derive(Debug)]
pub struct Labels<'a> {
    generator: &'a mut ColumnGenerator,
}

impl Iterator for Labels<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generator.current(true))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for Labels<'_> {}
