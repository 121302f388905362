//! The column sequence cursor contract

use crate::label::normalize;

/// A cursor over the column labels A, B, ..., Z, AA, AB, ...
///
/// Implementors supply single-step access ([`current`](Self::current)),
/// the last emitted label, reset and bulk advance. The traversals are built
/// on top of those.
///
/// # Unreachable targets
///
/// [`for_each_until`](Self::for_each_until) and
/// [`for_each_from_start`](Self::for_each_from_start) only ever move forward
/// and stop when they emit a label matching their target. A target that is
/// already behind the cursor, or that no label can match (for example `"A-B"`
/// or `"42"`), makes them loop forever. Callers must pass a reachable target.
/// `ColumnGenerator::try_for_each_until` is the bounded alternative.
pub trait ColumnSequence {
    /// Label at the cursor
    ///
    /// With `advance` set, the label is recorded as the last emitted one and
    /// the cursor moves one column forward. Without it, nothing changes.
    fn current(&mut self, advance: bool) -> String;

    /// Label most recently returned by `current(true)`
    ///
    /// Before anything has been emitted this is the label at the cursor,
    /// which is not consumed.
    fn last_emitted(&self) -> String;

    /// Go back to the start, re-applying the construction-time skip
    fn reset(&mut self) -> &mut Self;

    /// Move `n` columns forward without emitting anything
    fn advance_by(&mut self, n: u64) -> &mut Self;

    /// Emit labels from the cursor on, calling `visit` with each, until one
    /// matches `target`
    ///
    /// Matching ignores digits and case, so `"e"`, `"E"` and `"E7"` all stop
    /// at column E. `visit` always receives the emitted label, never the
    /// target. At least one label is emitted. The cursor is not reset first.
    fn for_each_until<F>(&mut self, target: &str, mut visit: F) -> &mut Self
    where
        F: FnMut(&str),
    {
        let target = normalize(target);
        loop {
            let label = self.current(true);
            visit(&label);
            if normalize(&label) == target {
                break;
            }
        }
        self
    }

    /// Replay every label emitted so far, from the start
    ///
    /// Resets, then walks up to and including the last emitted label. When
    /// nothing has been emitted yet this replays just the first label.
    fn for_each_from_start<F>(&mut self, visit: F) -> &mut Self
    where
        F: FnMut(&str),
    {
        let last = self.last_emitted();
        self.reset().for_each_until(&last, visit)
    }
}
