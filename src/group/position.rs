//! Group positions and the forward-only terminal marker

/// Cursor naming one grouping: `[start, stop)` plus the cached criterion.
///
/// For any non-terminal position every element in `[start, stop)` is
/// equivalent to the criterion of the element at `start`, and `stop` is either
/// the end of the sequence or the first element that is not.
#[derive(Debug, Clone)]
pub struct GroupPosition<Pos, K> {
    pub(crate) start: Pos,
    pub(crate) stop: Pos,
    pub(crate) criterion: Option<K>,
}

impl<Pos, K> GroupPosition<Pos, K> {
    pub(crate) fn new(start: Pos, stop: Pos, criterion: Option<K>) -> Self {
        Self {
            start,
            stop,
            criterion,
        }
    }

    /// Cursor at the first element of the grouping.
    pub fn start(&self) -> &Pos {
        &self.start
    }

    /// Cursor one past the last element of the grouping.
    pub fn stop(&self) -> &Pos {
        &self.stop
    }

    /// Criterion of this grouping, if the last boundary crossing fetched it.
    ///
    /// Empty at the terminal position.
    pub fn criterion(&self) -> Option<&K> {
        self.criterion.as_ref()
    }
}

/// Terminal marker for groupings over forward-only sequences.
///
/// A forward-only sequence has no cheap, reusable "cursor at end" to build a
/// regular [`GroupPosition`] from, so exhaustion is tested against this marker
/// instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GroupSentinel;
