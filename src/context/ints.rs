use std::ops::Range;

use super::{Bidirectional, BidirectionalContext, Bounded, Context};

/// Counting sequence: the element at cursor `n` is `n` itself.
///
/// Elements are computed on demand, so every peek yields a fresh value rather
/// than a reference into storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ints;

impl Ints {
    /// Window over the integers in `span`.
    pub fn range(span: Range<i64>) -> Bounded<Self> {
        let end = span.end.max(span.start);
        Bounded::new(Ints, span.start, end)
    }
}

impl Context for Ints {
    type Position = i64;
    type Element = i64;
    type Traversal = Bidirectional;

    #[inline]
    fn peek_at(&self, position: &i64) -> i64 {
        *position
    }

    #[inline]
    fn advance_one(&self, position: &mut i64) {
        *position += 1;
    }

    #[inline]
    fn positions_equal(&self, lhs: &i64, rhs: &i64) -> bool {
        lhs == rhs
    }
}

impl BidirectionalContext for Ints {
    #[inline]
    fn peek_before(&self, position: &i64) -> i64 {
        *position - 1
    }

    #[inline]
    fn retreat_one(&self, position: &mut i64) {
        *position -= 1;
    }
}
