//! Forward-only context over a cloneable iterator.
//!
//! A cursor carries a snapshot of the remaining iterator. The end of the
//! sequence is never computed up front: the end cursor is a marker that
//! compares equal to any cursor whose snapshot is exhausted.

use std::fmt;
use std::marker::PhantomData;

use super::{Bounded, Context, ForwardOnly};

/// Forward-only context over any `Iterator + Clone`.
pub struct IterContext<I> {
    marker: PhantomData<fn() -> I>,
}

/// Cursor into an [`IterContext`].
#[derive(Debug, Clone)]
pub struct IterCursor<I> {
    offset: usize,
    rest: Option<I>,
}

impl<I> IterCursor<I> {
    /// Number of elements stepped over since the start (zero for the end marker).
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether this cursor is the end marker itself.
    pub fn is_end_marker(&self) -> bool {
        self.rest.is_none()
    }
}

impl<I: Iterator + Clone> IterContext<I> {
    /// Window from the current state of `iter` to its exhaustion.
    pub fn range(iter: I) -> Bounded<Self> {
        let from = IterCursor {
            offset: 0,
            rest: Some(iter),
        };
        let to = IterCursor {
            offset: 0,
            rest: None,
        };
        Bounded::new(Self::default(), from, to)
    }
}

impl<I> Default for IterContext<I> {
    fn default() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<I> Clone for IterContext<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for IterContext<I> {}

impl<I> fmt::Debug for IterContext<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterContext").finish()
    }
}

fn exhausted<I: Iterator + Clone>(rest: &I) -> bool {
    rest.clone().next().is_none()
}

impl<I: Iterator + Clone> Context for IterContext<I> {
    type Position = IterCursor<I>;
    type Element = I::Item;
    type Traversal = ForwardOnly;

    /// # Panics
    ///
    /// Panics if `position` is at the end of the sequence.
    fn peek_at(&self, position: &IterCursor<I>) -> I::Item {
        position
            .rest
            .as_ref()
            .and_then(|rest| rest.clone().next())
            .expect("peeked past the end of an iterator context")
    }

    fn advance_one(&self, position: &mut IterCursor<I>) {
        if let Some(rest) = position.rest.as_mut() {
            rest.next();
            position.offset += 1;
        }
    }

    fn positions_equal(&self, lhs: &IterCursor<I>, rhs: &IterCursor<I>) -> bool {
        match (&lhs.rest, &rhs.rest) {
            (Some(_), Some(_)) => lhs.offset == rhs.offset,
            (None, None) => true,
            (Some(rest), None) | (None, Some(rest)) => exhausted(rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_marker_matches_exhausted_cursor() {
        let range = IterContext::range("ab".chars());
        let (context, mut cursor, end) = range.into_parts();
        assert!(end.is_end_marker());
        assert!(!context.positions_equal(&cursor, &end));
        context.advance_one(&mut cursor);
        context.advance_one(&mut cursor);
        assert_eq!(cursor.offset(), 2);
        assert!(context.positions_equal(&cursor, &end));
        assert!(context.positions_equal(&end, &cursor));
    }

    #[test]
    fn test_saved_cursor_is_independent() {
        let range = IterContext::range(vec![1, 2, 3].into_iter());
        let (context, mut cursor, _) = range.into_parts();
        let saved = cursor.clone();
        context.advance_one(&mut cursor);
        assert_eq!(context.peek_at(&saved), 1);
        assert_eq!(context.peek_at(&cursor), 2);
        assert!(!context.positions_equal(&saved, &cursor));
    }

    #[test]
    fn test_collects_through_window() {
        let range = IterContext::range(1..=4);
        assert_eq!(range.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
