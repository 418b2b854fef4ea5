use super::{Bidirectional, BidirectionalContext, Bounded, Context};

/// Bidirectional context over a borrowed slice.
///
/// Cursors are indices, so every position is cheaply saveable.
#[derive(Debug)]
pub struct SliceContext<'a, T> {
    items: &'a [T],
}

impl<'a, T> SliceContext<'a, T> {
    /// Wrap a slice.
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// Window over the whole slice.
    pub fn range(items: &'a [T]) -> Bounded<Self> {
        Bounded::new(Self::new(items), 0, items.len())
    }

    /// Underlying slice.
    pub fn items(&self) -> &'a [T] {
        self.items
    }
}

impl<T> Clone for SliceContext<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceContext<'_, T> {}

impl<'a, T> Context for SliceContext<'a, T> {
    type Position = usize;
    type Element = &'a T;
    type Traversal = Bidirectional;

    #[inline]
    fn peek_at(&self, position: &usize) -> &'a T {
        &self.items[*position]
    }

    #[inline]
    fn advance_one(&self, position: &mut usize) {
        *position += 1;
    }

    #[inline]
    fn positions_equal(&self, lhs: &usize, rhs: &usize) -> bool {
        lhs == rhs
    }
}

impl<'a, T> BidirectionalContext for SliceContext<'a, T> {
    #[inline]
    fn peek_before(&self, position: &usize) -> &'a T {
        &self.items[*position - 1]
    }

    #[inline]
    fn retreat_one(&self, position: &mut usize) {
        *position -= 1;
    }
}

impl<'a, T> From<&'a [T]> for Bounded<SliceContext<'a, T>> {
    fn from(items: &'a [T]) -> Self {
        SliceContext::range(items)
    }
}
