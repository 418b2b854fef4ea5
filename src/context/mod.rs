//! Sequence contexts
//!
//! A context bundles whatever is needed to interpret a cursor (a slice handle,
//! a numeric span, an iterator snapshot). Cursors are plain values; the
//! context is the only thing that knows how to read or move them.
//!
//! Traversal capability is declared through [`Context::Traversal`] so that the
//! grouping entry points can select a forward-only or bidirectional engine
//! without duplicating call sites.

mod ints;
mod iter;
mod slice;

pub use ints::Ints;
pub use iter::{IterContext, IterCursor};
pub use slice::SliceContext;

use std::iter::FusedIterator;

/// Capability marker: cursors only move forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardOnly;

/// Capability marker: cursors move forward and backward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bidirectional;

/// Forward traversal primitives over a sequence.
pub trait Context {
    /// Cursor naming one element (or the end).
    type Position;

    /// Element view produced by [`peek_at`](Context::peek_at).
    type Element;

    /// Either [`ForwardOnly`] or [`Bidirectional`].
    type Traversal;

    /// Read the element at `position` without moving it.
    ///
    /// `position` must not be the end of the sequence.
    fn peek_at(&self, position: &Self::Position) -> Self::Element;

    /// Move `position` one element forward.
    fn advance_one(&self, position: &mut Self::Position);

    /// Whether two cursors name the same place in the sequence.
    fn positions_equal(&self, lhs: &Self::Position, rhs: &Self::Position) -> bool;
}

/// Backward traversal primitives.
pub trait BidirectionalContext: Context {
    /// Read the element immediately preceding `position`.
    ///
    /// `position` must not be the start of the sequence.
    fn peek_before(&self, position: &Self::Position) -> Self::Element;

    /// Move `position` one element backward.
    fn retreat_one(&self, position: &mut Self::Position);
}

impl<C: Context + ?Sized> Context for &C {
    type Position = C::Position;
    type Element = C::Element;
    type Traversal = C::Traversal;

    #[inline]
    fn peek_at(&self, position: &Self::Position) -> Self::Element {
        (**self).peek_at(position)
    }

    #[inline]
    fn advance_one(&self, position: &mut Self::Position) {
        (**self).advance_one(position)
    }

    #[inline]
    fn positions_equal(&self, lhs: &Self::Position, rhs: &Self::Position) -> bool {
        (**self).positions_equal(lhs, rhs)
    }
}

impl<C: BidirectionalContext + ?Sized> BidirectionalContext for &C {
    #[inline]
    fn peek_before(&self, position: &Self::Position) -> Self::Element {
        (**self).peek_before(position)
    }

    #[inline]
    fn retreat_one(&self, position: &mut Self::Position) {
        (**self).retreat_one(position)
    }
}

/// A lazy, read-through window `[from, to)` over a context.
///
/// Iterating a `Bounded` reads elements through the context; nothing is
/// copied up front.
#[derive(Debug, Clone)]
pub struct Bounded<C: Context> {
    context: C,
    from: C::Position,
    to: C::Position,
}

impl<C: Context> Bounded<C> {
    /// Create a window over `context` delimited by two cursors.
    pub fn new(context: C, from: C::Position, to: C::Position) -> Self {
        Self { context, from, to }
    }

    /// Context the window reads through.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Cursor at the first element of the window.
    pub fn from(&self) -> &C::Position {
        &self.from
    }

    /// Cursor one past the last element of the window.
    pub fn to(&self) -> &C::Position {
        &self.to
    }

    /// Whether the window contains no elements.
    pub fn is_empty(&self) -> bool {
        self.context.positions_equal(&self.from, &self.to)
    }

    /// Split the window into its context and bounds.
    pub fn into_parts(self) -> (C, C::Position, C::Position) {
        (self.context, self.from, self.to)
    }
}

impl<C: Context> Iterator for Bounded<C> {
    type Item = C::Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            return None;
        }
        let element = self.context.peek_at(&self.from);
        self.context.advance_one(&mut self.from);
        Some(element)
    }
}

impl<C: BidirectionalContext> DoubleEndedIterator for Bounded<C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            return None;
        }
        let element = self.context.peek_before(&self.to);
        self.context.retreat_one(&mut self.to);
        Some(element)
    }
}

impl<C: Context> FusedIterator for Bounded<C> {}
