//! Shared capability interface of the grouping engines and the lazy sequence
//! value built on top of it.

use std::fmt;
use std::iter::FusedIterator;

use crate::context::{Bounded, Context};

/// Traversal operations every grouping engine supports.
pub trait GroupCursor {
    /// Wrapped sequence context.
    type Context: Context;

    /// Cursor naming one grouping.
    type Position;

    /// Marker for "no more groupings".
    type Terminal;

    /// Move `position` to the next grouping. A terminal position stays terminal.
    fn advance(&self, position: &mut Self::Position);

    /// Whether two positions name the same grouping.
    fn positions_equal(&self, lhs: &Self::Position, rhs: &Self::Position) -> bool;

    /// Whether `position` has reached `terminal`.
    fn reached(&self, position: &Self::Position, terminal: &Self::Terminal) -> bool;

    /// Read-through view of the elements of the grouping at `position`.
    fn materialize(&self, position: &Self::Position) -> Bounded<&Self::Context>;
}

/// Engines that can also step backward.
pub trait BidirectionalGroupCursor: GroupCursor {
    /// Move `position` to the previous grouping. The first grouping stays put.
    fn retreat(&self, position: &mut Self::Position);
}

/// A lazy sequence of groupings: the engine, the first position and the
/// terminal marker.
pub struct Grouped<G: GroupCursor> {
    engine: G,
    from: G::Position,
    to: G::Terminal,
}

impl<G: GroupCursor> Grouped<G> {
    pub(crate) fn new(engine: G, from: G::Position, to: G::Terminal) -> Self {
        Self { engine, from, to }
    }

    /// Engine driving this sequence.
    pub fn engine(&self) -> &G {
        &self.engine
    }

    /// Position of the first grouping (terminal if the input was empty).
    pub fn from(&self) -> &G::Position {
        &self.from
    }

    /// Terminal marker.
    pub fn to(&self) -> &G::Terminal {
        &self.to
    }

    /// Whether the sequence has no groupings.
    pub fn is_empty(&self) -> bool {
        self.engine.reached(&self.from, &self.to)
    }

    /// Split into engine, first position and terminal marker.
    pub fn into_parts(self) -> (G, G::Position, G::Terminal) {
        (self.engine, self.from, self.to)
    }

    /// Iterate over the groupings as read-through views.
    pub fn iter(&self) -> Groups<'_, G>
    where
        G::Position: Clone,
        G::Terminal: Clone,
    {
        Groups {
            engine: &self.engine,
            front: self.from.clone(),
            back: self.to.clone(),
        }
    }
}

impl<G> Clone for Grouped<G>
where
    G: GroupCursor + Clone,
    G::Position: Clone,
    G::Terminal: Clone,
{
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

impl<G> fmt::Debug for Grouped<G>
where
    G: GroupCursor + fmt::Debug,
    G::Position: fmt::Debug,
    G::Terminal: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grouped")
            .field("engine", &self.engine)
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

impl<'a, G> IntoIterator for &'a Grouped<G>
where
    G: GroupCursor,
    G::Position: Clone,
    G::Terminal: Clone,
{
    type Item = Bounded<&'a G::Context>;
    type IntoIter = Groups<'a, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the groupings of a [`Grouped`] sequence.
///
/// Only the engine is borrowed; each step moves a cursor in place.
pub struct Groups<'a, G: GroupCursor> {
    engine: &'a G,
    front: G::Position,
    back: G::Terminal,
}

impl<'a, G: GroupCursor> Groups<'a, G> {
    /// Position the next call to `next` will materialize.
    pub fn front(&self) -> &G::Position {
        &self.front
    }
}

impl<G> fmt::Debug for Groups<'_, G>
where
    G: GroupCursor,
    G::Position: fmt::Debug,
    G::Terminal: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Groups")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}

impl<'a, G: GroupCursor> Iterator for Groups<'a, G> {
    type Item = Bounded<&'a G::Context>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.engine.reached(&self.front, &self.back) {
            return None;
        }
        let view = self.engine.materialize(&self.front);
        self.engine.advance(&mut self.front);
        Some(view)
    }
}

impl<G: GroupCursor> FusedIterator for Groups<'_, G> {}

impl<'a, G, P> DoubleEndedIterator for Groups<'a, G>
where
    G: BidirectionalGroupCursor<Position = P, Terminal = P>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.engine.reached(&self.front, &self.back) {
            return None;
        }
        self.engine.retreat(&mut self.back);
        Some(self.engine.materialize(&self.back))
    }
}
