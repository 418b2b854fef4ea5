use std::fmt;

use tracing::trace;

use super::cursor::{BidirectionalGroupCursor, GroupCursor};
use super::position::GroupPosition;
use super::scan;
use crate::context::{BidirectionalContext, Bounded, Context};
use crate::relation::{Equivalence, Projection};

/// Grouping engine for bidirectional, saveable sequences.
///
/// Both ends of the wrapped sequence are explicit cursors, so the terminal
/// state is an ordinary [`GroupPosition`] with `start == stop == end`.
#[derive(Clone)]
pub struct BidirectionalGroupContext<P, E, C: Context> {
    projection: P,
    equivalence: E,
    context: C,
    start: C::Position,
    end: C::Position,
}

impl<P, E, C: Context> BidirectionalGroupContext<P, E, C> {
    pub(crate) fn new(
        projection: P,
        equivalence: E,
        context: C,
        start: C::Position,
        end: C::Position,
    ) -> Self {
        Self {
            projection,
            equivalence,
            context,
            start,
            end,
        }
    }

    /// Projection deriving each element's criterion.
    pub fn projection(&self) -> &P {
        &self.projection
    }

    /// Relation comparing criteria.
    pub fn equivalence(&self) -> &E {
        &self.equivalence
    }

    /// Wrapped sequence.
    pub fn context(&self) -> &C {
        &self.context
    }
}

impl<P, E, C> BidirectionalGroupContext<P, E, C>
where
    C: BidirectionalContext,
    C::Position: Clone,
    P: Projection<C::Element>,
    E: Equivalence<P::Output>,
{
    /// Whether the element at `position` is equivalent to `criterion`.
    pub fn equivalent(&self, criterion: &P::Output, position: &C::Position) -> bool {
        scan::equivalent(
            &self.context,
            &self.projection,
            &self.equivalence,
            criterion,
            position,
        )
    }

    /// First cursor past `position` that leaves the grouping of `criterion`.
    pub fn locate_next_boundary(
        &self,
        criterion: &P::Output,
        position: C::Position,
    ) -> C::Position {
        scan::next_boundary(
            &self.context,
            &self.projection,
            &self.equivalence,
            criterion,
            position,
            &self.end,
        )
    }

    /// Earliest cursor before `position` that still belongs to the grouping
    /// of `criterion`.
    ///
    /// The element just before `position` must be the one `criterion` was
    /// projected from.
    pub fn locate_previous_boundary(
        &self,
        criterion: &P::Output,
        position: C::Position,
    ) -> C::Position {
        scan::previous_boundary(
            &self.context,
            &self.projection,
            &self.equivalence,
            criterion,
            position,
            &self.start,
        )
    }

    /// The terminal position, `start == stop == end`.
    pub fn terminal(&self) -> GroupPosition<C::Position, P::Output> {
        GroupPosition::new(self.end.clone(), self.end.clone(), None)
    }

    /// Whether both bounds of `position` sit at the end of the sequence.
    pub fn position_equals_terminal(&self, position: &GroupPosition<C::Position, P::Output>) -> bool {
        self.context.positions_equal(&position.start, &self.end)
            && self.context.positions_equal(&position.stop, &self.end)
    }
}

impl<P, E, C> GroupCursor for BidirectionalGroupContext<P, E, C>
where
    C: BidirectionalContext,
    C::Position: Clone,
    P: Projection<C::Element>,
    E: Equivalence<P::Output>,
{
    type Context = C;
    type Position = GroupPosition<C::Position, P::Output>;
    type Terminal = GroupPosition<C::Position, P::Output>;

    fn advance(&self, position: &mut Self::Position) {
        if self.context.positions_equal(&position.stop, &self.end) {
            trace!("advance at end of sequence");
            position.start = position.stop.clone();
            position.criterion = None;
            return;
        }
        let criterion = self.projection.project(self.context.peek_at(&position.stop));
        let stop = self.locate_next_boundary(&criterion, position.stop.clone());
        position.start = std::mem::replace(&mut position.stop, stop);
        position.criterion = Some(criterion);
    }

    fn positions_equal(&self, lhs: &Self::Position, rhs: &Self::Position) -> bool {
        self.context.positions_equal(&lhs.start, &rhs.start)
            && self.context.positions_equal(&lhs.stop, &rhs.stop)
    }

    fn reached(&self, position: &Self::Position, terminal: &Self::Terminal) -> bool {
        self.positions_equal(position, terminal)
    }

    fn materialize(&self, position: &Self::Position) -> Bounded<&C> {
        Bounded::new(&self.context, position.start.clone(), position.stop.clone())
    }
}

impl<P, E, C> BidirectionalGroupCursor for BidirectionalGroupContext<P, E, C>
where
    C: BidirectionalContext,
    C::Position: Clone,
    P: Projection<C::Element>,
    E: Equivalence<P::Output>,
{
    fn retreat(&self, position: &mut Self::Position) {
        if self.context.positions_equal(&position.start, &self.start) {
            trace!("retreat at start of sequence");
            return;
        }
        let criterion = self
            .projection
            .project(self.context.peek_before(&position.start));
        let start = self.locate_previous_boundary(&criterion, position.start.clone());
        position.stop = std::mem::replace(&mut position.start, start);
        position.criterion = Some(criterion);
    }
}

impl<P, E, C> fmt::Debug for BidirectionalGroupContext<P, E, C>
where
    C: Context + fmt::Debug,
    C::Position: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BidirectionalGroupContext")
            .field("context", &self.context)
            .field("start", &self.start)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}
