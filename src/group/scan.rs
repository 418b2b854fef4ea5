//! Boundary scans shared by the entry point and both engines.
//!
//! The element a criterion was fetched from is never re-projected: each scan
//! steps over it before testing equivalence.

use crate::context::{BidirectionalContext, Context};
use crate::relation::{Equivalence, Projection};

#[inline]
pub(crate) fn equivalent<C, P, E>(
    context: &C,
    projection: &P,
    equivalence: &E,
    criterion: &P::Output,
    position: &C::Position,
) -> bool
where
    C: Context,
    P: Projection<C::Element>,
    E: Equivalence<P::Output>,
{
    equivalence.equivalent(criterion, &projection.project(context.peek_at(position)))
}

#[inline]
pub(crate) fn equivalent_before<C, P, E>(
    context: &C,
    projection: &P,
    equivalence: &E,
    criterion: &P::Output,
    position: &C::Position,
) -> bool
where
    C: BidirectionalContext,
    P: Projection<C::Element>,
    E: Equivalence<P::Output>,
{
    equivalence.equivalent(criterion, &projection.project(context.peek_before(position)))
}

/// First cursor after `position` whose element is not equivalent to
/// `criterion`, or `end`.
///
/// `position` must name the element `criterion` was projected from.
pub(crate) fn next_boundary<C, P, E>(
    context: &C,
    projection: &P,
    equivalence: &E,
    criterion: &P::Output,
    mut position: C::Position,
    end: &C::Position,
) -> C::Position
where
    C: Context,
    P: Projection<C::Element>,
    E: Equivalence<P::Output>,
{
    context.advance_one(&mut position);
    while !context.positions_equal(&position, end)
        && equivalent(context, projection, equivalence, criterion, &position)
    {
        context.advance_one(&mut position);
    }
    position
}

/// Earliest cursor at or before `position` such that every element in between
/// is equivalent to `criterion`, stopping at `start`.
///
/// The element just before `position` must be the one `criterion` was
/// projected from.
pub(crate) fn previous_boundary<C, P, E>(
    context: &C,
    projection: &P,
    equivalence: &E,
    criterion: &P::Output,
    mut position: C::Position,
    start: &C::Position,
) -> C::Position
where
    C: BidirectionalContext,
    P: Projection<C::Element>,
    E: Equivalence<P::Output>,
{
    context.retreat_one(&mut position);
    while !context.positions_equal(start, &position)
        && equivalent_before(context, projection, equivalence, criterion, &position)
    {
        context.retreat_one(&mut position);
    }
    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SliceContext;
    use crate::relation::{EqualTo, Identity};
    use std::cell::Cell;

    #[test]
    fn test_next_boundary_stops_at_first_mismatch() {
        let items = [1, 1, 1, 2, 2];
        let context = SliceContext::new(&items);
        let stop = next_boundary(&context, &Identity, &EqualTo, &&1, 0, &items.len());
        assert_eq!(stop, 3);
        let stop = next_boundary(&context, &Identity, &EqualTo, &&2, 3, &items.len());
        assert_eq!(stop, 5);
    }

    #[test]
    fn test_previous_boundary_stops_at_start() {
        let items = [1, 1, 2, 2, 2];
        let context = SliceContext::new(&items);
        let start = previous_boundary(&context, &Identity, &EqualTo, &&2, 5, &0);
        assert_eq!(start, 2);
        let start = previous_boundary(&context, &Identity, &EqualTo, &&1, 2, &0);
        assert_eq!(start, 0);
    }

    #[test]
    fn test_scan_skips_the_criterion_source() {
        let items = [3, 3, 4];
        let calls = Cell::new(0);
        let counting = |x: &i32| {
            calls.set(calls.get() + 1);
            *x
        };
        let context = SliceContext::new(&items);
        next_boundary(&context, &counting, &EqualTo, &3, 0, &items.len());
        // Elements 1 and 2 only.
        assert_eq!(calls.get(), 2);
    }
}
