use std::fmt;

use tracing::trace;

use super::cursor::GroupCursor;
use super::position::{GroupPosition, GroupSentinel};
use super::scan;
use crate::context::{Bounded, Context};
use crate::relation::{Equivalence, Projection};

/// Grouping engine for sequences that only step forward.
///
/// Keeps the end cursor of the wrapped sequence; exhaustion is reported
/// against a [`GroupSentinel`].
#[derive(Clone)]
pub struct ForwardGroupContext<P, E, C: Context> {
    projection: P,
    equivalence: E,
    context: C,
    end: C::Position,
}

impl<P, E, C: Context> ForwardGroupContext<P, E, C> {
    pub(crate) fn new(projection: P, equivalence: E, context: C, end: C::Position) -> Self {
        Self {
            projection,
            equivalence,
            context,
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

impl<P, E, C> ForwardGroupContext<P, E, C>
where
    C: Context,
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
    ///
    /// `position` must name the element `criterion` was projected from.
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

    /// Whether both bounds of `position` sit at the end of the sequence.
    pub fn position_equals_terminal(&self, position: &GroupPosition<C::Position, P::Output>) -> bool {
        self.context.positions_equal(&position.start, &self.end)
            && self.context.positions_equal(&position.stop, &self.end)
    }
}

impl<P, E, C> GroupCursor for ForwardGroupContext<P, E, C>
where
    C: Context,
    C::Position: Clone,
    P: Projection<C::Element>,
    E: Equivalence<P::Output>,
{
    type Context = C;
    type Position = GroupPosition<C::Position, P::Output>;
    type Terminal = GroupSentinel;

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

    fn reached(&self, position: &Self::Position, _terminal: &GroupSentinel) -> bool {
        self.position_equals_terminal(position)
    }

    fn materialize(&self, position: &Self::Position) -> Bounded<&C> {
        Bounded::new(&self.context, position.start.clone(), position.stop.clone())
    }
}

impl<P, E, C> fmt::Debug for ForwardGroupContext<P, E, C>
where
    C: Context + fmt::Debug,
    C::Position: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardGroupContext")
            .field("context", &self.context)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::IterContext;
    use crate::group::group;

    fn digits(text: &str) -> Vec<u32> {
        text.chars().filter_map(|c| c.to_digit(10)).collect()
    }

    #[test]
    fn test_advance_walks_every_grouping() {
        let grouped = group(|c: char| c, |a: &char, b: &char| a == b, IterContext::range("aabccc".chars()));
        let (engine, mut position, terminal) = grouped.into_parts();

        assert_eq!(engine.materialize(&position).collect::<String>(), "aa");
        assert_eq!(position.criterion(), Some(&'a'));

        engine.advance(&mut position);
        assert_eq!(engine.materialize(&position).collect::<String>(), "b");
        assert_eq!(position.criterion(), Some(&'b'));

        engine.advance(&mut position);
        assert_eq!(engine.materialize(&position).collect::<String>(), "ccc");
        assert!(!engine.reached(&position, &terminal));

        engine.advance(&mut position);
        assert!(engine.reached(&position, &terminal));
        assert_eq!(position.criterion(), None);
    }

    #[test]
    fn test_advance_on_terminal_is_idempotent() {
        let grouped = group(|d: u32| d, |a: &u32, b: &u32| a == b, IterContext::range(digits("7").into_iter()));
        let (engine, mut position, terminal) = grouped.into_parts();
        engine.advance(&mut position);
        assert!(engine.position_equals_terminal(&position));
        engine.advance(&mut position);
        engine.advance(&mut position);
        assert!(engine.reached(&position, &terminal));
    }

    #[test]
    fn test_equivalent_and_boundary_queries() {
        let range = IterContext::range(digits("11223").into_iter());
        let grouped = group(|d: u32| d, |a: &u32, b: &u32| a == b, range);
        let engine = grouped.engine();
        let start = grouped.from().start().clone();
        assert!(engine.equivalent(&1, &start));
        assert!(!engine.equivalent(&2, &start));
        let boundary = engine.locate_next_boundary(&1, start);
        assert_eq!(boundary.offset(), 2);
    }

    #[test]
    fn test_positions_equal_compares_both_bounds() {
        let grouped = group(|c: char| c, |a: &char, b: &char| a == b, IterContext::range("xxy".chars()));
        let engine = grouped.engine();
        let first = grouped.from().clone();
        let mut second = first.clone();
        assert!(engine.positions_equal(&first, &second));
        engine.advance(&mut second);
        assert!(!engine.positions_equal(&first, &second));
    }
}
