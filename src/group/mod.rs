//! Lazy grouping of consecutive equivalent elements
//!
//! A grouping is a maximal run of consecutive elements whose criteria (the
//! projection of each element) are equivalent. Constructing a grouped
//! sequence only scans the first grouping; the rest are discovered one
//! boundary crossing at a time as the consumer advances.
//!
//! The engine is chosen from the wrapped context's traversal capability:
//!
//! - [`ForwardOnly`] contexts get a [`ForwardGroupContext`], which only
//!   advances and reports exhaustion against a [`GroupSentinel`].
//! - [`Bidirectional`] contexts get a [`BidirectionalGroupContext`], which
//!   also retreats and uses a degenerate `(end, end)` position as terminal.

mod bidirectional;
mod cursor;
mod forward;
mod position;
mod scan;

pub use bidirectional::BidirectionalGroupContext;
pub use cursor::{BidirectionalGroupCursor, GroupCursor, Grouped, Groups};
pub use forward::ForwardGroupContext;
pub use position::{GroupPosition, GroupSentinel};

use tracing::trace;

use crate::context::{Bidirectional, BidirectionalContext, Bounded, Context, ForwardOnly};
use crate::relation::{EqualTo, Equivalence, Identity, Projection};

/// Lazy sequence produced by grouping a `C` with projection `P` and
/// equivalence `E`.
pub type GroupRange<P, E, C> = <<C as Context>::Traversal as Assemble<P, E, C>>::Output;

/// Builds the engine and the initial/terminal positions for one traversal
/// capability.
pub trait Assemble<P, E, C>
where
    C: Context,
    P: Projection<C::Element>,
{
    /// The lazy sequence value.
    type Output;

    /// Assemble the sequence. `first` holds the stop cursor and criterion of
    /// the first grouping, or `None` for an empty input.
    fn assemble(
        projection: P,
        equivalence: E,
        context: C,
        from: C::Position,
        to: C::Position,
        first: Option<(C::Position, P::Output)>,
    ) -> Self::Output;
}

impl<P, E, C> Assemble<P, E, C> for ForwardOnly
where
    C: Context,
    C::Position: Clone,
    P: Projection<C::Element>,
    E: Equivalence<P::Output>,
{
    type Output = Grouped<ForwardGroupContext<P, E, C>>;

    fn assemble(
        projection: P,
        equivalence: E,
        context: C,
        from: C::Position,
        to: C::Position,
        first: Option<(C::Position, P::Output)>,
    ) -> Self::Output {
        let initial = match first {
            Some((needle, criterion)) => GroupPosition::new(from, needle, Some(criterion)),
            None => GroupPosition::new(from.clone(), from, None),
        };
        let engine = ForwardGroupContext::new(projection, equivalence, context, to);
        Grouped::new(engine, initial, GroupSentinel)
    }
}

impl<P, E, C> Assemble<P, E, C> for Bidirectional
where
    C: BidirectionalContext,
    C::Position: Clone,
    P: Projection<C::Element>,
    E: Equivalence<P::Output>,
{
    type Output = Grouped<BidirectionalGroupContext<P, E, C>>;

    fn assemble(
        projection: P,
        equivalence: E,
        context: C,
        from: C::Position,
        to: C::Position,
        first: Option<(C::Position, P::Output)>,
    ) -> Self::Output {
        let initial = match first {
            Some((needle, criterion)) => GroupPosition::new(from.clone(), needle, Some(criterion)),
            // Same bounds as the terminal, so the two compare equal.
            None => GroupPosition::new(to.clone(), to.clone(), None),
        };
        let terminal = GroupPosition::new(to.clone(), to.clone(), None);
        let engine = BidirectionalGroupContext::new(projection, equivalence, context, from, to);
        Grouped::new(engine, initial, terminal)
    }
}

/// Group `range` with any [`Projection`] and [`Equivalence`].
///
/// Scans only the first grouping. An empty input yields a sequence whose
/// initial position already equals its terminal.
pub fn group_with<P, E, C>(projection: P, equivalence: E, range: Bounded<C>) -> GroupRange<P, E, C>
where
    C: Context,
    C::Position: Clone,
    P: Projection<C::Element>,
    E: Equivalence<P::Output>,
    C::Traversal: Assemble<P, E, C>,
{
    let (context, from, to) = range.into_parts();

    if context.positions_equal(&from, &to) {
        trace!("grouping an empty sequence");
        return <C::Traversal as Assemble<P, E, C>>::assemble(
            projection,
            equivalence,
            context,
            from,
            to,
            None,
        );
    }

    let criterion = projection.project(context.peek_at(&from));
    let needle = scan::next_boundary(
        &context,
        &projection,
        &equivalence,
        &criterion,
        from.clone(),
        &to,
    );
    trace!("first grouping located");

    <C::Traversal as Assemble<P, E, C>>::assemble(
        projection,
        equivalence,
        context,
        from,
        to,
        Some((needle, criterion)),
    )
}

/// Group `range` into maximal runs whose projected criteria are equivalent.
///
/// ```
/// use regroup::{group, Ints};
///
/// let classes = group(|i| i / 3, |a: &i64, b: &i64| a == b, Ints::range(0..6));
/// let groupings: Vec<Vec<i64>> = classes.iter().map(|grouping| grouping.collect()).collect();
/// assert_eq!(groupings, vec![vec![0, 1, 2], vec![3, 4, 5]]);
/// ```
pub fn group<P, E, C, K>(projection: P, equivalence: E, range: Bounded<C>) -> GroupRange<P, E, C>
where
    C: Context,
    C::Position: Clone,
    P: Fn(C::Element) -> K,
    E: Fn(&K, &K) -> bool,
    C::Traversal: Assemble<P, E, C>,
{
    group_with(projection, equivalence, range)
}

/// Group `range` by projected criterion, comparing criteria with `==`.
pub fn group_by<P, C, K>(projection: P, range: Bounded<C>) -> GroupRange<P, EqualTo, C>
where
    C: Context,
    C::Position: Clone,
    P: Fn(C::Element) -> K,
    K: PartialEq,
    C::Traversal: Assemble<P, EqualTo, C>,
{
    group_with(projection, EqualTo, range)
}

/// Group runs of consecutive equal elements.
///
/// ```
/// use regroup::{group_runs, SliceContext};
///
/// let items = [1, 1, 2, 2, 2, 3];
/// let runs = group_runs(SliceContext::range(&items));
/// let lengths: Vec<usize> = runs.iter().map(Iterator::count).collect();
/// assert_eq!(lengths, vec![2, 3, 1]);
/// ```
pub fn group_runs<C>(range: Bounded<C>) -> GroupRange<Identity, EqualTo, C>
where
    C: Context,
    C::Position: Clone,
    C::Element: PartialEq,
    C::Traversal: Assemble<Identity, EqualTo, C>,
{
    group_with(Identity, EqualTo, range)
}
