#![allow(dead_code)]

use regroup::{Context, GroupCursor, Grouped};

/// Element type read through a grouping engine's context.
pub type ElementOf<G> = <<G as GroupCursor>::Context as Context>::Element;

/// Collect every grouping of `grouped` front to back.
pub fn collect_groups<G>(grouped: &Grouped<G>) -> Vec<Vec<ElementOf<G>>>
where
    G: GroupCursor,
    G::Position: Clone,
    G::Terminal: Clone,
{
    grouped
        .iter()
        .map(|grouping| grouping.collect())
        .collect()
}

/// Numbers as owned values, for comparing against `&T` groupings.
pub fn owned<T: Copy>(groups: Vec<Vec<&T>>) -> Vec<Vec<T>> {
    groups
        .into_iter()
        .map(|grouping| grouping.into_iter().copied().collect())
        .collect()
}
