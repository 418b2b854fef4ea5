//! End-to-end grouping behaviour over every bundled context

use regroup::{
    group, group_by, group_runs, BidirectionalGroupCursor, GroupCursor, Ints, IterContext,
    SliceContext,
};

mod common;
use common::{collect_groups, owned};

#[test]
fn test_default_grouping_yields_runs_of_equal_elements() {
    let items = [1, 1, 2, 2, 2, 3];
    let runs = group_runs(SliceContext::range(&items));
    assert_eq!(
        owned(collect_groups(&runs)),
        vec![vec![1, 1], vec![2, 2, 2], vec![3]]
    );
}

#[test]
fn test_custom_criterion_groups_by_quotient() {
    let items = [0, 1, 2, 3, 4, 5];
    let classes = group(|x: &i32| x / 3, |a: &i32, b: &i32| a == b, SliceContext::range(&items));
    assert_eq!(
        owned(collect_groups(&classes)),
        vec![vec![0, 1, 2], vec![3, 4, 5]]
    );

    let computed = group(|x: i64| x / 3, |a: &i64, b: &i64| a == b, Ints::range(0..6));
    assert_eq!(collect_groups(&computed), vec![vec![0, 1, 2], vec![3, 4, 5]]);
}

#[test]
fn test_single_element_and_all_equivalent_inputs() {
    let single = [7];
    let grouped = group_runs(SliceContext::range(&single));
    assert_eq!(owned(collect_groups(&grouped)), vec![vec![7]]);

    let same = [5, 5, 5, 5];
    let grouped = group_runs(SliceContext::range(&same));
    assert_eq!(owned(collect_groups(&grouped)), vec![vec![5, 5, 5, 5]]);
}

#[test]
fn test_empty_input_has_no_groupings() {
    let empty: Vec<u32> = Vec::new();
    let bidirectional = group_runs(SliceContext::range(&empty));
    assert!(bidirectional.is_empty());
    assert!(bidirectional
        .engine()
        .positions_equal(bidirectional.from(), bidirectional.to()));
    assert_eq!(bidirectional.iter().count(), 0);

    let forward = group_runs(IterContext::range(empty.iter()));
    assert!(forward.is_empty());
    assert!(forward.engine().reached(forward.from(), forward.to()));
    assert_eq!(forward.iter().count(), 0);
}

#[test]
fn test_forward_only_matches_bidirectional() {
    let text = "mississippi";
    let chars: Vec<char> = text.chars().collect();
    let forward = group_runs(IterContext::range(text.chars()));
    let bidirectional = group_runs(SliceContext::range(&chars));
    assert_eq!(
        collect_groups(&forward),
        owned(collect_groups(&bidirectional))
    );
}

#[test]
fn test_idempotent_exhaustion() {
    let items = [1, 2];
    let grouped = group_runs(SliceContext::range(&items));
    let engine = grouped.engine();
    let mut position = grouped.from().clone();
    for _ in 0..5 {
        engine.advance(&mut position);
    }
    assert!(engine.reached(&position, grouped.to()));
    assert_eq!(position.criterion(), None);

    let mut first = grouped.from().clone();
    engine.retreat(&mut first);
    assert!(engine.positions_equal(&first, grouped.from()));
}

#[test]
fn test_symmetry_away_from_the_ends() {
    let items = [3, 3, 1, 4, 4, 4, 1, 5, 5];
    let grouped = group_runs(SliceContext::range(&items));
    let engine = grouped.engine();

    let mut position = grouped.from().clone();
    engine.advance(&mut position);
    while !engine.reached(&position, grouped.to()) {
        let original = position.clone();

        let mut probe = original.clone();
        engine.advance(&mut probe);
        engine.retreat(&mut probe);
        assert!(engine.positions_equal(&probe, &original));

        let mut probe = original.clone();
        engine.retreat(&mut probe);
        engine.advance(&mut probe);
        assert!(engine.positions_equal(&probe, &original));

        engine.advance(&mut position);
    }
}

#[test]
fn test_reverse_traversal_mirrors_forward() {
    let items = ["a", "a", "b", "c", "c", "c", "a"];
    let grouped = group_runs(SliceContext::range(&items));
    let mut forward = collect_groups(&grouped);
    forward.reverse();
    let backward: Vec<Vec<&&str>> = grouped
        .iter()
        .rev()
        .map(|grouping| grouping.collect())
        .collect();
    assert_eq!(forward, backward);
}

#[test]
fn test_front_and_back_meet_in_the_middle() {
    let grouped = group_by(|x: i64| x / 2, Ints::range(0..10));
    let mut groups = grouped.iter();
    assert_eq!(groups.next().map(Iterator::collect::<Vec<_>>), Some(vec![0, 1]));
    assert_eq!(groups.next_back().map(Iterator::collect::<Vec<_>>), Some(vec![8, 9]));
    assert_eq!(groups.next().map(Iterator::collect::<Vec<_>>), Some(vec![2, 3]));
    assert_eq!(groups.next_back().map(Iterator::collect::<Vec<_>>), Some(vec![6, 7]));
    assert_eq!(groups.next().map(Iterator::collect::<Vec<_>>), Some(vec![4, 5]));
    assert!(groups.next().is_none());
    assert!(groups.next_back().is_none());
}

#[test]
fn test_criterion_outlives_transient_elements() {
    let words = vec!["Alpha".to_string(), "apple".to_string(), "Beta".to_string()];
    let grouped = group(
        |word: String| word.to_lowercase().chars().next(),
        |a: &Option<char>, b: &Option<char>| a == b,
        IterContext::range(words.into_iter()),
    );
    assert_eq!(grouped.from().criterion(), Some(&Some('a')));
    let lengths: Vec<usize> = grouped.iter().map(Iterator::count).collect();
    assert_eq!(lengths, vec![2, 1]);
}

#[test]
fn test_grouped_sequence_is_saveable() {
    let items = [1, 1, 2];
    let grouped = group_runs(SliceContext::range(&items));
    let copy = grouped.clone();
    assert_eq!(collect_groups(&grouped), collect_groups(&copy));
}
