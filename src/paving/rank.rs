use std::cmp::Ordering;

use itertools::Itertools;

use super::road::Road;

/// Orders roads by value density, highest first.
///
/// All roads share the per-meter rate, so densities are compared as
/// `value / distance` by cross multiplication, which is exact. The sort is
/// stable: roads of equal density keep their input order.
pub fn rank<'r, V, Roads>(roads: Roads) -> Vec<&'r Road<V>>
        where V: 'r, Roads: IntoIterator<Item=&'r Road<V>> {
    roads.into_iter()
        .sorted_by(|l, r| by_density_descending(l, r))
        .collect()
}

pub fn by_density_descending<V>(lhs: &Road<V>, rhs: &Road<V>) -> Ordering {
    let lhs_weight = lhs.value() as i128 * rhs.distance() as i128;
    let rhs_weight = rhs.value() as i128 * lhs.distance() as i128;
    rhs_weight.cmp(&lhs_weight)
}

pub fn is_ranked<'r, V: 'r, Roads>(roads: Roads) -> bool
        where Roads: IntoIterator<Item=&'r Road<V>> {
    roads.into_iter()
        .tuple_windows()
        .all(|(l, r)| by_density_descending(l, r) != Ordering::Greater)
}

#[cfg(test)]
fn road(from: char, to: char, distance: i64, value: i64) -> Road<char> {
    Road::new(from, to, distance, value).unwrap()
}

#[test]
fn test_rank_empty_should_succeed() {
    let roads: Vec<Road<char>> = vec![];
    assert!(rank(&roads).is_empty());
}

#[test]
fn test_rank_should_order_by_value_density_descending() {
    let roads = [
        road('A', 'C', 4, 7),
        road('A', 'B', 2, 23),
        road('B', 'C', 1, 5),
    ];
    let ranked = rank(&roads);
    assert_eq!(ranked, vec![&roads[1], &roads[2], &roads[0]]);
}

#[test]
fn test_rank_with_equal_density_should_keep_input_order() {
    let roads = [
        road('I', 'H', 20, 100),
        road('A', 'B', 1, 1),
        road('J', 'H', 19, 95),
        road('K', 'L', 2, 10),
    ];
    let ranked = rank(&roads);
    assert_eq!(ranked, vec![&roads[0], &roads[2], &roads[3], &roads[1]]);
}

#[test]
fn test_rank_zero_value_roads_should_be_last() {
    let roads = [
        road('A', 'B', 1, 0),
        road('B', 'C', 100, 1),
    ];
    assert_eq!(rank(&roads), vec![&roads[1], &roads[0]]);
}

#[test]
fn test_rank_ranked_should_not_change_order() {
    let roads = [
        road('A', 'B', 2, 23),
        road('A', 'C', 4, 7),
        road('C', 'D', 8, 14),
        road('D', 'E', 3, 1),
    ];
    let ranked = rank(&roads);
    assert!(is_ranked(ranked.iter().cloned()));
    assert_eq!(rank(ranked.iter().cloned()), ranked);
}

#[test]
fn test_is_ranked_for_unordered_should_be_false() {
    let roads = [
        road('A', 'C', 4, 7),
        road('A', 'B', 2, 23),
    ];
    assert!(!is_ranked(&roads));
}
