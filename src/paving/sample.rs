use super::common::{Money, Village};
use super::error::Error;
use super::road::Road;

pub const COST_PER_METER: Money = 2000;
pub const BUDGET: Money = 40000;

const ROADS: &[(&str, &str, i64, i64)] = &[
    ("P", "A", 5, 80),
    ("P", "B", 22, 65),
    ("P", "C", 13, 60),
    ("P", "D", 4, 55),
    ("P", "E", 15, 57),
    ("P", "I", 16, 75),
    ("P", "J", 1, 10),
    ("P", "H", 4, 100),
    ("I", "H", 20, 100),
    ("J", "I", 30, 70),
    ("J", "H", 19, 95),
    ("J", "U", 5, 71),
    ("H", "K", 3, 100),
    ("H", "U", 20, 89),
    ("E", "K", 16, 60),
    ("E", "F", 21, 60),
    ("D", "F", 7, 65),
    ("F", "G", 8, 42),
    ("U", "L", 10, 56),
    ("U", "M", 17, 90),
    ("M", "N", 13, 37),
    ("M", "O", 11, 24),
    ("M", "Q", 10, 43),
];

/// Eighteen villages around village P connected by 23 roads.
pub fn village_roads() -> Result<Vec<Road<Village>>, Error> {
    ROADS.iter()
        .map(|&(from, to, distance, value)| {
            Road::new(Village::from(from), Village::from(to), distance, value)
        })
        .collect()
}

#[test]
fn test_village_roads_should_succeed() {
    use super::network::RoadNetwork;
    let roads = village_roads().unwrap();
    assert_eq!(roads.len(), 23);
    assert_eq!(RoadNetwork::from_roads(&roads).villages().len(), 18);
}

#[test]
fn test_allocate_village_roads_should_pave_densest_affordable_roads() {
    use super::allocate::allocate;
    let roads = village_roads().unwrap();
    let allocation = allocate(&roads, BUDGET, COST_PER_METER).unwrap();
    let paved = allocation.paved().iter()
        .map(|x| (x.from().name(), x.to().name()))
        .collect::<Vec<_>>();
    assert_eq!(paved, vec![("H", "K"), ("P", "H"), ("P", "A"), ("J", "U"), ("P", "J")]);
    assert_eq!(allocation.remaining_budget(), 4000);
    assert_eq!(allocation.total_value(), 361);
}
