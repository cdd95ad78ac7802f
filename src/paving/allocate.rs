use std::fmt::Display;

use rustc_serialize::{Encodable, Encoder};

use super::common::{Money, Value};
use super::error::Error;
use super::rank::rank;
use super::road::Road;

#[derive(Clone, Debug, PartialEq)]
pub struct Conf {
    pub budget: Money,
    pub cost_per_meter: Money,
}

impl Conf {
    pub fn validate(&self) -> Result<(), Error> {
        if self.budget < 0 {
            return Err(Error::InvalidBudget(self.budget));
        }
        if self.cost_per_meter <= 0 {
            return Err(Error::InvalidCostPerMeter(self.cost_per_meter));
        }
        Ok(())
    }
}

/// Outcome of one allocation run: the paved roads in the order they were
/// accepted and what is left of the budget.
#[derive(Clone, Debug, PartialEq)]
pub struct Allocation<V> {
    paved: Vec<Road<V>>,
    initial_budget: Money,
    remaining_budget: Money,
    total_value: Value,
}

impl<V> Allocation<V> {
    pub fn paved(&self) -> &[Road<V>] {
        &self.paved
    }

    pub fn initial_budget(&self) -> Money {
        self.initial_budget
    }

    pub fn remaining_budget(&self) -> Money {
        self.remaining_budget
    }

    pub fn spent(&self) -> Money {
        self.initial_budget - self.remaining_budget
    }

    pub fn total_value(&self) -> Value {
        self.total_value
    }

    pub fn is_paved(&self, road: &Road<V>) -> bool where V: PartialEq {
        self.paved.iter().any(|x| x.same_road(road))
    }

    /// Whether the village is an endpoint of at least one paved road.
    pub fn is_paved_village(&self, village: &V) -> bool where V: PartialEq {
        self.paved.iter().any(|x| x.from() == village || x.to() == village)
    }
}

impl<V: Encodable> Encodable for Allocation<V> {
    fn encode<S: Encoder>(&self, s: &mut S) -> Result<(), S::Error> {
        s.emit_struct("Allocation", 4, |s| {
            s.emit_struct_field("paved", 0, |s| self.paved.encode(s))?;
            s.emit_struct_field("initial_budget", 1, |s| self.initial_budget.encode(s))?;
            s.emit_struct_field("remaining_budget", 2, |s| self.remaining_budget.encode(s))?;
            s.emit_struct_field("total_value", 3, |s| self.total_value.encode(s))
        })
    }
}

pub trait Allocate<V> {
    fn allocate(&self, conf: &Conf) -> Result<Allocation<V>, Error>;
}

impl<V: Clone + Display> Allocate<V> for [Road<V>] {
    fn allocate(&self, conf: &Conf) -> Result<Allocation<V>, Error> {
        Allocator::new(self, conf).perform()
    }
}

pub fn allocate<V: Clone + Display>(roads: &[Road<V>], budget: Money,
                                    cost_per_meter: Money) -> Result<Allocation<V>, Error> {
    roads.allocate(&Conf {budget: budget, cost_per_meter: cost_per_meter})
}

struct Allocator<'r, V: 'r> {
    roads: &'r [Road<V>],
    conf: &'r Conf,
}

impl<'r, V: Clone + Display> Allocator<'r, V> {
    fn new(roads: &'r [Road<V>], conf: &'r Conf) -> Self {
        Allocator {roads: roads, conf: conf}
    }

    fn perform(&self) -> Result<Allocation<V>, Error> {
        self.validate()?;
        let mut remaining_budget = self.conf.budget;
        let mut total_value: Value = 0;
        let mut paved = Vec::new();
        for road in rank(self.roads) {
            let cost = road.paving_cost(self.conf.cost_per_meter);
            if cost <= remaining_budget {
                total_value = total_value.checked_add(road.value()).ok_or(Error::ValueOverflow)?;
                remaining_budget -= cost;
                paved.push(road.clone());
            }
        }
        Ok(Allocation {
            paved: paved,
            initial_budget: self.conf.budget,
            remaining_budget: remaining_budget,
            total_value: total_value,
        })
    }

    fn validate(&self) -> Result<(), Error> {
        self.conf.validate()?;
        for road in self.roads {
            road.checked_paving_cost(self.conf.cost_per_meter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
fn road(from: char, to: char, distance: i64, value: i64) -> Road<char> {
    Road::new(from, to, distance, value).unwrap()
}

#[cfg(test)]
fn random_roads<R: rand::Rng>(rng: &mut R, count: usize) -> Vec<Road<char>> {
    let villages = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
    (0..count)
        .map(|_| {
            let from = rng.random_range(0..villages.len());
            let to = (from + rng.random_range(1..villages.len())) % villages.len();
            road(villages[from], villages[to], rng.random_range(1..=30), rng.random_range(0..=100))
        })
        .collect()
}

#[test]
fn test_allocate_two_roads_should_pave_both() {
    let roads = [
        road('A', 'B', 2, 23),
        road('A', 'C', 4, 7),
    ];
    let allocation = allocate(&roads, 40000, 5000).unwrap();
    assert_eq!(allocation.paved(), &roads[..]);
    assert_eq!(allocation.remaining_budget(), 10000);
    assert_eq!(allocation.total_value(), 30);
    assert_eq!(allocation.spent(), 30000);
}

#[test]
fn test_allocate_should_pave_in_value_density_order() {
    let roads = [
        road('A', 'C', 4, 7),
        road('A', 'B', 2, 23),
    ];
    let allocation = allocate(&roads, 40000, 5000).unwrap();
    assert_eq!(allocation.paved(), &[roads[1].clone(), roads[0].clone()][..]);
}

#[test]
fn test_allocate_road_costing_exactly_remaining_budget_should_pave_it() {
    let roads = [
        road('A', 'B', 2, 23),
        road('A', 'C', 2, 7),
    ];
    let allocation = allocate(&roads, 20000, 5000).unwrap();
    assert_eq!(allocation.paved().len(), 2);
    assert_eq!(allocation.remaining_budget(), 0);
}

#[test]
fn test_allocate_should_skip_too_expensive_road_and_continue() {
    let roads = [
        road('A', 'B', 2, 100),
        road('B', 'C', 10, 90),
        road('C', 'D', 1, 1),
    ];
    let allocation = allocate(&roads, 3, 1).unwrap();
    assert_eq!(allocation.paved(), &[roads[0].clone(), roads[2].clone()][..]);
    assert_eq!(allocation.remaining_budget(), 0);
    assert_eq!(allocation.total_value(), 101);
}

#[test]
fn test_allocate_should_not_look_ahead_for_better_combination() {
    let roads = [
        road('A', 'B', 6, 60),
        road('B', 'C', 5, 45),
        road('C', 'D', 5, 45),
    ];
    let allocation = allocate(&roads, 10, 1).unwrap();
    assert_eq!(allocation.paved(), &[roads[0].clone()][..]);
    assert_eq!(allocation.total_value(), 60);
    assert_eq!(allocation.remaining_budget(), 4);
}

#[test]
fn test_allocate_empty_should_keep_budget() {
    let roads: Vec<Road<char>> = vec![];
    let allocation = allocate(&roads, 40000, 5000).unwrap();
    assert!(allocation.paved().is_empty());
    assert_eq!(allocation.remaining_budget(), 40000);
    assert_eq!(allocation.total_value(), 0);
}

#[test]
fn test_allocate_with_zero_budget_should_pave_nothing() {
    let roads = [
        road('A', 'B', 1, 100),
        road('A', 'C', 4, 0),
    ];
    let allocation = allocate(&roads, 0, 1).unwrap();
    assert!(allocation.paved().is_empty());
    assert_eq!(allocation.remaining_budget(), 0);
    assert_eq!(allocation.total_value(), 0);
}

#[test]
fn test_allocate_with_negative_budget_should_fail() {
    let roads = [road('A', 'B', 2, 23)];
    assert_eq!(allocate(&roads, -1, 5000), Err(Error::InvalidBudget(-1)));
}

#[test]
fn test_allocate_with_zero_cost_per_meter_should_fail() {
    let roads = [road('A', 'B', 2, 23)];
    assert_eq!(allocate(&roads, 40000, 0), Err(Error::InvalidCostPerMeter(0)));
}

#[test]
fn test_allocate_with_unpriceable_road_should_fail_without_selection() {
    let roads = [
        road('A', 'B', 2, 23),
        road('B', 'C', i64::MAX / 2, 1),
    ];
    match allocate(&roads, 40000, 5000) {
        Err(Error::InvalidEdge {from, to, ..}) => assert_eq!((from.as_str(), to.as_str()), ("B", "C")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_allocate_with_overflowing_total_value_should_fail() {
    let roads = [
        road('A', 'B', 1, i64::MAX),
        road('B', 'C', 1, i64::MAX),
    ];
    assert_eq!(allocate(&roads, 10, 1), Err(Error::ValueOverflow));
}

#[test]
fn test_allocate_with_large_value_of_skipped_road_should_succeed() {
    let roads = [
        road('A', 'B', 1, i64::MAX),
        road('B', 'C', 5, i64::MAX),
    ];
    let allocation = allocate(&roads, 3, 1).unwrap();
    assert_eq!(allocation.total_value(), i64::MAX);
    assert_eq!(allocation.remaining_budget(), 2);
}

#[test]
fn test_allocate_trait_should_match_free_function() {
    let roads = vec![
        road('A', 'B', 2, 23),
        road('A', 'C', 4, 7),
        road('B', 'C', 3, 12),
    ];
    let conf = Conf {budget: 25000, cost_per_meter: 5000};
    assert_eq!(roads.allocate(&conf), allocate(&roads, 25000, 5000));
}

#[test]
fn test_is_paved_should_ignore_direction() {
    let roads = [road('A', 'B', 2, 23)];
    let allocation = allocate(&roads, 40000, 5000).unwrap();
    assert!(allocation.is_paved(&road('B', 'A', 2, 23)));
    assert!(!allocation.is_paved(&road('A', 'C', 2, 23)));
}

#[test]
fn test_encode_allocation_should_produce_json_object() {
    use rustc_serialize::json;
    let roads = [road('A', 'B', 2, 23)];
    let allocation = allocate(&roads, 15000, 5000).unwrap();
    assert_eq!(json::encode(&allocation).unwrap(), concat!(
        r#"{"paved":[{"from":"A","to":"B","distance":2,"value":23}],"#,
        r#""initial_budget":15000,"remaining_budget":5000,"total_value":23}"#));
}

#[test]
fn test_allocate_random_roads_should_never_exceed_budget() {
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let count = rng.random_range(0..20);
        let roads = random_roads(&mut rng, count);
        let budget = rng.random_range(0..200);
        let allocation = allocate(&roads, budget, 3).unwrap();
        let spent: i64 = allocation.paved().iter().map(|x| x.paving_cost(3)).sum();
        assert!(spent <= budget);
        assert_eq!(spent, allocation.spent());
        assert!(allocation.remaining_budget() >= 0);
        assert_eq!(allocation.total_value(),
                   allocation.paved().iter().map(Road::value).sum::<i64>());
    }
}

#[test]
fn test_allocate_random_roads_should_skip_only_unaffordable_roads() {
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;
    use super::rank::is_ranked;
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let count = rng.random_range(1..20);
        let roads = random_roads(&mut rng, count);
        let budget = rng.random_range(0..200);
        let allocation = allocate(&roads, budget, 2).unwrap();
        assert!(is_ranked(allocation.paved()));
        for road in roads.iter().filter(|&x| !allocation.paved().contains(x)) {
            assert!(road.paving_cost(2) > allocation.remaining_budget());
        }
    }
}

#[test]
fn test_allocate_same_input_should_give_same_result() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    let mut rng = StdRng::seed_from_u64(13);
    let roads = random_roads(&mut rng, 50);
    let first = allocate(&roads, 300, 4).unwrap();
    for _ in 0..10 {
        assert_eq!(allocate(&roads, 300, 4).unwrap(), first);
    }
}
