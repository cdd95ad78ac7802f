use std::fmt::Display;
use std::hash::{Hash, Hasher};

use rustc_serialize::{Encodable, Encoder};

use super::common::{Density, Meters, Money, Value};
use super::error::Error;

/// Undirected road between two villages.
///
/// A road only knows its length and the benefit of paving it. The paving
/// cost depends on the per-meter rate, which is configured per allocation.
#[derive(Clone, Debug)]
pub struct Road<V> {
    from: V,
    to: V,
    distance: Meters,
    value: Value,
}

impl<V> Road<V> {
    pub fn new(from: V, to: V, distance: Meters, value: Value) -> Result<Road<V>, Error>
            where V: Display {
        if distance <= 0 {
            return Err(invalid(&from, &to, format!("distance must be positive, got {}", distance)));
        }
        if value < 0 {
            return Err(invalid(&from, &to, format!("value must not be negative, got {}", value)));
        }
        Ok(Road {from: from, to: to, distance: distance, value: value})
    }

    pub fn from(&self) -> &V {
        &self.from
    }

    pub fn to(&self) -> &V {
        &self.to
    }

    pub fn distance(&self) -> Meters {
        self.distance
    }

    pub fn value(&self) -> Value {
        self.value
    }

    /// Saturates at `Money::MAX`; use `checked_paving_cost` to detect overflow.
    pub fn paving_cost(&self, cost_per_meter: Money) -> Money {
        self.distance.saturating_mul(cost_per_meter)
    }

    pub fn value_density(&self, cost_per_meter: Money) -> Result<Density, Error>
            where V: Display {
        let cost = self.checked_paving_cost(cost_per_meter)?;
        if cost == 0 {
            return Err(invalid(&self.from, &self.to, "paving cost is zero".to_string()));
        }
        Ok(self.value as Density / cost as Density)
    }

    /// Checks that the road can be priced with `cost_per_meter` without overflow.
    pub fn checked_paving_cost(&self, cost_per_meter: Money) -> Result<Money, Error>
            where V: Display {
        if cost_per_meter <= 0 {
            return Err(Error::InvalidCostPerMeter(cost_per_meter));
        }
        self.distance.checked_mul(cost_per_meter)
            .ok_or_else(|| invalid(&self.from, &self.to, format!(
                "paving cost of {} m at {} per meter overflows", self.distance, cost_per_meter)))
    }

    /// Whether both roads connect the same pair of villages, in any direction.
    pub fn same_road(&self, other: &Road<V>) -> bool where V: PartialEq {
        (self.from == other.from && self.to == other.to)
        || (self.from == other.to && self.to == other.from)
    }
}

fn invalid<V: Display>(from: &V, to: &V, reason: String) -> Error {
    Error::InvalidEdge {from: from.to_string(), to: to.to_string(), reason: reason}
}

impl<V: PartialEq> PartialEq for Road<V> {
    fn eq(&self, other: &Road<V>) -> bool {
        self.same_road(other) && self.distance == other.distance && self.value == other.value
    }
}

impl<V: Eq> Eq for Road<V> {}

impl<V: Hash + Ord> Hash for Road<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.from <= self.to {
            self.from.hash(state);
            self.to.hash(state);
        } else {
            self.to.hash(state);
            self.from.hash(state);
        }
        self.distance.hash(state);
        self.value.hash(state);
    }
}

impl<V: Encodable> Encodable for Road<V> {
    fn encode<S: Encoder>(&self, s: &mut S) -> Result<(), S::Error> {
        s.emit_struct("Road", 4, |s| {
            s.emit_struct_field("from", 0, |s| self.from.encode(s))?;
            s.emit_struct_field("to", 1, |s| self.to.encode(s))?;
            s.emit_struct_field("distance", 2, |s| self.distance.encode(s))?;
            s.emit_struct_field("value", 3, |s| self.value.encode(s))
        })
    }
}

#[test]
fn test_new_should_succeed() {
    let road = Road::new('A', 'B', 2, 23).unwrap();
    assert_eq!(*road.from(), 'A');
    assert_eq!(*road.to(), 'B');
    assert_eq!(road.distance(), 2);
    assert_eq!(road.value(), 23);
}

#[test]
fn test_new_with_zero_distance_should_fail() {
    assert_eq!(Road::new('A', 'B', 0, 23), Err(Error::InvalidEdge {
        from: "A".to_string(),
        to: "B".to_string(),
        reason: "distance must be positive, got 0".to_string(),
    }));
}

#[test]
fn test_new_with_negative_distance_should_fail() {
    match Road::new('A', 'B', -3, 23) {
        Err(Error::InvalidEdge {..}) => (),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_new_with_negative_value_should_fail() {
    match Road::new('A', 'B', 2, -1) {
        Err(Error::InvalidEdge {reason, ..}) => assert!(reason.contains("value")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_new_with_zero_value_should_succeed() {
    assert!(Road::new('A', 'B', 2, 0).is_ok());
}

#[test]
fn test_paving_cost_should_be_distance_times_cost_per_meter() {
    let road = Road::new('A', 'C', 4, 7).unwrap();
    assert_eq!(road.paving_cost(5000), 20000);
}

#[test]
fn test_value_density_should_be_value_per_paving_cost() {
    let road = Road::new('A', 'B', 2, 23).unwrap();
    assert_eq!(road.value_density(5000), Ok(23.0 / 10000.0));
}

#[test]
fn test_value_density_with_zero_cost_per_meter_should_fail() {
    let road = Road::new('A', 'B', 2, 23).unwrap();
    assert_eq!(road.value_density(0), Err(Error::InvalidCostPerMeter(0)));
}

#[test]
fn test_checked_paving_cost_with_overflow_should_fail() {
    let road = Road::new('A', 'B', Meters::MAX / 2, 23).unwrap();
    match road.checked_paving_cost(3) {
        Err(Error::InvalidEdge {reason, ..}) => assert!(reason.contains("overflows")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_paving_cost_with_overflow_should_saturate() {
    let road = Road::new('A', 'B', Meters::MAX / 2, 23).unwrap();
    assert_eq!(road.paving_cost(3), Money::MAX);
}

#[test]
fn test_same_road_should_ignore_direction() {
    let forward = Road::new('A', 'B', 2, 23).unwrap();
    let backward = Road::new('B', 'A', 2, 23).unwrap();
    let other = Road::new('A', 'C', 2, 23).unwrap();
    assert!(forward.same_road(&backward));
    assert!(backward.same_road(&forward));
    assert!(!forward.same_road(&other));
    assert_eq!(forward, backward);
}

#[test]
fn test_hash_should_ignore_direction() {
    use std::collections::HashSet;
    let roads = [
        Road::new('A', 'B', 2, 23).unwrap(),
        Road::new('B', 'A', 2, 23).unwrap(),
    ].iter().cloned().collect::<HashSet<_>>();
    assert_eq!(roads.len(), 1);
}

#[test]
fn test_encode_should_produce_json_object() {
    use rustc_serialize::json;
    use super::common::Village;
    let road = Road::new(Village::from("P"), Village::from("A"), 5, 80).unwrap();
    assert_eq!(json::encode(&road).unwrap(),
               r#"{"from":"P","to":"A","distance":5,"value":80}"#);
}
