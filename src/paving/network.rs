use super::allocate::Allocation;
use super::road::Road;

/// Villages and the roads between them, in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadNetwork<V> {
    villages: Vec<V>,
    roads: Vec<Road<V>>,
}

impl<V> RoadNetwork<V> {
    pub fn villages(&self) -> &[V] {
        &self.villages
    }

    pub fn roads(&self) -> &[Road<V>] {
        &self.roads
    }

    pub fn village_index(&self, village: &V) -> Option<usize> where V: PartialEq {
        self.villages.iter().position(|x| x == village)
    }
}

impl<V: Clone + PartialEq> RoadNetwork<V> {
    pub fn new() -> RoadNetwork<V> {
        RoadNetwork {
            villages: Vec::new(),
            roads: Vec::new(),
        }
    }

    pub fn from_roads<'r, Roads>(roads: Roads) -> RoadNetwork<V>
            where V: 'r, Roads: IntoIterator<Item=&'r Road<V>> {
        let mut network = RoadNetwork::new();
        for road in roads {
            network.add_village(road.from().clone());
            network.add_village(road.to().clone());
            network.add_road(road.clone());
        }
        network
    }

    /// Sub-network with only the paved roads and the villages they touch.
    pub fn paved(&self, allocation: &Allocation<V>) -> RoadNetwork<V> {
        RoadNetwork::from_roads(self.roads.iter().filter(|&x| allocation.is_paved(x)))
    }

    pub fn add_village(&mut self, village: V) -> usize {
        match self.village_index(&village) {
            Some(index) => index,
            None => {
                self.villages.push(village);
                self.villages.len() - 1
            }
        }
    }

    pub fn add_road(&mut self, road: Road<V>) {
        assert!(self.village_index(road.from()).is_some());
        assert!(self.village_index(road.to()).is_some());
        self.roads.push(road);
    }
}

#[cfg(test)]
fn road(from: char, to: char, distance: i64, value: i64) -> Road<char> {
    Road::new(from, to, distance, value).unwrap()
}

#[test]
fn test_create_should_succeed() {
    let network: RoadNetwork<char> = RoadNetwork::new();
    assert!(network.villages().is_empty());
    assert!(network.roads().is_empty());
}

#[test]
fn test_add_village_should_succeed() {
    let mut network = RoadNetwork::<char>::new();
    assert_eq!(network.add_village('A'), 0);
    assert_eq!(network.add_village('B'), 1);
    assert_eq!(network.add_village('A'), 0);
    assert_eq!(network.villages(), &['A', 'B'][..]);
}

#[test]
fn test_add_road_should_succeed() {
    let mut network = RoadNetwork::new();
    network.add_village('A');
    network.add_village('B');
    network.add_road(road('A', 'B', 2, 23));
    assert_eq!(network.roads(), &[road('A', 'B', 2, 23)][..]);
}

#[test]
#[should_panic]
fn test_add_road_with_nonexistent_villages_should_panic() {
    RoadNetwork::new().add_road(road('A', 'B', 2, 23));
}

#[test]
fn test_from_roads_should_collect_villages_in_order() {
    let roads = [
        road('P', 'A', 5, 80),
        road('P', 'B', 22, 65),
        road('B', 'A', 3, 1),
    ];
    let network = RoadNetwork::from_roads(&roads);
    assert_eq!(network.villages(), &['P', 'A', 'B'][..]);
    assert_eq!(network.roads(), &roads[..]);
}

#[test]
fn test_paved_should_keep_only_paved_roads_and_their_villages() {
    use super::allocate::allocate;
    let roads = [
        road('A', 'B', 2, 23),
        road('B', 'C', 10, 1),
        road('C', 'D', 1, 50),
    ];
    let allocation = allocate(&roads, 3, 1).unwrap();
    let network = RoadNetwork::from_roads(&roads);
    let paved = network.paved(&allocation);
    assert_eq!(paved.villages(), &['A', 'B', 'C', 'D'][..]);
    assert_eq!(paved.roads(), &[roads[0].clone(), roads[2].clone()][..]);
    assert!(allocation.is_paved_village(&'D'));
}

#[test]
fn test_is_paved_village_for_village_without_paved_roads_should_be_false() {
    use super::allocate::allocate;
    let roads = [
        road('A', 'B', 2, 23),
        road('B', 'C', 10, 1),
    ];
    let allocation = allocate(&roads, 2, 1).unwrap();
    assert!(allocation.is_paved_village(&'B'));
    assert!(!allocation.is_paved_village(&'C'));
}
