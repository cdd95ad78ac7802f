use std::borrow::Cow;
use std::fmt::Display;
use std::io;

use dot::{Edges, GraphWalk, Id, Kind, LabelText, Labeller, Nodes, Style};

use super::allocate::Allocation;
use super::network::RoadNetwork;

type Nd = usize;
type Ed = usize;

/// Graphviz view of a road network with paved roads highlighted.
pub struct View<V> {
    name: &'static str,
    network: RoadNetwork<V>,
    paved_roads: Vec<bool>,
    paved_villages: Vec<bool>,
}

impl<V: Clone + PartialEq> View<V> {
    /// Every road; paved ones drawn bold, the rest dashed.
    pub fn all_roads(network: &RoadNetwork<V>, allocation: &Allocation<V>) -> View<V> {
        View::new("all_roads", network.clone(), allocation)
    }

    /// Only the paved roads and the villages they connect.
    pub fn paved_roads(network: &RoadNetwork<V>, allocation: &Allocation<V>) -> View<V> {
        View::new("paved_roads", network.paved(allocation), allocation)
    }

    fn new(name: &'static str, network: RoadNetwork<V>, allocation: &Allocation<V>) -> View<V> {
        let paved_roads = network.roads().iter().map(|x| allocation.is_paved(x)).collect();
        let paved_villages = network.villages().iter().map(|x| allocation.is_paved_village(x)).collect();
        View {
            name: name,
            network: network,
            paved_roads: paved_roads,
            paved_villages: paved_villages,
        }
    }

    pub fn network(&self) -> &RoadNetwork<V> {
        &self.network
    }
}

impl<V: Clone + PartialEq + Display> View<V> {
    pub fn render<W: io::Write>(&self, output: &mut W) -> io::Result<()> {
        dot::render(self, output)
    }
}

impl<'a, V: Display> Labeller<'a, Nd, Ed> for View<V> {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new(self.name).unwrap()
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(format!("v{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        LabelText::label(self.network.villages()[*n].to_string())
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        if self.paved_villages[*n] { Style::Filled } else { Style::None }
    }

    fn edge_label(&'a self, e: &Ed) -> LabelText<'a> {
        let road = &self.network.roads()[*e];
        LabelText::label(format!("d:{} v:{}", road.distance(), road.value()))
    }

    fn edge_style(&'a self, e: &Ed) -> Style {
        if self.paved_roads[*e] { Style::Bold } else { Style::Dashed }
    }

    fn kind(&self) -> Kind {
        Kind::Graph
    }
}

impl<'a, V: Clone + PartialEq> GraphWalk<'a, Nd, Ed> for View<V> {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        Cow::Owned((0..self.network.villages().len()).collect())
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::Owned((0..self.network.roads().len()).collect())
    }

    fn source(&'a self, e: &Ed) -> Nd {
        self.endpoint(self.network.roads()[*e].from())
    }

    fn target(&'a self, e: &Ed) -> Nd {
        self.endpoint(self.network.roads()[*e].to())
    }
}

impl<V: Clone + PartialEq> View<V> {
    fn endpoint(&self, village: &V) -> Nd {
        // add_road guarantees both endpoints are known villages
        self.network.village_index(village).unwrap()
    }
}

#[cfg(test)]
fn render_to_string<V: Clone + PartialEq + Display>(view: &View<V>) -> String {
    let mut output = Vec::new();
    view.render(&mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[cfg(test)]
fn roads() -> Vec<super::road::Road<char>> {
    use super::road::Road;
    vec![
        Road::new('A', 'B', 2, 23).unwrap(),
        Road::new('B', 'C', 10, 1).unwrap(),
    ]
}

#[test]
fn test_render_all_roads_should_contain_every_road() {
    use super::allocate::allocate;
    let roads = roads();
    let allocation = allocate(&roads, 2, 1).unwrap();
    let network = RoadNetwork::from_roads(&roads);
    let result = render_to_string(&View::all_roads(&network, &allocation));
    assert!(result.starts_with("graph all_roads"));
    assert!(result.contains("v0 -- v1"));
    assert!(result.contains("v1 -- v2"));
    assert!(result.contains("d:2 v:23"));
    assert!(result.contains("bold"));
    assert!(result.contains("dashed"));
}

#[test]
fn test_render_paved_roads_should_skip_unpaved_roads() {
    use super::allocate::allocate;
    let roads = roads();
    let allocation = allocate(&roads, 2, 1).unwrap();
    let network = RoadNetwork::from_roads(&roads);
    let view = View::paved_roads(&network, &allocation);
    assert_eq!(view.network().villages(), &['A', 'B'][..]);
    let result = render_to_string(&view);
    assert!(result.starts_with("graph paved_roads"));
    assert!(result.contains("v0 -- v1"));
    assert!(!result.contains("v1 -- v2"));
    assert!(!result.contains("dashed"));
}
