use super::{euclidean, Node, RouteGraph};
use crate::{node_id::*, planner::PlannerConfig, Coord, NodeID, RouteNode, RoutePlanner};

/// The Type used to reference a Road in a [`RoadMap`]
pub type RoadID = usize;

/// A Road is a polyline through a sequence of Nodes. Consecutive Nodes are connected.
#[derive(Clone, Debug)]
pub(crate) struct Road {
	nodes: Vec<NodeID>,
}

/// An in-memory road network.
///
/// Nodes are connected through Roads: Every Node on a Road is a neighbor of the Nodes directly
/// before and after it on that Road. Adjacency is discovered the first time it is asked for and
/// cached on the Node afterwards. The cache is thread-safe, so a `&RoadMap` can be shared
/// between any number of concurrent searches.
///
/// ## Examples
/// ```
/// use route_planner::prelude::*;
///
/// let mut map = RoadMap::new(1000.0);
/// let a = map.add_node((0.0, 0.0));
/// let b = map.add_node((0.5, 0.0));
/// let c = map.add_node((1.0, 0.0));
/// map.add_road(&[a, b, c]);
///
/// assert_eq!(map.neighbors(b), &[a, c]);
/// assert_eq!(map.find_closest_node((0.9, 0.2)), c);
///
/// let distance = map.plan_route((0.0, 0.0), (100.0, 0.0), PlannerConfig::default());
/// assert_eq!(distance, Some(1000.0));
/// assert_eq!(map.path.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct RoadMap {
	nodes: slab::Slab<Node>,
	roads: Vec<Road>,
	metric_scale: f32,
	/// The last Route planned with [`plan_route`](RoadMap::plan_route), from goal to start.
	///
	/// Empty if no Route has been planned or the last search did not find one.
	pub path: Vec<RouteNode>,
}

impl RoadMap {
	/// Creates an empty RoadMap.
	///
	/// `metric_scale` converts normalized distances to real-world units. For a map that spans
	/// 2 km, this would be `2000.0` to get Route distances in meters.
	pub fn new(metric_scale: f32) -> RoadMap {
		RoadMap {
			nodes: slab::Slab::new(),
			roads: Vec::new(),
			metric_scale,
			path: Vec::new(),
		}
	}

	/// Adds a Node at `pos` and returns its [`NodeID`].
	///
	/// The Node is not connected to anything until it is added to a Road.
	pub fn add_node(&mut self, pos: Coord) -> NodeID {
		self.nodes.insert(Node::new(pos))
	}

	/// Adds a Road through `nodes` in the given order and returns its [`RoadID`].
	///
	/// Discovered neighbors are cached, so all Roads should be added before the first search.
	/// Adding a Road resets the cache of the Nodes on it.
	///
	/// ## Panics
	/// if any of the `nodes` is not part of this RoadMap.
	#[track_caller]
	pub fn add_road(&mut self, nodes: &[NodeID]) -> RoadID {
		let id = self.roads.len();
		for &node_id in nodes {
			let node = &mut self[node_id];
			if !node.roads.contains(&id) {
				node.roads.push(id);
			}
			node.neighbors = Default::default();
		}
		self.roads.push(Road {
			nodes: nodes.to_vec(),
		});
		id
	}

	/// Returns the Node with the given id, if it exists
	pub fn node(&self, id: NodeID) -> Option<&Node> {
		self.nodes.get(id)
	}

	/// Returns the Nodes of a Road in order, if it exists
	pub fn road(&self, id: RoadID) -> Option<&[NodeID]> {
		self.roads.get(id).map(|road| road.nodes.as_slice())
	}

	/// The number of Nodes in the RoadMap
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// `true` if the RoadMap has no Nodes
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Iterates over all Nodes together with their ids
	pub fn iter(&self) -> impl Iterator<Item = (NodeID, &Node)> + '_ {
		self.nodes.iter()
	}

	/// Plans a Route between two points given in percent (`0..=100`) of the map extent and
	/// stores it in [`path`](RoadMap::path).
	///
	/// Returns the distance of the Route in real-world units, or `None` if the start and end
	/// are not connected.
	pub fn plan_route(&mut self, start: Coord, end: Coord, config: PlannerConfig) -> Option<f32> {
		let route = RoutePlanner::new(&*self, start, end, config).a_star_search();
		match route {
			Some(route) => {
				let distance = route.distance();
				self.path = route.into_nodes();
				Some(distance)
			}
			None => {
				self.path.clear();
				None
			}
		}
	}

	fn discover_neighbors(&self, id: NodeID) -> Box<[NodeID]> {
		let node = &self[id];
		let mut seen = node_id_set_with_cap(node.roads.len() * 2);
		let mut neighbors = Vec::with_capacity(node.roads.len() * 2);

		for &road_id in node.roads.iter() {
			let road = &self.roads[road_id].nodes;
			for (i, _) in road.iter().enumerate().filter(|&(_, &n)| n == id) {
				let before = i.checked_sub(1).map(|i| road[i]);
				let after = road.get(i + 1).copied();
				for other in before.into_iter().chain(after) {
					if other != id && seen.insert(other) {
						neighbors.push(other);
					}
				}
			}
		}
		neighbors.into_boxed_slice()
	}
}

impl RouteGraph for RoadMap {
	/// Linear scan over all Nodes that lie on a Road. Ties go to the lowest id.
	///
	/// If no Node lies on a Road, all Nodes are considered.
	///
	/// ## Panics
	/// if the RoadMap is empty.
	#[track_caller]
	fn find_closest_node(&self, pos: Coord) -> NodeID {
		let closest = |on_road_only: bool| {
			self.nodes
				.iter()
				.filter(|(_, node)| !on_road_only || node.is_on_road())
				.map(|(id, node)| (id, euclidean(pos, node.pos)))
				.min_by(|(a_id, a), (b_id, b)| a.total_cmp(b).then(a_id.cmp(b_id)))
				.map(|(id, _)| id)
		};
		match closest(true).or_else(|| closest(false)) {
			Some(id) => id,
			None => panic!("Cannot find the closest Node in an empty RoadMap"),
		}
	}

	fn neighbors(&self, id: NodeID) -> &[NodeID] {
		self[id]
			.neighbors
			.get_or_init(|| self.discover_neighbors(id))
	}

	fn position(&self, id: NodeID) -> Coord {
		self[id].pos
	}

	fn metric_scale(&self) -> f32 {
		self.metric_scale
	}
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for RoadMap {
	type Output = Node;
	#[track_caller]
	fn index(&self, index: NodeID) -> &Node {
		&self.nodes[index]
	}
}
impl IndexMut<NodeID> for RoadMap {
	#[track_caller]
	fn index_mut(&mut self, index: NodeID) -> &mut Node {
		&mut self.nodes[index]
	}
}
