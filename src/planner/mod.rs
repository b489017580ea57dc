//! Route planning with the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
//!
//! A [`RoutePlanner`] resolves a start and end position to Nodes of a [`RouteGraph`] and
//! searches the Graph for the shortest Route between them. All bookkeeping of a search (costs,
//! parents, the open set) lives in a side table owned by that search, so the Graph itself is
//! only ever read and any number of searches can share it.

mod config;
pub use self::config::PlannerConfig;

mod open_list;
use self::open_list::OpenList;

mod dijkstra;
pub use self::dijkstra::dijkstra_search;

mod batch;
pub use self::batch::{plan_routes, RouteRequest};

use crate::{graph::RouteGraph, node_id::*, utils::*, Coord, NodeID, Route, RouteNode};
use hashbrown::hash_map::Entry;

/// Plans a Route between two positions on a [`RouteGraph`].
///
/// ## Examples
/// Basic usage:
/// ```
/// use route_planner::prelude::*;
///
/// // a---b
/// //     |
/// //     c
/// let mut map = RoadMap::new(10.0);
/// let a = map.add_node((0.0, 0.0));
/// let b = map.add_node((1.0, 0.0));
/// let c = map.add_node((1.0, 1.0));
/// map.add_road(&[a, b, c]);
///
/// // start and end are given in percent of the map extent
/// let planner = RoutePlanner::new(&map, (0.0, 0.0), (100.0, 100.0), PlannerConfig::default());
/// assert_eq!(planner.start_node(), a);
/// assert_eq!(planner.end_node(), c);
///
/// let route = planner.a_star_search().unwrap();
/// assert_eq!(route.ids(), vec![c, b, a]);
/// assert_eq!(route.distance(), 20.0);
/// ```
///
/// If the end cannot be reached from the start, `None` is returned:
/// ```
/// # use route_planner::prelude::*;
/// let mut map = RoadMap::new(10.0);
/// let a = map.add_node((0.0, 0.0));
/// let b = map.add_node((1.0, 0.0));
/// map.add_road(&[a]);
/// map.add_road(&[b]);
///
/// let planner = RoutePlanner::new(&map, (0.0, 0.0), (100.0, 0.0), PlannerConfig::default());
/// assert_eq!(planner.a_star_search(), None);
/// ```
#[derive(Debug)]
pub struct RoutePlanner<'a, G: RouteGraph> {
	graph: &'a G,
	start_node: NodeID,
	end_node: NodeID,
	config: PlannerConfig,
}

impl<'a, G: RouteGraph> RoutePlanner<'a, G> {
	/// Creates a new RoutePlanner.
	///
	/// ## Arguments
	/// - `graph` - the Graph to search
	/// - `start` - the start position in percent (`0..=100`) of the map extent
	/// - `end` - the end position in percent of the map extent
	/// - `config` - options for the search. (See [`PlannerConfig`])
	///
	/// Positions outside of the map are not an error, they resolve to the closest Node.
	pub fn new(graph: &'a G, start: Coord, end: Coord, config: PlannerConfig) -> Self {
		let normalize = |(x, y): Coord| (x * 0.01, y * 0.01);
		let start_node = graph.find_closest_node(normalize(start));
		let end_node = graph.find_closest_node(normalize(end));
		Self::from_nodes(graph, start_node, end_node, config)
	}

	/// Creates a new RoutePlanner between two Nodes that are already known.
	pub fn from_nodes(
		graph: &'a G,
		start_node: NodeID,
		end_node: NodeID,
		config: PlannerConfig,
	) -> Self {
		RoutePlanner {
			graph,
			start_node,
			end_node,
			config,
		}
	}

	/// The Node the Route starts at
	pub fn start_node(&self) -> NodeID {
		self.start_node
	}

	/// The Node the Route ends at
	pub fn end_node(&self) -> NodeID {
		self.end_node
	}

	/// The config used for searching
	pub fn config(&self) -> PlannerConfig {
		self.config
	}

	/// The heuristic of the search: the straight-line distance from `id` to the end Node.
	///
	/// This never overestimates the remaining distance, as long as the Graph's
	/// [`distance`](RouteGraph::distance) is at least the straight-line distance.
	pub fn calculate_h_value(&self, id: NodeID) -> f32 {
		self.graph.distance(id, self.end_node)
	}

	/// Searches for the shortest Route from the start to the end Node.
	///
	/// ## Returns
	/// the Route, if one was found, or `None` if the end is not reachable from the start.
	/// The Route is ordered from the end back to the start, and its distance is in real-world
	/// units (see [`metric_scale`](RouteGraph::metric_scale)).
	///
	/// If start and end resolve to the same Node, the Route consists of only that Node and has
	/// a distance of `0`.
	pub fn a_star_search(&self) -> Option<Route> {
		timed!("a_star_search", Search::new(self).run())
	}
}

/// What a search knows about a discovered Node
#[derive(Clone, Copy, Debug)]
struct SearchNode {
	g_value: f32,
	h_value: f32,
	parent: Option<NodeID>,
}

/// The state of a single A* search.
///
/// A Node counts as visited once it has an entry in `nodes`.
struct Search<'p, 'a, G: RouteGraph> {
	planner: &'p RoutePlanner<'a, G>,
	nodes: NodeIDMap<SearchNode>,
	open_list: OpenList,
	expanded: usize,
}

impl<'p, 'a, G: RouteGraph> Search<'p, 'a, G> {
	fn new(planner: &'p RoutePlanner<'a, G>) -> Self {
		let size_hint = planner.config.size_hint;
		Search {
			planner,
			nodes: node_id_map_with_cap(size_hint),
			open_list: OpenList::with_capacity(size_hint / 2),
			expanded: 0,
		}
	}

	fn run(mut self) -> Option<Route> {
		let goal = self.find_goal()?;
		let route = self.construct_final_path(goal);
		debug!(
			"found Route {} -> {} with {} Nodes after expanding {} of {} visited Nodes",
			self.planner.start_node,
			self.planner.end_node,
			route.len(),
			self.expanded,
			self.nodes.len()
		);
		Some(route)
	}

	/// Expands Nodes until one on the position of the end Node is reached.
	///
	/// Returns `None` once the open set is empty.
	fn find_goal(&mut self) -> Option<NodeID> {
		let graph = self.planner.graph;
		let (start, end) = (self.planner.start_node, self.planner.end_node);

		let h_value = self.planner.calculate_h_value(start);
		self.nodes.insert(
			start,
			SearchNode {
				g_value: 0.0,
				h_value,
				parent: None,
			},
		);
		self.open_list.push(start, 0.0, h_value);

		while let Some(current) = self.next_node() {
			if graph.distance(current, end) == 0.0 {
				return Some(current);
			}
			self.add_neighbors(current);
		}

		debug!(
			"no Route {} -> {} after expanding {} Nodes",
			start, end, self.expanded
		);
		None
	}

	/// Removes and returns the open Node with the lowest `g_value + h_value`.
	///
	/// Among equal totals, the Node that entered the open set first wins. Entries that were
	/// superseded by a cheaper way to the same Node are dropped.
	fn next_node(&mut self) -> Option<NodeID> {
		while let Some((id, g_value)) = self.open_list.pop() {
			if g_value > self.nodes[&id].g_value {
				continue;
			}
			return Some(id);
		}
		None
	}

	fn add_neighbors(&mut self, current: NodeID) {
		self.expanded += 1;
		let graph = self.planner.graph;
		let reopen_nodes = self.planner.config.reopen_nodes;
		let current_g = self.nodes[&current].g_value;

		for &neighbor in graph.neighbors(current) {
			let g_value = current_g + graph.distance(current, neighbor);

			match self.nodes.entry(neighbor) {
				Entry::Occupied(mut entry) => {
					let node = entry.get_mut();
					if !reopen_nodes || g_value >= node.g_value {
						continue;
					}
					node.g_value = g_value;
					node.parent = Some(current);
					self.open_list
						.push(neighbor, g_value, g_value + node.h_value);
				}
				Entry::Vacant(entry) => {
					let h_value = self.planner.calculate_h_value(neighbor);
					entry.insert(SearchNode {
						g_value,
						h_value,
						parent: Some(current),
					});
					self.open_list.push(neighbor, g_value, g_value + h_value);
				}
			}
		}
	}

	fn construct_final_path(&self, goal: NodeID) -> Route {
		trace_route(self.planner.graph, goal, |id| self.nodes[&id].parent)
	}
}

/// Follows `parent_of` from `goal` until a Node without parent is reached, collecting the
/// Nodes and summing up the distances between them.
pub(crate) fn trace_route<G: RouteGraph>(
	graph: &G,
	goal: NodeID,
	parent_of: impl Fn(NodeID) -> Option<NodeID>,
) -> Route {
	let route_node = |id| RouteNode {
		id,
		pos: graph.position(id),
	};
	let mut distance = 0.0;
	let mut nodes = vec![];
	let mut current = goal;

	while let Some(parent) = parent_of(current) {
		nodes.push(route_node(current));
		distance += graph.distance(current, parent);
		current = parent;
	}
	nodes.push(route_node(current));

	Route::new(nodes, distance * graph.metric_scale())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::RoadMap;

	fn assert_close(a: f32, b: f32) {
		assert!((a - b).abs() < 1e-3, "{} != {}", a, b);
	}

	// a---b
	//     |
	//     c   d
	fn three_nodes() -> (RoadMap, [NodeID; 4]) {
		let mut map = RoadMap::new(10.0);
		let a = map.add_node((0.0, 0.0));
		let b = map.add_node((1.0, 0.0));
		let c = map.add_node((1.0, 1.0));
		let d = map.add_node((0.0, 1.0));
		map.add_road(&[a, b]);
		map.add_road(&[b, c]);
		map.add_road(&[d]);
		(map, [a, b, c, d])
	}

	// s------a
	// |       \
	// b        \
	// |         \
	// c----------g
	//
	// `a` is discovered first and reaches `c` on a detour, the way through `b` is shorter.
	fn detour() -> (RoadMap, [NodeID; 5]) {
		let mut map = RoadMap::new(10.0);
		let s = map.add_node((0.0, 0.0));
		let a = map.add_node((0.5, 0.0));
		let b = map.add_node((0.0, 0.3));
		let c = map.add_node((0.0, 0.6));
		let g = map.add_node((1.0, 0.0));
		map.add_road(&[s, a]);
		map.add_road(&[a, c]);
		map.add_road(&[s, b, c]);
		map.add_road(&[c, g]);
		(map, [s, a, b, c, g])
	}

	#[test]
	fn basic() {
		let (map, [a, b, c, _]) = three_nodes();
		let planner = RoutePlanner::new(&map, (0.0, 0.0), (100.0, 100.0), Default::default());

		let route = planner.a_star_search().unwrap();
		assert_eq!(route.ids(), vec![c, b, a]);
		assert_eq!(route.distance(), 20.0);
	}

	#[test]
	fn same_start_and_end() {
		let (map, [_, b, ..]) = three_nodes();
		let planner = RoutePlanner::new(&map, (90.0, 5.0), (100.0, 0.0), Default::default());
		assert_eq!(planner.start_node(), planner.end_node());

		let route = planner.a_star_search().unwrap();
		assert_eq!(route.ids(), vec![b]);
		assert_eq!(route.distance(), 0.0);
	}

	#[test]
	fn unreachable_goal() {
		let (map, [a, _, _, d]) = three_nodes();
		let planner = RoutePlanner::from_nodes(&map, a, d, Default::default());
		assert_eq!(planner.a_star_search(), None);

		let planner = RoutePlanner::from_nodes(&map, d, a, PlannerConfig::FIRST_VISIT);
		assert_eq!(planner.a_star_search(), None);
	}

	#[test]
	fn unreachable_goal_exhausts_open_list() {
		let (map, [a, _, _, d]) = three_nodes();
		let planner = RoutePlanner::from_nodes(&map, a, d, Default::default());
		let mut search = Search::new(&planner);

		assert_eq!(search.find_goal(), None);
		assert!(search.open_list.is_empty());
		assert_eq!(search.expanded, 3);
		assert_eq!(search.nodes.len(), 3);
	}

	#[test]
	fn goal_on_the_position_of_another_node() {
		let mut map = RoadMap::new(1.0);
		let a = map.add_node((0.0, 0.0));
		let b = map.add_node((1.0, 0.0));
		let b2 = map.add_node((1.0, 0.0));
		map.add_road(&[a, b]);
		map.add_road(&[b2]);

		let planner = RoutePlanner::from_nodes(&map, a, b2, Default::default());
		let mut search = Search::new(&planner);
		assert_eq!(search.find_goal(), Some(b));

		let route = planner.a_star_search().unwrap();
		assert_eq!(route.ids(), vec![b, a]);
		assert_eq!(Some(route), dijkstra_search(&map, a, b2));
	}

	#[test]
	fn keeps_the_config() {
		let (map, [a, b, ..]) = three_nodes();
		let config = PlannerConfig::FIRST_VISIT.with_size_hint(8);
		let planner = RoutePlanner::from_nodes(&map, a, b, config);
		assert_eq!(planner.config(), config);
		assert_eq!(planner.a_star_search().unwrap().ids(), vec![b, a]);
	}

	#[test]
	fn positions_outside_of_map() {
		let (map, [a, _, c, _]) = three_nodes();
		let planner = RoutePlanner::new(&map, (-50.0, -20.0), (250.0, 180.0), Default::default());
		assert_eq!(planner.start_node(), a);
		assert_eq!(planner.end_node(), c);
		assert!(planner.a_star_search().is_some());
	}

	#[test]
	fn heuristic() {
		let (map, [a, b, c, _]) = three_nodes();
		let planner = RoutePlanner::from_nodes(&map, a, c, Default::default());
		assert_eq!(planner.calculate_h_value(b), 1.0);
		assert_eq!(planner.calculate_h_value(c), 0.0);
		assert_close(planner.calculate_h_value(a), std::f32::consts::SQRT_2);
	}

	#[test]
	fn neighbors_are_only_visited_once() {
		let (map, [a, b, c, _]) = three_nodes();
		let planner = RoutePlanner::from_nodes(&map, a, c, PlannerConfig::FIRST_VISIT);
		let mut search = Search::new(&planner);
		search.nodes.insert(
			a,
			SearchNode {
				g_value: 0.0,
				h_value: 0.0,
				parent: None,
			},
		);

		search.add_neighbors(a);
		search.add_neighbors(b);
		search.add_neighbors(b);

		assert_eq!(search.nodes[&b].parent, Some(a));
		assert_eq!(search.nodes[&c].parent, Some(b));
		assert_eq!(search.nodes[&c].g_value, 2.0);
		assert_eq!(search.nodes[&a].parent, None);
		assert_eq!(search.next_node(), Some(b));
		assert_eq!(search.next_node(), Some(c));
		assert_eq!(search.next_node(), None);
	}

	#[test]
	fn deterministic() {
		let (map, [s, .., g]) = detour();
		let planner = RoutePlanner::from_nodes(&map, s, g, Default::default());
		let first = planner.a_star_search();
		assert!(first.is_some());
		for _ in 0..5 {
			assert_eq!(planner.a_star_search(), first);
		}
	}

	#[test]
	fn first_visit_keeps_detour() {
		let (map, [s, a, _, c, g]) = detour();
		let planner = RoutePlanner::from_nodes(&map, s, g, PlannerConfig::FIRST_VISIT);

		let route = planner.a_star_search().unwrap();
		assert_eq!(route.ids(), vec![g, c, a, s]);
		assert_close(route.distance(), 24.4721);
	}

	#[test]
	fn reopening_finds_shortest_route() {
		let (map, [s, _, b, c, g]) = detour();
		let planner = RoutePlanner::from_nodes(&map, s, g, PlannerConfig::OPTIMAL);

		let route = planner.a_star_search().unwrap();
		assert_eq!(route.ids(), vec![g, c, b, s]);
		assert_close(route.distance(), 17.6619);

		let reference = dijkstra_search(&map, s, g).unwrap();
		assert_eq!(route.ids(), reference.ids());
		assert_close(route.distance(), reference.distance());
	}

	#[test]
	fn route_distance_matches_steps() {
		let (map, [s, .., g]) = detour();
		let route = RoutePlanner::from_nodes(&map, s, g, Default::default())
			.a_star_search()
			.unwrap();

		let steps: f32 = route
			.windows(2)
			.map(|pair| map.distance(pair[0].id, pair[1].id))
			.sum();
		assert_close(route.distance(), steps * map.metric_scale());
	}
}
