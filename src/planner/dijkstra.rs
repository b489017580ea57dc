use super::{open_list::OpenList, trace_route};
use crate::{graph::RouteGraph, node_id::*, NodeID, Route};

/// Searches a Graph using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// Finds the same Routes as [`RoutePlanner::a_star_search`](super::RoutePlanner::a_star_search)
/// does with [`PlannerConfig::OPTIMAL`](super::PlannerConfig::OPTIMAL), but without the help of a
/// heuristic. This makes it a lot slower, and mostly useful as a reference to compare against.
///
/// Like the A* search, the search ends at the first Node whose position equals that of `goal`,
/// which is not necessarily `goal` itself.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use route_planner::{prelude::*, planner::dijkstra_search};
/// let mut map = RoadMap::new(1.0);
/// let a = map.add_node((0.0, 0.0));
/// let b = map.add_node((0.0, 1.0));
/// let c = map.add_node((1.0, 1.0));
/// let d = map.add_node((1.0, 0.0));
/// map.add_road(&[a, b, c, d]);
///
/// let route = dijkstra_search(&map, a, d).unwrap();
/// assert_eq!(route.ids(), vec![d, c, b, a]);
/// assert_eq!(route.distance(), 3.0);
///
/// map.add_road(&[a, d]);
/// let route = dijkstra_search(&map, a, d).unwrap();
/// assert_eq!(route.ids(), vec![d, a]);
/// ```
///
/// ## Returns
/// the Route from `goal` back to `start`, or `None` if `goal` is unreachable.
pub fn dijkstra_search<G: RouteGraph>(graph: &G, start: NodeID, goal: NodeID) -> Option<Route> {
	let mut visited = node_id_map();
	let mut next = OpenList::with_capacity(16);
	visited.insert(start, (0.0, None));
	next.push(start, 0.0, 0.0);

	while let Some((current_id, current_cost)) = next.pop() {
		if current_cost > visited[&current_id].0 {
			continue;
		}
		if graph.distance(current_id, goal) == 0.0 {
			return Some(trace_route(graph, current_id, |id| visited[&id].1));
		}

		for &other_id in graph.neighbors(current_id) {
			let other_cost = current_cost + graph.distance(current_id, other_id);

			let mut needs_visit = true;
			if let Some((prev_cost, prev_id)) = visited.get_mut(&other_id) {
				if *prev_cost > other_cost {
					*prev_cost = other_cost;
					*prev_id = Some(current_id);
				} else {
					needs_visit = false;
				}
			} else {
				visited.insert(other_id, (other_cost, Some(current_id)));
			}

			if needs_visit {
				next.push(other_id, other_cost, other_cost);
			}
		}
	}

	None
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{graph::RoadMap, RoutePlanner};

	#[test]
	fn stops_at_a_node_on_the_goal_position() {
		// b and b2 share a position, but only b is on the Road from a
		let mut map = RoadMap::new(1.0);
		let a = map.add_node((0.0, 0.0));
		let b = map.add_node((1.0, 0.0));
		let b2 = map.add_node((1.0, 0.0));
		map.add_road(&[a, b]);
		map.add_road(&[b2]);

		let route = dijkstra_search(&map, a, b2).unwrap();
		assert_eq!(route.ids(), vec![b, a]);
		assert_eq!(route.distance(), 1.0);

		let planner = RoutePlanner::from_nodes(&map, a, b2, Default::default());
		assert_eq!(planner.a_star_search(), Some(route));
	}

	#[test]
	fn unreachable_goal() {
		let mut map = RoadMap::new(1.0);
		let a = map.add_node((0.0, 0.0));
		let b = map.add_node((1.0, 0.0));
		let c = map.add_node((0.0, 1.0));
		map.add_road(&[a, b]);
		map.add_road(&[c]);

		assert_eq!(dijkstra_search(&map, a, c), None);
	}
}
