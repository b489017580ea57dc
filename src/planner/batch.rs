use super::{PlannerConfig, RoutePlanner};
use crate::{graph::RouteGraph, utils::*, Coord, Route};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A start and end position in percent (`0..=100`) of the map extent
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteRequest {
	/// where the Route starts
	pub start: Coord,
	/// where the Route ends
	pub end: Coord,
}

impl RouteRequest {
	/// Creates a new RouteRequest
	pub fn new(start: Coord, end: Coord) -> RouteRequest {
		RouteRequest { start, end }
	}
}

/// Plans a Route for every request on the same Graph.
///
/// With the `parallel` feature (enabled by default) the searches are spread over the threads of
/// the global rayon pool. The results are in the same order as the `requests` either way.
///
/// ## Examples
/// ```
/// use route_planner::prelude::*;
///
/// let mut map = RoadMap::new(100.0);
/// let a = map.add_node((0.0, 0.0));
/// let b = map.add_node((1.0, 0.0));
/// let c = map.add_node((0.0, 1.0));
/// map.add_road(&[a, b]);
/// map.add_road(&[c]);
///
/// let routes = plan_routes(
/// 	&map,
/// 	&[
/// 		RouteRequest::new((0.0, 0.0), (100.0, 0.0)),
/// 		RouteRequest::new((0.0, 0.0), (0.0, 100.0)),
/// 	],
/// 	PlannerConfig::default(),
/// );
///
/// assert_eq!(routes[0].as_ref().map(|route| route.distance()), Some(100.0));
/// assert_eq!(routes[1], None);
/// ```
pub fn plan_routes<G: RouteGraph + Sync>(
	graph: &G,
	requests: &[RouteRequest],
	config: PlannerConfig,
) -> Vec<Option<Route>> {
	let plan = |request: &RouteRequest| {
		RoutePlanner::new(graph, request.start, request.end, config).a_star_search()
	};

	timed!("plan_routes", {
		#[cfg(feature = "parallel")]
		let routes: Vec<_> = requests.par_iter().map(plan).collect();

		#[cfg(not(feature = "parallel"))]
		let routes: Vec<_> = requests.iter().map(plan).collect();

		debug!("planned {} Routes", routes.len());
		routes
	})
}
