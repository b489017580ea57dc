#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find the shortest Route between two points on a road network.
//!
//! ## Introduction
//! A road network is a Graph: intersections and bends are the Nodes, the pieces of road between
//! them are the Edges. Finding the shortest Route between two points of the network is a classic
//! shortest-path problem, which this crate solves with the
//! [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
//!
//! A* is a best-first search that always expands the Node with the lowest estimated total cost,
//! i.e. the distance travelled so far plus a guess for the distance that is still left. The
//! guess used here is the straight-line distance to the goal. Since no road can be shorter than
//! the straight line, the guess never overestimates and the Route found is always the shortest
//! one (see [`PlannerConfig`] for the exception).
//!
//! Positions are given as fractions of the map extent in a `[0, 1]` plane, or in percent when
//! handed to a [`RoutePlanner`]. Distances are converted to real-world units (e.g. meters) with
//! the [`metric_scale`](graph::RouteGraph::metric_scale) of the Graph.
//!
//! ## Examples
//! Creating a road network:
//! ```
//! use route_planner::prelude::*;
//!
//! // a---b---c
//! //     |   |
//! //     d---e
//! let mut map = RoadMap::new(1000.0); // the map spans 1 km
//! let a = map.add_node((0.0, 0.0));
//! let b = map.add_node((0.5, 0.0));
//! let c = map.add_node((1.0, 0.0));
//! let d = map.add_node((0.5, 0.6));
//! let e = map.add_node((1.0, 0.5));
//!
//! map.add_road(&[a, b, c, e]);
//! map.add_road(&[b, d, e]);
//! ```
//! Any other storage can be used instead of [`RoadMap`](graph::RoadMap), as long as it
//! implements [`RouteGraph`](graph::RouteGraph).
//!
//! ### Planning a Route
//! ```
//! # use route_planner::prelude::*;
//! #
//! # let mut map = RoadMap::new(1000.0);
//! # let a = map.add_node((0.0, 0.0));
//! # let b = map.add_node((0.5, 0.0));
//! # let c = map.add_node((1.0, 0.0));
//! # let d = map.add_node((0.5, 0.6));
//! # let e = map.add_node((1.0, 0.5));
//! # map.add_road(&[a, b, c, e]);
//! # map.add_road(&[b, d, e]);
//! #
//! let planner = RoutePlanner::new(
//!     &map,
//!     (0.0, 0.0),   // start in percent of the map
//!     (100.0, 50.0), // end in percent of the map
//!     PlannerConfig::default(),
//! );
//!
//! // a_star_search returns Some(Route) on success
//! let route = planner.a_star_search().unwrap();
//!
//! // Routes are stored from the goal back to the start
//! assert_eq!(route.ids(), vec![e, c, b, a]);
//! assert_eq!(route.distance(), 1500.0);
//! ```
//!
//! ### Planning many Routes
//! The Graph is never modified by a search, so many searches can run on it at once:
//! ```
//! # use route_planner::prelude::*;
//! #
//! # let mut map = RoadMap::new(1000.0);
//! # let a = map.add_node((0.0, 0.0));
//! # let b = map.add_node((0.5, 0.0));
//! # let c = map.add_node((1.0, 0.0));
//! # let d = map.add_node((0.5, 0.6));
//! # let e = map.add_node((1.0, 0.5));
//! # map.add_road(&[a, b, c, e]);
//! # map.add_road(&[b, d, e]);
//! #
//! let requests = [
//!     RouteRequest::new((0.0, 0.0), (100.0, 50.0)),
//!     RouteRequest::new((50.0, 50.0), (100.0, 0.0)),
//! ];
//! let routes = plan_routes(&map, &requests, PlannerConfig::default());
//!
//! assert_eq!(routes.len(), 2);
//! assert!(routes.iter().all(Option::is_some));
//! ```
//!
//! ## Features
//! - `parallel` (default): [`plan_routes`](planner::plan_routes) uses [rayon](https://docs.rs/rayon)
//!   to run searches in parallel.
//! - `log`: logs search statistics and internal timings through the [log](https://docs.rs/log)
//!   facade. Recommended to leave this off unless working on improvements to route_planner.

/// The Type used to reference a Node in a Graph
pub type NodeID = usize;

/// A shorthand for Positions in the normalized `[0, 1]` plane
pub type Coord = (f32, f32);

mod utils;

pub mod node_id;

pub mod graph;

pub mod planner;
pub use self::planner::{PlannerConfig, RoutePlanner};

mod route;
pub use self::route::{Route, RouteNode};

/// The most commonly used types, for glob imports
pub mod prelude {
	pub use crate::{
		graph::{RoadMap, RouteGraph},
		planner::{plan_routes, PlannerConfig, RoutePlanner, RouteRequest},
		Coord, NodeID, Route, RouteNode,
	};
}
