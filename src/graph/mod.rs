//! The Graph Model that Routes are planned on.
//!
//! The planner never looks at how a road network is stored. Everything it needs is provided
//! through the [`RouteGraph`] Trait, which [`RoadMap`] implements for a simple in-memory
//! network of Roads.

use crate::{Coord, NodeID};

mod node;
pub use node::Node;

mod road_map;
pub use road_map::{RoadID, RoadMap};

/// The Capabilities a Graph needs to provide in order to plan Routes on it.
///
/// Positions are in the normalized `[0, 1]` plane, i.e. a fraction of the extent of the map.
/// All methods are expected to be cheap and in-memory. They are called from within the search
/// loop and must not block.
///
/// If the Graph is also [`Sync`], several searches can run on it at the same time, since the
/// planner keeps all search state on its own side.
pub trait RouteGraph {
	/// Returns the Node closest to `pos`.
	///
	/// This is a total function: Positions outside of the map simply resolve to the closest
	/// Node on the border.
	fn find_closest_node(&self, pos: Coord) -> NodeID;

	/// Returns the Nodes directly connected to `id`.
	///
	/// Implementations may discover the neighbors lazily, but calling this repeatedly has to
	/// yield the same Nodes in the same order.
	fn neighbors(&self, id: NodeID) -> &[NodeID];

	/// The Position of a Node in normalized coordinates.
	fn position(&self, id: NodeID) -> Coord;

	/// The distance between two Nodes in normalized units.
	///
	/// Defaults to the straight-line distance between their Positions, which is also what
	/// the heuristic of the planner uses.
	fn distance(&self, a: NodeID, b: NodeID) -> f32 {
		euclidean(self.position(a), self.position(b))
	}

	/// The factor that converts normalized distances to real-world units (e.g. meters).
	fn metric_scale(&self) -> f32;
}

/// The straight-line distance between two Points.
///
/// ## Examples
/// ```
/// # use route_planner::graph::euclidean;
/// assert_eq!(euclidean((0.0, 0.0), (3.0, 4.0)), 5.0);
/// ```
pub fn euclidean(a: Coord, b: Coord) -> f32 {
	(a.0 - b.0).hypot(a.1 - b.1)
}
