use crate::{Coord, NodeID};

/// A copy of a Node on a [`Route`].
///
/// Routes keep their Nodes by value, so they stay valid independently of the Graph they were
/// planned on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteNode {
	/// the id of the Node in the Graph
	pub id: NodeID,
	/// the Position of the Node in normalized coordinates
	pub pos: Coord,
}

/// The result of a successful search.
///
/// Stores the Nodes of the Route **from the goal back to the start** and the total distance in
/// real-world units. Use [`iter_from_start`](Route::iter_from_start) to walk it the other way.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
	nodes: Vec<RouteNode>,
	distance: f32,
}

impl Route {
	/// creates a new Route with the given Nodes (goal first) and total distance
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use route_planner::{Route, RouteNode};
	/// let goal = RouteNode { id: 1, pos: (1.0, 0.0) };
	/// let start = RouteNode { id: 0, pos: (0.0, 0.0) };
	/// let route = Route::new(vec![goal, start], 250.0);
	///
	/// assert_eq!(route.goal(), Some(&goal));
	/// assert_eq!(route.start(), Some(&start));
	/// assert_eq!(route.distance(), 250.0);
	/// ```
	pub fn new(nodes: Vec<RouteNode>, distance: f32) -> Route {
		Route { nodes, distance }
	}

	/// The total distance of the Route in real-world units
	pub fn distance(&self) -> f32 {
		self.distance
	}

	/// The number of Nodes on the Route, including start and goal
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// `true` if the Route has no Nodes. Routes returned by a search are never empty.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// The Node the Route ends at
	pub fn goal(&self) -> Option<&RouteNode> {
		self.nodes.first()
	}

	/// The Node the Route starts at
	pub fn start(&self) -> Option<&RouteNode> {
		self.nodes.last()
	}

	/// Iterates over the Nodes from the goal to the start
	pub fn iter(&self) -> std::slice::Iter<'_, RouteNode> {
		self.nodes.iter()
	}

	/// Iterates over the Nodes from the start to the goal
	pub fn iter_from_start(&self) -> std::iter::Rev<std::slice::Iter<'_, RouteNode>> {
		self.nodes.iter().rev()
	}

	/// The ids of the Nodes from the goal to the start
	pub fn ids(&self) -> Vec<NodeID> {
		self.nodes.iter().map(|node| node.id).collect()
	}

	/// Returns a copy of the Route that goes from the start to the goal.
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use route_planner::{Route, RouteNode};
	/// let nodes = [2, 1, 0].map(|id| RouteNode { id, pos: (id as f32, 0.0) });
	/// let route = Route::new(nodes.to_vec(), 2.0);
	///
	/// assert_eq!(route.reversed().ids(), vec![0, 1, 2]);
	/// assert_eq!(route.reversed().distance(), 2.0);
	/// ```
	pub fn reversed(&self) -> Route {
		Route {
			nodes: self.iter_from_start().copied().collect(),
			distance: self.distance,
		}
	}

	/// Consumes the Route and returns its Nodes, goal first
	pub fn into_nodes(self) -> Vec<RouteNode> {
		self.nodes
	}
}

use std::ops::{Deref, Index};

impl Index<usize> for Route {
	type Output = RouteNode;
	fn index(&self, index: usize) -> &RouteNode {
		&self.nodes[index]
	}
}

impl Deref for Route {
	type Target = [RouteNode];
	fn deref(&self) -> &[RouteNode] {
		&self.nodes
	}
}

impl<'a> IntoIterator for &'a Route {
	type Item = &'a RouteNode;
	type IntoIter = std::slice::Iter<'a, RouteNode>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

use std::fmt;
impl fmt::Display for Route {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Route[Distance = {:.2}]: ", self.distance)?;
		if self.nodes.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.nodes[0].id)?;
			for node in self.nodes.iter().skip(1) {
				write!(fmt, " -> {}", node.id)?;
			}
			Ok(())
		}
	}
}
