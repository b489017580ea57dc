use super::RoadID;
use crate::{Coord, NodeID};
use std::sync::OnceLock;

/// A Node of a [`RoadMap`](super::RoadMap), usually an intersection or a bend in a Road.
#[derive(Clone, Debug)]
pub struct Node {
	pub(crate) pos: Coord,
	pub(crate) roads: Vec<RoadID>,
	pub(crate) neighbors: OnceLock<Box<[NodeID]>>,
}

impl Node {
	pub(crate) fn new(pos: Coord) -> Node {
		Node {
			pos,
			roads: Vec::new(),
			neighbors: OnceLock::new(),
		}
	}

	/// The Position of the Node in normalized coordinates
	pub fn pos(&self) -> Coord {
		self.pos
	}

	/// The Roads this Node is a part of
	pub fn roads(&self) -> &[RoadID] {
		&self.roads
	}

	/// `true` if this Node lies on at least one Road
	pub fn is_on_road(&self) -> bool {
		!self.roads.is_empty()
	}

	/// `true` once the neighbors of this Node have been discovered
	pub fn has_neighbors_cached(&self) -> bool {
		self.neighbors.get().is_some()
	}
}
