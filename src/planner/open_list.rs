use crate::NodeID;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An entry of the open set: `(id, g_value, g_value + h_value, insertion number)`.
///
/// Ordered so that the [`BinaryHeap`] pops the lowest total first, and among equal totals the
/// entry that was pushed first.
#[derive(Clone, Copy, Debug)]
struct HeuristicElement(NodeID, f32, f32, u64);

impl PartialEq for HeuristicElement {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl Eq for HeuristicElement {}
impl PartialOrd for HeuristicElement {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for HeuristicElement {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.2.total_cmp(&self.2).then(rhs.3.cmp(&self.3))
	}
}

/// The frontier of discovered but not yet expanded Nodes.
#[derive(Debug)]
pub(crate) struct OpenList {
	heap: BinaryHeap<HeuristicElement>,
	pushed: u64,
}

impl OpenList {
	pub fn with_capacity(capacity: usize) -> OpenList {
		OpenList {
			heap: BinaryHeap::with_capacity(capacity),
			pushed: 0,
		}
	}

	pub fn push(&mut self, id: NodeID, g_value: f32, total: f32) {
		self.heap
			.push(HeuristicElement(id, g_value, total, self.pushed));
		self.pushed += 1;
	}

	/// Removes the entry with the lowest total estimated cost and returns its id and the
	/// `g_value` it was pushed with
	pub fn pop(&mut self) -> Option<(NodeID, f32)> {
		self.heap
			.pop()
			.map(|HeuristicElement(id, g_value, _, _)| (id, g_value))
	}

	pub fn is_empty(&self) -> bool {
		self.heap.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pops_lowest_total_first() {
		let mut open = OpenList::with_capacity(4);
		open.push(0, 0.0, 3.0);
		open.push(1, 0.0, 1.0);
		open.push(2, 0.0, 2.0);

		let order: Vec<NodeID> = std::iter::from_fn(|| open.pop()).map(|(id, _)| id).collect();
		assert_eq!(order, vec![1, 2, 0]);
		assert!(open.is_empty());
	}

	#[test]
	fn ties_go_to_first_pushed() {
		let mut open = OpenList::with_capacity(4);
		open.push(7, 0.5, 1.0);
		open.push(3, 0.2, 1.0);
		open.push(5, 0.9, 1.0);
		open.push(9, 0.0, 0.5);

		let order: Vec<NodeID> = std::iter::from_fn(|| open.pop()).map(|(id, _)| id).collect();
		assert_eq!(order, vec![9, 7, 3, 5]);
	}
}
