/// Options for configuring the [`RoutePlanner`](crate::RoutePlanner)
///
/// Default options:
/// ```
/// # use route_planner::PlannerConfig;
/// assert_eq!(
/// 	PlannerConfig {
/// 		reopen_nodes: true,
/// 		size_hint: 64,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlannerConfig {
	/// `true` (default): when a cheaper way to an already discovered Node is found, its cost
	/// and parent are updated and it is put back into the open set. The resulting Routes are
	/// always the shortest ones.
	///
	/// `false`: every Node keeps the cost and parent of the first time it was discovered.
	/// Slightly less work per search, but on networks where a Node can be reached through
	/// several Roads the Route may take a detour.
	pub reopen_nodes: bool,
	/// The number of Nodes a search is expected to touch (defaults to `64`).
	///
	/// Only used to pre-allocate the search state. Too small a value costs a few reallocations,
	/// too large a value wastes memory.
	pub size_hint: usize,
}

impl PlannerConfig {
	/// Always find the shortest Route. Same as the default.
	///
	/// Values:
	/// ```
	/// # use route_planner::PlannerConfig;
	/// assert_eq!(
	/// 	PlannerConfig {
	/// 		reopen_nodes: true,
	/// 		size_hint: 64,
	/// 	},
	/// 	PlannerConfig::OPTIMAL
	/// );
	/// ```
	pub const OPTIMAL: PlannerConfig = PlannerConfig {
		reopen_nodes: true,
		size_hint: 64,
	};
	/// Never revisit a Node once it has been discovered.
	///
	/// Values:
	/// ```
	/// # use route_planner::PlannerConfig;
	/// assert_eq!(
	/// 	PlannerConfig {
	/// 		reopen_nodes: false,
	/// 		size_hint: 64,
	/// 	},
	/// 	PlannerConfig::FIRST_VISIT
	/// );
	/// ```
	pub const FIRST_VISIT: PlannerConfig = PlannerConfig {
		reopen_nodes: false,
		size_hint: 64,
	};

	/// Returns a copy of this config with a different [`size_hint`](PlannerConfig::size_hint)
	/// ```
	/// # use route_planner::PlannerConfig;
	/// let config = PlannerConfig::FIRST_VISIT.with_size_hint(1024);
	/// assert_eq!(config.size_hint, 1024);
	/// assert!(!config.reopen_nodes);
	/// ```
	pub fn with_size_hint(self, size_hint: usize) -> PlannerConfig {
		PlannerConfig { size_hint, ..self }
	}
}

impl Default for PlannerConfig {
	fn default() -> PlannerConfig {
		PlannerConfig::OPTIMAL
	}
}
