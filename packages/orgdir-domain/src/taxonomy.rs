use std::collections::{HashMap, HashSet, VecDeque};

/// Traversal bound for activity subtree queries. The root counts as level 1,
/// so three tree levels are reachable in total, not three hops below the
/// root.
pub const DEPTH_LIMIT: u32 = 3;

/// Ids reachable from `root_id` within `depth_limit` tree levels, the root
/// itself always included. `edges` is the parent-linked forest as
/// `(id, parent_id)` pairs.
///
/// Breadth-first over an adjacency map with an explicit queue and visited
/// set, so malformed (cyclic) parent links cannot loop the traversal or
/// emit an id twice. Whether `root_id` exists is the caller's concern.
pub fn descendant_ids(root_id: i64, edges: &[(i64, Option<i64>)], depth_limit: u32) -> Vec<i64> {
	if depth_limit == 0 {
		return Vec::new();
	}

	let mut children: HashMap<i64, Vec<i64>> = HashMap::new();

	for &(id, parent_id) in edges {
		if let Some(parent_id) = parent_id {
			children.entry(parent_id).or_default().push(id);
		}
	}

	let mut visited = HashSet::new();
	let mut collected = Vec::new();
	let mut queue = VecDeque::new();

	visited.insert(root_id);
	queue.push_back((root_id, 1_u32));

	while let Some((id, depth)) = queue.pop_front() {
		collected.push(id);

		if depth >= depth_limit {
			continue;
		}

		for &child_id in children.get(&id).into_iter().flatten() {
			if visited.insert(child_id) {
				queue.push_back((child_id, depth + 1));
			}
		}
	}

	collected
}
