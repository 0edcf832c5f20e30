//! Breadth-first search: fewest hops, road lengths ignored.

use std::collections::VecDeque;

use tracing::debug;

use rg_core::Location;

use crate::error::GraphResult;
use crate::graph::RouteGraph;
use crate::{ParentMap, Set};

use super::reconstruct_path;

impl<L: Location> RouteGraph<L> {
    /// Path from `start` to `goal` with the fewest road segments.
    pub fn bfs(&self, start: L, goal: L) -> GraphResult<Option<Vec<L>>> {
        self.bfs_with(start, goal, |_| {})
    }

    /// [`bfs`](Self::bfs) with a visit hook.
    ///
    /// Each location is enqueued at most once; its parent is whichever
    /// location discovered it first, so ties between equal-hop paths go to
    /// the earlier-inserted edge.
    #[tracing::instrument(level = "debug", skip_all, fields(start = %start, goal = %goal))]
    pub fn bfs_with<F>(&self, start: L, goal: L, mut on_visit: F) -> GraphResult<Option<Vec<L>>>
    where
        F: FnMut(L),
    {
        self.require(start)?;
        self.require(goal)?;

        let mut queue = VecDeque::from([start]);
        let mut discovered: Set<L> = Set::default();
        discovered.insert(start);
        let mut parents: ParentMap<L> = ParentMap::default();

        let mut visited = 0usize;
        while let Some(current) = queue.pop_front() {
            visited += 1;
            on_visit(current);

            if current == goal {
                debug!(visited, found = true, "search finished");
                return reconstruct_path(goal, start, &parents).map(Some);
            }

            let Some(node) = self.vertices.get(&current) else {
                continue;
            };
            for next in node.neighbors() {
                if discovered.insert(next) {
                    parents.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        debug!(visited, found = false, "search finished");
        Ok(None)
    }
}
