//! Dijkstra and A*: one best-first loop, two frontier orderings.

use tracing::debug;

use rg_core::Location;

use crate::error::GraphResult;
use crate::graph::RouteGraph;

use super::{reconstruct_path, Frontier, SearchMode, SearchState};

impl<L: Location> RouteGraph<L> {
    /// Shortest path by total road length.
    pub fn dijkstra(&self, start: L, goal: L) -> GraphResult<Option<Vec<L>>> {
        self.dijkstra_with(start, goal, |_| {})
    }

    /// [`dijkstra`](Self::dijkstra) with a visit hook.
    pub fn dijkstra_with<F>(&self, start: L, goal: L, on_visit: F) -> GraphResult<Option<Vec<L>>>
    where
        F: FnMut(L),
    {
        self.best_first(start, goal, SearchMode::Dijkstra, on_visit)
    }

    /// Shortest path by total road length, expanding toward `goal` first.
    ///
    /// The heuristic is [`Location::distance_to`] the goal.  The result is
    /// optimal as long as that distance never exceeds the real road distance
    /// (true for straight-line distance and road lengths in the same unit).
    pub fn a_star_search(&self, start: L, goal: L) -> GraphResult<Option<Vec<L>>> {
        self.a_star_search_with(start, goal, |_| {})
    }

    /// [`a_star_search`](Self::a_star_search) with a visit hook.
    pub fn a_star_search_with<F>(
        &self,
        start: L,
        goal: L,
        on_visit: F,
    ) -> GraphResult<Option<Vec<L>>>
    where
        F: FnMut(L),
    {
        self.best_first(start, goal, SearchMode::AStar, on_visit)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(start = %start, goal = %goal, ?mode))]
    fn best_first<F>(
        &self,
        start: L,
        goal: L,
        mode: SearchMode,
        mut on_visit: F,
    ) -> GraphResult<Option<Vec<L>>>
    where
        F: FnMut(L),
    {
        self.require(start)?;
        self.require(goal)?;

        let mut state = SearchState::init(self, start, goal, mode);
        let mut frontier = Frontier::new(mode);
        frontier.push(start, state.score(&start));

        let mut visited = 0usize;
        while let Some(current) = frontier.pop() {
            visited += 1;
            on_visit(current);

            // Skip stale heap entries.
            if !state.finalized.insert(current) {
                continue;
            }

            if current == goal {
                debug!(visited, found = true, "search finished");
                return reconstruct_path(goal, start, &state.parents).map(Some);
            }

            let Some(node) = self.vertices.get(&current) else {
                continue;
            };
            let current_distance = state.score(&current).distance;

            for edge in node.edges() {
                let next = edge.destination();
                let candidate = current_distance + edge.length();
                if candidate < state.score(&next).distance {
                    let score = state.improve(next, current, candidate);
                    frontier.push(next, score);
                }
            }
        }

        debug!(visited, found = false, "search finished");
        Ok(None)
    }
}
