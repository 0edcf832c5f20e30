//! Route search over a [`RouteGraph`].
//!
//! # Algorithms
//!
//! | [`Algorithm`] | Frontier          | Optimises                          |
//! |---------------|-------------------|------------------------------------|
//! | `Bfs`         | FIFO queue        | hop count                          |
//! | `Dijkstra`    | min-heap on g     | total road length                  |
//! | `AStar`       | min-heap on g + h | total road length (h admissible)   |
//!
//! All three return `Ok(Some(path))` with both endpoints included,
//! `Ok(None)` when the goal cannot be reached, and
//! [`GraphError::NotFound`] when an endpoint is not a vertex.
//!
//! # Search-scoped state
//!
//! Tentative distances, heuristic estimates, parents and the finalized set
//! are owned by a per-call `SearchState`; the graph is only borrowed.  The
//! frontier ordering is chosen per call through `SearchMode`.
//!
//! # Visit hook
//!
//! Every variant has a `*_with` form taking `on_visit: FnMut(L)`, called
//! synchronously for each location taken off the frontier, in order.

mod best_first;
mod bfs;

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;

use rg_core::Location;

use crate::error::{GraphError, GraphResult, UnknownAlgorithm};
use crate::graph::RouteGraph;
use crate::{Map, ParentMap, Set};

// ── Algorithm ─────────────────────────────────────────────────────────────────

/// Which shortest-path strategy to run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Breadth-first search: fewest road segments, lengths ignored.
    Bfs,
    /// Dijkstra: shortest total length.
    Dijkstra,
    /// A*: shortest total length, guided by straight-line distance to goal.
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs      => "bfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar    => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first"      => Ok(Algorithm::Bfs),
            "dijkstra"                   => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star"    => Ok(Algorithm::AStar),
            _                            => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl<L: Location> RouteGraph<L> {
    /// Run `algorithm` from `start` to `goal`, reporting each dequeued
    /// location to `on_visit`.
    pub fn search<F>(
        &self,
        algorithm: Algorithm,
        start: L,
        goal: L,
        on_visit: F,
    ) -> GraphResult<Option<Vec<L>>>
    where
        F: FnMut(L),
    {
        match algorithm {
            Algorithm::Bfs      => self.bfs_with(start, goal, on_visit),
            Algorithm::Dijkstra => self.dijkstra_with(start, goal, on_visit),
            Algorithm::AStar    => self.a_star_search_with(start, goal, on_visit),
        }
    }
}

// ── Path reconstruction ───────────────────────────────────────────────────────

/// Rebuild the `start ..= goal` path by following `parents` backwards from
/// `goal`.
///
/// # Errors
///
/// [`GraphError::BrokenPath`] if some location on the way back has no
/// recorded parent, or if the chain loops without reaching `start`.
pub fn reconstruct_path<L: Location>(
    goal: L,
    start: L,
    parents: &ParentMap<L>,
) -> GraphResult<Vec<L>> {
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        // A well-formed chain visits each recorded child at most once.
        if path.len() > parents.len() + 1 {
            return Err(GraphError::BrokenPath { location: cur.to_string() });
        }
        cur = *parents
            .get(&cur)
            .ok_or_else(|| GraphError::BrokenPath { location: cur.to_string() })?;
        path.push(cur);
    }
    path.reverse();
    Ok(path)
}

// ── Frontier ordering ─────────────────────────────────────────────────────────

/// How a best-first frontier ranks its entries.  Passed in per call, so two
/// searches never share ordering state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum SearchMode {
    /// Rank by tentative distance alone.
    Dijkstra,
    /// Rank by tentative distance plus the goal-relative heuristic.
    AStar,
}

impl SearchMode {
    #[inline]
    pub(crate) fn priority(self, score: NodeScore) -> f64 {
        match self {
            SearchMode::Dijkstra => score.distance,
            SearchMode::AStar    => score.distance + score.heuristic,
        }
    }
}

/// Search-scoped bookkeeping for one vertex.
#[derive(Copy, Clone, Debug)]
pub(crate) struct NodeScore {
    /// Best known distance from the start (+∞ until reached).
    pub(crate) distance:  f64,
    /// Straight-line estimate to the goal; zero outside A*.
    pub(crate) heuristic: f64,
}

/// A heap entry.  `seq` records push order so equal priorities pop FIFO.
#[derive(Debug)]
struct FrontierEntry<L> {
    priority: f64,
    seq:      u64,
    location: L,
}

impl<L> PartialEq for FrontierEntry<L> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<L> Eq for FrontierEntry<L> {}

impl<L> PartialOrd for FrontierEntry<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<L> Ord for FrontierEntry<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority frontier with lazy decrease-key: a location may be pushed
/// several times and stale copies are filtered by the caller on pop.
pub(crate) struct Frontier<L> {
    // Reverse makes BinaryHeap (max) behave as min-heap.
    heap: BinaryHeap<Reverse<FrontierEntry<L>>>,
    mode: SearchMode,
    seq:  u64,
}

impl<L> Frontier<L> {
    pub(crate) fn new(mode: SearchMode) -> Self {
        Self { heap: BinaryHeap::new(), mode, seq: 0 }
    }

    pub(crate) fn push(&mut self, location: L, score: NodeScore) {
        let priority = self.mode.priority(score);
        self.heap.push(Reverse(FrontierEntry { priority, seq: self.seq, location }));
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<L> {
        self.heap.pop().map(|Reverse(entry)| entry.location)
    }
}

// ── Per-call state ────────────────────────────────────────────────────────────

/// Everything a Dijkstra or A* run writes while it is in flight.
pub(crate) struct SearchState<L> {
    scores:               Map<L, NodeScore>,
    pub(crate) parents:   ParentMap<L>,
    pub(crate) finalized: Set<L>,
}

impl<L: Location> SearchState<L> {
    /// Every vertex starts at +∞ except `start` at 0.  In A* mode each
    /// vertex's heuristic against `goal` is computed here, once.
    pub(crate) fn init(graph: &RouteGraph<L>, start: L, goal: L, mode: SearchMode) -> Self {
        let n = graph.num_vertices();
        let mut scores = Map::with_capacity_and_hasher(n, Default::default());
        for location in graph.vertices() {
            let distance = if location == start { 0.0 } else { f64::INFINITY };
            let heuristic = match mode {
                SearchMode::AStar    => location.distance_to(&goal),
                SearchMode::Dijkstra => 0.0,
            };
            scores.insert(location, NodeScore { distance, heuristic });
        }
        Self {
            scores,
            parents:   ParentMap::default(),
            finalized: Set::with_capacity_and_hasher(n, Default::default()),
        }
    }

    #[inline]
    pub(crate) fn score(&self, location: &L) -> NodeScore {
        self.scores
            .get(location)
            .copied()
            .unwrap_or(NodeScore { distance: f64::INFINITY, heuristic: 0.0 })
    }

    /// Record a shorter distance to `location`, reached from `parent`.
    /// Returns the updated score.
    pub(crate) fn improve(&mut self, location: L, parent: L, distance: f64) -> NodeScore {
        let score = self.scores.entry(location).or_insert(NodeScore {
            distance:  f64::INFINITY,
            heuristic: 0.0,
        });
        score.distance = distance;
        self.parents.insert(location, parent);
        *score
    }
}
