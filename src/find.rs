use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::{MazeError, MazeGraph, NodeId, NodeKind};
use crate::grid::{Grid, Point};

/// Per-node solver state, kept separate from the graph so a run never
/// mutates the node table.
#[derive(Copy, Clone, Debug, Default)]
struct Visit {
    /// Shortest known distance from the entry, `None` while unreached.
    dist: Option<usize>,
    /// The node this distance was last improved through.
    parent: Option<NodeId>,
    /// Set once the node leaves the frontier; `dist` is final after that.
    visited: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    pub path: Vec<Point>,
    pub start: Point,
    pub goal: Point,
    pub total_cost: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFinderState {
    Computing,
    NoPathFound,
    PathFound(PathResult),
}

impl PathFinderState {
    fn is_done(&self) -> bool {
        !matches!(self, PathFinderState::Computing)
    }
}

/// Dijkstra over a [`MazeGraph`], from its entry toward its exit.
///
/// Node selection is an unsorted scan for the unvisited node with the
/// smallest finite distance; the junction count is far below the pixel
/// count, so the O(V^2) scan stays cheap and keeps the relaxation order
/// easy to reason about.
#[derive(Debug)]
pub struct PathFinder<'a> {
    graph: &'a MazeGraph,
    visits: Vec<Visit>,
    state: PathFinderState,
}

impl<'a> PathFinder<'a> {
    pub fn new(graph: &'a MazeGraph) -> Self {
        let mut visits = vec![Visit::default(); graph.len()];
        visits[graph.entry().index()].dist = Some(0);

        Self {
            graph,
            visits,
            state: PathFinderState::Computing,
        }
    }

    pub fn finish(mut self) -> PathFinderState {
        loop {
            match self.step() {
                PathFinderState::Computing => {}
                s => return s,
            }
        }
    }

    /// Visit the next nearest node and relax its links.
    pub fn step(&mut self) -> PathFinderState {
        if self.state.is_done() {
            return self.state.clone();
        }

        // unvisited node with the least finite distance; ties go to the
        // lowest index, which is raster order of node creation
        let mut nearest: Option<(usize, usize)> = None;
        for (id, visit) in self.visits.iter().enumerate() {
            if visit.visited {
                continue;
            }
            let Some(dist) = visit.dist else { continue };
            if nearest.map_or(true, |(_, least)| dist < least) {
                nearest = Some((id, dist));
            }
        }

        let Some((current, dist)) = nearest else {
            self.state = PathFinderState::NoPathFound;
            return self.state.clone();
        };

        let id = NodeId(current);
        self.visits[current].visited = true;

        if self.graph.node(id).kind == NodeKind::Exit {
            debug!("reached exit with cost {}", dist);
            self.state = PathFinderState::PathFound(self.reconstruct(id, dist));
            return self.state.clone();
        }

        for (_, link) in self.graph.node(id).links() {
            let candidate = dist + link.weight;
            let neighbor = &mut self.visits[link.to.index()];
            if !neighbor.visited && neighbor.dist.map_or(true, |d| candidate < d) {
                neighbor.dist = Some(candidate);
                neighbor.parent = Some(id);
            }
        }

        self.state.clone()
    }

    /// Walk parent links from the goal back to the parentless entry, then
    /// flip the positions into entry-to-exit order.
    fn reconstruct(&self, goal: NodeId, total_cost: usize) -> PathResult {
        let mut path = vec![self.graph.node(goal).pos];

        let mut cursor = goal;
        while let Some(parent) = self.visits[cursor.index()].parent {
            path.push(self.graph.node(parent).pos);
            cursor = parent;
        }

        path.reverse();

        PathResult {
            path,
            start: self.graph.node(self.graph.entry()).pos,
            goal: self.graph.node(goal).pos,
            total_cost,
        }
    }

    pub fn state(&self) -> &PathFinderState {
        &self.state
    }
}

/// Extract the graph from a grid and run the solver over it.
///
/// Distinguishes bad input ([`MazeError::MalformedMaze`]) from a maze whose
/// exit is simply unreachable ([`MazeError::NoPath`]).
pub fn solve(grid: &Grid) -> Result<PathResult, MazeError> {
    let graph = MazeGraph::from_grid(grid)?;

    match PathFinder::new(&graph).finish() {
        PathFinderState::PathFound(result) => Ok(result),
        _ => Err(MazeError::NoPath),
    }
}
