use log::debug;

use crate::grid::{Direction, Grid, Point};

#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    #[error("maze must have exactly two border openings, found {openings}")]
    MalformedMaze { openings: usize },
    #[error("grid must be at least 2x2, got {rows}x{columns}")]
    GridTooSmall { rows: usize, columns: usize },
    #[error("no path between entry and exit")]
    NoPath,
}

/// Index of a node in the graph's node table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NodeKind {
    Entry,
    Exit,
    Plain,
}

/// A directional link to the nearest node reachable through an unbroken
/// corridor run, with the pixel distance to it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Link {
    pub to: NodeId,
    pub weight: usize,
}

/// A decision point in the maze: a border opening, a turn or a junction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    pub pos: Point,
    pub kind: NodeKind,
    links: [Option<Link>; 4],
}

impl Node {
    fn new(pos: Point, kind: NodeKind) -> Self {
        Self {
            pos,
            kind,
            links: [None; 4],
        }
    }

    pub fn link(&self, dir: Direction) -> Option<Link> {
        self.links[dir as usize]
    }

    /// Iterate over the populated link slots.
    pub fn links(&self) -> impl Iterator<Item = (Direction, Link)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.links[dir as usize].map(|link| (dir, link)))
    }
}

/// The sparse corridor graph of a maze. Straight corridor pixels carry no
/// nodes; only openings, turns and junctions do, linked with weights equal
/// to the pixel distance between them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MazeGraph {
    nodes: Vec<Node>,
    entry: NodeId,
    exit: NodeId,
}

impl MazeGraph {
    /// Scan the grid in raster order and extract the node graph.
    ///
    /// A passable pixel becomes a node if it lies on the border (an
    /// opening), or if its left/right or top/bottom neighbors differ in
    /// passability. The first opening found is the entry, the second the
    /// exit; any other opening count is malformed.
    pub fn from_grid(grid: &Grid) -> Result<Self, MazeError> {
        let mut nodes: Vec<Node> = Vec::new();
        let mut openings: Vec<NodeId> = Vec::new();

        // scratch map from position to node, so the link scans below can
        // resolve against nodes created earlier in the pass
        let mut node_at: Vec<Vec<Option<NodeId>>> = vec![vec![None; grid.columns]; grid.rows];

        for row in 0..grid.rows {
            for col in 0..grid.columns {
                if !grid.cells[row][col] {
                    continue;
                }

                let border =
                    row == 0 || row == grid.rows - 1 || col == 0 || col == grid.columns - 1;
                let h_break = col > 0
                    && col + 1 < grid.columns
                    && grid.cells[row][col - 1] != grid.cells[row][col + 1];
                let v_break = row > 0
                    && row + 1 < grid.rows
                    && grid.cells[row - 1][col] != grid.cells[row + 1][col];

                if !(border || h_break || v_break) {
                    continue;
                }

                let id = NodeId(nodes.len());
                let kind = if border {
                    if openings.is_empty() {
                        NodeKind::Entry
                    } else {
                        NodeKind::Exit
                    }
                } else {
                    NodeKind::Plain
                };

                nodes.push(Node::new(Point { row, col }, kind));
                node_at[row][col] = Some(id);
                if border {
                    openings.push(id);
                }

                // scan left until a node or a wall; every straight-corridor
                // pair has its earlier member already created in raster
                // order, so both link directions resolve here
                for c in (0..col).rev() {
                    if let Some(other) = node_at[row][c] {
                        let weight = col - c;
                        nodes[other.0].links[Direction::Right as usize] =
                            Some(Link { to: id, weight });
                        nodes[id.0].links[Direction::Left as usize] =
                            Some(Link { to: other, weight });
                        break;
                    }
                    if !grid.cells[row][c] {
                        break;
                    }
                }

                // same scan upward
                for r in (0..row).rev() {
                    if let Some(other) = node_at[r][col] {
                        let weight = row - r;
                        nodes[other.0].links[Direction::Down as usize] =
                            Some(Link { to: id, weight });
                        nodes[id.0].links[Direction::Up as usize] =
                            Some(Link { to: other, weight });
                        break;
                    }
                    if !grid.cells[r][col] {
                        break;
                    }
                }
            }
        }

        if openings.len() != 2 {
            return Err(MazeError::MalformedMaze {
                openings: openings.len(),
            });
        }

        debug!(
            "extracted {} nodes from {}x{} grid",
            nodes.len(),
            grid.rows,
            grid.columns
        );

        Ok(Self {
            nodes,
            entry: openings[0],
            exit: openings[1],
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn entry(&self) -> NodeId {
        self.entry
    }

    pub fn exit(&self) -> NodeId {
        self.exit
    }
}
