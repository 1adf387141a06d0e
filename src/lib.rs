pub mod find;
pub mod graph;
pub mod grid;
pub mod util;

pub use find::{solve, PathFinder, PathFinderState, PathResult};
pub use graph::{Link, MazeError, MazeGraph, Node, NodeId, NodeKind};
pub use grid::{Direction, Grid, Point};
pub use util::{draw_path, parse_img};
