//! Corridor joining
//!
//! Every internal node of the partition tree joins its two subtrees with
//! one L-shaped corridor through the node's reserved boundary strip:
//!
//! 1. The left anchor is the room cell of the left subtree's last leaf
//!    closest to the boundary; the right anchor is the room cell of the
//!    right subtree's first leaf closest to it.
//! 2. A straight stub runs from each anchor to the boundary line.
//! 3. The boundary line is filled between the two stub ends.
//! 4. Every cell reserved by this corridor is finalized to floor.
//!
//! Nodes are joined deepest first, so each subtree is already connected
//! when its parent joins it to its sibling.

use strum::{Display, EnumIter};
use tracing::{debug, trace};

use crate::error::DungeonError;

use super::cell::CellType;
use super::grid::Grid;
use super::partition::{Direction, NodeId, PartitionNode, PartitionTree};

/// Which subtree of an internal node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Joins the subtrees of a partition tree on a grid
#[derive(Debug, Clone, Copy)]
pub struct CorridorConnector<'t> {
    tree: &'t PartitionTree,
}

impl<'t> CorridorConnector<'t> {
    pub fn new(tree: &'t PartitionTree) -> Self {
        Self { tree }
    }

    /// Find the room cell a corridor of `node` starts from on `side`.
    ///
    /// Looks only at the subtree's anchor leaf (last leaf on the left, first
    /// leaf on the right) and picks the room cell nearest the boundary. When
    /// several cells are equally near, the middle one is used.
    pub fn anchor(
        &self,
        grid: &Grid,
        node: NodeId,
        side: Side,
    ) -> Result<(usize, usize), DungeonError> {
        let PartitionNode::Internal {
            direction,
            left,
            right,
            ..
        } = self.tree[node]
        else {
            return Err(DungeonError::MissingAnchor { node, side });
        };

        let leaf = match side {
            Side::Left => self.tree.last_leaf(left),
            Side::Right => self.tree.first_leaf(right),
        };
        let cells: Vec<(usize, usize)> = grid
            .region(self.tree[leaf].region())
            .cells()
            .filter(|&(_, _, typ)| typ == CellType::Room)
            .map(|(x, y, _)| (x, y))
            .collect();

        let along = |&(x, y): &(usize, usize)| direction.along(x, y);
        let nearest = match side {
            Side::Left => cells.iter().map(along).max(),
            Side::Right => cells.iter().map(along).min(),
        }
        .ok_or(DungeonError::MissingAnchor { node, side })?;

        let candidates: Vec<_> = cells.into_iter().filter(|c| along(c) == nearest).collect();
        Ok(candidates[candidates.len() / 2])
    }

    /// Carve the corridor joining both subtrees of `node`.
    ///
    /// Both subtrees must already be carved and joined. Leaves need no
    /// corridor. Returns the number of cells turned into floor.
    pub fn connect(&self, grid: &mut Grid, node: NodeId) -> Result<usize, DungeonError> {
        let PartitionNode::Internal {
            direction,
            boundary,
            ..
        } = self.tree[node]
        else {
            return Ok(0);
        };

        let left_anchor = self.anchor(grid, node, Side::Left)?;
        let right_anchor = self.anchor(grid, node, Side::Right)?;
        let (left_along, left_across) = split_point(direction, left_anchor);
        let (right_along, right_across) = split_point(direction, right_anchor);

        let mut reserved = Vec::new();
        for along in left_along + 1..=boundary {
            reserve(grid, &mut reserved, direction.point(along, left_across));
        }
        for along in boundary..right_along {
            reserve(grid, &mut reserved, direction.point(along, right_across));
        }

        let on_boundary: Vec<usize> = reserved
            .iter()
            .map(|&p| split_point(direction, p))
            .filter(|&(along, _)| along == boundary)
            .map(|(_, across)| across)
            .collect();
        if let (Some(&low), Some(&high)) = (on_boundary.iter().min(), on_boundary.iter().max()) {
            for across in low..=high {
                reserve(grid, &mut reserved, direction.point(boundary, across));
            }
        }

        let carved = reserved
            .iter()
            .filter(|&&(x, y)| grid.transition(x, y, CellType::Floor))
            .count();
        trace!(%node, %direction, boundary, ?left_anchor, ?right_anchor, carved, "joined subtrees");
        Ok(carved)
    }

    /// Join every internal node, deepest first and the root last
    pub fn connect_all(&self, grid: &mut Grid) -> Result<usize, DungeonError> {
        let mut total = 0;
        for node in self.tree.internal_nodes() {
            total += self.connect(grid, node)?;
        }
        debug!(corridor_cells = total, "connected all subtrees");
        Ok(total)
    }
}

/// Reserve a wall cell for the corridor being built
fn reserve(grid: &mut Grid, reserved: &mut Vec<(usize, usize)>, (x, y): (usize, usize)) {
    if grid.transition(x, y, CellType::Corridor) {
        reserved.push((x, y));
    }
}

fn split_point(direction: Direction, (x, y): (usize, usize)) -> (usize, usize) {
    (direction.along(x, y), direction.across(x, y))
}
