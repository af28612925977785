//! Binary space partitioning
//!
//! Recursively splits the grid into a binary tree of rectangular regions.
//! A split reserves a one-cell strip (a column for a horizontal split, a
//! row for a vertical one) that belongs to neither child; the corridor
//! joining the two halves later runs through it.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Children are
//! always pushed before their parent, so the root is the last node.

use std::fmt;
use std::ops::Index;

use strum::{Display, EnumIter};
use tracing::trace;

use crate::config::GeneratorConfig;
use crate::rng::RandomSource;

use super::rect::Rect;

/// Orientation of a split
///
/// `Horizontal` cuts the region along the x axis: the boundary is a column
/// and the children sit side by side. `Vertical` cuts along the y axis: the
/// boundary is a row and the children are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Coordinate along the split axis
    pub const fn along(&self, x: usize, y: usize) -> usize {
        match self {
            Direction::Horizontal => x,
            Direction::Vertical => y,
        }
    }

    /// Coordinate across the split axis (position on the boundary line)
    pub const fn across(&self, x: usize, y: usize) -> usize {
        match self {
            Direction::Horizontal => y,
            Direction::Vertical => x,
        }
    }

    /// Build an `(x, y)` point from its along/across coordinates
    pub const fn point(&self, along: usize, across: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (along, across),
            Direction::Vertical => (across, along),
        }
    }
}

/// Index of a node in a [`PartitionTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the partition tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionNode {
    /// Terminal region that hosts at most one room
    Leaf { region: Rect },
    /// Region split in two around a reserved boundary strip
    Internal {
        region: Rect,
        direction: Direction,
        /// Absolute x (horizontal) or y (vertical) of the boundary strip
        boundary: usize,
        left: NodeId,
        right: NodeId,
    },
}

impl PartitionNode {
    /// Area covered by this node
    pub const fn region(&self) -> Rect {
        match self {
            PartitionNode::Leaf { region } | PartitionNode::Internal { region, .. } => *region,
        }
    }

    pub const fn is_leaf(&self) -> bool {
        matches!(self, PartitionNode::Leaf { .. })
    }

    /// The reserved strip between the two children, if any
    pub const fn boundary_strip(&self) -> Option<Rect> {
        match *self {
            PartitionNode::Leaf { .. } => None,
            PartitionNode::Internal {
                region,
                direction: Direction::Horizontal,
                boundary,
                ..
            } => Some(Rect::new(boundary, region.y, 1, region.height)),
            PartitionNode::Internal {
                region,
                direction: Direction::Vertical,
                boundary,
                ..
            } => Some(Rect::new(region.x, boundary, region.width, 1)),
        }
    }
}

/// Binary tree of regions, stored in an arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionTree {
    nodes: Vec<PartitionNode>,
    root: NodeId,
}

impl PartitionTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    pub fn internal_count(&self) -> usize {
        self.nodes.len() - self.leaf_count()
    }

    /// Number of levels below the root (0 for a lone leaf)
    pub fn depth(&self) -> usize {
        self.depth_below(self.root)
    }

    fn depth_below(&self, id: NodeId) -> usize {
        match self[id] {
            PartitionNode::Leaf { .. } => 0,
            PartitionNode::Internal { left, right, .. } => {
                1 + self.depth_below(left).max(self.depth_below(right))
            }
        }
    }

    /// Node ids in visiting order: left subtree, right subtree, then self
    pub fn post_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        self.visit(self.root, &mut order);
        order
    }

    fn visit(&self, id: NodeId, order: &mut Vec<NodeId>) {
        if let PartitionNode::Internal { left, right, .. } = self[id] {
            self.visit(left, order);
            self.visit(right, order);
        }
        order.push(id);
    }

    /// Leaf ids in visiting order
    pub fn leaves(&self) -> Vec<NodeId> {
        self.post_order()
            .into_iter()
            .filter(|&id| self[id].is_leaf())
            .collect()
    }

    /// Internal node ids, deepest first, root last
    pub fn internal_nodes(&self) -> Vec<NodeId> {
        self.post_order()
            .into_iter()
            .filter(|&id| !self[id].is_leaf())
            .collect()
    }

    /// First leaf visited in the subtree rooted at `id`
    pub fn first_leaf(&self, mut id: NodeId) -> NodeId {
        while let PartitionNode::Internal { left, .. } = self[id] {
            id = left;
        }
        id
    }

    /// Last leaf visited in the subtree rooted at `id`
    pub fn last_leaf(&self, mut id: NodeId) -> NodeId {
        while let PartitionNode::Internal { right, .. } = self[id] {
            id = right;
        }
        id
    }
}

impl Index<NodeId> for PartitionTree {
    type Output = PartitionNode;

    fn index(&self, id: NodeId) -> &PartitionNode {
        &self.nodes[id.0]
    }
}

/// Builds partition trees under a set of size constraints
#[derive(Debug, Clone, Copy)]
pub struct Partitioner<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> Partitioner<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Check if a region is wide enough to split by a column
    pub fn can_split_horizontally(&self, region: &Rect) -> bool {
        region.width > self.config.split_threshold_width()
    }

    /// Check if a region is tall enough to split by a row
    pub fn can_split_vertically(&self, region: &Rect) -> bool {
        region.height > self.config.split_threshold_height()
    }

    /// Partition `region` into a full tree
    pub fn build<R: RandomSource>(&self, region: Rect, rng: &mut R) -> PartitionTree {
        let mut nodes = Vec::new();
        let root = self.split(region, &mut nodes, rng);
        PartitionTree { nodes, root }
    }

    fn split<R: RandomSource>(
        &self,
        region: Rect,
        nodes: &mut Vec<PartitionNode>,
        rng: &mut R,
    ) -> NodeId {
        let mut feasible = Vec::with_capacity(2);
        if self.can_split_horizontally(&region) {
            feasible.push(Direction::Horizontal);
        }
        if self.can_split_vertically(&region) {
            feasible.push(Direction::Vertical);
        }

        let Some(direction) = rng.choose(&feasible) else {
            return push(nodes, PartitionNode::Leaf { region });
        };

        let (extent, min_child) = match direction {
            Direction::Horizontal => (region.width, self.config.min_region_width()),
            Direction::Vertical => (region.height, self.config.min_region_height()),
        };
        let Some((low, high)) = split_bounds(extent, min_child) else {
            return push(nodes, PartitionNode::Leaf { region });
        };
        let offset = rng.range_inclusive(low, high);

        let (left_region, right_region, boundary) = match direction {
            Direction::Horizontal => (
                Rect::new(region.x, region.y, offset, region.height),
                Rect::new(
                    region.x + offset + 1,
                    region.y,
                    region.width - offset - 1,
                    region.height,
                ),
                region.x + offset,
            ),
            Direction::Vertical => (
                Rect::new(region.x, region.y, region.width, offset),
                Rect::new(
                    region.x,
                    region.y + offset + 1,
                    region.width,
                    region.height - offset - 1,
                ),
                region.y + offset,
            ),
        };
        trace!(?region, %direction, boundary, "split region");

        let left = self.split(left_region, nodes, rng);
        let right = self.split(right_region, nodes, rng);
        push(
            nodes,
            PartitionNode::Internal {
                region,
                direction,
                boundary,
                left,
                right,
            },
        )
    }
}

fn push(nodes: &mut Vec<PartitionNode>, node: PartitionNode) -> NodeId {
    nodes.push(node);
    NodeId(nodes.len() - 1)
}

/// Range of boundary offsets that leaves each side at least `min_child`
/// cells plus one spare, or None if the range is inverted.
fn split_bounds(extent: usize, min_child: usize) -> Option<(usize, usize)> {
    let low = min_child + 1;
    let high = extent.checked_sub(min_child + 1)?;
    (low <= high).then_some((low, high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::DungeonRng;
    use crate::rng::testing::ScriptedSource;

    fn check_tree(tree: &PartitionTree, config: &GeneratorConfig) {
        for id in tree.post_order() {
            let node = tree[id];
            let region = node.region();
            assert!(region.width >= config.min_region_width(), "{id} too narrow");
            assert!(region.height >= config.min_region_height(), "{id} too short");

            let PartitionNode::Internal { left, right, .. } = node else {
                continue;
            };
            let left = tree[left].region();
            let right = tree[right].region();
            let strip = node.boundary_strip().unwrap();

            assert!(region.contains(&left));
            assert!(region.contains(&right));
            assert!(region.contains(&strip));
            assert!(!left.intersects(&right));
            assert!(!left.intersects(&strip));
            assert!(!right.intersects(&strip));
            assert_eq!(left.area() + right.area() + strip.area(), region.area());
        }
    }

    #[test]
    fn test_small_region_is_leaf() {
        let config = GeneratorConfig::default();
        let mut rng = DungeonRng::new(1);
        let tree = Partitioner::new(&config).build(Rect::new(0, 0, 11, 11), &mut rng);
        assert_eq!(tree.nodes.len(), 1);
        assert!(tree[tree.root()].is_leaf());
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_single_split() {
        let config = GeneratorConfig::default();
        // Only a column split is feasible; the offset range is exactly 6..=6
        let mut rng = ScriptedSource::new(&[0, 6]);
        let tree = Partitioner::new(&config).build(Rect::new(0, 0, 12, 8), &mut rng);
        assert_eq!(rng.remaining(), 0);

        assert_eq!(tree.internal_count(), 1);
        assert_eq!(tree.leaf_count(), 2);
        match tree[tree.root()] {
            PartitionNode::Internal {
                direction,
                boundary,
                left,
                right,
                ..
            } => {
                assert_eq!(direction, Direction::Horizontal);
                assert_eq!(boundary, 6);
                assert_eq!(tree[left].region(), Rect::new(0, 0, 6, 8));
                assert_eq!(tree[right].region(), Rect::new(7, 0, 5, 8));
            }
            PartitionNode::Leaf { .. } => panic!("root should be split"),
        }
    }

    #[test]
    fn test_vertical_split_uses_rows() {
        let config = GeneratorConfig::default();
        let mut rng = ScriptedSource::new(&[0, 7]);
        let tree = Partitioner::new(&config).build(Rect::new(2, 3, 9, 14), &mut rng);

        let PartitionNode::Internal {
            direction,
            boundary,
            left,
            right,
            ..
        } = tree[tree.root()]
        else {
            panic!("root should be split");
        };
        assert_eq!(direction, Direction::Vertical);
        assert_eq!(boundary, 10);
        assert_eq!(tree[left].region(), Rect::new(2, 3, 9, 7));
        assert_eq!(tree[right].region(), Rect::new(2, 11, 9, 6));
    }

    #[test]
    fn test_children_partition_parent() {
        let config = GeneratorConfig::default();
        for seed in 0..20 {
            let mut rng = DungeonRng::new(seed);
            let tree = Partitioner::new(&config).build(Rect::new(0, 0, 80, 40), &mut rng);
            assert!(tree.leaf_count() > 1);
            assert_eq!(tree.internal_count() + 1, tree.leaf_count());
            check_tree(&tree, &config);
        }
    }

    #[test]
    fn test_post_order_children_first() {
        let config = GeneratorConfig::default();
        let mut rng = DungeonRng::new(99);
        let tree = Partitioner::new(&config).build(Rect::new(0, 0, 60, 60), &mut rng);

        let order = tree.post_order();
        assert_eq!(order.len(), tree.nodes.len());
        assert_eq!(*order.last().unwrap(), tree.root());

        let position = |id: NodeId| order.iter().position(|&o| o == id).unwrap();
        for &id in &order {
            if let PartitionNode::Internal { left, right, .. } = tree[id] {
                assert!(position(left) < position(right));
                assert!(position(right) < position(id));
            }
        }
    }

    #[test]
    fn test_anchor_leaves_touch_boundary() {
        let config = GeneratorConfig::default();
        for seed in 0..10 {
            let mut rng = DungeonRng::new(seed);
            let tree = Partitioner::new(&config).build(Rect::new(0, 0, 70, 50), &mut rng);

            for id in tree.internal_nodes() {
                let PartitionNode::Internal {
                    direction,
                    boundary,
                    left,
                    right,
                    ..
                } = tree[id]
                else {
                    unreachable!();
                };
                let last = tree[tree.last_leaf(left)].region();
                let first = tree[tree.first_leaf(right)].region();
                match direction {
                    Direction::Horizontal => {
                        assert_eq!(last.right(), boundary);
                        assert_eq!(first.x, boundary + 1);
                    }
                    Direction::Vertical => {
                        assert_eq!(last.bottom(), boundary);
                        assert_eq!(first.y, boundary + 1);
                    }
                }
            }

            let leaves = tree.leaves();
            assert_eq!(leaves.first(), Some(&tree.first_leaf(tree.root())));
            assert_eq!(leaves.last(), Some(&tree.last_leaf(tree.root())));
        }
    }

    #[test]
    fn test_split_bounds() {
        assert_eq!(split_bounds(12, 5), Some((6, 6)));
        assert_eq!(split_bounds(20, 5), Some((6, 14)));
        assert_eq!(split_bounds(11, 5), None);
        assert_eq!(split_bounds(3, 5), None);
    }

    #[test]
    fn test_direction_coordinates() {
        assert_eq!(Direction::Horizontal.along(3, 7), 3);
        assert_eq!(Direction::Horizontal.across(3, 7), 7);
        assert_eq!(Direction::Vertical.along(3, 7), 7);
        assert_eq!(Direction::Vertical.point(7, 3), (3, 7));
    }
}
