//! Dungeon generation
//!
//! Runs the whole pipeline in one pass: partition the grid, carve a room in
//! every leaf, then join every internal node bottom-up. The partition tree
//! is dropped once carving is done.

use std::fmt;

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::DungeonError;
use crate::rng::{DungeonRng, RandomSource};

use super::cell::CellType;
use super::corridor::CorridorConnector;
use super::grid::Grid;
use super::partition::Partitioner;
use super::render::RenderStyle;
use super::room::{Room, RoomCarver};

/// A fully generated dungeon
///
/// Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dungeon {
    grid: Grid,
    rooms: Vec<Room>,
    leaf_count: usize,
}

impl Dungeon {
    /// Generate a dungeon with the default configuration and a random seed
    pub fn new(width: usize, height: usize) -> Result<Self, DungeonError> {
        let mut rng = DungeonRng::from_entropy();
        debug!(seed = rng.seed(), "seeded from entropy");
        Self::generate(width, height, &GeneratorConfig::default(), &mut rng)
    }

    /// Generate a dungeon with the default configuration from a fixed seed
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self, DungeonError> {
        Self::generate(
            width,
            height,
            &GeneratorConfig::default(),
            &mut DungeonRng::new(seed),
        )
    }

    /// Generate a dungeon.
    ///
    /// Fails if the configuration is invalid, if the grid cannot host a
    /// single room, or if a corridor finds no room to start from.
    pub fn generate<R: RandomSource>(
        width: usize,
        height: usize,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Result<Self, DungeonError> {
        config.validate()?;
        config.check_grid_size(width, height)?;

        let mut grid = Grid::new(width, height);
        let tree = Partitioner::new(config).build(grid.bounds(), rng);
        debug!(
            width,
            height,
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            "partitioned grid"
        );

        let carver = RoomCarver::new(config);
        let mut rooms = Vec::with_capacity(tree.leaf_count());
        for leaf in tree.leaves() {
            let mut region = grid.region_mut(tree[leaf].region());
            if let Some(room) = carver.carve(&mut region, rng) {
                rooms.push(room);
            }
        }
        debug!(rooms = rooms.len(), "carved rooms");

        CorridorConnector::new(&tree).connect_all(&mut grid)?;

        Ok(Self {
            grid,
            rooms,
            leaf_count: tree.leaf_count(),
        })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the cell at a position, or None outside the map
    pub fn cell(&self, x: usize, y: usize) -> Option<CellType> {
        self.grid.get(x, y)
    }

    /// Carved rooms, in leaf visiting order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of leaves the grid was partitioned into
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of walkable cells
    pub fn floor_count(&self) -> usize {
        self.grid.floor_count()
    }

    /// Number of 4-connected walkable components (1 for any valid dungeon)
    pub fn floor_components(&self) -> usize {
        self.grid.floor_components()
    }

    /// Render as text, one line per row
    pub fn render(&self, style: &RenderStyle) -> String {
        style.render(&self.grid)
    }
}

impl fmt::Display for Dungeon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderStyle::default()))
    }
}
