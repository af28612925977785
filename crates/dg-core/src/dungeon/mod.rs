//! Dungeon system
//!
//! Contains the cell grid, region views, the BSP partition tree, room
//! carving, corridor joining and text rendering.

mod cell;
mod corridor;
mod generation;
mod grid;
mod partition;
mod rect;
mod render;
mod room;

pub use cell::CellType;
pub use corridor::{CorridorConnector, Side};
pub use generation::Dungeon;
pub use grid::{Grid, Region, RegionMut};
pub use partition::{Direction, NodeId, PartitionNode, PartitionTree, Partitioner};
pub use rect::Rect;
pub use render::RenderStyle;
pub use room::{Room, RoomCarver};
