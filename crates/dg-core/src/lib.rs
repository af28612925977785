//! dg-core: binary space partitioning dungeon generator
//!
//! Splits a rectangular grid into a tree of regions, carves one room per
//! leaf and joins sibling subtrees bottom-up with L-shaped corridors.
//!
//! This crate contains no I/O. Rendering to text is provided, printing is
//! left to callers (see the `dg-cli` crate).

pub mod config;
pub mod dungeon;
pub mod error;

mod consts;
mod rng;

pub use config::GeneratorConfig;
pub use consts::*;
pub use dungeon::{Dungeon, RenderStyle};
pub use error::DungeonError;
pub use rng::{DungeonRng, RandomSource};
