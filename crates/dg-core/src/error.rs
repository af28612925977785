//! Generation errors
//!
//! Generation is all-or-nothing: any error aborts the run and no partial
//! grid is returned.

use thiserror::Error;

use crate::dungeon::{NodeId, Side};

/// Errors that can occur while configuring or generating a dungeon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DungeonError {
    #[error(
        "Grid {width}x{height} is too small: at least {min_width}x{min_height} is needed for one room"
    )]
    GridTooSmall {
        width: usize,
        height: usize,
        min_width: usize,
        min_height: usize,
    },

    #[error("Invalid generator configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Could not parse generator configuration: {0}")]
    ConfigParse(String),

    /// A subtree had no room cell to anchor a corridor on. The size
    /// constraints make this unreachable for supported grid sizes.
    #[error("No room cell found in the {side} subtree of node {node}")]
    MissingAnchor { node: NodeId, side: Side },
}

impl DungeonError {
    /// True for errors caused by the requested size or configuration
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            DungeonError::GridTooSmall { .. }
                | DungeonError::InvalidConfig { .. }
                | DungeonError::ConfigParse(_)
        )
    }
}
