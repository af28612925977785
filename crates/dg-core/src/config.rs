//! Generator configuration
//!
//! One object carries every size constraint the partitioner and the room
//! carver sample under.

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_ROOM_HEIGHT, MIN_ROOM_WIDTH, ROOM_MARGIN};
use crate::error::DungeonError;

/// Size constraints for rooms and the regions that host them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub min_room_width: usize,
    pub min_room_height: usize,
    /// Wall gutter between a room and its region boundary
    pub room_margin: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_room_width: MIN_ROOM_WIDTH,
            min_room_height: MIN_ROOM_HEIGHT,
            room_margin: ROOM_MARGIN,
        }
    }
}

impl GeneratorConfig {
    /// Parse a JSON configuration. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, DungeonError> {
        let config: GeneratorConfig =
            serde_json::from_str(json).map_err(|e| DungeonError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DungeonError> {
        if self.min_room_width == 0 {
            return Err(DungeonError::InvalidConfig {
                reason: "min_room_width must be at least 1".to_string(),
            });
        }
        if self.min_room_height == 0 {
            return Err(DungeonError::InvalidConfig {
                reason: "min_room_height must be at least 1".to_string(),
            });
        }
        if self.room_margin == 0 {
            return Err(DungeonError::InvalidConfig {
                reason: "room_margin must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Narrowest region that can still host a room
    pub const fn min_region_width(&self) -> usize {
        self.min_room_width + 2 * self.room_margin
    }

    /// Shortest region that can still host a room
    pub const fn min_region_height(&self) -> usize {
        self.min_room_height + 2 * self.room_margin
    }

    /// A region wider than this can be split by a column
    pub const fn split_threshold_width(&self) -> usize {
        2 * self.min_region_width() + 1
    }

    /// A region taller than this can be split by a row
    pub const fn split_threshold_height(&self) -> usize {
        2 * self.min_region_height() + 1
    }

    /// Check that a grid of this size hosts at least one room
    pub fn check_grid_size(&self, width: usize, height: usize) -> Result<(), DungeonError> {
        let min_width = self.min_region_width();
        let min_height = self.min_region_height();
        if width < min_width || height < min_height {
            return Err(DungeonError::GridTooSmall {
                width,
                height,
                min_width,
                min_height,
            });
        }
        Ok(())
    }
}
