//! Room carving
//!
//! Each leaf region hosts at most one rectangular room, inset from the
//! region's edges by the configured margin. The margin keeps rooms of
//! neighbouring leaves from ever touching directly.

use tracing::trace;

use crate::config::GeneratorConfig;
use crate::rng::RandomSource;

use super::cell::CellType;
use super::grid::RegionMut;
use super::rect::Rect;

/// A carved room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    /// Absolute bounds of the room's floor
    pub bounds: Rect,
    /// The leaf region the room was carved in
    pub region: Rect,
}

impl Room {
    /// Get the center of the room
    pub fn center(&self) -> (usize, usize) {
        (
            self.bounds.x + self.bounds.width / 2,
            self.bounds.y + self.bounds.height / 2,
        )
    }

    pub fn area(&self) -> usize {
        self.bounds.area()
    }
}

/// Carves one room per leaf region
#[derive(Debug, Clone, Copy)]
pub struct RoomCarver<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> RoomCarver<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Check if a region is large enough for the smallest room
    pub fn fits(&self, region: &Rect) -> bool {
        region.width >= self.config.min_region_width()
            && region.height >= self.config.min_region_height()
    }

    /// Carve a random room inside `region`.
    ///
    /// Returns None and leaves the region untouched if it is too small to
    /// host a room with its margin.
    pub fn carve<R: RandomSource>(&self, region: &mut RegionMut<'_>, rng: &mut R) -> Option<Room> {
        let area = region.rect();
        if !self.fits(&area) {
            trace!(?area, "region too small for a room");
            return None;
        }

        let margin = self.config.room_margin;
        let width = rng.range_inclusive(self.config.min_room_width, area.width - 2 * margin);
        let height = rng.range_inclusive(self.config.min_room_height, area.height - 2 * margin);
        let x = rng.range_inclusive(margin, area.width - (width + margin));
        let y = rng.range_inclusive(margin, area.height - (height + margin));

        let local = Rect::new(x, y, width, height);
        let mut floor = region.sub_region(local);
        floor.fill(CellType::Room);

        let room = Room {
            bounds: floor.rect(),
            region: area,
        };
        trace!(bounds = ?room.bounds, "carved room");
        Some(room)
    }
}
