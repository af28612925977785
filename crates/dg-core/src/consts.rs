//! Generator constants
//!
//! Defaults for [`GeneratorConfig`](crate::GeneratorConfig) and the text
//! renderer.

/// Smallest room width a leaf may carve
pub const MIN_ROOM_WIDTH: usize = 3;

/// Smallest room height a leaf may carve
pub const MIN_ROOM_HEIGHT: usize = 3;

/// Wall gutter between a room and the edge of its region
pub const ROOM_MARGIN: usize = 1;

/// Map symbols
pub const S_WALL: char = '■';
pub const S_ROOM: char = ' ';
pub const S_CORRIDOR: char = ' ';
