//! Map cell types

use strum::{Display, EnumIter};

/// Cell state
///
/// Cells only move forward: `Wall -> Room`, or `Wall -> Corridor -> Floor`.
/// `Corridor` marks cells reserved by a corridor that is still being
/// joined; no `Corridor` cell survives generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[repr(u8)]
pub enum CellType {
    #[default]
    Wall = 0,
    Room = 1,
    Corridor = 2,
    Floor = 3,
}

impl CellType {
    /// Check if this cell can be walked on
    pub const fn is_floor(&self) -> bool {
        matches!(self, CellType::Room | CellType::Corridor | CellType::Floor)
    }

    /// Check if a cell in this state may move to `next`
    pub const fn can_become(&self, next: CellType) -> bool {
        matches!(
            (self, next),
            (CellType::Wall, CellType::Room)
                | (CellType::Wall, CellType::Corridor)
                | (CellType::Corridor, CellType::Floor)
        )
    }

    /// Check if no further transition is possible
    pub const fn is_terminal(&self) -> bool {
        matches!(self, CellType::Room | CellType::Floor)
    }
}
