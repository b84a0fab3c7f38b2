use alloc::vec::Vec;

use crate::ship::ShipDef;

pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Largest supported board edge. Larger requests are clamped by
/// `Gameboard::new` and refused by `Gameboard::try_new`.
pub const MAX_BOARD_SIZE: usize = 64;

pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Carrier", 5),
    ShipDef::new("Battleship", 4),
    ShipDef::new("Cruiser", 3),
    ShipDef::new("Submarine", 3),
    ShipDef::new("Destroyer", 2),
];

/// Random head/orientation candidates tried per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Random coordinates sampled in hunt mode before falling back to a scan of
/// the remaining untried cells.
pub const MAX_TARGET_ATTEMPTS: usize = 200;

/// Runtime settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub fleet: Vec<ShipDef>,
}

impl GameConfig {
    pub fn new(board_size: usize, fleet: Vec<ShipDef>) -> Self {
        Self { board_size, fleet }
    }

    /// Look up a fleet entry by its name.
    pub fn ship_def(&self, name: &str) -> Option<ShipDef> {
        self.fleet.iter().copied().find(|def| def.name() == name)
    }

    /// Total number of cells covered by the whole fleet.
    pub fn fleet_cells(&self) -> usize {
        self.fleet.iter().map(|def| def.length()).sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, FLEET.to_vec())
    }
}
