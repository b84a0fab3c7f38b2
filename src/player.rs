use log::debug;
use rand::Rng;

use crate::{
    ai::{TargetMode, Targeting},
    board::Gameboard,
    common::{AttackError, AttackReport, Coord, PlacementError},
    config::DEFAULT_BOARD_SIZE,
    ship::ShipDef,
};

/// Who is driving a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerKind {
    Human,
    Computer,
}

/// A side in the game: its own board plus targeting memory for attacks
/// against the opponent.
#[derive(Debug, Clone)]
pub struct Player {
    kind: PlayerKind,
    gameboard: Gameboard,
    targeting: Targeting,
}

impl Player {
    /// Create a player with an empty board of the default size.
    pub fn new(kind: PlayerKind) -> Self {
        Self::with_board_size(kind, DEFAULT_BOARD_SIZE)
    }

    pub fn with_board_size(kind: PlayerKind, size: usize) -> Self {
        Self {
            kind,
            gameboard: Gameboard::new(size),
            targeting: Targeting::new(),
        }
    }

    pub fn human() -> Self {
        Self::new(PlayerKind::Human)
    }

    pub fn computer() -> Self {
        Self::new(PlayerKind::Computer)
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn gameboard(&self) -> &Gameboard {
        &self.gameboard
    }

    pub fn gameboard_mut(&mut self) -> &mut Gameboard {
        &mut self.gameboard
    }

    /// Own hits not yet resolved into a sunk ship, most recent last.
    pub fn previous_hits(&self) -> &[Coord] {
        self.targeting.previous_hits()
    }

    pub fn mode(&self) -> TargetMode {
        self.targeting.mode()
    }

    /// Replace the board with a fresh one of the same size and forget all leads.
    pub fn reset(&mut self) {
        self.gameboard = Gameboard::new(self.gameboard.size());
        self.targeting.clear();
    }

    /// Reset, then deploy `fleet` at random positions on the fresh board.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &[ShipDef],
    ) -> Result<(), PlacementError> {
        self.reset();
        self.gameboard.place_fleet(rng, fleet)
    }

    /// Pick a target on `enemy` with the hunt/target heuristic, attack it and
    /// update targeting memory from the outcome.
    pub fn random_attack<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        enemy: &mut Gameboard,
    ) -> Result<AttackReport, AttackError> {
        let coord = self.targeting.select(rng, enemy)?;
        let outcome = enemy.receive_attack(coord.x, coord.y)?;
        self.targeting.record(coord, outcome);
        debug!("{:?} attacked {}: {:?}", self.kind, coord, outcome);
        Ok(AttackReport { coord, outcome })
    }
}
